use std::io;
use std::path::Path;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Assemble the snapshot page: the three rendered fragments, each in its
/// fixed container region, plus the active filter and a render timestamp.
pub fn render_page(
    brigades_html: &str,
    submissions_html: &str,
    combined_html: &str,
    query: &str,
) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Brigade board</title>
<style>
.row {{ display: flex; border-bottom: 1px solid #ddd; padding: 4px 0; }}
.delete-col {{ width: 2em; color: #a00; }}
.col1 {{ width: 16em; }}
.col2 {{ width: 10em; }}
.col3 {{ width: 12em; }}
</style>
</head>
<body>
<h1>Brigade board</h1>
<p>Generated at {generated}. Active filter: "{query}"</p>
<h2>Brigades</h2>
<div id="brigades-container">
{brigades_html}</div>
<h2>Submissions</h2>
<div id="submitions-container">
{submissions_html}</div>
<h2>All</h2>
<div id="all-container">
{combined_html}</div>
</body>
</html>
"#
    )
}

pub fn write_page(path: &Path, html: &str) -> io::Result<()> {
    std::fs::write(path, html)
}
