use crate::api::{Brigade, Submission};
use crate::filter;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Row id for a brigade, also the server-side document id.
pub fn brigade_row_id(num: i64) -> String {
    format!("brig{num}")
}

/// Row id for a submission, synthesized from its natural key. The same
/// shape the server uses as document id, so a delete sent with this id
/// hits the row it was read from.
pub fn submission_id(brigade_num: &str, lab_num: &str, date: &str) -> String {
    format!("submission_{brigade_num}_{lab_num}_{date}")
}

pub fn submission_row_id(submission: &Submission) -> String {
    submission_id(
        &submission.brigade_num.to_string(),
        &submission.lab_num.to_string(),
        &submission.submission_date,
    )
}

/// One row per brigade: delete affordance, number, comma-joined roster.
pub fn brigade_rows(brigades: &[Brigade]) -> String {
    let mut html = String::new();
    for brigade in brigades {
        let students = brigade.students.join(", ");
        let row_id = brigade_row_id(brigade.num);
        let num = brigade.num;
        html.push_str(&format!(
            r#"<div class="row">
    <div class="delete-col" data-target="{row_id}"><i class="lni lni-trash-3"></i></div>
    <div class="col1">{num}</div>
    <div class="col1">{students}</div>
</div>
"#
        ));
    }
    html
}

/// One row per submission: delete affordance, brigade number, lab number,
/// submission date.
pub fn submission_rows(submissions: &[Submission]) -> String {
    let mut html = String::new();
    for submission in submissions {
        let row_id = submission_row_id(submission);
        let brigade_num = submission.brigade_num;
        let lab_num = &submission.lab_num;
        let date = &submission.submission_date;
        html.push_str(&format!(
            r#"<div class="row">
    <div class="delete-col" data-target="{row_id}"><i class="lni lni-trash-3"></i></div>
    <div class="col2">{brigade_num}</div>
    <div class="col2">{lab_num}</div>
    <div class="col2">{date}</div>
</div>
"#
        ));
    }
    html
}

/// The combined view: each submission joined to its brigade's roster,
/// filtered by the query. Submissions without a brigade are skipped.
pub fn combined_rows(brigades: &[Brigade], submissions: &[Submission], query: &str) -> String {
    let mut html = String::new();
    for (brigade, submission) in filter::join_filtered(brigades, submissions, query) {
        let students = brigade.students.join(", ");
        let num = brigade.num;
        let lab_num = &submission.lab_num;
        let date = &submission.submission_date;
        html.push_str(&format!(
            r#"<div class="row">
    <div class="col3">{num}</div>
    <div class="col3">{lab_num}</div>
    <div class="col3">{date}</div>
    <div class="col3">{students}</div>
</div>
"#
        ));
    }
    html
}
