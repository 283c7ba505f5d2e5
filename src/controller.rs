use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::api::{self, MutationOutcome};
use crate::cli::Opts;
use crate::page;
use crate::render;
use crate::session::Session;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// A single operator action, parsed from one console line.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Reload,
    Search(String),
    CreateBrigade { num: i64, students: String },
    DeleteBrigade { num: i64 },
    SubmitLab { fields: Vec<(String, String)> },
    DeleteSubmission { brigade_num: String, lab_num: String, date: String },
    Quit,
}

pub fn parse_event(line: &str) -> Option<Event> {
    let trimmed = line.trim();
    let mut tokens = trimmed.split_whitespace();
    match tokens.next()? {
        "reload" => Some(Event::Reload),
        "quit" | "exit" => Some(Event::Quit),
        "search" => {
            let query = trimmed.strip_prefix("search").unwrap_or("").trim();
            Some(Event::Search(query.to_string()))
        }
        "brigade" => match tokens.next()? {
            "add" => {
                let num = tokens.next()?.parse().ok()?;
                let students = tokens.collect::<Vec<_>>().join(" ");
                Some(Event::CreateBrigade { num, students })
            }
            "rm" => {
                let num = tokens.next()?.parse().ok()?;
                Some(Event::DeleteBrigade { num })
            }
            _ => None,
        },
        "lab" => match tokens.next()? {
            "submit" => {
                let fields = tokens
                    .filter_map(|token| {
                        token
                            .split_once('=')
                            .map(|(key, value)| (key.to_string(), value.to_string()))
                    })
                    .collect();
                Some(Event::SubmitLab { fields })
            }
            "rm" => {
                let brigade_num = tokens.next()?.to_string();
                let lab_num = tokens.next()?.to_string();
                let date = tokens.next()?.to_string();
                Some(Event::DeleteSubmission {
                    brigade_num,
                    lab_num,
                    date,
                })
            }
            _ => None,
        },
        _ => None,
    }
}

/// Fill in today's date when the submit form left the `date` field out.
pub(crate) fn with_default_date(
    mut fields: Vec<(String, String)>,
    today: &str,
) -> Vec<(String, String)> {
    if !fields.iter().any(|(key, _)| key == "date") {
        fields.push(("date".to_string(), today.to_string()));
    }
    fields
}

pub(crate) fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    parse_confirmation(&answer)
}

/// The console stand-in for the blocking alert dialog.
fn alert(text: &str) {
    eprintln!("!! {text}");
}

fn usage() {
    println!("Commands:");
    println!("  search [text]");
    println!("  brigade add <num> <students>");
    println!("  brigade rm <num>");
    println!("  lab submit <key>=<value> ...");
    println!("  lab rm <brigade> <lab> <date>");
    println!("  reload | quit");
}

/// Re-fetch both lists and rewrite all three page regions.
async fn reload(session: &Session, page_path: &Path, query: &str) -> io::Result<()> {
    let brigades = api::fetch_brigades(session).await;
    let submissions = api::fetch_submissions(session).await;
    let html = page::render_page(
        &render::brigade_rows(&brigades),
        &render::submission_rows(&submissions),
        &render::combined_rows(&brigades, &submissions, query),
        query,
    );
    page::write_page(page_path, &html)?;
    log::info!(
        "Rendered {} brigades and {} submissions to {}.",
        brigades.len(),
        submissions.len(),
        page_path.display()
    );
    Ok(())
}

/// The event loop. One event at a time: every API call is awaited to
/// completion before the next line is read, and every mutation is
/// followed by a full reload with the default (empty) query.
pub async fn run(opts: &Opts) -> Result<(), Box<dyn Error>> {
    let session = Session::new(&opts.server)?;
    let page_path = Path::new(&opts.page);

    // Initial page load.
    reload(&session, page_path, "").await?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let event = match parse_event(&line) {
            Some(event) => event,
            None => {
                if !line.trim().is_empty() {
                    usage();
                }
                continue;
            }
        };
        match event {
            Event::Quit => break,
            Event::Reload => reload(&session, page_path, "").await?,
            Event::Search(query) => reload(&session, page_path, &query).await?,
            Event::CreateBrigade { num, students } => {
                match api::create_brigade(&session, num, &students).await {
                    MutationOutcome::Applied(body) => log::debug!("Create response: {}", body),
                    MutationOutcome::Rejected(detail) => alert(&detail),
                    MutationOutcome::Failed(err) => log::error!("Create request failed: {}", err),
                }
                reload(&session, page_path, "").await?;
            }
            Event::SubmitLab { fields } => {
                let today = chrono::Local::now().format("%d.%m.%Y").to_string();
                let fields = with_default_date(fields, &today);
                match api::submit_lab(&session, &fields).await {
                    MutationOutcome::Applied(body) => log::debug!("Submit response: {}", body),
                    MutationOutcome::Rejected(detail) => alert(&detail),
                    MutationOutcome::Failed(err) => log::error!("Submit request failed: {}", err),
                }
                reload(&session, page_path, "").await?;
            }
            Event::DeleteBrigade { num } => {
                let id = render::brigade_row_id(num);
                if !confirm(&format!(
                    "Are you sure you want to delete this brigade ({id})?"
                )) {
                    continue;
                }
                match api::delete_brigade(&session, &id).await {
                    MutationOutcome::Applied(message) => {
                        log::info!("{}", message);
                        reload(&session, page_path, "").await?;
                    }
                    MutationOutcome::Rejected(detail) => {
                        log::warn!("Brigade delete refused: {}", detail);
                    }
                    MutationOutcome::Failed(err) => {
                        log::error!("Brigade delete request failed: {}", err);
                    }
                }
            }
            Event::DeleteSubmission {
                brigade_num,
                lab_num,
                date,
            } => {
                let id = render::submission_id(&brigade_num, &lab_num, &date);
                if !confirm(&format!(
                    "Are you sure you want to delete this submission ({id})?"
                )) {
                    continue;
                }
                match api::delete_submission(&session, &id).await {
                    MutationOutcome::Applied(message) => {
                        log::info!("{}", message);
                        reload(&session, page_path, "").await?;
                    }
                    MutationOutcome::Rejected(detail) => {
                        log::warn!("Submission delete refused: {}", detail);
                    }
                    MutationOutcome::Failed(err) => {
                        log::error!("Submission delete request failed: {}", err);
                    }
                }
            }
        }
    }

    log::info!("Console closed.");
    Ok(())
}
