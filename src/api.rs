use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::session::Session;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brigade {
    pub num: i64,
    pub students: Vec<String>,
}

/// Lab numbers come back as whatever JSON type the submitting form sent,
/// so both `2` and `"2"` must deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabNum {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for LabNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabNum::Number(num) => write!(f, "{}", num),
            LabNum::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub brigade_num: i64,
    pub lab_num: LabNum,
    pub submission_date: String,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

#[derive(Debug, Deserialize)]
struct DeleteReceipt {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Tagged result of a create/submit/delete round trip. `Applied` carries
/// the response body (or the extracted `message` for deletes), `Rejected`
/// the server's error detail, `Failed` a transport-level cause.
#[derive(Debug)]
pub enum MutationOutcome {
    Applied(String),
    Rejected(String),
    Failed(ApiError),
}

/// Fetch all brigades, sorted ascending by number. Any failure yields an
/// empty list; the cause only reaches the log.
pub async fn fetch_brigades(session: &Session) -> Vec<Brigade> {
    let url = session.resolve_single("brigades/all/");
    let response = match session.client().get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            log::warn!("Brigade list fetch failed: {}", err);
            return Vec::new();
        }
    };
    if response.status() != StatusCode::OK {
        log::warn!("Brigade list fetch returned {}.", response.status());
        return Vec::new();
    }
    match response.text().await {
        Ok(body) => brigades_from_body(&body),
        Err(err) => {
            log::warn!("Brigade list body unreadable: {}", err);
            Vec::new()
        }
    }
}

pub(crate) fn brigades_from_body(body: &str) -> Vec<Brigade> {
    let mut brigades: Vec<Brigade> = match serde_json::from_str(body) {
        Ok(brigades) => brigades,
        Err(err) => {
            log::warn!("Brigade list body did not parse: {}", err);
            return Vec::new();
        }
    };
    brigades.sort_by_key(|brigade| brigade.num);
    brigades
}

/// Fetch all submissions, sorted ascending by brigade number. Same silent
/// failure policy as `fetch_brigades`.
pub async fn fetch_submissions(session: &Session) -> Vec<Submission> {
    let url = session.resolve_single("labs/submissions/");
    let response = match session.client().get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            log::warn!("Submission list fetch failed: {}", err);
            return Vec::new();
        }
    };
    if response.status() != StatusCode::OK {
        log::warn!("Submission list fetch returned {}.", response.status());
        return Vec::new();
    }
    match response.text().await {
        Ok(body) => submissions_from_body(&body),
        Err(err) => {
            log::warn!("Submission list body unreadable: {}", err);
            Vec::new()
        }
    }
}

pub(crate) fn submissions_from_body(body: &str) -> Vec<Submission> {
    let mut submissions: Vec<Submission> = match serde_json::from_str(body) {
        Ok(submissions) => submissions,
        Err(err) => {
            log::warn!("Submission list body did not parse: {}", err);
            return Vec::new();
        }
    };
    submissions.sort_by_key(|submission| submission.brigade_num);
    submissions
}

/// Create a brigade. `students` is the raw comma-separated roster string;
/// the server splits it.
pub async fn create_brigade(session: &Session, num: i64, students: &str) -> MutationOutcome {
    let url = session.resolve_single("brigades/create");
    let body = serde_json::json!({ "num": num, "students": students });
    let response = match session.client().post(url).json(&body).send().await {
        Ok(response) => response,
        Err(err) => return MutationOutcome::Failed(err.into()),
    };
    read_mutation(response).await
}

/// Submit a lab completion. The fields are sent verbatim as a JSON object
/// of string values, one per form field.
pub async fn submit_lab(session: &Session, fields: &[(String, String)]) -> MutationOutcome {
    let url = session.resolve_single("labs/submit");
    let body: serde_json::Map<String, serde_json::Value> = fields
        .iter()
        .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
        .collect();
    let response = match session.client().post(url).json(&body).send().await {
        Ok(response) => response,
        Err(err) => return MutationOutcome::Failed(err.into()),
    };
    read_mutation(response).await
}

pub async fn delete_brigade(session: &Session, id: &str) -> MutationOutcome {
    delete(session, session.resolve(vec!["brigades/remove/", id])).await
}

pub async fn delete_submission(session: &Session, id: &str) -> MutationOutcome {
    delete(session, session.resolve(vec!["labs/submissions/remove/", id])).await
}

async fn delete(session: &Session, url: Url) -> MutationOutcome {
    let response = match session.client().delete(url).send().await {
        Ok(response) => response,
        Err(err) => return MutationOutcome::Failed(err.into()),
    };
    let status = response.status();
    match response.text().await {
        Ok(body) => delete_outcome(status, &body),
        Err(err) => MutationOutcome::Failed(err.into()),
    }
}

async fn read_mutation(response: reqwest::Response) -> MutationOutcome {
    let status = response.status();
    match response.text().await {
        Ok(body) => mutation_outcome(status, &body),
        Err(err) => MutationOutcome::Failed(err.into()),
    }
}

pub(crate) fn mutation_outcome(status: StatusCode, body: &str) -> MutationOutcome {
    if status == StatusCode::OK {
        MutationOutcome::Applied(body.to_string())
    } else {
        MutationOutcome::Rejected(error_detail(body))
    }
}

pub(crate) fn delete_outcome(status: StatusCode, body: &str) -> MutationOutcome {
    if status == StatusCode::OK {
        MutationOutcome::Applied(receipt_message(body))
    } else {
        MutationOutcome::Rejected(error_detail(body))
    }
}

fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorDetail>(body)
        .map(|error| error.detail)
        .unwrap_or_else(|_| body.to_string())
}

fn receipt_message(body: &str) -> String {
    serde_json::from_str::<DeleteReceipt>(body)
        .map(|receipt| receipt.message)
        .unwrap_or_else(|_| body.to_string())
}
