use crate::api::{Brigade, Submission};

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Join each submission to its brigade by number, dropping submissions
/// whose brigade is missing, and keep only the rows passing the query.
/// Submission order is preserved.
pub fn join_filtered<'a>(
    brigades: &'a [Brigade],
    submissions: &'a [Submission],
    query: &str,
) -> Vec<(&'a Brigade, &'a Submission)> {
    submissions
        .iter()
        .filter_map(|submission| {
            let brigade = brigades
                .iter()
                .find(|brigade| brigade.num == submission.brigade_num)?;
            matches(brigade, submission, query).then_some((brigade, submission))
        })
        .collect()
}

/// The free-text predicate. Brigade number, lab number and date match on
/// exact case-insensitive equality; student names on substring. The empty
/// query therefore matches every row with at least one student.
pub fn matches(brigade: &Brigade, submission: &Submission, query: &str) -> bool {
    let query = query.to_lowercase();
    brigade.num.to_string().to_lowercase() == query
        || submission.lab_num.to_string().to_lowercase() == query
        || brigade
            .students
            .iter()
            .any(|student| student.to_lowercase().contains(&query))
        || submission.submission_date.to_lowercase() == query
}
