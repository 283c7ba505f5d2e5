use super::*;

#[test]
fn reload_and_quit_parse() {
    assert_eq!(parse_event("reload"), Some(Event::Reload));
    assert_eq!(parse_event("quit"), Some(Event::Quit));
    assert_eq!(parse_event("exit"), Some(Event::Quit));
}

#[test]
fn search_takes_the_rest_of_the_line() {
    assert_eq!(
        parse_event("search Al Bo"),
        Some(Event::Search("Al Bo".to_string()))
    );
}

#[test]
fn bare_search_means_match_all() {
    assert_eq!(parse_event("search"), Some(Event::Search(String::new())));
    assert_eq!(parse_event("search   "), Some(Event::Search(String::new())));
}

#[test]
fn brigade_add_keeps_the_raw_roster_string() {
    assert_eq!(
        parse_event("brigade add 3 John Doe, Jane Doe"),
        Some(Event::CreateBrigade {
            num: 3,
            students: "John Doe, Jane Doe".to_string(),
        })
    );
}

#[test]
fn brigade_rm_takes_a_number() {
    assert_eq!(parse_event("brigade rm 3"), Some(Event::DeleteBrigade { num: 3 }));
    assert_eq!(parse_event("brigade rm three"), None);
}

#[test]
fn lab_submit_collects_key_value_fields() {
    assert_eq!(
        parse_event("lab submit num=1 lab_num=2 date=01.01.2024"),
        Some(Event::SubmitLab {
            fields: vec![
                ("num".to_string(), "1".to_string()),
                ("lab_num".to_string(), "2".to_string()),
                ("date".to_string(), "01.01.2024".to_string()),
            ],
        })
    );
}

#[test]
fn lab_submit_ignores_tokens_without_an_equals_sign() {
    assert_eq!(
        parse_event("lab submit num=1 oops"),
        Some(Event::SubmitLab {
            fields: vec![("num".to_string(), "1".to_string())],
        })
    );
}

#[test]
fn lab_rm_takes_the_composite_key() {
    assert_eq!(
        parse_event("lab rm 1 2 01.01.2024"),
        Some(Event::DeleteSubmission {
            brigade_num: "1".to_string(),
            lab_num: "2".to_string(),
            date: "01.01.2024".to_string(),
        })
    );
    assert_eq!(parse_event("lab rm 1 2"), None);
}

#[test]
fn unknown_lines_parse_to_nothing() {
    assert_eq!(parse_event(""), None);
    assert_eq!(parse_event("   "), None);
    assert_eq!(parse_event("frobnicate"), None);
    assert_eq!(parse_event("brigade"), None);
    assert_eq!(parse_event("brigade destroy 1"), None);
}

#[test]
fn confirmation_accepts_only_explicit_yes() {
    assert!(parse_confirmation("y"));
    assert!(parse_confirmation("Y"));
    assert!(parse_confirmation("yes"));
    assert!(parse_confirmation(" YES \n"));
    // Everything else declines, so no request is sent.
    assert!(!parse_confirmation(""));
    assert!(!parse_confirmation("n"));
    assert!(!parse_confirmation("no"));
    assert!(!parse_confirmation("sure"));
}

#[test]
fn missing_date_field_is_filled_with_today() {
    let fields = vec![("num".to_string(), "1".to_string())];
    let filled = with_default_date(fields, "05.03.2024");
    assert_eq!(
        filled,
        vec![
            ("num".to_string(), "1".to_string()),
            ("date".to_string(), "05.03.2024".to_string()),
        ]
    );
}

#[test]
fn explicit_date_field_is_left_untouched() {
    let fields = vec![("date".to_string(), "01.01.2024".to_string())];
    let filled = with_default_date(fields.clone(), "05.03.2024");
    assert_eq!(filled, fields);
}
