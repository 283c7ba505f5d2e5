use super::*;

#[test]
fn resolves_list_paths_against_the_base_url() {
    let session = Session::new("http://127.0.0.1:8000").unwrap();
    assert_eq!(
        session.resolve_single("brigades/all/").as_str(),
        "http://127.0.0.1:8000/brigades/all/"
    );
    assert_eq!(
        session.resolve_single("labs/submissions/").as_str(),
        "http://127.0.0.1:8000/labs/submissions/"
    );
}

#[test]
fn resolves_delete_paths_with_document_ids() {
    let session = Session::new("http://127.0.0.1:8000").unwrap();
    assert_eq!(
        session.resolve(vec!["brigades/remove/", "brig1"]).as_str(),
        "http://127.0.0.1:8000/brigades/remove/brig1"
    );
    assert_eq!(
        session
            .resolve(vec!["labs/submissions/remove/", "submission_1_2_01.01.2024"])
            .as_str(),
        "http://127.0.0.1:8000/labs/submissions/remove/submission_1_2_01.01.2024"
    );
}

#[test]
fn rejects_an_unparseable_server_url() {
    assert!(Session::new("not a url").is_err());
}
