use site_core::content::{
    parse_journey, parse_projects, parse_skills, real_url, ContactMessage, ContentError,
    SubmissionRejection,
};

const PROJECTS_JSON: &str = r##"{
    "projects": [
        {
            "id": 1,
            "title": "Trail Mapper",
            "description": "Offline-first hiking maps.",
            "icon": "fas fa-map",
            "technologies": ["Rust", "WASM"],
            "githubUrl": "https://example.com/trail-mapper",
            "demoUrl": "#",
            "imageUrl": null
        },
        {
            "id": 2,
            "title": "Bird Feed",
            "description": "A birdwatching photo journal.",
            "icon": "fas fa-dove",
            "technologies": ["TypeScript"],
            "githubUrl": "#",
            "demoUrl": "https://example.com/birds",
            "imageUrl": "birds.jpg"
        }
    ]
}"##;

#[test]
fn parses_a_projects_file() {
    let projects = parse_projects(PROJECTS_JSON).unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].title, "Trail Mapper");
    assert_eq!(projects[0].technologies, vec!["Rust", "WASM"]);
    assert_eq!(projects[1].image_url.as_deref(), Some("birds.jpg"));
}

#[test]
fn blank_title_fails_validation() {
    let json = r#"{ "projects": [ { "id": 1, "title": "  ", "description": "d",
        "icon": "i", "technologies": [] } ] }"#;
    let err = parse_projects(json).unwrap_err();
    assert!(matches!(
        err,
        ContentError::MissingField { field: "title", index: 0, .. }
    ));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        parse_projects("{ not json"),
        Err(ContentError::Malformed(_))
    ));
}

#[test]
fn placeholder_links_count_as_absent() {
    assert_eq!(real_url(&Some("#".into())), None);
    assert_eq!(real_url(&Some("".into())), None);
    assert_eq!(real_url(&None), None);
    assert_eq!(real_url(&Some("https://x".into())), Some("https://x"));
}

#[test]
fn parses_skills_and_requires_names() {
    let skills = parse_skills(r#"{ "skills": [ { "icon": "fab fa-rust", "name": "Rust" } ] }"#)
        .unwrap();
    assert_eq!(skills[0].name, "Rust");

    let err = parse_skills(r#"{ "skills": [ { "icon": "i", "name": "" } ] }"#).unwrap_err();
    assert!(matches!(err, ContentError::MissingField { field: "name", .. }));
}

#[test]
fn journey_meta_and_image_are_optional() {
    let journey = parse_journey(
        r#"{ "journey": [
            { "title": "First job", "description": "Started out.", "icon": "fas fa-seedling" },
            { "title": "Big move", "meta": "2025", "description": "Relocated.",
              "icon": "fas fa-plane", "imageUrl": "move.jpg" }
        ] }"#,
    )
    .unwrap();
    assert_eq!(journey[0].meta, None);
    assert_eq!(journey[1].meta.as_deref(), Some("2025"));
    assert_eq!(journey[1].image_url.as_deref(), Some("move.jpg"));
}

#[test]
fn contact_message_requires_every_field() {
    let complete = ContactMessage {
        name: "A".into(),
        email: "a@b.c".into(),
        message: "hi".into(),
    };
    assert!(complete.is_complete());

    let empty_message = ContactMessage {
        message: "   ".into(),
        ..complete.clone()
    };
    assert!(!empty_message.is_complete(), "whitespace is not a message");
    assert!(!ContactMessage::default().is_complete());
}

#[test]
fn rejection_messages_are_joined_with_a_fallback() {
    let body: SubmissionRejection =
        serde_json::from_str(r#"{ "errors": [ { "message": "bad email" }, { "message": "too long" } ] }"#)
            .unwrap();
    assert_eq!(body.message(), "bad email, too long");

    let empty: SubmissionRejection = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.message(), "Submission failed.");
}
