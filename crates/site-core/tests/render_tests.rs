use site_core::content::{parse_projects, JourneyStage, Skill};
use site_core::render::{
    journey_stage_html, placeholder_html, project_card_html, project_cards_html,
    project_modal_html, skill_item_html,
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
            "demoUrl": "#"
        },
        {
            "id": 2,
            "title": "Bird Feed",
            "description": "A birdwatching photo journal.",
            "icon": "fas fa-dove",
            "technologies": ["TypeScript"],
            "imageUrl": "birds.jpg"
        }
    ]
}"##;

#[test]
fn two_projects_render_two_cards_with_their_data() {
    let projects = parse_projects(PROJECTS_JSON).unwrap();
    let html = project_cards_html(&projects);
    assert_eq!(html.matches(r#"class="project-card""#).count(), 2);
    assert!(html.contains("Trail Mapper"));
    assert!(html.contains("Offline-first hiking maps."));
    assert!(html.contains(r#"data-project-id="1""#));
    assert!(html.contains(r#"data-project-id="2""#));
    assert_eq!(html.matches(r#"<span class="tech-tag">"#).count(), 3);
}

#[test]
fn card_buttons_skip_placeholder_urls() {
    let projects = parse_projects(PROJECTS_JSON).unwrap();
    let card = project_card_html(&projects[0]);
    assert!(card.contains("https://example.com/trail-mapper"));
    assert!(!card.contains("Live Demo"), "demoUrl of # renders no button");
}

#[test]
fn card_prefers_image_over_icon() {
    let projects = parse_projects(PROJECTS_JSON).unwrap();
    let with_icon = project_card_html(&projects[0]);
    assert!(with_icon.contains(r#"<i class="fas fa-map"></i>"#));
    let with_image = project_card_html(&projects[1]);
    assert!(with_image.contains(r#"src="birds.jpg""#));
    assert!(!with_image.contains(r#"<i class="fas fa-dove"></i>"#));
}

#[test]
fn modal_shows_the_matching_project() {
    let projects = parse_projects(PROJECTS_JSON).unwrap();
    let html = project_modal_html(&projects[0]);
    assert!(html.contains(r#"<h2 class="modal-title">Trail Mapper</h2>"#));
    assert!(html.contains("Offline-first hiking maps."));
    assert_eq!(html.matches(r#"<span class="tech-pill">"#).count(), 2);
    assert!(html.contains("GitHub"));
    assert!(!html.contains("Live Demo"));
}

#[test]
fn skill_item_includes_icon_and_name() {
    let skill = Skill {
        icon: "fab fa-rust".into(),
        name: "Rust".into(),
    };
    let html = skill_item_html(&skill);
    assert!(html.contains(r#"<i class="fab fa-rust"></i>"#));
    assert!(html.contains("<span>Rust</span>"));
}

#[test]
fn journey_stage_falls_back_to_icon_and_omits_missing_meta() {
    let stage = JourneyStage {
        title: "First job".into(),
        meta: None,
        description: "Started out.".into(),
        icon: "fas fa-seedling".into(),
        image_url: None,
    };
    let html = journey_stage_html(&stage);
    assert!(html.contains("journey-icon-container"));
    assert!(!html.contains("journey-meta"));

    let with_media = JourneyStage {
        meta: Some("2025".into()),
        image_url: Some("move.jpg".into()),
        ..stage
    };
    let html = journey_stage_html(&with_media);
    assert!(html.contains("journey-image-container"));
    assert!(html.contains(r#"<p class="journey-meta">2025</p>"#));
}

#[test]
fn placeholder_names_the_failure() {
    assert!(placeholder_html().contains("Content unavailable"));
}
