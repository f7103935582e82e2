//! HTML fragments for dynamically rendered content.
//!
//! Kept platform-free so the produced markup can be checked without a DOM;
//! the web frontend assigns these strings via `innerHTML`.

use crate::content::{real_url, JourneyStage, Project, Skill};

/// Fallback rendered into a section when its content fetch fails.
pub fn placeholder_html() -> &'static str {
    r#"<p class="error-text">Content unavailable</p>"#
}

pub fn tech_tags_html(technologies: &[String]) -> String {
    technologies
        .iter()
        .map(|t| format!(r#"<span class="tech-tag">{t}</span>"#))
        .collect()
}

pub fn project_card_html(project: &Project) -> String {
    let image = match &project.image_url {
        Some(url) => format!(
            r#"<img src="{url}" alt="{}" loading="lazy" class="project-img-el">"#,
            project.title
        ),
        None => format!(r#"<i class="{}"></i>"#, project.icon),
    };

    let mut buttons = String::new();
    if let Some(url) = real_url(&project.github_url) {
        buttons.push_str(&format!(
            r#"<a href="{url}" class="btn btn-small btn-secondary" target="_blank" rel="noopener noreferrer"><i class="fab fa-github"></i> GitHub</a>"#
        ));
    }
    if let Some(url) = real_url(&project.demo_url) {
        buttons.push_str(&format!(
            r#"<a href="{url}" class="btn btn-small btn-primary" target="_blank" rel="noopener noreferrer"><i class="fas fa-external-link-alt"></i> Live Demo</a>"#
        ));
    }

    format!(
        r#"<div class="project-card" data-project-id="{id}">
    <div class="project-image">{image}</div>
    <div class="project-content">
        <h3 class="project-title">{title}</h3>
        <p class="project-description">{description}</p>
        <div class="project-tech">{tech}</div>
        <div class="project-buttons">{buttons}</div>
    </div>
</div>"#,
        id = project.id,
        title = project.title,
        description = project.description,
        tech = tech_tags_html(&project.technologies),
    )
}

pub fn project_cards_html(projects: &[Project]) -> String {
    projects.iter().map(project_card_html).collect()
}

pub fn project_modal_html(project: &Project) -> String {
    let image = match &project.image_url {
        Some(url) => format!(
            r#"<img src="{url}" alt="{}" class="modal-img">"#,
            project.title
        ),
        None => String::new(),
    };
    let pills: String = project
        .technologies
        .iter()
        .map(|t| format!(r#"<span class="tech-pill">{t}</span>"#))
        .collect();

    let mut actions = String::new();
    if let Some(url) = real_url(&project.github_url) {
        actions.push_str(&format!(
            r#"<a href="{url}" target="_blank" class="btn btn-primary"><i class="fab fa-github"></i> GitHub</a>"#
        ));
    }
    if let Some(url) = real_url(&project.demo_url) {
        actions.push_str(&format!(
            r#"<a href="{url}" target="_blank" class="btn btn-secondary"><i class="fas fa-external-link-alt"></i> Live Demo</a>"#
        ));
    }

    format!(
        r#"<div class="modal-inner-content">
    {image}
    <h2 class="modal-title">{title}</h2>
    <p class="modal-desc">{description}</p>
    <div class="modal-tech-stack">{pills}</div>
    <div class="modal-actions">{actions}</div>
</div>"#,
        title = project.title,
        description = project.description,
    )
}

pub fn skill_item_html(skill: &Skill) -> String {
    format!(
        r#"<div class="skill-item"><i class="{}"></i><span>{}</span></div>"#,
        skill.icon, skill.name
    )
}

pub fn skills_html(skills: &[Skill]) -> String {
    skills.iter().map(skill_item_html).collect()
}

pub fn journey_stage_html(stage: &JourneyStage) -> String {
    let media = match &stage.image_url {
        Some(url) => format!(
            r#"<div class="journey-image-container"><img src="{url}" alt="{}" loading="lazy"></div>"#,
            stage.title
        ),
        None => format!(
            r#"<div class="journey-icon-container"><i class="{}"></i></div>"#,
            stage.icon
        ),
    };
    let meta = stage
        .meta
        .as_deref()
        .map(|m| format!(r#"<p class="journey-meta">{m}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="journey-stage">
    <div class="journey-stage-marker"></div>
    <div class="journey-stage-content">
        {media}
        <div class="journey-text">
            <h4>{title}</h4>
            {meta}
            <p>{description}</p>
        </div>
    </div>
</div>"#,
        title = stage.title,
        description = stage.description,
    )
}

pub fn journey_html(journey: &[JourneyStage]) -> String {
    journey.iter().map(journey_stage_html).collect()
}
