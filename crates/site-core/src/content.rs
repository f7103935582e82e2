//! Typed records for the three fetched content files and the contact form.
//!
//! Required fields are presence-checked after parsing so malformed content
//! fails with a `ContentError` instead of silently rendering empty markup.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed content: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{kind}[{index}]: missing required field `{field}`")]
    MissingField {
        kind: &'static str,
        index: usize,
        field: &'static str,
    },
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
    pub icon: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStage {
    pub title: String,
    #[serde(default)]
    pub meta: Option<String>,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct SkillsFile {
    skills: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
struct JourneyFile {
    journey: Vec<JourneyStage>,
}

/// Treat empty and `#` placeholder links as absent.
pub fn real_url(url: &Option<String>) -> Option<&str> {
    match url.as_deref() {
        Some(u) if !u.is_empty() && u != "#" => Some(u),
        _ => None,
    }
}

pub fn parse_projects(text: &str) -> Result<Vec<Project>, ContentError> {
    let file: ProjectsFile = serde_json::from_str(text)?;
    for (i, p) in file.projects.iter().enumerate() {
        require("projects", i, "title", &p.title)?;
        require("projects", i, "description", &p.description)?;
    }
    Ok(file.projects)
}

pub fn parse_skills(text: &str) -> Result<Vec<Skill>, ContentError> {
    let file: SkillsFile = serde_json::from_str(text)?;
    for (i, s) in file.skills.iter().enumerate() {
        require("skills", i, "name", &s.name)?;
    }
    Ok(file.skills)
}

pub fn parse_journey(text: &str) -> Result<Vec<JourneyStage>, ContentError> {
    let file: JourneyFile = serde_json::from_str(text)?;
    for (i, s) in file.journey.iter().enumerate() {
        require("journey", i, "title", &s.title)?;
        require("journey", i, "description", &s.description)?;
    }
    Ok(file.journey)
}

fn require(
    kind: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::MissingField { kind, index, field })
    } else {
        Ok(())
    }
}

/// The three fields posted to the form endpoint.
#[derive(Clone, Debug, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// All fields present (trimmed non-empty); the precondition for
    /// attempting a submission at all.
    pub fn is_complete(&self) -> bool {
        ![&self.name, &self.email, &self.message]
            .iter()
            .any(|f| f.trim().is_empty())
    }
}

/// Error body returned by the form endpoint on a rejected submission.
#[derive(Debug, Deserialize)]
pub struct SubmissionRejection {
    #[serde(default)]
    pub errors: Option<Vec<SubmissionError>>,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionError {
    pub message: String,
}

impl SubmissionRejection {
    /// Joined server-side messages, or a generic fallback.
    pub fn message(&self) -> String {
        match &self.errors {
            Some(errors) if !errors.is_empty() => errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            _ => "Submission failed.".to_string(),
        }
    }
}
