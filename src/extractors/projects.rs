// src/extractors/projects.rs
use crate::extractors::models::ProjectEntry;
use crate::extractors::patterns::{is_bullet, strip_bullet, PROJECTS_LABELS};
use crate::extractors::sections::section_body;

/// Projects from the PROJECTS section. Every plain line starts a new project; bullet
/// lines describe the project opened most recently.
pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
    let mut projects = Vec::new();
    let mut current_project: Option<ProjectEntry> = None;

    for line in section_body(text, PROJECTS_LABELS) {
        if !is_bullet(line) {
            projects.extend(current_project.replace(ProjectEntry::titled(line)));
            continue;
        }

        match current_project.as_mut() {
            Some(project) => project.description.push(strip_bullet(line).to_string()),
            None => tracing::trace!("Dropping bullet before any project: '{}'", line),
        }
    }

    projects.extend(current_project);
    projects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_with_bullets() {
        let text = "Projects\nResume Parser\n• Regex heuristics\n• JSON output\nChess Engine\nCertifications\nAWS Certified";
        let projects = extract_projects(text);

        assert_eq!(
            projects,
            vec![
                ProjectEntry {
                    title: "Resume Parser".to_string(),
                    description: vec!["Regex heuristics".to_string(), "JSON output".to_string()],
                },
                ProjectEntry::titled("Chess Engine"),
            ]
        );
    }

    #[test]
    fn test_leading_bullet_is_dropped() {
        let text = "PROJECTS\n- orphan\nWeather App\n- fetches forecasts";
        let projects = extract_projects(text);

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Weather App");
        assert_eq!(projects[0].description, vec!["fetches forecasts"]);
    }

    #[test]
    fn test_marker_only_bullet_adds_empty_description() {
        let projects = extract_projects("Projects\nAlpha\n•\n- real");

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].description, vec!["", "real"]);
    }

    #[test]
    fn test_no_projects_section() {
        assert!(extract_projects("Resume Parser\n• Regex heuristics").is_empty());
    }
}
