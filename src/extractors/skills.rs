// src/extractors/skills.rs
use std::collections::BTreeSet;

use crate::extractors::patterns::{mentions_keyword, SKILLS_DB};

/// Canonical names of every dictionary skill whose keyword occurs anywhere in the text.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    let text_lower = text.to_lowercase();

    SKILLS_DB
        .iter()
        .filter(|(keyword, _)| mentions_keyword(&text_lower, keyword))
        .map(|(_, skill_name)| skill_name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skills_sorted() {
        let skills: Vec<String> = extract_skills("I know Python and Docker.").into_iter().collect();
        assert_eq!(skills, vec!["Docker", "Python"]);
    }

    #[test]
    fn test_extract_skills_is_case_insensitive_and_deduplicated() {
        let skills = extract_skills("PYTHON, python, PyTorch and GitHub");
        assert!(skills.contains("Python"));
        assert!(skills.contains("PyTorch"));
        assert!(skills.contains("GitHub"));
        // "github" also contains "git"
        assert!(skills.contains("Git"));
        assert_eq!(skills.iter().filter(|s| *s == "Python").count(), 1);
    }

    #[test]
    fn test_extract_skills_matches_inside_words() {
        // multi-letter keywords are substrings
        let skills = extract_skills("Dockerized MySQL deployments");
        assert!(skills.contains("Docker"));
        assert!(skills.contains("MySQL"));
        assert!(skills.contains("SQL"));
    }

    #[test]
    fn test_extract_skills_single_letter_language() {
        assert!(!extract_skills("Excellent communicator").contains("C"));
        assert!(extract_skills("Languages: C, Java").contains("C"));

        let skills = extract_skills("C++ developer");
        assert!(skills.contains("C++"));
        assert!(!skills.contains("C"));
    }

    #[test]
    fn test_extract_skills_empty() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills("   \n  ").is_empty());
    }
}
