// src/extractors/education.rs
use crate::extractors::models::EducationEntry;
use crate::extractors::patterns::{
    contains_degree_keyword, EDUCATION_DATE_RANGE_RE, EDUCATION_LABELS,
};
use crate::extractors::sections::section_body;

/// One entry per degree line in the EDUCATION section.
///
/// An inline `MM/YYYY - MM/YYYY` range is lifted out of the degree text. The line
/// right after a degree line is taken as the institution unless it is itself a
/// degree line.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let body = section_body(text, EDUCATION_LABELS);
    let mut education = Vec::new();

    for (i, line) in body.iter().enumerate() {
        if !contains_degree_keyword(line) {
            continue;
        }

        let (degree, start_date, end_date) = match EDUCATION_DATE_RANGE_RE.captures(line) {
            Some(caps) => (
                EDUCATION_DATE_RANGE_RE.replace_all(line, "").trim().to_string(),
                Some(caps[1].to_string()),
                Some(caps[2].to_string()),
            ),
            None => (line.to_string(), None, None),
        };

        let institution = body
            .get(i + 1)
            .filter(|next| !contains_degree_keyword(next))
            .map(|next| next.to_string());

        education.push(EducationEntry {
            degree,
            institution,
            start_date,
            end_date,
        });
    }

    education
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_with_dates_and_institution() {
        let text = "EDUCATION\nB.Tech Computer Science 08/2018 – 05/2022\nXYZ Institute of Technology";
        let education = extract_education(text);

        assert_eq!(
            education,
            vec![EducationEntry {
                degree: "B.Tech Computer Science".to_string(),
                institution: Some("XYZ Institute of Technology".to_string()),
                start_date: Some("08/2018".to_string()),
                end_date: Some("05/2022".to_string()),
            }]
        );
    }

    #[test]
    fn test_consecutive_degrees_do_not_borrow_each_other() {
        let text = "Education\nMaster of Science\nBachelor of Arts\nState College";
        let education = extract_education(text);

        assert_eq!(education.len(), 2);
        assert_eq!(education[0].degree, "Master of Science");
        assert_eq!(education[0].institution, None);
        assert_eq!(education[1].institution.as_deref(), Some("State College"));
        assert_eq!(education[1].start_date, None);
    }

    #[test]
    fn test_header_after_degree_is_not_an_institution() {
        let text = "Education\nPhD in Physics\nSkills\nPython";
        let education = extract_education(text);

        assert_eq!(education.len(), 1);
        assert_eq!(education[0].institution, None);
    }

    #[test]
    fn test_non_degree_lines_are_ignored() {
        let text = "Education\nGPA 3.9\nDiploma in Design 06/2015-04/2017\nArt School\nAwards";
        let education = extract_education(text);

        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "Diploma in Design");
        assert_eq!(education[0].institution.as_deref(), Some("Art School"));
        assert_eq!(education[0].end_date.as_deref(), Some("04/2017"));
    }

    #[test]
    fn test_no_education_section() {
        assert!(extract_education("Bachelor of Arts\nSomewhere").is_empty());
        assert!(extract_education("").is_empty());
    }
}
