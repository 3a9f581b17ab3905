// src/extractors/patterns.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Keyword Dictionaries ---

/// Lowercase keyword -> canonical skill name. See [`mentions_keyword`] for how a
/// keyword is matched.
pub const SKILLS_DB: &[(&str, &str)] = &[
    ("python", "Python"),
    ("java", "Java"),
    ("c++", "C++"),
    ("c", "C"),
    ("javascript", "JavaScript"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("sql", "SQL"),
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("fastapi", "FastAPI"),
    ("machine learning", "Machine Learning"),
    ("deep learning", "Deep Learning"),
    ("data science", "Data Science"),
    ("pandas", "Pandas"),
    ("numpy", "NumPy"),
    ("scikit-learn", "Scikit-learn"),
    ("tensorflow", "TensorFlow"),
    ("pytorch", "PyTorch"),
    ("opencv", "OpenCV"),
    ("nlp", "NLP"),
    ("git", "Git"),
    ("github", "GitHub"),
    ("linux", "Linux"),
    ("docker", "Docker"),
    ("aws", "AWS"),
];

pub const DEGREE_KEYWORDS: &[&str] = &[
    "b.s", "b.sc", "b.tech", "b.e", "bachelor",
    "m.s", "m.sc", "m.tech", "m.e", "master",
    "phd", "doctorate", "diploma",
];

pub const LOCATION_KEYWORDS: &[&str] = &[
    "india", "usa", "united states", "uk", "canada",
    "australia", "andhra pradesh", "telangana",
    "tamil nadu", "karnataka", "maharashtra",
];

/// Every recognized section header, lowercase. A header only counts when it is the
/// whole line.
pub const SECTION_HEADERS: &[&str] = &[
    "skills", "education", "experience", "profile",
    "projects", "certifications", "achievements",
];

// Lines that open each sectioned extractor's block
pub const EDUCATION_LABELS: &[&str] = &["education"];
pub const EXPERIENCE_LABELS: &[&str] = &["experience", "work experience", "profile"];
pub const PROJECTS_LABELS: &[&str] = &["projects"];
pub const CERTIFICATIONS_LABELS: &[&str] = &["certifications"];

/// Substrings that disqualify a line from being read as the candidate's name.
pub const NAME_BLACKLIST: &[&str] = &[
    "resume", "curriculum", "vitae", "email", "phone",
    "mobile", "@", "linkedin", "github", "skills",
    "engineer", "developer", "automation", "profile",
    "education", "university", "college",
];

pub const BULLET_MARKERS: &[char] = &['•', '-', '*'];

// --- Regex Patterns (Lazy Static) ---

pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("Failed to compile EMAIL_RE")
});

// Loose phone candidate: digits with spaces, hyphens and parentheses in between.
// The digit count is validated separately.
pub static PHONE_CANDIDATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d[\d\s\-()]{8,}\d").expect("Failed to compile PHONE_CANDIDATE_RE")
});

// MM/YYYY - MM/YYYY, separator may be a hyphen, en dash or em dash
pub static EDUCATION_DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}/\d{4})\s*[–—-]\s*(\d{2}/\d{4})")
        .expect("Failed to compile EDUCATION_DATE_RANGE_RE")
});

// YYYY - YYYY | YYYY - Present
pub static EXPERIENCE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{4})\s*[–—-]\s*(present|\d{4})")
        .expect("Failed to compile EXPERIENCE_DATE_RE")
});

// --- Location cleanup ---

pub static LOCATION_NOISE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[|()]").expect("Failed to compile LOCATION_NOISE_RE")
});

pub static ISOLATED_LETTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-zA-Z]\b").expect("Failed to compile ISOLATED_LETTER_RE")
});

pub static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s{2,}").expect("Failed to compile MULTI_SPACE_RE")
});

pub static COMMA_SPACING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*,\s*").expect("Failed to compile COMMA_SPACING_RE")
});

// --- Helpers ---

/// True when `line` is exactly one of the recognized section headers (case-insensitive).
pub fn is_section_header(line: &str) -> bool {
    let lower = line.trim().to_lowercase();
    SECTION_HEADERS.contains(&lower.as_str())
}

pub fn contains_degree_keyword(line: &str) -> bool {
    let lower = line.to_lowercase();
    DEGREE_KEYWORDS.iter().any(|k| lower.contains(k))
}

pub fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLET_MARKERS)
}

/// Removes every leading bullet marker and space, then trims the rest.
pub fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c == ' ')
        .trim()
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#'
}

/// Whether lowercased `haystack` mentions `keyword`.
///
/// Keywords are plain substrings, except single-letter ones ("c") which must stand
/// alone: not inside a word and not the prefix of "c++" or "c#".
pub fn mentions_keyword(haystack: &str, keyword: &str) -> bool {
    if keyword.chars().count() > 1 {
        return haystack.contains(keyword);
    }

    haystack.match_indices(keyword).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(is_token_char) && !after.is_some_and(is_token_char)
    })
}

/// Trimmed, non-empty lines of `text`. Blank lines carry no meaning for any extractor.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
