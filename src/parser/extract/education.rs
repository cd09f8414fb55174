use std::sync::LazyLock;

use regex::Regex;

use crate::model::Education;
use crate::parser::extract::strip_bullet;
use crate::parser::sections::{Section, SectionKind};

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:bachelor|master|phd|doctorate|b\.?s\.?|m\.?s\.?|b\.?a\.?|m\.?a\.?|associate)\b")
        .unwrap()
});

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

/// One entry per qualifying line; no cross-line state. A line qualifies
/// when it carries a degree keyword or a 4-digit year (either alone is
/// enough — missing fields come out as empty strings). Bullets and
/// coursework detail lines never start entries.
pub fn extract(sections: &[Section]) -> Vec<Education> {
    let mut entries = Vec::new();

    for section in sections.iter().filter(|s| s.kind == SectionKind::Education) {
        for line in &section.lines {
            if strip_bullet(line).is_some() || line.to_lowercase().contains("coursework") {
                continue;
            }

            let degree = DEGREE_RE.find(line).map(|m| m.as_str());
            let year = YEAR_RE.find(line).map(|m| m.as_str());
            if degree.is_none() && year.is_none() {
                continue;
            }

            entries.push(if line.contains('|') {
                from_pipe_parts(line, degree, year)
            } else {
                from_plain_line(line, degree, year)
            });
        }
    }

    entries
}

/// Pipe-delimited lines assign by position: degree | institution | year.
/// This always wins over the comma/dash split.
fn from_pipe_parts(line: &str, degree: Option<&str>, year: Option<&str>) -> Education {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    Education {
        degree: parts
            .first()
            .map(|p| p.to_string())
            .unwrap_or_else(|| degree.unwrap_or_default().to_string()),
        institution: parts.get(1).map(|p| p.to_string()).unwrap_or_default(),
        year: parts
            .get(2)
            .map(|p| p.to_string())
            .unwrap_or_else(|| year.unwrap_or_default().to_string()),
    }
}

/// Without pipes the institution is the text before the first comma, or
/// before the first dash when there is no comma; degree and year come
/// from the regex captures. Ambiguous when a degree name itself contains
/// a comma, which is accepted.
fn from_plain_line(line: &str, degree: Option<&str>, year: Option<&str>) -> Education {
    let institution = match line.split_once(',') {
        Some((head, _)) => head,
        None => line.split('-').next().unwrap_or(line),
    };
    Education {
        degree: degree.unwrap_or_default().to_string(),
        institution: institution.trim().to_string(),
        year: year.unwrap_or_default().to_string(),
    }
}

// ── Tests ──
