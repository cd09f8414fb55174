use std::sync::LazyLock;

use regex::Regex;

use crate::model::WorkExperience;
use crate::parser::extract::strip_bullet;
use crate::parser::sections::{Section, SectionKind};

/// `role SEP company (SEP dates)?` with a non-greedy role capture, so a
/// role containing spaces never swallows the company. Separators are
/// pipe, bullet, en dash, and em dash; a plain hyphen is left for date
/// ranges.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<role>.+?)\s*[|•–—]\s*(?P<company>.+?)(?:\s*[|•–—]\s*(?P<dates>.*))?$")
        .unwrap()
});

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

enum Line<'a> {
    Bullet(&'a str),
    Header { role: String, company: String, dates: String },
    Plain(&'a str),
}

/// Bullets are tested first so a responsibility containing a separator
/// is never misread as a new entry header.
fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = strip_bullet(line) {
        return Line::Bullet(rest);
    }
    if let Some(caps) = HEADER_RE.captures(line) {
        return Line::Header {
            role: caps["role"].trim().to_string(),
            company: caps["company"].trim().to_string(),
            dates: caps
                .name("dates")
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        };
    }
    Line::Plain(line)
}

/// Fold each experience section through a single current-entry slot:
/// headers close the open entry and start a new one, bullets append
/// responsibilities, and a year-bearing plain line backfills a duration
/// the header left empty. Anything else is dropped.
pub fn extract(sections: &[Section]) -> Vec<WorkExperience> {
    let mut entries = Vec::new();

    for section in sections.iter().filter(|s| s.kind == SectionKind::Experience) {
        let mut current: Option<WorkExperience> = None;

        for line in &section.lines {
            match classify(line) {
                Line::Bullet(text) => {
                    if let Some(entry) = current.as_mut() {
                        entry.responsibilities.push(text.to_string());
                    }
                }
                Line::Header { role, company, dates } => {
                    if let Some(entry) = current.take() {
                        entries.push(entry);
                    }
                    current = Some(WorkExperience {
                        position: role,
                        company,
                        duration: dates,
                        responsibilities: Vec::new(),
                    });
                }
                Line::Plain(text) => {
                    if let Some(entry) = current.as_mut() {
                        // Date-on-its-own-line case.
                        if entry.duration.is_empty() && YEAR_RE.is_match(text) {
                            entry.duration = text.to_string();
                        }
                    }
                }
            }
        }

        if let Some(entry) = current.take() {
            entries.push(entry);
        }
    }

    entries
}

// ── Tests ──
