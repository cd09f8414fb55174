use std::sync::LazyLock;

use regex::Regex;

use crate::model::Project;
use crate::parser::extract::strip_bullet;
use crate::parser::sections::{Section, SectionKind};

/// `name SEP 4-digit-year ...` — tried before the bare-name heuristic so
/// "Launch App | 2021" is never read as a bare name.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<name>.+?)\s*[|•–—]\s*(?P<year>\d{4}).*$").unwrap());

enum Line<'a> {
    Bullet(&'a str),
    Header { name: String, year: String },
    BareName(&'a str),
    Plain(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = strip_bullet(line) {
        return Line::Bullet(rest);
    }
    if let Some(caps) = HEADER_RE.captures(line) {
        return Line::Header {
            name: caps["name"].trim().to_string(),
            year: caps["year"].to_string(),
        };
    }
    if is_bare_name(line) {
        return Line::BareName(line);
    }
    Line::Plain(line)
}

/// Short unlabeled lines read as bare project names: all-uppercase, or
/// at most 4 tokens with neither a colon nor a pipe. Known precision
/// limitation: a terse description line can land here and open a
/// spurious entry; precedence order is the only tie-break.
fn is_bare_name(line: &str) -> bool {
    let all_caps =
        line.chars().any(|c| c.is_uppercase()) && !line.chars().any(|c| c.is_lowercase());
    all_caps
        || (line.split_whitespace().count() <= 4 && !line.contains(':') && !line.contains('|'))
}

/// Same current-entry fold as the experience extractor, with the detail
/// logic shared between bullet remainders and plain lines: a
/// "Technologies:"/"Tech:" label fills the technologies list, an inline
/// "Technologies:" splits the line between description and technologies,
/// and everything else accumulates into the description.
pub fn extract(sections: &[Section]) -> Vec<Project> {
    let mut entries = Vec::new();

    for section in sections.iter().filter(|s| s.kind == SectionKind::Projects) {
        let mut current: Option<Project> = None;

        for line in &section.lines {
            match classify(line) {
                Line::Bullet(text) => {
                    if let Some(entry) = current.as_mut() {
                        apply_detail(entry, text);
                    }
                }
                Line::Header { name, year } => {
                    if let Some(entry) = current.take() {
                        entries.push(entry);
                    }
                    current = Some(Project {
                        name,
                        year: Some(year),
                        description: String::new(),
                        technologies: Vec::new(),
                    });
                }
                Line::BareName(name) => {
                    if let Some(entry) = current.take() {
                        entries.push(entry);
                    }
                    current = Some(Project {
                        name: name.to_string(),
                        year: None,
                        description: String::new(),
                        technologies: Vec::new(),
                    });
                }
                Line::Plain(text) => {
                    if let Some(entry) = current.as_mut() {
                        apply_detail(entry, text);
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

fn apply_detail(entry: &mut Project, text: &str) {
    if text.starts_with("Technologies:") || text.starts_with("Tech:") {
        let list = text.split_once(':').map(|(_, rest)| rest).unwrap_or(text);
        entry.technologies = split_tech_list(list);
    } else if let Some((before, after)) = text.split_once("Technologies:") {
        push_description(entry, before.trim());
        entry.technologies = split_tech_list(after);
    } else {
        push_description(entry, text);
    }
}

fn split_tech_list(list: &str) -> Vec<String> {
    list.split(',').map(|t| t.trim().to_string()).collect()
}

fn push_description(entry: &mut Project, text: &str) {
    if !entry.description.is_empty() {
        entry.description.push(' ');
    }
    entry.description.push_str(text);
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn section(lines: &[&str]) -> Vec<Section> {
        vec![Section {
            kind: SectionKind::Projects,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }]
    }

    #[test]
    fn year_header_opens_entry() {
        let entries = extract(&section(&["Launch App | 2021"]));
        assert_eq!(entries[0].name, "Launch App");
        assert_eq!(entries[0].year.as_deref(), Some("2021"));
    }

    #[test]
    fn year_header_beats_bare_name() {
        // 3 tokens and no colon, but the year pattern wins.
        let entries = extract(&section(&["Launch App – 2021"]));
        assert_eq!(entries[0].name, "Launch App");
        assert_eq!(entries[0].year.as_deref(), Some("2021"));
    }

    #[test]
    fn all_caps_line_is_a_bare_name() {
        let entries = extract(&section(&["FREIGHTVIEW", "• Tracks freight quotes"]));
        assert_eq!(entries[0].name, "FREIGHTVIEW");
        assert_eq!(entries[0].year, None);
        assert_eq!(entries[0].description, "Tracks freight quotes");
    }

    #[test]
    fn short_line_is_a_bare_name() {
        let entries = extract(&section(&["Weekend Chess Bot"]));
        assert_eq!(entries[0].name, "Weekend Chess Bot");
        assert_eq!(entries[0].year, None);
    }

    #[test]
    fn technologies_bullet_label() {
        let entries = extract(&section(&["Launch App | 2021", "• Technologies: React, Rust"]));
        assert_eq!(entries[0].technologies, vec!["React", "Rust"]);
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn tech_label_short_form() {
        let entries = extract(&section(&["Launch App | 2021", "Tech: Go, Redis"]));
        assert_eq!(entries[0].technologies, vec!["Go", "Redis"]);
    }

    #[test]
    fn inline_technologies_split() {
        let entries = extract(&section(&[
            "Launch App | 2021",
            "• Release dashboard for mobile teams. Technologies: React, TypeScript",
        ]));
        assert_eq!(entries[0].description, "Release dashboard for mobile teams.");
        assert_eq!(entries[0].technologies, vec!["React", "TypeScript"]);
    }

    #[test]
    fn long_plain_line_extends_description() {
        let entries = extract(&section(&[
            "Launch App | 2021",
            "Coordinates mobile releases across five product teams and two platforms.",
            "Ships weekly.",
        ]));
        // The second plain line is short enough to be misread as a bare
        // name, which is the accepted precision limitation.
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].description,
            "Coordinates mobile releases across five product teams and two platforms."
        );
        assert_eq!(entries[1].name, "Ships weekly.");
    }

    #[test]
    fn new_header_closes_previous_entry() {
        let entries = extract(&section(&[
            "Launch App | 2021",
            "• Dashboard",
            "Inventory Sync | 2019",
        ]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "Dashboard");
        assert_eq!(entries[1].name, "Inventory Sync");
    }

    #[test]
    fn detail_lines_without_entry_are_dropped() {
        let entries = extract(&section(&[
            "• Orphan bullet describing nothing in particular whatsoever here",
        ]));
        assert!(entries.is_empty());
    }
}
