pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;

use crate::model::ParsedResume;
use crate::parser::sections::{Section, SectionKind};

/// Assemble the final record from segmented sections. Every field is
/// populated, possibly with an empty string or empty list; sections of
/// the same kind contribute in input order.
pub fn extract_all(sections: &[Section]) -> ParsedResume {
    ParsedResume {
        summary: join_summary(sections),
        work_experience: experience::extract(sections),
        education: education::extract(sections),
        skills: skills::extract(sections),
        projects: projects::extract(sections),
    }
}

fn join_summary(sections: &[Section]) -> String {
    sections
        .iter()
        .filter(|s| s.kind == SectionKind::Summary)
        .flat_map(|s| s.lines.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip a leading bullet marker and surrounding whitespace, or None if
/// the line is not a bullet.
pub(crate) fn strip_bullet(line: &str) -> Option<&str> {
    for marker in ['•', '-', '*'] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest.trim());
        }
    }
    None
}

// ── Tests ──
