use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::sections::{Section, SectionKind};

static DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;•|]").unwrap());

/// Split every skills line into tokens, dropping category labels
/// ("Languages:"), single characters, and bare numbers. Tokens are
/// deduplicated case-sensitively and come out lexicographically sorted,
/// so repeated parses compare equal.
pub fn extract(sections: &[Section]) -> Vec<String> {
    let mut skills = BTreeSet::new();

    for section in sections.iter().filter(|s| s.kind == SectionKind::Skills) {
        for line in &section.lines {
            // Everything up to the first colon is a category label.
            let rest = line.split_once(':').map(|(_, r)| r).unwrap_or(line);
            for token in DELIMITER_RE.split(rest) {
                let token = token.trim();
                if token.chars().count() > 1 && !token.chars().all(|c| c.is_ascii_digit()) {
                    skills.insert(token.to_string());
                }
            }
        }
    }

    skills.into_iter().collect()
}

// ── Tests ──
