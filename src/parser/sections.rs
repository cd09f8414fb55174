use std::sync::LazyLock;

use regex::Regex;

/// The five section categories the segmenter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    pub lines: Vec<String>,
}

/// Header keyword patterns, tried in this fixed order; first match wins.
/// "Work Samples" therefore buckets as experience via the `work` keyword.
static HEADER_PATTERNS: LazyLock<[(SectionKind, Regex); 5]> = LazyLock::new(|| {
    [
        (SectionKind::Summary, Regex::new(r"summary|profile|objective|about").unwrap()),
        (SectionKind::Experience, Regex::new(r"experience|employment|work|career").unwrap()),
        (SectionKind::Education, Regex::new(r"education|academic|qualifications").unwrap()),
        (SectionKind::Skills, Regex::new(r"skills|technical|competencies|technologies").unwrap()),
        (SectionKind::Projects, Regex::new(r"projects|portfolio|work samples").unwrap()),
    ]
});

/// A content sentence that merely mentions a keyword must not be read as
/// a header, so headers are capped at 3 whitespace-separated tokens.
const HEADER_MAX_TOKENS: usize = 3;

/// Classify one line as a section header, or None for content.
pub fn detect_header(line: &str) -> Option<SectionKind> {
    if line.split_whitespace().count() > HEADER_MAX_TOKENS {
        return None;
    }
    let lower = line.to_lowercase();
    HEADER_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&lower))
        .map(|(kind, _)| *kind)
}

/// Single pass over the trimmed, non-empty lines: a header opens a new
/// section, content lines buffer under the open section, and each
/// non-empty buffer is flushed on the next header or at end of input.
/// Content before the first header is discarded.
///
/// Returns None when no header was ever recognized, which routes the
/// caller to the unstructured fallback extractor.
pub fn segment(lines: &[&str]) -> Option<Vec<Section>> {
    let mut sections = Vec::new();
    let mut current: Option<SectionKind> = None;
    let mut buffer: Vec<String> = Vec::new();
    let mut saw_header = false;

    for line in lines {
        if let Some(kind) = detect_header(line) {
            saw_header = true;
            flush(&mut sections, current, std::mem::take(&mut buffer));
            current = Some(kind);
        } else if current.is_some() {
            buffer.push(line.to_string());
        }
    }
    flush(&mut sections, current, buffer);

    saw_header.then_some(sections)
}

fn flush(sections: &mut Vec<Section>, kind: Option<SectionKind>, lines: Vec<String>) {
    if let Some(kind) = kind {
        if !lines.is_empty() {
            sections.push(Section { kind, lines });
        }
    }
}

// ── Tests ──
