#[cfg(test)]
#[path = "formatter_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::DisplayBlock;

static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.").unwrap());

const HEADING_MARKER: &str = "**";

// Two non-overlapping markers plus at least one byte of content.
const MIN_HEADING_LEN: usize = HEADING_MARKER.len() * 2 + 1;

/// Splits an agent message into display blocks, one per line.
///
/// Lines are classified on their trimmed form but numbered and plain lines
/// keep their original text. Never fails; an empty message is a single break.
pub fn format(message: &str) -> Vec<DisplayBlock> {
    return message
        .split('\n')
        .map(|line| classify(line.strip_suffix('\r').unwrap_or(line)))
        .collect();
}

fn classify(line: &str) -> DisplayBlock {
    let trimmed = line.trim();

    if is_heading(trimmed) {
        return DisplayBlock::Heading(line.replace(HEADING_MARKER, ""));
    }

    if NUMBERED_LINE.is_match(trimmed) {
        return DisplayBlock::IndentedLine(line.to_string());
    }

    if trimmed.is_empty() {
        return DisplayBlock::Break;
    }

    return DisplayBlock::Paragraph(line.to_string());
}

fn is_heading(trimmed: &str) -> bool {
    return trimmed.len() >= MIN_HEADING_LEN
        && trimmed.starts_with(HEADING_MARKER)
        && trimmed.ends_with(HEADING_MARKER);
}
