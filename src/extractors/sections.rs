// src/extractors/sections.rs
//! Locates the body of a labeled resume section.
//!
//! A section opens on a line that equals one of its labels and closes, for good, on
//! the first line that equals any other recognized header. Only the first block is
//! read; a header that reappears later is not re-entered.

use crate::extractors::patterns::{is_section_header, non_empty_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideSection,
    InsideSection,
}

/// Non-empty lines between the first header in `labels` and the next foreign header.
/// Repeats of the section's own labels inside the block are skipped.
pub fn section_body<'a>(text: &'a str, labels: &[&str]) -> Vec<&'a str> {
    let mut state = ScanState::OutsideSection;
    let mut body = Vec::new();

    for line in non_empty_lines(text) {
        let lower = line.to_lowercase();
        let is_own_label = labels.contains(&lower.as_str());

        match state {
            ScanState::OutsideSection => {
                if is_own_label {
                    tracing::trace!("Entering section at header '{}'", line);
                    state = ScanState::InsideSection;
                }
            }
            ScanState::InsideSection => {
                if is_own_label {
                    continue;
                }
                if is_section_header(line) {
                    tracing::trace!("Section closed by header '{}'", line);
                    break;
                }
                body.push(line);
            }
        }
    }

    body
}
