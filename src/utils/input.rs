//! Domain list parsing.

use std::borrow::Cow;

/// Extracts domains from newline-delimited input.
///
/// Each line is whitespace-trimmed; lines that are empty afterwards are
/// skipped. No other normalization is applied, so duplicates and odd casing
/// are checked exactly as written.
///
/// Lines are decoded one at a time. Invalid UTF-8 is replaced with U+FFFD and
/// logged; such a name cannot resolve, so it ends up inactive instead of
/// aborting the run.
pub fn parse_domains(input: impl AsRef<[u8]>) -> Vec<String> {
    input
        .as_ref()
        .split(|&b| b == b'\n')
        .enumerate()
        .filter_map(|(index, raw)| {
            let line = String::from_utf8_lossy(raw);
            if let Cow::Owned(_) = line {
                log::warn!(
                    "Line {} is not valid UTF-8, checking it as {:?}",
                    index + 1,
                    line.trim()
                );
            }
            let trimmed = line.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}
