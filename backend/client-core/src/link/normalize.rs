/// Label the TISS page renders right after the calendar link. Users who
/// select the whole line copy it along with the URL.
const TRAILING_ARTIFACT: &str = "Download";

/// Clean up a pasted source URL before it is verified.
///
/// Trims surrounding whitespace, drops one trailing `Download` label and
/// trims again. Empty or malformed input is passed through; the server
/// decides whether it is acceptable.
pub fn normalize_source_input(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix(TRAILING_ARTIFACT)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}
