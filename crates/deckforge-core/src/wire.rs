//! Shared helpers for the JSON wire formats exchanged with the text
//! generator.

/// Strip a surrounding Markdown code fence from generator output.
///
/// Collaborators are instructed to emit raw JSON, but language models often
/// wrap it in a ```` ```json ```` fence anyway. This returns the inner text
/// when the payload is fenced and the payload unchanged otherwise.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "html", ...) on the opening fence line.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => return trimmed,
    };
    match body.rfind("```") {
        Some(idx) => body[..idx].trim(),
        None => body.trim(),
    }
}
