//! System-notice detection.
//!
//! Most notices ("Messages and calls are end-to-end encrypted", "Alice left")
//! have no author colon and never match the header shape. Some do, e.g. a
//! subject change whose new subject contains a colon. Those end up as events
//! unless [`ParserConfig::skip_system_notices`](crate::config::ParserConfig)
//! is enabled.

const NOTICE_INDICATORS: &[&str] = &[
    "messages and calls are end-to-end encrypted",
    "created group",
    "changed the subject",
    "changed this group's icon",
    "changed the group description",
    "deleted this group's icon",
    "changed their phone number",
    "joined using this group's invite link",
    "security code changed",
    "you're now an admin",
    "is now an admin",
    "turned on disappearing messages",
    "turned off disappearing messages",
];

/// Returns `true` if the author/body pair looks like a system notice.
///
/// Matching is case-insensitive. An author that names the app itself
/// (`WhatsApp`, `System`) also counts as a notice.
pub fn is_system_notice(author: &str, body: &str) -> bool {
    let author_lower = author.to_lowercase();
    let body_lower = body.to_lowercase();

    if NOTICE_INDICATORS
        .iter()
        .any(|indicator| author_lower.contains(indicator) || body_lower.contains(indicator))
    {
        return true;
    }

    author_lower == "whatsapp" || author_lower == "system"
}
