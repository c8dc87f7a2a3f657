//! Turns a [`ValidationResult`] into the lines the listing assistant shows.

use shared::ValidationResult;

pub const VALID_OPENING: [&str; 2] = [
    "🤖 Wonderful! Your pet listing has passed all our checks!",
    "🌟 Your furry friend is ready to find their perfect match!",
];

pub const INVALID_GREETING: &str =
    "🤖 Hi there! I've reviewed your pet listing and found a few things we can improve:";

pub const SUGGESTIONS_HEADER: &str = "💡 Here are some helpful suggestions:";

/// Render the assistant's reply for a validation verdict.
///
/// A passing listing gets only the two opening lines; the closing messages and
/// tips the validator attaches in that case are not shown.
pub fn chatbot_response(result: &ValidationResult) -> Vec<String> {
    if result.is_valid {
        return VALID_OPENING.iter().map(|line| line.to_string()).collect();
    }

    let mut lines = Vec::with_capacity(result.messages.len() + result.suggestions.len() + 4);
    lines.push(INVALID_GREETING.to_string());
    lines.push(String::new());
    lines.extend(result.messages.iter().cloned());

    if !result.suggestions.is_empty() {
        lines.push(String::new());
        lines.push(SUGGESTIONS_HEADER.to_string());
        lines.extend(result.suggestions.iter().cloned());
    }

    lines
}
