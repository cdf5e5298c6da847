//! Terminal output sanitization utilities
//!
//! Project names come from `.idea/.name` files and paths come from the IDE's
//! XML, both of which are user-controlled. Anything printed by the text
//! output of the CLI passes through [`sanitize_field`] first so escape
//! sequences can't clear the screen, move the cursor or recolor the terminal,
//! and embedded tabs/newlines can't break the one-project-per-line format.

/// Strips ANSI escape codes from a string
///
/// Removes ANSI CSI (Control Sequence Introducer) escape codes and other
/// control characters except tab, newline and carriage return.
///
/// # Examples
///
/// ```
/// use recent_projects::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mMy App\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "My App");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            // Skip until we find a letter (end of CSI sequence)
            while let Some(&next_ch) = chars.peek() {
                chars.next();
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Makes a value safe to print as one column of a tab-separated line
pub fn sanitize_field(text: &str) -> String {
    strip_ansi_codes(text).replace(['\t', '\n', '\r'], " ")
}
