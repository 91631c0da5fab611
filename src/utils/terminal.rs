//! Terminal output sanitization
//!
//! Creature names, abilities and saved queries come from a remote API or from
//! user input and are echoed to the terminal. Escape sequences in that text could
//! clear the screen or restyle the menu, so every externally sourced string is
//! passed through [`sanitize_line`] before display.

/// Strips ANSI CSI escape sequences and every control character, including
/// newlines, so the text stays on a single output line.
///
/// # Examples
///
/// ```
/// use mini_pokedex::utils::terminal::sanitize_line;
///
/// assert_eq!(sanitize_line("\x1b[31mpikachu\x1b[0m"), "pikachu");
/// assert_eq!(sanitize_line("mr\nmime"), "mrmime");
/// ```
pub fn sanitize_line(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI ends at the first letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() {
            continue;
        }

        result.push(ch);
    }

    result
}
