//! Terminal output sanitization.
//!
//! Transcript content is arbitrary text typed by chat participants and gets
//! drawn straight into the terminal by the viewer. Embedded ANSI escape
//! sequences could recolor the screen, move the cursor, or worse, so message
//! bodies pass through [`sanitize_for_display`] before rendering.

/// Remove ANSI CSI escape sequences and stray control characters.
///
/// Tabs and newlines survive; everything else below U+0020 (and the CSI
/// sequences themselves) is dropped.
///
/// # Examples
///
/// ```
/// use kakao_chat_viewer::utils::terminal::sanitize_for_display;
///
/// assert_eq!(sanitize_for_display("\x1b[31mhi\x1b[0m"), "hi");
/// ```
pub fn sanitize_for_display(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_csi = false;

    for ch in text.chars() {
        if in_csi {
            // CSI sequences end at the first ASCII letter.
            if ch.is_ascii_alphabetic() {
                in_csi = false;
            }
            continue;
        }
        if ch == '\x1b' {
            in_csi = true;
            continue;
        }
        if ch.is_control() && ch != '\t' && ch != '\n' {
            continue;
        }
        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize_for_display("안녕하세요 hello"), "안녕하세요 hello");
    }

    #[test]
    fn test_strips_color_codes() {
        assert_eq!(sanitize_for_display("\x1b[1m\x1b[32mok\x1b[0m done"), "ok done");
    }

    #[test]
    fn test_strips_cursor_movement() {
        assert_eq!(sanitize_for_display("\x1b[2J\x1b[Hcleared"), "cleared");
    }

    #[test]
    fn test_strips_bell_and_backspace() {
        assert_eq!(sanitize_for_display("ding\x07\x08!"), "ding!");
    }

    #[test]
    fn test_keeps_tabs_and_newlines() {
        assert_eq!(sanitize_for_display("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn test_drops_carriage_return() {
        assert_eq!(sanitize_for_display("one\r\ntwo"), "one\ntwo");
    }

    #[test]
    fn test_empty() {
        assert_eq!(sanitize_for_display(""), "");
    }
}
