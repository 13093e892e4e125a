//! Utility functions for text editing

/// Check if a character is a word character for word-jump navigation.
///
/// Only ASCII letters and digits count; everything else (whitespace,
/// punctuation, non-ASCII) is a word boundary.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Check if a character is a word boundary
#[inline]
pub fn is_word_boundary(ch: char) -> bool {
    !is_word_char(ch)
}

/// Compute the cursor index after one navigation step.
///
/// Without `jump` the cursor moves a single character. With `jump` it keeps
/// moving while the character it passes over is a word character, stopping
/// at the first boundary (or the buffer edge).
pub fn step_cursor(chars: &[char], cursor: usize, forward: bool, jump: bool) -> usize {
    let len = chars.len();
    let mut cursor = cursor.min(len);

    if forward {
        if cursor == len {
            return cursor;
        }
        loop {
            cursor += 1;
            if cursor >= len || !jump || !is_word_char(chars[cursor]) {
                break;
            }
        }
    } else {
        if cursor == 0 {
            return cursor;
        }
        loop {
            cursor -= 1;
            if cursor == 0 || !jump || !is_word_char(chars[cursor - 1]) {
                break;
            }
        }
    }

    cursor
}

/// Find the word surrounding `at` as a `(start, end)` character range.
///
/// Scans right from `at` and left from `at - 1` until a non-word character.
/// If `at` sits on a boundary the range collapses around it.
pub fn word_under_cursor(chars: &[char], at: usize) -> (usize, usize) {
    let at = at.min(chars.len());

    let end = chars[at..]
        .iter()
        .position(|&c| !is_word_char(c))
        .map(|offset| at + offset)
        .unwrap_or(chars.len());

    let start = chars[..at]
        .iter()
        .rposition(|&c| !is_word_char(c))
        .map(|idx| idx + 1)
        .unwrap_or(0);

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(!is_word_char('_'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('é'));
        assert!(is_word_boundary('-'));
    }

    #[test]
    fn test_step_single_char() {
        let text = chars("abc def");
        assert_eq!(step_cursor(&text, 0, true, false), 1);
        assert_eq!(step_cursor(&text, 4, false, false), 3);
    }

    #[test]
    fn test_step_at_edges_is_noop() {
        let text = chars("abc");
        assert_eq!(step_cursor(&text, 3, true, true), 3);
        assert_eq!(step_cursor(&text, 0, false, true), 0);
        assert_eq!(step_cursor(&[], 0, true, true), 0);
    }

    #[test]
    fn test_jump_right_stops_at_first_boundary() {
        let text = chars("abc def");
        assert_eq!(step_cursor(&text, 0, true, true), 3);
        // From a boundary the jump steps over it and then the next word
        assert_eq!(step_cursor(&text, 3, true, true), 4);
        assert_eq!(step_cursor(&text, 4, true, true), 7);
    }

    #[test]
    fn test_jump_left_stops_at_word_start() {
        let text = chars("abc def");
        assert_eq!(step_cursor(&text, 7, false, true), 4);
        assert_eq!(step_cursor(&text, 4, false, true), 3);
        assert_eq!(step_cursor(&text, 3, false, true), 0);
    }

    #[test]
    fn test_cursor_beyond_len_is_clamped() {
        let text = chars("ab");
        assert_eq!(step_cursor(&text, 10, true, false), 2);
        assert_eq!(step_cursor(&text, 10, false, false), 1);
    }

    #[test]
    fn test_word_under_cursor() {
        let text = chars("hello big world");
        assert_eq!(word_under_cursor(&text, 2), (0, 5));
        assert_eq!(word_under_cursor(&text, 7), (6, 9));
        assert_eq!(word_under_cursor(&text, 15), (10, 15));
        // On the space between words
        assert_eq!(word_under_cursor(&text, 5), (0, 5));
    }
}
