//! Edit constraints for the text editing system.
//!
//! Constraints define which characters may enter a field and how the Enter
//! key is treated. Character filters are a closed set of strategies behind a
//! single `accept_char` entry point.

use std::fmt;

/// Custom character predicate: receives the current text and the candidate.
pub type CharPredicate = fn(&str, char) -> bool;

/// Context handed to a filter while it decides on a character.
///
/// Filters see the text as it was before the current insertion and may
/// request that the field content be replaced outright (without change
/// notification), which is how the boolean coercion filter works.
#[derive(Debug)]
pub struct FilterContext<'a> {
    text: &'a str,
    forced_text: Option<String>,
}

impl<'a> FilterContext<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            forced_text: None,
        }
    }

    /// The field text before the insertion
    pub fn text(&self) -> &str {
        self.text
    }

    /// Replace the field content once filtering is done
    pub fn force_text(&mut self, text: impl Into<String>) {
        self.forced_text = Some(text.into());
    }

    /// The replacement requested by the filter, if any
    pub fn into_forced_text(self) -> Option<String> {
        self.forced_text
    }
}

/// Character filter strategies
#[derive(Clone, Copy)]
pub enum CharFilter {
    /// Digits and the minus sign
    DigitsOnly,
    /// Digits, the minus sign and at most one decimal point
    Decimal,
    /// `t`/`f` coerce the whole field to `true`/`false`; nothing is typed
    Boolean,
    /// Caller-supplied predicate
    Custom(CharPredicate),
}

impl CharFilter {
    /// Decide whether `ch` may be inserted.
    pub fn accept_char(&self, ctx: &mut FilterContext<'_>, ch: char) -> bool {
        match self {
            CharFilter::DigitsOnly => ch.is_ascii_digit() || ch == '-',
            CharFilter::Decimal => {
                if ch == '.' {
                    !ctx.text().contains('.')
                } else {
                    ch.is_ascii_digit() || ch == '-'
                }
            }
            CharFilter::Boolean => {
                match ch {
                    't' => ctx.force_text("true"),
                    'f' => ctx.force_text("false"),
                    _ => {}
                }
                false
            }
            CharFilter::Custom(predicate) => predicate(ctx.text(), ch),
        }
    }
}

impl fmt::Debug for CharFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharFilter::DigitsOnly => write!(f, "DigitsOnly"),
            CharFilter::Decimal => write!(f, "Decimal"),
            CharFilter::Boolean => write!(f, "Boolean"),
            CharFilter::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Constraints that limit what may be typed or pasted into a field.
#[derive(Debug, Clone)]
pub struct EditConstraints {
    /// Enter inserts a newline (off for single-line fields)
    pub write_enters: bool,

    /// Reject characters the font cannot render when typed or pasted
    pub only_font_chars: bool,

    /// Character filter (None = all characters allowed)
    pub char_filter: Option<CharFilter>,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::single_line()
    }
}

impl EditConstraints {
    /// Plain single-line input
    pub fn single_line() -> Self {
        Self {
            write_enters: false,
            only_font_chars: true,
            char_filter: None,
        }
    }

    /// Integer input (digits and minus sign)
    pub fn numeric() -> Self {
        Self {
            char_filter: Some(CharFilter::DigitsOnly),
            ..Self::single_line()
        }
    }

    /// Decimal input (single decimal point)
    pub fn decimal() -> Self {
        Self {
            char_filter: Some(CharFilter::Decimal),
            ..Self::single_line()
        }
    }

    /// Boolean input coerced from a single keystroke
    pub fn boolean() -> Self {
        Self {
            char_filter: Some(CharFilter::Boolean),
            ..Self::single_line()
        }
    }

    /// Check if a character passes the filter (if any)
    pub fn is_char_allowed(&self, ctx: &mut FilterContext<'_>, ch: char) -> bool {
        match &self.char_filter {
            Some(filter) => filter.accept_char(ctx, ch),
            None => true,
        }
    }
}
