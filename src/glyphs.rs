//! Glyph metrics providers
//!
//! A text field never rasterizes anything itself; it only needs to know which
//! characters a font can render and how far each one advances the pen.

use std::fmt;

use anyhow::Result;
use fontdue::{Font, FontSettings, LineMetrics};

/// Font metrics consumed by layout and preferred-size computations.
pub trait GlyphMetrics: fmt::Debug {
    /// Whether the font has a glyph for `ch`
    fn has_glyph(&self, ch: char) -> bool;

    /// Horizontal advance of `ch` in pixels
    fn advance(&self, ch: char) -> f32;

    /// Left side bearing of `ch` in pixels
    fn bearing(&self, _ch: char) -> f32 {
        0.0
    }

    /// Advance of the blank glyph substituted for unsupported characters
    fn space_width(&self) -> f32 {
        self.advance(' ')
    }

    fn line_height(&self) -> f32;

    /// Distance from the baseline to the bottom of the line (positive)
    fn descent(&self) -> f32;
}

/// Fixed-advance metrics, mostly for tests and headless hosts.
#[derive(Clone)]
pub struct MonospaceMetrics {
    advance: f32,
    line_height: f32,
    descent: f32,
    charset: fn(char) -> bool,
}

fn printable_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

impl MonospaceMetrics {
    /// Printable ASCII with the given advance
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
            descent: (line_height * 0.25).round(),
            charset: printable_ascii,
        }
    }

    /// Restrict the supported characters
    pub fn with_charset(mut self, charset: fn(char) -> bool) -> Self {
        self.charset = charset;
        self
    }
}

impl fmt::Debug for MonospaceMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonospaceMetrics")
            .field("advance", &self.advance)
            .field("line_height", &self.line_height)
            .finish()
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn has_glyph(&self, ch: char) -> bool {
        (self.charset)(ch)
    }

    fn advance(&self, _ch: char) -> f32 {
        self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn descent(&self) -> f32 {
        self.descent
    }
}

/// Metrics read from a TrueType/OpenType font at a fixed pixel size.
pub struct FontdueMetrics {
    font: Font,
    px: f32,
    line_metrics: LineMetrics,
}

impl FontdueMetrics {
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to load font: {}", e))?;

        let line_metrics = font
            .horizontal_line_metrics(px)
            .ok_or_else(|| anyhow::anyhow!("Font missing horizontal line metrics"))?;

        Ok(Self {
            font,
            px,
            line_metrics,
        })
    }

    pub fn font_size(&self) -> f32 {
        self.px
    }
}

impl fmt::Debug for FontdueMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontdueMetrics")
            .field("px", &self.px)
            .field("line_height", &self.line_metrics.new_line_size)
            .finish()
    }
}

impl GlyphMetrics for FontdueMetrics {
    fn has_glyph(&self, ch: char) -> bool {
        self.font.lookup_glyph_index(ch) != 0
    }

    fn advance(&self, ch: char) -> f32 {
        self.font.metrics(ch, self.px).advance_width
    }

    fn bearing(&self, ch: char) -> f32 {
        self.font.metrics(ch, self.px).xmin as f32
    }

    fn line_height(&self) -> f32 {
        self.line_metrics.new_line_size
    }

    fn descent(&self) -> f32 {
        -self.line_metrics.descent
    }
}
