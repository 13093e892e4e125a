//! Text field styles
//!
//! A style is an immutable value: fields hold their own copy and swapping
//! styles is an ordinary assignment.
//!
//! Style loading priority:
//! 1. User config: `~/.config/textfield/styles/{id}.yaml`
//! 2. Embedded: built-in styles compiled into the library

use std::path::Path;

use serde::Deserialize;

use crate::view::geometry::Insets;

pub const DEFAULT_DARK_YAML: &str = include_str!("../styles/default-dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../styles/default-light.yaml");

/// A built-in style entry
pub struct BuiltinStyle {
    pub id: &'static str,
    pub yaml: &'static str,
}

pub const BUILTIN_STYLES: &[BuiltinStyle] = &[
    BuiltinStyle {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinStyle {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Placeholder color when the style has none
pub const DEFAULT_MESSAGE_COLOR: Color = Color::rgb(180, 180, 180);

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as ARGB
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("Invalid color {}: {}", s, e))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

// ============================================================================
// Raw YAML data
// ============================================================================

/// Raw style data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct StyleData {
    pub version: u32,
    pub name: String,
    pub font_color: String,
    #[serde(default)]
    pub focused_font_color: Option<String>,
    #[serde(default)]
    pub disabled_font_color: Option<String>,
    #[serde(default)]
    pub message_font_color: Option<String>,
    #[serde(default)]
    pub background: Option<BackgroundData>,
    #[serde(default)]
    pub focused_background: Option<BackgroundData>,
    #[serde(default)]
    pub disabled_background: Option<BackgroundData>,
    #[serde(default)]
    pub cursor: Option<CursorData>,
    #[serde(default)]
    pub selection: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackgroundData {
    pub color: String,
    #[serde(default)]
    pub insets: Insets,
    #[serde(default)]
    pub min_height: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CursorData {
    pub color: String,
    #[serde(default = "default_cursor_width")]
    pub width: f32,
}

fn default_cursor_width() -> f32 {
    1.0
}

fn parse_optional(color: Option<&String>) -> Result<Option<Color>, String> {
    color.map(|s| Color::from_hex(s)).transpose()
}

// ============================================================================
// Resolved style
// ============================================================================

/// A filled background with border insets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub color: Color,
    pub insets: Insets,
    pub min_height: f32,
}

impl Background {
    fn from_data(data: &BackgroundData) -> Result<Self, String> {
        Ok(Self {
            color: Color::from_hex(&data.color)?,
            insets: data.insets,
            min_height: data.min_height,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorStyle {
    pub color: Color,
    pub width: f32,
}

/// Resolved style with parsed colors. Absent optional parts are not drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldStyle {
    pub name: String,
    pub font_color: Color,
    pub focused_font_color: Option<Color>,
    pub disabled_font_color: Option<Color>,
    pub message_font_color: Option<Color>,
    pub background: Option<Background>,
    pub focused_background: Option<Background>,
    pub disabled_background: Option<Background>,
    pub cursor: Option<CursorStyle>,
    pub selection: Option<Color>,
}

impl TextFieldStyle {
    /// Solid-color style with the conventional 10px/5px background insets
    pub fn create(font_color: Color, cursor: Color, selection: Color, background: Color) -> Self {
        Self {
            name: "Custom".to_string(),
            font_color,
            focused_font_color: None,
            disabled_font_color: None,
            message_font_color: None,
            background: Some(Background {
                color: background,
                insets: Insets::new(10.0, 10.0, 5.0, 5.0),
                min_height: 0.0,
            }),
            focused_background: None,
            disabled_background: None,
            cursor: Some(CursorStyle {
                color: cursor,
                width: 1.0,
            }),
            selection: Some(selection),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: StyleData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_STYLES
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| format!("Unknown style id: {}", id))?;
        Self::from_yaml(entry.yaml)
    }

    /// Convert raw style data to a resolved style
    pub fn from_data(data: StyleData) -> Result<Self, String> {
        let background = |b: &Option<BackgroundData>| b.as_ref().map(Background::from_data).transpose();

        Ok(Self {
            name: data.name,
            font_color: Color::from_hex(&data.font_color)?,
            focused_font_color: parse_optional(data.focused_font_color.as_ref())?,
            disabled_font_color: parse_optional(data.disabled_font_color.as_ref())?,
            message_font_color: parse_optional(data.message_font_color.as_ref())?,
            background: background(&data.background)?,
            focused_background: background(&data.focused_background)?,
            disabled_background: background(&data.disabled_background)?,
            cursor: data
                .cursor
                .as_ref()
                .map(|c| {
                    Ok::<_, String>(CursorStyle {
                        color: Color::from_hex(&c.color)?,
                        width: c.width,
                    })
                })
                .transpose()?,
            selection: parse_optional(data.selection.as_ref())?,
        })
    }

    /// Font color with the disabled → focused → normal fallback chain
    pub fn font_color_for(&self, disabled: bool, focused: bool) -> Color {
        if disabled {
            if let Some(color) = self.disabled_font_color {
                return color;
            }
        }
        if focused {
            if let Some(color) = self.focused_font_color {
                return color;
            }
        }
        self.font_color
    }

    /// Background with the disabled → focused → normal fallback chain
    pub fn background_for(&self, disabled: bool, focused: bool) -> Option<&Background> {
        if disabled {
            if let Some(bg) = self.disabled_background.as_ref() {
                return Some(bg);
            }
        }
        if focused {
            if let Some(bg) = self.focused_background.as_ref() {
                return Some(bg);
            }
        }
        self.background.as_ref()
    }

    pub fn message_color(&self) -> Color {
        self.message_font_color.unwrap_or(DEFAULT_MESSAGE_COLOR)
    }

    /// Content padding, taken from the normal background
    pub fn padding(&self) -> Insets {
        self.background.map(|b| b.insets).unwrap_or_default()
    }

    /// Built-in dark style (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Self::from_yaml(DEFAULT_DARK_YAML) {
            Ok(style) => style,
            Err(_) => Self::create(
                Color::rgb(0xD4, 0xD4, 0xD4),
                Color::WHITE,
                Color::rgb(0x26, 0x4F, 0x78),
                Color::rgb(0x25, 0x25, 0x26),
            ),
        }
    }
}

impl Default for TextFieldStyle {
    fn default() -> Self {
        Self::default_dark()
    }
}

/// Load a style from a YAML file
pub fn from_file(path: &Path) -> Result<TextFieldStyle, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read style file {}: {}", path.display(), e))?;
    TextFieldStyle::from_yaml(&content)
}

/// Load a style by id with priority: user → builtin
pub fn load_style(id: &str) -> Result<TextFieldStyle, String> {
    if let Some(path) = crate::config_paths::user_style_file(id) {
        tracing::info!("Loading user style from {}", path.display());
        return from_file(&path);
    }

    tracing::debug!("Loading builtin style: {}", id);
    TextFieldStyle::from_builtin(id)
}
