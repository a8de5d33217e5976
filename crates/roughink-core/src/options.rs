//! Style options shared by the sketch generator and the renderer.
//!
//! Only `stroke`, `stroke_width`, `fill` and `fill_weight` are read at render
//! time. The remaining fields drive the generator and are carried through
//! unchanged.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options errors.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Option `{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("Option `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("Option `curve_step_count` must be at least 1, got {0}")]
    CurveStepCount(f64),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for options operations.
pub type OptionsResult<T> = Result<T, OptionsError>;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Fill style requested from the sketch generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillStyle {
    /// Parallel diagonal lines.
    #[default]
    Hachure,
    /// Solid fill color.
    Solid,
    /// Zigzag pattern.
    ZigZag,
    /// Cross-hatched lines.
    CrossHatch,
    /// Dot pattern.
    Dots,
    /// Lines radiating from the center.
    Sunburst,
    /// Dashed lines.
    Dashed,
    /// Zigzag line pattern.
    ZigZagLine,
}

/// Style configuration for one drawing.
///
/// Negative values on `fill_weight`, `hachure_gap`, `dash_offset`, `dash_gap`
/// and `zigzag_offset` mean "derive from the stroke width".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub max_randomness_offset: f64,
    pub roughness: f64,
    pub bowing: f64,
    /// Outline color.
    pub stroke: SerializableColor,
    /// Outline width.
    pub stroke_width: f64,
    pub curve_tightness: f64,
    pub curve_step_count: f64,
    /// Fill color, used by every fill intent.
    pub fill: SerializableColor,
    pub fill_style: FillStyle,
    /// Width of sketch-fill strokes.
    pub fill_weight: f64,
    /// Hachure angle in degrees.
    pub hachure_angle: f64,
    pub hachure_gap: f64,
    pub dash_offset: f64,
    pub dash_gap: f64,
    pub zigzag_offset: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_randomness_offset: 2.0,
            roughness: 1.0,
            bowing: 1.0,
            stroke: SerializableColor::black(),
            stroke_width: 1.0,
            curve_tightness: 0.0,
            curve_step_count: 9.0,
            fill: SerializableColor::transparent(),
            fill_style: FillStyle::default(),
            fill_weight: -1.0,
            hachure_angle: -41.0,
            hachure_gap: -1.0,
            dash_offset: -1.0,
            dash_gap: -1.0,
            zigzag_offset: -1.0,
        }
    }
}

impl Options {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke_color(&self) -> Color {
        self.stroke.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill_color(&self) -> Color {
        self.fill.into()
    }

    pub fn with_max_randomness_offset(mut self, value: f64) -> Self {
        self.max_randomness_offset = value;
        self
    }

    pub fn with_roughness(mut self, value: f64) -> Self {
        self.roughness = value;
        self
    }

    pub fn with_bowing(mut self, value: f64) -> Self {
        self.bowing = value;
        self
    }

    /// Set the outline color.
    pub fn with_stroke(mut self, color: impl Into<SerializableColor>) -> Self {
        self.stroke = color.into();
        self
    }

    pub fn with_stroke_width(mut self, value: f64) -> Self {
        self.stroke_width = value;
        self
    }

    pub fn with_curve_tightness(mut self, value: f64) -> Self {
        self.curve_tightness = value;
        self
    }

    pub fn with_curve_step_count(mut self, value: f64) -> Self {
        self.curve_step_count = value;
        self
    }

    /// Set the fill color.
    pub fn with_fill(mut self, color: impl Into<SerializableColor>) -> Self {
        self.fill = color.into();
        self
    }

    pub fn with_fill_style(mut self, style: FillStyle) -> Self {
        self.fill_style = style;
        self
    }

    pub fn with_fill_weight(mut self, value: f64) -> Self {
        self.fill_weight = value;
        self
    }

    pub fn with_hachure_angle(mut self, value: f64) -> Self {
        self.hachure_angle = value;
        self
    }

    pub fn with_hachure_gap(mut self, value: f64) -> Self {
        self.hachure_gap = value;
        self
    }

    pub fn with_dash_offset(mut self, value: f64) -> Self {
        self.dash_offset = value;
        self
    }

    pub fn with_dash_gap(mut self, value: f64) -> Self {
        self.dash_gap = value;
        self
    }

    pub fn with_zigzag_offset(mut self, value: f64) -> Self {
        self.zigzag_offset = value;
        self
    }

    /// Check that the options can be handed to the render pipeline.
    pub fn validate(&self) -> OptionsResult<()> {
        let numeric = [
            ("max_randomness_offset", self.max_randomness_offset),
            ("roughness", self.roughness),
            ("bowing", self.bowing),
            ("stroke_width", self.stroke_width),
            ("curve_tightness", self.curve_tightness),
            ("curve_step_count", self.curve_step_count),
            ("fill_weight", self.fill_weight),
            ("hachure_angle", self.hachure_angle),
            ("hachure_gap", self.hachure_gap),
            ("dash_offset", self.dash_offset),
            ("dash_gap", self.dash_gap),
            ("zigzag_offset", self.zigzag_offset),
        ];
        for (field, value) in numeric {
            if !value.is_finite() {
                return Err(OptionsError::NotFinite { field, value });
            }
        }

        if self.stroke_width < 0.0 {
            return Err(OptionsError::Negative {
                field: "stroke_width",
                value: self.stroke_width,
            });
        }
        if self.roughness < 0.0 {
            return Err(OptionsError::Negative {
                field: "roughness",
                value: self.roughness,
            });
        }
        if self.curve_step_count < 1.0 {
            return Err(OptionsError::CurveStepCount(self.curve_step_count));
        }
        Ok(())
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> OptionsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> OptionsResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}
