use smallvec::SmallVec;

use crate::core::CornerRadii;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// 8-bit channel convenience used for the default palette.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Font selection applied to one text primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size_px: f64,
    pub weight: u16,
    pub family: String,
}

impl FontSpec {
    #[must_use]
    pub fn new(size_px: f64, weight: u16, family: impl Into<String>) -> Self {
        Self {
            size_px,
            weight,
            family: family.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidStyle(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if self.weight == 0 || self.weight > 1000 {
            return Err(ChartError::InvalidStyle(
                "font weight must be in 1..=1000".to_owned(),
            ));
        }
        if self.family.is_empty() {
            return Err(ChartError::InvalidStyle(
                "font family must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Axis-aligned filled rectangle in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect extents must be >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label.
///
/// `y` is the glyph baseline in the frame's bottom-left-origin space; the
/// backend counter-flips before drawing so glyphs are never mirrored.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: FontSpec,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font: FontSpec,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.font.validate()?;
        self.color.validate()
    }
}

/// One step of a `PathPrimitive` outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    /// Quadratic curve through control point (`cx`, `cy`).
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    Close,
}

impl PathCommand {
    fn coordinates_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::QuadTo { cx, cy, x, y } => {
                cx.is_finite() && cy.is_finite() && x.is_finite() && y.is_finite()
            }
            Self::Close => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStroke {
    pub color: Color,
    pub width: f64,
}

/// Filled and/or stroked outline built from explicit commands.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub commands: SmallVec<[PathCommand; 10]>,
    pub fill: Option<Color>,
    pub stroke: Option<PathStroke>,
}

impl PathPrimitive {
    /// Closed rectangle outline with straight edges and quadratic corner
    /// curves. Degenerate extents still produce a well-formed (collapsed)
    /// path. Corner keys follow path orientation: `tl`/`tr` sit on the `y`
    /// edge, `br`/`bl` on the `y + height` edge.
    #[must_use]
    pub fn rounded_rect(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radii: CornerRadii,
        fill: Color,
    ) -> Self {
        let radii = radii.sanitized();
        let mut commands: SmallVec<[PathCommand; 10]> = SmallVec::new();

        commands.push(PathCommand::MoveTo {
            x: x + radii.tl,
            y,
        });
        commands.push(PathCommand::LineTo {
            x: x + width - radii.tr,
            y,
        });
        commands.push(PathCommand::QuadTo {
            cx: x + width,
            cy: y,
            x: x + width,
            y: y + radii.tr,
        });
        commands.push(PathCommand::LineTo {
            x: x + width,
            y: y + height - radii.br,
        });
        commands.push(PathCommand::QuadTo {
            cx: x + width,
            cy: y + height,
            x: x + width - radii.br,
            y: y + height,
        });
        commands.push(PathCommand::LineTo {
            x: x + radii.bl,
            y: y + height,
        });
        commands.push(PathCommand::QuadTo {
            cx: x,
            cy: y + height,
            x,
            y: y + height - radii.bl,
        });
        commands.push(PathCommand::LineTo {
            x,
            y: y + radii.tl,
        });
        commands.push(PathCommand::QuadTo {
            cx: x,
            cy: y,
            x: x + radii.tl,
            y,
        });
        commands.push(PathCommand::Close);

        Self {
            commands,
            fill: Some(fill),
            stroke: None,
        }
    }

    /// Downward-pointing triangle whose base sits on `base_y` and whose apex
    /// points at (`center_x`, below), used for the popup caret.
    #[must_use]
    pub fn caret_down(center_x: f64, base_y: f64, width: f64, fill: Color) -> Self {
        let half = width * std::f64::consts::FRAC_1_SQRT_2;
        let mut commands: SmallVec<[PathCommand; 10]> = SmallVec::new();
        commands.push(PathCommand::MoveTo {
            x: center_x - half,
            y: base_y,
        });
        commands.push(PathCommand::LineTo {
            x: center_x + half,
            y: base_y,
        });
        commands.push(PathCommand::LineTo {
            x: center_x,
            y: base_y - half,
        });
        commands.push(PathCommand::Close);

        Self {
            commands,
            fill: Some(fill),
            stroke: None,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(PathStroke { color, width });
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.commands.is_empty() {
            return Err(ChartError::InvalidData(
                "path must contain at least one command".to_owned(),
            ));
        }
        if !matches!(self.commands[0], PathCommand::MoveTo { .. }) {
            return Err(ChartError::InvalidData(
                "path must begin with a move".to_owned(),
            ));
        }
        for command in &self.commands {
            if !command.coordinates_finite() {
                return Err(ChartError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(ChartError::InvalidData(
                "path needs a fill or a stroke".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            if !stroke.width.is_finite() || stroke.width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "path stroke width must be finite and > 0".to_owned(),
                ));
            }
            stroke.color.validate()?;
        }
        Ok(())
    }
}
