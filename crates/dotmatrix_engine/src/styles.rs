//! Font-wide styling and layout parameters

use serde::{Deserialize, Serialize};

/// Smallest accepted dot size (percent of a grid cell)
pub const MIN_PIXEL_SIZE: u8 = 1;

/// Largest accepted dot size (percent of a grid cell)
pub const MAX_PIXEL_SIZE: u8 = 100;

/// Minimum glyph height (rows)
pub const MIN_FONT_HEIGHT: usize = 1;

/// Maximum glyph height (rows)
pub const MAX_FONT_HEIGHT: usize = 256;

/// Minimum glyph width (columns)
pub const MIN_FONT_WIDTH: usize = 1;

/// Maximum default glyph width (columns)
pub const MAX_FONT_WIDTH: usize = 256;

/// Maximum tracking (blank columns after each glyph)
pub const MAX_TRACKING: usize = 32;

/// Shape used when rendering a lit dot. Stored as 0 (round) / 1 (square).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PixelShape {
    #[default]
    Round,
    Square,
}

impl TryFrom<u8> for PixelShape {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(PixelShape::Round),
            1 => Ok(PixelShape::Square),
            _ => Err(format!("unknown pixel shape {value}")),
        }
    }
}

impl From<PixelShape> for u8 {
    fn from(shape: PixelShape) -> Self {
        match shape {
            PixelShape::Round => 0,
            PixelShape::Square => 1,
        }
    }
}

/// Editor color scheme. Any name other than "dark" selects the light theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Theme::from_name(&name)
    }
}

impl From<Theme> for &'static str {
    fn from(theme: Theme) -> Self {
        theme.name()
    }
}

/// Styling record shared by every glyph of a font.
///
/// `pixel_size`, `pixel_shape`, `show_baseline` and `theme` only matter to renderers; the
/// model stores and passes them through. `height` is the uniform row count of every glyph,
/// `default_width` the column count of newly created glyphs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontStyles {
    pub pixel_size: u8,
    pub pixel_shape: PixelShape,
    pub height: usize,
    pub default_width: usize,
    /// Rows counted up from the bottom edge, `0..=height`
    pub baseline: usize,
    pub show_baseline: bool,
    pub tracking: usize,
    pub width_lock: bool,
    pub theme: Theme,
}

impl Default for FontStyles {
    fn default() -> Self {
        Self {
            pixel_size: 98,
            pixel_shape: PixelShape::Round,
            height: 10,
            default_width: 7,
            baseline: 2,
            show_baseline: false,
            tracking: 1,
            width_lock: false,
            theme: Theme::Dark,
        }
    }
}

impl FontStyles {
    pub fn accepts_pixel_size(value: i64) -> bool {
        (MIN_PIXEL_SIZE as i64..=MAX_PIXEL_SIZE as i64).contains(&value)
    }

    pub fn accepts_height(value: i64) -> bool {
        (MIN_FONT_HEIGHT as i64..=MAX_FONT_HEIGHT as i64).contains(&value)
    }

    pub fn accepts_width(value: i64) -> bool {
        (MIN_FONT_WIDTH as i64..=MAX_FONT_WIDTH as i64).contains(&value)
    }

    pub fn accepts_tracking(value: i64) -> bool {
        (0..=MAX_TRACKING as i64).contains(&value)
    }

    /// A baseline is valid between the bottom edge and the top edge inclusive
    pub fn accepts_baseline(&self, value: i64) -> bool {
        value >= 0 && value <= self.height as i64
    }

    /// Bring every field back into its documented range.
    ///
    /// Used for records that come from outside the editor (option files); live edits
    /// reject invalid values instead.
    pub fn sanitized(mut self) -> Self {
        self.pixel_size = self.pixel_size.clamp(MIN_PIXEL_SIZE, MAX_PIXEL_SIZE);
        self.height = self.height.clamp(MIN_FONT_HEIGHT, MAX_FONT_HEIGHT);
        self.default_width = self.default_width.clamp(MIN_FONT_WIDTH, MAX_FONT_WIDTH);
        self.baseline = self.baseline.min(self.height);
        self.tracking = self.tracking.min(MAX_TRACKING);
        self
    }
}
