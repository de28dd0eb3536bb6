//! Name and style setters
//!
//! Out-of-range values are ignored and the previous value kept. Every setter
//! re-broadcasts the touched field either way so views resynchronise their controls.

use dotmatrix_engine::{FontStyles, PixelShape, Theme};

use crate::{FontEvent, StyleChanges};

use super::FontModel;

impl FontModel {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
        self.emit(FontEvent::StyleChanged(StyleChanges::NAME));
    }

    /// Dot size in percent of a grid cell, `1..=100`
    pub fn set_pixel_size(&mut self, size: i64) {
        if FontStyles::accepts_pixel_size(size) {
            self.styles.pixel_size = size as u8;
            self.touch();
        } else {
            log::warn!("Ignoring pixel size {size}");
        }
        self.emit(FontEvent::StyleChanged(StyleChanges::PIXEL_SIZE));
    }

    pub fn set_pixel_shape(&mut self, shape: PixelShape) {
        self.styles.pixel_shape = shape;
        self.touch();
        self.emit(FontEvent::StyleChanged(StyleChanges::PIXEL_SHAPE));
    }

    /// Blank columns after each glyph, `0..=32`
    pub fn set_tracking(&mut self, tracking: i64) {
        if FontStyles::accepts_tracking(tracking) {
            self.styles.tracking = tracking as usize;
            self.touch();
        } else {
            log::warn!("Ignoring tracking {tracking}");
        }
        self.emit(FontEvent::StyleChanged(StyleChanges::TRACKING));
    }

    /// Set the baseline row, counted up from the bottom edge, `0..=height`.
    ///
    /// A valid value also turns the baseline display on.
    pub fn set_baseline(&mut self, baseline: i64) {
        if self.styles.accepts_baseline(baseline) {
            self.styles.baseline = baseline as usize;
            self.styles.show_baseline = true;
            self.touch();
        } else {
            log::warn!("Ignoring baseline {baseline} for a font {} rows high", self.styles.height);
        }
        self.emit(FontEvent::StyleChanged(StyleChanges::BASELINE | StyleChanges::SHOW_BASELINE));
    }

    pub fn show_baseline(&mut self) {
        self.set_show_baseline(true);
    }

    pub fn hide_baseline(&mut self) {
        self.set_show_baseline(false);
    }

    fn set_show_baseline(&mut self, show: bool) {
        self.styles.show_baseline = show;
        self.emit(FontEvent::StyleChanged(StyleChanges::SHOW_BASELINE));
    }

    pub fn set_width_lock(&mut self, lock: bool) {
        self.styles.width_lock = lock;
        self.emit(FontEvent::StyleChanged(StyleChanges::WIDTH_LOCK));
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.styles.theme = theme;
        self.emit(FontEvent::StyleChanged(StyleChanges::THEME));
    }
}
