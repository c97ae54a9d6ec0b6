//! Mapping between domain values and grid pixels along one axis.
//!
//! A [`Scale`] is built once per render configuration (visible window and
//! pixel density) and shared read-only by every blob drawn with it. Zooming or
//! resizing the grid produces a *new* scale; scales are never mutated.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use thiserror::Error;

/// Bidirectional transform between domain values and integer grid pixels.
///
/// # Contract
///
/// - [`to_pixels`](Scale::to_pixels) is monotonic: `a <= b` implies
///   `to_pixels(a) <= to_pixels(b)`.
/// - [`from_pixels`](Scale::from_pixels) is the approximate inverse.
///   `to_pixels(from_pixels(p))` may be off by pixel quantization, but the
///   result is settled: converting it back yields the same domain value.
/// - Values outside the window extrapolate. Callers clip.
pub trait Scale<T> {
    /// Pixel offset of `value` from the start of the grid.
    fn to_pixels(&self, value: T) -> i64;

    /// Domain value sitting at `pixels` from the start of the grid.
    fn from_pixels(&self, pixels: i64) -> T;

    /// First domain value of the visible window.
    fn start_in_scale_units(&self) -> T;

    /// Last domain value of the visible window.
    fn end_in_scale_units(&self) -> T;

    /// Width of the visible window in pixels.
    fn end_in_grid_pixels(&self) -> i64 {
        self.to_pixels(self.end_in_scale_units())
    }

    /// Round `value` to the nearest value representable on the grid.
    fn snap(&self, value: T) -> T {
        self.from_pixels(self.to_pixels(value))
    }

    /// Whether `value` falls inside the visible window (inclusive).
    fn contains(&self, value: T) -> bool
    where
        T: PartialOrd,
    {
        self.start_in_scale_units() <= value && value <= self.end_in_scale_units()
    }
}

impl<T, S: Scale<T> + ?Sized> Scale<T> for &S {
    #[inline]
    fn to_pixels(&self, value: T) -> i64 {
        (**self).to_pixels(value)
    }

    #[inline]
    fn from_pixels(&self, pixels: i64) -> T {
        (**self).from_pixels(pixels)
    }

    #[inline]
    fn start_in_scale_units(&self) -> T {
        (**self).start_in_scale_units()
    }

    #[inline]
    fn end_in_scale_units(&self) -> T {
        (**self).end_in_scale_units()
    }
}

/// Domain types that can be measured along a straight line.
///
/// Each implementor picks a base unit; a [`LinearScale`]'s density is
/// expressed in pixels per that unit.
///
/// | Type                                         | Unit               |
/// |----------------------------------------------|--------------------|
/// | [`i64`]                                      | 1                  |
/// | [`f64`]                                      | 1.0                |
/// | [`NaiveDateTime`], [`DateTime<Utc>`]         | one minute         |
pub trait Linear: Copy + PartialOrd + std::fmt::Debug {
    /// Signed distance from `origin` to `self` in base units.
    fn units_since(&self, origin: &Self) -> f64;

    /// `self` advanced by `units` base units.
    ///
    /// Must not panic. Results beyond the type's range saturate.
    fn add_units(&self, units: f64) -> Self;
}

impl Linear for i64 {
    #[inline]
    fn units_since(&self, origin: &Self) -> f64 {
        self.saturating_sub(*origin) as f64
    }

    #[inline]
    fn add_units(&self, units: f64) -> Self {
        // float -> int casts saturate
        self.saturating_add(units.round() as i64)
    }
}

impl Linear for f64 {
    #[inline]
    fn units_since(&self, origin: &Self) -> f64 {
        self - origin
    }

    #[inline]
    fn add_units(&self, units: f64) -> Self {
        self + units
    }
}

const MILLIS_PER_MINUTE: f64 = 60_000.0;

impl Linear for NaiveDateTime {
    #[inline]
    fn units_since(&self, origin: &Self) -> f64 {
        self.signed_duration_since(*origin).num_milliseconds() as f64 / MILLIS_PER_MINUTE
    }

    fn add_units(&self, units: f64) -> Self {
        let saturated = if units < 0.0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        };
        TimeDelta::try_milliseconds((units * MILLIS_PER_MINUTE).round() as i64)
            .and_then(|delta| self.checked_add_signed(delta))
            .unwrap_or(saturated)
    }
}

impl Linear for DateTime<Utc> {
    #[inline]
    fn units_since(&self, origin: &Self) -> f64 {
        self.naive_utc().units_since(&origin.naive_utc())
    }

    #[inline]
    fn add_units(&self, units: f64) -> Self {
        self.naive_utc().add_units(units).and_utc()
    }
}

/// Error constructing a [`LinearScale`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// Density must be a finite number above zero, or the mapping would not be monotonic.
    #[error("pixels per unit must be finite and positive, got {0}")]
    InvalidDensity(f64),

    /// The window ends before it starts.
    #[error("scale window ends before it starts")]
    ReversedWindow,

    /// A scale cannot be fitted to an empty window.
    #[error("scale window is empty")]
    EmptyWindow,

    /// A scale cannot be fitted into zero or fewer pixels.
    #[error("grid width must be positive, got {0}px")]
    InvalidWidth(i64),
}

/// Fixed linear transform `pixels = (value - start) * pixels_per_unit`.
///
/// Pixel values are rounded to the nearest integer, which keeps the mapping
/// monotonic and makes [`Scale::snap`] round to the nearest grid pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale<T> {
    start: T,
    end: T,
    pixels_per_unit: f64,
}

impl<T: Linear> LinearScale<T> {
    /// Construct a scale over `start..=end` at a fixed density.
    pub fn new(start: T, end: T, pixels_per_unit: f64) -> Result<Self, ScaleError> {
        if !(pixels_per_unit.is_finite() && pixels_per_unit > 0.0) {
            return Err(ScaleError::InvalidDensity(pixels_per_unit));
        }
        if !(start <= end) {
            return Err(ScaleError::ReversedWindow);
        }
        Ok(Self {
            start,
            end,
            pixels_per_unit,
        })
    }

    /// Construct a scale that stretches `start..=end` across `width` pixels.
    pub fn fit(start: T, end: T, width: i64) -> Result<Self, ScaleError> {
        if width <= 0 {
            return Err(ScaleError::InvalidWidth(width));
        }
        let units = end.units_since(&start);
        if units < 0.0 {
            return Err(ScaleError::ReversedWindow);
        }
        if units == 0.0 {
            return Err(ScaleError::EmptyWindow);
        }
        Self::new(start, end, width as f64 / units)
    }

    /// Pixels drawn for one base unit of the domain.
    #[inline]
    pub const fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// A new scale over the same window with density multiplied by `factor`.
    pub fn zoomed(&self, factor: f64) -> Result<Self, ScaleError> {
        Self::new(self.start, self.end, self.pixels_per_unit * factor)
    }

    /// A new scale at the same density whose window is moved by `pixels`.
    ///
    /// Positive values scroll towards later values.
    pub fn panned(&self, pixels: i64) -> Self {
        let units = pixels as f64 / self.pixels_per_unit;
        Self {
            start: self.start.add_units(units),
            end: self.end.add_units(units),
            pixels_per_unit: self.pixels_per_unit,
        }
    }
}

impl<T: Linear> Scale<T> for LinearScale<T> {
    #[inline]
    fn to_pixels(&self, value: T) -> i64 {
        (value.units_since(&self.start) * self.pixels_per_unit).round() as i64
    }

    #[inline]
    fn from_pixels(&self, pixels: i64) -> T {
        self.start.add_units(pixels as f64 / self.pixels_per_unit)
    }

    #[inline]
    fn start_in_scale_units(&self) -> T {
        self.start
    }

    #[inline]
    fn end_in_scale_units(&self) -> T {
        self.end
    }
}
