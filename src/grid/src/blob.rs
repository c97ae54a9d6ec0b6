//! The draggable/resizable interval contract shared by every grid row.
//!
//! A blob is positioned in *domain* units but sized in *pixel* units:
//! dragging snaps the start to the domain's granularity, resizing works at
//! pixel granularity, and the domain end value is derived from both through
//! the blob's [`Scale`].

use crate::scale::Scale;

/// An interval drawn on a grid through a shared [`Scale`].
///
/// # Position and size are independent
///
/// [`set_position_in_scale_units`](Blob::set_position_in_scale_units) moves the
/// start and leaves the cached pixel size alone.
/// [`set_size_in_grid_pixels`](Blob::set_size_in_grid_pixels) stores the size and
/// derives the end from the *current* start. Neither setter calls the other.
///
/// After a position change, the end derived by
/// [`end_position_in_scale_units`](Blob::end_position_in_scale_units) follows the
/// new start, but whatever an implementor persisted on the last size change does
/// not. Use [`set_interval`](Blob::set_interval) to move a blob and keep both in
/// step.
pub trait Blob {
    /// Domain value type the blob is positioned in.
    type Unit: Copy;

    /// Scale the blob is drawn through.
    type Scale: Scale<Self::Unit> + ?Sized;

    /// Start of the interval in domain units.
    fn position_in_scale_units(&self) -> Self::Unit;

    /// Move the start of the interval. The pixel size is preserved.
    fn set_position_in_scale_units(&mut self, position: Self::Unit);

    /// Length of the interval in pixels.
    ///
    /// Always exactly the value last passed to
    /// [`set_size_in_grid_pixels`](Blob::set_size_in_grid_pixels) (or computed on construction).
    fn size_in_grid_pixels(&self) -> i64;

    /// Resize the interval and persist the derived end.
    fn set_size_in_grid_pixels(&mut self, size: i64);

    /// Scale the blob is drawn through.
    fn scale(&self) -> &Self::Scale;

    /// Start of the interval in pixels.
    fn position_in_grid_pixels(&self) -> i64 {
        self.scale().to_pixels(self.position_in_scale_units())
    }

    /// End of the interval in pixels.
    fn end_position_in_grid_pixels(&self) -> i64 {
        self.position_in_grid_pixels()
            .saturating_add(self.size_in_grid_pixels())
    }

    /// End of the interval in domain units, derived from the current start and size.
    fn end_position_in_scale_units(&self) -> Self::Unit {
        self.scale()
            .from_pixels(self.end_position_in_grid_pixels())
    }

    /// Move and resize in one step.
    ///
    /// The start is written first, so the end is derived from `position` and `size`.
    fn set_interval(&mut self, position: Self::Unit, size: i64) {
        self.set_position_in_scale_units(position);
        self.set_size_in_grid_pixels(size);
    }
}

/// A blob that owns its start value, for axes with no backing record.
///
/// ```
/// use grid::{Blob, IntervalBlob, LinearScale};
///
/// let rows = LinearScale::new(0_i64, 100, 4.0)?;
/// let mut blob = IntervalBlob::new(&rows, 10, 12);
/// assert_eq!(blob.end_position_in_scale_units(), 13);
/// blob.set_position_in_scale_units(20);
/// assert_eq!(blob.size_in_grid_pixels(), 12);
/// # Ok::<(), grid::scale::ScaleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalBlob<'s, T, S: ?Sized> {
    scale: &'s S,
    position: T,
    size: i64,
}

impl<'s, T: Copy, S: Scale<T> + ?Sized> IntervalBlob<'s, T, S> {
    /// Construct a blob starting at `position` spanning `size` pixels.
    pub const fn new(scale: &'s S, position: T, size: i64) -> Self {
        Self {
            scale,
            position,
            size,
        }
    }

    /// Construct a blob covering `start..end` in domain units.
    pub fn spanning(scale: &'s S, start: T, end: T) -> Self {
        let size = scale.to_pixels(end).saturating_sub(scale.to_pixels(start));
        Self::new(scale, start, size)
    }
}

impl<T: Copy, S: Scale<T> + ?Sized> Blob for IntervalBlob<'_, T, S> {
    type Unit = T;
    type Scale = S;

    #[inline]
    fn position_in_scale_units(&self) -> T {
        self.position
    }

    #[inline]
    fn set_position_in_scale_units(&mut self, position: T) {
        self.position = position;
    }

    #[inline]
    fn size_in_grid_pixels(&self) -> i64 {
        self.size
    }

    #[inline]
    fn set_size_in_grid_pixels(&mut self, size: i64) {
        self.size = size;
    }

    #[inline]
    fn scale(&self) -> &S {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::LinearScale;

    #[test]
    fn test_position_preserves_size() {
        let scale = LinearScale::new(0.0_f64, 100.0, 2.0).unwrap();
        let mut blob = IntervalBlob::spanning(&scale, 10.0, 25.0);
        assert_eq!(blob.size_in_grid_pixels(), 30);
        blob.set_position_in_scale_units(40.0);
        assert_eq!(blob.size_in_grid_pixels(), 30);
        assert_eq!(blob.end_position_in_scale_units(), 55.0);
    }

    #[test]
    fn test_size_updates_end() {
        let scale = LinearScale::new(0.0_f64, 100.0, 4.0).unwrap();
        let mut blob = IntervalBlob::new(&scale, 10.0, 0);
        blob.set_size_in_grid_pixels(18);
        assert_eq!(blob.end_position_in_scale_units(), 10.0 + 18.0 / 4.0);
    }

    #[test]
    fn test_pixel_geometry() {
        let scale = LinearScale::new(100_i64, 200, 3.0).unwrap();
        let blob = IntervalBlob::spanning(&scale, 110, 120);
        assert_eq!(blob.position_in_grid_pixels(), 30);
        assert_eq!(blob.size_in_grid_pixels(), 30);
        assert_eq!(blob.end_position_in_grid_pixels(), 60);
        assert_eq!(blob.end_position_in_scale_units(), 120);
    }

    #[test]
    fn test_set_interval() {
        let scale = LinearScale::new(0_i64, 100, 1.0).unwrap();
        let mut blob = IntervalBlob::new(&scale, 5, 10);
        blob.set_interval(50, 25);
        assert_eq!(blob.position_in_scale_units(), 50);
        assert_eq!(blob.size_in_grid_pixels(), 25);
        assert_eq!(blob.end_position_in_scale_units(), 75);
    }

    #[test]
    fn test_negative_size_propagates() {
        let scale = LinearScale::new(0_i64, 100, 1.0).unwrap();
        let mut blob = IntervalBlob::new(&scale, 50, 10);
        blob.set_size_in_grid_pixels(-20);
        assert_eq!(blob.size_in_grid_pixels(), -20);
        assert_eq!(
            blob.end_position_in_scale_units(),
            30,
            "negative sizes are not rejected at this level"
        );
    }

    #[test]
    fn test_dyn_scale() {
        let scale = LinearScale::new(0_i64, 100, 1.0).unwrap();
        let dynamic: &dyn Scale<i64> = &scale;
        let blob = IntervalBlob::spanning(dynamic, 10, 20);
        assert_eq!(blob.size_in_grid_pixels(), 10);
    }
}
