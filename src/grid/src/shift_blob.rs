//! See [`ShiftBlob`]

use crate::{
    blob::Blob,
    data::{Shift, ShiftId},
    scale::Scale,
};
use chrono::NaiveDateTime;
use thiserror::Error;

/// Rejected edit through one of the checked [`ShiftBlob`] setters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlobError {
    /// A blob cannot be resized to fewer than zero pixels.
    #[error("shift {shift} cannot be {size}px long")]
    NegativeSize {
        /// The shift being resized
        shift: ShiftId,
        /// The rejected size
        size: i64,
    },

    /// The new start lies outside the visible window.
    #[error("shift {shift} cannot start at {start}, outside the visible window")]
    OutsideWindow {
        /// The shift being moved
        shift: ShiftId,
        /// The rejected start
        start: NaiveDateTime,
    },
}

/// A [`Blob`] over points in time, writing edits through to one [`Shift`].
///
/// The blob's position *is* the shift's start: reads come from the record and
/// writes go straight into it. The pixel size is computed once on construction
/// and cached; every size change recomputes the shift's end through the scale.
///
/// Dropped and rebuilt whenever the shift or the scale is replaced.
#[derive(Debug)]
pub struct ShiftBlob<'s, 'r, S: ?Sized> {
    scale: &'s S,
    shift: &'r mut Shift,
    size_in_grid_pixels: i64,
}

impl<'s, 'r, S: Scale<NaiveDateTime> + ?Sized> ShiftBlob<'s, 'r, S> {
    /// Wrap `shift`, measuring its current length through `scale`.
    pub fn new(scale: &'s S, shift: &'r mut Shift) -> Self {
        let size_in_grid_pixels = scale
            .to_pixels(shift.time_slot.end)
            .saturating_sub(scale.to_pixels(shift.time_slot.start));
        Self {
            scale,
            shift,
            size_in_grid_pixels,
        }
    }

    /// Display text for the blob: the assigned employee's name, or "Unassigned".
    #[inline]
    pub fn label(&self) -> &str {
        self.shift.label()
    }

    /// The wrapped record.
    #[inline]
    pub fn shift(&self) -> &Shift {
        self.shift
    }

    /// ID of the wrapped record.
    #[inline]
    pub fn id(&self) -> ShiftId {
        self.shift.id
    }

    /// [`set_size_in_grid_pixels`](Blob::set_size_in_grid_pixels), rejecting negative sizes.
    ///
    /// Nothing is written on error.
    pub fn try_set_size_in_grid_pixels(&mut self, size: i64) -> Result<(), BlobError> {
        if size < 0 {
            return Err(BlobError::NegativeSize {
                shift: self.shift.id,
                size,
            });
        }
        self.set_size_in_grid_pixels(size);
        Ok(())
    }

    /// [`set_position_in_scale_units`](Blob::set_position_in_scale_units), rejecting starts
    /// outside the scale's window.
    ///
    /// Nothing is written on error.
    pub fn try_set_position_in_scale_units(
        &mut self,
        start: NaiveDateTime,
    ) -> Result<(), BlobError> {
        if !self.scale.contains(start) {
            return Err(BlobError::OutsideWindow {
                shift: self.shift.id,
                start,
            });
        }
        self.set_position_in_scale_units(start);
        Ok(())
    }
}

impl<S: Scale<NaiveDateTime> + ?Sized> Blob for ShiftBlob<'_, '_, S> {
    type Unit = NaiveDateTime;
    type Scale = S;

    #[inline]
    fn position_in_scale_units(&self) -> NaiveDateTime {
        self.shift.time_slot.start
    }

    /// Writes the shift's start. The shift's end is left as is.
    #[inline]
    fn set_position_in_scale_units(&mut self, start: NaiveDateTime) {
        self.shift.time_slot.start = start;
    }

    #[inline]
    fn size_in_grid_pixels(&self) -> i64 {
        self.size_in_grid_pixels
    }

    /// Stores the size, then writes the shift's end as `from_pixels(to_pixels(start) + size)`.
    fn set_size_in_grid_pixels(&mut self, size: i64) {
        self.size_in_grid_pixels = size;
        self.shift.time_slot.end = self.end_position_in_scale_units();
    }

    #[inline]
    fn scale(&self) -> &S {
        self.scale
    }
}
