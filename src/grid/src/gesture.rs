//! Pointer gestures over a [`Blob`].
//!
//! A [`Gesture`] holds the only mutable borrow of its blob for as long as the
//! pointer is down. Intermediate pointer movement only updates the gesture's
//! own pixel delta; the blob (and the record behind it) is written exactly
//! once, in [`Gesture::commit`]. [`Gesture::cancel`] writes nothing, so an
//! aborted drag can never leave a record half-edited.

use crate::{blob::Blob, scale::Scale};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// What part of the blob the pointer grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureKind {
    /// The body: the whole blob moves and keeps its length.
    Move,
    /// The trailing edge: the end moves, the start stays.
    ResizeEnd,
    /// The leading edge: the start moves, the end stays to pixel precision.
    ///
    /// The end is rewritten from the pixel grid, so an end lying between two
    /// pixels snaps to the nearest one.
    ResizeStart,
}

/// Pixel geometry of a blob, `position..position + size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start in pixels.
    pub position: i64,
    /// Length in pixels.
    pub size: i64,
}

impl Span {
    /// End in pixels.
    #[inline]
    pub const fn end(&self) -> i64 {
        self.position.saturating_add(self.size)
    }
}

/// An in-progress drag over a blob.
///
/// ```
/// use grid::{Blob, Gesture, GestureKind, IntervalBlob, LinearScale};
///
/// let scale = LinearScale::new(0_i64, 100, 1.0)?;
/// let mut blob = IntervalBlob::new(&scale, 10, 20);
///
/// let mut gesture = Gesture::begin(&mut blob, GestureKind::ResizeEnd);
/// gesture.drag_by(4);
/// gesture.drag_by(6);
/// gesture.commit();
/// assert_eq!(blob.size_in_grid_pixels(), 30);
/// # Ok::<(), grid::scale::ScaleError>(())
/// ```
#[derive(Debug)]
pub struct Gesture<'b, B: ?Sized> {
    blob: &'b mut B,
    kind: GestureKind,
    origin: Span,
    delta: i64,
}

impl<'b, B: Blob + ?Sized> Gesture<'b, B> {
    /// Grab `blob`. Its pixel geometry is recorded as the gesture's origin.
    pub fn begin(blob: &'b mut B, kind: GestureKind) -> Self {
        let origin = Span {
            position: blob.position_in_grid_pixels(),
            size: blob.size_in_grid_pixels(),
        };
        Self {
            blob,
            kind,
            origin,
            delta: 0,
        }
    }

    /// What part of the blob is being dragged.
    #[inline]
    pub const fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Total pointer movement since [`begin`](Self::begin).
    #[inline]
    pub const fn delta(&self) -> i64 {
        self.delta
    }

    /// Add pointer movement (one pointer-move event).
    #[inline]
    pub fn drag_by(&mut self, pixels: i64) {
        self.delta = self.delta.saturating_add(pixels);
    }

    /// Replace the total pointer movement since [`begin`](Self::begin).
    #[inline]
    pub fn drag_to(&mut self, pixels: i64) {
        self.delta = pixels;
    }

    /// Where the blob would be drawn if the gesture ended now.
    ///
    /// Resizes never shrink the blob below zero pixels.
    pub fn preview(&self) -> Span {
        let Span { position, size } = self.origin;
        match self.kind {
            GestureKind::Move => Span {
                position: position.saturating_add(self.delta),
                size,
            },
            GestureKind::ResizeEnd => Span {
                position,
                size: size.saturating_add(self.delta).max(0),
            },
            GestureKind::ResizeStart => {
                // the leading edge may not pass the trailing edge
                let delta = self.delta.min(size.max(0));
                Span {
                    position: position.saturating_add(delta),
                    size: size.saturating_sub(delta),
                }
            }
        }
    }

    /// End the gesture, writing the previewed geometry into the blob.
    ///
    /// Returns the committed span. A gesture that never moved writes nothing.
    pub fn commit(self) -> Span {
        let span = self.preview();
        if self.delta == 0 {
            trace!(kind = ?self.kind, "gesture ended without movement");
            return span;
        }
        match self.kind {
            GestureKind::Move | GestureKind::ResizeStart => {
                let position = self.blob.scale().from_pixels(span.position);
                self.blob.set_interval(position, span.size);
            }
            GestureKind::ResizeEnd => {
                self.blob.set_size_in_grid_pixels(span.size);
            }
        }
        debug!(
            kind = ?self.kind,
            delta = self.delta,
            position = span.position,
            size = span.size,
            "gesture committed"
        );
        span
    }

    /// Abort the gesture. The blob is left exactly as it was.
    pub fn cancel(self) {
        trace!(kind = ?self.kind, delta = self.delta, "gesture cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        blob::IntervalBlob,
        data::{Shift, ShiftId, SpotId, TenantId, TimeSlot},
        datetime,
        scale::LinearScale,
        shift_blob::ShiftBlob,
    };

    fn record() -> Shift {
        Shift {
            id: ShiftId(1),
            tenant_id: TenantId(0),
            spot_id: SpotId(0),
            time_slot: TimeSlot {
                start: datetime!(4/5/2025 @ 9:00),
                end: datetime!(4/5/2025 @ 10:00),
            },
            employee: None,
        }
    }

    fn scale() -> LinearScale<chrono::NaiveDateTime> {
        LinearScale::new(datetime!(4/5/2025 @ 8:00), datetime!(4/5/2025 @ 20:00), 2.0).unwrap()
    }

    #[test]
    fn test_move_keeps_length() {
        let scale = scale();
        let mut shift = record();
        let mut blob = ShiftBlob::new(&scale, &mut shift);
        let mut gesture = Gesture::begin(&mut blob, GestureKind::Move);
        gesture.drag_by(20);
        gesture.drag_by(10);
        assert_eq!(
            gesture.commit(),
            Span {
                position: 150,
                size: 120
            }
        );
        assert_eq!(shift.time_slot.start, datetime!(4/5/2025 @ 9:15));
        assert_eq!(shift.time_slot.end, datetime!(4/5/2025 @ 10:15));
    }

    #[test]
    fn test_resize_end() {
        let scale = scale();
        let mut shift = record();
        let mut blob = ShiftBlob::new(&scale, &mut shift);
        let mut gesture = Gesture::begin(&mut blob, GestureKind::ResizeEnd);
        gesture.drag_to(60);
        gesture.commit();
        assert_eq!(shift.time_slot.start, datetime!(4/5/2025 @ 9:00));
        assert_eq!(shift.time_slot.end, datetime!(4/5/2025 @ 10:30));
    }

    #[test]
    fn test_resize_start_keeps_end() {
        let scale = scale();
        let mut shift = record();
        let mut blob = ShiftBlob::new(&scale, &mut shift);
        let mut gesture = Gesture::begin(&mut blob, GestureKind::ResizeStart);
        gesture.drag_by(-30);
        gesture.commit();
        assert_eq!(shift.time_slot.start, datetime!(4/5/2025 @ 8:45));
        assert_eq!(shift.time_slot.end, datetime!(4/5/2025 @ 10:00));
    }

    #[test]
    fn test_no_writes_while_dragging() {
        let scale = scale();
        let mut shift = record();
        let before = shift.clone();
        let mut blob = ShiftBlob::new(&scale, &mut shift);
        let mut gesture = Gesture::begin(&mut blob, GestureKind::Move);
        gesture.drag_by(40);
        assert_eq!(gesture.preview().position, 160);
        gesture.drag_by(-10);
        assert_eq!(gesture.delta(), 30);
        gesture.cancel();
        assert_eq!(shift, before, "a cancelled gesture should write nothing");
    }

    #[test]
    fn test_zero_delta_commits_nothing() {
        let scale = scale();
        let mut shift = record();
        shift.time_slot.end = datetime!(4/5/2025 @ 10:00) + chrono::TimeDelta::seconds(10);
        let before = shift.clone();
        let mut blob = ShiftBlob::new(&scale, &mut shift);
        let mut gesture = Gesture::begin(&mut blob, GestureKind::ResizeEnd);
        gesture.drag_by(15);
        gesture.drag_by(-15);
        gesture.commit();
        assert_eq!(
            shift, before,
            "an unmoved gesture should not re-quantize the record"
        );
    }

    #[test]
    fn test_resize_clamps_at_zero() {
        let scale = LinearScale::new(0_i64, 100, 1.0).unwrap();
        let mut blob = IntervalBlob::new(&scale, 10, 20);

        let mut gesture = Gesture::begin(&mut blob, GestureKind::ResizeEnd);
        gesture.drag_by(-50);
        assert_eq!(gesture.preview(), Span { position: 10, size: 0 });
        gesture.commit();
        assert_eq!(blob.size_in_grid_pixels(), 0);

        let mut blob = IntervalBlob::new(&scale, 10, 20);
        let mut gesture = Gesture::begin(&mut blob, GestureKind::ResizeStart);
        gesture.drag_by(50);
        assert_eq!(gesture.preview(), Span { position: 30, size: 0 });
        gesture.commit();
        assert_eq!(blob.position_in_scale_units(), 30);
        assert_eq!(blob.size_in_grid_pixels(), 0);
    }

    #[test]
    fn test_resize_start_snaps_end_to_pixels() {
        let scale =
            LinearScale::new(datetime!(4/5/2025 @ 8:00), datetime!(4/5/2025 @ 18:00), 0.5).unwrap();
        let mut shift = record();
        shift.time_slot.end = datetime!(4/5/2025 @ 12:01);
        let mut blob = ShiftBlob::new(&scale, &mut shift);
        assert_eq!(blob.size_in_grid_pixels(), 91);
        let mut gesture = Gesture::begin(&mut blob, GestureKind::ResizeStart);
        gesture.drag_by(-10);
        gesture.commit();
        assert_eq!(shift.time_slot.start, datetime!(4/5/2025 @ 8:40));
        assert_eq!(
            shift.time_slot.end,
            scale.snap(datetime!(4/5/2025 @ 12:01)),
            "the end should land on the nearest pixel"
        );
        assert_eq!(shift.time_slot.end, datetime!(4/5/2025 @ 12:02));
    }

    #[test]
    fn test_resize_start_with_negative_size() {
        let scale = LinearScale::new(0_i64, 100, 1.0).unwrap();
        let mut blob = IntervalBlob::new(&scale, 10, 20);
        blob.set_size_in_grid_pixels(-10);

        let mut gesture = Gesture::begin(&mut blob, GestureKind::ResizeStart);
        gesture.drag_by(5);
        assert_eq!(
            gesture.preview(),
            Span {
                position: 10,
                size: -10
            },
            "dragging right should never move the start left"
        );
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(
            serde_json::to_string(&GestureKind::ResizeEnd).unwrap(),
            r#""resizeEnd""#
        );
    }
}
