//! The spot roster grid: one lane per spot, one blob per shift.
//!
//! [`SpotRoster`] is the consumer side of the [`Blob`] contract. It builds
//! [`ShiftBlob`]s over a [`Roster`]'s shifts, hands them out to gestures, and
//! lays them out as pixel rectangles for drawing.

use crate::{
    blob::Blob,
    data::{Roster, ShiftId, Spot, SpotId},
    gesture::{Gesture, GestureKind, Span},
    scale::Scale,
    shift_blob::ShiftBlob,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::warn;

/// One row of the grid.
#[derive(Debug)]
pub struct Lane<'s, 'r, S: ?Sized> {
    /// Spot drawn in this lane.
    pub spot: &'r Spot,

    /// The spot's shifts, ordered by time slot.
    pub blobs: Vec<ShiftBlob<'s, 'r, S>>,
}

/// Drawable rectangle for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobRect {
    /// Shift the rectangle is drawn for.
    pub shift_id: ShiftId,
    /// Left edge in pixels. May fall outside the grid; clip when drawing.
    pub x: i64,
    /// Width in pixels.
    pub width: i64,
    /// Text to draw inside the rectangle.
    pub label: String,
}

/// Drawable contents of one lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneLayout {
    /// Spot drawn in this lane.
    pub spot_id: SpotId,
    /// Spot name, used as the row header.
    pub title: String,
    /// One rectangle per shift, left to right.
    pub rects: Vec<BlobRect>,
}

/// Roster grid over one tenant's shifts.
///
/// Borrows the roster mutably: edits made through its blobs land directly in
/// the roster's shifts. Rebuild it whenever the roster or the scale changes.
#[derive(Debug)]
pub struct SpotRoster<'s, 'r, S: ?Sized> {
    scale: &'s S,
    lanes: Vec<Lane<'s, 'r, S>>,
}

impl<'s, 'r, S: Scale<NaiveDateTime> + ?Sized> SpotRoster<'s, 'r, S> {
    /// Build one lane per spot, in roster order.
    ///
    /// Shifts referring to a spot the roster does not list are left out.
    pub fn new(scale: &'s S, roster: &'r mut Roster) -> Self {
        let Roster { spots, shifts, .. } = roster;
        let spots: &'r [Spot] = spots;
        let mut lanes = spots
            .iter()
            .map(|spot| Lane {
                spot,
                blobs: Vec::new(),
            })
            .collect::<Vec<_>>();

        for shift in shifts {
            match lanes.iter_mut().find(|lane| lane.spot.id == shift.spot_id) {
                Some(lane) => lane.blobs.push(ShiftBlob::new(scale, shift)),
                None => warn!(shift = %shift.id, spot = %shift.spot_id, "shift refers to unknown spot"),
            }
        }

        for lane in &mut lanes {
            lane.blobs
                .sort_by(|a, b| a.shift().time_slot.cmp(&b.shift().time_slot));
        }

        Self { scale, lanes }
    }

    /// Scale every lane is drawn through.
    #[inline]
    pub fn scale(&self) -> &'s S {
        self.scale
    }

    /// Lanes in display order.
    #[inline]
    pub fn lanes(&self) -> &[Lane<'s, 'r, S>] {
        &self.lanes
    }

    /// Find the blob drawn for `id`.
    pub fn blob_mut(&mut self, id: ShiftId) -> Option<&mut ShiftBlob<'s, 'r, S>> {
        self.lanes
            .iter_mut()
            .flat_map(|lane| lane.blobs.iter_mut())
            .find(|blob| blob.id() == id)
    }

    /// Run a complete gesture on the blob for `id`: grab, drag by `pixels`, release.
    ///
    /// Returns the committed span, or [`None`] if no blob is drawn for `id`.
    pub fn drag(&mut self, id: ShiftId, kind: GestureKind, pixels: i64) -> Option<Span> {
        let blob = self.blob_mut(id)?;
        let mut gesture = Gesture::begin(blob, kind);
        gesture.drag_by(pixels);
        Some(gesture.commit())
    }

    /// Pixel rectangles for every lane.
    pub fn layout(&self) -> Vec<LaneLayout> {
        self.lanes
            .iter()
            .map(|lane| LaneLayout {
                spot_id: lane.spot.id,
                title: lane.spot.name.clone(),
                rects: lane
                    .blobs
                    .iter()
                    .map(|blob| BlobRect {
                        shift_id: blob.id(),
                        x: blob.position_in_grid_pixels(),
                        width: blob.size_in_grid_pixels(),
                        label: blob.label().to_string(),
                    })
                    .collect(),
            })
            .collect()
    }
}
