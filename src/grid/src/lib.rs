//! # grid
//!
//! Coordinate model behind the visual roster: maps domain values (points in
//! time, indices) onto grid pixels and keeps draggable intervals ("blobs")
//! consistent in both coordinate systems while they are edited.
//!
//! # Modules
//!
//! - **[`scale`]**: [`Scale`](scale::Scale) and the [`LinearScale`](scale::LinearScale) transform
//! - **[`blob`]**: the [`Blob`](blob::Blob) contract and a free-standing [`IntervalBlob`](blob::IntervalBlob)
//! - **[`shift_blob`]**: [`ShiftBlob`](shift_blob::ShiftBlob), a blob writing through to a [`Shift`](data::Shift)
//! - **[`gesture`]**: batched drag/resize edits that write once on commit
//! - **[`roster`]**: one lane of shift blobs per spot, with pixel layout
//! - **[`config`]**: grid configuration loaded from JSON
//! - **[`data`]**: records handed over by the REST layer

#![deny(
    clippy::undocumented_unsafe_blocks,
    clippy::missing_safety_doc,
    reason = "multi-person projects should document dangers"
)]
#![warn(missing_docs)]
#![cfg_attr(
    not(any(test, debug_assertions)),
    deny(
        clippy::missing_panics_doc,
        clippy::panic,
        clippy::unimplemented,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "prefer errors over panicking"
    )
)]
#![cfg_attr(
    not(any(test, debug_assertions)),
    forbid(clippy::todo, reason = "production code should not use `todo`")
)]

pub mod blob;
pub mod config;
pub mod data;
pub mod gesture;
pub mod roster;
pub mod scale;
pub mod shift_blob;

pub use blob::{Blob, IntervalBlob};
pub use config::GridConfig;
pub use gesture::{Gesture, GestureKind, Span};
pub use roster::SpotRoster;
pub use scale::{Linear, LinearScale, Scale};
pub use shift_blob::ShiftBlob;

/// Create a [`NaiveDateTime`](chrono::NaiveDateTime) literal.
///
/// Expects `m/d/y` format. Time can be appended with `@ h:m`.
///
/// ```
/// let t = grid::datetime!(4/5/2025 @ 9:30);
/// assert_eq!(t.to_string(), "2025-04-05 09:30:00");
/// ```
#[macro_export]
macro_rules! datetime {
    ($mo:literal/$d:literal/$yr:literal$( @ $hr:literal:$m:literal)?) => {
        chrono::NaiveDateTime::new(
            chrono::NaiveDate::from_ymd_opt($yr, $mo, $d)
                .unwrap_or_else(|| panic!(
                    "`{}/{}/{}` is not a valid date",
                    $mo,
                    $d,
                    $yr,
                )),
            None$(.or(Some(chrono::NaiveTime::from_hms_opt($hr, $m, 0)
                .unwrap_or_else(|| panic!(
                    "`{}:{}` is not a valid time",
                    $hr,
                    $m,
                )))))?
                .unwrap_or_default(),
        )
    };
}
