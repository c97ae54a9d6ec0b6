//! Plain-text drawing of a laid-out roster grid.

use chrono::NaiveDateTime;
use grid::roster::{BlobRect, LaneLayout};
use serde::Serialize;
use std::io::Write;

/// Everything needed to draw one render pass.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    /// Left edge of the visible window.
    pub window_start: NaiveDateTime,
    /// Right edge of the visible window.
    pub window_end: NaiveDateTime,
    /// Width of the visible window in pixels.
    pub width: i64,
    /// Lanes, top to bottom.
    pub lanes: Vec<LaneLayout>,
}

/// Columns covered by `rect` once clipped to `0..width` pixels, or [`None`] if nothing is visible.
fn columns(rect: &BlobRect, width: i64, column_width: i64) -> Option<(usize, usize)> {
    let left = rect.x.clamp(0, width);
    let right = rect.x.saturating_add(rect.width).clamp(0, width);
    if left >= right {
        return None;
    }
    let first = left / column_width;
    // round the right edge up so narrow blobs still get a cell
    let last = right.saturating_add(column_width - 1) / column_width;
    Some((usize::try_from(first).ok()?, usize::try_from(last).ok()?))
}

/// Draw one lane into a row of `cols` cells.
fn draw_lane(lane: &LaneLayout, width: i64, column_width: i64, cols: usize) -> String {
    let mut cells = vec![' '; cols];
    for rect in &lane.rects {
        let Some((first, last)) = columns(rect, width, column_width) else {
            continue;
        };
        let last = last.min(cols);
        if last <= first {
            continue;
        }
        let span = &mut cells[first..last];
        if span.len() < 2 {
            span.fill('#');
            continue;
        }
        span.fill('=');
        let end = span.len() - 1;
        span[0] = '[';
        span[end] = ']';
        for (cell, ch) in span[1..end].iter_mut().zip(rect.label.chars()) {
            *cell = ch;
        }
    }
    cells.into_iter().collect()
}

/// Write `view` as text, one row per lane, `column_width` pixels per character.
pub fn write_text<W: Write>(mut w: W, view: &GridView, column_width: i64) -> std::io::Result<()> {
    let column_width = column_width.max(1);
    let cols =
        usize::try_from(view.width.saturating_add(column_width - 1) / column_width).unwrap_or(0);
    let title_width = view
        .lanes
        .iter()
        .map(|lane| lane.title.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(
        w,
        "{:title_width$} |{} .. {}",
        "",
        view.window_start.format("%Y-%m-%d %H:%M"),
        view.window_end.format("%Y-%m-%d %H:%M"),
    )?;
    for lane in &view.lanes {
        writeln!(
            w,
            "{:<title_width$} |{}|",
            lane.title,
            draw_lane(lane, view.width, column_width, cols)
        )?;
    }
    Ok(())
}
