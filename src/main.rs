//! # roster-grid
//!
//! Lays out a tenant's roster on a timeline grid, optionally applying
//! drag/resize gestures to shifts first.

#![deny(
    clippy::undocumented_unsafe_blocks,
    clippy::missing_safety_doc,
    reason = "multi-person projects should document dangers"
)]
#![cfg_attr(
    not(any(test, debug_assertions)),
    deny(
        clippy::panic,
        clippy::unimplemented,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "prefer errors over panicking"
    )
)]

use grid::{
    GridConfig, GestureKind, Scale, SpotRoster,
    config::load_json,
    data::{Roster, ShiftId},
};
use lexopt::prelude::*;
use render::GridView;
use std::{fs::File, io::BufWriter, path::PathBuf};
use thiserror::Error;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

mod render;

macro_rules! default_path {
    (roster) => {
        "./roster.json"
    };
    (grid) => {
        "./grid.json"
    };
}

const DEFAULT_COLUMN_WIDTH: i64 = 10;

#[derive(Debug, Error)]
enum ArgsError {
    #[error("argument error")]
    LexoptError(#[from] lexopt::Error),
    #[error("filesystem error")]
    IOError(#[from] std::io::Error),
    #[error("data should only be provided once")]
    DataReassigned,
    #[error("expected `SHIFT=PIXELS`, got `{0}`")]
    MalformedEdit(String),
    #[error("column width must be positive, got {0}")]
    InvalidColumnWidth(i64),
    #[error("no shift {0} is drawn on the grid")]
    UnknownShift(ShiftId),
}

/// One gesture requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edit {
    shift: ShiftId,
    kind: GestureKind,
    pixels: i64,
}

impl Edit {
    /// Parse `SHIFT=PIXELS`, e.g. `12=-30`.
    fn parse(kind: GestureKind, arg: &str) -> Result<Self, ArgsError> {
        let malformed = || ArgsError::MalformedEdit(arg.to_string());
        let (shift, pixels) = arg.split_once('=').ok_or_else(malformed)?;
        let shift = shift.trim().parse::<u64>().map_err(|_| malformed())?;
        let pixels = pixels.trim().parse::<i64>().map_err(|_| malformed())?;
        Ok(Self {
            shift: ShiftId(shift),
            kind,
            pixels,
        })
    }
}

#[derive(Debug)]
struct CmdLineData {
    pub roster_path: PathBuf,
    pub grid_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub edits: Vec<Edit>,
    pub json: bool,
    pub column_width: i64,
}

struct RunOption {
    short: Option<char>,
    long: &'static str,
    val: Option<&'static str>,
    msg: &'static str,
}

static OPTIONS: [RunOption; 9] = [
    RunOption {
        short: Some('r'),
        long: "roster",
        val: Some("<PATH>"),
        msg: concat!("Roster data file, otherwise ", default_path!(roster)),
    },
    RunOption {
        short: Some('g'),
        long: "grid",
        val: Some("<PATH>"),
        msg: concat!("Grid configuration file, otherwise ", default_path!(grid)),
    },
    RunOption {
        short: Some('m'),
        long: "move",
        val: Some("<SHIFT=PX>"),
        msg: "Drag a shift by a pixel delta (repeatable)",
    },
    RunOption {
        short: Some('e'),
        long: "resize",
        val: Some("<SHIFT=PX>"),
        msg: "Drag a shift's end edge by a pixel delta (repeatable)",
    },
    RunOption {
        short: Some('s'),
        long: "resize-start",
        val: Some("<SHIFT=PX>"),
        msg: "Drag a shift's start edge by a pixel delta (repeatable)",
    },
    RunOption {
        short: Some('w'),
        long: "column-width",
        val: Some("<PX>"),
        msg: "Pixels per text column, otherwise 10",
    },
    RunOption {
        short: Some('j'),
        long: "json",
        val: None,
        msg: "Print the layout as JSON",
    },
    RunOption {
        short: Some('o'),
        long: "output",
        val: Some("<PATH>"),
        msg: "Write the edited roster to a file",
    },
    RunOption {
        short: None,
        long: "help",
        val: None,
        msg: "Display this message",
    },
];

fn write_help<W: std::io::Write>(mut w: W) -> std::io::Result<()> {
    const RESET_STYLE: &str = "\x1B[0m";
    const NAME_STYLE: &str = "\x1B[36m";
    const LIT_STYLE: &str = "\x1B[1;96m";
    const HEADER_STYLE: &str = "\x1B[1;92m";

    let longest_long = OPTIONS.iter().map(|opt| "--".len() + opt.long.len()).max().unwrap_or(0);
    let longest_val = OPTIONS
        .iter()
        .filter_map(|opt| opt.val)
        .map(str::len)
        .max()
        .unwrap_or(0);

    writeln!(
        w,
        "{HEADER_STYLE}Usage: {LIT_STYLE}roster-grid {NAME_STYLE}[OPTIONS]{RESET_STYLE}"
    )?;
    writeln!(w)?;
    writeln!(w, "{HEADER_STYLE}Options:{RESET_STYLE}")?;
    for option in &OPTIONS {
        let comma = if option.short.is_some() { ',' } else { ' ' };
        let short = option.short.map(|ch| format!("-{ch}")).unwrap_or_default();
        let long = format!("--{}", option.long);
        let val = option.val.unwrap_or_default();
        let msg = option.msg;
        writeln!(
            w,
            "  {LIT_STYLE}{short:>2}{RESET_STYLE}{comma} {LIT_STYLE}{long:<long_width$}{RESET_STYLE} {NAME_STYLE}{val:<val_width$}{RESET_STYLE}  {msg}",
            long_width = longest_long,
            val_width = longest_val,
        )?;
    }
    Ok(())
}

/// Parse command line arguments.
///
/// Returns [`None`] if help was requested and printed.
fn get_data(mut parser: lexopt::Parser) -> Result<Option<CmdLineData>, ArgsError> {
    let mut roster_path = None;
    let mut grid_path = None;
    let mut output_path = None;
    let mut column_width = None;
    let mut edits = Vec::new();
    let mut json = false;

    fn set_once<T>(slot: &mut Option<T>, value: T) -> Result<(), ArgsError> {
        if slot.is_some() {
            return Err(ArgsError::DataReassigned);
        }
        *slot = Some(value);
        Ok(())
    }

    while let Some(arg) = parser.next()? {
        match arg {
            Short('r') | Long("roster") => {
                set_once(&mut roster_path, PathBuf::from(parser.value()?))?;
            }
            Short('g') | Long("grid") => {
                set_once(&mut grid_path, PathBuf::from(parser.value()?))?;
            }
            Short('o') | Long("output") => {
                set_once(&mut output_path, PathBuf::from(parser.value()?))?;
            }
            Short('w') | Long("column-width") => {
                let width: i64 = parser.value()?.parse()?;
                if width <= 0 {
                    return Err(ArgsError::InvalidColumnWidth(width));
                }
                set_once(&mut column_width, width)?;
            }
            Short('m') | Long("move") => {
                edits.push(Edit::parse(GestureKind::Move, &parser.value()?.string()?)?);
            }
            Short('e') | Long("resize") => {
                edits.push(Edit::parse(GestureKind::ResizeEnd, &parser.value()?.string()?)?);
            }
            Short('s') | Long("resize-start") => {
                edits.push(Edit::parse(GestureKind::ResizeStart, &parser.value()?.string()?)?);
            }
            Short('j') | Long("json") => json = true,
            Long("help") => {
                write_help(std::io::stdout().lock())?;
                return Ok(None);
            }
            _ => Err(arg.unexpected())?,
        }
    }

    Ok(Some(CmdLineData {
        roster_path: roster_path.unwrap_or_else(|| PathBuf::from(default_path!(roster))),
        grid_path: grid_path.unwrap_or_else(|| PathBuf::from(default_path!(grid))),
        output_path,
        edits,
        json,
        column_width: column_width.unwrap_or(DEFAULT_COLUMN_WIDTH),
    }))
}

/// Wrapper so that main can provide standardized error printing
fn inner_main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(CmdLineData {
        roster_path,
        grid_path,
        output_path,
        edits,
        json,
        column_width,
    }) = get_data(lexopt::Parser::from_env())?
    else {
        return Ok(());
    };

    let config = GridConfig::load(&grid_path)?;
    let scale = config.scale()?;
    let mut roster = load_json::<Roster>(&roster_path)?;
    info!(
        tenant = %roster.tenant_id,
        spots = roster.spots.len(),
        shifts = roster.shifts.len(),
        "loaded roster"
    );

    let lanes = {
        let mut view = SpotRoster::new(&scale, &mut roster);
        for Edit {
            shift,
            kind,
            pixels,
        } in edits
        {
            let span = view
                .drag(shift, kind, pixels)
                .ok_or(ArgsError::UnknownShift(shift))?;
            debug!(%shift, ?kind, pixels, ?span, "applied edit");
        }
        view.layout()
    };

    let view = GridView {
        window_start: scale.start_in_scale_units(),
        window_end: scale.end_in_scale_units(),
        width: scale.end_in_grid_pixels(),
        lanes,
    };
    let stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(stdout, &view)?;
        println!();
    } else {
        render::write_text(stdout, &view, column_width)?;
    }

    if let Some(path) = output_path {
        serde_json::to_writer_pretty(BufWriter::new(File::create(&path)?), &roster)?;
        info!(path = %path.display(), "wrote roster");
    }

    Ok(())
}

fn main() {
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = inner_main() {
        let mut err: Option<&dyn std::error::Error> = Some(e.as_ref());
        let mut i = 0;
        while let Some(e) = err {
            eprintln!("{:indent$}{e}", "", indent = i);
            i += 2;
            err = e.source();
        }
        std::process::exit(1);
    }
}
