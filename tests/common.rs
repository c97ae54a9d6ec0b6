#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const GRID: &str = r#"{
    "windowStart": "2025-04-05T08:00:00",
    "windowEnd": "2025-04-05T18:00:00",
    "pixelsPerMinute": 0.5
}"#;

pub const ROSTER: &str = r#"{
    "tenantId": 1,
    "spots": [
        { "id": 1, "tenantId": 1, "name": "Kitchen" },
        { "id": 2, "tenantId": 1, "name": "Bar" }
    ],
    "shifts": [
        {
            "id": 11,
            "tenantId": 1,
            "spotId": 2,
            "timeSlot": "2025-04-05T09:00:00..2025-04-05T12:00:00",
            "employee": { "id": 4, "tenantId": 1, "name": "Bob" }
        },
        {
            "id": 12,
            "tenantId": 1,
            "spotId": 1,
            "timeSlot": { "start": "2025-04-05T09:00:00", "end": "2025-04-05T13:00:00" },
            "employee": { "id": 3, "tenantId": 1, "name": "Alice" }
        }
    ]
}"#;

pub fn grid_cmd() -> Command {
    cargo_bin_cmd!("roster-grid")
}

/// Create a unique file path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_roster_grid.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the grid and roster fixtures for one test, returning their paths
pub fn fixtures(name: &str) -> (String, String) {
    let grid = temp_path(&format!("{name}_grid"), "json");
    let roster = temp_path(&format!("{name}_roster"), "json");
    fs::write(&grid, GRID).unwrap();
    fs::write(&roster, ROSTER).unwrap();
    (grid, roster)
}
