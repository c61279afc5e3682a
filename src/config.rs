//! file: config.rs
//! author: Jacob Xie
//! date: 2026/10/18 11:40:15 Sunday
//! brief:

use clap::Parser;

pub const DEFAULT_ROWS: i32 = 10;
pub const DEFAULT_COLS: i32 = 10;
pub const DEFAULT_CELL_PX: f32 = 20.0;

/// Interactive maze editor.
#[derive(Debug, Clone, Parser)]
#[command(name = "gpui-maze", version)]
pub struct Config {
    /// Number of floor-cell rows.
    #[arg(long, default_value_t = DEFAULT_ROWS, allow_negative_numbers = true)]
    pub rows: i32,

    /// Number of floor-cell columns.
    #[arg(long, default_value_t = DEFAULT_COLS, allow_negative_numbers = true)]
    pub cols: i32,

    /// Pixel size of one floor cell.
    #[arg(long, default_value_t = DEFAULT_CELL_PX)]
    pub cell_px: f32,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_px: DEFAULT_CELL_PX,
            log: "info".into(),
        }
    }
}

impl Config {
    /// Thin tiles (edges and corners) are a quarter of a floor cell.
    pub fn edge_px(&self) -> f32 {
        (self.cell_px / 4.0).max(2.0)
    }
}
