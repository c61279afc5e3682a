//! file: error.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:05:02 Sunday
//! brief:

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: i32, cols: i32 },
    #[error("rotation must be one of 0, 90, 180 or 270 degrees, got {0}")]
    InvalidRotation(i32),
}
