//! file: mod.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:02:48 Sunday
//! brief: Maze state model.

mod error;
mod grid;
mod heading;
mod location;
mod model;
mod observer;
mod tile;

pub use error::MazeError;
pub use grid::Grid;
pub use heading::{Heading, Rotation};
pub use location::{Location, Torus};
pub use model::MazeModel;
pub use observer::{MazeObserver, Redraw};
pub use tile::{EdgeState, FloorState, Tile, TileKind};
