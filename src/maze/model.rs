//! file: model.rs
//! author: Jacob Xie
//! date: 2026/10/18 11:03:22 Sunday
//! brief: Maze state: grid, player, cursor and their transition rules.

use tracing::{debug, info, warn};

use super::{Grid, Heading, Location, MazeError, MazeObserver, Rotation, Tile, Torus};

/// Owns the interleaved grid plus the player and cursor tokens.
///
/// Every mutation reports what changed to the observer `O`, which is the only
/// coupling to a renderer.
#[derive(Debug)]
pub struct MazeModel<O = ()> {
    grid: Grid,
    bounds: Torus,
    player_location: Location,
    player_heading: Heading,
    cursor_location: Location,
    observer: O,
}

impl MazeModel {
    pub fn new(rows: i32, cols: i32) -> Result<Self, MazeError> {
        Self::with_observer(rows, cols, ())
    }
}

impl<O: MazeObserver> MazeModel<O> {
    pub fn with_observer(rows: i32, cols: i32, observer: O) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimension { rows, cols };
        if rows <= 0 || cols <= 0 {
            return Err(invalid);
        }
        // The grid side (2n + 1) must still fit in i32 for address wrapping.
        let doubled = |n: i32| n.checked_mul(2).filter(|d| d.checked_add(1).is_some());
        let (Some(bound_rows), Some(bound_cols)) = (doubled(rows), doubled(cols)) else {
            return Err(invalid);
        };

        let grid = Grid::new(rows as usize, cols as usize);
        info!(rows, cols, shape = ?grid.shape(), "maze created");

        Ok(Self {
            grid,
            bounds: Torus::new(bound_rows, bound_cols),
            player_location: Location::ORIGIN,
            player_heading: Heading::North,
            cursor_location: Location::ORIGIN,
            observer,
        })
    }

    /// Turns the player relative to its current heading.
    pub fn rotate_player(&mut self, rotation: Rotation) {
        self.player_heading = self.player_heading.rotate(rotation);
        debug!(?rotation, heading = ?self.player_heading, "player rotated");
        self.observer.on_player_changed();
    }

    pub fn rotate_player_degrees(&mut self, degrees: i32) -> Result<(), MazeError> {
        let rotation = Rotation::from_degrees(degrees)?;
        self.rotate_player(rotation);
        Ok(())
    }

    /// Moves along the current heading; negative steps walk backwards.
    pub fn advance_player(&mut self, steps: i32) {
        let (dr, dc) = self.player_heading.vector();
        let delta = (
            i64::from(dr) * i64::from(steps),
            i64::from(dc) * i64::from(steps),
        );
        self.player_location = self.bounds.shift(self.player_location, delta);
        debug!(steps, location = ?self.player_location, "player advanced");
        self.observer.on_player_changed();
    }

    pub fn move_cursor(&mut self, (dr, dc): (i32, i32)) {
        self.cursor_location = self
            .bounds
            .shift(self.cursor_location, (i64::from(dr), i64::from(dc)));
        debug!(delta = ?(dr, dc), location = ?self.cursor_location, "cursor moved");
        self.observer.on_cursor_changed();
    }

    /// Cycles the edge on `side` of the cursor: `Empty -> Wall -> Door -> Empty`.
    ///
    /// If the cursor sits off a floor-cell center the address may resolve to a
    /// floor or corner tile; that is left untouched and nothing is notified.
    pub fn toggle_edge(&mut self, side: Heading) {
        let (i, j) = self.edge_address(self.cursor_location, side);
        let Some(tile) = self.grid.get_mut(i, j) else {
            return;
        };
        match *tile {
            Tile::Edge(state) => {
                let next = state.cycle();
                *tile = Tile::Edge(next);
                debug!(i, j, ?side, from = ?state, to = ?next, "edge toggled");
                self.observer.on_cell_changed(i, j);
            }
            other => {
                warn!(i, j, ?side, kind = ?other.kind(), "toggle target is not an edge");
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_shape(&self) -> (usize, usize) {
        self.grid.shape()
    }

    pub fn tile(&self, i: usize, j: usize) -> Option<Tile> {
        self.grid.get(i, j)
    }

    pub fn bounds(&self) -> Torus {
        self.bounds
    }

    pub fn player_location(&self) -> Location {
        self.player_location
    }

    pub fn player_heading(&self) -> Heading {
        self.player_heading
    }

    pub fn player_direction(&self) -> (i32, i32) {
        self.player_heading.vector()
    }

    pub fn cursor_location(&self) -> Location {
        self.cursor_location
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// `(location + (1, 1) + side) mod grid shape`.
    fn edge_address(&self, location: Location, side: Heading) -> (usize, usize) {
        let (dr, dc) = side.vector();
        self.grid
            .wrap(location.row + 1 + dr, location.col + 1 + dc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{EdgeState, FloorState, Redraw, TileKind};

    fn edge_count(model: &MazeModel<impl MazeObserver>, wanted: EdgeState) -> usize {
        model
            .grid()
            .rows()
            .flatten()
            .filter(|tile| tile.edge() == Some(wanted))
            .count()
    }

    #[test]
    fn new_maze_is_open_and_faces_north() {
        let model = MazeModel::new(3, 4).unwrap();
        assert_eq!(model.grid_shape(), (7, 9));
        assert_eq!(model.bounds(), Torus::new(6, 8));
        assert_eq!(model.player_direction(), (-1, 0));
        assert_eq!(model.player_location(), Location::ORIGIN);
        assert_eq!(model.cursor_location(), Location::ORIGIN);
        assert_eq!(edge_count(&model, EdgeState::Wall), 0);
        assert_eq!(edge_count(&model, EdgeState::Door), 0);
        assert_eq!(model.tile(1, 1), Some(Tile::Floor(FloorState::Empty)));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert_eq!(
            MazeModel::new(0, 5).unwrap_err(),
            MazeError::InvalidDimension { rows: 0, cols: 5 }
        );
        assert!(matches!(
            MazeModel::new(5, -1),
            Err(MazeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn advance_wraps_around_the_torus() {
        let mut model = MazeModel::new(5, 5).unwrap();
        model.advance_player(1);
        assert_eq!(model.player_location(), Location::new(9, 0));

        model.advance_player(-1);
        assert_eq!(model.player_location(), Location::ORIGIN);
    }

    #[test]
    fn rotation_by_degrees_validates_input() {
        let mut model = MazeModel::new(2, 2).unwrap();
        assert_eq!(
            model.rotate_player_degrees(45),
            Err(MazeError::InvalidRotation(45))
        );
        assert_eq!(model.player_heading(), Heading::North);

        model.rotate_player_degrees(90).unwrap();
        assert_eq!(model.player_heading(), Heading::East);
    }

    #[test]
    fn toggle_cycles_the_edge_above_the_cursor() {
        let mut model = MazeModel::new(3, 3).unwrap();
        model.move_cursor((2, 2));

        model.toggle_edge(Heading::North);
        assert_eq!(model.tile(2, 3), Some(Tile::Edge(EdgeState::Wall)));
        model.toggle_edge(Heading::North);
        assert_eq!(model.tile(2, 3), Some(Tile::Edge(EdgeState::Door)));
        model.toggle_edge(Heading::North);
        assert_eq!(model.tile(2, 3), Some(Tile::Edge(EdgeState::Empty)));
    }

    #[test]
    fn toggle_on_the_perimeter_wraps_to_the_far_side() {
        let mut model = MazeModel::new(3, 3).unwrap();
        model.move_cursor((4, 4));
        model.toggle_edge(Heading::South);
        assert_eq!(model.tile(6, 5), Some(Tile::Edge(EdgeState::Wall)));

        model.toggle_edge(Heading::East);
        assert_eq!(model.tile(5, 6), Some(Tile::Edge(EdgeState::Wall)));
    }

    #[test]
    fn toggle_off_center_leaves_grid_untouched() {
        let mut model = MazeModel::with_observer(3, 3, Redraw::default()).unwrap();
        model.move_cursor((1, 0));
        model.observer_mut().take();

        let before = model.grid().clone();
        model.toggle_edge(Heading::North);
        assert_eq!(model.grid(), &before);
        assert!(model.observer().is_empty());
        assert_eq!(
            model.tile(1, 1).map(Tile::kind),
            Some(TileKind::Floor),
        );
    }

    #[test]
    fn observer_hears_about_each_operation() {
        let mut model = MazeModel::with_observer(2, 2, Redraw::default()).unwrap();

        model.rotate_player(Rotation::Half);
        assert!(model.observer_mut().take().player);

        model.advance_player(2);
        assert!(model.observer_mut().take().player);

        model.move_cursor((0, 2));
        let pending = model.observer_mut().take();
        assert!(pending.cursor && !pending.player);

        model.toggle_edge(Heading::West);
        assert_eq!(model.observer_mut().take().cells, vec![(1, 2)]);
    }

    #[test]
    fn tile_lookup_outside_the_grid_is_none() {
        let model = MazeModel::new(1, 1).unwrap();
        assert_eq!(model.tile(2, 2), Some(Tile::Corner));
        assert_eq!(model.tile(3, 0), None);
    }

    #[test]
    fn dimensions_too_large_to_double_are_rejected() {
        let too_big = i32::MAX / 2 + 1;
        assert_eq!(
            MazeModel::new(too_big, 1).unwrap_err(),
            MazeError::InvalidDimension { rows: too_big, cols: 1 }
        );
        assert!(matches!(
            MazeModel::new(1, i32::MAX),
            Err(MazeError::InvalidDimension { .. })
        ));
    }
}
