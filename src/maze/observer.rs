//! file: observer.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:51:07 Sunday
//! brief: Outward notifications raised by `MazeModel`.

/// Told *what* changed, never the new state; implementors re-read the model.
///
/// Callbacks run while the model is still borrowed, so they cannot mutate it.
pub trait MazeObserver {
    fn on_cell_changed(&mut self, _i: usize, _j: usize) {}
    fn on_player_changed(&mut self) {}
    fn on_cursor_changed(&mut self) {}
}

impl MazeObserver for () {}

/// Collects notifications until a renderer drains them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Redraw {
    pub cells: Vec<(usize, usize)>,
    pub player: bool,
    pub cursor: bool,
}

impl Redraw {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && !self.player && !self.cursor
    }

    pub fn take(&mut self) -> Redraw {
        std::mem::take(self)
    }
}

impl MazeObserver for Redraw {
    fn on_cell_changed(&mut self, i: usize, j: usize) {
        if !self.cells.contains(&(i, j)) {
            self.cells.push((i, j));
        }
    }

    fn on_player_changed(&mut self) {
        self.player = true;
    }

    fn on_cursor_changed(&mut self) {
        self.cursor = true;
    }
}
