//! file: tile.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:31:56 Sunday
//! brief: What each slot of the interleaved grid can hold.

/// State of a floor cell. Only `Empty` is ever written today; the other tags are
/// reserved and no operation produces them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FloorState {
    #[default]
    Empty,
    Explored,
    Spinner,
    EndFlag,
}

/// State of a boundary edge, cycling `Empty -> Wall -> Door -> Empty`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeState {
    #[default]
    Empty,
    Wall,
    Door,
}

impl EdgeState {
    pub fn cycle(self) -> Self {
        match self {
            EdgeState::Empty => EdgeState::Wall,
            EdgeState::Wall => EdgeState::Door,
            EdgeState::Door => EdgeState::Empty,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Floor,
    Edge,
    Corner,
}

impl TileKind {
    /// Odd/odd is a floor cell, even/even a corner, anything else an edge.
    pub fn at(row: usize, col: usize) -> Self {
        match (row % 2 == 1, col % 2 == 1) {
            (true, true) => TileKind::Floor,
            (false, false) => TileKind::Corner,
            _ => TileKind::Edge,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Floor(FloorState),
    Edge(EdgeState),
    Corner,
}

impl Tile {
    pub fn initial(kind: TileKind) -> Self {
        match kind {
            TileKind::Floor => Tile::Floor(FloorState::Empty),
            TileKind::Edge => Tile::Edge(EdgeState::Empty),
            TileKind::Corner => Tile::Corner,
        }
    }

    pub fn kind(self) -> TileKind {
        match self {
            Tile::Floor(_) => TileKind::Floor,
            Tile::Edge(_) => TileKind::Edge,
            Tile::Corner => TileKind::Corner,
        }
    }

    pub fn edge(self) -> Option<EdgeState> {
        match self {
            Tile::Edge(state) => Some(state),
            _ => None,
        }
    }
}
