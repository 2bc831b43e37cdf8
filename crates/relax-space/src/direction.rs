//! Cardinal directions and the four-neighbour bundle.

/// One of the four cardinal directions of a square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row `i - 1`.
    North,
    /// Towards column `j + 1`.
    East,
    /// Towards row `i + 1`.
    South,
    /// Towards column `j - 1`.
    West,
}

impl Direction {
    /// All directions in `north, east, south, west` order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(row, col)` offset of the neighbour in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }

    /// The direction pointing back at this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

/// The four neighbours of a cell, one value per direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbours<T> {
    /// Neighbour at `(i - 1, j)`.
    pub north: T,
    /// Neighbour at `(i, j + 1)`.
    pub east: T,
    /// Neighbour at `(i + 1, j)`.
    pub south: T,
    /// Neighbour at `(i, j - 1)`.
    pub west: T,
}

impl<T> Neighbours<T> {
    /// Build a bundle by evaluating `f` once per direction.
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Self {
            north: f(Direction::North),
            east: f(Direction::East),
            south: f(Direction::South),
            west: f(Direction::West),
        }
    }

    /// The value for `dir`.
    pub fn get(&self, dir: Direction) -> &T {
        match dir {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }

    /// Apply `f` to every neighbour, preserving direction.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Neighbours<U> {
        Neighbours {
            north: f(self.north),
            east: f(self.east),
            south: f(self.south),
            west: f(self.west),
        }
    }

    /// Values in `north, east, south, west` order.
    pub fn into_array(self) -> [T; 4] {
        [self.north, self.east, self.south, self.west]
    }
}
