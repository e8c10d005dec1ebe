use crate::config::GridSize;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Translates by the unit vector of `direction`, wrapping around the board
    /// edges on both axes.
    #[must_use]
    pub fn apply_direction(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: wrap_axis(self.x + dx, i32::from(bounds.width)),
            y: wrap_axis(self.y + dy, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    debug_assert!(upper_bound > 0);
    value.rem_euclid(upper_bound)
}

/// Movement heading. `None` carries the zero vector and means "no heading".
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// The four directions a snake can actually move in.
    pub const ALL_CARDINAL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit vector in screen coordinates (y grows downwards).
    #[must_use]
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::None => (0, 0),
        }
    }

    /// Returns true when the vectors are exact negations of each other and
    /// neither is the zero vector.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        let (ax, ay) = self.vector();
        let (bx, by) = other.vector();
        (ax, ay) != (0, 0) && (ax, ay) == (-bx, -by)
    }

    /// Returns true when the dot product of both vectors is zero.
    ///
    /// `None` is perpendicular to everything.
    #[must_use]
    pub fn is_perpendicular(self, other: Self) -> bool {
        let (ax, ay) = self.vector();
        let (bx, by) = other.vector();
        ax * bx + ay * by == 0
    }

    /// Returns true for the zero vector.
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

/// Virtual key codes understood by the direction table.
pub mod key_codes {
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
}

const DIRECTION_KEYS: [(Direction, [u32; 2]); 4] = [
    (Direction::Left, [key_codes::LEFT, key_codes::A]),
    (Direction::Up, [key_codes::UP, key_codes::W]),
    (Direction::Right, [key_codes::RIGHT, key_codes::D]),
    (Direction::Down, [key_codes::DOWN, key_codes::S]),
];

/// Maps a virtual key code (arrows or WASD) to a direction.
#[must_use]
pub fn key_to_direction(key_code: u32) -> Option<Direction> {
    DIRECTION_KEYS
        .iter()
        .find(|(_, keys)| keys.contains(&key_code))
        .map(|(direction, _)| *direction)
}
