//! Board sides and per-side data storage.
//!
//! ## Side
//!
//! The two halves of the board. Side A sows toward increasing rows and
//! banks in the home below row 5; side B sows toward decreasing rows and
//! banks in the home above row 0.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, used by the board for its
//! pit rows and homes.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of playable pits on each side.
pub const ROWS: usize = 6;

/// One of the two sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, A first.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// The side across the board.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Storage index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// Row step taken while sowing along this side.
    #[must_use]
    pub const fn direction(self) -> isize {
        match self {
            Side::A => 1,
            Side::B => -1,
        }
    }

    /// First row reached when sowing crosses onto this side.
    #[must_use]
    pub const fn entry_row(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => ROWS - 1,
        }
    }

    /// Parse a side from console input (`A`, `a`, `B`, `b`).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Side::A),
            'B' | 'b' => Some(Side::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Side::from_char(c).ok_or_else(|| format!("invalid side '{s}'")),
            _ => Err(format!("invalid side '{s}'")),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use mancala::core::{Side, SideMap};
///
/// let mut homes: SideMap<u8> = SideMap::with_value(0);
/// homes[Side::B] += 3;
///
/// assert_eq!(homes[Side::A], 0);
/// assert_eq!(homes[Side::B], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::A), factory(Side::B)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, A first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs, A first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
