//! A single marble-holding cell: one pit or one home.

use serde::{Deserialize, Serialize};

use crate::error::HoleError;

/// Marble counter with a configured reset value.
///
/// Pits are created with the board's marbles-per-pit count, homes with 0.
/// The count can never go negative: `remove` refuses rather than underflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hole {
    marbles: u8,
    initial: u8,
}

impl Hole {
    /// Create a hole holding `initial` marbles.
    #[must_use]
    pub const fn new(initial: u8) -> Self {
        Self {
            marbles: initial,
            initial,
        }
    }

    /// Add marbles. Saturates at `u8::MAX`.
    pub fn add(&mut self, n_marbles: u8) {
        self.marbles = self.marbles.saturating_add(n_marbles);
    }

    /// Remove marbles, failing without change if too few are present.
    pub fn remove(&mut self, n_marbles: u8) -> Result<(), HoleError> {
        if self.marbles >= n_marbles {
            self.marbles -= n_marbles;
            Ok(())
        } else {
            Err(HoleError::Underflow {
                requested: n_marbles,
                available: self.marbles,
            })
        }
    }

    #[must_use]
    pub const fn get(&self) -> u8 {
        self.marbles
    }

    pub fn set(&mut self, n_marbles: u8) {
        self.marbles = n_marbles;
    }

    /// Restore the configured initial count.
    pub fn reset(&mut self) {
        self.marbles = self.initial;
    }

    #[must_use]
    pub const fn initial(&self) -> u8 {
        self.initial
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.marbles == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_add_and_reset() {
        let mut hole = Hole::new(4);
        hole.add(1);
        hole.add(3);
        assert_eq!(hole.get(), 8);

        hole.reset();
        assert_eq!(hole.get(), 4);
        assert_eq!(hole.initial(), 4);
    }

    #[test]
    fn test_hole_remove_guarded() {
        let mut hole = Hole::new(2);
        assert!(hole.remove(2).is_ok());
        assert!(hole.is_empty());

        let err = hole.remove(1).unwrap_err();
        assert_eq!(
            err,
            HoleError::Underflow {
                requested: 1,
                available: 0
            }
        );
        assert_eq!(hole.get(), 0);
    }

    #[test]
    fn test_hole_set_is_unconditional() {
        let mut home = Hole::new(0);
        home.set(13);
        assert_eq!(home.get(), 13);
        home.reset();
        assert_eq!(home.get(), 0);
    }

    #[test]
    fn test_hole_add_saturates() {
        let mut hole = Hole::new(250);
        hole.add(10);
        assert_eq!(hole.get(), u8::MAX);
    }
}
