//! Scrambling support: face turns as values and a seeded random move source.
//!
//! Randomness is always drawn from a caller-supplied [`fastrand::Rng`], never
//! from ambient global state, so a scramble is reproducible from its seed.

use std::fmt;

use fastrand::Rng;
use log::trace;

use crate::{cube::CubeState, geometry::Face};

/// A single outer face turn, the move vocabulary of [`CubeState::random_move`].
/// `clockwise` is viewed facing the turned face from outside the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceTurn {
    pub face: Face,
    pub clockwise: bool,
}

impl FaceTurn {
    /// The turn that undoes this one.
    #[must_use]
    pub fn inverse(self) -> FaceTurn {
        FaceTurn {
            face: self.face,
            clockwise: !self.clockwise,
        }
    }

    /// Apply this turn to `cube`.
    pub fn apply(self, cube: &mut CubeState) {
        cube.turn_face(self.face, self.clockwise);
    }
}

impl fmt::Display for FaceTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if !self.clockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl CubeState {
    /// Draw a uniformly random face and sense from `rng` and apply that
    /// turn, returning it so callers can record or invert the move.
    pub fn random_move(&mut self, rng: &mut Rng) -> FaceTurn {
        let turn = FaceTurn {
            face: rng.choice(Face::ALL).unwrap(),
            clockwise: rng.bool(),
        };
        trace!("scramble turn {turn}");
        turn.apply(self);
        turn
    }
}

/// Apply `count` random face turns to `cube`, returning them in order.
pub fn scramble(cube: &mut CubeState, rng: &mut Rng, count: usize) -> Vec<FaceTurn> {
    (0..count).map(|_| cube.random_move(rng)).collect()
}
