#![warn(clippy::pedantic)]

//! Rotation engine for generalized N×N×N twisty cubes.
//!
//! A [`CubeState`] owns six N×N grids of sticker colors and is mutated in
//! place by rotation operations: whole-face grid rotations, the general
//! table-driven [`CubeState::rotate_layer`], the outer face moves of
//! [`CubeState::turn_face`], and seeded random moves for scrambling. All
//! adjacency between faces is data in [`geometry`]; one ring-shift routine
//! serves all three axes.
//!
//! The engine does no I/O and holds no locks. Initialization and display are
//! the caller's business, through [`CubeState::new`] / [`CubeState::from_grids`]
//! and the read-only [`CubeState::face`] accessor.

pub mod cube;
pub mod geometry;
pub mod scramble;

pub use cube::{CubeState, CubeStateError, FaceGrid};
pub use geometry::{Axis, Color, Face};
pub use scramble::{FaceTurn, scramble};
