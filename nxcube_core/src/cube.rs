//! The cube state itself: six face grids and the rotation engine.

use std::fmt;

use itertools::Itertools;
use log::trace;
use thiserror::Error;

use crate::geometry::{Axis, Color, Face, RingSide};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeStateError {
    #[error("cube side length must be at least {min}, got {0}", min = CubeState::MIN_SIDE)]
    SideTooSmall(usize),
    #[error("layer index {index} is out of bounds for a cube of side {side}")]
    LayerOutOfBounds { index: usize, side: usize },
    #[error("the {face} face grid has side {actual}, expected {expected}")]
    GridSizeMismatch {
        face: Face,
        expected: usize,
        actual: usize,
    },
}

/// An N×N grid of sticker colors for one face, row-major. Row 0 is the top
/// edge of the face as conventionally oriented, col 0 the left edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceGrid {
    side: usize,
    cells: Box<[Color]>,
}

impl FaceGrid {
    /// Build a grid by calling `color` for every (row, col) in row-major
    /// order.
    pub fn from_fn(side: usize, mut color: impl FnMut(usize, usize) -> Color) -> FaceGrid {
        let cells = (0..side)
            .cartesian_product(0..side)
            .map(|(row, col)| color(row, col))
            .collect();
        FaceGrid { side, cells }
    }

    /// A grid uniformly filled with one color.
    #[must_use]
    pub fn filled(side: usize, color: Color) -> FaceGrid {
        FaceGrid {
            side,
            cells: vec![color; side * side].into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// The color at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Color {
        assert!(row < self.side && col < self.side);
        self.cells[row * self.side + col]
    }

    fn set(&mut self, row: usize, col: usize, color: Color) {
        debug_assert!(row < self.side && col < self.side);
        self.cells[row * self.side + col] = color;
    }

    /// The rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.side)
    }

    /// Rotate the grid 90° in place; (r, c) moves to (c, N−1−r) for
    /// clockwise and to (N−1−c, r) for counterclockwise, the inverse
    /// permutation.
    fn rotate(&mut self, clockwise: bool) {
        let n = self.side;
        let old = self.cells.clone();
        for r in 0..n {
            for c in 0..n {
                let (to_r, to_c) = if clockwise {
                    (c, n - 1 - r)
                } else {
                    (n - 1 - c, r)
                };
                self.cells[to_r * n + to_c] = old[r * n + c];
            }
        }
    }
}

impl fmt::Display for FaceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, color) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{color}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The full state of an N×N×N cube: one [`FaceGrid`] per [`Face`], all of
/// side N. The cube exclusively owns its 6·N² cells and is mutated in place
/// by the rotation operations; every operation either validates and applies
/// a whole permutation or rejects before touching anything.
///
/// There is no internal synchronization. Sharing one instance across threads
/// is only sound if callers serialize rotations externally (single-writer
/// discipline).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeState {
    side: usize,
    faces: [FaceGrid; 6],
}

impl CubeState {
    /// The smallest supported cube. A 1×1×1 "cube" has no four-face ring to
    /// rotate.
    pub const MIN_SIDE: usize = 2;

    /// Build a cube of the given side, asking `init` for the color of every
    /// (face, row, col).
    ///
    /// # Errors
    ///
    /// `SideTooSmall` if `side < MIN_SIDE`.
    pub fn new(
        side: usize,
        mut init: impl FnMut(Face, usize, usize) -> Color,
    ) -> Result<CubeState, CubeStateError> {
        if side < Self::MIN_SIDE {
            return Err(CubeStateError::SideTooSmall(side));
        }

        Ok(CubeState {
            side,
            faces: Face::ALL.map(|face| FaceGrid::from_fn(side, |r, c| init(face, r, c))),
        })
    }

    /// Assemble a cube from six prebuilt grids, one per face in [`Face::ALL`]
    /// order.
    ///
    /// # Errors
    ///
    /// `SideTooSmall` if `side < MIN_SIDE`, or `GridSizeMismatch` naming the
    /// first face whose grid is not `side`×`side`. Nothing is constructed on
    /// rejection.
    pub fn from_grids(side: usize, grids: [FaceGrid; 6]) -> Result<CubeState, CubeStateError> {
        if side < Self::MIN_SIDE {
            return Err(CubeStateError::SideTooSmall(side));
        }

        for (face, grid) in Face::ALL.iter().zip(&grids) {
            if grid.side != side {
                return Err(CubeStateError::GridSizeMismatch {
                    face: *face,
                    expected: side,
                    actual: grid.side,
                });
            }
        }

        Ok(CubeState { side, faces: grids })
    }

    /// A solved cube: every face uniformly its conventional color. Solved is
    /// just one distinguished configuration; nothing else in the engine
    /// refers to it.
    ///
    /// # Errors
    ///
    /// `SideTooSmall` if `side < MIN_SIDE`.
    pub fn solved(side: usize) -> Result<CubeState, CubeStateError> {
        CubeState::new(side, |face, _, _| Color::of_solved_face(face))
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Read-only view of one face's grid.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    /// Rotate only the named face's own grid 90° clockwise. Adjacent faces
    /// are untouched; this is not a cube move on its own.
    pub fn rotate_face_clockwise(&mut self, face: Face) {
        self.faces[face.index()].rotate(true);
    }

    /// Inverse of [`CubeState::rotate_face_clockwise`].
    pub fn rotate_face_counterclockwise(&mut self, face: Face) {
        self.faces[face.index()].rotate(false);
    }

    /// Rotate the layer at `index` along `axis`. The four rings of N cells
    /// the layer occupies on the side faces shift cyclically; a boundary
    /// layer (0 or N−1) additionally rotates its coincident face in place,
    /// with the sense the adjacency table dictates for that face. Middle
    /// layers move only the rings.
    ///
    /// `clockwise` is viewed from the positive end of the axis (see [`Axis`]).
    ///
    /// # Errors
    ///
    /// `LayerOutOfBounds` if `index >= side`; the cube is left unchanged.
    pub fn rotate_layer(
        &mut self,
        axis: Axis,
        index: usize,
        clockwise: bool,
    ) -> Result<(), CubeStateError> {
        if index >= self.side {
            return Err(CubeStateError::LayerOutOfBounds {
                index,
                side: self.side,
            });
        }

        self.rotate_layer_inner(axis, index, clockwise);
        Ok(())
    }

    /// Turn the named face a quarter turn as a cube move: the face's own
    /// grid rotates and the adjacent ring of the four side faces shifts.
    /// This is the ordinary outer move (F/B/L/R/U/D); `clockwise` is viewed
    /// facing the turned face from outside the cube.
    pub fn turn_face(&mut self, face: Face, clockwise: bool) {
        let (axis, index, sense) = face.layer_move(self.side, clockwise);
        self.rotate_layer_inner(axis, index, sense);
    }

    /// `index` has already been validated.
    fn rotate_layer_inner(&mut self, axis: Axis, index: usize, clockwise: bool) {
        trace!(
            "rotating {axis:?} layer {index} {}",
            if clockwise { "cw" } else { "ccw" }
        );
        let adjacency = axis.adjacency();

        // Walk the four rings in the direction content moves, seeding the
        // carry with the ring that will be overwritten last. Each step
        // snapshots the displaced ring before writing, so the cyclic
        // permutation never loses a cell.
        let mut order = adjacency.sides;
        if !clockwise {
            order.reverse();
        }

        let mut carried = self.read_ring(order[3], index);
        for ring in order {
            let displaced = self.read_ring(ring, index);
            self.write_ring(ring, index, &carried);
            carried = displaced;
        }

        if index == 0 {
            self.faces[adjacency.low_face.index()].rotate(!clockwise);
        } else if index == self.side - 1 {
            self.faces[adjacency.high_face.index()].rotate(clockwise);
        }
    }

    fn read_ring(&self, ring: RingSide, layer: usize) -> Vec<Color> {
        let grid = &self.faces[ring.face.index()];
        (0..self.side)
            .map(|i| {
                let (row, col) = ring.cell(self.side, layer, i);
                grid.get(row, col)
            })
            .collect()
    }

    fn write_ring(&mut self, ring: RingSide, layer: usize, colors: &[Color]) {
        let grid = &mut self.faces[ring.face.index()];
        for (i, &color) in colors.iter().enumerate() {
            let (row, col) = ring.cell(self.side, layer, i);
            grid.set(row, col, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{CubeState, CubeStateError, FaceGrid};
    use crate::geometry::{Axis, Color, Face};

    /// A deterministic non-uniform coloring; rotations that misplace even a
    /// single cell show up against it.
    fn patterned(side: usize) -> CubeState {
        CubeState::new(side, |face, r, c| {
            Color::ALL[(face.index() + 5 * r + 3 * c) % 6]
        })
        .unwrap()
    }

    #[test]
    fn face_rotation_maps_top_left_to_top_right() {
        let mut cube = patterned(3);
        let was = cube.face(Face::Front).get(0, 0);
        cube.rotate_face_clockwise(Face::Front);
        assert_eq!(cube.face(Face::Front).get(0, 2), was);
    }

    #[test]
    fn face_rotation_touches_only_that_face() {
        let mut cube = patterned(4);
        let before = cube.clone();
        cube.rotate_face_clockwise(Face::Up);
        for face in Face::ALL {
            if face != Face::Up {
                assert_eq!(cube.face(face), before.face(face));
            }
        }
    }

    #[test]
    fn four_face_rotations_are_identity() {
        for side in [2, 3, 5] {
            let mut cube = patterned(side);
            let before = cube.clone();
            for face in Face::ALL {
                for _ in 0..4 {
                    cube.rotate_face_clockwise(face);
                }
                assert_eq!(cube, before);
            }
        }
    }

    #[test]
    fn counterclockwise_face_rotation_is_the_inverse() {
        let mut cube = patterned(4);
        let before = cube.clone();
        cube.rotate_face_clockwise(Face::Back);
        cube.rotate_face_counterclockwise(Face::Back);
        assert_eq!(cube, before);
    }

    #[test]
    fn counterclockwise_is_three_clockwise() {
        let mut a = patterned(3);
        let mut b = a.clone();
        a.rotate_face_counterclockwise(Face::Left);
        for _ in 0..3 {
            b.rotate_face_clockwise(Face::Left);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn front_turn_cycles_the_expected_strips() {
        let mut cube = CubeState::solved(3).unwrap();
        cube.turn_face(Face::Front, true);

        // A uniform face stays uniform under its own rotation.
        for (r, c) in (0..3).cartesian_product(0..3) {
            assert_eq!(cube.face(Face::Front).get(r, c), Color::Green);
        }

        for i in 0..3 {
            // Left's column arrived on Up's bottom row, and so on around.
            assert_eq!(cube.face(Face::Up).get(2, i), Color::Orange);
            assert_eq!(cube.face(Face::Right).get(i, 0), Color::White);
            assert_eq!(cube.face(Face::Down).get(0, i), Color::Red);
            assert_eq!(cube.face(Face::Left).get(i, 2), Color::Yellow);
        }

        // The rest of each side face is untouched.
        for i in 0..3 {
            for off_ring in 0..2 {
                assert_eq!(cube.face(Face::Up).get(off_ring, i), Color::White);
                assert_eq!(cube.face(Face::Down).get(1 + off_ring, i), Color::Yellow);
            }
        }
        for (r, c) in (0..3).cartesian_product(0..3) {
            assert_eq!(cube.face(Face::Back).get(r, c), Color::Blue);
        }
    }

    #[test]
    fn front_turn_corner_cycle() {
        let mut cube = patterned(3);
        let from_up = cube.face(Face::Up).get(2, 0);
        let from_right = cube.face(Face::Right).get(0, 0);
        let from_down = cube.face(Face::Down).get(0, 2);
        let from_left = cube.face(Face::Left).get(2, 2);

        cube.turn_face(Face::Front, true);

        assert_eq!(cube.face(Face::Right).get(0, 0), from_up);
        assert_eq!(cube.face(Face::Down).get(0, 2), from_right);
        assert_eq!(cube.face(Face::Left).get(2, 2), from_down);
        assert_eq!(cube.face(Face::Up).get(2, 0), from_left);
    }

    #[test]
    fn solved_ring_colors_after_each_face_turn() {
        // (turned face, [(side face, fixed coord is a row, index, donor)]).
        // Donor is the face whose solved color lands on that strip.
        #[rustfmt::skip]
        let expectations: [(Face, [(Face, bool, usize, Face); 4]); 6] = [
            (Face::Front, [
                (Face::Up, true, 2, Face::Left),
                (Face::Right, false, 0, Face::Up),
                (Face::Down, true, 0, Face::Right),
                (Face::Left, false, 2, Face::Down),
            ]),
            (Face::Back, [
                (Face::Up, true, 0, Face::Right),
                (Face::Left, false, 0, Face::Up),
                (Face::Down, true, 2, Face::Left),
                (Face::Right, false, 2, Face::Down),
            ]),
            (Face::Right, [
                (Face::Front, false, 2, Face::Down),
                (Face::Up, false, 2, Face::Front),
                (Face::Back, false, 0, Face::Up),
                (Face::Down, false, 2, Face::Back),
            ]),
            (Face::Left, [
                (Face::Front, false, 0, Face::Up),
                (Face::Down, false, 0, Face::Front),
                (Face::Back, false, 2, Face::Down),
                (Face::Up, false, 0, Face::Back),
            ]),
            (Face::Up, [
                (Face::Front, true, 0, Face::Right),
                (Face::Left, true, 0, Face::Front),
                (Face::Back, true, 0, Face::Left),
                (Face::Right, true, 0, Face::Back),
            ]),
            (Face::Down, [
                (Face::Front, true, 2, Face::Left),
                (Face::Right, true, 2, Face::Front),
                (Face::Back, true, 2, Face::Right),
                (Face::Left, true, 2, Face::Back),
            ]),
        ];

        for (turned, strips) in expectations {
            let mut cube = CubeState::solved(3).unwrap();
            cube.turn_face(turned, true);
            for (side_face, is_row, index, donor) in strips {
                let expected = Color::of_solved_face(donor);
                for i in 0..3 {
                    let (r, c) = if is_row { (index, i) } else { (i, index) };
                    assert_eq!(
                        cube.face(side_face).get(r, c),
                        expected,
                        "{turned} turn, strip on {side_face} at {r},{c}"
                    );
                }
            }
        }
    }

    #[test]
    fn middle_layer_leaves_boundary_faces_alone() {
        let mut cube = patterned(3);
        let before = cube.clone();
        cube.rotate_layer(Axis::X, 1, true).unwrap();
        assert_eq!(cube.face(Face::Left), before.face(Face::Left));
        assert_eq!(cube.face(Face::Right), before.face(Face::Right));
        // And the ring did move: Up's middle column took Front's.
        for r in 0..3 {
            assert_eq!(cube.face(Face::Up).get(r, 1), before.face(Face::Front).get(r, 1));
        }
    }

    #[test]
    fn layer_inverse_restores_the_cube() {
        for side in [2, 3, 4] {
            let mut cube = patterned(side);
            let before = cube.clone();
            for axis in Axis::ALL {
                for index in 0..side {
                    cube.rotate_layer(axis, index, true).unwrap();
                    cube.rotate_layer(axis, index, false).unwrap();
                    assert_eq!(cube, before, "axis {axis:?} layer {index} side {side}");
                }
            }
        }
    }

    #[test]
    fn four_layer_quarter_turns_are_identity() {
        for side in [2, 3, 4] {
            let mut cube = patterned(side);
            let before = cube.clone();
            for axis in Axis::ALL {
                for index in 0..side {
                    for _ in 0..4 {
                        cube.rotate_layer(axis, index, true).unwrap();
                    }
                    assert_eq!(cube, before, "axis {axis:?} layer {index} side {side}");
                }
            }
        }
    }

    #[test]
    fn double_front_turn_is_an_involution() {
        let mut cube = CubeState::solved(3).unwrap();
        cube.turn_face(Face::Front, true);
        cube.turn_face(Face::Front, true);
        let half_turned = cube.clone();
        cube.turn_face(Face::Front, true);
        cube.turn_face(Face::Front, true);
        assert_eq!(cube, CubeState::solved(3).unwrap());
        cube.turn_face(Face::Front, true);
        cube.turn_face(Face::Front, true);
        assert_eq!(cube, half_turned);
    }

    #[test]
    fn rotation_conserves_the_color_multiset() {
        let mut cube = patterned(4);
        let census = |cube: &CubeState| {
            Face::ALL
                .iter()
                .flat_map(|&face| cube.face(face).rows().flatten().copied().collect_vec())
                .counts()
        };
        let before = census(&cube);

        for axis in Axis::ALL {
            for index in 0..4 {
                cube.rotate_layer(axis, index, true).unwrap();
            }
        }
        for face in Face::ALL {
            cube.turn_face(face, false);
        }

        assert_eq!(census(&cube), before);
    }

    #[test]
    fn out_of_bounds_layer_is_rejected_without_mutation() {
        let mut cube = patterned(3);
        let before = cube.clone();
        let result = cube.rotate_layer(Axis::Y, 3, true);
        assert_eq!(
            result,
            Err(CubeStateError::LayerOutOfBounds { index: 3, side: 3 })
        );
        assert_eq!(cube, before);
    }

    #[test]
    fn tiny_sides_are_rejected() {
        for side in [0, 1] {
            assert_eq!(
                CubeState::solved(side),
                Err(CubeStateError::SideTooSmall(side))
            );
        }
    }

    #[test]
    fn mismatched_grid_is_rejected() {
        let mut grids = Face::ALL.map(|_| FaceGrid::filled(3, Color::White));
        grids[Face::Front.index()] = FaceGrid::filled(2, Color::Green);
        assert_eq!(
            CubeState::from_grids(3, grids),
            Err(CubeStateError::GridSizeMismatch {
                face: Face::Front,
                expected: 3,
                actual: 2,
            })
        );
    }
}
