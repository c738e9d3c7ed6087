//! Fixed cube geometry: the face, axis, and color vocabularies, plus the
//! adjacency tables that drive layer rotation.

use std::fmt;

// Note... X runs from the Left face to the Right face, Y from Down to Up,
// and Z from Back to Front. The coordinate system is right-handed. Each
// face's grid is oriented as on the standard unfolded net: row 0 is the top
// edge and col 0 the left edge of the face as you look at it from outside,
// with Up's bottom row and Down's top row adjoining Front.

/// One of the six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Position of this face in [`Face::ALL`] and in `CubeState`'s grid
    /// array.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter face name in the usual cube notation.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// The layer move equivalent to a quarter turn of this face on a cube of
    /// side `n`: the axis the face is normal to, the boundary layer index
    /// coincident with the face, and `clockwise` translated from the
    /// outside-view sense to the axis convention of
    /// [`CubeState::rotate_layer`](crate::CubeState::rotate_layer).
    ///
    /// Layer senses are viewed from the positive end of the axis, so the
    /// three low faces mirror the sense. The flip lives here, per face, not
    /// in the rotation algorithm.
    #[must_use]
    pub fn layer_move(self, n: usize, clockwise: bool) -> (Axis, usize, bool) {
        match self {
            Face::Right => (Axis::X, n - 1, clockwise),
            Face::Left => (Axis::X, 0, !clockwise),
            Face::Up => (Axis::Y, n - 1, clockwise),
            Face::Down => (Axis::Y, 0, !clockwise),
            Face::Front => (Axis::Z, n - 1, clockwise),
            Face::Back => (Axis::Z, 0, !clockwise),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A rotation axis. Layer indices run from the low face (0) to the high
/// face (N−1); a `clockwise` layer turn is viewed from the positive end of
/// the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left (layer 0) to Right (layer N−1); clockwise viewed from the Right.
    X,
    /// Down to Up; clockwise viewed from above.
    Y,
    /// Back to Front; clockwise viewed from the Front.
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The four side faces a layer along this axis crosses and the two
    /// boundary faces, as static data.
    #[must_use]
    pub(crate) fn adjacency(self) -> &'static AxisAdjacency {
        &ADJACENCY[self as usize]
    }
}

/// A sticker color. The palette of a conventional six-color cube; the engine
/// treats these as opaque identities and never assumes which color sits in
/// which cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    /// The color conventionally found on `face` in a solved cube. Only
    /// [`CubeState::solved`](crate::CubeState::solved) and display code care;
    /// the rotation engine never does.
    #[must_use]
    pub fn of_solved_face(face: Face) -> Color {
        match face {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Right => Color::Red,
            Face::Left => Color::Orange,
        }
    }

    /// Single-letter abbreviation, for compact test failure output.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Whether a ring crosses a face along a row or along a column.
#[derive(Clone, Copy, Debug)]
pub(crate) enum RingAxis {
    Row,
    Col,
}

/// One of the four strips a rotated layer occupies on its side faces, and
/// how ring positions map onto that face's grid.
///
/// The fixed coordinate of the strip is the layer index (`flip_layer` selects
/// N−1−layer instead, for faces whose grid axis runs against the rotation
/// axis). `flip_pos` reverses the running coordinate: consecutive sides are
/// parametrized so that a clockwise turn carries position i of one side to
/// position i of the next, which puts the winding reversals of
/// opposite-facing boundaries into the table instead of the algorithm.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RingSide {
    pub(crate) face: Face,
    pub(crate) along: RingAxis,
    pub(crate) flip_layer: bool,
    pub(crate) flip_pos: bool,
}

impl RingSide {
    /// Grid coordinates of ring position `i` within `layer`, on a cube of
    /// side `n`.
    pub(crate) fn cell(self, n: usize, layer: usize, i: usize) -> (usize, usize) {
        let fixed = if self.flip_layer { n - 1 - layer } else { layer };
        let running = if self.flip_pos { n - 1 - i } else { i };
        match self.along {
            RingAxis::Row => (fixed, running),
            RingAxis::Col => (running, fixed),
        }
    }
}

/// Everything layer rotation needs to know about one axis: the side faces in
/// the order their rings shift under a clockwise turn (ring k moves onto
/// ring k+1), and the faces coincident with the two boundary layers.
pub(crate) struct AxisAdjacency {
    pub(crate) sides: [RingSide; 4],
    /// Coincident with layer 0. Turns with the opposite sense: its outside
    /// is the negative end of the axis.
    pub(crate) low_face: Face,
    /// Coincident with layer N−1. Turns with the layer's own sense.
    pub(crate) high_face: Face,
}

const fn side(face: Face, along: RingAxis, flip_layer: bool, flip_pos: bool) -> RingSide {
    RingSide {
        face,
        along,
        flip_layer,
        flip_pos,
    }
}

// Derived from the net embedding; see DESIGN.md for the worked derivation.
// Back is the only face whose columns run against the X axis, hence the
// double flip in the X table; the Y table moves whole rows untouched because
// every side face hangs off the horizontal band of the net the same way.
static ADJACENCY: [AxisAdjacency; 3] = [
    // X: clockwise from the Right carries Front -> Up -> Back -> Down.
    AxisAdjacency {
        sides: [
            side(Face::Front, RingAxis::Col, false, false),
            side(Face::Up, RingAxis::Col, false, false),
            side(Face::Back, RingAxis::Col, true, true),
            side(Face::Down, RingAxis::Col, false, false),
        ],
        low_face: Face::Left,
        high_face: Face::Right,
    },
    // Y: clockwise from above carries Front -> Left -> Back -> Right.
    AxisAdjacency {
        sides: [
            side(Face::Front, RingAxis::Row, true, false),
            side(Face::Left, RingAxis::Row, true, false),
            side(Face::Back, RingAxis::Row, true, false),
            side(Face::Right, RingAxis::Row, true, false),
        ],
        low_face: Face::Down,
        high_face: Face::Up,
    },
    // Z: clockwise from the Front carries Up -> Right -> Down -> Left.
    AxisAdjacency {
        sides: [
            side(Face::Up, RingAxis::Row, false, false),
            side(Face::Right, RingAxis::Col, true, false),
            side(Face::Down, RingAxis::Row, true, true),
            side(Face::Left, RingAxis::Col, false, true),
        ],
        low_face: Face::Back,
        high_face: Face::Front,
    },
];
