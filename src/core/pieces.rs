//! Shape catalog and the live falling piece.
//!
//! Each kind owns an ordered list of rotation masks. Symmetric kinds store
//! only their distinct states (I/S/Z have two, O one, T/L/J four) and
//! rotation cycles through the list, so a 180-degree turn of an S piece is
//! the same mask as its spawn state.

use crate::types::ShapeKind;

/// One rotation state: the bounding box of the mask plus its four occupied
/// cells as `(col, row)` offsets from the box's top-left corner, listed in
/// row-major scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationMask {
    pub width: u8,
    pub height: u8,
    pub cells: [(u8, u8); 4],
}

const I_ROTATIONS: [RotationMask; 2] = [
    RotationMask {
        width: 4,
        height: 1,
        cells: [(0, 0), (1, 0), (2, 0), (3, 0)],
    },
    RotationMask {
        width: 1,
        height: 4,
        cells: [(0, 0), (0, 1), (0, 2), (0, 3)],
    },
];

const O_ROTATIONS: [RotationMask; 1] = [RotationMask {
    width: 2,
    height: 2,
    cells: [(0, 0), (1, 0), (0, 1), (1, 1)],
}];

const T_ROTATIONS: [RotationMask; 4] = [
    RotationMask {
        width: 3,
        height: 2,
        cells: [(1, 0), (0, 1), (1, 1), (2, 1)],
    },
    RotationMask {
        width: 2,
        height: 3,
        cells: [(0, 0), (0, 1), (1, 1), (0, 2)],
    },
    RotationMask {
        width: 3,
        height: 2,
        cells: [(0, 0), (1, 0), (2, 0), (1, 1)],
    },
    RotationMask {
        width: 2,
        height: 3,
        cells: [(1, 0), (0, 1), (1, 1), (1, 2)],
    },
];

const L_ROTATIONS: [RotationMask; 4] = [
    RotationMask {
        width: 2,
        height: 3,
        cells: [(0, 0), (0, 1), (0, 2), (1, 2)],
    },
    RotationMask {
        width: 3,
        height: 2,
        cells: [(0, 0), (1, 0), (2, 0), (0, 1)],
    },
    RotationMask {
        width: 2,
        height: 3,
        cells: [(0, 0), (1, 0), (1, 1), (1, 2)],
    },
    RotationMask {
        width: 3,
        height: 2,
        cells: [(2, 0), (0, 1), (1, 1), (2, 1)],
    },
];

const J_ROTATIONS: [RotationMask; 4] = [
    RotationMask {
        width: 2,
        height: 3,
        cells: [(1, 0), (1, 1), (0, 2), (1, 2)],
    },
    RotationMask {
        width: 3,
        height: 2,
        cells: [(0, 0), (0, 1), (1, 1), (2, 1)],
    },
    RotationMask {
        width: 2,
        height: 3,
        cells: [(0, 0), (1, 0), (0, 1), (0, 2)],
    },
    RotationMask {
        width: 3,
        height: 2,
        cells: [(0, 0), (1, 0), (2, 0), (2, 1)],
    },
];

const S_ROTATIONS: [RotationMask; 2] = [
    RotationMask {
        width: 3,
        height: 2,
        cells: [(1, 0), (2, 0), (0, 1), (1, 1)],
    },
    RotationMask {
        width: 2,
        height: 3,
        cells: [(0, 0), (0, 1), (1, 1), (1, 2)],
    },
];

const Z_ROTATIONS: [RotationMask; 2] = [
    RotationMask {
        width: 3,
        height: 2,
        cells: [(0, 0), (1, 0), (1, 1), (2, 1)],
    },
    RotationMask {
        width: 2,
        height: 3,
        cells: [(1, 0), (0, 1), (1, 1), (0, 2)],
    },
];

/// Get the ordered rotation states for a shape kind.
pub fn rotations(kind: ShapeKind) -> &'static [RotationMask] {
    match kind {
        ShapeKind::I => &I_ROTATIONS,
        ShapeKind::O => &O_ROTATIONS,
        ShapeKind::T => &T_ROTATIONS,
        ShapeKind::S => &S_ROTATIONS,
        ShapeKind::Z => &Z_ROTATIONS,
        ShapeKind::J => &J_ROTATIONS,
        ShapeKind::L => &L_ROTATIONS,
    }
}

/// Active falling piece: a shape kind, a rotation index (interpreted modulo
/// the kind's rotation-state count), and the playfield position of the
/// active mask's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: usize,
    pub col: i16,
    pub row: i16,
}

impl Piece {
    /// Create a piece at the spawn position: top row, horizontally centered
    /// for its spawn-state mask width.
    pub fn spawn(kind: ShapeKind, cols: u16) -> Self {
        let mut piece = Self {
            kind,
            rotation: 0,
            col: 0,
            row: 0,
        };
        piece.recenter(cols);
        piece
    }

    /// The mask for the current rotation.
    pub fn mask(&self) -> &'static RotationMask {
        self.mask_at(self.rotation)
    }

    /// The mask the piece would show at an arbitrary rotation index.
    pub fn mask_at(&self, rotation: usize) -> &'static RotationMask {
        let states = rotations(self.kind);
        &states[rotation % states.len()]
    }

    /// The rotation index one step clockwise from the current one.
    /// Committing the advance is the session's job; this never mutates.
    pub fn next_rotation(&self) -> usize {
        (self.rotation + 1) % rotations(self.kind).len()
    }

    /// Absolute playfield coordinates of the four occupied cells.
    pub fn cells(&self) -> [(i16, i16); 4] {
        let mask = self.mask();
        mask.cells
            .map(|(dc, dr)| (self.col + dc as i16, self.row + dr as i16))
    }

    /// Move back to the spawn position, keeping the current rotation.
    /// Centering uses the active mask's width, so a vertically held I piece
    /// recenters on a single column.
    pub fn recenter(&mut self, cols: u16) {
        self.col = (cols / 2) as i16 - (self.mask().width / 2) as i16;
        self.row = 0;
    }
}
