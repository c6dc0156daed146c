//! Move representation, bit-packed into a u16.

use std::fmt;

use crate::cell::Cell;

const SRC_MASK: u16 = 0x003F;
const DST_MASK: u16 = 0x0FC0;
const KIND_MASK: u16 = 0x3000;
const DST_SHIFT: u32 = 6;
const KIND_SHIFT: u32 = 12;

/// How a move reaches its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    /// The "no move" sentinel.
    Illegal = 0,
    /// One or more chained hops over adjacent pieces.
    Jump = 1,
    /// A single step to an adjacent empty cell.
    Step = 2,
}

impl MoveKind {
    const fn bits(self) -> u16 {
        (self as u16) << KIND_SHIFT
    }
}

/// A move encoded in 16 bits.
///
/// ```text
/// bits  0-5:  source cell      (0-63)
/// bits  6-11: destination cell (0-63)
/// bits 12-13: kind             (Illegal=0, Jump=1, Step=2)
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Sentinel for "no move". Never produced by move generation.
    pub const ILLEGAL: Move = Move(0);

    /// Create a single-step move.
    pub const fn step(source: Cell, dest: Cell) -> Move {
        Move::pack(source, dest, MoveKind::Step)
    }

    /// Create a jump move from the chain's origin to its endpoint.
    pub const fn jump(source: Cell, dest: Cell) -> Move {
        Move::pack(source, dest, MoveKind::Jump)
    }

    const fn pack(source: Cell, dest: Cell, kind: MoveKind) -> Move {
        Move((source.index() as u16) | ((dest.index() as u16) << DST_SHIFT) | kind.bits())
    }

    /// Extract the source cell.
    pub const fn source(self) -> Cell {
        Cell::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    /// Extract the destination cell.
    pub const fn dest(self) -> Cell {
        Cell::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }

    /// Extract the move kind.
    pub const fn kind(self) -> MoveKind {
        match (self.0 & KIND_MASK) >> KIND_SHIFT {
            1 => MoveKind::Jump,
            2 => MoveKind::Step,
            _ => MoveKind::Illegal,
        }
    }

    /// Return `true` if this is the sentinel (or any move of kind `Illegal`).
    pub const fn is_illegal(self) -> bool {
        matches!(self.kind(), MoveKind::Illegal)
    }

    /// Return `true` if this move was produced by a jump chain.
    pub const fn is_jump(self) -> bool {
        matches!(self.kind(), MoveKind::Jump)
    }

    /// Return `true` if this is a single adjacent step.
    pub const fn is_step(self) -> bool {
        matches!(self.kind(), MoveKind::Step)
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::ILLEGAL
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_illegal() {
            write!(f, "----")
        } else {
            write!(f, "{}{}", self.source(), self.dest())
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind())
    }
}
