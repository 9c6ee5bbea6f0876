use std::fmt;

/// A single instruction of the tape language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Inc,
    /// `-`
    Dec,
    /// `>`
    Right,
    /// `<`
    Left,
    /// `[`
    Open,
    /// `]`
    Close,
    /// `.`
    Output,
}

impl Op {
    pub fn glyph(self) -> char {
        match self {
            Op::Inc => '+',
            Op::Dec => '-',
            Op::Right => '>',
            Op::Left => '<',
            Op::Open => '[',
            Op::Close => ']',
            Op::Output => '.',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// An ordered instruction stream. Finished pieces are appended, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    ops: Vec<Op>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    pub fn push_n(&mut self, op: Op, n: usize) {
        self.ops.extend(std::iter::repeat(op).take(n));
    }

    /// Moves the pointer by `offset` cells, right when positive.
    pub fn push_move(&mut self, offset: isize) {
        if offset > 0 {
            self.push_n(Op::Right, offset.unsigned_abs());
        } else {
            self.push_n(Op::Left, offset.unsigned_abs());
        }
    }

    /// Adds `delta` to the current cell, incrementing when positive.
    pub fn push_add(&mut self, delta: i32) {
        if delta > 0 {
            self.push_n(Op::Inc, delta.unsigned_abs() as usize);
        } else {
            self.push_n(Op::Dec, delta.unsigned_abs() as usize);
        }
    }

    pub fn append(&mut self, other: Program) {
        self.ops.extend(other.ops);
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn count(&self, op: Op) -> usize {
        self.ops.iter().filter(|&&o| o == op).count()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

impl From<Vec<Op>> for Program {
    fn from(ops: Vec<Op>) -> Self {
        Self { ops }
    }
}
