//! Two-pass program generation for a whole text.
//!
//! The setup pass stores every distinct byte of the text in its own cell,
//! ascending by value, so a byte's cell index is its rank in the sorted set.
//! The playback pass then walks the pointer between those cells in text order
//! and prints at each stop.

use crate::encode::encode;
use crate::errors::{GenError, GenResult};
use crate::factor::{FactorTable, MAX_VALUE};
use crate::op::{Op, Program};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Drop `\r` from the text before encoding.
    pub strip_cr: bool,
}

/// Generate a program that prints `text`.
pub fn emit(text: &str) -> GenResult<Program> {
    emit_with(text, &EmitOptions::default())
}

pub fn emit_with(text: &str, options: &EmitOptions) -> GenResult<Program> {
    let bytes = text_to_bytes(text, options)?;
    let table = FactorTable::build();
    TextEmitter::new(&table, &bytes).emit()
}

/// Validate the whole text before anything is generated.
fn text_to_bytes(text: &str, options: &EmitOptions) -> GenResult<Vec<u8>> {
    let mut line = 1;
    let mut column = 1;
    let mut bytes = Vec::with_capacity(text.len());

    for ch in text.chars() {
        if !ch.is_ascii() {
            return Err(GenError::NonAscii { ch, line, column });
        }
        if options.strip_cr && ch == '\r' {
            continue;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
        bytes.push(ch as u8);
    }

    Ok(bytes)
}

pub struct TextEmitter<'a> {
    table: &'a FactorTable,
    text: &'a [u8],
    chars: Vec<u8>,
}

impl<'a> TextEmitter<'a> {
    /// Bytes above 127 make [`TextEmitter::emit`] fail with
    /// [`GenError::ValueOutOfRange`].
    pub fn new(table: &'a FactorTable, text: &'a [u8]) -> Self {
        let chars: Vec<u8> = text.iter().copied().collect::<BTreeSet<u8>>().into_iter().collect();
        Self { table, text, chars }
    }

    /// Distinct bytes of the text in tape order.
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    pub fn emit(&self) -> GenResult<Program> {
        let mut program = self.setup()?;
        let setup_len = program.len();
        program.append(self.playback());
        debug!(
            distinct = self.chars.len(),
            setup = setup_len,
            playback = program.len() - setup_len,
            "generated program"
        );
        Ok(program)
    }

    fn setup(&self) -> GenResult<Program> {
        let mut program = Program::new();
        for &byte in &self.chars {
            program.append(encode(byte, self.table)?);
        }
        if !self.chars.is_empty() {
            program.push(Op::Left);
        }
        Ok(program)
    }

    fn playback(&self) -> Program {
        // setup has already rejected bytes above MAX_VALUE
        let mut cell_of = [0isize; MAX_VALUE as usize + 1];
        for (index, &byte) in self.chars.iter().enumerate() {
            cell_of[byte as usize] = index as isize;
        }

        let mut program = Program::new();
        let mut position = self.chars.len() as isize - 1;
        for &byte in self.text {
            let index = cell_of[byte as usize];
            program.push_move(index - position);
            program.push(Op::Output);
            position = index;
        }
        program
    }
}
