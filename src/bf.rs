use crate::errors::{BfError, BfResult};

pub const DEFAULT_TAPE_LEN: usize = 30000;

/// Reference interpreter used to check generated programs.
pub struct BF {
    cells: Vec<u8>,
    ptr: usize,
    code: Vec<char>,
    pc: usize,
    input: Vec<u8>,
    input_pos: usize,
    output: Vec<u8>,
}

impl BF {
    pub fn new(code: &str) -> Self {
        Self::with_memory_limit(code, DEFAULT_TAPE_LEN)
    }

    pub fn with_memory_limit(code: &str, limit: usize) -> Self {
        BF {
            cells: vec![0; limit],
            ptr: 0,
            code: code.chars().collect(),
            pc: 0,
            input: Vec::new(),
            input_pos: 0,
            output: Vec::new(),
        }
    }

    /// Bytes served to `,`; reads past the end yield 0.
    pub fn with_input(mut self, input: &[u8]) -> Self {
        self.input = input.to_vec();
        self
    }

    pub fn dump_cells(&self, n: usize) -> &[u8] {
        &self.cells[..n.min(self.cells.len())]
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn run(&mut self) -> BfResult<()> {
        let jumps = self.match_brackets()?;

        while self.pc < self.code.len() {
            match self.code[self.pc] {
                '>' => {
                    if self.ptr + 1 >= self.cells.len() {
                        return Err(BfError::PointerOutOfBounds { pc: self.pc });
                    }
                    self.ptr += 1;
                }
                '<' => {
                    if self.ptr == 0 {
                        return Err(BfError::PointerOutOfBounds { pc: self.pc });
                    }
                    self.ptr -= 1;
                }
                '+' => self.cells[self.ptr] = self.cells[self.ptr].wrapping_add(1),
                '-' => self.cells[self.ptr] = self.cells[self.ptr].wrapping_sub(1),
                '.' => self.output.push(self.cells[self.ptr]),
                ',' => {
                    self.cells[self.ptr] = self.input.get(self.input_pos).copied().unwrap_or(0);
                    self.input_pos += 1;
                }
                '[' => {
                    if self.cells[self.ptr] == 0 {
                        self.pc = jumps[self.pc];
                    }
                }
                ']' => {
                    if self.cells[self.ptr] != 0 {
                        self.pc = jumps[self.pc];
                    }
                }
                _ => {} // Ignore other characters
            }
            self.pc += 1;
        }
        Ok(())
    }

    // Jump target for every bracket, indexed by position in `code`
    fn match_brackets(&self) -> BfResult<Vec<usize>> {
        let mut jumps = vec![0; self.code.len()];
        // (position, line, column) of each open bracket
        let mut open: Vec<(usize, usize, usize)> = Vec::new();
        let mut line = 1;
        let mut column = 1;
        for (pos, &c) in self.code.iter().enumerate() {
            match c {
                '[' => open.push((pos, line, column)),
                ']' => {
                    let (start, _, _) = open
                        .pop()
                        .ok_or(BfError::UnmatchedClose { line, column })?;
                    jumps[start] = pos;
                    jumps[pos] = start;
                }
                _ => {}
            }
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        if let Some(&(_, line, column)) = open.last() {
            return Err(BfError::UnmatchedOpen { line, column });
        }
        Ok(jumps)
    }
}
