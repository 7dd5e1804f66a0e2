/*
 *  display/drivers/terminal.rs
 *
 *  duobar - two bars, one row
 *  (c) 2020-26 Stuart Hunter
 *
 *  Terminal emulator driver for desktop testing without hardware
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use arrayvec::ArrayString;
use log::info;

use crate::display::error::DisplayError;
use crate::display::traits::{CharDisplay, CharGeometry};
use crate::glyphs::{GlyphBitmap, BLANK_CHAR, FULL_BLOCK_CHAR, GLYPH_COLS, GLYPH_ROWS};

/// Widest panel this emulator renders (the HD44780 address space tops out
/// at 40 columns per row)
pub const MAX_COLS: u8 = 40;

/// Bytes for one rendered row: worst case is 40 block-art chars, 3 UTF-8
/// bytes each
const ROW_BUF: usize = MAX_COLS as usize * 3;

/// Desktop stand-in for a character LCD.
///
/// Keeps the character matrix and the programmed CGRAM slots in memory and
/// renders frames as Unicode block art on stdout. Partial-fill glyphs are
/// approximated by eighth-blocks proportional to the lit pixels of the
/// bitmap actually programmed into the slot, so what you see tracks what
/// real hardware would show.
#[derive(Debug)]
pub struct TerminalLcd {
    geometry: CharGeometry,
    cells: Vec<u8>,
    cursor: (u8, u8),
    glyphs: [Option<GlyphBitmap>; 8],
    frame_count: u64,
}

impl TerminalLcd {
    pub fn new(cols: u8, rows: u8) -> Result<Self, DisplayError> {
        if cols == 0 || cols > MAX_COLS || rows == 0 {
            return Err(DisplayError::InvalidConfiguration(format!(
                "unsupported emulator geometry {}x{}",
                cols, rows
            )));
        }
        Ok(Self {
            geometry: CharGeometry {
                cols,
                rows,
                glyph_slots: 8,
            },
            cells: vec![BLANK_CHAR; usize::from(cols) * usize::from(rows)],
            cursor: (0, 0),
            glyphs: [None; 8],
            frame_count: 0,
        })
    }

    /// Block-art rendition of one row
    pub fn render_row(&self, row: u8) -> ArrayString<ROW_BUF> {
        let mut line = ArrayString::new();
        let cols = usize::from(self.geometry.cols);
        let start = usize::from(row) * cols;
        for &code in &self.cells[start..start + cols] {
            let _ = line.try_push(self.cell_char(code));
        }
        line
    }

    /// Print the whole matrix, boxed. Returns the number of terminal lines
    /// emitted so callers can move the cursor back up for animation.
    pub fn present(&mut self) -> u16 {
        let cols = usize::from(self.geometry.cols);
        let horizontal: String = "─".repeat(cols);
        println!("┌{}┐", horizontal);
        for row in 0..self.geometry.rows {
            println!("│{}│", self.render_row(row));
        }
        println!("└{}┘", horizontal);
        self.frame_count += 1;
        u16::from(self.geometry.rows) + 2
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn cell_char(&self, code: u8) -> char {
        match code {
            BLANK_CHAR => ' ',
            FULL_BLOCK_CHAR => '█',
            slot if usize::from(slot) < self.glyphs.len() => {
                match self.glyphs[usize::from(slot)] {
                    Some(bitmap) => eighth_block(lit_pixels(&bitmap)),
                    None => '?', // slot written before being programmed
                }
            }
            printable if (0x20..0x7f).contains(&printable) => printable as char,
            _ => '·',
        }
    }
}

fn lit_pixels(bitmap: &GlyphBitmap) -> u32 {
    bitmap.iter().map(|row| (row & 0x1f).count_ones()).sum()
}

/// Map a lit-pixel count (0..=40) onto ' ' plus the seven left-eighth
/// blocks, rounding to nearest.
fn eighth_block(lit: u32) -> char {
    const BLOCKS: [char; 8] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];
    let total = (GLYPH_ROWS * GLYPH_COLS) as u32;
    let idx = (lit * 8 + total / 2) / total;
    BLOCKS[idx.min(7) as usize]
}

impl CharDisplay for TerminalLcd {
    fn geometry(&self) -> &CharGeometry {
        &self.geometry
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        info!(
            "terminal LCD emulator {}x{} ready",
            self.geometry.cols, self.geometry.rows
        );
        Ok(())
    }

    fn move_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col >= self.geometry.cols || row >= self.geometry.rows {
            return Err(DisplayError::CursorOutOfBounds { col, row });
        }
        self.cursor = (col, row);
        Ok(())
    }

    fn write_char(&mut self, code: u8) -> Result<(), DisplayError> {
        let (col, row) = self.cursor;
        if col < self.geometry.cols {
            let idx =
                usize::from(row) * usize::from(self.geometry.cols) + usize::from(col);
            self.cells[idx] = code;
            self.cursor = (col + 1, row);
        }
        Ok(())
    }

    fn define_glyph(&mut self, slot: u8, bitmap: &GlyphBitmap) -> Result<(), DisplayError> {
        if slot >= self.geometry.glyph_slots {
            return Err(DisplayError::InvalidSlot {
                slot,
                available: self.geometry.glyph_slots,
            });
        }
        self.glyphs[usize::from(slot)] = Some(*bitmap);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.cells.fill(BLANK_CHAR);
        self.cursor = (0, 0);
        Ok(())
    }
}
