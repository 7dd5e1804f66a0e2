/*
 *  glyphs.rs
 *
 *  duobar - two bars, one row
 *  (c) 2020-26 Stuart Hunter
 *
 *  Partial-fill glyph bitmaps, level lookup and lazy CGRAM programming
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

use log::debug;

use crate::display::error::DisplayError;
use crate::display::traits::CharDisplay;

/// Pixel rows per character cell
pub const GLYPH_ROWS: usize = 8;

/// Pixel columns per character cell
pub const GLYPH_COLS: usize = 5;

/// One CGRAM bitmap: 8 rows, low 5 bits of each byte, MSB on the left
pub type GlyphBitmap = [u8; GLYPH_ROWS];

/// Distinguishable fill states within one character cell. A bar over `n`
/// cells therefore resolves `n * 16` positions.
pub const SUB_LEVELS_PER_CELL: u16 = 16;

/// Built-in blank cell, needs no CGRAM slot
pub const BLANK_CHAR: u8 = 0x20;

/// Built-in solid block in the HD44780 character ROM, needs no CGRAM slot
pub const FULL_BLOCK_CHAR: u8 = 0xFF;

/// The 8 partial-fill patterns, one per CGRAM slot, in increasing fill
/// order. Pattern k lights k+1 half-columns: (k+1)/2 solid columns plus,
/// for even k, a dithered leading edge on rows 1,3,5,7. Lit-pixel count
/// grows by 4 per step, from 4 to 32 (a full cell is 40).
pub const BAR_FILL_STEPS: [GlyphBitmap; 8] = [
    [0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10], // dithered sliver
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10], // 1 column
    [0x10, 0x18, 0x10, 0x18, 0x10, 0x18, 0x10, 0x18], // 1.5 columns
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18], // 2 columns
    [0x18, 0x1c, 0x18, 0x1c, 0x18, 0x1c, 0x18, 0x1c], // 2.5 columns
    [0x1c, 0x1c, 0x1c, 0x1c, 0x1c, 0x1c, 0x1c, 0x1c], // 3 columns
    [0x1c, 0x1e, 0x1c, 0x1e, 0x1c, 0x1e, 0x1c, 0x1e], // 3.5 columns
    [0x1e, 0x1e, 0x1e, 0x1e, 0x1e, 0x1e, 0x1e, 0x1e], // 4 columns
];

/// What a single boundary cell renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFill {
    /// Nothing lit; rendered with the built-in blank character
    Blank,

    /// One of the programmable partial-fill glyphs (slot index == CGRAM
    /// character code)
    Partial(u8),
}

/// Sub-cell fill level to boundary-cell glyph. Level 0 is blank; levels
/// 1..15 map onto the 8 patterns two levels apiece; level 16 never reaches
/// this table because it carries into the next full cell.
pub const LEVEL_TO_GLYPH: [CellFill; SUB_LEVELS_PER_CELL as usize] = [
    CellFill::Blank,
    CellFill::Partial(0),
    CellFill::Partial(0),
    CellFill::Partial(1),
    CellFill::Partial(1),
    CellFill::Partial(2),
    CellFill::Partial(2),
    CellFill::Partial(3),
    CellFill::Partial(3),
    CellFill::Partial(4),
    CellFill::Partial(4),
    CellFill::Partial(5),
    CellFill::Partial(5),
    CellFill::Partial(6),
    CellFill::Partial(6),
    CellFill::Partial(7),
];

/// Split a quantized level into whole solid cells plus the boundary-cell
/// glyph. Everything past the boundary cell is blank.
pub fn compose(level: u16) -> (u8, CellFill) {
    let full = (level / SUB_LEVELS_PER_CELL) as u8;
    let remainder = (level % SUB_LEVELS_PER_CELL) as usize;
    (full, LEVEL_TO_GLYPH[remainder])
}

/// Tracks which CGRAM slots already hold our patterns so each slot is
/// programmed at most once per renderer lifetime. The bitmap constants
/// live in read-only storage; the panel copy happens lazily on first use.
///
/// The 8 slots are shared per display. Every renderer programs the same
/// `BAR_FILL_STEPS` patterns, so the last registration winning is benign;
/// mixing in renderers with a different table on the same panel is a
/// caller error.
#[derive(Debug, Clone, Default)]
pub struct GlyphSet {
    programmed: u8, // bitmask, one bit per CGRAM slot
}

impl GlyphSet {
    pub fn new() -> Self {
        Self { programmed: 0 }
    }

    /// Program `slot` if this set has not done so yet.
    pub fn ensure<D: CharDisplay>(
        &mut self,
        display: &mut D,
        slot: u8,
    ) -> Result<(), DisplayError> {
        let bit = 1u8 << slot;
        if self.programmed & bit == 0 {
            display.define_glyph(slot, &BAR_FILL_STEPS[slot as usize])?;
            self.programmed |= bit;
            debug!("programmed CGRAM slot {} with fill step", slot);
        }
        Ok(())
    }

    pub fn is_programmed(&self, slot: u8) -> bool {
        self.programmed & (1u8 << slot) != 0
    }

    /// Forget all programming, forcing re-registration on next use. Needed
    /// after a panel reset wipes CGRAM.
    pub fn invalidate(&mut self) {
        self.programmed = 0;
    }
}
