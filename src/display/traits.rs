/*
 *  display/traits.rs
 *
 *  duobar - two bars, one row
 *  (c) 2020-26 Stuart Hunter
 *
 *  Core trait definition for character-display adapters
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

use crate::display::error::DisplayError;
use crate::glyphs::GlyphBitmap;

/// Character-matrix geometry and capabilities
#[derive(Debug, Clone)]
pub struct CharGeometry {
    /// Columns per row (16, 20, 40, ...)
    pub cols: u8,

    /// Number of rows (1, 2, 4)
    pub rows: u8,

    /// Programmable CGRAM glyph slots (8 on HD44780-class panels)
    pub glyph_slots: u8,
}

/// Minimal hardware abstraction - all character-display adapters implement
/// this trait.
///
/// It is the narrow seam between the bar engine and the transport: cursor
/// positioning, single-cell writes and glyph-slot programming. All
/// operations are synchronous, blocking bus writes. The panel itself is
/// expected to be initialized by the caller before any bar is drawn;
/// `init` exists for drivers that own their transport end to end.
pub trait CharDisplay: Send {
    /// Returns the geometry of this display
    fn geometry(&self) -> &CharGeometry;

    /// Returns the display dimensions as (cols, rows)
    fn dimensions(&self) -> (u8, u8) {
        let geo = self.geometry();
        (geo.cols, geo.rows)
    }

    /// Initialize the display hardware
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Move the write cursor to `(col, row)`, 0-based
    fn move_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write one character cell at the cursor; the cursor advances one
    /// column, matching HD44780 auto-increment.
    ///
    /// Codes 0..8 address the programmable CGRAM glyphs, everything else
    /// is the controller's built-in character ROM (0x20 blank, 0xFF solid
    /// block).
    fn write_char(&mut self, code: u8) -> Result<(), DisplayError>;

    /// Program a CGRAM glyph slot with a 5x8 bitmap (8 rows, low 5 bits
    /// of each byte, MSB on the left).
    ///
    /// Slot contents survive until reprogrammed or the panel is reset.
    fn define_glyph(&mut self, slot: u8, bitmap: &GlyphBitmap) -> Result<(), DisplayError>;

    /// Blank the whole character matrix
    fn clear(&mut self) -> Result<(), DisplayError>;
}
