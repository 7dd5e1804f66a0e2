/*
 *  display/drivers/mock.rs
 *
 *  duobar - two bars, one row
 *  (c) 2020-26 Stuart Hunter
 *
 *  Mock character display for testing without hardware
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

use std::sync::{Arc, Mutex};

use crate::display::error::DisplayError;
use crate::display::traits::{CharDisplay, CharGeometry};
use crate::glyphs::{GlyphBitmap, BLANK_CHAR};

/// One recorded adapter call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    MoveCursor { col: u8, row: u8 },
    WriteChar { code: u8 },
    DefineGlyph { slot: u8 },
}

/// Internal state of the mock, shared so tests keep a handle after the
/// renderer takes ownership of the driver.
#[derive(Debug, Default)]
pub struct MockLcdState {
    /// Every adapter call, in order
    pub ops: Vec<Op>,

    /// Character codes of the whole matrix, row-major
    pub cells: Vec<u8>,

    /// Current write cursor (col, row)
    pub cursor: (u8, u8),

    /// Last bitmap programmed into each CGRAM slot
    pub defined_glyphs: [Option<GlyphBitmap>; 8],

    /// Cumulative number of times each CGRAM slot was programmed.
    /// Persistent across `clear_ops`, unlike the op-buffer scan.
    pub define_counts: [usize; 8],

    /// Number of times init() was called
    pub init_count: usize,

    /// Number of times clear() was called
    pub clear_count: usize,

    /// Simulate failures (for error testing)
    pub simulate_write_failure: bool,
}

/// Mock display driver for tests and CI, no hardware required.
///
/// Records every operation and keeps a character matrix that tests can
/// snapshot. Cloning shares the underlying state, so keep a clone (or the
/// `state()` handle) around before handing the driver to a renderer.
#[derive(Debug, Clone)]
pub struct MockLcd {
    geometry: CharGeometry,
    state: Arc<Mutex<MockLcdState>>,
}

impl MockLcd {
    pub fn new(cols: u8, rows: u8) -> Self {
        let state = MockLcdState {
            cells: vec![BLANK_CHAR; usize::from(cols) * usize::from(rows)],
            ..MockLcdState::default()
        };
        Self {
            geometry: CharGeometry {
                cols,
                rows,
                glyph_slots: 8,
            },
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// The classic 16x2 panel
    pub fn new_16x2() -> Self {
        Self::new(16, 2)
    }

    /// Shared-state handle for inspection in tests
    pub fn state(&self) -> Arc<Mutex<MockLcdState>> {
        Arc::clone(&self.state)
    }

    /// Character codes of one row
    pub fn row_codes(&self, row: u8) -> Vec<u8> {
        let state = self.state.lock().unwrap();
        let cols = usize::from(self.geometry.cols);
        let start = usize::from(row) * cols;
        state.cells[start..start + cols].to_vec()
    }

    /// Total recorded operations
    pub fn op_count(&self) -> usize {
        self.state.lock().unwrap().ops.len()
    }

    /// Forget recorded operations, keep the matrix (useful between test
    /// phases)
    pub fn clear_ops(&self) {
        self.state.lock().unwrap().ops.clear();
    }

    /// How often `slot` was programmed
    pub fn define_count(&self, slot: u8) -> usize {
        self.state.lock().unwrap().define_counts[usize::from(slot)]
    }
}

impl CharDisplay for MockLcd {
    fn geometry(&self) -> &CharGeometry {
        &self.geometry
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        self.state.lock().unwrap().init_count += 1;
        Ok(())
    }

    fn move_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col >= self.geometry.cols || row >= self.geometry.rows {
            return Err(DisplayError::CursorOutOfBounds { col, row });
        }
        let mut state = self.state.lock().unwrap();
        if state.simulate_write_failure {
            return Err(DisplayError::BusError("simulated failure".to_string()));
        }
        state.cursor = (col, row);
        state.ops.push(Op::MoveCursor { col, row });
        Ok(())
    }

    fn write_char(&mut self, code: u8) -> Result<(), DisplayError> {
        let mut state = self.state.lock().unwrap();
        if state.simulate_write_failure {
            return Err(DisplayError::BusError("simulated failure".to_string()));
        }
        let (col, row) = state.cursor;
        let cols = self.geometry.cols;
        if col < cols {
            let idx = usize::from(row) * usize::from(cols) + usize::from(col);
            state.cells[idx] = code;
            // auto-increment, writes past the row end are dropped
            state.cursor = (col + 1, row);
        }
        state.ops.push(Op::WriteChar { code });
        Ok(())
    }

    fn define_glyph(&mut self, slot: u8, bitmap: &GlyphBitmap) -> Result<(), DisplayError> {
        if slot >= self.geometry.glyph_slots {
            return Err(DisplayError::InvalidSlot {
                slot,
                available: self.geometry.glyph_slots,
            });
        }
        let mut state = self.state.lock().unwrap();
        if state.simulate_write_failure {
            return Err(DisplayError::BusError("simulated failure".to_string()));
        }
        state.defined_glyphs[usize::from(slot)] = Some(*bitmap);
        state.define_counts[usize::from(slot)] += 1;
        state.ops.push(Op::DefineGlyph { slot });
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        let mut state = self.state.lock().unwrap();
        state.cells.fill(BLANK_CHAR);
        state.cursor = (0, 0);
        state.clear_count += 1;
        Ok(())
    }
}
