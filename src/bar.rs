/*
 *  bar.rs
 *
 *  duobar - two bars, one row
 *  (c) 2020-26 Stuart Hunter
 *
 *  Dual bar renderer - quantize, compose and selectively redraw
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

use log::{debug, trace};

use crate::display::error::DisplayError;
use crate::display::traits::CharDisplay;
use crate::glyphs::{self, CellFill, GlyphSet, BLANK_CHAR, FULL_BLOCK_CHAR, SUB_LEVELS_PER_CELL};
use crate::range::{BarId, BarRange, RenderedBar};

/// The slice of the row one bar occupies.
///
/// Segments of the two bars must not overlap; the renderer paints each
/// independently and an overlap degenerates to last-writer-wins, same as
/// the shared glyph-slot rule. A zero-width segment parks a bar entirely
/// (it is never drawn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSegment {
    /// First column of the segment, 0-based
    pub start_col: u8,

    /// Cell count available to the bar
    pub cells: u8,
}

impl BarSegment {
    pub fn new(start_col: u8, cells: u8) -> Self {
        Self { start_col, cells }
    }

    /// Distinct displayable positions across this segment
    pub fn total_resolution(&self) -> u16 {
        u16::from(self.cells) * SUB_LEVELS_PER_CELL
    }
}

/// Two progress bars sharing one row of a character display.
///
/// The renderer owns the adapter and a `GlyphSet` handle to the panel's
/// programmable slots; both bars draw from the same glyph table. All calls
/// are synchronous and single-threaded - configuration changes take
/// effect on the next `draw`, nothing redraws on its own.
pub struct DuoBar<D: CharDisplay> {
    display: D,
    row: u8,
    segments: [BarSegment; 2],
    ranges: [BarRange; 2],
    glyphs: GlyphSet,
}

impl<D: CharDisplay> DuoBar<D> {
    /// Set up two bars on `row`, sharing the first `num_cols` columns with
    /// an even split: bar one takes the left half, bar two the rest.
    ///
    /// The panel is expected to be initialized already; no writes happen
    /// here. Fails on geometry that does not fit the adapter.
    pub fn new(display: D, row: u8, num_cols: u8) -> Result<Self, DisplayError> {
        let geo = display.geometry();
        if row >= geo.rows {
            return Err(DisplayError::InvalidConfiguration(format!(
                "row {} out of range, display has {} rows",
                row, geo.rows
            )));
        }
        if num_cols == 0 || num_cols > geo.cols {
            return Err(DisplayError::InvalidConfiguration(format!(
                "{} columns requested, display has {}",
                num_cols, geo.cols
            )));
        }

        let left = num_cols / 2;
        let segments = [
            BarSegment::new(0, left),
            BarSegment::new(left, num_cols - left),
        ];

        Ok(Self {
            display,
            row,
            segments,
            ranges: [BarRange::new(), BarRange::new()],
            glyphs: GlyphSet::new(),
        })
    }

    /// Replace the default split with explicit segments.
    ///
    /// Both bars are reset to the never-drawn state since their recorded
    /// appearance refers to the old cells; stale fill outside the new
    /// segments is the caller's to clear.
    pub fn set_layout(
        &mut self,
        seg1: BarSegment,
        seg2: BarSegment,
    ) -> Result<(), DisplayError> {
        let cols = self.display.geometry().cols;
        for seg in [&seg1, &seg2] {
            if u16::from(seg.start_col) + u16::from(seg.cells) > u16::from(cols) {
                return Err(DisplayError::InvalidConfiguration(format!(
                    "segment at col {} width {} exceeds {} columns",
                    seg.start_col, seg.cells, cols
                )));
            }
        }
        self.segments = [seg1, seg2];
        self.ranges[0].reset_rendered();
        self.ranges[1].reset_rendered();
        Ok(())
    }

    pub fn segment(&self, bar: BarId) -> BarSegment {
        self.segments[bar.index()]
    }

    pub fn range(&self, bar: BarId) -> &BarRange {
        &self.ranges[bar.index()]
    }

    /// Starting value of one bar's domain
    pub fn set_min_value(&mut self, bar: BarId, value: i32) {
        self.ranges[bar.index()].set_min(value);
    }

    /// Finishing value of one bar's domain
    pub fn set_max_value(&mut self, bar: BarId, value: i32) {
        self.ranges[bar.index()].set_max(value);
    }

    /// Starting values of both bars at once
    pub fn set_min_values(&mut self, value1: i32, value2: i32) {
        self.ranges[0].set_min(value1);
        self.ranges[1].set_min(value2);
    }

    /// Finishing values of both bars at once
    pub fn set_max_values(&mut self, value1: i32, value2: i32) {
        self.ranges[0].set_max(value1);
        self.ranges[1].set_max(value2);
    }

    /// Both ends of one bar's domain at once. `min >= max` is not an
    /// error: it is the documented way to turn the bar off.
    pub fn set_range(&mut self, bar: BarId, min: i32, max: i32) {
        self.ranges[bar.index()].set_range(min, max);
    }

    /// Named shortcut for `set_range(bar, 0, 0)`
    pub fn disable_bar(&mut self, bar: BarId) {
        self.ranges[bar.index()].disable();
    }

    /// Render both bars for the given values, writing only cells whose
    /// appearance changed since the previous draw. Blocks until the
    /// necessary adapter writes complete.
    ///
    /// A value handed to a disabled bar is ignored (the bar renders
    /// empty); passing 0 for an unconfigured bar is a documented no-op.
    pub fn draw(&mut self, value1: i32, value2: i32) -> Result<(), DisplayError> {
        self.draw_bar(0, value1)?;
        self.draw_bar(1, value2)
    }

    /// Alias for `draw`, kept for naming compatibility with the single-bar
    /// relatives of this library.
    pub fn draw_values(&mut self, value1: i32, value2: i32) -> Result<(), DisplayError> {
        self.draw(value1, value2)
    }

    /// Access the owned adapter, e.g. to present an emulator frame
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn draw_bar(&mut self, idx: usize, value: i32) -> Result<(), DisplayError> {
        let seg = self.segments[idx];
        if seg.cells == 0 {
            return Ok(());
        }

        let level = self.ranges[idx].quantize(value, seg.total_resolution());
        let (full_cells, edge) = glyphs::compose(level);
        let rendered = RenderedBar { full_cells, edge };

        let previous = self.ranges[idx].last_rendered();
        if previous == Some(rendered) {
            trace!("bar {}: level {} unchanged, skipping writes", idx + 1, level);
            return Ok(());
        }

        // Repaint from the segment start through the boundary cell, plus
        // whatever the previous position filled beyond it so a shrinking
        // bar erases its stale cells. Cells past both positions are left
        // alone.
        let stop = match previous {
            None => seg.cells,
            Some(old) => {
                let past_edge = u16::from(full_cells.max(old.full_cells)) + 1;
                past_edge.min(u16::from(seg.cells)) as u8
            }
        };

        if let CellFill::Partial(slot) = edge {
            self.glyphs.ensure(&mut self.display, slot)?;
        }

        self.display.move_cursor(seg.start_col, self.row)?;
        for col in 0..stop {
            let code = if col < full_cells {
                FULL_BLOCK_CHAR
            } else if col == full_cells {
                match edge {
                    CellFill::Blank => BLANK_CHAR,
                    CellFill::Partial(slot) => slot,
                }
            } else {
                BLANK_CHAR
            };
            self.display.write_char(code)?;
        }

        self.ranges[idx].set_last_rendered(rendered);
        debug!(
            "bar {}: level {} -> {} solid cells, edge {:?}, wrote {} cells",
            idx + 1,
            level,
            full_cells,
            edge,
            stop
        );
        Ok(())
    }
}
