/*
 *  lib.rs
 *
 *  duobar - two bars, one row
 *  (c) 2020-26 Stuart Hunter
 *
 *  Two independent progress bars in a single row of a character LCD,
 *  with sub-cell resolution from the panel's 8 programmable glyphs and
 *  change-tracking that keeps bus writes to the cells that moved.
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

pub mod bar;
pub mod config;
pub mod display;
pub mod glyphs;
pub mod range;

pub use bar::{BarSegment, DuoBar};
pub use display::error::DisplayError;
pub use display::traits::{CharDisplay, CharGeometry};
pub use glyphs::{CellFill, GlyphSet, SUB_LEVELS_PER_CELL};
pub use range::{BarId, BarRange};
