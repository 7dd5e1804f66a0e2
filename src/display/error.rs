/*
 *  display/error.rs
 *
 *  duobar - two bars, one row
 *  (c) 2020-26 Stuart Hunter
 *
 *  Unified error types for the display adapter boundary
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

use thiserror::Error;

/// Unified error type for all display-adapter operations.
///
/// The bar engine itself has no failure modes of its own: out-of-range
/// values clamp and degenerate ranges render empty. Everything here comes
/// from the adapter boundary (bus writes, geometry validation, glyph-slot
/// bookkeeping).
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Hardware initialization failed
    #[error("Display initialization failed: {0}")]
    InitializationFailed(String),

    /// A bus write to the display controller failed
    #[error("Bus write failed: {0}")]
    BusError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Unsupported operation for this display
    #[error("Operation not supported by this display")]
    UnsupportedOperation,

    /// Programmable glyph slot outside the panel's CGRAM range
    #[error("Invalid glyph slot {slot} (display has {available})")]
    InvalidSlot { slot: u8, available: u8 },

    /// Cursor target outside the character matrix
    #[error("Cursor out of bounds: col {col}, row {row}")]
    CursorOutOfBounds { col: u8, row: u8 },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
