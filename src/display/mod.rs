/*
 *  display/mod.rs
 *
 *  duobar - two bars, one row
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display subsystem - adapter trait, errors and bundled drivers
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

// Core trait definitions
pub mod error;
pub mod traits;

// Bundled adapters: a recording mock for tests and a terminal emulator
// for desktop runs. Real transports (I2C/GPIO HD44780 and friends) plug
// into the same trait from the outside.
pub mod drivers;

pub use error::DisplayError;
pub use traits::{CharDisplay, CharGeometry};
