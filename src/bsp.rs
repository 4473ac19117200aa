// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Types and hooks for implementing Board Support Packages (BSPs).
//!
//! Bring-up itself doesn't care about the board: every Caravel exposes the same
//! registers. What differs is how, if at all, we can tell a human that
//! something went wrong.
//!
//! To implement a BSP:
//!
//! 1. Create a module within `bsp` named after your board.
//! 2. Define a type in the module called `Board`. This type will never be
//!    instantiated, so it can be arbitrary; an empty struct is easy.
//! 3. Implement `bsp::Bsp` for your `Board` type.
//! 4. Add a `target-board-*` feature to `Cargo.toml`.
//! 5. Add a branch to the `cfg_if` in `src/bin/pong.rs` to detect your board
//!    and select the right `Board` type.

// Every BSP is compiled regardless of the selected board, so that they all
// keep building.
pub mod caravel_eval;
pub mod rtl_sim;

use crate::regs::Registers;

/// Requirements placed upon a BSP type.
pub trait Bsp {
    /// Indicate an unrecoverable fault. No information is provided as to
    /// _what_ failed, because generally speaking we only have one bit of
    /// output.
    fn indicate_fault<R: Registers>(regs: &mut R);
}
