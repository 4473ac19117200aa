// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BSP for the Efabless Caravel evaluation board.
//!
//! The board's user LED hangs off the management GPIO pad, active high.

use crate::bsp::Bsp;
use crate::regs::{Reg, Registers};

pub struct Board;

impl Bsp for Board {
    fn indicate_fault<R: Registers>(regs: &mut R) {
        // Output enable is active low.
        regs.write(Reg::GpioEna, 0);
        regs.write(Reg::GpioData, 1);
    }
}
