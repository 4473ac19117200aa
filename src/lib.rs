// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bring-up for the Pong user project on a Caravel test chip.
//!
//! The management core has to do four things before the (entirely hardware)
//! game runs: hand the user pads to the design, get the SPI master talking to
//! the housekeeping SPI, use that to put the core clock on the PLL at a
//! VGA-friendly rate, and finally select and reset the design through the
//! logic analyzer banks. After that the design is free running and firmware
//! has nothing left to do.
//!
//! All of it is written against `regs::Registers`, so the same code drives
//! silicon and the simulated register file the tests use.

#![cfg_attr(not(test), no_std)]

pub mod bsp;
pub mod gpio;
pub mod la;
pub mod pll;
pub mod regs;
pub mod spi;

#[cfg(test)]
mod sim;

use log::debug;

use crate::regs::Registers;

/// Runs the complete bring-up sequence, in order:
///
/// 1. user pad configuration, committed and waited for,
/// 2. SPI master enable,
/// 3. PLL setup over the housekeeping SPI,
/// 4. project select and design reset.
///
/// Each step relies on the hardware state left by the previous one, and none
/// of them can be repeated or skipped independently. The pad commit is the
/// only place this waits on hardware, and it waits forever.
pub fn bring_up<R: Registers>(regs: &mut R) {
    debug!("bring-up: pads");
    gpio::configure(regs, gpio::FIRST_USER_PIN, &gpio::PONG_PINS);

    debug!("bring-up: spi master");
    spi::enable(regs);

    debug!("bring-up: pll");
    pll::configure(regs, &pll::PONG_VGA);

    debug!("bring-up: design");
    la::select_project(regs, la::PONG_PROJECT);
    la::pulse_reset(regs);
}
