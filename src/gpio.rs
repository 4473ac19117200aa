// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User project pad configuration.
//!
//! Each `reg_mprj_io_N` holds a 13-bit pad configuration word, MSB first:
//!
//! ```text
//! | DM     | VTRIP | SLOW | AN_POL | AN_SEL | AN_EN | MOD_SEL | INP_DIS | HOLDH | OEB_N | MGMT_EN |
//! | 3 bits | 1     | 1    | 1      | 1      | 1     | 1       | 1       | 1     | 1     | 1       |
//! ```
//!
//! Writes only land in a shadow register. Nothing reaches the pads until the
//! configuration is shifted out by `commit`.

use log::{debug, trace};
use num_derive::FromPrimitive;

use crate::regs::{Reg, Registers};

/// Pad modes used by this design, named after the management SoC's
/// `GPIO_MODE_*` constants.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
pub enum GpioMode {
    /// Strong push-pull output driven by the user project.
    UserStdOutput = 0x1808,
    /// Digital input to the user project, no pull resistor.
    UserStdInputNoPull = 0x0402,
}

impl GpioMode {
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

/// What the Pong design has wired to a given pad.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PinRole {
    StartButton,
    Player1Encoder,
    Player2Encoder,
    Scoreboard,
    DotMatrix,
    Vga(VgaSignal),
    Difficulty,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VgaSignal {
    Hsync,
    Vsync,
    R0,
    R1,
    G0,
    G1,
    B0,
    B1,
}

impl PinRole {
    pub const fn mode(self) -> GpioMode {
        match self {
            PinRole::StartButton
            | PinRole::Player1Encoder
            | PinRole::Player2Encoder
            | PinRole::Difficulty => GpioMode::UserStdInputNoPull,
            PinRole::Scoreboard | PinRole::DotMatrix | PinRole::Vga(_) => {
                GpioMode::UserStdOutput
            }
        }
    }
}

/// First pad handed to the user project. Pads 0-7 carry JTAG, the
/// housekeeping SPI, the UART and the IRQ line; we leave them alone.
pub const FIRST_USER_PIN: u8 = 8;

/// Pong's pinout, indexed from `FIRST_USER_PIN` up to pad 37.
pub const PONG_PINS: [PinRole; 30] = {
    use PinRole::*;
    use VgaSignal::*;
    [
        // 8
        StartButton,
        // 9, 10: A and B phases
        Player1Encoder,
        Player1Encoder,
        // 11, 12
        Player2Encoder,
        Player2Encoder,
        // 13-20
        Scoreboard,
        Scoreboard,
        Scoreboard,
        Scoreboard,
        Scoreboard,
        Scoreboard,
        Scoreboard,
        Scoreboard,
        // 21-26
        DotMatrix,
        DotMatrix,
        DotMatrix,
        DotMatrix,
        DotMatrix,
        DotMatrix,
        // 27-34
        Vga(Hsync),
        Vga(Vsync),
        Vga(R0),
        Vga(R1),
        Vga(G0),
        Vga(G1),
        Vga(B0),
        Vga(B1),
        // 35-37
        Difficulty,
        Difficulty,
        Difficulty,
    ]
};

static_assertions::const_assert_eq!(
    FIRST_USER_PIN as usize + PONG_PINS.len(),
    crate::regs::MPRJ_IO_PINS as usize
);

/// Writes a pad configuration word for each pin in `pins`, starting at pad
/// `first`, then commits them.
///
/// This is the one place bring-up can stall: if the pad chain never reports
/// the shift as finished we spin here forever. There is nothing useful to
/// fall back to this early, so we don't try.
pub fn configure<R: Registers>(regs: &mut R, first: u8, pins: &[PinRole]) {
    debug!("configuring {} user pads from pad {}", pins.len(), first);
    for (pin, role) in (first..).zip(pins) {
        trace!("pad {}: {:?}", pin, role);
        regs.write(Reg::MprjIo(pin), role.mode().bits());
    }
    let polls = commit(regs);
    debug!("pad configuration committed after {} polls", polls);
}

/// Shifts the pending pad configuration out to the pads and waits for the
/// hardware to finish. Returns the number of polls that saw it busy.
///
/// Only bit 0 of `reg_mprj_xfer` is the busy flag; other bits are ignored.
pub fn commit<R: Registers>(regs: &mut R) -> usize {
    regs.write(Reg::MprjXfer, 1);
    let mut polls = 0;
    while regs.read(Reg::MprjXfer) & 1 != 0 {
        polls += 1;
    }
    polls
}
