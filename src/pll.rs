// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Housekeeping PLL setup over the housekeeping SPI.
//!
//! The VGA side of the Pong design wants a 31.5 MHz pixel clock, and the
//! board's oscillator is 10 MHz. The PLL gets us to 31.667 MHz (feedback
//! divider 19, both output dividers 6), which monitors accept. Only the
//! primary PLL output reaches the user area, as `wb_clk_i`; the design divides
//! it further for its slower game logic.
//!
//! The divider values come from the Caravel PLL calculator, not from anything
//! computed here.

use log::debug;
use num_derive::FromPrimitive;
use static_assertions::const_assert_eq;

use crate::regs::Registers;
use crate::spi;

/// Housekeeping SPI command byte for a streamed register write.
pub const HK_WRITE: u8 = 0x80;

/// Housekeeping registers involved in clocking.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
pub enum HkReg {
    /// Bit 0 enables the PLL, bit 1 selects DCO mode.
    PllEnable = 0x08,
    /// Bit 0 set runs the core from the external clock instead of the PLL.
    PllBypass = 0x09,
    /// Output divider 1 in bits 2-0, output divider 2 in bits 5-3.
    PllOutputDivider = 0x11,
    /// Feedback divider in bits 4-0.
    PllFeedbackDivider = 0x12,
}

/// Writes one housekeeping register. Each write is its own CSB assertion:
/// command, address, value.
pub fn hk_write<R: Registers>(regs: &mut R, reg: HkReg, value: u8) {
    debug!("hk {:?} <- {:#04x}", reg, value);
    spi::stream(regs, |s| {
        s.send(HK_WRITE);
        s.send(reg as u8);
        s.send(value);
    });
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PllSettings {
    pub output_div1: u8,
    pub output_div2: u8,
    pub feedback_div: u8,
}

impl PllSettings {
    pub const fn output_divider_bits(&self) -> u8 {
        (self.output_div2 & 0b111) << 3 | self.output_div1 & 0b111
    }

    pub const fn feedback_divider_bits(&self) -> u8 {
        self.feedback_div & 0b1_1111
    }
}

/// 10 MHz in, 31.667 MHz out.
pub const PONG_VGA: PllSettings = PllSettings {
    output_div1: 6,
    output_div2: 6,
    feedback_div: 19,
};

const_assert_eq!(PONG_VGA.output_divider_bits(), 0x36);
const_assert_eq!(PONG_VGA.feedback_divider_bits(), 0x13);

/// Switches the core clock over to the PLL and programs its dividers.
///
/// Order matters, the PLL is stateful: it's enabled (in plain, non-DCO mode)
/// before bypass is dropped, and the dividers follow.
pub fn configure<R: Registers>(regs: &mut R, settings: &PllSettings) {
    hk_write(regs, HkReg::PllEnable, 0x01);
    hk_write(regs, HkReg::PllBypass, 0x00);
    hk_write(regs, HkReg::PllOutputDivider, settings.output_divider_bits());
    hk_write(regs, HkReg::PllFeedbackDivider, settings.feedback_divider_bits());
}
