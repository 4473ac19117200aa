// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Management SoC SPI master.
//!
//! We only ever use it in one way: routed to the housekeeping SPI, writing a
//! few bytes per chip-select assertion in stream mode. There's no receive path
//! and no status polling; the master is fast enough relative to the core that
//! back-to-back data writes are fine.

use log::trace;
use static_assertions::const_assert_eq;

use crate::regs::{Reg, Registers};

/// Contents of `reg_spimaster_config`.
///
/// Every field of the register has a builder, including ones bring-up leaves
/// at zero (CSB/SCK sense, edge mode, IRQ enable).
///
/// ```text
/// bits 7-0  clock prescaler
/// bit  8    LSB first
/// bit  9    CSB sense (0 = inverted)
/// bit 10    SCK sense (0 = noninverted)
/// bit 11    mode (0 = read/write on opposite edges)
/// bit 12    stream (CSB stays asserted until this is cleared)
/// bit 13    enable
/// bit 14    IRQ enable
/// bit 15    connect to housekeeping SPI
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SpiMasterConfig(u32);

impl SpiMasterConfig {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn prescaler(self, div: u8) -> Self {
        Self(self.0 & !0xff | div as u32)
    }

    pub const fn lsb_first(self) -> Self {
        Self(self.0 | 1 << 8)
    }

    pub const fn csb_noninverted(self) -> Self {
        Self(self.0 | 1 << 9)
    }

    pub const fn sck_inverted(self) -> Self {
        Self(self.0 | 1 << 10)
    }

    pub const fn same_edge(self) -> Self {
        Self(self.0 | 1 << 11)
    }

    pub const fn stream(self) -> Self {
        Self(self.0 | 1 << 12)
    }

    pub const fn enable(self) -> Self {
        Self(self.0 | 1 << 13)
    }

    pub const fn irq_enable(self) -> Self {
        Self(self.0 | 1 << 14)
    }

    pub const fn housekeeping(self) -> Self {
        Self(self.0 | 1 << 15)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl Default for SpiMasterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Enabled, prescaler 2, routed to the housekeeping SPI.
pub const ENABLE: SpiMasterConfig = SpiMasterConfig::new()
    .prescaler(2)
    .enable()
    .housekeeping();

/// `ENABLE` plus stream mode: asserts CSB for the following data writes.
pub const STREAM_START: SpiMasterConfig = ENABLE.stream();

/// Clears stream mode, releasing CSB. This is the word the bring-up sequence
/// has always used, LSB-first bit included.
pub const STREAM_END: SpiMasterConfig = ENABLE.lsb_first();

const_assert_eq!(ENABLE.bits(), 0xa002);
const_assert_eq!(STREAM_START.bits(), 0xb002);
const_assert_eq!(STREAM_END.bits(), 0xa102);

/// Turns the master on and hands it to the housekeeping SPI.
pub fn enable<R: Registers>(regs: &mut R) {
    regs.write(Reg::SpiMasterConfig, ENABLE.bits());
}

/// An open stream-mode transaction. Only exists inside `stream`.
pub struct Stream<'a, R: Registers> {
    regs: &'a mut R,
}

impl<R: Registers> Stream<'_, R> {
    /// Shifts out one byte.
    pub fn send(&mut self, byte: u8) {
        trace!("spi: {:#04x}", byte);
        self.regs.write(Reg::SpiMasterData, byte as u32);
    }
}

/// Runs `body` with CSB asserted, and releases it afterwards.
pub fn stream<R: Registers, T>(
    regs: &mut R,
    body: impl FnOnce(&mut Stream<'_, R>) -> T,
) -> T {
    regs.write(Reg::SpiMasterConfig, STREAM_START.bits());
    let result = body(&mut Stream { regs: &mut *regs });
    regs.write(Reg::SpiMasterConfig, STREAM_END.bits());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Sim;

    #[test]
    fn enable_is_a_single_write() {
        let mut sim = Sim::new();
        enable(&mut sim);
        assert_eq!(sim.writes(), [(Reg::SpiMasterConfig, 0xa002)]);
    }

    #[test]
    fn stream_brackets_data() {
        let mut sim = Sim::new();
        stream(&mut sim, |s| {
            s.send(0xde);
            s.send(0xad);
        });
        assert_eq!(
            sim.writes(),
            [
                (Reg::SpiMasterConfig, 0xb002),
                (Reg::SpiMasterData, 0xde),
                (Reg::SpiMasterData, 0xad),
                (Reg::SpiMasterConfig, 0xa102),
            ]
        );
    }

    #[test]
    fn empty_stream_still_toggles_csb() {
        let mut sim = Sim::new();
        stream(&mut sim, |_| ());
        assert_eq!(sim.writes_to(Reg::SpiMasterConfig), [0xb002, 0xa102]);
        assert!(sim.writes_to(Reg::SpiMasterData).is_empty());
    }

    #[test]
    fn config_fields_are_independent() {
        let all = SpiMasterConfig::new()
            .prescaler(0xff)
            .lsb_first()
            .csb_noninverted()
            .sck_inverted()
            .same_edge()
            .stream()
            .enable()
            .irq_enable()
            .housekeeping();
        assert_eq!(all.bits(), 0xffff);
        assert_eq!(all.prescaler(0x10).bits(), 0xff10);
        assert_eq!(SpiMasterConfig::default().bits(), 0);
    }
}
