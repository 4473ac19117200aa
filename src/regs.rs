// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Register map of the Caravel management SoC, limited to what bring-up
//! touches, and the access seam the rest of the crate is written against.
//!
//! Nothing here owns hardware state. `Reg` only names locations; all access
//! goes through an implementation of `Registers`, which on silicon is `Mmio`
//! and in tests is a simulated register file that records what happened.

const GPIO_BASE: usize = 0x2100_0000;
const SPI_MASTER_BASE: usize = 0x2400_0000;
const LA_BASE: usize = 0x2500_0000;
const MPRJ_BASE: usize = 0x2600_0000;

/// Number of I/O pads in the user project area.
pub const MPRJ_IO_PINS: u8 = 38;

/// One of the four 32-bit logic analyzer banks. Bring-up only drives banks
/// 0 and 1; all four are listed so `Reg` can name the whole LA block.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum LaBank {
    Bank0 = 0,
    Bank1 = 1,
    Bank2 = 2,
    Bank3 = 3,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Reg {
    /// Pad configuration word for user I/O pin N (`reg_mprj_io_N`).
    MprjIo(u8),
    /// Writing 1 shifts all pad configuration words into the pad chain;
    /// hardware clears it when the shift is done.
    MprjXfer,
    SpiMasterConfig,
    SpiMasterData,
    LaData(LaBank),
    /// Output enable, active low.
    LaOenb(LaBank),
    /// Input enable, active low.
    LaIena(LaBank),
    /// Management GPIO (the single pad owned by the management core).
    GpioData,
    /// Management GPIO output enable, active low.
    GpioEna,
}

impl Reg {
    /// Physical address of the register.
    pub const fn addr(self) -> usize {
        match self {
            Reg::MprjXfer => MPRJ_BASE,
            Reg::MprjIo(pin) => MPRJ_BASE + 0x24 + 4 * pin as usize,
            Reg::SpiMasterConfig => SPI_MASTER_BASE,
            Reg::SpiMasterData => SPI_MASTER_BASE + 0x4,
            Reg::LaData(bank) => LA_BASE + 4 * bank as usize,
            Reg::LaOenb(bank) => LA_BASE + 0x10 + 4 * bank as usize,
            Reg::LaIena(bank) => LA_BASE + 0x20 + 4 * bank as usize,
            Reg::GpioData => GPIO_BASE,
            Reg::GpioEna => GPIO_BASE + 0x4,
        }
    }
}

/// Access to the management SoC's registers.
///
/// Writes are side effects on hardware and must be issued in program order;
/// implementations may not coalesce, reorder or elide them.
pub trait Registers {
    fn write(&mut self, reg: Reg, value: u32);
    fn read(&mut self, reg: Reg) -> u32;
}

/// Volatile access to the real register file.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Produces a handle to the memory-mapped registers.
    ///
    /// # Safety
    ///
    /// The caller must be running on the Caravel management core, and must not
    /// let two handles issue accesses that interleave: bring-up sequences
    /// assume they are the only ones talking to these registers.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl Registers for Mmio {
    fn write(&mut self, reg: Reg, value: u32) {
        debug_assert!(!matches!(reg, Reg::MprjIo(pin) if pin >= MPRJ_IO_PINS));
        // Safety: every `Reg` names a valid, 4-byte-aligned device register,
        // and `steal`'s contract gives us exclusive use of them.
        unsafe { core::ptr::write_volatile(reg.addr() as *mut u32, value) }
    }

    fn read(&mut self, reg: Reg) -> u32 {
        // Safety: as above.
        unsafe { core::ptr::read_volatile(reg.addr() as *const u32) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_config_addresses() {
        assert_eq!(Reg::MprjXfer.addr(), 0x2600_0000);
        assert_eq!(Reg::MprjIo(0).addr(), 0x2600_0024);
        assert_eq!(Reg::MprjIo(8).addr(), 0x2600_0044);
        assert_eq!(Reg::MprjIo(37).addr(), 0x2600_00b8);
    }

    #[test]
    fn la_bank_addresses() {
        assert_eq!(Reg::LaData(LaBank::Bank0).addr(), 0x2500_0000);
        assert_eq!(Reg::LaData(LaBank::Bank1).addr(), 0x2500_0004);
        assert_eq!(Reg::LaOenb(LaBank::Bank0).addr(), 0x2500_0010);
        assert_eq!(Reg::LaOenb(LaBank::Bank1).addr(), 0x2500_0014);
        assert_eq!(Reg::LaIena(LaBank::Bank0).addr(), 0x2500_0020);
        assert_eq!(Reg::LaIena(LaBank::Bank3).addr(), 0x2500_002c);
    }

    #[test]
    fn spi_master_addresses() {
        assert_eq!(Reg::SpiMasterConfig.addr(), 0x2400_0000);
        assert_eq!(Reg::SpiMasterData.addr(), 0x2400_0004);
    }
}
