// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logic analyzer banks, used here as control lines into the user area.
//!
//! In the multi-project wrapper, LA bank 1 is a one-hot project select and bit
//! 0 of bank 0 is the shared design reset.

use log::debug;

use crate::regs::{LaBank, Reg, Registers};

/// Pong's slot in the multi-project wrapper.
pub const PONG_PROJECT: u8 = 4;

/// Lets the management core drive `bank`. Both enables are active low.
pub fn drive<R: Registers>(regs: &mut R, bank: LaBank) {
    regs.write(Reg::LaOenb(bank), 0);
    regs.write(Reg::LaIena(bank), 0);
}

/// Routes the user area's pads to `project`.
pub fn select_project<R: Registers>(regs: &mut R, project: u8) {
    debug_assert!(project < 32);
    debug!("selecting project {}", project);
    drive(regs, LaBank::Bank1);
    regs.write(Reg::LaData(LaBank::Bank1), 1 << project);
}

/// Pulses the design reset. There's no delay between the edges; the store
/// latency on the LA bus is enough for the design to see it.
pub fn pulse_reset<R: Registers>(regs: &mut R) {
    debug!("resetting design");
    drive(regs, LaBank::Bank0);
    regs.write(Reg::LaData(LaBank::Bank0), 1);
    regs.write(Reg::LaData(LaBank::Bank0), 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Sim;

    #[test]
    fn pong_select() {
        let mut sim = Sim::new();
        select_project(&mut sim, PONG_PROJECT);
        assert_eq!(
            sim.writes(),
            [
                (Reg::LaOenb(LaBank::Bank1), 0),
                (Reg::LaIena(LaBank::Bank1), 0),
                (Reg::LaData(LaBank::Bank1), 0x10),
            ]
        );
    }

    #[test]
    fn reset_is_high_then_low() {
        let mut sim = Sim::new();
        pulse_reset(&mut sim);
        assert_eq!(
            sim.writes(),
            [
                (Reg::LaOenb(LaBank::Bank0), 0),
                (Reg::LaIena(LaBank::Bank0), 0),
                (Reg::LaData(LaBank::Bank0), 1),
                (Reg::LaData(LaBank::Bank0), 0),
            ]
        );
    }

    #[test]
    fn select_is_one_hot() {
        for project in [0, 7, 31] {
            let mut sim = Sim::new();
            select_project(&mut sim, project);
            assert_eq!(sim.writes_to(Reg::LaData(LaBank::Bank1)), [1 << project]);
        }
    }
}
