// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simulated register file for host tests.

use std::collections::BTreeMap;
use std::vec::Vec;

use crate::regs::{Reg, Registers};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Access {
    Write(Reg, u32),
    Read(Reg, u32),
}

/// Records every access in order. Registers hold whatever was last written,
/// except `MprjXfer`, which reads back as `xfer_busy` for `xfer_busy_reads`
/// reads after a commit and `xfer_idle` afterwards.
#[derive(Debug)]
pub struct Sim {
    pub trace: Vec<Access>,
    values: BTreeMap<Reg, u32>,
    xfer_busy_reads: usize,
    xfer_remaining: usize,
    xfer_busy: u32,
    xfer_idle: u32,
}

impl Default for Sim {
    fn default() -> Self {
        Self {
            trace: Vec::new(),
            values: BTreeMap::new(),
            xfer_busy_reads: 0,
            xfer_remaining: 0,
            xfer_busy: 1,
            xfer_idle: 0,
        }
    }
}

impl Sim {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hardware that takes `reads` polls to acknowledge a pad commit.
    pub fn with_xfer_latency(reads: usize) -> Self {
        Self {
            xfer_busy_reads: reads,
            ..Self::default()
        }
    }

    /// Like `with_xfer_latency`, but the flag register reads back `busy`
    /// while the shift is in progress and `idle` once it's done.
    pub fn with_xfer_readback(reads: usize, busy: u32, idle: u32) -> Self {
        Self {
            xfer_busy_reads: reads,
            xfer_busy: busy,
            xfer_idle: idle,
            ..Self::default()
        }
    }

    /// Writes only, in order.
    pub fn writes(&self) -> Vec<(Reg, u32)> {
        self.trace
            .iter()
            .filter_map(|a| match *a {
                Access::Write(reg, value) => Some((reg, value)),
                Access::Read(..) => None,
            })
            .collect()
    }

    /// Values written to `reg`, in order.
    pub fn writes_to(&self, reg: Reg) -> Vec<u32> {
        self.writes()
            .into_iter()
            .filter(|&(r, _)| r == reg)
            .map(|(_, v)| v)
            .collect()
    }

    /// Position of the first write to `reg` in the full trace.
    pub fn first_write(&self, reg: Reg) -> Option<usize> {
        self.trace
            .iter()
            .position(|a| matches!(*a, Access::Write(r, _) if r == reg))
    }
}

impl Registers for Sim {
    fn write(&mut self, reg: Reg, value: u32) {
        self.trace.push(Access::Write(reg, value));
        if reg == Reg::MprjXfer && value & 1 != 0 {
            self.xfer_remaining = self.xfer_busy_reads;
            // Zero latency still has to be observed as a completed shift.
            let shown = if self.xfer_remaining == 0 {
                self.xfer_idle
            } else {
                self.xfer_busy
            };
            self.values.insert(reg, shown);
        } else {
            self.values.insert(reg, value);
        }
    }

    fn read(&mut self, reg: Reg) -> u32 {
        let value = self.values.get(&reg).copied().unwrap_or(0);
        if reg == Reg::MprjXfer && self.xfer_remaining > 0 {
            self.xfer_remaining -= 1;
            if self.xfer_remaining == 0 {
                self.values.insert(reg, self.xfer_idle);
            }
        }
        self.trace.push(Access::Read(reg, value));
        value
    }
}
