// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pong firmware for the Caravel management core.
//!
//! This contains the entry point and fault handling. The bring-up sequence
//! itself lives in the lib crate; once it has run, the design is free running
//! and we just idle.

#![cfg_attr(target_arch = "riscv32", no_std)]
#![cfg_attr(target_arch = "riscv32", no_main)]

#[cfg(target_arch = "riscv32")]
mod firmware {
    use core::sync::atomic::{compiler_fence, Ordering};

    use caravel_pong::bsp::Bsp;
    use caravel_pong::regs::Mmio;

    // Select the appropriate BSP type as `Board`
    cfg_if::cfg_if! {
        if #[cfg(feature = "target-board-caravel-eval")] {
            use caravel_pong::bsp::caravel_eval::Board;
        } else if #[cfg(feature = "target-board-rtl-sim")] {
            use caravel_pong::bsp::rtl_sim::Board;
        }
    }

    /// Firmware entry point. `riscv_rt::entry` has already set up the stack and
    /// initialized RAM by the time we get here.
    #[riscv_rt::entry]
    fn main() -> ! {
        // Safety: this is the only handle in use outside of the fault paths
        // below, which never return to us.
        let mut regs = unsafe { Mmio::steal() };

        caravel_pong::bring_up(&mut regs);

        // Nothing left to do: the design runs on its own from here.
        loop {
            compiler_fence(Ordering::SeqCst);
        }
    }

    #[panic_handler]
    fn panic_handler(_: &core::panic::PanicInfo) -> ! {
        fault()
    }

    #[export_name = "ExceptionHandler"]
    fn exception_handler(_trap_frame: &riscv_rt::TrapFrame) -> ! {
        fault()
    }

    fn fault() -> ! {
        // Safety: whatever was using the registers before isn't coming back,
        // so we're not racing anyone.
        let mut regs = unsafe { Mmio::steal() };
        Board::indicate_fault(&mut regs);

        loop {
            // Keeps LLVM from turning this into a trap instruction.
            compiler_fence(Ordering::SeqCst);
        }
    }
}

#[cfg(not(target_arch = "riscv32"))]
fn main() {
    eprintln!("pong only runs on the Caravel management core; build it with `cargo xtask hex`");
    std::process::exit(1);
}
