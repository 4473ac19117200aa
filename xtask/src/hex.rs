// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Verilog hex images, the format the Caravel flash programmer (and the RTL
//! testbench's flash model) loads.
//!
//! An image is a series of `@ADDR` records, each followed by lines of up to 16
//! space-separated bytes. Addresses are byte offsets into the flash.

use anyhow::{bail, ensure, Context, Result};
use log::debug;
use xmas_elf::program::Type as ProgramType;
use xmas_elf::ElfFile;

/// Where the flash appears in the management core's address space.
pub const FLASH_BASE: u32 = 0x1000_0000;

const BYTES_PER_LINE: usize = 16;

/// A run of bytes to be placed at a physical address.
#[derive(Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub addr: u32,
    pub data: &'a [u8],
}

/// Pulls the loadable, non-empty segments out of `elf`, at their physical
/// (load) addresses, sorted by address.
pub fn load_segments(bytes: &[u8]) -> Result<Vec<Segment<'_>>> {
    let elf = ElfFile::new(bytes).map_err(|e| anyhow::anyhow!("bad ELF: {}", e))?;

    let mut segments = vec![];
    for ph in elf.program_iter() {
        if ph.get_type() != Ok(ProgramType::Load) || ph.file_size() == 0 {
            continue;
        }
        let start = usize::try_from(ph.offset()).context("segment offset out of range")?;
        let size = usize::try_from(ph.file_size()).context("segment size out of range")?;
        let end = start
            .checked_add(size)
            .context("program header size overflows")?;
        let data = bytes
            .get(start..end)
            .context("program header points outside the file")?;
        let addr = u32::try_from(ph.physical_addr())
            .context("segment address does not fit in 32 bits")?;
        debug!("segment: {} bytes at {:08x}", data.len(), addr);
        segments.push(Segment { addr, data });
    }
    segments.sort_by_key(|s| s.addr);
    Ok(segments)
}

/// Renders `segments` as a Verilog hex image with addresses relative to
/// `base`.
pub fn to_verilog_hex(segments: &[Segment<'_>], base: u32) -> Result<String> {
    let mut out = String::new();
    let mut next: Option<u32> = None;

    for segment in segments {
        if segment.addr < base {
            bail!(
                "segment at {:08x} is below the flash base {:08x}",
                segment.addr,
                base
            );
        }
        let len = u32::try_from(segment.data.len()).context("segment too large")?;
        let end = segment.addr.checked_add(len).with_context(|| {
            format!("segment at {:08x} runs past the end of the address space", segment.addr)
        })?;
        if let Some(next) = next {
            ensure!(
                segment.addr >= next,
                "segment at {:08x} overlaps the previous one",
                segment.addr
            );
        }

        // Contiguous segments continue the previous record.
        if next != Some(segment.addr) {
            out.push_str(&format!("@{:08X}\n", segment.addr - base));
        }
        for line in segment.data.chunks(BYTES_PER_LINE) {
            let bytes: Vec<String> = line.iter().map(|b| format!("{:02X}", b)).collect();
            out.push_str(&bytes.join(" "));
            out.push('\n');
        }
        next = Some(end);
    }
    Ok(out)
}
