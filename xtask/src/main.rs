// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

mod hex;

const TARGET: &str = "riscv32i-unknown-none-elf";

#[derive(Debug, Parser)]
enum Xtask {
    /// Builds the firmware and writes it out as a Verilog hex flash image
    Hex {
        /// Board name, as in the `target-board-*` feature
        #[clap(long)]
        board: String,
        #[clap(long)]
        out: PathBuf,
    },
}

/// The workspace root, one level above this crate.
fn workspace_root() -> PathBuf {
    let mut root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.pop();
    root
}

/// Where cargo puts build output: `CARGO_TARGET_DIR` if set (relative to the
/// workspace root, as cargo treats it), `target/` otherwise.
fn target_dir(root: &Path, cargo_target_dir: Option<OsString>) -> PathBuf {
    match cargo_target_dir {
        Some(dir) => root.join(dir),
        None => root.join("target"),
    }
}

fn build(board: &str) -> Result<PathBuf> {
    let root = workspace_root();
    let cargo = std::env::var_os("CARGO").unwrap_or_else(|| "cargo".into());
    let mut command = Command::new(cargo);
    command.current_dir(&root);
    command.arg("build");
    command.arg("--release");
    command.arg("--package").arg("caravel-pong");
    command.arg("--bin").arg("pong");
    command.arg("--target").arg(TARGET);
    command.arg("--no-default-features");
    command.arg("--features");
    command.arg(format!("target-board-{}", board));

    // build.rs puts memory.x on the search path; link.x comes from riscv-rt.
    command.env("RUSTFLAGS", "-C link-arg=-Tmemory.x -C link-arg=-Tlink.x");

    let status = command
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        bail!("build failed: {}", status);
    }

    Ok(target_dir(&root, std::env::var_os("CARGO_TARGET_DIR"))
        .join(TARGET)
        .join("release")
        .join("pong"))
}

fn package(board: String, out: PathBuf) -> Result<()> {
    let elf_path = build(&board)?;
    let elf = std::fs::read(&elf_path)
        .with_context(|| format!("reading {}", elf_path.display()))?;

    let segments = hex::load_segments(&elf)?;
    let image = hex::to_verilog_hex(&segments, hex::FLASH_BASE)?;

    std::fs::write(&out, image).with_context(|| format!("writing {}", out.display()))?;
    info!("wrote {}", out.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let xtask = Xtask::parse();

    match xtask {
        Xtask::Hex { board, out } => {
            package(board, out)?;
        }
    }
    Ok(())
}
