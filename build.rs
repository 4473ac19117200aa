use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let mut target_board: Option<String> = None;

    for (name, _) in env::vars() {
        let prefix = "CARGO_FEATURE_TARGET_BOARD_";
        if let Some(suffix) = name.strip_prefix(prefix) {
            if let Some(previous) = &target_board {
                panic!(
                    "multiple target board features defined (at least {} and {})",
                    show_feature(previous),
                    show_feature(suffix)
                );
            }

            target_board = Some(suffix.to_string());
        }
    }

    if target_board.is_none() {
        panic!("missing target-board-* feature");
    }

    // The xtask build links with -Tmemory.x -Tlink.x; put memory.x on the
    // linker search path so the first of those resolves.
    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    fs::copy("memory.x", out.join("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

fn show_feature(envvar: &str) -> String {
    let mut name = "target-board-".to_string();
    name.push_str(&envvar.to_ascii_lowercase().replace('_', "-"));
    name
}
