// Build script that copies the static site into `dist/` after wasm-pack build.
use std::process::Command;
use std::{env, fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    // Only run the heavy wasm-pack build when targeting wasm32.
    let target = env::var("TARGET").unwrap_or_default();
    if target == "wasm32-unknown-unknown" && env::var_os("GALAXY_SKIP_WASM_PACK").is_none() {
        // wasm-pack re-invokes cargo for the same target; the variable stops the recursion.
        let status = Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .env("GALAXY_SKIP_WASM_PACK", "1")
            .status();

        match status {
            Ok(st) if !st.success() => println!("cargo:warning=wasm-pack build failed"),
            Ok(_) => {}
            Err(_) => println!("cargo:warning=wasm-pack not installed – skipping"),
        }
    }

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let options = CopyOptions::new().content_only(true).overwrite(true);
    if let Err(e) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ to dist/ failed: {e}");
    }
}
