//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` on a local port for previewing the portfolio page.

use std::process::{Command, ExitCode, Stdio};
use std::{env, io};

const DEFAULT_PORT: &str = "8000";

fn main() -> ExitCode {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return ExitCode::SUCCESS;
    }

    let port = env::args().nth(1).unwrap_or_else(|| DEFAULT_PORT.to_string());
    match run(&port) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(port: &str) -> io::Result<()> {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            return Err(io::Error::other(
                "wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).",
            ));
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the page may serve a stale pkg.");
        }
    }

    println!("Serving static/ at http://127.0.0.1:{port} (Ctrl-C to stop) …");
    let status = Command::new("python3")
        .args(["-m", "http.server", port, "--directory", "static"])
        .stdout(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("http server exited with {status}")))
    }
}
