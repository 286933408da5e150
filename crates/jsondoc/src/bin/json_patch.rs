//! `json-patch` — apply a JSON Patch (RFC 6902) to a document.
//!
//! Usage:
//!   json-patch '<patch-array-json>' [--atomic]
//!
//! The document is read from stdin. The patch operations are the first
//! argument. With `--atomic` nothing is printed unless every operation
//! succeeds.

use std::io::{self, Read, Write};

use jsondoc::json_cli::{apply_json_patch_str, init_tracing};
use jsondoc::json_patch::ApplyPatchOptions;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let atomic = args.iter().any(|a| a == "--atomic");
    let patch = match args.iter().find(|a| *a != "--atomic") {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a JSON patch array.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let options = ApplyPatchOptions { atomic };
    match apply_json_patch_str(buf.trim(), &patch, &options) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
