//! Parse and resolve video source strings.
//!
//! Usage:
//!   resolve_source [OPTIONS] [SOURCE ...]
//!   resolve_source < sources.txt
//!
//! Each source string is parsed, echoed in canonical form, and resolved
//! against the backend named by its protocol. Errors go to stderr; exit code
//! is 1 if any source failed.
//!
//! Options:
//!   --quiet, -q  Only report errors (no canonical form / config output)

use std::io::{self, Read};
use vidsource::{parse, BackendConfig};

fn process(label: &str, input: &str, quiet: bool) -> bool {
    let vs = match parse(input) {
        Ok(vs) => vs,
        Err(e) => {
            eprintln!("{}: parse error: {}", label, e);
            return false;
        }
    };
    let config = match BackendConfig::resolve(&vs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}: {}", label, e);
            return false;
        }
    };
    if !quiet {
        println!("{}", vs);
        match config {
            BackendConfig::FrameSource(c) => println!("  {:?}", c),
            BackendConfig::Capture(c) => println!("  {:?}", c),
            BackendConfig::Playback(c) => println!("  {:?}", c),
            BackendConfig::DvCamera(c) => println!("  {:?}", c),
        }
    }
    true
}

fn main() -> anyhow::Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let quiet = if let Some(pos) = args.iter().position(|a| a == "--quiet" || a == "-q") {
        args.remove(pos);
        true
    } else {
        false
    };

    let mut has_error = false;

    if args.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        for (i, line) in buf.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let label = format!("<stdin>:{}", i + 1);
            if !process(&label, line, quiet) {
                has_error = true;
            }
        }
    } else {
        for src in &args {
            if !process(src, src, quiet) {
                has_error = true;
            }
        }
    }

    if has_error {
        std::process::exit(1);
    }
    Ok(())
}
