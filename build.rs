//! Build script to generate embedded word lists
//!
//! Scans `data/` for `<length>.txt` files and generates a lookup table that
//! embeds each one into the binary.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const DATA_DIR: &str = "data";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let data_dir = Path::new(&manifest_dir).join(DATA_DIR);

    let mut lengths: Vec<usize> = fs::read_dir(&data_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", data_dir.display()))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension()? != "txt" {
                return None;
            }
            path.file_stem()?.to_str()?.parse().ok()
        })
        .collect();
    lengths.sort_unstable();

    let output_path = Path::new(&out_dir).join("lists.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Embedded word lists keyed by word length").unwrap();
    writeln!(output, "pub const LISTS: &[(usize, &str)] = &[").unwrap();
    for length in &lengths {
        let path = data_dir.join(format!("{length}.txt"));
        writeln!(
            output,
            "    ({length}, include_str!({:?})),",
            path.display().to_string()
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed={DATA_DIR}");
    for length in &lengths {
        println!("cargo:rerun-if-changed={DATA_DIR}/{length}.txt");
    }
}
