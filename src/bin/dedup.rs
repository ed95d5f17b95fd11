//! Removes duplicate records (same `Slug`) from a repaired content dump.
//! Companion utility to the repair pipeline; expects valid JSON.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use jsonmend::dedup::dedup_by_slug;
use serde_json::Value;

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [--replace] <FILE>\n\
         \n\
         Keeps the first record for every Slug and drops the rest. Writes a\n\
         <stem>_backup.json copy of the input, then <stem>_unique.json with\n\
         the result; with --replace the input file is replaced instead.\n",
        prog = program
    );
}

fn sibling(path: &Path, tag: &str) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("out");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("json");
    path.with_file_name(format!("{}_{}.{}", stem, tag, ext))
}

fn run(input: &Path, replace: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("Reading file: {}", input.display());
    let text = fs::read_to_string(input)?;
    let records: Vec<Value> = serde_json::from_str(&text)
        .map_err(|e| format!("input is not a JSON array: {}", e))?;
    println!("Loaded {} records", records.len());

    let outcome = dedup_by_slug(records);
    for &idx in &outcome.slugless {
        eprintln!("warning: record at index {} has no Slug", idx);
    }

    println!("Unique records:     {}", outcome.unique.len());
    println!("Duplicates removed: {}", outcome.removed.len());
    for dup in &outcome.removed {
        match dup.id {
            Some(id) => println!("  removed ID {} (Slug: \"{}\")", id, dup.slug),
            None => println!("  removed index {} (Slug: \"{}\")", dup.index, dup.slug),
        }
        if let Some(title) = &dup.title {
            println!("    Title: {}", title);
        }
    }

    let backup = sibling(input, "backup");
    fs::copy(input, &backup)?;
    println!("Backup created: {}", backup.display());

    let output = serde_json::to_string_pretty(&outcome.unique)?;
    if replace {
        let tmp = sibling(input, "tmp");
        fs::write(&tmp, output)?;
        fs::rename(&tmp, input)?;
        println!("Original file replaced: {}", input.display());
    } else {
        let unique = sibling(input, "unique");
        fs::write(&unique, output)?;
        println!("Unique records written to: {}", unique.display());
    }
    Ok(())
}

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonmend-dedup".to_string());
    args.remove(0);

    let mut input: Option<PathBuf> = None;
    let mut replace = false;
    for arg in &args {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help(&program);
                process::exit(0);
            }
            "--replace" => replace = true,
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                process::exit(2);
            }
            path => input = Some(PathBuf::from(path)),
        }
    }
    let Some(input) = input else {
        print_help(&program);
        process::exit(2);
    };
    if !input.exists() {
        eprintln!("error: file not found: {}", input.display());
        process::exit(1);
    }

    if let Err(e) = run(&input, replace) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
