use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{MendError, Options, RepairReport, repair_document};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] <FILE>\n\
         \n\
         Repairs a generator-damaged JSON file in place. When anything was\n\
         changed, the original is kept verbatim as <FILE>.backup.\n\
         \n\
         Options:\n\
           --report-json   Also print the fix/error ledger as JSON on stdout\n\
           -h, --help      Show this help\n",
        prog = program
    );
}

struct CliArgs {
    input: PathBuf,
    report_json: bool,
}

fn parse_args() -> CliArgs {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonmend".to_string());
    args.remove(0);

    let mut input: Option<PathBuf> = None;
    let mut report_json = false;

    for arg in &args {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "--report-json" => {
                report_json = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(PathBuf::from(path));
            }
        }
    }

    let Some(input) = input else {
        print_help(&program);
        std::process::exit(2);
    };
    CliArgs { input, report_json }
}

pub fn run() -> Result<(), MendError> {
    let args = parse_args();
    repair_file(&args.input, &Options::default(), args.report_json)
}

/// Repairs `path` in place: reads it, runs the pipeline, and when the text
/// changed writes `<path>.backup` first and then atomically replaces the
/// original. Residual errors are reported, not treated as failure.
pub fn repair_file(path: &Path, opts: &Options, report_json: bool) -> Result<(), MendError> {
    if !path.exists() {
        return Err(MendError::FileNotFound(path.to_path_buf()));
    }

    println!("Analyzing file: {}", path.display());
    let original = fs::read_to_string(path)?;
    let outcome = repair_document(&original, opts);

    if outcome.changed(&original) {
        let backup = write_with_backup(path, &original, &outcome.text)?;
        println!("Backup created: {}", backup.display());
        println!("File repaired: {}", path.display());
    } else {
        println!("File unchanged: {}", path.display());
    }

    print!("{}", RepairReport::new(&outcome.ledger, opts.report_limit));
    if report_json {
        let json = serde_json::to_string_pretty(&outcome.ledger)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        println!("{}", json);
    }
    Ok(())
}

/// Backup first, fsync, then replace the target through a temp file and
/// rename so an interrupted run never leaves a half-written document.
fn write_with_backup(path: &Path, original: &str, repaired: &str) -> Result<PathBuf, MendError> {
    let backup = sibling(path, ".backup");
    let mut f = File::create(&backup)?;
    f.write_all(original.as_bytes())?;
    f.sync_all()?;

    let tmp = sibling(path, ".tmp");
    let mut f = File::create(&tmp)?;
    f.write_all(repaired.as_bytes())?;
    f.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(backup)
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
