//! Command line interface for the jpackage argument builder.

mod args;

pub use args::Args;

use std::io::Write;

use crate::error::Result;
use crate::packaging::{MacPackage, PackageFormat, PackageFormatConfig};

/// One `--list-formats --json` entry
#[derive(Debug, serde::Serialize)]
struct FormatEntry {
    format: PackageFormat,
    extension: Option<&'static str>,
}

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    let stdout = std::io::stdout();
    execute(&args, &mut stdout.lock())?;
    Ok(0)
}

/// Run the command described by `args`, writing results to `out`
pub fn execute<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    if args.list_formats {
        let formats: Vec<_> = MacPackage::supported_formats().into_iter().collect();
        if args.json {
            let entries: Vec<_> = formats
                .iter()
                .map(|&format| FormatEntry {
                    format,
                    extension: format.file_extension(),
                })
                .collect();
            serde_json::to_writer(&mut *out, &entries)?;
            writeln!(out)?;
        } else {
            for format in formats {
                writeln!(out, "{}", format)?;
            }
        }
        return Ok(());
    }

    let format = args.package_format()?;
    let package = args.validate()?;
    let arguments = package.create_arguments(format)?;

    if args.json {
        serde_json::to_writer(&mut *out, &arguments)?;
        writeln!(out)?;
    } else {
        for argument in &arguments {
            writeln!(out, "{}", argument)?;
        }
    }
    Ok(())
}
