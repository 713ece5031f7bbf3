//! Command-line interface for the converter.

use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::collector::extract_table_from_path;
use crate::config::NamespaceMap;
use crate::error::{Result, Siusa2TableError};
use crate::output::write_outputs;

/// Convert a SIUSA database XML export to tabular format.
#[derive(Parser, Debug)]
#[command(name = "siusa2table")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SIUSA database XML
    pub siusaxml: PathBuf,

    /// Table filename, without extension (writes <OUTTABLE>.xlsx and <OUTTABLE>.csv)
    pub outtable: PathBuf,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    convert_command(&cli.siusaxml, &cli.outtable)
}

/// Execute the conversion.
fn convert_command(input: &Path, outtable: &Path) -> Result<()> {
    if !input.is_file() {
        return Err(Siusa2TableError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", input.display()),
        )));
    }

    println!(
        "{} {}",
        style("Converting").bold(),
        style(input.display()).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message("Extracting records...");

    let namespaces = NamespaceMap::siusa();
    let table = match extract_table_from_path(input, &namespaces) {
        Ok(table) => table,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Writing tables...");
    let paths = match write_outputs(&table, outtable) {
        Ok(paths) => paths,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Rows: {}", style(table.len()).green());
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        paths.xlsx.display()
    );
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        paths.csv.display()
    );

    Ok(())
}
