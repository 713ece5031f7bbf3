//! Serialization of a result table to CSV and XLSX files.

mod delimited;
mod spreadsheet;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::ResultTable;

pub use delimited::{to_csv_string, write_csv};
pub use spreadsheet::{to_xlsx_bytes, write_xlsx, SHEET_NAME};

/// Paths of the files written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub xlsx: PathBuf,
    pub csv: PathBuf,
}

impl OutputPaths {
    /// Derive `<base>.xlsx` and `<base>.csv` from a base name.
    ///
    /// The extension is appended, so a base like `tables/v1.2` keeps its dot.
    #[must_use]
    pub fn from_base(base: &Path) -> Self {
        let with_extension = |ext: &str| {
            let mut name = base.as_os_str().to_owned();
            name.push(".");
            name.push(ext);
            PathBuf::from(name)
        };
        Self {
            xlsx: with_extension("xlsx"),
            csv: with_extension("csv"),
        }
    }
}

/// Write the table as `<base>.xlsx` and `<base>.csv`.
///
/// Both files are rendered and staged before either target is touched. If
/// any step fails, previously existing targets are restored and no temp
/// files are left behind.
pub fn write_outputs(table: &ResultTable, base: &Path) -> Result<OutputPaths> {
    let paths = OutputPaths::from_base(base);
    let xlsx = to_xlsx_bytes(table)?;
    let csv = to_csv_string(table)?;
    write_all_atomic(&[
        (paths.xlsx.as_path(), xlsx.as_slice()),
        (paths.csv.as_path(), csv.as_bytes()),
    ])?;
    Ok(paths)
}

/// Write bytes to `path` atomically.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    write_all_atomic(&[(path, content)])
}

/// Replace every target with its content, or none of them.
///
/// Each file goes to a hidden temp file next to its target and is synced to
/// disk. Existing targets are moved to a hidden backup while the temp file
/// is renamed into place, and are put back if a later file fails.
fn write_all_atomic(files: &[(&Path, &[u8])]) -> Result<()> {
    for (path, _) in files {
        ensure_file_target(path)?;
    }

    let mut staged = Vec::with_capacity(files.len());
    for (path, content) in files {
        match stage(path, content) {
            Ok(temp) => staged.push(temp),
            Err(e) => {
                staged.iter().for_each(|temp| discard(temp));
                return Err(e);
            }
        }
    }

    let mut committed: Vec<Commit> = Vec::with_capacity(files.len());
    for (index, ((path, _), temp)) in files.iter().zip(&staged).enumerate() {
        match Commit::apply(temp, path) {
            Ok(commit) => committed.push(commit),
            Err(e) => {
                committed.iter().rev().for_each(Commit::roll_back);
                staged[index..].iter().for_each(|temp| discard(temp));
                return Err(e);
            }
        }
    }

    for (commit, (_, content)) in committed.iter().zip(files) {
        commit.finish();
        tracing::info!(path = %commit.target.display(), bytes = content.len(), "Wrote output file");
    }
    Ok(())
}

/// Hidden sibling of `path`: `dir/.name.<suffix>`.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.{suffix}"))
}

fn ensure_file_target(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Output path is not a regular file: {}", path.display()),
        )
        .into()),
        _ => Ok(()),
    }
}

/// Write `content` to the temp sibling of `path`, removing it on failure.
fn stage(path: &Path, content: &[u8]) -> Result<PathBuf> {
    let temp = sibling(path, "tmp");
    let written = File::create(&temp).and_then(|mut file| {
        file.write_all(content)?;
        file.sync_all()
    });
    match written {
        Ok(()) => Ok(temp),
        Err(e) => {
            discard(&temp);
            Err(e.into())
        }
    }
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove temp file");
        }
    }
}

/// A target that has been replaced by its staged file.
struct Commit {
    target: PathBuf,
    backup: Option<PathBuf>,
}

impl Commit {
    fn apply(temp: &Path, target: &Path) -> Result<Self> {
        let backup = if target.exists() {
            let backup = sibling(target, "bak");
            fs::rename(target, &backup)?;
            Some(backup)
        } else {
            None
        };

        if let Err(e) = fs::rename(temp, target) {
            if let Some(backup) = &backup {
                restore(backup, target);
            }
            return Err(e.into());
        }

        Ok(Self {
            target: target.to_path_buf(),
            backup,
        })
    }

    fn roll_back(&self) {
        discard(&self.target);
        if let Some(backup) = &self.backup {
            restore(backup, &self.target);
        }
    }

    fn finish(&self) {
        if let Some(backup) = &self.backup {
            discard(backup);
        }
    }
}

fn restore(backup: &Path, target: &Path) {
    if let Err(e) = fs::rename(backup, target) {
        tracing::warn!(
            backup = %backup.display(),
            target = %target.display(),
            error = %e,
            "Failed to restore previous output"
        );
    }
}
