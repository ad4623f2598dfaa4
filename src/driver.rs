//! Batch driver: discover, normalize, write.
//!
//! Walks one source directory tree for digitized books, runs each through
//! the normalization pipeline independently, and writes one JSON artifact
//! per successful document into a flat destination directory. A rejected or
//! unreadable document is logged and skipped; it never aborts the run.

use std::fs;
use std::path::Path;

use log::{info, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::normalize::Normalizer;
use crate::util::decode_text;

/// Outcome counts for one run over an input tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub written: usize,
    pub rejected: usize,
}

/// Normalize every `.html`/`.htm` file under `input_dir` into `output_dir`.
///
/// Output artifacts are named by appending `.json` to the input's file name
/// (`walden.html` becomes `walden.html.json`), so each input maps to a
/// distinct output path and no coordination is needed. Only setup errors
/// (an uncreatable output directory) abort the run.
pub fn run(input_dir: &Path, output_dir: &Path) -> Result<RunStats> {
    fs::create_dir_all(output_dir)?;

    let normalizer = Normalizer::new();
    let mut stats = RunStats::default();

    for entry in WalkDir::new(input_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            // An unreadable root is a setup error; anything deeper is
            // logged and walked past.
            Err(e) if e.depth() == 0 => return Err(Error::Io(e.into())),
            Err(e) => {
                warn!("walk error: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        match path.extension().and_then(|e| e.to_str()) {
            Some("html") | Some("htm") => {}
            _ => continue,
        }

        match process_file(&normalizer, path, output_dir) {
            Ok(()) => stats.written += 1,
            Err(e) => {
                warn!("{}: {}", path.display(), e);
                stats.rejected += 1;
            }
        }
    }

    Ok(stats)
}

fn process_file(normalizer: &Normalizer, path: &Path, output_dir: &Path) -> Result<()> {
    let bytes = fs::read(path)?;
    let source = decode_text(&bytes);
    let book = normalizer.normalize(&source)?;

    let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
    let out_path = output_dir.join(format!("{name}.json"));
    fs::write(&out_path, serde_json::to_string(&book)?)?;
    info!("{} -> {}", path.display(), out_path.display());

    Ok(())
}
