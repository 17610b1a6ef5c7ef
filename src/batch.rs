use std::fs;
use std::path::{Path, PathBuf};

use crate::{config::ConvertConfig, error::Result};

/// Extension of the files written by [`convert_dir`].
pub const SRF_EXTENSION: &str = "srf";

/// Outcome of a directory conversion, as (source, target) pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<(PathBuf, PathBuf)>,
}

/// Lists files directly inside `dir` whose extension is `extension`,
/// sorted by path. A missing directory yields no files.
pub fn scan_dir(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.is_dir() {
        return Ok(files);
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Maps `<input>/<stem>.<ext>` to `<output_dir>/<stem>.srf`.
pub fn target_path(source: &Path, output_dir: &Path) -> PathBuf {
    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(SRF_EXTENSION);
    output_dir.join(name)
}

/// Converts every matching text page of `config.input_dir` into an SRF
/// file in `config.output_dir`, creating that directory if needed.
/// Existing targets are left alone unless `config.overwrite` is set.
pub fn convert_dir(config: &ConvertConfig) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let sources = scan_dir(&config.input_dir, &config.extension)?;
    if sources.is_empty() {
        log::warn!(
            "no .{} files found in {}",
            config.extension,
            config.input_dir.display()
        );
        return Ok(report);
    }
    fs::create_dir_all(&config.output_dir)?;

    let layout = config.layout();
    for source in sources {
        let target = target_path(&source, &config.output_dir);
        if target.exists() && !config.overwrite {
            log::info!(
                "skipping {} -> {} (already exists)",
                source.display(),
                target.display()
            );
            report.skipped.push((source, target));
            continue;
        }
        log::info!("converting {} -> {}", source.display(), target.display());
        layout.surface_from_file(&source)?.to_srf_file(&target)?;
        report.converted.push((source, target));
    }
    Ok(report)
}
