//! Optional defaults file for the command-line surface.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Defaults applied when `--output` is not given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Defaults {
    /// Directory for the updated log; the target's directory when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// File name for the updated log; derived from the target when unset.
    #[serde(default)]
    pub output_file: Option<String>,
}

/// Loads defaults from a JSON file, degrading to built-ins when the file
/// is absent or malformed.
pub fn load_defaults(path: &Path) -> Defaults {
    match std::fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
        Err(_) => Defaults::default(),
    }
}

/// Resolves the output path for an updated copy of `target`.
pub fn resolve_output(target: &Path, defaults: &Defaults) -> PathBuf {
    let file_name = defaults.output_file.clone().unwrap_or_else(|| {
        let stem = target
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("log");
        format!("{stem} updated.adi")
    });

    match &defaults.output_dir {
        Some(dir) => dir.join(file_name),
        None => target.with_file_name(file_name),
    }
}
