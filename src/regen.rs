//! Batch fixture regeneration
//!
//! Enumerates hardware source files in one directory and runs the
//! synthesizer on each, writing a `<base>.log` beside the `<base>.json` the
//! tool produces. Invocations are strictly sequential, and a failing input
//! never stops the batch: the failure lands in that input's log file and in
//! the report, and the run moves on.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NetlistError, NetlistResult};
use crate::synth::Synthesizer;

/// Options for one regeneration run
#[derive(Debug, Clone)]
pub struct RegenOptions {
    /// Extension (without dot) identifying input files
    pub input_ext: String,

    /// Enumerate and report without invoking the synthesizer
    pub dry_run: bool,
}

impl Default for RegenOptions {
    fn default() -> Self {
        Self {
            input_ext: "v".to_string(),
            dry_run: false,
        }
    }
}

/// Outcome of one regeneration run
#[derive(Debug, Clone, Default)]
pub struct RegenReport {
    /// Input file names whose fixtures were regenerated
    pub written: Vec<String>,

    /// Input file names whose synthesis failed (details are in the logs)
    pub failed: Vec<String>,
}

impl RegenReport {
    /// True when every enumerated input synthesized cleanly
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of inputs processed
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

/// Find input files in `dir` with the given extension, sorted by name
///
/// Non-recursive: fixtures live flat in one directory.
pub fn find_inputs(dir: &Path, input_ext: &str) -> NetlistResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(NetlistError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension() == Some(OsStr::new(input_ext)) {
            inputs.push(path);
        }
    }

    // Sort for deterministic iteration order
    inputs.sort();
    Ok(inputs)
}

/// Paths of the fixture pair derived from one input
///
/// Both share the input's base name and live in the same directory.
pub fn fixture_paths(input: &Path) -> (PathBuf, PathBuf) {
    (
        input.with_extension("log"),
        input.with_extension("json"),
    )
}

/// Regenerate the fixture pair for every matching input in `dir`
///
/// Pre-existing `<base>.log` and `<base>.json` files are overwritten. A
/// directory with zero matching inputs yields an empty report and no
/// invocations.
pub fn regenerate(
    dir: &Path,
    synthesizer: &dyn Synthesizer,
    options: &RegenOptions,
) -> NetlistResult<RegenReport> {
    let inputs = find_inputs(dir, &options.input_ext)?;

    let mut report = RegenReport::default();

    for input in &inputs {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());

        if options.dry_run {
            report.written.push(name);
            continue;
        }

        let (log_path, json_path) = fixture_paths(input);

        // One process at a time, awaited to completion. Tool failures are
        // recorded, not propagated; only our own IO failures abort the run.
        match synthesizer.synthesize(input, &json_path) {
            Ok(output) => {
                fs::write(&log_path, &output.log)?;
                if output.success {
                    report.written.push(name);
                } else {
                    report.failed.push(name);
                }
            }
            Err(err) => {
                fs::write(&log_path, format!("{}\n", err))?;
                report.failed.push(name);
            }
        }
    }

    Ok(report)
}
