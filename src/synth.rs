//! Synthesizer interface and the Yosys subprocess implementation
//!
//! The external tool is modeled as a trait so the batch driver can be
//! exercised against a fake in tests. The real implementation composes a
//! single `-p` script of three directives (read the input, run the synthesis
//! passes, write JSON) and runs Yosys as a blocking child process.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{NetlistError, NetlistResult};

/// Captured result of one synthesis invocation
#[derive(Debug, Clone)]
pub struct SynthOutput {
    /// Combined stdout and stderr of the tool
    pub log: String,

    /// Whether the tool exited successfully
    ///
    /// A false value is not an error for the batch driver: the log is still
    /// written and the run continues with the next input.
    pub success: bool,
}

/// An external tool that turns one hardware source file into a JSON netlist
pub trait Synthesizer: Send + Sync {
    /// Name of this synthesizer (for reporting)
    fn name(&self) -> &'static str;

    /// Check whether the tool can be invoked on this system
    fn is_available(&self) -> bool;

    /// Synthesize `input` into a JSON netlist at `output`
    ///
    /// Returns the tool's log text and exit state. `Err` is reserved for
    /// invocation-level problems (the process could not be spawned at all);
    /// the tool failing on a malformed input is an `Ok` with
    /// `success == false` and the failure text in the log.
    fn synthesize(&self, input: &Path, output: &Path) -> NetlistResult<SynthOutput>;
}

/// Yosys invoked as a child process
///
/// Equivalent to running
/// `yosys -p "read_verilog <input>; synth; write_json <output>"` and
/// redirecting the output to a log file, one input at a time.
pub struct YosysSynthesizer {
    binary: PathBuf,
    passes: Vec<String>,
}

impl YosysSynthesizer {
    pub fn new(binary: impl Into<PathBuf>, passes: Vec<String>) -> Self {
        Self {
            binary: binary.into(),
            passes,
        }
    }

    /// The tool binary this synthesizer invokes
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Compose the `-p` script for one input/output pair
    fn script(&self, input: &Path, output: &Path) -> String {
        let mut directives = Vec::with_capacity(self.passes.len() + 2);
        directives.push(format!("read_verilog {}", input.display()));
        directives.extend(self.passes.iter().cloned());
        directives.push(format!("write_json {}", output.display()));
        directives.join("; ")
    }

    /// Query the tool's version banner, if the tool is runnable
    pub fn version(&self) -> Option<String> {
        let output = Command::new(&self.binary)
            .arg("-V")
            .stdin(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let banner = String::from_utf8_lossy(&output.stdout);
        banner.lines().next().map(|line| line.trim().to_string())
    }
}

impl Synthesizer for YosysSynthesizer {
    fn name(&self) -> &'static str {
        "yosys"
    }

    fn is_available(&self) -> bool {
        // -V exits zero and prints a banner; if we can spawn it, it's there
        Command::new(&self.binary)
            .arg("-V")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    fn synthesize(&self, input: &Path, output: &Path) -> NetlistResult<SynthOutput> {
        let script = self.script(input, output);

        let captured = Command::new(&self.binary)
            .arg("-p")
            .arg(&script)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| NetlistError::ToolSpawn {
                binary: self.binary.clone(),
                message: e.to_string(),
            })?;

        let mut log = String::from_utf8_lossy(&captured.stdout).into_owned();
        if !captured.stderr.is_empty() {
            if !log.is_empty() && !log.ends_with('\n') {
                log.push('\n');
            }
            log.push_str(&String::from_utf8_lossy(&captured.stderr));
        }

        Ok(SynthOutput {
            log,
            success: captured.status.success(),
        })
    }
}
