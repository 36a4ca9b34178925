//! Test environment builder for isolated CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a yosys-netlist CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp working directory.
pub struct TestEnv {
    /// Temporary working directory holding inputs and fixtures
    pub work_dir: TempDir,
    /// Path to the compiled binary
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_yosys-netlist")),
        }
    }

    /// Get path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Seed a trivial Verilog input file
    pub fn write_input(&self, name: &str) {
        std::fs::write(self.path(name), "module top(input clk);\nendmodule\n")
            .expect("failed to write input");
    }

    /// List file names in the working directory, sorted
    pub fn dir_listing(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.work_dir.path())
            .expect("failed to read work dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Run the CLI from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.work_dir.path(), args)
    }

    /// Run the CLI from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(cwd)
            .args(args)
            .output()
            .expect("failed to execute yosys-netlist");

        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Install a stub synthesizer script into the temp dir (unix only).
    ///
    /// The stub understands the real invocation shape: `-V` prints a banner,
    /// `-p <script>` extracts the write_json target from the script, writes a
    /// minimal netlist there and logs to stdout. Inputs whose name ends in
    /// `bad.v` fail with an error, producing log text but no JSON.
    #[cfg(unix)]
    pub fn install_stub_tool(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path("stub-yosys");
        let script = r#"#!/bin/sh
if [ "$1" = "-V" ]; then
    echo "Yosys 0.0+0 (stub)"
    exit 0
fi
script="$2"
in=$(printf '%s' "$script" | sed -n 's/^read_verilog \([^;]*\);.*/\1/p')
out=$(printf '%s' "$script" | sed -n 's/.*write_json \(.*\)$/\1/p')
echo "-- Parsing \`$in' --"
case "$in" in
    *bad.v)
        echo "ERROR: syntax error, unexpected TOK_EOF" >&2
        exit 1
        ;;
esac
printf '%s' '{"creator":"Yosys 0.0+0 (stub)","modules":{"top":{"ports":{"clk":{"direction":"input","bits":[2]}},"netnames":{"clk":{"hide_name":0,"bits":[2]}}}}}' > "$out"
echo "Done."
exit 0
"#;
        std::fs::write(&path, script).expect("failed to write stub tool");
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }
}
