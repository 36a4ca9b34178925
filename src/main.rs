//! yosys-netlist CLI - Yosys JSON netlist fixture tool
//!
//! Usage: yosys-netlist <COMMAND>
//!
//! Commands:
//!   regen   Regenerate fixture logs and JSON netlists from Verilog inputs
//!   check   Parse JSON netlists and report their contents
//!   doctor  Verify the synthesis tool is available

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use yosys_netlist::config::CONFIG_FILE_NAME;
use yosys_netlist::synth::Synthesizer;
use yosys_netlist::{Config, Netlist, RegenOptions, YosysSynthesizer};

/// yosys-netlist - Yosys JSON netlist fixture tool
#[derive(Parser, Debug)]
#[command(name = "yosys-netlist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate fixture logs and JSON netlists from Verilog inputs
    Regen {
        /// Directory containing the input files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Synthesis tool binary (overrides config)
        #[arg(long)]
        tool: Option<PathBuf>,

        /// Input file extension, without dot (overrides config)
        #[arg(long)]
        ext: Option<String>,

        /// Config file (defaults to fixtures.toml in the input directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Dry run - list inputs without invoking the tool
        #[arg(long)]
        dry_run: bool,
    },

    /// Parse JSON netlists and report their contents
    Check {
        /// Netlist JSON files to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Verify the synthesis tool is available
    Doctor {
        /// Synthesis tool binary to probe
        #[arg(long, default_value = "yosys")]
        tool: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Regen { dir, tool, ext, config, dry_run } => {
            cmd_regen(&dir, tool, ext, config, dry_run, cli.json)
        }
        Commands::Check { paths } => cmd_check(&paths, cli.json, cli.verbose),
        Commands::Doctor { tool } => cmd_doctor(&tool, cli.json),
    }
}

fn cmd_regen(
    dir: &PathBuf,
    tool: Option<PathBuf>,
    ext: Option<String>,
    config_path: Option<PathBuf>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    // Load configuration (CLI flags win over the file, the file over defaults)
    let config_path = config_path.unwrap_or_else(|| dir.join(CONFIG_FILE_NAME));
    let config = Config::load(&config_path)?;

    let binary = tool.unwrap_or(config.tool.binary);
    let input_ext = ext.unwrap_or(config.fixtures.input_ext);

    if !json {
        println!("🔧 Fixture Regeneration");
        println!("Directory: {}", dir.display());
        println!("Tool: {}", binary.display());
        println!("Inputs: *.{}", input_ext);
        if dry_run {
            println!("Mode: Dry run");
        }
    }

    let synthesizer = YosysSynthesizer::new(binary, config.tool.passes);
    let options = RegenOptions { input_ext, dry_run };

    let report = yosys_netlist::regenerate(dir, &synthesizer, &options)?;

    if json {
        let output = serde_json::json!({
            "event": "regen",
            "status": if report.is_success() { "success" } else { "partial" },
            "written": report.written.len(),
            "failed": report.failed.len()
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n📊 Regen Results:");
        if !report.written.is_empty() {
            println!("  ✓ Written: {} fixtures", report.written.len());
            for name in &report.written {
                println!("    - {}", name);
            }
        }
        if !report.failed.is_empty() {
            println!("  ✗ Failed: {} inputs (see the matching .log files)", report.failed.len());
            for name in &report.failed {
                println!("    - {}", name);
            }
        }
        if report.total() == 0 {
            println!("  No matching inputs found.");
        }
        println!();
    }

    // Individual tool failures do not fail the run; only driver errors do
    Ok(())
}

fn cmd_check(paths: &[PathBuf], json: bool, verbose: u8) -> Result<()> {
    if !json {
        println!("🔍 Checking {} netlist file(s)", paths.len());
        println!();
    }

    let mut failures = 0usize;

    for path in paths {
        match std::fs::File::open(path).map_err(anyhow::Error::from).and_then(|f| {
            Netlist::from_reader(std::io::BufReader::new(f)).map_err(anyhow::Error::from)
        }) {
            Ok(netlist) => {
                if json {
                    let output = serde_json::json!({
                        "event": "check",
                        "path": path.display().to_string(),
                        "ok": true,
                        "creator": netlist.creator,
                        "modules": netlist.modules.len()
                    });
                    println!("{}", serde_json::to_string(&output)?);
                } else {
                    println!("✓ {} ({}, {} modules)", path.display(), netlist.creator, netlist.modules.len());
                    if verbose > 0 {
                        for (name, module) in &netlist.modules {
                            println!(
                                "    {} - {} ports, {} cells, {} nets, {} memories",
                                name,
                                module.ports.len(),
                                module.cells.len(),
                                module.nets.len(),
                                module.memories.len()
                            );
                        }
                    }
                }
            }
            Err(err) => {
                failures += 1;
                if json {
                    let output = serde_json::json!({
                        "event": "check",
                        "path": path.display().to_string(),
                        "ok": false,
                        "error": err.to_string()
                    });
                    println!("{}", serde_json::to_string(&output)?);
                } else {
                    println!("✗ {}: {}", path.display(), err);
                }
            }
        }
    }

    if failures > 0 {
        if !json {
            println!();
            println!("🔴 Check FAILED - {} of {} files invalid", failures, paths.len());
        }
        std::process::exit(1);
    }

    if !json {
        println!();
        println!("🟢 All files parsed.");
    }

    Ok(())
}

fn cmd_doctor(tool: &PathBuf, json: bool) -> Result<()> {
    let synthesizer = YosysSynthesizer::new(tool.clone(), vec!["synth".to_string()]);
    let available = synthesizer.is_available();
    let version = synthesizer.version();

    if json {
        let output = serde_json::json!({
            "event": "doctor",
            "tool": tool.display().to_string(),
            "available": available,
            "version": version
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("🩺 Doctor");
        if available {
            println!("✓ {} is available", tool.display());
            if let Some(banner) = &version {
                println!("  {}", banner);
            }
            println!();
            println!("🟢 Ready to regenerate fixtures.");
        } else {
            println!("✗ {} not found on this system", tool.display());
            println!("  ↳ Install Yosys or pass --tool with the binary's path.");
        }
    }

    if !available {
        std::process::exit(1);
    }

    Ok(())
}
