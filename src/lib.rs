//! yosys-netlist - typed Yosys JSON netlists and fixture regeneration
//!
//! Two halves:
//! - a serde data model for the JSON documents Yosys emits via `write_json`
//! - a batch driver that regenerates test fixtures by running Yosys over a
//!   directory of Verilog sources, capturing one log and one netlist per
//!   input

pub mod config;
pub mod error;
pub mod netlist;
pub mod regen;
pub mod synth;

// Re-exports for convenience
pub use config::{Config, FixtureConfig, ToolConfig};
pub use error::{NetlistError, NetlistResult};
pub use netlist::{Bit, Cell, Direction, Memory, Module, Net, Netlist, Port};
pub use regen::{find_inputs, fixture_paths, regenerate, RegenOptions, RegenReport};
pub use synth::{SynthOutput, Synthesizer, YosysSynthesizer};
