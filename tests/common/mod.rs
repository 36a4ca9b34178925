//! Common test utilities for yosys-netlist CLI tests.
//!
//! Provides `TestEnv`: an isolated temp working directory, helpers to seed
//! Verilog inputs, and a runner for the compiled binary. On unix it can also
//! install a stub synthesizer script so subprocess-backed tests never need a
//! real Yosys.

pub mod env;

pub use env::*;
