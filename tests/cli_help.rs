use std::process::Command;

#[test]
fn test_help_lists_subcommands() {
    let bin = env!("CARGO_BIN_EXE_yosys-netlist");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["regen", "check", "doctor"] {
        assert!(
            stdout.contains(subcommand),
            "help output should list the '{}' subcommand; got:\n{}",
            subcommand,
            stdout
        );
    }
}

#[test]
fn test_no_subcommand_is_an_error() {
    let bin = env!("CARGO_BIN_EXE_yosys-netlist");

    let output = Command::new(bin).output().unwrap();

    assert!(!output.status.success());
}
