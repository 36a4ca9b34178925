mod common;

use common::TestEnv;

#[cfg(unix)]
#[test]
fn test_doctor_reports_available_tool() {
    let env = TestEnv::new();
    let stub = env.install_stub_tool();

    let result = env.run(&["doctor", "--tool", stub.to_str().unwrap()]);

    assert!(result.success, "got:\n{}", result.combined_output());
    assert!(result.stdout.contains("is available"), "got:\n{}", result.stdout);
    assert!(
        result.stdout.contains("Yosys 0.0+0 (stub)"),
        "doctor should surface the version banner; got:\n{}",
        result.stdout
    );
}

#[test]
fn test_doctor_fails_for_missing_tool() {
    let env = TestEnv::new();

    let result = env.run(&["doctor", "--tool", "no-such-synthesizer"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("not found"), "got:\n{}", result.stdout);
}

#[cfg(unix)]
#[test]
fn test_doctor_json_output() {
    let env = TestEnv::new();
    let stub = env.install_stub_tool();

    let result = env.run(&["--json", "doctor", "--tool", stub.to_str().unwrap()]);

    assert!(result.success);
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "doctor");
    assert_eq!(event["available"], true);
    assert!(event["version"].as_str().unwrap().contains("stub"));
}
