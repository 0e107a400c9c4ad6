use klondike_cli::run;

#[test]
fn help_prints_to_stdout_and_exits_zero() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["klondike", "--help"], &mut out, &mut err);
    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("klondike"));
    assert!(stdout.contains("play"));
}

#[test]
fn unknown_command_exits_two_with_usage() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["klondike", "bogus"], &mut out, &mut err);
    assert_eq!(code, 2);
    let stderr = String::from_utf8_lossy(&err);
    assert!(stderr.contains("Commands:"));
    assert!(stderr.contains("play"));
    assert!(stderr.contains("deal"));
}

#[test]
fn deal_via_run_is_deterministic() {
    let mut out1: Vec<u8> = Vec::new();
    let mut out2: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code1 = run(["klondike", "deal", "--seed", "42"], &mut out1, &mut err);
    let code2 = run(["klondike", "deal", "--seed", "42"], &mut out2, &mut err);
    assert_eq!(code1, 0);
    assert_eq!(code2, 0);
    assert_eq!(out1, out2, "same seed must render the same layout");
}

#[test]
fn rng_via_run_prints_a_sample() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["klondike", "rng", "--seed", "7"], &mut out, &mut err);
    assert_eq!(code, 0);
    assert!(String::from_utf8_lossy(&out).contains("RNG sample"));
}

#[test]
fn cfg_via_run_prints_the_resolved_table() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["klondike", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("Configuration:"));
    assert!(stdout.contains("recycle"));
}
