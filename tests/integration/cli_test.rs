use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Result;

const BIN: &str = env!("CARGO_BIN_EXE_framesim");

/// Test the run command over the classic reference string
#[test]
fn test_cli_run_all_policies() -> Result<()> {
    let output = Command::new(BIN)
        .args(["run", "--refs", "7,0,1,2,0,3,0,4,2,3,0,3,2", "--frames", "3"])
        .output()?;

    assert!(output.status.success(), "CLI run command failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("- FIFO - 10 page faults"), "FIFO summary not found");
    assert!(stdout.contains("- LRU - 9 page faults"), "LRU summary not found");
    assert!(stdout.contains("- CLOCK - 9 page faults"), "CLOCK summary not found");
    assert!(stdout.contains("- OPT - 7 page faults"), "OPT summary not found");

    Ok(())
}

/// Test that --policy narrows the run to one simulator
#[test]
fn test_cli_run_single_policy() -> Result<()> {
    let output = Command::new(BIN)
        .args([
            "run",
            "--refs",
            "7,0,1,2,0,3,0,4,2,3,0,3,2",
            "--frames",
            "3",
            "--policy",
            "lru",
        ])
        .output()?;

    assert!(output.status.success(), "CLI run command failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("- LRU - 9 page faults"), "LRU summary not found");
    assert!(!stdout.contains("FIFO"), "Unrequested FIFO result in output");

    Ok(())
}

/// Test that --verbose prints per-step trace tables
#[test]
fn test_cli_run_verbose_tables() -> Result<()> {
    let output = Command::new(BIN)
        .args([
            "run",
            "--refs",
            "7,0,1,2",
            "--frames",
            "3",
            "--verbose",
        ])
        .output()?;

    assert!(output.status.success(), "CLI run command failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("== FIFO =="), "FIFO table header not found");
    assert!(stdout.contains("== OPT =="), "OPT table header not found");
    assert!(stdout.contains("Ref | F0 F1 F2 | Fault"), "Table columns not found");
    assert!(stdout.contains("  7 |  7  -  - | *"), "First trace row not found");

    Ok(())
}

/// Test that --chart prints the fault bar chart
#[test]
fn test_cli_run_chart() -> Result<()> {
    let output = Command::new(BIN)
        .args([
            "run",
            "--refs",
            "7,0,1,2,0,3,0,4,2,3,0,3,2",
            "--frames",
            "3",
            "--chart",
        ])
        .output()?;

    assert!(output.status.success(), "CLI run command failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Page faults by policy"), "Chart header not found");
    assert!(stdout.contains('#'), "Chart bars not found");

    Ok(())
}

/// Test that a bad frame count fails with a named error
#[test]
fn test_cli_rejects_bad_frame_count() -> Result<()> {
    let output = Command::new(BIN)
        .args(["run", "--refs", "1,2,3", "--frames", "-1"])
        .output()?;

    assert!(!output.status.success(), "Negative frame count should fail");

    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("invalid frame count '-1'"),
        "Frame count error not found in stderr"
    );

    Ok(())
}

/// Test that a bad reference token fails and is named in the error
#[test]
fn test_cli_rejects_bad_reference_token() -> Result<()> {
    let output = Command::new(BIN)
        .args(["run", "--refs", "1,oops,3", "--frames", "2"])
        .output()?;

    assert!(!output.status.success(), "Bad reference token should fail");

    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("invalid page reference 'oops'"),
        "Reference error not found in stderr"
    );

    Ok(())
}

/// Test the interactive shell with input redirection
#[test]
fn test_cli_shell_interaction() -> Result<()> {
    let mut child = Command::new(BIN)
        .arg("shell")
        .current_dir(std::env::temp_dir())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    {
        let stdin = child.stdin.as_mut().expect("child stdin");
        // A reference string, the frame count, then help and exit
        writeln!(stdin, "7,0,1,2,0,3,0,4,2,3,0,3,2")?;
        writeln!(stdin, "3")?;
        writeln!(stdin, "help")?;
        writeln!(stdin, "exit")?;
    }

    let output = child.wait_with_output()?;
    assert!(output.status.success(), "CLI shell interaction failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Welcome to framesim"), "Welcome message not found");
    assert!(stdout.contains("== FIFO =="), "Trace table not found");
    assert!(stdout.contains("- OPT - 7 page faults"), "Summary not found");
    assert!(stdout.contains("Policies simulated:"), "Help message not found");
    assert!(stdout.contains("Goodbye!"), "Exit message not found");

    Ok(())
}

/// Test that shell errors keep the session alive
#[test]
fn test_cli_shell_recovers_from_errors() -> Result<()> {
    let mut child = Command::new(BIN)
        .arg("shell")
        .current_dir(std::env::temp_dir())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    {
        let stdin = child.stdin.as_mut().expect("child stdin");
        writeln!(stdin, "1,nope,3")?;
        writeln!(stdin, "1,2")?;
        writeln!(stdin, "1")?;
        writeln!(stdin, "exit")?;
    }

    let output = child.wait_with_output()?;
    assert!(output.status.success(), "CLI shell should survive bad input");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(
        stdout.contains("invalid page reference 'nope'"),
        "Parse error message not found"
    );
    assert!(stdout.contains("- FIFO - 2 page faults"), "Recovery run not found");
    assert!(stdout.contains("Goodbye!"), "Exit message not found");

    Ok(())
}

/// Test clap's generated help output
#[test]
fn test_cli_help_output() -> Result<()> {
    let output = Command::new(BIN).args(["--help"]).output()?;

    assert!(output.status.success(), "CLI help command failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage:"), "Help usage section not found");
    assert!(stdout.contains("Commands:"), "Help commands section not found");
    assert!(stdout.contains("run"), "Run subcommand not listed");
    assert!(stdout.contains("shell"), "Shell subcommand not listed");

    Ok(())
}
