use anyhow::Result;
use std::io::Write;
use std::process::{Command, Stdio};

struct CommandOutput {
    stdout: String,
    stderr: String,
    exit_code: i32,
}

/// Run the compiled binary with the given flags, feeding `input` to stdin
/// one prompt answer per line.
fn run_usersapp(args: &[&str], input: &str) -> Result<CommandOutput> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_usersapp"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}

#[test]
fn help_prints_usage() -> Result<()> {
    let output = run_usersapp(&["--help"], "")?;
    assert_eq!(output.exit_code, 0, "help failed: {}", output.stderr);
    assert!(output.stdout.contains("Usage"));
    assert!(output.stdout.contains("--json"));
    Ok(())
}

#[test]
fn empty_list_then_quit() -> Result<()> {
    let output = run_usersapp(&[], "list\nquit\n")?;
    assert_eq!(output.exit_code, 0, "session failed: {}", output.stderr);
    assert!(output.stdout.contains("Welcome to the UsersApp!"));
    assert!(output.stdout.contains("Users data"));
    assert!(output.stdout.contains("No data..."));
    assert!(output.stdout.contains("Bye bye!"));
    Ok(())
}

#[test]
fn add_then_list_shows_the_record() -> Result<()> {
    let output = run_usersapp(&[], "add\nTom\n30\nlist\nquit\n")?;
    assert_eq!(output.exit_code, 0, "session failed: {}", output.stderr);
    assert!(output.stdout.contains("User has been successfully added!"));
    assert!(output.stdout.contains("Tom"));
    assert!(output.stdout.contains("30"));
    assert!(!output.stdout.contains("No data..."));
    Ok(())
}

#[test]
fn remove_of_missing_user_reports_on_stderr() -> Result<()> {
    let output = run_usersapp(&[], "remove\nNonexistent\nquit\n")?;
    assert_eq!(output.exit_code, 0, "session failed: {}", output.stderr);
    assert!(output.stderr.contains("User not found..."));
    Ok(())
}

#[test]
fn unknown_command_keeps_the_session_going() -> Result<()> {
    let output = run_usersapp(&[], "frobnicate\nquit\n")?;
    assert_eq!(output.exit_code, 0, "session failed: {}", output.stderr);
    assert!(output.stderr.contains("Command not found"));
    assert!(output.stdout.contains("Bye bye!"));
    Ok(())
}

#[test]
fn edit_of_missing_user_still_adds_the_new_record() -> Result<()> {
    let output = run_usersapp(&[], "edit\nGhost\nNew\n5\nlist\nquit\n")?;
    assert_eq!(output.exit_code, 0, "session failed: {}", output.stderr);
    assert!(output.stderr.contains("User not found..."));
    assert!(output.stdout.contains("User has been successfully added!"));
    assert!(output.stdout.contains("New"));
    Ok(())
}

#[test]
fn json_mode_emits_parseable_events() -> Result<()> {
    let output = run_usersapp(&["--json"], "add\nTom\n30\nlist\nquit\n")?;
    assert_eq!(output.exit_code, 0, "session failed: {}", output.stderr);

    let mut saw_listing = false;
    for line in output.stdout.lines().filter(|l| !l.is_empty()) {
        let event: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("non-JSON line {line:?}: {e}"));
        assert!(event["level"].is_string());
        assert!(event["code"].is_string());
        if event["code"] == "users.list" {
            saw_listing = true;
            assert_eq!(event["data"][0]["name"], "Tom");
            assert_eq!(event["data"][0]["age"], 30);
        }
    }
    assert!(saw_listing, "no users.list event in: {}", output.stdout);
    Ok(())
}
