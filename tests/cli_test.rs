use std::process::{Command as Process, Output};

use clitube::{cli::Command, types::SearchQuery};

// Runs the built binary with a controlled environment
fn run_clitube(args: &[&str], envs: &[(&str, &str)]) -> Output {
    Process::new(env!("CARGO_BIN_EXE_clitube"))
        .args(args)
        .env_remove("YOUTUBE_API_KEY")
        .envs(envs.iter().copied())
        .output()
        .expect("clitube binary should start")
}

#[test]
fn test_no_tokens_means_usage() {
    let tokens: Vec<String> = Vec::new();
    assert_eq!(Command::from_args(&tokens, false), Command::Usage);
}

#[test]
fn test_tokens_mean_play() {
    let command = Command::from_args(&["daft", "punk", "harder"], false);
    let expected = SearchQuery::from_tokens(&["daft", "punk", "harder"]).unwrap();
    assert_eq!(command, Command::Play(expected));
}

#[test]
fn test_update_flag_wins() {
    let tokens: Vec<String> = Vec::new();
    assert_eq!(Command::from_args(&tokens, true), Command::Update);
    assert_eq!(Command::from_args(&["ignored"], true), Command::Update);
}

#[test]
fn test_usage_exits_cleanly_despite_broken_config() {
    // Neither an unusable data directory nor a bad value may turn usage into a failure
    let output = run_clitube(
        &[],
        &[
            ("HOME", "/proc/nonexistent"),
            ("XDG_DATA_HOME", "/proc/nonexistent"),
            ("CLITUBE_MAX_RESULTS", "0"),
        ],
    );

    assert!(output.status.success(), "exit status {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "stdout: {stdout}");
}

#[test]
fn test_bad_config_is_fatal_when_searching() {
    let home = tempfile::tempdir().unwrap();
    let home = home.path().to_str().unwrap();

    let output = run_clitube(
        &["daft", "punk"],
        &[
            ("HOME", home),
            ("XDG_DATA_HOME", home),
            ("CLITUBE_MAX_RESULTS", "0"),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CLITUBE_MAX_RESULTS"), "stdout: {stdout}");
}
