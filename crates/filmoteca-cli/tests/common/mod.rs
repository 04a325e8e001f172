use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Run the CLI binary against `api` with an isolated session file.
pub fn run_cli(args: &[&str], api: &str, session: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_filmoteca"));
    cmd.args(args);
    cmd.env("FILMOTECA_API", api);
    cmd.env("FILMOTECA_SESSION", session);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("FILMOTECA_PASSWORD");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI from async tests without blocking the mock server.
pub async fn run_cli_async(args: &[&str], api: &str, session: &Path) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let api = api.to_string();
    let session: PathBuf = session.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli(&args, &api, &session)
    })
    .await
    .expect("CLI task panicked")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert success and return stdout.
pub fn assert_success(args: &[&str], output: &Output) -> String {
    if !output.status.success() {
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr(output));
    }
    stdout(output)
}
