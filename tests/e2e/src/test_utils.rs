use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread::sleep;
use std::time::Duration;

pub const NOT_FOUND_MESSAGE: &str = "File not found. Please check the UUID and try again.";
pub const UNREACHABLE_MESSAGE: &str =
    "Could not connect to the server. Please ensure the server address is correct and reachable.";

/// Where the live services and the client binary are
pub struct E2eSettings {
    pub client_binary: PathBuf,
    pub base_url: String,
    pub grpc_server: String,
    pub file_id: String,
}

impl E2eSettings {
    pub fn from_env() -> Result<Self> {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let workspace_root = manifest_dir
            .parent()
            .and_then(Path::parent)
            .context("e2e crate must live two levels below the workspace root")?
            .to_path_buf();

        let client_binary = std::env::var("CLIENT_BINARY")
            .map(PathBuf::from)
            .unwrap_or_else(|_| workspace_root.join("target").join("release").join("file-client"));
        let base_url =
            std::env::var("SERVER_URL").unwrap_or_else(|_| "http://localhost/".to_string());
        let grpc_server =
            std::env::var("GRPC_SERVER").unwrap_or_else(|_| "localhost:50051".to_string());
        let file_id = std::env::var("FILE_ID")
            .context("FILE_ID must name a file that exists on both servers")?;

        Ok(Self {
            client_binary,
            base_url,
            grpc_server,
            file_id,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Backend {
    Rest,
    Grpc,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::Rest => "rest",
            Backend::Grpc => "grpc",
        }
    }
}

/// Run the client against one backend and return its raw output
pub fn run_client(
    settings: &E2eSettings,
    backend: Backend,
    command: &str,
    id: &str,
    output: Option<&Path>,
) -> Result<Output> {
    let mut cmd = Command::new(&settings.client_binary);
    cmd.arg(command)
        .arg(id)
        .arg("--backend")
        .arg(backend.name())
        .arg("--base-url")
        .arg(&settings.base_url)
        .arg("--grpc-server")
        .arg(&settings.grpc_server);
    if let Some(path) = output {
        cmd.arg("--output").arg(path);
    }
    cmd.output().with_context(|| {
        format!(
            "Failed to run client binary: {:?}",
            settings.client_binary
        )
    })
}

/// Run the client and fail unless it exits successfully
pub fn run_client_ok(
    settings: &E2eSettings,
    backend: Backend,
    command: &str,
    id: &str,
    output: Option<&Path>,
) -> Result<String> {
    let result = run_client(settings, backend, command, id, output)?;
    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        let stdout = String::from_utf8_lossy(&result.stdout);
        anyhow::bail!(
            "{} {} via {} failed:\nSTDOUT: {}\nSTDERR: {}",
            command,
            id,
            backend.name(),
            stdout,
            stderr
        );
    }
    Ok(String::from_utf8_lossy(&result.stdout).into_owned())
}

/// Wait until both backends stop reporting the server as unreachable
pub fn wait_for_servers(settings: &E2eSettings) -> Result<()> {
    println!("Waiting for servers to be ready...");
    for backend in [Backend::Rest, Backend::Grpc] {
        let mut ready = false;
        for i in 0..30 {
            let output = run_client(settings, backend, "stat", &settings.file_id, None)?;
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains(UNREACHABLE_MESSAGE) {
                ready = true;
                break;
            }
            if i < 29 {
                sleep(Duration::from_secs(1));
            }
        }
        if !ready {
            anyhow::bail!(
                "{} server did not become ready within 30 seconds",
                backend.name()
            );
        }
        println!("{} server is ready!", backend.name());
    }
    Ok(())
}
