//! Client configuration
//!
//! Every option resolves as: command-line flag > environment variable > default.

use crate::backend::BackendKind;
use crate::constants::{
    DEFAULT_BACKEND, DEFAULT_BASE_URL, DEFAULT_GRPC_SERVER, ENV_BACKEND, ENV_BASE_URL,
    ENV_GRPC_SERVER, ENV_OUTPUT, STDOUT_SENTINEL,
};
use crate::output::Destination;
use anyhow::Result;
use clap::{Args, ValueEnum};
use log::debug;

/// Connection and output options shared by all commands
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Set a backend to be used [default: grpc, or FILE_CLIENT_BACKEND env var]
    #[arg(long, value_enum, global = true)]
    pub backend: Option<BackendKind>,
    /// gRPC server host:port [default: localhost:50051, or FILE_CLIENT_GRPC_SERVER env var]
    #[arg(long, visible_alias = "rpc-server", value_name = "HOST:PORT", global = true)]
    pub grpc_server: Option<String>,
    /// Base URL for REST API [default: http://localhost/, or FILE_CLIENT_BASE_URL env var]
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,
    /// File to store output, `-` for stdout [default: -, or FILE_CLIENT_OUTPUT env var]
    #[arg(long, value_name = "PATH", global = true)]
    pub output: Option<String>,
}

/// Resolved client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend: BackendKind,
    pub grpc_server: String,
    pub base_url: String,
    pub output: Destination,
}

impl ClientConfig {
    /// Resolve against the process environment
    pub fn load(args: &ConfigArgs) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    pub fn resolve<F>(args: &ConfigArgs, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|value| !value.is_empty());

        let backend = match args.backend {
            Some(backend) => backend,
            None => {
                let value = lookup(ENV_BACKEND).unwrap_or_else(|| DEFAULT_BACKEND.to_string());
                <BackendKind as ValueEnum>::from_str(&value, true).map_err(|_| {
                    anyhow::anyhow!(
                        "Invalid backend in {}: {}. Must be 'grpc' or 'rest'",
                        ENV_BACKEND,
                        value
                    )
                })?
            }
        };

        let grpc_server = args
            .grpc_server
            .clone()
            .or_else(|| lookup(ENV_GRPC_SERVER))
            .unwrap_or_else(|| DEFAULT_GRPC_SERVER.to_string());

        let base_url = args
            .base_url
            .clone()
            .or_else(|| lookup(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let output = args
            .output
            .clone()
            .or_else(|| lookup(ENV_OUTPUT))
            .unwrap_or_else(|| STDOUT_SENTINEL.to_string());
        if output.is_empty() {
            anyhow::bail!("Output path cannot be empty. Use '-' for standard output");
        }

        let config = ClientConfig {
            backend,
            grpc_server,
            base_url,
            output: Destination::from_arg(&output),
        };
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}
