/// Default backend when neither --backend nor FILE_CLIENT_BACKEND is set
pub const DEFAULT_BACKEND: &str = "grpc";

/// Default gRPC server address (host:port)
pub const DEFAULT_GRPC_SERVER: &str = "localhost:50051";

/// Default REST API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost/";

/// Output argument meaning "standard output"
pub const STDOUT_SENTINEL: &str = "-";

/// Environment overrides, consulted when the matching flag is absent
pub const ENV_BACKEND: &str = "FILE_CLIENT_BACKEND";
pub const ENV_GRPC_SERVER: &str = "FILE_CLIENT_GRPC_SERVER";
pub const ENV_BASE_URL: &str = "FILE_CLIENT_BASE_URL";
pub const ENV_OUTPUT: &str = "FILE_CLIENT_OUTPUT";

/// REST path segment under which files live
pub const FILE_ENDPOINT: &str = "file";

/// REST operation path segments
pub const STAT_ENDPOINT: &str = "stat";
pub const READ_ENDPOINT: &str = "read";

/// User-facing messages, one per failure outcome
pub const NOT_FOUND_MESSAGE: &str = "File not found. Please check the UUID and try again.";
pub const UNREACHABLE_MESSAGE: &str =
    "Could not connect to the server. Please ensure the server address is correct and reachable.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Process exit code for every failed request
pub const FAILURE_EXIT_CODE: u8 = 1;
