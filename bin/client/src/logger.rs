/// Initialize the client logger
/// Sets up env_logger with default filter; logs go to stderr so stdout only
/// carries payloads and user-facing messages
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
