pub mod commands;
pub mod handlers;
pub mod output;
pub mod prompt;

/// Route `log` output to stderr. Defaults to warnings only; set `RUST_LOG`
/// for more.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
