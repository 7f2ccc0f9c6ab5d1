use env_logger::Env;

/// Initializes the global logger. `-v` lifts the default filter to debug so
/// elimination tracing shows up; `RUST_LOG` still wins when set.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
