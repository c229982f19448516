pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "tkb_link_lib=info,tkb_link=info";

/// Install the `env_logger` backend for the `log` facade.
///
/// Honours `RUST_LOG`; safe to call more than once.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "tkb_link_lib=debug,tkb_link=debug"
    } else {
        DEFAULT_LOG_FILTER
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(fallback))
        .format_timestamp_millis()
        .try_init();
}
