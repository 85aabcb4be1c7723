//! Logging setup for the command-line binary

/// Initialize the logger for terminal use.
/// Uses INFO level by default, DEBUG when `verbose` is set.
/// The RUST_LOG environment variable overrides both.
#[cfg(feature = "cli")]
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .init();
}
