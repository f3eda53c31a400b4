use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Maps the `-v` count to a default level; `RUST_LOG` still overrides it.
pub(crate) const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a compact stderr subscriber so stdout only carries command output.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub(crate) fn init(verbose: u8) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::builder().with_default_directive(level_for(verbose).into()).from_env_lossy();

    let console = layer().compact().with_writer(std::io::stderr).with_target(false).boxed();

    tracing_subscriber::registry().with(env_filter).with(console).try_init()?;
    Ok(())
}
