//! Tracing subscriber setup for the `sortlab` binary.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "sortlab=info,sortlab_cli=info,sortlab_core=warn";
const VERBOSE_FILTER: &str = "sortlab=debug,sortlab_cli=debug,sortlab_core=debug";

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `verbose`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
