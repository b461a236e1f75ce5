use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Without a trace file, human-readable logs go to stderr, filtered by
/// `RUST_LOG` (errors only when unset) so they never mix with frames on
/// stdout. With one, every record is written there as JSON, including a
/// record per closed `tick` span with its duration; the filter then
/// defaults to `info`.
pub fn init(trace_file: Option<&Path>) -> io::Result<()> {
    match trace_file {
        Some(path) => {
            let file = File::create(path)?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            let _ = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(io::stderr)
                .try_init();
        }
    }
    Ok(())
}
