use std::io;

use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Logs go to stderr, stdout only carries the demo output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    merge_sort_rs::demo::run(&mut io::stdout().lock())
}
