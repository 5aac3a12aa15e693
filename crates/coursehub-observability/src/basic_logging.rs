use tracing_subscriber::{Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console-only logging, used when observability is disabled.
///
/// `LOG_LEVEL` sets the level for CourseHub crates (default `info`); noisy
/// dependencies are held at `warn`. `RUST_LOG` overrides both.
pub fn init_basic_console_logging() -> anyhow::Result<()> {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(crate::logging::console_filter());

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    eprintln!("Observability disabled - console logging only");
    Ok(())
}
