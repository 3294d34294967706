use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DATA_DIR: &str = ".instagram_proxy";

/// Resolve the log directory: `LOG_DIR` when set, else `~/.instagram_proxy/logs`
pub fn get_log_dir() -> Result<PathBuf, String> {
    let log_dir = match std::env::var("LOG_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
        _ => {
            let home = dirs::home_dir().ok_or("Failed to get user home directory")?;
            home.join(DATA_DIR).join("logs")
        }
    };

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;
    }

    Ok(log_dir)
}

/// Initialize logger system
pub fn init_logger() {
    // Capture log macro logs
    let _ = tracing_log::LogTracer::init();

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::Layer::new()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    let log_dir = match get_log_dir() {
        Ok(dir) => dir,
        Err(e) => {
            // Console only
            eprintln!("Failed to initialize log directory: {}", e);
            let _ = tracing_subscriber::registry()
                .with(filter_layer)
                .with(console_layer)
                .try_init();
            return;
        }
    };

    // Daily rolling file, non-blocking writer
    let file_appender = tracing_appender::rolling::daily(&log_dir, "proxy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    // The writer must outlive every log call, so the guard lives until exit
    std::mem::forget(guard);

    info!("Logger initialized, writing to {:?}", log_dir);
}
