#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Route the generators' `log` output to stderr (native) or the browser console (wasm32).
///
/// `debug_enabled` turns on the per-attempt and per-word tracing from the
/// placers; otherwise only pipeline summaries and warnings are shown. Natively,
/// a `RUST_LOG` filter takes precedence. Only the first call installs a logger.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        if let Err(e) = console_log::init_with_level(level) {
            let msg = format!("wordgrid: console logging unavailable ({e})");
            web_sys::console::error_1(&msg.into());
            return;
        }
        log::debug!("console logger ready at {level:?}");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        if builder.try_init().is_ok() {
            log::debug!("stderr logger ready at {level:?}");
        }
    }
}
