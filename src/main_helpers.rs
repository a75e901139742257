use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result, bail};
use lorelink_config::LorelinkConfig;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins; otherwise `[debug]` decides, and only errors are logged
/// when tracing is disabled.
pub(crate) fn initialize_tracing(config: &LorelinkConfig) {
    use tracing_subscriber::prelude::*;

    let debug_cfg = &config.debug;
    let env_filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else if debug_cfg.enable_tracing {
        EnvFilter::new(debug_cfg.filter_directive())
    } else {
        EnvFilter::new("error")
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_ansi(false);

    let init_result = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    match init_result {
        Ok(()) if debug_cfg.enable_tracing => {
            tracing::info!(
                level = %debug_cfg.trace_level,
                filter = %debug_cfg.filter_directive(),
                "debug tracing enabled"
            );
        }
        Ok(()) => {}
        Err(err) => {
            tracing::warn!(error = %err, "tracing already initialized; skipping setup");
        }
    }
}

/// Use the positional text when given, otherwise read piped stdin.
pub(crate) fn resolve_text(inline: Option<String>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No text provided. Pass TEXT or pipe input via stdin.");
    }

    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(strip_trailing_newline(buffer))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
