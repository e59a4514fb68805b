//! `dashclock run` command.

use std::future::Future;
use std::io;
use std::sync::Arc;

use crate::adapters::live::{DirectoryPage, TerminalPage};
use crate::cli::{RunArgs, SurfaceKind};
use crate::config::ClockConfig;
use crate::context::ServiceContext;
use crate::ports::Page;
use crate::schedule::{self, TickStats};
use crate::updater::ClockUpdater;

/// Execute the `run` command.
///
/// Starts the clock schedule on a single-threaded runtime and keeps it
/// running until Ctrl-C or until `--ticks` ticks have run. Tick failures
/// are logged and never end the command.
///
/// # Errors
///
/// Returns an error string for invalid settings, a missing page root, or a
/// cassette that cannot be written.
pub fn run(args: &RunArgs) -> Result<(), String> {
    let config = ClockConfig::new(&args.element, args.period_ms)?;
    let page = build_page(args, &config)?;
    let ctx = match &args.record {
        Some(path) => ServiceContext::recording(page, path),
        None => ServiceContext::live(page),
    };
    if ctx.is_recording() {
        if let Some(path) = &args.record {
            tracing::info!(path = %path.display(), "recording clock session");
        }
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;
    let stats = runtime.block_on(drive(&ctx, &config, args.ticks, tokio::signal::ctrl_c()));

    if args.surface == SurfaceKind::Terminal {
        // Leave the rewritten clock line intact.
        println!();
    }
    if stats.failed > 0 {
        tracing::warn!(failed = stats.failed, total = stats.total(), "some ticks failed");
    }
    if let Some(path) = ctx.finish()? {
        tracing::info!(path = %path.display(), "recording saved");
    }
    Ok(())
}

/// Runs the schedule until `interrupt` resolves or `ticks` ticks have run.
///
/// If the interrupt cannot be listened for, a tick limit is still honoured;
/// without one the schedule stops.
async fn drive<F>(
    ctx: &ServiceContext,
    config: &ClockConfig,
    ticks: Option<u64>,
    interrupt: F,
) -> TickStats
where
    F: Future<Output = io::Result<()>>,
{
    let updater = ClockUpdater::new(Arc::clone(&ctx.clock), Arc::clone(&ctx.page), config);
    let mut handle = schedule::initialize(updater, config.period);

    match ticks {
        Some(limit) => {
            let interrupted = tokio::select! {
                _ = handle.wait_for_ticks(limit) => None,
                signal = interrupt => Some(signal),
            };
            if let Some(Err(err)) = interrupted {
                tracing::error!(error = %err, limit, "cannot listen for Ctrl-C, running to the tick limit");
                handle.wait_for_ticks(limit).await;
            }
        }
        None => {
            if let Err(err) = interrupt.await {
                tracing::error!(error = %err, "cannot listen for Ctrl-C, stopping");
            }
        }
    }

    handle.shutdown().await
}

fn build_page(args: &RunArgs, config: &ClockConfig) -> Result<Box<dyn Page>, String> {
    match args.surface {
        SurfaceKind::Terminal => Ok(Box::new(TerminalPage::stdout(config.element_id.clone()))),
        SurfaceKind::Directory => {
            let root = args
                .root
                .as_deref()
                .ok_or_else(|| "--root is required for --surface directory".to_string())?;
            if !root.is_dir() {
                return Err(format!("Page root is not a directory: {}", root.display()));
            }
            Ok(Box::new(DirectoryPage::new(root)))
        }
    }
}
