mod cli;
mod export;

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveTime};
use clap::Parser;
use horologe_engine::logging::{init_logging, LoggingConfig};
use horologe_engine::time::{FixedClock, SystemClock, WallClock};
use horologe_face::{DocumentLoader, ManualTimerHost, Scheduler, SchedulerConfig, SharedDocument, TokioTimerHost};

use cli::{Args, Command, FontArg};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // An explicit -v beats RUST_LOG.
    let env_filter = (args.verbose > 0).then(|| args.log_level().to_string().to_lowercase());
    init_logging(LoggingConfig { env_filter, default_level: args.log_level(), ..LoggingConfig::default() });

    match args.command {
        Command::Render { document, out, at, fonts } => render(&document, &args.marker, &out, at, &fonts),
        Command::Run { document, interval, ticks, out, fonts } => {
            let config = SchedulerConfig { interval: Duration::from_millis(interval), marker: args.marker };
            run(&document, config, ticks, out.as_deref(), &fonts).await
        }
    }
}

fn load_document(path: &Path) -> Result<SharedDocument> {
    let doc = DocumentLoader::new()
        .load_file(path)
        .with_context(|| format!("loading {}", path.display()))?;
    Ok(Arc::new(Mutex::new(doc)))
}

// ── render ────────────────────────────────────────────────────────────────

fn render(document: &Path, marker: &str, out: &Path, at: Option<NaiveTime>, fonts: &[FontArg]) -> Result<()> {
    let fonts = export::load_fonts(fonts)?;
    let doc = load_document(document)?;

    let clock: Arc<dyn WallClock> = match at {
        Some(time) => {
            let now = Local::now().fixed_offset();
            let instant = now
                .date_naive()
                .and_time(time)
                .and_local_timezone(*now.offset())
                .single()
                .context("--at does not name a single instant today")?;
            Arc::new(FixedClock(instant))
        }
        None => Arc::new(SystemClock),
    };

    let config = SchedulerConfig { marker: marker.to_string(), ..SchedulerConfig::default() };
    let scheduler = Scheduler::new(doc.clone(), clock, ManualTimerHost::new(), config);
    let painted = scheduler.repaint_now();
    if painted == 0 {
        log::warn!("no surface in {} carries class {marker}", document.display());
    }

    let doc = doc.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let written = export::export_marked(&doc, marker, &fonts, out, None)?;
    log::info!("rendered {} surface(s) into {}", written.len(), out.display());
    Ok(())
}

// ── run ───────────────────────────────────────────────────────────────────

async fn run(document: &Path, config: SchedulerConfig, ticks: u32, out: Option<&Path>, fonts: &[FontArg]) -> Result<()> {
    let fonts = export::load_fonts(fonts)?;
    let doc = load_document(document)?;
    let host = TokioTimerHost::try_current().context("no tokio runtime")?;

    let interval = config.interval;
    let marker = config.marker.clone();
    let mut scheduler = Scheduler::new(doc.clone(), Arc::new(SystemClock), host, config);

    let start = tokio::time::Instant::now();
    scheduler.toggle();
    log::info!("running {ticks} tick(s) every {interval:?}");

    for tick in 1..=ticks {
        // Half a period past each tick, so the frame is always the fresh one.
        tokio::time::sleep_until(start + interval * tick + interval / 2).await;

        if let Some(dir) = out {
            let doc = doc.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            export::export_marked(&doc, &marker, &fonts, dir, Some(tick))?;
        }
        log::debug!("tick {tick}/{ticks}");
    }

    scheduler.toggle();
    log::info!("stopped after {ticks} tick(s)");
    Ok(())
}
