use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use horologe_face::scheduler::DEFAULT_MARKER;

#[derive(Debug, Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, global = true, default_value = DEFAULT_MARKER, help = "Class that marks clock surfaces")]
    pub marker: String,
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Raise the log level (-v debug, -vv trace)")]
    pub verbose: u8,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Paint every clock surface once and write one PNG per surface
    Render {
        #[arg(help = "Path to the .hml document")]
        document: PathBuf,
        #[arg(short, long, default_value = ".", help = "Directory for the PNG files")]
        out: PathBuf,
        #[arg(long, value_parser = parse_time, help = "Paint this time of day (HH:MM:SS) instead of now")]
        at: Option<NaiveTime>,
        #[arg(long = "font", value_parser = parse_font, help = "Font file for a family, as FAMILY=PATH")]
        fonts: Vec<FontArg>,
    },
    /// Repaint on a timer for a number of ticks, optionally exporting every frame
    Run {
        #[arg(help = "Path to the .hml document")]
        document: PathBuf,
        #[arg(long, default_value_t = 1000, help = "Repaint interval in milliseconds")]
        interval: u64,
        #[arg(long, default_value_t = 5, help = "Number of timer ticks before stopping")]
        ticks: u32,
        #[arg(short, long, help = "Directory for per-tick PNG files")]
        out: Option<PathBuf>,
        #[arg(long = "font", value_parser = parse_font, help = "Font file for a family, as FAMILY=PATH")]
        fonts: Vec<FontArg>,
    },
}

/// `--font FAMILY=PATH`
#[derive(Debug, Clone, PartialEq)]
pub struct FontArg {
    pub family: String,
    pub path: PathBuf,
}

fn parse_font(s: &str) -> Result<FontArg, String> {
    match s.split_once('=') {
        Some((family, path)) if !family.trim().is_empty() && !path.is_empty() => {
            Ok(FontArg { family: family.trim().to_string(), path: PathBuf::from(path) })
        }
        _ => Err(format!("expected FAMILY=PATH, got `{s}`")),
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").map_err(|e| format!("expected HH:MM:SS: {e}"))
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
