//! Clock faces for Horologe.
//!
//! Surfaces are declared in `.hml` markup and carry their configuration as
//! attributes. The [`renderer`] paints one surface for one point in time; the
//! [`scheduler`] repaints every surface tagged with its marker class on a
//! repeating timer.
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use horologe_engine::time::SystemClock;
//! use horologe_face::document::DocumentLoader;
//! use horologe_face::scheduler::{Scheduler, SchedulerConfig};
//! use horologe_face::timer::ManualTimerHost;
//!
//! let doc = DocumentLoader::new()
//!     .load_str(r#"Canvas "lobby" { class: clockClass  width: 200  height: 200  numerals: roman }"#)
//!     .unwrap();
//!
//! let host = ManualTimerHost::new();
//! let mut scheduler = Scheduler::new(
//!     Arc::new(Mutex::new(doc)),
//!     Arc::new(SystemClock),
//!     host.clone(),
//!     SchedulerConfig::default(),
//! );
//!
//! scheduler.toggle();
//! assert!(scheduler.is_running());
//! host.advance(std::time::Duration::from_secs(3));
//! scheduler.toggle();
//! assert!(!scheduler.is_running());
//! ```

pub mod config;
pub mod document;
pub mod renderer;
pub mod scheduler;
pub mod surface;
pub mod timer;

pub use config::ClockConfig;
pub use document::{DocumentLoader, LoadError, SurfaceDocument};
pub use scheduler::{Scheduler, SchedulerConfig, SharedDocument};
pub use surface::Surface;
pub use timer::{ManualTimerHost, TimerHost, TokioTimerHost};
