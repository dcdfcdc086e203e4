//! # statusboard
//!
//! A status-card panel for uptime probes. Turns time-series frames handed
//! over by a dashboard host into per-service status records, and displays
//! them as cards in an interactive terminal UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (parsing)│    │ (cards) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── FileSource | ChannelSource                  │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: The frame parser ([`parse_frames`]), display-name
//!   resolution, heartbeat uptime and the demonstration fallback
//! - **[`source`]**: Frame sources behind the [`DataSource`] trait
//! - **[`options`]**: Panel options loaded from defaults, TOML and environment
//! - **[`app`]**: Application state and selection logic
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### Parsing frames
//!
//! ```
//! use statusboard::{parse_frames, Frame, Status};
//!
//! let frame = Frame::builder()
//!     .time("Time", [1_700_000_000_000, 1_700_000_060_000])
//!     .number("Value", |f| f.values([1.0, 0.0]).label("instance", "https://github.com"))
//!     .build();
//!
//! let services = parse_frames(&[frame], None);
//! assert_eq!(services[0].name, "GitHub");
//! assert_eq!(services[0].status, Status::Down);
//! assert_eq!(services[0].uptime, Some(50.0));
//! ```
//!
//! ### As a library with channel source
//!
//! ```no_run
//! use statusboard::{App, ChannelSource, PanelOptions};
//!
//! let (tx, source) = ChannelSource::create("grafana://dashboard/uptime");
//! let mut app = App::new(Box::new(source), PanelOptions::default());
//!
//! tx.send(Vec::new()).unwrap();
//! app.reload_data();
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod options;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{fallback_services, parse_frames, parse_frames_at, CustomNames, StatusSummary};
pub use options::{DisplayLevel, DisplayMode, OptionsError, PanelOptions};
pub use source::{ChannelSource, DataSource, FileSource, SourceError};
pub use statusboard_types::{
    Field, FieldType, FieldValue, Frame, HeartbeatPoint, HeartbeatStatus, ServiceStatus, Status,
};
