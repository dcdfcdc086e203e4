//! Frame parsing and record processing.
//!
//! This module turns host-supplied time-series frames into service status
//! records ready for display.
//!
//! ## Submodules
//!
//! - [`parse`]: The frame parser ([`parse_frames`])
//! - [`fallback`]: Demonstration records used when no data is usable
//! - [`names`]: Display name resolution and the custom name map
//! - [`heartbeat`]: Uptime and current-status computation
//! - [`format`]: Response time, uptime and age formatting
//! - [`summary`]: Per-status counts
//!
//! ## Data Flow
//!
//! ```text
//! Vec<Frame> (host JSON)      customNames (JSON string)
//!        │                           │
//!        ▼                           ▼
//! parse_frames() ◀────────── CustomNames::parse()
//!        │
//!        ├──▶ ServiceStatus per number field (heartbeats, uptime, name)
//!        │
//!        └──▶ fallback_services() when nothing is usable
//! ```

pub mod fallback;
pub mod format;
pub mod heartbeat;
pub mod names;
pub mod parse;
pub mod summary;

pub use fallback::{fallback_services, HeartbeatPattern, FALLBACK_HISTORY_LEN};
pub use format::{format_age, format_response_time, format_uptime};
pub use names::{display_name, CustomNames, CustomNamesError, HostRule, RuleName, HOST_RULES};
pub use parse::{current_timestamp_ms, parse_frames, parse_frames_at};
pub use summary::StatusSummary;
