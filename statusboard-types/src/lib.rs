//! # statusboard-types
//!
//! Core types shared by the statusboard parser and viewer. This crate defines
//! the input shape (columnar time-series [`Frame`]s as a dashboard query engine
//! hands them over) and the output shape ([`ServiceStatus`] records with their
//! [`HeartbeatPoint`] history).
//!
//! ## Features
//!
//! - `serde`: JSON serialization via serde. Records serialize with camelCase
//!   keys and omit absent optional fields.
//!
//! ## Example
//!
//! ```rust
//! use statusboard_types::{Frame, ServiceStatus, Status};
//!
//! let frame = Frame::builder()
//!     .name("probe_success")
//!     .time("Time", [1_700_000_000_000, 1_700_000_060_000])
//!     .number("Value", |f| {
//!         f.values([1.0, 1.0])
//!          .label("instance", "https://example.com")
//!     })
//!     .build();
//!
//! assert_eq!(frame.len(), 2);
//! assert_eq!(frame.number_fields().count(), 1);
//!
//! let service = ServiceStatus::builder("Example")
//!     .status(Status::Up)
//!     .uptime(100.0)
//!     .build();
//! assert!(service.status.is_up());
//! ```

mod frame;
mod status;

pub use frame::*;
pub use status::*;
