//! Per-status counts across a list of records.

use serde::Serialize;

use statusboard_types::{ServiceStatus, Status};

/// How many services are in each status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusSummary {
    pub up: usize,
    pub down: usize,
    pub warning: usize,
    pub maintenance: usize,
    pub unknown: usize,
}

impl StatusSummary {
    /// Count services by status.
    pub fn from_services(services: &[ServiceStatus]) -> Self {
        let mut summary = Self::default();
        for service in services {
            match service.status {
                Status::Up => summary.up += 1,
                Status::Down => summary.down += 1,
                Status::Warning => summary.warning += 1,
                Status::Maintenance => summary.maintenance += 1,
                Status::Unknown => summary.unknown += 1,
            }
        }
        summary
    }

    /// Total number of services counted.
    pub fn total(&self) -> usize {
        self.up + self.down + self.warning + self.maintenance + self.unknown
    }

    /// Worst status present: down, then warning, then unknown, then
    /// maintenance. Up when everything is up or nothing was counted.
    pub fn overall(&self) -> Status {
        if self.down > 0 {
            Status::Down
        } else if self.warning > 0 {
            Status::Warning
        } else if self.unknown > 0 {
            Status::Unknown
        } else if self.maintenance > 0 {
            Status::Maintenance
        } else {
            Status::Up
        }
    }
}
