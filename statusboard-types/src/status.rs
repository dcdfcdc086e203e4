//! Service status records - the output of frame parsing.

/// Status of a monitored service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    Up,
    Down,
    Maintenance,
    Warning,
    #[default]
    Unknown,
}

impl Status {
    /// Display label ("Up", "Down", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Status::Up => "Up",
            Status::Down => "Down",
            Status::Maintenance => "Maintenance",
            Status::Warning => "Warning",
            Status::Unknown => "Unknown",
        }
    }

    /// Returns true if the service is up.
    pub fn is_up(&self) -> bool {
        *self == Status::Up
    }
}

/// Status of a single heartbeat observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeartbeatStatus {
    Up,
    Down,
    #[default]
    Unknown,
}

impl HeartbeatStatus {
    /// Classify a raw up/down reading: 1 is up, 0 is down, anything else
    /// (including a missing reading) is unknown.
    pub fn classify(value: Option<f64>) -> Self {
        match value {
            Some(v) if v == 1.0 => HeartbeatStatus::Up,
            Some(v) if v == 0.0 => HeartbeatStatus::Down,
            _ => HeartbeatStatus::Unknown,
        }
    }
}

impl From<HeartbeatStatus> for Status {
    fn from(status: HeartbeatStatus) -> Self {
        match status {
            HeartbeatStatus::Up => Status::Up,
            HeartbeatStatus::Down => Status::Down,
            HeartbeatStatus::Unknown => Status::Unknown,
        }
    }
}

/// One sampled observation of a target's up/down value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartbeatPoint {
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,

    /// Classified status of the reading.
    pub status: HeartbeatStatus,

    /// Raw numeric reading; `None` when the cell was not a number.
    pub value: Option<f64>,
}

impl HeartbeatPoint {
    /// Create a point, classifying the reading.
    pub fn new(timestamp: i64, value: Option<f64>) -> Self {
        Self {
            timestamp,
            status: HeartbeatStatus::classify(value),
            value,
        }
    }

    /// Returns true if the reading is exactly 1.
    pub fn is_up(&self) -> bool {
        self.value == Some(1.0)
    }
}

/// A display record for one monitored service.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ServiceStatus {
    /// Display name.
    pub name: String,

    /// Current status.
    pub status: Status,

    /// Unix timestamp in milliseconds of the most recent check.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub last_check: Option<i64>,

    /// Response time in milliseconds.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub response_time: Option<u64>,

    /// Link to the monitored target, when the identifier is a URL.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub url: Option<String>,

    /// Uptime percentage (0-100) over the heartbeat history.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub uptime: Option<f64>,

    /// Free-form status message.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub message: Option<String>,

    /// Heartbeat history, oldest first.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub heartbeat_data: Option<Vec<HeartbeatPoint>>,
}

impl ServiceStatus {
    /// Create a record with just a name and status.
    pub fn new(name: impl Into<String>, status: Status) -> Self {
        Self {
            name: name.into(),
            status,
            ..Default::default()
        }
    }

    /// Create a builder for a record.
    pub fn builder(name: impl Into<String>) -> ServiceStatusBuilder {
        ServiceStatusBuilder::new(name)
    }

    /// Heartbeat history, or an empty slice.
    pub fn heartbeats(&self) -> &[HeartbeatPoint] {
        self.heartbeat_data.as_deref().unwrap_or(&[])
    }
}

/// Builder for `ServiceStatus`.
#[derive(Debug)]
pub struct ServiceStatusBuilder {
    service: ServiceStatus,
}

impl ServiceStatusBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            service: ServiceStatus::new(name, Status::Unknown),
        }
    }

    /// Set the status.
    pub fn status(mut self, status: Status) -> Self {
        self.service.status = status;
        self
    }

    /// Set the last check timestamp (milliseconds since Unix epoch).
    pub fn last_check(mut self, ts: i64) -> Self {
        self.service.last_check = Some(ts);
        self
    }

    /// Set the response time in milliseconds.
    pub fn response_time(mut self, ms: u64) -> Self {
        self.service.response_time = Some(ms);
        self
    }

    /// Set the target URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.service.url = Some(url.into());
        self
    }

    /// Set the uptime percentage.
    pub fn uptime(mut self, uptime: f64) -> Self {
        self.service.uptime = Some(uptime);
        self
    }

    /// Set a status message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.service.message = Some(message.into());
        self
    }

    /// Set the heartbeat history.
    pub fn heartbeats(mut self, points: Vec<HeartbeatPoint>) -> Self {
        self.service.heartbeat_data = Some(points);
        self
    }

    /// Build the record.
    pub fn build(self) -> ServiceStatus {
        self.service
    }
}
