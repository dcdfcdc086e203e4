//! Demonstration records shown when no usable data is available.

use statusboard_types::{HeartbeatPoint, ServiceStatus};

use super::heartbeat::{current_status, uptime_percent};

/// Number of synthetic heartbeat points per demonstration record.
pub const FALLBACK_HISTORY_LEN: usize = 50;

/// Spacing between synthetic heartbeat points.
const HEARTBEAT_INTERVAL_MS: i64 = 60_000;

/// Shape of a synthetic heartbeat history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartbeatPattern {
    /// Up except for two short outages.
    MostlyUp,
    /// A single failed check every ten.
    PeriodicFlaky,
    /// Up until the most recent checks, which are all down.
    RecentDownTail,
    /// Never up.
    AlwaysDown,
}

impl HeartbeatPattern {
    /// Whether the check at position `i` (oldest first) succeeded.
    pub fn is_up(&self, i: usize) -> bool {
        match self {
            HeartbeatPattern::MostlyUp => !matches!(i, 10..=12 | 31..=32),
            HeartbeatPattern::PeriodicFlaky => i % 10 != 3,
            HeartbeatPattern::RecentDownTail => i < FALLBACK_HISTORY_LEN - 8,
            HeartbeatPattern::AlwaysDown => false,
        }
    }

    /// Generate a history ending one interval before `now_ms`.
    pub fn history(&self, now_ms: i64) -> Vec<HeartbeatPoint> {
        (0..FALLBACK_HISTORY_LEN)
            .map(|i| {
                let age = (FALLBACK_HISTORY_LEN - i) as i64 * HEARTBEAT_INTERVAL_MS;
                let value = if self.is_up(i) { 1.0 } else { 0.0 };
                HeartbeatPoint::new(now_ms - age, Some(value))
            })
            .collect()
    }
}

struct DemoService {
    name: &'static str,
    url: &'static str,
    pattern: HeartbeatPattern,
    response_time: u64,
}

const DEMO_SERVICES: [DemoService; 5] = [
    DemoService {
        name: "Google",
        url: "https://google.com",
        pattern: HeartbeatPattern::MostlyUp,
        response_time: 89,
    },
    DemoService {
        name: "GitHub",
        url: "https://github.com",
        pattern: HeartbeatPattern::PeriodicFlaky,
        response_time: 145,
    },
    DemoService {
        name: "Test Service (Flaky)",
        url: "https://unstable-service.com",
        pattern: HeartbeatPattern::RecentDownTail,
        response_time: 312,
    },
    DemoService {
        name: "HTTPBin Status 200",
        url: "https://httpbin.org/status/200",
        pattern: HeartbeatPattern::MostlyUp,
        response_time: 234,
    },
    DemoService {
        name: "HTTPBin Status 500",
        url: "https://httpbin.org/status/500",
        pattern: HeartbeatPattern::AlwaysDown,
        response_time: 0,
    },
];

/// The fixed demonstration set, anchored at `now_ms`.
///
/// Status and uptime follow from each synthetic history. Services that are
/// currently down carry no response time.
pub fn fallback_services(now_ms: i64) -> Vec<ServiceStatus> {
    DEMO_SERVICES
        .iter()
        .map(|demo| {
            let history = demo.pattern.history(now_ms);
            let newest = history.last().copied().unwrap_or_default();
            let status = current_status(newest.value);
            let mut service = ServiceStatus::builder(demo.name)
                .status(status)
                .url(demo.url)
                .last_check(newest.timestamp)
                .uptime(uptime_percent(&history))
                .heartbeats(history)
                .build();
            if status.is_up() {
                service.response_time = Some(demo.response_time);
            }
            service
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusboard_types::Status;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_fallback_has_five_services() {
        let services = fallback_services(NOW);
        assert_eq!(services.len(), 5);
        for service in &services {
            assert_eq!(service.heartbeats().len(), FALLBACK_HISTORY_LEN);
            assert_eq!(service.last_check, Some(NOW - 60_000));
            assert_eq!(service.last_check, service.heartbeats().last().map(|p| p.timestamp));
            assert!(service.url.is_some());
        }
    }

    #[test]
    fn test_fallback_statuses_follow_history() {
        let statuses: Vec<Status> = fallback_services(NOW).iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![Status::Up, Status::Up, Status::Down, Status::Up, Status::Down]
        );
    }

    #[test]
    fn test_fallback_uptimes() {
        let uptimes: Vec<Option<f64>> = fallback_services(NOW).iter().map(|s| s.uptime).collect();
        assert_eq!(
            uptimes,
            vec![Some(90.0), Some(90.0), Some(84.0), Some(90.0), Some(0.0)]
        );
    }

    #[test]
    fn test_down_services_have_no_response_time() {
        for service in fallback_services(NOW) {
            assert_eq!(service.response_time.is_some(), service.status.is_up());
        }
    }

    #[test]
    fn test_history_timestamps() {
        let history = HeartbeatPattern::AlwaysDown.history(NOW);
        assert_eq!(history[0].timestamp, NOW - 50 * 60_000);
        assert_eq!(history[49].timestamp, NOW - 60_000);
        assert!(history.windows(2).all(|w| w[1].timestamp - w[0].timestamp == 60_000));
    }

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(fallback_services(NOW), fallback_services(NOW));
    }
}
