//! Heartbeat history statistics.

use statusboard_types::{HeartbeatPoint, HeartbeatStatus, Status};

/// Uptime percentage over a heartbeat history.
///
/// Counts the points whose reading is exactly 1 and rounds the percentage
/// to two decimal places. An empty history has 0% uptime.
pub fn uptime_percent(points: &[HeartbeatPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let up = points.iter().filter(|p| p.is_up()).count();
    round2(up as f64 / points.len() as f64 * 100.0)
}

/// Status of the most recent reading.
pub fn current_status(last_value: Option<f64>) -> Status {
    HeartbeatStatus::classify(last_value).into()
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[Option<f64>]) -> Vec<HeartbeatPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| HeartbeatPoint::new(i as i64 * 60_000, *v))
            .collect()
    }

    #[test]
    fn test_uptime_two_of_three() {
        let history = points(&[Some(1.0), Some(0.0), Some(1.0)]);
        assert_eq!(uptime_percent(&history), 66.67);
    }

    #[test]
    fn test_uptime_empty_history() {
        assert_eq!(uptime_percent(&[]), 0.0);
    }

    #[test]
    fn test_uptime_ignores_non_binary_readings() {
        let history = points(&[Some(1.0), Some(0.5), None, Some(1.0)]);
        assert_eq!(uptime_percent(&history), 50.0);
    }

    #[test]
    fn test_uptime_all_up() {
        let history = points(&[Some(1.0); 7]);
        assert_eq!(uptime_percent(&history), 100.0);
    }

    #[test]
    fn test_current_status() {
        assert_eq!(current_status(Some(1.0)), Status::Up);
        assert_eq!(current_status(Some(0.0)), Status::Down);
        assert_eq!(current_status(Some(3.0)), Status::Unknown);
        assert_eq!(current_status(None), Status::Unknown);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(99.999), 100.0);
        assert_eq!(round2(85.404), 85.4);
    }
}
