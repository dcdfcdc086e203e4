//! Frame parsing - turns host time-series frames into service status records.
//!
//! Each `number` field of a frame is one monitored instance. Its readings
//! (1 = up, 0 = down) paired with the frame's time field become the heartbeat
//! history, the last reading becomes the current status.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use statusboard_types::{Field, Frame, HeartbeatPoint, ServiceStatus};

use super::fallback::fallback_services;
use super::heartbeat::{current_status, uptime_percent};
use super::names::{display_name, CustomNames};

/// Parse frames into service status records.
///
/// Never fails: malformed custom names are ignored, unusable frames and
/// fields are skipped, and when nothing usable remains the demonstration
/// set from [`fallback_services`] is returned instead of an empty list.
pub fn parse_frames(frames: &[Frame], custom_names: Option<&str>) -> Vec<ServiceStatus> {
    parse_frames_at(frames, custom_names, current_timestamp_ms())
}

/// Like [`parse_frames`], anchoring any fallback records at `now_ms`.
pub fn parse_frames_at(
    frames: &[Frame],
    custom_names: Option<&str>,
    now_ms: i64,
) -> Vec<ServiceStatus> {
    let custom = CustomNames::parse(custom_names);

    if frames.is_empty() {
        debug!("no frames supplied, using fallback services");
        return fallback_services(now_ms);
    }

    let mut services = Vec::new();
    for (index, frame) in frames.iter().enumerate() {
        parse_frame(index, frame, &custom, &mut services);
    }

    if services.is_empty() {
        debug!(frames = frames.len(), "no usable series, using fallback services");
        return fallback_services(now_ms);
    }

    services
}

fn parse_frame(index: usize, frame: &Frame, custom: &CustomNames, services: &mut Vec<ServiceStatus>) {
    if frame.fields.is_empty() || frame.is_empty() {
        debug!(frame = index, "skipping empty frame");
        return;
    }

    let Some(time) = frame.time_field() else {
        debug!(frame = index, "skipping frame without a time field");
        return;
    };

    for field in frame.number_fields() {
        if field.len() != time.len() {
            warn!(
                frame = index,
                field = %field.name,
                rows = field.len(),
                expected = time.len(),
                "skipping field with misaligned row count"
            );
            continue;
        }

        let instance = instance_id(field, services.len());
        services.push(build_service(&instance, time, field, custom));
    }
}

/// Identify the instance a field reports on.
fn instance_id(field: &Field, running_count: usize) -> String {
    field
        .label("instance")
        .or_else(|| field.label("target"))
        .or_else(|| Some(field.name.as_str()).filter(|n| !n.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("unknown-{}", running_count))
}

fn build_service(instance: &str, time: &Field, field: &Field, custom: &CustomNames) -> ServiceStatus {
    let heartbeats: Vec<HeartbeatPoint> = time
        .values
        .iter()
        .zip(&field.values)
        .filter_map(|(ts, value)| {
            let ts = ts.as_f64()?;
            Some(HeartbeatPoint::new(ts as i64, value.as_f64()))
        })
        .collect();

    let status = current_status(field.values.last().and_then(|v| v.as_f64()));
    let last_check = time.values.last().and_then(|v| v.as_f64()).map(|ts| ts as i64);

    ServiceStatus {
        name: display_name(instance, &field.labels, custom),
        status,
        last_check,
        response_time: None,
        url: instance.contains("://").then(|| instance.to_string()),
        uptime: Some(uptime_percent(&heartbeats)),
        message: None,
        heartbeat_data: Some(heartbeats),
    }
}

/// Get current timestamp in milliseconds since Unix epoch.
pub fn current_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusboard_types::{FieldBuilder, FieldType, FieldValue, HeartbeatStatus, Status};

    const NOW: i64 = 1_700_000_000_000;

    fn instance_frame(instance: &str, values: &[f64]) -> Frame {
        let times: Vec<i64> = (0..values.len() as i64).map(|i| NOW - 60_000 * (values.len() as i64 - i)).collect();
        Frame::builder()
            .name("probe_success")
            .time("Time", times)
            .number("Value", |f| f.values(values.iter().copied()).label("instance", instance))
            .build()
    }

    #[test]
    fn test_empty_frames_return_fallback() {
        let services = parse_frames_at(&[], None, NOW);
        assert_eq!(services, fallback_services(NOW));
        assert_eq!(services.len(), 5);
    }

    #[test]
    fn test_invalid_custom_names_with_empty_frames() {
        let services = parse_frames_at(&[], Some("invalid json"), NOW);
        assert_eq!(services, fallback_services(NOW));
    }

    #[test]
    fn test_parse_instance_frame() {
        let services = parse_frames_at(&[instance_frame("https://example.com", &[1.0, 0.0])], None, NOW);

        assert_eq!(services.len(), 1);
        let service = &services[0];
        assert_eq!(service.name, "example.com");
        assert_eq!(service.status, Status::Down);
        assert_eq!(service.url.as_deref(), Some("https://example.com"));
        assert_eq!(service.last_check, Some(NOW - 60_000));
        assert_eq!(service.uptime, Some(50.0));
        assert_eq!(service.response_time, None);

        let heartbeats = service.heartbeats();
        assert_eq!(heartbeats.len(), 2);
        assert_eq!(heartbeats[0].status, HeartbeatStatus::Up);
        assert_eq!(heartbeats[1].status, HeartbeatStatus::Down);
        assert_eq!(heartbeats[0].timestamp, NOW - 120_000);
    }

    #[test]
    fn test_custom_name_overrides_heuristics() {
        let frame = Frame::builder()
            .time("Time", [NOW])
            .number("Value", |f| {
                f.values([1.0])
                    .label("instance", "https://example.com")
                    .label("service", "ignored")
            })
            .build();

        let services = parse_frames_at(
            &[frame],
            Some(r#"{"https://example.com":"My Custom Service"}"#),
            NOW,
        );
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "My Custom Service");
        assert_eq!(services[0].status, Status::Up);
    }

    #[test]
    fn test_uptime_rounding() {
        let services = parse_frames_at(&[instance_frame("https://a.io", &[1.0, 0.0, 1.0])], None, NOW);
        assert_eq!(services[0].uptime, Some(66.67));
        assert_eq!(services[0].status, Status::Up);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let frames = vec![
            instance_frame("https://example.com", &[1.0, 1.0, 0.0]),
            instance_frame("https://httpbin.org/status/500", &[0.0, 0.0]),
        ];
        let first = parse_frames(&frames, Some(r#"{"x":"y"}"#));
        let second = parse_frames(&frames, Some(r#"{"x":"y"}"#));
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_follows_frames_then_fields() {
        let multi = Frame::builder()
            .time("Time", [NOW])
            .number("Value", |f| f.values([1.0]).label("instance", "https://b.io"))
            .number("Value", |f| f.values([0.0]).label("instance", "https://c.io"))
            .build();
        let frames = vec![instance_frame("https://a.io", &[1.0]), multi];

        let names: Vec<String> = parse_frames_at(&frames, None, NOW).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["a.io", "b.io", "c.io"]);
    }

    #[test]
    fn test_instance_falls_back_to_target_then_field_name() {
        let frame = Frame::builder()
            .time("Time", [NOW])
            .number("Value", |f| f.values([1.0]).label("target", "db:5432"))
            .number("api-health", |f| f.values([1.0]))
            .build();

        let services = parse_frames_at(&[frame], None, NOW);
        assert_eq!(services[0].name, "db:5432");
        assert_eq!(services[0].url, None);
        assert_eq!(services[1].name, "api-health");
    }

    #[test]
    fn test_unnamed_field_gets_running_placeholder() {
        let first = instance_frame("https://a.io", &[1.0]);
        let second = Frame::builder()
            .time("Time", [NOW])
            .number("", |f| f.values([1.0]))
            .build();

        let services = parse_frames_at(&[first, second], None, NOW);
        assert_eq!(services[1].name, "unknown-1");
    }

    #[test]
    fn test_unusable_frames_fall_back() {
        let no_time = Frame::builder()
            .number("Value", |f| f.values([1.0]).label("instance", "https://a.io"))
            .build();
        let no_numbers = Frame::builder().time("Time", [NOW]).build();
        let no_rows = Frame::builder()
            .time("Time", Vec::<i64>::new())
            .number("Value", |f| f.label("instance", "https://a.io"))
            .build();

        let services = parse_frames_at(&[Frame::new(), no_time, no_numbers, no_rows], None, NOW);
        assert_eq!(services, fallback_services(NOW));
    }

    #[test]
    fn test_misaligned_field_is_skipped() {
        let frame = Frame::builder()
            .time("Time", [NOW - 60_000, NOW])
            .number("Value", |f| f.values([1.0]).label("instance", "https://short.io"))
            .number("Value", |f| f.values([1.0, 1.0]).label("instance", "https://ok.io"))
            .build();

        let services = parse_frames_at(&[frame], None, NOW);
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "ok.io");
    }

    #[test]
    fn test_non_numeric_readings_are_unknown() {
        let frame = Frame::builder()
            .time("Time", [NOW - 60_000, NOW])
            .field(
                FieldBuilder::new("Value", FieldType::Number)
                    .value(1.0)
                    .value(FieldValue::Null)
                    .label("instance", "https://a.io")
                    .build(),
            )
            .build();

        let service = &parse_frames_at(&[frame], None, NOW)[0];
        assert_eq!(service.status, Status::Unknown);
        assert_eq!(service.heartbeats()[1].status, HeartbeatStatus::Unknown);
        assert_eq!(service.heartbeats()[1].value, None);
        assert_eq!(service.uptime, Some(50.0));
    }

    #[test]
    fn test_rows_without_numeric_timestamp_are_dropped() {
        let frame = Frame::builder()
            .field(Field::new(
                "Time",
                FieldType::Time,
                vec![FieldValue::Text("soon".into()), FieldValue::Number(NOW as f64)],
            ))
            .number("Value", |f| f.values([0.0, 1.0]).label("instance", "https://a.io"))
            .build();

        let service = &parse_frames_at(&[frame], None, NOW)[0];
        assert_eq!(service.heartbeats().len(), 1);
        assert_eq!(service.uptime, Some(100.0));
        assert_eq!(service.last_check, Some(NOW));
    }

    #[test]
    fn test_service_labels_name_the_record() {
        let frame = Frame::builder()
            .time("Time", [NOW])
            .number("Value", |f| {
                f.values([1.0])
                    .label("instance", "https://www.google.com")
                    .label("job", "checkout")
            })
            .number("Value", |f| {
                f.values([1.0])
                    .label("instance", "https://www.google.com")
                    .label("job", "blackbox")
            })
            .build();

        let services = parse_frames_at(&[frame], None, NOW);
        assert_eq!(services[0].name, "checkout");
        assert_eq!(services[1].name, "Google");
    }
}
