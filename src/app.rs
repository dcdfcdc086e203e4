//! Application state and navigation logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use serde_json::json;
use tracing::{debug, info};

use statusboard_types::{Frame, ServiceStatus};

use crate::data::{parse_frames, StatusSummary};
use crate::options::PanelOptions;
use crate::source::DataSource;
use crate::ui::Theme;

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source
    source: Box<dyn DataSource>,
    frames: Option<Vec<Frame>>,
    pub services: Vec<ServiceStatus>,
    pub last_updated: Option<Instant>,
    pub load_error: Option<String>,

    // View
    pub options: PanelOptions,
    pub selected_index: usize,
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given data source and panel options.
    pub fn new(source: Box<dyn DataSource>, options: PanelOptions) -> Self {
        Self::with_theme(source, options, Theme::auto_detect())
    }

    /// Create a new App with an explicit theme.
    pub fn with_theme(source: Box<dyn DataSource>, options: PanelOptions, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            frames: None,
            services: Vec::new(),
            last_updated: None,
            load_error: None,
            options,
            selected_index: 0,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < Duration::from_secs(3) => Some(msg),
            _ => None,
        }
    }

    /// Poll the data source for new frames and re-parse them.
    ///
    /// Returns true if new frames were received.
    pub fn reload_data(&mut self) -> bool {
        let polled = self.source.poll();
        self.load_error = self.source.error().map(str::to_string);

        let Some(frames) = polled else {
            return false;
        };

        debug!(frames = frames.len(), "received frames");
        self.frames = Some(frames);
        self.reparse();
        true
    }

    /// Re-run parsing on the most recent frames with the current options.
    pub fn reparse(&mut self) {
        let Some(ref frames) = self.frames else {
            return;
        };
        self.services = parse_frames(frames, self.options.custom_names());
        self.last_updated = Some(Instant::now());
        self.clamp_selection();
    }

    /// The records shown, after applying `max_items`.
    pub fn visible_services(&self) -> &[ServiceStatus] {
        self.options.limit(&self.services)
    }

    /// The currently selected record.
    pub fn selected_service(&self) -> Option<&ServiceStatus> {
        self.visible_services().get(self.selected_index)
    }

    /// Status counts over the visible records.
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_services(self.visible_services())
    }

    fn clamp_selection(&mut self) {
        let max = self.visible_services().len().saturating_sub(1);
        self.selected_index = self.selected_index.min(max);
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.visible_services().len().saturating_sub(1);
        self.selected_index = (self.selected_index + n).min(max);
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_index = self.selected_index.saturating_sub(n);
    }

    /// Jump to the first item.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last item.
    pub fn select_last(&mut self) {
        self.selected_index = self.visible_services().len().saturating_sub(1);
    }

    /// Cycle list → grid → compact.
    pub fn cycle_display_mode(&mut self) {
        self.options.display_mode = self.options.display_mode.next();
        self.set_status_message(format!("Display mode: {}", self.options.display_mode.label()));
    }

    /// Switch between minimal and full cards.
    pub fn toggle_display_level(&mut self) {
        self.options.display_level = self.options.display_level.toggle();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the visible records to a JSON file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        if self.last_updated.is_none() {
            anyhow::bail!("No data to export");
        }
        write_export(self.visible_services(), path)
    }
}

/// Build the export document for a list of records.
pub fn export_document(services: &[ServiceStatus]) -> serde_json::Value {
    json!({
        "summary": StatusSummary::from_services(services),
        "services": services,
    })
}

/// Write the export document as pretty JSON.
pub fn write_export(services: &[ServiceStatus], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&export_document(services))?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), services = services.len(), "exported services");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ChannelSource;
    use statusboard_types::Status;

    fn frame(instances: &[&str]) -> Frame {
        instances
            .iter()
            .fold(Frame::builder().time("Time", [1_700_000_000_000]), |b, instance| {
                b.number("Value", |f| f.values([1.0]).label("instance", *instance))
            })
            .build()
    }

    fn app_with_channel() -> (std::sync::mpsc::Sender<Vec<Frame>>, App) {
        let (tx, source) = ChannelSource::create("test");
        let app = App::with_theme(Box::new(source), PanelOptions::default(), Theme::dark());
        (tx, app)
    }

    #[test]
    fn test_reload_parses_frames() {
        let (tx, mut app) = app_with_channel();
        assert!(!app.reload_data());
        assert!(app.services.is_empty());

        tx.send(vec![frame(&["https://a.io", "https://b.io"])]).unwrap();
        assert!(app.reload_data());
        assert_eq!(app.services.len(), 2);
        assert_eq!(app.services[0].name, "a.io");
        assert!(app.last_updated.is_some());
    }

    #[test]
    fn test_empty_frames_show_fallback() {
        let (tx, mut app) = app_with_channel();
        tx.send(Vec::new()).unwrap();
        app.reload_data();
        assert_eq!(app.services.len(), 5);
    }

    #[test]
    fn test_reparse_applies_custom_names() {
        let (tx, mut app) = app_with_channel();
        tx.send(vec![frame(&["https://a.io"])]).unwrap();
        app.reload_data();

        app.options.custom_names = r#"{"https://a.io":"Alpha"}"#.to_string();
        app.reparse();
        assert_eq!(app.services[0].name, "Alpha");
    }

    #[test]
    fn test_selection_is_bounded_by_max_items() {
        let (tx, mut app) = app_with_channel();
        app.options.max_items = 2;
        tx.send(vec![frame(&["https://a.io", "https://b.io", "https://c.io"])]).unwrap();
        app.reload_data();

        assert_eq!(app.visible_services().len(), 2);
        app.select_next_n(10);
        assert_eq!(app.selected_index, 1);
        app.select_prev_n(10);
        assert_eq!(app.selected_index, 0);
        app.select_last();
        assert_eq!(app.selected_service().map(|s| s.name.as_str()), Some("b.io"));
    }

    #[test]
    fn test_summary_counts_visible_services() {
        let (tx, mut app) = app_with_channel();
        tx.send(vec![frame(&["https://a.io", "https://b.io"])]).unwrap();
        app.reload_data();
        let summary = app.summary();
        assert_eq!(summary.up, 2);
        assert_eq!(summary.overall(), Status::Up);
    }

    #[test]
    fn test_display_toggles() {
        let (_tx, mut app) = app_with_channel();
        app.cycle_display_mode();
        assert_eq!(app.options.display_mode, crate::options::DisplayMode::Grid);
        assert!(app.get_status_message().is_some());
        app.toggle_display_level();
        assert_eq!(app.options.display_level, crate::options::DisplayLevel::Minimal);
    }

    #[test]
    fn test_export_requires_data() {
        let (_tx, app) = app_with_channel();
        let dir = tempfile::tempdir().unwrap();
        assert!(app.export_state(&dir.path().join("out.json")).is_err());
    }

    #[test]
    fn test_export_document() {
        let services = vec![
            ServiceStatus::new("a", Status::Up),
            ServiceStatus::new("b", Status::Down),
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        write_export(&services, &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["summary"]["up"], 1);
        assert_eq!(written["summary"]["down"], 1);
        assert_eq!(written["services"][1]["status"], "down");
    }
}
