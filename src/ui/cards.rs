//! Service card rendering.
//!
//! Each record is drawn as a card: a title line, a heartbeat bar and, at the
//! full display level, a stats line. The display mode decides how cards are
//! laid out.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use statusboard_types::{HeartbeatPoint, ServiceStatus};

use crate::app::App;
use crate::data::{
    current_timestamp_ms, format_age, format_response_time, format_uptime, FALLBACK_HISTORY_LEN,
};
use crate::options::{DisplayLevel, DisplayMode, PanelOptions};
use crate::ui::Theme;

/// Glyph for a service's current status.
const STATUS_GLYPH: &str = "●";

/// Glyph for one heartbeat point.
const HEARTBEAT_GLYPH: &str = "▮";

/// Width of a grid card including borders.
const GRID_CARD_WIDTH: u16 = 36;

/// Render the visible services in the configured display mode.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let services = app.visible_services();
    let title = format!(
        " Services ({}) [{}] ",
        services.len(),
        app.options.display_mode.label()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if services.is_empty() {
        let message = match app.load_error {
            Some(ref err) => format!("No services: {}", err),
            None => "Waiting for data...".to_string(),
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    match app.options.display_mode {
        DisplayMode::List => render_list(frame, app, services, area, block),
        DisplayMode::Grid => render_grid(frame, app, services, area, block),
        DisplayMode::Compact => render_compact(frame, app, services, area, block),
    }
}

fn render_list(frame: &mut Frame, app: &App, services: &[ServiceStatus], area: Rect, block: Block) {
    let now = current_timestamp_ms();
    let bar_width = area.width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = services
        .iter()
        .map(|s| {
            let mut lines = card_lines(s, &app.options, &app.theme, now, bar_width);
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_grid(frame: &mut Frame, app: &App, services: &[ServiceStatus], area: Rect, block: Block) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = (inner.width / GRID_CARD_WIDTH).max(1) as usize;
    let card_height = card_height(&app.options) + 2;
    let visible_rows = (inner.height / card_height).max(1) as usize;

    // Scroll by whole rows so the selected card stays on screen
    let selected_row = app.selected_index / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_areas = Layout::vertical(vec![Constraint::Length(card_height); visible_rows]).split(inner);
    let now = current_timestamp_ms();

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + row_offset) * columns;
        if start >= services.len() {
            break;
        }
        let end = (start + columns).min(services.len());

        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (index, (service, cell)) in services[start..end].iter().zip(cells.iter()).enumerate() {
            let selected = start + index == app.selected_index;
            let border_style = if selected {
                Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.border)
            };
            let card = Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(border_style);
            let bar_width = cell.width.saturating_sub(2) as usize;
            let lines = card_lines(service, &app.options, &app.theme, now, bar_width);
            frame.render_widget(Paragraph::new(lines).block(card), *cell);
        }
    }
}

fn render_compact(frame: &mut Frame, app: &App, services: &[ServiceStatus], area: Rect, block: Block) {
    let mut spans = Vec::with_capacity(services.len() * 2);
    for (i, service) in services.iter().enumerate() {
        let mut name_style = Style::default();
        if i == app.selected_index {
            name_style = name_style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(
            format!("{} ", STATUS_GLYPH),
            app.theme.status_style(service.status),
        ));
        spans.push(Span::styled(service.name.clone(), name_style));
        spans.push(Span::raw("   "));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(service) = app.selected_service() {
        lines.push(Line::from(""));
        lines.extend(card_lines(
            service,
            &app.options,
            &app.theme,
            current_timestamp_ms(),
            area.width.saturating_sub(2) as usize,
        ));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Number of text lines in a card for the given options.
fn card_height(options: &PanelOptions) -> u16 {
    match options.display_level {
        DisplayLevel::Minimal => 2,
        DisplayLevel::Full => 3,
    }
}

/// Build the text lines of one card.
pub fn card_lines(
    service: &ServiceStatus,
    options: &PanelOptions,
    theme: &Theme,
    now_ms: i64,
    bar_width: usize,
) -> Vec<Line<'static>> {
    let mut title = vec![
        Span::styled(format!("{} ", STATUS_GLYPH), theme.status_style(service.status)),
        Span::styled(service.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if options.show_labels {
        title.push(Span::styled(
            format!(" [{}]", service.status.label()),
            theme.status_style(service.status),
        ));
    }
    if options.show_urls {
        if let Some(ref url) = service.url {
            title.push(Span::styled(
                format!("  {}", url),
                Style::default().add_modifier(Modifier::DIM | Modifier::UNDERLINED),
            ));
        }
    }

    let mut lines = vec![Line::from(title), heartbeat_bar(service.heartbeats(), theme, bar_width)];

    if options.display_level == DisplayLevel::Full {
        lines.push(stats_line(service, options, now_ms));
    }

    lines
}

/// Render the most recent heartbeats as coloured glyphs, newest on the right.
///
/// At most 50 points are drawn, fewer when `max_width` is smaller.
pub fn heartbeat_bar(points: &[HeartbeatPoint], theme: &Theme, max_width: usize) -> Line<'static> {
    if points.is_empty() {
        return Line::from(Span::styled(
            "no heartbeat data",
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    let shown = points.len().min(FALLBACK_HISTORY_LEN).min(max_width.max(1));
    let spans: Vec<Span> = points[points.len() - shown..]
        .iter()
        .map(|p| Span::styled(HEARTBEAT_GLYPH, theme.heartbeat_style(p.status)))
        .collect();
    Line::from(spans)
}

fn stats_line(service: &ServiceStatus, options: &PanelOptions, now_ms: i64) -> Line<'static> {
    let mut parts = Vec::new();
    if options.show_response_time {
        parts.push(format!("resp {}", format_response_time(service.response_time)));
    }
    parts.push(format!("uptime {}", format_uptime(service.uptime)));
    if options.show_last_check {
        parts.push(format!("checked {}", format_age(service.last_check, now_ms)));
    }
    if let Some(ref message) = service.message {
        parts.push(message.clone());
    }

    Line::from(Span::styled(
        parts.join(" │ "),
        Style::default().add_modifier(Modifier::DIM),
    ))
}
