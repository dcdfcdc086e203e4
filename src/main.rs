use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Terminal,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use statusboard::app::{write_export, App};
use statusboard::source::{load_frames, DataSource, FileSource};
use statusboard::{events, parse_frames, ui, DisplayLevel, DisplayMode, PanelOptions};

#[derive(Parser, Debug)]
#[command(name = "statusboard")]
#[command(about = "Uptime-style status cards from dashboard time-series frames")]
struct Args {
    /// Path to the frame document (a JSON list of frames or {"series": [...]})
    #[arg(short, long, default_value = "frames.json")]
    file: PathBuf,

    /// TOML file with panel options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON object mapping instance identifiers to display names
    #[arg(long)]
    custom_names: Option<String>,

    /// Maximum number of services shown
    #[arg(short, long)]
    max_items: Option<usize>,

    /// Card layout: list, grid or compact
    #[arg(short, long)]
    display_mode: Option<DisplayMode>,

    /// Card detail: minimal or full
    #[arg(long)]
    display_level: Option<DisplayLevel>,

    /// Refresh interval in seconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Export parsed services to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Layer command-line overrides on top of loaded options.
    fn apply(&self, options: &mut PanelOptions) {
        if let Some(ref names) = self.custom_names {
            options.custom_names = names.clone();
        }
        if let Some(max_items) = self.max_items {
            options.max_items = max_items;
        }
        if let Some(mode) = self.display_mode {
            options.display_mode = mode;
        }
        if let Some(level) = self.display_level {
            options.display_level = level;
        }
        if let Some(refresh) = self.refresh {
            options.refresh_interval = refresh;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args)?;

    let options = PanelOptions::load_with(args.config.as_deref(), |options| args.apply(options))?;

    if let Some(ref export_path) = args.export {
        return export_to_file(&args.file, export_path, &options);
    }

    let source = Box::new(FileSource::new(&args.file));
    let refresh = Duration::from_secs(options.refresh_interval);
    run_tui(source, options, refresh)
}

/// Install the tracing subscriber.
///
/// Export mode logs to stderr. The interactive UI only logs when a log file
/// is given.
fn init_logging(args: &Args) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("statusboard=info"));

    match (&args.log_file, &args.export) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        (None, Some(_)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
        (None, None) => {}
    }
    Ok(())
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn DataSource>, options: PanelOptions, refresh_interval: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::new(source, options);
    app.reload_data();
    info!(source = app.source_description(), "started");

    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = Paragraph::new(msg)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow));
                let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5)
                    .intersection(area);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(8),    // Cards
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::cards::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                _ => {}
            }
        }

        // Auto-refresh data periodically
        if last_refresh.elapsed() >= refresh_interval {
            app.reload_data();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Parse the frame document once and write the visible services as JSON.
fn export_to_file(frames_path: &Path, export_path: &Path, options: &PanelOptions) -> Result<()> {
    let frames = load_frames(frames_path)
        .with_context(|| format!("Failed to load frames from {}", frames_path.display()))?;
    let services = parse_frames(&frames, options.custom_names());
    write_export(options.limit(&services), export_path)?;

    println!("Exported service status to: {}", export_path.display());
    Ok(())
}
