// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod data;
mod events;
mod poll;
mod render;
mod settings;
mod ui;

use app::App;
use poll::{PollCycle, StatsClient};
use render::Badge;
use settings::Settings;
use ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "perfwatch")]
#[command(about = "Terminal dashboard for live system performance metrics served over HTTP")]
struct Args {
    /// Backend base URL (e.g. http://raspberrypi:5000)
    #[arg(short, long)]
    url: Option<String>,

    /// Refresh interval in milliseconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Averaging window in milliseconds passed to the backend
    #[arg(long)]
    dt: Option<u64>,

    /// Averaging window for the immediate startup tick, milliseconds
    #[arg(long)]
    warmup: Option<u64>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Auto)]
    theme: ThemeChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeChoice {
    Auto,
    Dark,
    Light,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(url) = args.url {
        settings.server_url = url;
    }
    if let Some(refresh) = args.refresh {
        settings.refresh_ms = refresh;
    }
    if let Some(dt) = args.dt {
        settings.averaging_ms = dt;
    }
    if let Some(warmup) = args.warmup {
        settings.warmup_ms = warmup;
    }
    if let Some(timeout) = args.timeout {
        settings.timeout_secs = timeout;
    }

    let theme = match args.theme {
        ThemeChoice::Auto => Theme::auto_detect(),
        ThemeChoice::Dark => Theme::dark(),
        ThemeChoice::Light => Theme::light(),
    };

    // The poll cycle runs on tokio; the TUI loop stays on the main thread
    // while the runtime lives in the background.
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let client = StatsClient::builder()
        .base_url(&settings.server_url)
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()?;
    let poll = PollCycle::spawn(client, settings.schedule());

    run_tui(poll, theme)
}

/// Run the TUI with the given poll cycle
fn run_tui(mut poll: PollCycle, theme: Theme) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(theme);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, &mut poll);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    poll: &mut PollCycle,
) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 40;
    const MIN_HEIGHT: u16 = 10;

    let mut shown_badge: Option<Badge> = None;

    while app.running {
        // Apply every pending poll outcome before drawing, so one tick's
        // response lands on screen as a whole
        while let Some(event) = poll.try_next() {
            app.apply_event(event);
        }

        // Mirror the badge into the terminal title (the favicon analog)
        if app.surface.badge != shown_badge {
            let title = match app.surface.badge {
                Some(Badge::Ok) => "perfwatch ✔",
                Some(Badge::Error) => "perfwatch ✘",
                None => "perfwatch",
            };
            execute!(terminal.backend_mut(), SetTitle(title))?;
            shown_badge = app.surface.badge;
        }

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center);
                frame.render_widget(paragraph, area);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(6),    // Panel grid
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::panels::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            if app.show_detail_overlay {
                ui::detail::render_overlay(frame, app, area);
            }

            if app.surface.error_overlay {
                ui::common::render_error_overlay(frame, app, area);
            }

            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for terminal events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, poll, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
