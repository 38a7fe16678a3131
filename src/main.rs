use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use qtify_tui::config::AppConfig;
use qtify_tui::controller::AppController;
use qtify_tui::logging;
use qtify_tui::model::{HttpCatalog, PageModel};
use qtify_tui::view::AppView;

/// Browse album and song sections in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a TOML file describing the sections (defaults to ./qtify.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())?;

    let _log_guard = match logging::init_logging(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!(sections = config.sections.len(), "=== Qtify TUI Starting ===");
    let source = Arc::new(HttpCatalog::new(&config.http)?);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let columns = terminal.size()?.width;
    let model = PageModel::new(config.sections, u32::from(columns).saturating_mul(config.cell_width));
    let mut controller = AppController::new(model, source, config.cell_width);
    controller.start();

    let res = run_app(&mut terminal, &mut controller);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Qtify TUI shutting down");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController,
) -> io::Result<()> {
    loop {
        controller.drain_responses();
        controller.clear_expired_notice();

        let views = controller.model().views();
        let ui_state = controller.model().get_ui_state();

        terminal.draw(|f| {
            AppView::render(f, &views, &ui_state);
        })?;

        // Short poll keeps fetch results flowing onto the screen
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Err(e) = controller.handle_key_event(key) {
                        tracing::warn!(error = %e, "Key handling failed");
                    }
                }
                Event::Resize(columns, _) => controller.on_resize(columns),
                _ => {}
            }
        }

        if controller.model().should_quit() {
            break;
        }
    }

    Ok(())
}
