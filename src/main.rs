use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::Rect;
use std::io::stdout;
use std::path::{Path, PathBuf};

use promobar::App;
use promobar::config::{self, ConfigResult};
use promobar::coupon::{BuiltinCatalog, Catalog, CatalogProvider, FileCatalog};
use promobar::error::PromobarError;

/// Promotional coupon carousel for the terminal
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Browse promotional coupons in a scrollable carousel and apply one"
)]
struct Args {
    /// JSON file with an array of coupons (uses the built-in coupons if not provided)
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/promobar-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/promobar-debug.log")
            .expect("Failed to open /tmp/promobar-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== PROMOBAR DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();

    let args = Args::parse();

    // A bad catalog is reported before the terminal is taken over
    let catalog = load_catalog(args.catalog.as_deref())?;

    let terminal = init_terminal()?;
    let result = run(terminal, catalog, config_result);

    restore_terminal()?;
    let applied = result?;

    // Output after terminal restore to prevent corruption
    if let Some(code) = applied {
        println!("{}", code);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== PROMOBAR DEBUG SESSION ENDED ===");

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, PromobarError> {
    let catalog = match path {
        Some(path) => FileCatalog::new(path).load()?,
        None => BuiltinCatalog.load()?,
    };
    Ok(catalog)
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(PromobarError::from(e).into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

/// Run the event loop. Returns the code of the last applied coupon.
fn run(
    mut terminal: DefaultTerminal,
    catalog: Catalog,
    config_result: ConfigResult,
) -> Result<Option<String>> {
    let size = terminal.size()?;
    let mut app = App::new(
        catalog,
        &config_result.config,
        Rect::new(0, 0, size.width, size.height),
    );

    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app.applied)
}
