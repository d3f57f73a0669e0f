//! Folio - terminal portfolio for Muhammad Qasim.
//!
//! One long scrollable page of sections with one-shot reveal animations,
//! a sticky nav bar, and a background resume download.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use ratatui::widgets::Block;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_tui::app::App;
use folio_tui::components::{render_nav_bar, render_status_footer, render_toasts_with_areas};
use folio_tui::config::TuiConfig;
use folio_tui::effects::menu_animations::create_menu_open_animation;
use folio_tui::theme::{FolioTheme, get_theme, update_theme};
use folio_tui::views::{GlobalLayout, PageMetrics, render_menu, render_page, render_splash};

/// Base duration for the compact-menu open transition.
const MENU_ANIM_MS: u64 = 300;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Terminal portfolio for Muhammad Qasim")]
struct Args {
    /// Theme preset override ("dark", "light", "custom")
    #[arg(long)]
    theme: Option<String>,

    /// Disable all animations for this run
    #[arg(long)]
    no_animations: bool,

    /// Download the resume and exit without starting the TUI
    #[arg(long)]
    fetch_resume: bool,
}

/// Restores the terminal on drop, however the app exits.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

fn init_logging() {
    let log_enabled = std::env::var("FOLIO_LOG").is_ok();
    if log_enabled {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "folio_core=debug,folio_tui=debug,warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "off".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(|| io::sink()))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = TuiConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: {}. Using default configuration.", e);
        TuiConfig::default()
    });
    if let Some(theme) = args.theme {
        config.theme.preset = theme;
    }
    if args.no_animations {
        config.animations.enabled = false;
    }
    update_theme(FolioTheme::from_config(&config));

    // Headless mode: fetch the resume and exit.
    if args.fetch_resume {
        let dir = config.resume.target_dir();
        let path =
            folio_core::resume::download(&config.resume.url, &dir, &config.resume.filename).await?;
        println!("Resume saved to {}", path.display());
        return Ok(());
    }

    let _guard = TerminalGuard::acquire()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Show splash screen, skippable with any key press.
    let start_time = std::time::Instant::now();
    let splash_duration = Duration::from_millis(800);
    while start_time.elapsed() < splash_duration {
        terminal.draw(|frame| {
            render_splash(frame, frame.area(), "Loading portfolio...");
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    break;
                }
            }
        }
    }

    let mut app = App::new(config);

    // Track frame timing for animations
    let mut last_frame_time = std::time::Instant::now();

    loop {
        let delta_time = last_frame_time.elapsed();
        last_frame_time = std::time::Instant::now();

        // Per-frame housekeeping: expired toasts, download events, smooth
        // scroll progress.
        app.toast_manager.update();
        app.poll_download();
        app.scroll.tick(delta_time);

        terminal.draw(|frame| {
            let theme = get_theme();
            let area = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(theme.bg_primary)),
                area,
            );

            let [nav_area, page_area, status_area] = GlobalLayout::create(area);

            // Lay the page out for the current width, then render the
            // scrolled window. The tracker is fed inside render_page.
            let metrics = PageMetrics::compute(page_area.width, page_area.height);
            app.scroll.clamp_to(metrics.max_scroll());
            let offset = app.scroll.offset();
            render_page(frame, page_area, &metrics, &mut app.tracker, offset);
            app.metrics = Some(metrics);

            // Sections that crossed the reveal threshold this frame get
            // their one-shot entrance effect.
            app.trigger_reveal_effects(page_area);

            render_nav_bar(
                frame,
                nav_area,
                &app.nav,
                app.highlighted_nav,
                app.tracker.scrolled(),
            );
            render_status_footer(
                frame,
                status_area,
                app.nav.active(),
                app.tracker.revealed_count(),
                app.downloading(),
            );

            // Compact-menu overlay on top of the page.
            if app.nav.menu_open() {
                let (backdrop_area, menu_area) =
                    render_menu(frame, page_area, &app.nav, app.highlighted_nav);
                if !app.previous_menu_open {
                    let ms = app.config.animations.scaled_ms(MENU_ANIM_MS);
                    if ms > 0 {
                        app.effect_manager
                            .add_effect(create_menu_open_animation(backdrop_area, menu_area, ms));
                    }
                }
            }

            // Toasts on top of everything.
            let _toast_areas = render_toasts_with_areas(frame, area, &app.toast_manager);

            // Process and apply effects after all rendering is complete.
            app.effect_manager
                .process_effects(delta_time, frame.buffer_mut(), area);
        })?;

        // Update previous state for transition detection (after rendering)
        app.previous_menu_open = app.nav.menu_open();

        // Handle events with timeout
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code, key.modifiers);
                }
                Event::Resize(_, _) => {
                    // Next frame recomputes the layout for the new size.
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
