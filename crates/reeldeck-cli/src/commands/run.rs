use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use reeldeck_core::{AppConfig, Catalog};
use reeldeck_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler, PosterLoadResult},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    poster::download_poster,
    widgets::{
        FeaturedWidget, NavBarWidget, PopupWidget, StatusBarWidget, ToolbarWidget, WatchingWidget,
    },
};

pub async fn run(config: Arc<AppConfig>, catalog: Catalog) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Reeldeck")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config.clone(), catalog);

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation.fps);

    // Channel for async poster download results
    let (img_tx, mut img_rx) = mpsc::unbounded_channel::<PosterLoadResult>();

    // Checked at the END of each iteration to determine the NEXT
    // iteration's tick rate
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Process any completed poster loads (non-blocking)
        while let Ok(result) = img_rx.try_recv() {
            handle_poster_result(&mut app, result);
        }

        // Kick off downloads for posters not yet in the cache
        for url in app.poster_urls_needing_load() {
            app.poster_cache.start_loading(&url);
            spawn_poster_load(url, img_tx.clone());
        }

        // Advance card scale tweens
        app.update_animations();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5), // toolbar + headline
                    Constraint::Min(8),    // featured carousel
                    Constraint::Length(8), // continue watching
                    Constraint::Length(4), // nav bar
                    Constraint::Length(1), // status bar
                ])
                .split(size);

            ToolbarWidget::render(frame, main_layout[0], &app);
            FeaturedWidget::render(frame, main_layout[1], &mut app);
            WatchingWidget::render(frame, main_layout[2], &app);
            NavBarWidget::render(frame, main_layout[3], &mut app);
            StatusBarWidget::render(frame, main_layout[4], &app);

            if app.mode == Mode::Help {
                PopupWidget::render_help(frame, &app);
            }
        })?;

        // Handle events (faster tick rate while cards are mid-tween)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app);
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(_, _) => {
                    // Next draw re-reads the viewport and re-clamps the
                    // carousel
                }
                AppEvent::Tick => {}
            }
        }

        // Re-aim the animators at whatever the scroll state now wants, so
        // the fast tick rate kicks in on the very next iteration
        app.retarget_card_scales();
        needs_fast_update = app.cards_animating();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Apply an input action to the app state
fn handle_action(app: &mut App, action: Action) {
    // A key sequence is either completed or abandoned by the next action
    app.clear_pending_key();

    match action {
        Action::Quit => app.should_quit = true,
        Action::FocusNext => app.focus_next(),
        Action::FocusPrev => app.focus_prev(),
        Action::MoveDown => app.focus_down(),
        Action::MoveUp => app.focus_up(),
        Action::MoveRight => app.move_right(),
        Action::MoveLeft => app.move_left(),
        Action::JumpToStart => app.jump_to_start(),
        Action::JumpToEnd => app.jump_to_end(),
        Action::PendingG => app.pending_key = Some('g'),
        Action::Select => app.activate(),
        Action::SelectNav(index) => app.select_nav(index),
        Action::NavNext => app.nav.select_next(),
        Action::NavPrev => app.nav.select_prev(),
        Action::TogglePosters => app.toggle_posters(),
        Action::CycleTheme => app.cycle_theme(),
        Action::Help => app.mode = Mode::Help,
        Action::ExitMode => {
            app.mode = Mode::Normal;
            app.clear_status();
        }
        Action::None => {}
    }
}

/// Spawn an async task to download and decode one poster
fn spawn_poster_load(url: String, tx: mpsc::UnboundedSender<PosterLoadResult>) {
    tokio::spawn(async move {
        debug!("Downloading poster: {}", url);
        let result = match download_poster(&url).await {
            Ok(image) => PosterLoadResult::Success { url, image },
            Err(error) => PosterLoadResult::Failure { url, error },
        };
        // Receiver only drops at shutdown
        let _ = tx.send(result);
    });
}

/// Handle a completed poster load
fn handle_poster_result(app: &mut App, result: PosterLoadResult) {
    match result {
        PosterLoadResult::Success { url, image } => {
            debug!("Poster ready: {}", url);
            app.poster_cache.set_loaded(&url, image);
        }
        PosterLoadResult::Failure { url, error } => {
            warn!("Poster failed: {} ({})", url, error);
            app.poster_cache.set_failed(&url, error);
        }
    }
}
