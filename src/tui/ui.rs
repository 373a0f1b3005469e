use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::constants::{UI_REFRESH_INTERVAL_MS, UI_SCROLL_LINES};
use crate::tui::app::App;
use crate::tui::render::render_ui;

/// Run the terminal UI
pub async fn run_ui(mut app: App) -> Result<()> {
    // Check if we have an interactive terminal
    if !crossterm::tty::IsTty::is_tty(&io::stdout()) {
        eprintln!("tutorbot requires an interactive terminal.");
        eprintln!("For one-shot use, pass a prompt: tutorbot -p \"...\"");
        return Err(anyhow::anyhow!("No interactive terminal available"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if !event::poll(std::time::Duration::from_millis(UI_REFRESH_INTERVAL_MS))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Ctrl+C quits from any state
            if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
                app.quit();
                break;
            }

            // Ctrl+L clears the conversation
            if key.code == KeyCode::Char('l') && key.modifiers == KeyModifiers::CONTROL {
                app.clear_chat();
                continue;
            }

            match key.code {
                KeyCode::Esc => {
                    app.quit();
                    break;
                }
                KeyCode::Enter => {
                    if !app.session.pending_input().trim().is_empty() {
                        // Show a waiting note, then run the submit to
                        // completion. No second submit can start while
                        // this one is in flight: the event loop itself
                        // is suspended on the await.
                        app.status_message = Some("Waiting for reply...".to_string());
                        terminal.draw(|f| render_ui(f, app))?;

                        app.submit_pending().await;
                        app.status_message = None;
                    }
                }
                KeyCode::Up => app.scroll_up(1),
                KeyCode::Down => app.scroll_down(1),
                KeyCode::PageUp => app.scroll_up(UI_SCROLL_LINES * 3),
                KeyCode::PageDown => app.scroll_down(UI_SCROLL_LINES * 3),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.push_input(c)
                }
                KeyCode::Backspace => app.pop_input(),
                _ => {}
            }
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
