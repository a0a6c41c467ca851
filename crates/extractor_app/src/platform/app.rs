use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use extractor_core::{update, AppState, Extraction, Msg};
use extractor_logging::extractor_info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui;

/// Cadence of `Msg::Tick`; the toast auto-dismiss window is measured in
/// these, so the interval must stay in step with the core's tick count.
const TICK_INTERVAL: Duration = Duration::from_millis(75);
const INPUT_POLL: Duration = Duration::from_millis(25);

/// App-local interaction state: which pane has focus and any in-progress
/// key-point edit. Canonical page state lives in `extractor_core`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Url,
    Points {
        selected: usize,
    },
    EditingPoint {
        index: usize,
        buffer: String,
    },
}

enum KeyOutcome {
    Quit,
    Dispatch(Msg),
    Redraw,
    None,
}

pub fn run_app(config: AppConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
) -> io::Result<()> {
    let runner = EffectRunner::new(&config);
    extractor_info!("Extractor ready against {}", config.base_url);

    let mut state = AppState::new();
    let mut focus = Focus::Url;
    let mut last_tick = Instant::now();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            let view = state.view();
            terminal.draw(|frame| ui::render::render(frame, &view, &focus))?;
            needs_redraw = false;
        }

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_key(key, &mut focus, &state) {
                        KeyOutcome::Quit => return Ok(()),
                        KeyOutcome::Dispatch(msg) => state = dispatch(state, msg, &runner),
                        KeyOutcome::Redraw => needs_redraw = true,
                        KeyOutcome::None => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            last_tick = Instant::now();
            state = dispatch(state, Msg::Tick, &runner);
        }

        for msg in runner.poll() {
            state = dispatch(state, msg, &runner);
        }

        if state.consume_dirty() {
            needs_redraw = true;
        }
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn key_point_count(state: &AppState) -> usize {
    match state.extraction() {
        Extraction::Ready { key_points, .. } => key_points.len(),
        _ => 0,
    }
}

fn handle_key(key: KeyEvent, focus: &mut Focus, state: &AppState) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyOutcome::Quit,
            KeyCode::Char('s') => KeyOutcome::Dispatch(Msg::ExportRequested),
            _ => KeyOutcome::None,
        };
    }

    match focus {
        Focus::Url => match key.code {
            KeyCode::Enter => KeyOutcome::Dispatch(Msg::SubmitRequested),
            KeyCode::Tab => {
                *focus = Focus::Points { selected: 0 };
                KeyOutcome::Redraw
            }
            KeyCode::Esc => KeyOutcome::Dispatch(Msg::ToastDismissed),
            KeyCode::Char(c) => {
                let mut text = state.url_input().to_owned();
                text.push(c);
                KeyOutcome::Dispatch(Msg::InputChanged(text))
            }
            KeyCode::Backspace => {
                let mut text = state.url_input().to_owned();
                text.pop();
                KeyOutcome::Dispatch(Msg::InputChanged(text))
            }
            _ => KeyOutcome::None,
        },
        Focus::Points { selected } => {
            let count = key_point_count(state);
            match key.code {
                KeyCode::Tab => {
                    *focus = Focus::Url;
                    KeyOutcome::Redraw
                }
                KeyCode::Up => {
                    *selected = selected.saturating_sub(1);
                    KeyOutcome::Redraw
                }
                KeyCode::Down => {
                    if count > 0 && *selected + 1 < count {
                        *selected += 1;
                    }
                    KeyOutcome::Redraw
                }
                KeyCode::Enter if count > 0 => {
                    let index = (*selected).min(count - 1);
                    let buffer = match state.extraction() {
                        Extraction::Ready { key_points, .. } => key_points[index].clone(),
                        _ => String::new(),
                    };
                    *focus = Focus::EditingPoint { index, buffer };
                    KeyOutcome::Redraw
                }
                KeyCode::Esc => KeyOutcome::Dispatch(Msg::ToastDismissed),
                _ => KeyOutcome::None,
            }
        }
        Focus::EditingPoint { index, buffer } => match key.code {
            KeyCode::Enter => {
                let index = *index;
                let msg = Msg::KeyPointEdited {
                    index,
                    text: buffer.clone(),
                };
                *focus = Focus::Points { selected: index };
                KeyOutcome::Dispatch(msg)
            }
            KeyCode::Esc => {
                // Abandon the edit; the stored text is untouched.
                let index = *index;
                *focus = Focus::Points { selected: index };
                KeyOutcome::Redraw
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                KeyOutcome::Redraw
            }
            KeyCode::Backspace => {
                buffer.pop();
                KeyOutcome::Redraw
            }
            _ => KeyOutcome::None,
        },
    }
}
