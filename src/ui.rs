use std::{io, time::Duration};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tui::{
    backend::Backend,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};

use crate::app::{Action, App, Effect};

const TICK: Duration = Duration::from_millis(250);

/// Enable the tui, letting a user type formulas and see their molar mass
pub fn tui(app: &mut App) -> color_eyre::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // restore the terminal before reporting any error from the loop
    let res = run(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> color_eyre::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(TICK)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(action) = Action::from_key(key) else {
            continue;
        };
        match app.handle(action) {
            Effect::None => {}
            Effect::Copy(text) => {
                if let Err(e) = arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
                    tracing::error!("clipboard unavailable: {e}");
                    app.status = format!("copy failed: {e}");
                }
            }
            Effect::Quit => return Ok(()),
        }
    }
}

/// Column of the cursor inside a bordered box, kept off the right border.
fn cursor_x(area: Rect, cursor: usize) -> u16 {
    let last = area.width.saturating_sub(3);
    let offset = u16::try_from(cursor).unwrap_or(u16::MAX).min(last);
    area.x + 1 + offset
}

/// Draw tui ui
fn ui<B: Backend>(f: &mut Frame<B>, app: &App) {
    let outer = Block::default()
        .title("Molar Mass Calculator")
        .borders(Borders::ALL);
    let area = outer.inner(f.size());
    f.render_widget(outer, f.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(area);

    let input = Paragraph::new(app.input.display())
        .block(Block::default().title("Formula").borders(Borders::ALL));
    f.render_widget(input, chunks[0]);
    f.set_cursor(cursor_x(chunks[0], app.input.cursor()), chunks[0].y + 1);

    let mut result = vec![Span::styled(
        app.format_mass(app.preview.mass),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if !app.status.is_empty() {
        result.push(Span::raw("  "));
        result.push(Span::styled(
            app.status.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }
    let result = Paragraph::new(Spans::from(result))
        .block(Block::default().title("Molar mass").borders(Borders::ALL));
    f.render_widget(result, chunks[1]);

    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|entry| ListItem::new(format!("{:<24} {}", entry.formula, app.format_mass(entry.mass))))
        .collect();
    let history = List::new(items).block(
        Block::default()
            .title(format!("History ({}/{})", app.history.len(), app.history.capacity()))
            .borders(Borders::ALL),
    );
    f.render_widget(history, chunks[2]);

    let help = Paragraph::new(
        "enter: record  up/down: raise/lower subscript  ctrl-r: recall  ctrl-y: copy  ctrl-l: clear  esc: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
