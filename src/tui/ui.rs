//! UI rendering using ratatui
//!
//! Two screens:
//! - Playing: the guess board, score pips, and the symbol palette
//! - Results: win/loss banner, with the code revealed on a loss
//!
//! Everything here reads `SessionSnapshot` and coordinator reveal state;
//! no game rules live in this module.

use crate::app::{AppCoordinator, RevealState, Screen, SessionSnapshot, SessionStatus, TurnRecord};
use crate::game::{CODE_LENGTH, MAX_ROWS, SYMBOL_POOL_SIZE};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Icon styles the per-session active set is drawn from
const ICON_POOL: [(char, Color); SYMBOL_POOL_SIZE] = [
    ('●', Color::Blue),
    ('◆', Color::Red),
    ('▲', Color::Green),
    ('■', Color::Yellow),
    ('★', Color::Magenta),
    ('♥', Color::LightRed),
    ('☀', Color::LightYellow),
    ('♠', Color::Cyan),
    ('♦', Color::LightMagenta),
    ('♫', Color::LightBlue),
];

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Playing => {
            render_board(frame, coordinator);
        }
        Screen::Results { won, secret } => {
            render_results(frame, coordinator, *won, secret.as_deref());
        }
    }
}

/// Render the in-game screen: header, help, board, palette, footer
fn render_board(frame: &mut Frame, coordinator: &AppCoordinator) {
    let area = frame.area();
    let snapshot = coordinator.snapshot();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Header
            Constraint::Length(4),                  // How to play
            Constraint::Length(MAX_ROWS as u16 + 2), // Board
            Constraint::Length(3),                  // Palette
            Constraint::Length(2),                  // Footer
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    render_header(frame, layout[0], &snapshot);
    render_help(frame, layout[1]);
    render_rows(frame, layout[2], coordinator, &snapshot);
    render_palette(frame, layout[3], coordinator);

    let footer = Paragraph::new("1-4 Place Icon  Backspace Undo  R Restart  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Render the header: title and row counter
fn render_header(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(inner);

    let title = Paragraph::new("CODEBREAK")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let row_display = format!(
        "Row {}/{}",
        (snapshot.row_count + 1).min(MAX_ROWS),
        MAX_ROWS
    );
    let rows = Paragraph::new(row_display)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Right);
    frame.render_widget(rows, header_layout[1]);
}

/// Render the how-to-play text
fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Crack the hidden 4-icon code.\n\
         Green pip = right icon, right spot. Red pip = right icon, wrong spot.\n\
         Pip order does not match slot order. Icons may repeat.",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// Render the guess rows with their score pips
fn render_rows(
    frame: &mut Frame,
    area: Rect,
    coordinator: &AppCoordinator,
    snapshot: &SessionSnapshot,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ROWS + 1);
    lines.push(Line::default());

    for row in 0..MAX_ROWS {
        if let Some(record) = snapshot.history.get(row) {
            lines.push(history_row_line(coordinator, record, row));
        } else if row == snapshot.row_count && snapshot.status == SessionStatus::Selecting {
            lines.push(active_row_line(coordinator, &snapshot.current_guess));
        } else {
            lines.push(empty_row_line());
        }
    }

    let board = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    frame.render_widget(board, area);
}

/// A scored row: its guess icons plus pips, clipped mid-reveal
fn history_row_line(coordinator: &AppCoordinator, record: &TurnRecord, row: usize) -> Line<'static> {
    // While this row's reveal is running, only the pips revealed so far
    // are shown
    let pip_limit = match coordinator.reveal() {
        Some(&RevealState { row: r, shown, .. }) if r == row => shown,
        _ => CODE_LENGTH,
    };

    let mut spans = vec![Span::raw("  ")];
    for &symbol in &record.guess {
        spans.push(icon_span(coordinator, symbol));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("  "));
    spans.extend(pip_spans(record.bulls, record.cows, pip_limit));
    Line::from(spans)
}

/// The row currently being filled in, with a marker and open slots
fn active_row_line(coordinator: &AppCoordinator, current_guess: &[usize]) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "▸ ",
        Style::default().fg(Color::Cyan).bold(),
    )];
    for &symbol in current_guess {
        spans.push(icon_span(coordinator, symbol));
        spans.push(Span::raw(" "));
    }
    for _ in current_guess.len()..CODE_LENGTH {
        spans.push(Span::styled("_", Style::default().fg(Color::Gray)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("  "));
    spans.extend(pip_spans(0, 0, CODE_LENGTH));
    Line::from(spans)
}

/// A not-yet-reached row
fn empty_row_line() -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for _ in 0..CODE_LENGTH {
        spans.push(Span::styled("_", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("  "));
    spans.extend(pip_spans(0, 0, CODE_LENGTH));
    Line::from(spans)
}

/// Render the symbol palette with its key bindings
fn render_palette(frame: &mut Frame, area: Rect, coordinator: &AppCoordinator) {
    let mut spans: Vec<Span> = Vec::new();
    for symbol in 0..coordinator.active_icons.len() {
        spans.push(Span::styled(
            format!("[{}] ", symbol + 1),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(icon_span(coordinator, symbol));
        spans.push(Span::raw("   "));
    }

    let palette = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(palette, area);
}

/// Render the end-of-session screen
fn render_results(
    frame: &mut Frame,
    coordinator: &AppCoordinator,
    won: bool,
    secret: Option<&[usize]>,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(2), // Banner
            Constraint::Length(2), // Revealed code (loss only)
            Constraint::Length(2), // Instructions
            Constraint::Percentage(35),
        ])
        .margin(2)
        .split(area);

    let (banner_text, banner_color) = if won {
        ("YOU CRACKED THE CODE!", Color::Green)
    } else {
        ("OUT OF ROWS", Color::Red)
    };
    let banner = Paragraph::new(banner_text)
        .style(Style::default().fg(banner_color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(banner, layout[1]);

    if let Some(code) = secret {
        let mut spans = vec![Span::styled(
            "The code was:  ",
            Style::default().fg(Color::White),
        )];
        for &symbol in code {
            spans.push(icon_span(coordinator, symbol));
            spans.push(Span::raw(" "));
        }
        let reveal = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(reveal, layout[2]);
    }

    let instructions = Paragraph::new("Press any key for a new code, Esc to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(instructions, layout[3]);
}

/// The styled glyph for an engine symbol, via the session's active set
fn icon_span(coordinator: &AppCoordinator, symbol: usize) -> Span<'static> {
    let (glyph, color) = coordinator
        .active_icons
        .get(symbol)
        .map(|&idx| ICON_POOL[idx])
        .unwrap_or(('?', Color::White));
    Span::styled(glyph.to_string(), Style::default().fg(color).bold())
}

/// Score pips: bulls green, cows red, the rest dim outlines.
/// `limit` clips how many positions are drawn filled (staggered reveal).
fn pip_spans(bulls: usize, cows: usize, limit: usize) -> Vec<Span<'static>> {
    (0..CODE_LENGTH)
        .map(|i| {
            if i < limit && i < bulls {
                Span::styled("● ", Style::default().fg(Color::Green))
            } else if i < limit && i < bulls + cows {
                Span::styled("● ", Style::default().fg(Color::Red))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect()
}
