//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{EvaluationRow, LetterState, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{Snapshot, Status};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const INSTRUCTIONS: [&str; 7] = [
    "Guess the hidden five-letter word in six tries.",
    "",
    "Type letters, Backspace to erase, Enter to submit.",
    "Green: right letter in the right spot.",
    "Yellow: letter is in the word, wrong spot.",
    "Gray: letter is not in the word.",
    "Ctrl-N starts a new word. Esc quits.",
];

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Min(16),    // Board and side panel
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if app.show_help {
        render_help(f);
    } else if app.is_over() {
        render_game_over(f, app);
    }
}

fn render_header<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let elapsed = app.started.elapsed();
    let cursor = if app.header.is_done(elapsed) { "" } else { "▌" };
    let subtitle = app.header.subtitle_at(elapsed);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                app.header.title_at(elapsed),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(if subtitle.is_empty() { cursor } else { "" }),
        ]),
        Line::from(vec![
            Span::styled(subtitle, Style::default().fg(Color::Gray)),
            Span::raw(if subtitle.is_empty() { "" } else { cursor }),
        ]),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_board<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let snapshot = app.game.snapshot();

    let title = match &snapshot {
        Some(s) => format!(" Attempt {}/{MAX_ATTEMPTS} ", attempt_number(s)),
        None => " Board ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match &snapshot {
        Some(s) => board_lines(s),
        None if app.game.is_loading() => vec![
            Line::from(""),
            Line::styled("Loading new word...", Style::default().fg(Color::Yellow)),
        ],
        None => vec![
            Line::from(""),
            Line::styled(
                "No word available. Press Ctrl-N to try again.",
                Style::default().fg(Color::Red),
            ),
        ],
    };

    let board = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(board, area);
}

/// 1-based attempt shown to the player
fn attempt_number(snapshot: &Snapshot) -> usize {
    match snapshot.status {
        Status::Won => snapshot.attempts.unwrap_or(snapshot.current_row + 1),
        Status::InProgress | Status::Lost => snapshot.current_row + 1,
    }
}

fn board_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    for (row, (letters, evaluation)) in snapshot
        .grid
        .iter()
        .zip(snapshot.evaluations.iter())
        .enumerate()
    {
        let active = row == snapshot.current_row && snapshot.status == Status::InProgress;
        lines.push(row_line(letters, evaluation, active));
        lines.push(Line::from(""));
    }

    lines
}

fn row_line(
    letters: &[Option<char>; WORD_LENGTH],
    evaluation: &EvaluationRow,
    active: bool,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2 + 1);
    spans.push(Span::styled(
        if active { "› " } else { "  " },
        Style::default().fg(Color::Cyan),
    ));

    for (letter, state) in letters.iter().zip(evaluation.states()) {
        spans.push(cell_span(*letter, *state));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn cell_span(letter: Option<char>, state: LetterState) -> Span<'static> {
    let Some(c) = letter else {
        return Span::styled(" · ", Style::default().fg(Color::DarkGray));
    };

    let style = match state {
        LetterState::Correct => Style::default().bg(Color::Green).fg(Color::Black),
        LetterState::Present => Style::default().bg(Color::Yellow).fg(Color::Black),
        LetterState::Absent => Style::default().bg(Color::DarkGray).fg(Color::White),
        LetterState::Unevaluated => Style::default().fg(Color::White),
    };

    Span::styled(format!(" {c} "), style.add_modifier(Modifier::BOLD))
}

fn render_side_panel<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
}

fn render_messages<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_distribution<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let distribution = &app.stats.guess_distribution;
    let max = distribution.iter().copied().max().unwrap_or(0).max(1);

    let lines: Vec<Line> = distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Line::from(vec![
                Span::raw(format!("{} ", i + 1)),
                Span::styled(
                    create_progress_bar(count as f64, max as f64, 16),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.games_won,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let activity = if app.game.is_loading() {
        "Loading new word..."
    } else if app.game.in_flight().is_some() {
        "Checking word..."
    } else {
        ""
    };
    f.render_widget(
        Paragraph::new(activity)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow)),
        chunks[1],
    );

    let help = Paragraph::new("Enter: Submit | Ctrl-N: New | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_help(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    let mut lines: Vec<Line> = INSTRUCTIONS.iter().map(|&l| Line::from(l)).collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press any key to start",
        Style::default().fg(Color::DarkGray),
    ));

    let help = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" How to Play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn render_game_over<S>(f: &mut Frame, app: &App<S>) {
    let Some(snapshot) = app.game.snapshot() else {
        return;
    };
    let area = centered_rect(50, 60, f.area());

    let (title, headline, color) = match (&snapshot.status, &snapshot.target) {
        (Status::Lost, Some(target)) => (
            " Game Over ",
            format!("The word was {target}"),
            Color::Red,
        ),
        _ => (
            " Solved! ",
            format!("You got it in {}!", attempt_number(&snapshot)),
            Color::Green,
        ),
    };

    let mut lines = vec![
        Line::styled(headline, Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];
    if let Some(share) = app.share() {
        lines.extend(share.lines().map(|l| Line::from(l.to_string())));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "n: New game | q: Quit",
        Style::default().fg(Color::DarkGray),
    ));

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rect of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
