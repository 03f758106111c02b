use crate::app::{App, Modal};
use pokerslots_core::{
    paytable_rows, AnimationEntry, Card, Game, Phase, Point, Rect as TableRect, CARD_HEIGHT,
    CARD_WIDTH, DECK_SIZE, HAND_SIZE, HELD_LIFT, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const PAYTABLE_ROW_HEIGHT: f64 = 60.0;
const PAYTABLE_ROW_WIDTH: f64 = 190.0;
const DECK_STACK_OFFSET: f64 = 10.0;
const HELD_COLOR: Color = Color::Magenta;
const BET_SELECTOR_WIDTH: u16 = 24;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let game = &app.game;

    draw_header(frame, area, game);
    draw_paytable(frame, area, game);
    draw_deck(frame, area, game);
    draw_hand(frame, area, game);
    draw_messages(frame, area, game);
    draw_buttons(frame, area, game);
    draw_footer(frame, area, app);

    match &app.modal {
        Some(Modal::BetSelector { options, cursor }) => {
            draw_bet_selector(frame, area, options, *cursor)
        }
        Some(Modal::Notice(message)) => draw_notice(frame, message),
        None => {}
    }
}

/// Scales a table rect onto `area`, clipped to it. Never narrower than one
/// cell unless it falls outside entirely.
pub fn project(area: Rect, rect: TableRect) -> Rect {
    let sx = area.width as f64 / VIEWPORT_WIDTH;
    let sy = area.height as f64 / VIEWPORT_HEIGHT;
    let left = (rect.x * sx).round().max(0.0) as u16;
    let top = (rect.y * sy).round().max(0.0) as u16;
    let right = ((rect.x + rect.width) * sx).round().max(0.0) as u16;
    let bottom = ((rect.y + rect.height) * sy).round().max(0.0) as u16;
    let projected = Rect::new(
        area.x.saturating_add(left),
        area.y.saturating_add(top),
        right.saturating_sub(left).max(1),
        bottom.saturating_sub(top).max(1),
    );
    projected.intersection(area)
}

pub fn project_point(area: Rect, x: f64, y: f64) -> (u16, u16) {
    let sx = area.width as f64 / VIEWPORT_WIDTH;
    let sy = area.height as f64 / VIEWPORT_HEIGHT;
    (
        area.x.saturating_add((x * sx).floor().max(0.0) as u16),
        area.y.saturating_add((y * sy).floor().max(0.0) as u16),
    )
}

/// Maps a terminal cell back to the table point at its centre.
pub fn unproject(area: Rect, column: u16, row: u16) -> Option<Point> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let inside = column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height;
    if !inside {
        return None;
    }
    let x = ((column - area.x) as f64 + 0.5) * VIEWPORT_WIDTH / area.width as f64;
    let y = ((row - area.y) as f64 + 0.5) * VIEWPORT_HEIGHT / area.height as f64;
    Some(Point::new(x, y))
}

/// Which bet option sits under a click, if the selector is open with
/// `count` entries.
pub fn bet_option_at(surface: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    let popup = bet_selector_area(surface, count);
    let first_row = popup.y + 1;
    if column <= popup.x || column >= popup.x + popup.width.saturating_sub(1) {
        return None;
    }
    if row < first_row {
        return None;
    }
    let index = (row - first_row) as usize;
    (index < count).then_some(index)
}

fn bet_selector_area(surface: Rect, count: usize) -> Rect {
    let height = (count as u16).saturating_add(2);
    centered_fixed(BET_SELECTOR_WIDTH, height, surface)
}

fn draw_header(frame: &mut Frame, area: Rect, game: &Game) {
    let title = project(area, TableRect::new(0.0, 10.0, VIEWPORT_WIDTH, 40.0));
    frame.render_widget(
        Paragraph::new(Line::from("POKER SLOTS".bold())).alignment(Alignment::Center),
        title,
    );
    let balance = project(area, TableRect::new(50.0, 60.0, 300.0, 40.0));
    frame.render_widget(
        Paragraph::new(Line::from(format!("Balance: ${}", game.balance()).bold())),
        balance,
    );
}

fn draw_paytable(frame: &mut Frame, area: Rect, game: &Game) {
    let winner = game.phase().outcome().and_then(|outcome| outcome.hand);
    let width = game.layout().width;
    for (index, (kind, amount)) in paytable_rows(game.bet()).enumerate() {
        let x = if index < 5 { 50.0 } else { width - 200.0 };
        let y = 150.0 + (index % 5) as f64 * PAYTABLE_ROW_HEIGHT;
        let rect = project(area, TableRect::new(x, y, PAYTABLE_ROW_WIDTH, 30.0));
        let style = if winner == Some(kind) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let text = format!("{} {}", kind.name(), amount);
        frame.render_widget(Paragraph::new(Line::from(text)).style(style), rect);
    }
}

/// Cards shown on the stack. Between rounds that is the fresh deck the next
/// Play shuffles, not whatever the last round left behind.
fn deck_remaining(game: &Game) -> usize {
    match game.phase() {
        Phase::Initial => DECK_SIZE,
        _ => game.deck().len(),
    }
}

fn draw_deck(frame: &mut Frame, area: Rect, game: &Game) {
    let remaining = deck_remaining(game);
    let origin = game.layout().deck_origin();
    for layer in 0..remaining.min(3) {
        let offset = layer as f64 * DECK_STACK_OFFSET;
        let rect = project(
            area,
            TableRect::new(origin.x + offset, origin.y - offset, CARD_WIDTH, CARD_HEIGHT),
        );
        draw_card_back(frame, rect);
    }
    let label = project(
        area,
        TableRect::new(origin.x, origin.y + CARD_HEIGHT + 5.0, CARD_WIDTH, 30.0),
    );
    frame.render_widget(
        Paragraph::new(format!("{remaining}")).alignment(Alignment::Center),
        label,
    );
}

fn draw_hand(frame: &mut Frame, area: Rect, game: &Game) {
    let layout = game.layout();
    let phase = game.phase();
    let Some(hand) = phase.hand() else {
        for position in 0..HAND_SIZE {
            let rect = project(area, layout.card_slot(position));
            frame.render_widget(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
                rect,
            );
        }
        return;
    };

    let animation = phase.animation();
    for position in 0..HAND_SIZE {
        if animation.is_some_and(|batch| batch.is_animating(position)) {
            continue;
        }
        let Some(card) = hand.get(position) else {
            continue;
        };
        let held = phase.holds().is_some_and(|holds| holds.is_held(position));
        let mut slot = layout.card_slot(position);
        if held {
            slot.y -= HELD_LIFT;
        }
        draw_card_face(frame, project(area, slot), card, held);
    }

    if let Some(batch) = animation {
        for entry in batch.entries() {
            draw_in_flight(frame, area, entry);
        }
    }
}

fn draw_in_flight(frame: &mut Frame, area: Rect, entry: &AnimationEntry) {
    let scale = entry.horizontal_scale();
    let width = CARD_WIDTH * scale;
    if width < 1.0 {
        return;
    }
    let position = entry.position();
    let rect = TableRect::new(
        position.x + (CARD_WIDTH - width) / 2.0,
        position.y,
        width,
        CARD_HEIGHT,
    );
    let rect = project(area, rect);
    if entry.is_face_up() {
        draw_card_face(frame, rect, entry.card, false);
    } else {
        draw_card_back(frame, rect);
    }
}

fn draw_card_face(frame: &mut Frame, rect: Rect, card: Card, held: bool) {
    let color = if card.suit.is_red() {
        Color::Red
    } else {
        Color::White
    };
    let border = if held {
        Style::default().fg(HELD_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut block = Block::default().borders(Borders::ALL).border_style(border);
    if held {
        block = block.title_bottom(Line::from("HELD").centered());
    }
    let body = Paragraph::new(vec![
        Line::from(card.rank.label()),
        Line::from(card.suit.symbol().to_string()).centered(),
    ])
    .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
    .block(block);
    frame.render_widget(Clear, rect);
    frame.render_widget(body, rect);
}

fn draw_card_back(frame: &mut Frame, rect: Rect) {
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .style(Style::default().bg(Color::Blue)),
        rect,
    );
}

fn draw_messages(frame: &mut Frame, area: Rect, game: &Game) {
    let layout = game.layout();
    let above_cards = layout.card_slot(0).y - 70.0;
    let lines: Vec<Line> = match game.phase() {
        Phase::Select { .. } => vec![Line::from("Click cards to HOLD")],
        Phase::Result { outcome, .. } => match outcome.hand {
            Some(kind) => vec![
                Line::from(format!("{}!", kind.name()).fg(Color::Yellow).bold()),
                Line::from(format!("Win: ${}", outcome.win).fg(Color::Green)),
            ],
            None => vec![
                Line::from("No Win".fg(Color::Gray)),
                Line::from(format!("Lost: -${}", game.bet()).fg(Color::Red)),
            ],
        },
        _ => return,
    };
    let rect = project(
        area,
        TableRect::new(0.0, above_cards, layout.width, 60.0),
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn draw_buttons(frame: &mut Frame, area: Rect, game: &Game) {
    let layout = game.layout();
    let phase = game.phase();
    let bet_enabled = matches!(phase, Phase::Initial);
    draw_button(
        frame,
        project(area, layout.bet_button()),
        &format!("Bet: ${}", game.bet()),
        bet_enabled,
    );
    if let Some(label) = phase.primary_label() {
        draw_button(frame, project(area, layout.primary_button()), label, true);
    }
}

fn draw_button(frame: &mut Frame, rect: Rect, label: &str, enabled: bool) {
    let style = if enabled {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };
    let inner_row = rect.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::from(""); inner_row as usize];
    lines.push(Line::from(label.to_string()).bold());
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(style),
        rect,
    );
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    if area.height < 2 {
        return;
    }
    let footer = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    let text = format!(
        "enter/space {} | 1-5 hold | b bet | click to play | q quit | {} | {}",
        app.game.phase().primary_label().unwrap_or("..."),
        app.game.phase_kind(),
        app.status_line
    );
    frame.render_widget(
        Paragraph::new(Line::from(text)).style(Style::default().fg(Color::DarkGray)),
        footer,
    );
}

fn draw_bet_selector(frame: &mut Frame, area: Rect, options: &[u64], cursor: usize) {
    let popup = bet_selector_area(area, options.len());
    frame.render_widget(Clear, popup);
    let items: Vec<ListItem> = options
        .iter()
        .map(|bet| ListItem::new(format!("${bet}")))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Bet"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(cursor));
    frame.render_stateful_widget(list, popup, &mut state);
}

fn draw_notice(frame: &mut Frame, message: &str) {
    let area = centered_rect(40, 20, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(message.to_string().fg(Color::Red).bold()),
        Line::from(""),
        Line::from("press any key".fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Notice")),
        area,
    );
}

fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}
