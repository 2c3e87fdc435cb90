//! Static contact page

use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const ADDRESS: &str = "A 108 Adam Street";
const PHONE: &str = "+91 7758026057";
const EMAIL: &str = "info@example.com";
const LOCATION_NAME: &str = "Hotel Amardeep";
const LOCATION_COORDS: &str = "18.1658° N, 74.6014° E";
const MAP_URL: &str = "https://maps.google.com/?q=18.16577723,74.60138659";
const COPYRIGHT: &str = "© NPSP All Rights Reserved.";

/// Placeholder drawn where the QR image would be
const QR_ART: [&str; 5] = [
    "█▀▀▀█ ▄▀▄ █▀▀▀█",
    "█   █ ▀▄▀ █   █",
    "▀▀▀▀▀ █▀█ ▀▀▀▀▀",
    "▄▀▄ ▀▄█▄▀ ▄ ▀▄▀",
    "█▀▀▀█ ▀ ▄ █▄▀▄█",
];

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    let label = Style::default().fg(Color::Cyan);

    let contact = Paragraph::new(vec![
        Line::from(vec![Span::styled("⌂ ", label), Span::raw(ADDRESS)]),
        Line::from(vec![Span::styled("☎ ", label), Span::raw(PHONE)]),
        Line::from(vec![Span::styled("✉ ", label), Span::raw(EMAIL)]),
    ]);
    frame.render_widget(
        contact.block(section(state.t("Contact Us"))),
        columns[0],
    );

    let location = Paragraph::new(vec![
        Line::from(Span::styled(
            LOCATION_NAME,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(LOCATION_COORDS),
        Line::from(""),
        Line::from(Span::styled(MAP_URL, Style::default().fg(Color::Blue))),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(
        location.block(section(state.t("Location"))),
        columns[1],
    );

    let qr = Paragraph::new(QR_ART.iter().map(|l| Line::from(*l)).collect::<Vec<_>>())
        .alignment(Alignment::Center);
    frame.render_widget(qr.block(section(state.t("Scan QR Code"))), columns[2]);

    let footer = Paragraph::new(COPYRIGHT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, rows[1]);
}

fn section(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}
