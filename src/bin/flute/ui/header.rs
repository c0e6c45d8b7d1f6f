//! Header bar - step, interval, and round counter

use flute_trainer::render::Header;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the styled header line
pub fn header_line(header: &Header) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" Step: {:.2}", header.step),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Interval: {:.2}", header.interval),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Round {}/{}", header.round, header.rounds),
            Style::default().fg(Color::White),
        ),
    ])
}

/// Render the header bar
pub fn render_header(frame: &mut Frame, area: Rect, header: &Header) {
    frame.render_widget(Paragraph::new(header_line(header)), area);
}
