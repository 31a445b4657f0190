//! Common UI components: header bar, status bar, overlays.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::render::StyleLookup;
use crate::ui::theme::parse_color;

/// Render the header bar: connectivity indicator, title, network info.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let container_color = parse_color(&app.surface.container_color);
    let indicator_color = parse_color(&app.surface.indicator_color);

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.surface.indicator_glyph),
            Style::default()
                .fg(indicator_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("PERFWATCH ", Style::default().add_modifier(Modifier::BOLD)),
    ];

    // Network info passthrough, e.g. "raspberrypi │ 192.168.1.10"
    for (key, value) in &app.network {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            format!("{key}: "),
            Style::default().add_modifier(Modifier::DIM),
        ));
        spans.push(Span::raw(format!("{value} ")));
    }

    if app.surface.loading {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            "Loading…",
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    let line = Line::from(spans).style(Style::default().fg(container_color));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows time since the last good tick, the last failure if any, and the
/// available controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let controls = "↑↓:select Enter:expand r:refresh ?:help q:quit";

    let status = match (&app.last_updated, &app.last_failure) {
        (_, Some(err)) => format!(" {err} | {controls}"),
        (Some(updated), None) => {
            format!(
                " Updated {:.1}s ago | {}",
                updated.elapsed().as_secs_f64(),
                controls
            )
        }
        (None, None) => format!(" Waiting for first data… | {controls}"),
    };

    let style = if app.last_failure.is_some() {
        Style::default().fg(parse_color(app.theme.error_color()))
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    frame.render_widget(Paragraph::new(status).style(style), area);
}

/// Render the error overlay as a centered modal over a cleared backdrop.
pub fn render_error_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let error_color = parse_color(app.theme.error_color());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Connection to the server lost",
            Style::default()
                .fg(error_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Retrying on the next tick…"),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to dismiss",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Connection error ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(error_color));

    let width = 40u16.min(area.width.saturating_sub(4));
    let height = 8u16.min(area.height.saturating_sub(2));
    let overlay = centered(area, width, height);

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center),
        overlay,
    );
}

/// Render the help overlay with keyboard shortcuts.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  ↑/↓ j/k    Select panel"),
        Line::from("  Enter      Expand selected panel"),
        Line::from("  Esc        Close overlay / dismiss error"),
        Line::from("  r          Refresh now"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let width = 40u16.min(area.width.saturating_sub(4));
    let height = 11u16.min(area.height.saturating_sub(2));
    let overlay = centered(area, width, height);

    frame.render_widget(Clear, overlay);
    frame.render_widget(Paragraph::new(help_text).block(block), overlay);
}

/// Center a width x height rect inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
