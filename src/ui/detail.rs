//! Expanded-panel overlay.
//!
//! The terminal counterpart of the dashboard's focus-expand interaction:
//! the selected panel takes over most of the screen with a larger chart.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Sparkline},
    Frame,
};

use crate::app::App;
use crate::render::StyleLookup;
use crate::ui::common::centered;
use crate::ui::theme::parse_color;

const MIN_OVERLAY_WIDTH: u16 = 40;
const MIN_OVERLAY_HEIGHT: u16 = 10;

/// Render the expanded view of the selected panel as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }

    let Some(key) = app.selected_key() else {
        return;
    };
    let Some(panel) = app.surface.panel(&key) else {
        return;
    };

    let overlay = centered(
        area,
        area.width.saturating_sub(8).max(MIN_OVERLAY_WIDTH),
        area.height.saturating_sub(4).max(MIN_OVERLAY_HEIGHT),
    );

    let block = Block::default()
        .title(format!(" {key} "))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.selected)
        .style(Style::default().bg(parse_color(&panel.color)));

    let inner = block.inner(overlay);
    frame.render_widget(Clear, overlay);
    frame.render_widget(block, overlay);

    let chunks =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).split(inner);

    let mut header = vec![Line::from(Span::styled(
        panel.text.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(chart) = app.registry().chart(&key) {
        header.push(Line::from(Span::styled(
            format!(
                "scale max {} │ {} of {} samples",
                chart.scale_max(),
                chart.len(),
                chart.capacity()
            ),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    frame.render_widget(Paragraph::new(header), chunks[0]);

    if !panel.bars.is_empty() && chunks[1].height > 0 {
        let levels: Vec<u64> = panel
            .bars
            .iter()
            .map(|pair| pair.value_pct.clamp(0.0, 100.0).round() as u64)
            .collect();
        let sparkline = Sparkline::default()
            .data(&levels)
            .max(100)
            .style(Style::default().fg(parse_color(app.theme.chart_background())));
        frame.render_widget(sparkline, chunks[1]);
    }
}
