//! Metric panel grid rendering.
//!
//! Lays the visible panels out in rows, each panel a colored block with the
//! metric's status text and its rolling bar chart. Everything drawn here
//! comes from the panel store; this module never inspects poll results.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

use crate::app::App;
use crate::data::chart::BarHeights;
use crate::render::StyleLookup;
use crate::ui::surface::PanelView;
use crate::ui::theme::parse_color;

/// Minimum width of one panel cell, borders included.
const MIN_PANEL_WIDTH: u16 = 26;

/// Render the grid of visible metric panels.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let keys = app.surface.visible_keys();
    if keys.is_empty() {
        let message = if app.surface.loading {
            "Waiting for data…"
        } else {
            "No live metrics"
        };
        let paragraph = Paragraph::new(message)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(paragraph, area);
        return;
    }

    let columns = (area.width / MIN_PANEL_WIDTH).max(1) as usize;
    let rows = keys.len().div_ceil(columns);

    let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);

    for (row_index, row_area) in row_areas.iter().enumerate() {
        let cell_areas =
            Layout::horizontal(vec![Constraint::Fill(1); columns]).split(*row_area);

        for (col_index, cell_area) in cell_areas.iter().enumerate() {
            let panel_index = row_index * columns + col_index;
            let Some(key) = keys.get(panel_index) else {
                break;
            };
            if let Some(panel) = app.surface.panel(key) {
                let selected = panel_index == app.selected_index;
                render_panel(frame, app, key, panel, selected, *cell_area);
            }
        }
    }
}

fn render_panel(
    frame: &mut Frame,
    app: &App,
    key: &str,
    panel: &PanelView,
    selected: bool,
    area: Rect,
) {
    let background = parse_color(&panel.color);

    let border_style = if selected {
        app.theme.selected
    } else {
        Style::default().fg(app.theme.border)
    };

    let block = Block::default()
        .title(format!(" {key} "))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(border_style)
        .style(Style::default().bg(background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).split(inner);

    let text = Paragraph::new(panel.text.clone())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(text, chunks[0]);

    if !panel.bars.is_empty() && chunks[1].height > 0 {
        let levels = bar_levels(&panel.bars);
        let sparkline = Sparkline::default()
            .data(&levels)
            .max(100)
            .style(Style::default().fg(parse_color(app.theme.chart_background())));
        frame.render_widget(sparkline, chunks[1]);
    }
}

/// Map height pairs to sparkline levels.
///
/// The buffer itself is unclamped; saturation here is purely a drawing
/// concern, a bar cannot be taller than its panel.
fn bar_levels(bars: &[BarHeights]) -> Vec<u64> {
    bars.iter()
        .map(|pair| pair.value_pct.clamp(0.0, 100.0).round() as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_levels_saturate_for_display_only() {
        let bars = vec![
            BarHeights {
                value_pct: 120.0,
                filler_pct: -20.0,
            },
            BarHeights {
                value_pct: 42.4,
                filler_pct: 57.6,
            },
            BarHeights {
                value_pct: 0.0,
                filler_pct: 100.0,
            },
        ];
        assert_eq!(bar_levels(&bars), vec![100, 42, 0]);
    }
}
