//! TUI pane rendering
//!
//! Stateless render functions for the three visible regions: the algorithm
//! menu, the bar chart of the live array, and the status bar. All state
//! lives in [`App`](crate::ui::app::App); these functions only translate it
//! into widgets.

use crate::engine::{StepEvent, StepStats};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

/// Render the algorithm menu. The selected entry is highlighted; the entry
/// currently being sorted (if any) gets a play marker.
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    names: &[&'static str],
    selected: usize,
    running: Option<&str>,
) {
    let lines: Vec<Line> = names
        .iter()
        .enumerate()
        .map(|(index, &name)| {
            let marker = if running == Some(name) { "▶ " } else { "  " };
            let style = if index == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD)
            } else if running == Some(name) {
                Style::default().fg(DEFAULT_THEME.success)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Line::from(Span::styled(format!("{}{:<10}", marker, name), style))
        })
        .collect();

    let block = Block::default()
        .title(" Algorithms ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the array as a bar chart. The indices touched by the last step
/// event are tinted by event kind; once the sort completes every bar turns
/// green.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[u32],
    last_event: Option<StepEvent>,
    done: bool,
    title: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_color(index, last_event, done);
            Bar::default()
                .value(u64::from(value))
                .text_value(String::new())
                .style(Style::default().fg(color))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let n = values.len().max(1);
    let slot = (inner_width / n).max(1);
    let (bar_width, bar_gap) = if slot > 1 {
        ((slot - 1).min(3) as u16, 1)
    } else {
        (1, 0)
    };

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn bar_color(index: usize, last_event: Option<StepEvent>, done: bool) -> Color {
    if done {
        return DEFAULT_THEME.success;
    }
    match last_event {
        Some(StepEvent::Compare(i, j)) if index == i || index == j => DEFAULT_THEME.bar_compare,
        Some(StepEvent::Swap(i, j)) if index == i || index == j => DEFAULT_THEME.bar_swap,
        Some(StepEvent::Overwrite(i, _)) if index == i => DEFAULT_THEME.bar_overwrite,
        _ => DEFAULT_THEME.bar,
    }
}

/// Render the status bar at the bottom: step counters and the current
/// message on the left, keybinds and the play state on the right.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    stats: StepStats,
    tick: Duration,
    is_playing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(
                " cmp {} · swp {} · set {} · {}ms ",
                stats.comparisons,
                stats.swaps,
                stats.overwrites,
                tick.as_millis()
            ),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" select ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ↵ ", key_style),
        Span::styled(" sort ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" r ", key_style),
        Span::styled(" shuffle ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" pause ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" +/- ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled("│", sep_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
