//! Reusable UI component helpers: overlay chrome shared by the screens.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{AlertLevel, App};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub(super) fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub(super) fn level_color(level: AlertLevel) -> ratatui::style::Color {
    let theme = super::theme();
    match level {
        AlertLevel::Info => theme.info,
        AlertLevel::Success => theme.success,
        AlertLevel::Warning => theme.warning,
        AlertLevel::Error => theme.danger,
    }
}

pub(super) fn level_icon(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Info => "󰋽",
        AlertLevel::Success => "󰄬",
        AlertLevel::Warning => "󰀪",
        AlertLevel::Error => "󰅚",
    }
}

/// Dim everything under the drawer by repainting the background.
pub(super) fn draw_scrim(f: &mut Frame, area: Rect) {
    let theme = super::theme();
    let scrim = Block::default().style(Style::default().bg(theme.overlay));
    f.render_widget(scrim, area);
}

/// The tooltip singleton, anchored to the right of its menu item.
pub(super) fn draw_tooltip(f: &mut Frame, app: &App) {
    let Some(tooltip) = &app.tooltip else { return };
    let theme = super::theme();
    let frame = f.area();

    let width = (tooltip.text.chars().count() as u16 + 2).min(frame.width);
    let x = tooltip
        .anchor
        .right()
        .saturating_add(1)
        .min(frame.width.saturating_sub(width));
    let y = tooltip.anchor.y.min(frame.height.saturating_sub(1));
    let area = Rect::new(x, y, width, 1);

    let fg = if tooltip.fading { theme.text_dim } else { theme.text };
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(format!(" {} ", tooltip.text))
            .style(Style::default().fg(fg).bg(theme.overlay)),
        area,
    );
}

/// Notification banners, stacked in the top-right corner.
pub(super) fn draw_toasts(f: &mut Frame, app: &App) {
    let theme = super::theme();
    let frame = f.area();

    for (i, toast) in app.toasts.iter().rev().enumerate() {
        let desired = toast.message.chars().count() as u16 + 8;
        let width = desired.max(24).min(frame.width.saturating_sub(2));
        let height = 3;
        let y = 1 + (i as u16) * height;
        if y + height > frame.height {
            break;
        }
        let area = Rect::new(frame.width.saturating_sub(width + 2), y, width, height);
        let color = level_color(toast.level);

        f.render_widget(Clear, area);
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(level_icon(toast.level), Style::default().fg(color)),
            Span::styled(format!(" {} ", toast.message), Style::default().fg(theme.text)),
            Span::styled("󰅖", Style::default().fg(theme.text_dim)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(banner, area);
    }
}

/// Full-screen loading overlay. Drawn last, above everything.
pub(super) fn draw_loading_overlay(f: &mut Frame, app: &App) {
    if !app.loading {
        return;
    }
    let theme = super::theme();
    let area = f.area();

    f.render_widget(Clear, area);
    draw_scrim(f, area);

    let box_area = centered_rect(30, 20, area);
    f.render_widget(Clear, box_area);
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Carregando...", spinner(app.spinner_frame)),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    f.render_widget(content, box_area);
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
