use extractor_core::{PageViewModel, ToastKind, ToastView, PAGE_TITLE};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::super::app::Focus;
use super::constants::*;
use super::layout;

pub fn render(frame: &mut Frame, view: &PageViewModel, focus: &Focus) {
    let areas = layout::page_areas(frame.area(), view.error.is_some());

    render_header(frame, areas.header);
    render_input(frame, areas.input, view, matches!(focus, Focus::Url));
    render_summary(frame, areas.summary, view);
    render_points(frame, areas.points, view, focus);
    if let (Some(area), Some(message)) = (areas.error, view.error.as_deref()) {
        render_error(frame, area, message);
    }
    render_footer(frame, areas.footer);
    if let Some(toast) = &view.toast {
        render_toast(frame, toast);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            PAGE_TITLE,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(SUBTITLE, Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_input(frame: &mut Frame, area: Rect, view: &PageViewModel, focused: bool) {
    let title = if view.loading {
        URL_PANE_TITLE_LOADING
    } else {
        URL_PANE_TITLE
    };
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let paragraph = Paragraph::new(view.url_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border),
    );
    frame.render_widget(paragraph, area);
}

fn render_summary(frame: &mut Frame, area: Rect, view: &PageViewModel) {
    let block = Block::default().borders(Borders::ALL).title(SUMMARY_PANE_TITLE);
    let paragraph = if view.loading {
        Paragraph::new(LOADING_LABEL).style(Style::default().add_modifier(Modifier::ITALIC))
    } else if let Some(summary) = view.summary.as_deref() {
        Paragraph::new(summary).wrap(Wrap { trim: false })
    } else {
        Paragraph::new(SUMMARY_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(paragraph.block(block), area);
}

fn render_points(frame: &mut Frame, area: Rect, view: &PageViewModel, focus: &Focus) {
    let title = if view.can_export {
        POINTS_PANE_TITLE_EXPORT
    } else {
        POINTS_PANE_TITLE
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if view.key_points.is_empty() {
        let placeholder = if view.loading {
            LOADING_LABEL
        } else {
            POINTS_PLACEHOLDER
        };
        frame.render_widget(
            Paragraph::new(placeholder)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let editing = match focus {
        Focus::EditingPoint { index, buffer } => Some((*index, buffer.as_str())),
        _ => None,
    };
    let items: Vec<ListItem> = view
        .key_points
        .iter()
        .enumerate()
        .map(|(i, point)| match editing {
            Some((index, buffer)) if index == i => {
                ListItem::new(format!("{}. {}_", i + 1, buffer))
                    .style(Style::default().fg(Color::Yellow))
            }
            _ => ListItem::new(format!("{}. {}", i + 1, point)),
        })
        .collect();

    let selected = match focus {
        Focus::Points { selected } => Some((*selected).min(view.key_points.len() - 1)),
        Focus::EditingPoint { index, .. } => Some(*index),
        Focus::Url => None,
    };
    let mut list_state = ListState::default();
    list_state.select(selected);

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Error")
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(HELP_LINE).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_toast(frame: &mut Frame, toast: &ToastView) {
    let area = layout::toast_area(frame.area());
    let background = match toast.kind {
        ToastKind::Info => Color::Blue,
        ToastKind::Error => Color::Red,
    };
    let paragraph = Paragraph::new(toast.message.as_str())
        .style(Style::default().fg(Color::White).bg(background))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
