use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::{TOAST_HEIGHT, TOAST_WIDTH};

pub struct PageAreas {
    pub header: Rect,
    pub input: Rect,
    pub summary: Rect,
    pub points: Rect,
    pub error: Option<Rect>,
    pub footer: Rect,
}

/// Splits the frame into the page's vertical sections. The error banner
/// row only exists while an error is on screen.
pub fn page_areas(area: Rect, has_error: bool) -> PageAreas {
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Percentage(40),
        Constraint::Min(5),
    ];
    if has_error {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    PageAreas {
        header: chunks[0],
        input: chunks[1],
        summary: chunks[2],
        points: chunks[3],
        error: if has_error { Some(chunks[4]) } else { None },
        footer: chunks[if has_error { 5 } else { 4 }],
    }
}

/// Bottom-right floating area for the toast banner.
pub fn toast_area(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    Rect {
        x: area.right().saturating_sub(width.saturating_add(1)),
        y: area.bottom().saturating_sub(height.saturating_add(1)),
        width,
        height,
    }
}
