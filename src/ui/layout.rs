use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the entry-form column on the left.
const FORM_WIDTH: u16 = 36;

/// Header band, body, footer band.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    (rows[0], rows[1], rows[2])
}

/// Split the body into the entry form (left) and the task list (right).
pub fn split_body(body: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(FORM_WIDTH.min(body.width)),
            Constraint::Min(1),
        ])
        .split(body);
    (columns[0], columns[1])
}

/// Stack the two single-line input boxes inside the form column.
pub fn form_fields(form: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(form);
    (rows[0], rows[1])
}
