use crate::ui::app::{App, Focus};
use crate::ui::editor::EditorField;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{form_fields, layout_regions, split_body};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER, TASK_DONE,
};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Ghost text shown in the empty due-date field. Presentation only: it is
/// never part of the field's content and never reaches the formatter or
/// the saved record.
const DATE_HINT: &str = "MM/DD/YY";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.size();
    let (header, body, footer) = layout_regions(area);

    let list = app.task_list();
    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(list.pending_count(), list.completed_count()),
        header,
    );

    let (form, list_area) = split_body(body);
    draw_form(frame, app, form);
    draw_task_list(frame, app, list_area);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.store_error()), footer);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, form: Rect) {
    let editor = app.editor();
    let (description_area, due_date_area) = form_fields(form);

    let description_focused =
        app.focus() == Focus::Editor && editor.focused == EditorField::Description;
    let due_date_focused = app.focus() == Focus::Editor && editor.focused == EditorField::DueDate;

    draw_field(
        frame,
        description_area,
        "Task",
        &editor.description,
        None,
        description_focused,
    );
    draw_field(
        frame,
        due_date_area,
        "Due Date",
        &editor.due_date,
        Some(DATE_HINT),
        due_date_focused,
    );
}

/// A one-line bordered input box. Shows the tail of the text when it is
/// wider than the box, keeping the insertion point visible.
fn draw_field(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    text: &str,
    ghost: Option<&'static str>,
    focused: bool,
) {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let content_width = area.width.saturating_sub(2) as usize;
    let visible = tail_chars(text, content_width.saturating_sub(1));

    let line = if text.is_empty() {
        match ghost {
            Some(hint) => Line::from(Span::styled(hint, Style::default().fg(PLACEHOLDER))),
            None => Line::from(""),
        }
    } else {
        Line::from(Span::styled(
            visible.clone(),
            Style::default().fg(HEADER_TEXT),
        ))
    };

    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        area,
    );

    // Cursor sits at the end of the field; the mask re-derives the whole
    // string on every edit so there is no mid-string editing.
    if focused && area.width > 2 && area.height > 2 {
        let x = area.x + 1 + visible.chars().count() as u16;
        let y = area.y + 1;
        frame.set_cursor(x, y);
    }
}

fn draw_task_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let list = app.task_list();
    let title = format!("Tasks ({})", list.tasks.len());
    let focused = app.focus() == Focus::List;
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };

    let visible_rows = area.height.saturating_sub(2) as usize;
    let first = scroll_offset(list.selected, list.tasks.len(), visible_rows);

    let mut lines: Vec<Line> = Vec::new();
    if list.tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            "No tasks yet. Add one on the left.",
            Style::default().fg(PLACEHOLDER),
        )));
    }
    for (index, task) in list.tasks.iter().enumerate().skip(first).take(visible_rows) {
        let fg = if task.is_complete {
            TASK_DONE
        } else {
            HEADER_TEXT
        };
        let mut style = Style::default().fg(fg);
        if focused && index == list.selected {
            style = style.bg(ACTIVE_HIGHLIGHT);
        }
        lines.push(Line::from(Span::styled(task.display_line(), style)));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        area,
    );
}

/// First visible row so the selection stays on screen.
fn scroll_offset(selected: usize, len: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 || len <= visible_rows {
        return 0;
    }
    let selected = selected.min(len.saturating_sub(1));
    selected.saturating_sub(visible_rows - 1)
}

/// Last `max` characters of `text`.
fn tail_chars(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    text.chars().skip(count - max).collect()
}
