use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
/// Border of the pane that owns keystrokes.
pub const FOCUS_BORDER: Color = Color::Rgb(0x21, 0x96, 0xf3);
/// Completed tasks render green.
pub const TASK_DONE: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const STATUS_ERROR: Color = Color::Rgb(0xf4, 0x43, 0x36);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
/// Ghost text in the empty due-date field.
pub const PLACEHOLDER: Color = Color::Rgb(0x80, 0x80, 0x80);
