use ratatui::{prelude::*, style::palette::tailwind};

use crate::domain_models::Status;

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub selected_cell_bg: Color,

    // Table colors
    pub table_header_bg: Color,
    pub table_header_fg: Color,
    pub table_row_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,
            selected_cell_bg: tailwind::BLUE.c600,

            table_header_bg: tailwind::BLUE.c500,
            table_header_fg: tailwind::SLATE.c200,
            table_row_fg: tailwind::SLATE.c200,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "a" in "a: add task")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for table headers
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
    }

    /// Style for the selected table row
    pub fn table_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected cell within the selected row
    pub fn table_selected_cell(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_cell_bg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for normal table rows
    pub fn table_row(&self) -> Style {
        Style::default().fg(self.table_row_fg)
    }

    /// Style for a cell currently being edited
    pub fn table_editing_cell(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .bg(self.bg_panel)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Badge style for a status count, colored by status
    pub fn status_badge(&self, status: Status) -> Style {
        let fg = match status {
            Status::ToDo => self.status_info,
            Status::InProgress => self.status_warning,
            Status::Done => self.status_success,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }
}
