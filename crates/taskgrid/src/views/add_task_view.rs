//! Add Task View
//!
//! A floating form for creating a new task: title, description and an
//! initial status, with inline validation feedback.

use crate::state::{AddTaskFormState, AppState, FormField};
use crate::theme::Theme;
use crate::views::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Add task view - floating form for creating tasks
#[derive(Debug, Clone)]
pub struct AddTaskView;

impl AddTaskView {
    pub fn new() -> Self {
        Self
    }
}

impl View for AddTaskView {
    fn view_id(&self) -> crate::views::ViewId {
        crate::views::ViewId::AddTask
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(&state.add_form, &state.theme, area, f);
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

/// Render the add task popup as a centered floating window
fn render(form: &AddTaskFormState, theme: &Theme, area: Rect, f: &mut Frame) {
    // Dim the underlying table for a modal effect
    let overlay = Block::default().style(
        Style::default()
            .bg(ratatui::style::Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    let popup_width = (area.width * 60 / 100).clamp(44, 70);
    let popup_height = 10;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    };

    f.render_widget(Clear, popup_area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_panel)),
        popup_area,
    );

    let footer_hint = Line::from(vec![
        Span::styled(" Tab", theme.key_hint()),
        Span::styled(" next  ", theme.muted()),
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" add  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" cancel ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add New Task ")
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(ratatui::layout::Alignment::Center)
        .border_style(theme.panel_border())
        .style(Style::default().bg(theme.bg_panel));

    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title field
            Constraint::Length(1), // Description field
            Constraint::Length(1), // Status field
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Validation error
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        f,
        chunks[0],
        "Title",
        &form.title,
        form.focused_field == FormField::Title,
        theme,
    );
    render_text_field(
        f,
        chunks[1],
        "Description",
        &form.description,
        form.focused_field == FormField::Description,
        theme,
    );
    render_status_field(
        f,
        chunks[2],
        form,
        form.focused_field == FormField::Status,
        theme,
    );

    if let Some(error) = &form.error {
        f.render_widget(
            Paragraph::new(Span::styled(error.clone(), theme.error())),
            chunks[4],
        );
    }
}

/// Render a single text input field
fn render_text_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let label_width = 13;
    let indicator = if focused { "> " } else { "  " };

    let label_style = if focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };

    let line = Line::from(vec![
        Span::styled(indicator, theme.key_hint()),
        Span::styled(
            format!("{:width$}", format!("{}:", label), width = label_width),
            label_style,
        ),
        Span::styled(value.to_string(), theme.text()),
        if focused {
            Span::styled("▌", theme.key_hint())
        } else {
            Span::raw("")
        },
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Render the status chooser field
fn render_status_field(
    f: &mut Frame,
    area: Rect,
    form: &AddTaskFormState,
    focused: bool,
    theme: &Theme,
) {
    let label_width = 13;
    let indicator = if focused { "> " } else { "  " };

    let label_style = if focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };

    let value = if focused {
        format!("< {} >", form.status.label())
    } else {
        form.status.label().to_string()
    };

    let line = Line::from(vec![
        Span::styled(indicator, theme.key_hint()),
        Span::styled(
            format!("{:width$}", "Status:", width = label_width),
            label_style,
        ),
        Span::styled(value, theme.status_badge(form.status).not_bold()),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
