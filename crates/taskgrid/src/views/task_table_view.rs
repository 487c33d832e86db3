//! Task table view
//!
//! Renders the status badges, the search line, the paged task table and
//! the status bar. All display text comes pre-computed from the view model.

use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{CellRole, TaskTableViewModel};
use crate::views::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table},
    Frame,
};

/// Main application view
#[derive(Debug, Clone)]
pub struct TaskTableView;

impl TaskTableView {
    pub fn new() -> Self {
        Self
    }
}

impl View for TaskTableView {
    fn view_id(&self) -> crate::views::ViewId {
        crate::views::ViewId::TaskTable
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = TaskTableViewModel::from_state(state, chrono::Local::now());
        render(&vm, &state.theme, area, f);
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

fn render(vm: &TaskTableViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    // Split into badge line, optional search line, table, and status bar
    let search_height = if vm.search_line.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Status count badges
            Constraint::Length(search_height), // Search input
            Constraint::Min(0),                // Task table
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    render_badges(vm, theme, chunks[0], f);
    if vm.search_line.is_some() {
        render_search(vm, theme, chunks[1], f);
    }
    if let Some(loading) = &vm.loading_text {
        render_loading(loading, vm.loading_failed, theme, chunks[2], f);
    } else {
        render_table(vm, theme, chunks[2], f);
    }
    render_status_bar(vm, theme, chunks[3], f);
}

/// One badge per status, counted over the full list
fn render_badges(vm: &TaskTableViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut spans = vec![Span::raw(" ")];
    for (label, status) in &vm.badges {
        spans.push(Span::styled(label.clone(), theme.status_badge(*status)));
        spans.push(Span::styled("  ", theme.muted()));
    }
    spans.push(Span::styled(vm.filter_label.clone(), theme.text()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_search(vm: &TaskTableViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let Some(line) = &vm.search_line else { return };
    let mut spans = vec![Span::styled(format!(" {line}"), theme.text())];
    if vm.search_active {
        spans.push(Span::styled("▌", theme.key_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(vm: &TaskTableViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let page_line = Line::from(vm.page_label.clone())
        .style(theme.muted())
        .right_aligned();

    let block = Block::bordered()
        .border_style(theme.panel_border())
        .title(Span::styled(format!(" {} ", vm.title), theme.panel_title()))
        .title(page_line);

    let header_style = theme.table_header();
    let header_cells = ["ID", "Title", "Description", "Status"]
        .into_iter()
        .map(|h| Cell::from(h).style(header_style));
    let header = Row::new(header_cells).style(header_style).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .enumerate()
        .map(|(index, row_vm)| {
            let row_style = if Some(index) == vm.selected_row {
                theme.table_selected()
            } else {
                theme.table_row()
            };

            let cells = row_vm.cells.iter().zip(row_vm.roles.iter()).map(
                |(text, role)| {
                    let cell = Cell::from(text.clone());
                    match role {
                        CellRole::Normal => cell,
                        CellRole::Selected => cell.style(theme.table_selected_cell()),
                        CellRole::Editing => cell.style(theme.table_editing_cell()),
                    }
                },
            );
            Row::new(cells).style(row_style).height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(4),      // ID
        Constraint::Percentage(30), // Title
        Constraint::Percentage(50), // Description
        Constraint::Length(13),     // Status
    ];

    let table = Table::new(rows, widths).header(header).block(block);

    let mut table_state = ratatui::widgets::TableState::default();
    table_state.select(vm.selected_row);

    f.render_stateful_widget(table, area, &mut table_state);
}

fn render_loading(text: &str, failed: bool, theme: &Theme, area: Rect, f: &mut Frame) {
    let style = if failed { theme.error() } else { theme.muted() };
    let block = Block::bordered().border_style(theme.panel_border());

    let paragraph = Paragraph::new(text.to_string())
        .block(block)
        .style(style)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Notification banner when one is live, key hints otherwise
fn render_status_bar(vm: &TaskTableViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let line = if let Some(message) = &vm.notification {
        Line::from(Span::styled(format!(" {message}"), theme.success()))
    } else {
        Line::from(vec![
            Span::styled(" a", theme.key_hint()),
            Span::styled(" add  ", theme.muted()),
            Span::styled("e", theme.key_hint()),
            Span::styled(" edit  ", theme.muted()),
            Span::styled("d", theme.key_hint()),
            Span::styled(" delete  ", theme.muted()),
            Span::styled("/", theme.key_hint()),
            Span::styled(" search  ", theme.muted()),
            Span::styled("f", theme.key_hint()),
            Span::styled(" filter  ", theme.muted()),
            Span::styled("q", theme.key_hint()),
            Span::styled(" quit", theme.muted()),
        ])
    };

    f.render_widget(Paragraph::new(line), area);
}
