use ratatui::{prelude::*, widgets::*};
use roster_client::EmployeeField;
use tui_input::Input;

use super::keys::UiState;
use crate::app::{App, Screen, TITLE};
use crate::views::not_found::HEADING;
use crate::views::{FormView, ListView, NotFoundView};

pub fn draw(f: &mut Frame, app: &App, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Screen
            Constraint::Length(3), // Footer / goto prompt
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match app.screen() {
        Screen::List(view) => draw_list(f, view, chunks[1]),
        Screen::Form(view) => draw_form(f, view, ui, chunks[1]),
        Screen::NotFound(view) => draw_not_found(f, view, chunks[1]),
    }

    match &ui.goto {
        Some(input) => draw_prompt(f, input, " Go to path ", chunks[2]),
        None => draw_footer(f, app, chunks[2]),
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {TITLE} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled("[F1] Employees", Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled("[F2] Add Employee", Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);

    let path = Paragraph::new(format!("{} ", app.route()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(path, area.inner(Margin::new(1, 1)));
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.screen() {
        Screen::List(view) if view.delete_prompt().is_some() => "y confirm | n cancel",
        Screen::List(_) => {
            "↑/↓ select | e edit | d delete | a add | r refresh | g go to | q quit"
        }
        Screen::Form(_) => "Tab/Shift+Tab field | Enter save | Esc cancel",
        Screen::NotFound(_) => "Enter back to list | g go to | q quit",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn status_line(loading: bool, error: Option<&str>, success: Option<&str>) -> Line<'static> {
    if let Some(error) = error {
        Line::styled(error.to_string(), Style::default().fg(Color::Red))
    } else if let Some(success) = success {
        Line::styled(success.to_string(), Style::default().fg(Color::Green))
    } else if loading {
        Line::styled(
            "Loading...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::raw("")
    }
}

fn draw_list(f: &mut Frame, view: &ListView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(status_line(view.is_loading(), view.error(), None)),
        chunks[0],
    );

    let header = Row::new(["ID", "Name", "Phone", "Email"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);
    let rows = view.employees().iter().map(|e| {
        Row::new([
            e.id.map(|id| id.to_string()).unwrap_or_default(),
            e.name.clone(),
            e.phone.clone(),
            e.email.clone(),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
    .highlight_symbol("> ")
    .block(
        Block::default()
            .title(format!(" Employees ({}) ", view.employees().len()))
            .borders(Borders::ALL),
    );

    let mut state = TableState::default();
    if !view.employees().is_empty() {
        state.select(Some(view.selected()));
    }
    f.render_stateful_widget(table, chunks[1], &mut state);

    if let Some(prompt) = view.delete_prompt() {
        let popup = centered(chunks[1], 50, 5);
        f.render_widget(Clear, popup);
        let dialog = Paragraph::new(vec![
            Line::raw(prompt),
            Line::raw(""),
            Line::styled("[y] Yes   [n] No", Style::default().fg(Color::Yellow)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        f.render_widget(dialog, popup);
    }
}

fn draw_form(f: &mut Frame, view: &FormView, ui: &UiState, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", view.mode().title()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)];
    for _ in EmployeeField::ALL {
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    f.render_widget(
        Paragraph::new(status_line(view.is_loading(), view.error(), view.success())),
        chunks[0],
    );

    for (i, field) in EmployeeField::ALL.into_iter().enumerate() {
        let input_area = chunks[1 + i * 2];
        let error_area = chunks[2 + i * 2];
        let focused = field == ui.focus && ui.goto.is_none();
        let error = view.field_error(field);

        if focused {
            draw_prompt(f, &ui.editor, &format!(" {} ", field.label()), input_area);
        } else {
            let border = if error.is_some() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Gray)
            };
            let value = Paragraph::new(view.value(field)).block(
                Block::default()
                    .title(format!(" {} ", field.label()))
                    .borders(Borders::ALL)
                    .border_style(border),
            );
            f.render_widget(value, input_area);
        }

        if let Some(error) = error {
            f.render_widget(
                Paragraph::new(Line::styled(error, Style::default().fg(Color::Red))),
                error_area,
            );
        }
    }
}

fn draw_not_found(f: &mut Frame, view: &NotFoundView, area: Rect) {
    let text = vec![
        Line::raw(""),
        Line::styled(
            HEADING,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(view.message()),
        Line::raw(""),
        Line::styled(
            "[Enter] Back to Employee List",
            Style::default().fg(Color::Yellow),
        ),
    ];
    let page = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(page, area);
}

/// Focused text input with the terminal cursor placed in it
fn draw_prompt(f: &mut Frame, input: &Input, title: &str, area: Rect) {
    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let paragraph = Paragraph::new(input.value())
        .style(Style::default().fg(Color::Yellow))
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(paragraph, area);

    f.set_cursor_position((
        area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
        area.y + 1,
    ));
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
