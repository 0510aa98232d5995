//! Keyboard handling
//!
//! Translates key presses into view operations and navigation. Terminal
//! I/O stays in `ui::run`, so this is exercised directly in tests.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use roster_client::EmployeeField;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::app::{App, Screen};
use crate::router::Route;
use crate::views::{FormView, ListView, NotFoundView};

/// UI-only state that does not belong to any view
pub struct UiState {
    /// Open "go to path" prompt
    pub goto: Option<Input>,
    /// Focused form field
    pub focus: EmployeeField,
    /// Editor of the focused field
    pub editor: Input,
    route: Option<Route>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            goto: None,
            focus: EmployeeField::Name,
            editor: Input::default(),
            route: None,
        }
    }
}

impl UiState {
    /// Follow route changes and values filled in by the form itself
    pub fn sync(&mut self, app: &App) {
        if self.route.as_ref() != Some(app.route()) {
            self.route = Some(app.route().clone());
            self.focus = EmployeeField::Name;
            self.editor = Input::default();
        }
        if let Screen::Form(view) = app.screen() {
            let value = view.value(self.focus);
            if self.editor.value() != value {
                self.editor = Input::new(value.to_string());
            }
        }
    }

    fn move_focus(&mut self, view: &mut FormView, to: EmployeeField) {
        view.touch(self.focus);
        self.focus = to;
        self.editor = Input::new(view.value(to).to_string());
    }
}

enum Action {
    None,
    Navigate(Route),
    OpenGoto,
    Quit,
}

pub fn handle_key(app: &mut App, ui: &mut UiState, key: KeyEvent) {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }
    ui.sync(app);

    if let Some(prompt) = ui.goto.as_mut() {
        match key.code {
            KeyCode::Enter => {
                let path = prompt.value().to_string();
                ui.goto = None;
                app.navigate_to(&path);
            }
            KeyCode::Esc => ui.goto = None,
            _ => {
                prompt.handle_event(&Event::Key(key));
            }
        }
        return;
    }

    let action = match key.code {
        KeyCode::F(1) => Action::Navigate(Route::List),
        KeyCode::F(2) => Action::Navigate(Route::Add),
        _ => match app.screen_mut() {
            Screen::List(view) => list_key(view, key),
            Screen::Form(view) => form_key(view, ui, key),
            Screen::NotFound(view) => not_found_key(view, key),
        },
    };

    match action {
        Action::None => {}
        Action::Navigate(route) => app.navigate(route),
        Action::OpenGoto => ui.goto = Some(Input::default()),
        Action::Quit => app.quit(),
    }
}

fn list_key(view: &mut ListView, key: KeyEvent) -> Action {
    if view.delete_prompt().is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => view.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Esc => view.dismiss_delete(),
            _ => {}
        }
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('g') => Action::OpenGoto,
        KeyCode::Char('r') => {
            view.refresh();
            Action::None
        }
        KeyCode::Char('a') => Action::Navigate(Route::Add),
        KeyCode::Char('e') | KeyCode::Enter => match view.selected_employee().and_then(|e| e.id) {
            Some(id) => Action::Navigate(Route::Edit(id)),
            None => Action::None,
        },
        KeyCode::Char('d') | KeyCode::Delete => {
            view.request_delete_selected();
            Action::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            view.select_prev();
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view.select_next();
            Action::None
        }
        _ => Action::None,
    }
}

fn form_key(view: &mut FormView, ui: &mut UiState, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::Navigate(view.cancel()),
        KeyCode::Enter => {
            view.touch(ui.focus);
            view.submit();
            Action::None
        }
        KeyCode::Tab | KeyCode::Down => {
            ui.move_focus(view, ui.focus.next());
            Action::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            ui.move_focus(view, ui.focus.prev());
            Action::None
        }
        _ => {
            if ui.editor.handle_event(&Event::Key(key)).is_some() {
                view.set_value(ui.focus, ui.editor.value());
            }
            Action::None
        }
    }
}

fn not_found_key(view: &NotFoundView, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char('l') => Action::Navigate(view.back_link()),
        KeyCode::Char('g') => Action::OpenGoto,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}
