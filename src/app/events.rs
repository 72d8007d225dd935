// ABOUTME: Event handling system for keyboard input and app actions

use crate::app::state::{AsyncAction, ConfirmAction, View};
use crate::app::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    ToggleDarkMode,
    DismissToast,
    ClearToasts,
    // Flag list
    NextFlag,
    PreviousFlag,
    GoToTop,
    GoToBottom,
    RefreshFlags,
    NewFlag,
    EditFlag,
    ToggleFlag,
    DeleteFlag,
    OpenMovieSearch,
    // Flag form
    FormCancel,
    FormSubmit,
    FormNextField,
    FormInputChar(char),
    FormBackspace,
    // Movie search
    SearchBack,
    SearchSubmit,
    SearchNextField,
    SearchCycleType,
    SearchInputChar(char),
    SearchBackspace,
    NextMovie,
    PreviousMovie,
    // Maintenance page
    RetryStatus,
    // Confirmation dialog events
    ConfirmationToggle,
    ConfirmationConfirm,
    ConfirmationCancel,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key_event.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        // Handle confirmation dialog first (highest priority)
        if state.confirmation_dialog.is_some() {
            return match key_event.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(AppEvent::ConfirmationToggle),
                KeyCode::Char('y') => {
                    if let Some(dialog) = state.confirmation_dialog.as_mut() {
                        dialog.selected_option = true;
                    }
                    Some(AppEvent::ConfirmationConfirm)
                }
                KeyCode::Enter => Some(AppEvent::ConfirmationConfirm),
                KeyCode::Esc | KeyCode::Char('n') => Some(AppEvent::ConfirmationCancel),
                _ => None,
            };
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1) => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if ctrl {
            return match key_event.code {
                KeyCode::Char('d') => Some(AppEvent::ToggleDarkMode),
                KeyCode::Char('x') => Some(AppEvent::DismissToast),
                KeyCode::Char('t') if state.current_view == View::MovieSearch => {
                    Some(AppEvent::SearchCycleType)
                }
                _ => None,
            };
        }

        if key_event.code == KeyCode::F(1) {
            return Some(AppEvent::ToggleHelp);
        }

        match state.current_view {
            View::FlagList => Self::handle_flag_list_keys(key_event),
            View::FlagForm => Self::handle_flag_form_keys(key_event),
            View::MovieSearch => Self::handle_movie_search_keys(key_event),
            View::Maintenance => Self::handle_maintenance_keys(key_event),
        }
    }

    fn handle_flag_list_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::NextFlag),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::PreviousFlag),
            KeyCode::Char('g') => Some(AppEvent::GoToTop),
            KeyCode::Char('G') => Some(AppEvent::GoToBottom),
            KeyCode::Char('f') => Some(AppEvent::RefreshFlags), // Manual refresh
            KeyCode::Char('n') => Some(AppEvent::NewFlag),
            KeyCode::Char('e') | KeyCode::Enter => Some(AppEvent::EditFlag),
            KeyCode::Char('t') | KeyCode::Char(' ') => Some(AppEvent::ToggleFlag),
            KeyCode::Char('d') => Some(AppEvent::DeleteFlag),
            KeyCode::Char('m') => Some(AppEvent::OpenMovieSearch),
            KeyCode::Char('x') => Some(AppEvent::DismissToast),
            KeyCode::Char('c') => Some(AppEvent::ClearToasts),
            _ => None,
        }
    }

    // Text input views: every printable char goes to the focused field.
    fn handle_flag_form_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::FormCancel),
            KeyCode::Enter => Some(AppEvent::FormSubmit),
            KeyCode::Tab => Some(AppEvent::FormNextField),
            KeyCode::Backspace => Some(AppEvent::FormBackspace),
            KeyCode::Char(ch) => Some(AppEvent::FormInputChar(ch)),
            _ => None,
        }
    }

    fn handle_movie_search_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::SearchBack),
            KeyCode::Enter => Some(AppEvent::SearchSubmit),
            KeyCode::Tab => Some(AppEvent::SearchNextField),
            KeyCode::Down => Some(AppEvent::NextMovie),
            KeyCode::Up => Some(AppEvent::PreviousMovie),
            KeyCode::Backspace => Some(AppEvent::SearchBackspace),
            KeyCode::Char(ch) => Some(AppEvent::SearchInputChar(ch)),
            _ => None,
        }
    }

    fn handle_maintenance_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('r') => Some(AppEvent::RetryStatus),
            KeyCode::Char('x') => Some(AppEvent::DismissToast),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::ToggleDarkMode => state.toggle_dark_mode(),
            AppEvent::DismissToast => state.dismiss_latest_toast(),
            AppEvent::ClearToasts => state.clear_toasts(),
            AppEvent::NextFlag => state.next_flag(),
            AppEvent::PreviousFlag => state.previous_flag(),
            AppEvent::GoToTop => state.first_flag(),
            AppEvent::GoToBottom => state.last_flag(),
            AppEvent::RefreshFlags => {
                // Mark for async processing to reload the flag list
                state.pending_async_action = Some(AsyncAction::LoadFlags);
            }
            AppEvent::NewFlag => state.open_create_form(),
            AppEvent::EditFlag => state.open_edit_form(),
            AppEvent::ToggleFlag => {
                if let Some(id) = state.selected_flag().map(|f| f.id) {
                    state.pending_async_action = Some(AsyncAction::ToggleFlag(id));
                }
            }
            AppEvent::DeleteFlag => state.show_delete_confirmation(),
            AppEvent::OpenMovieSearch => state.show_view(View::MovieSearch),
            AppEvent::FormCancel => state.cancel_form(),
            AppEvent::FormSubmit => {
                if state.flag_form.as_ref().is_some_and(|f| !f.submitting) {
                    state.pending_async_action = Some(AsyncAction::SubmitFlagForm);
                }
            }
            AppEvent::FormNextField => {
                if let Some(form) = state.flag_form.as_mut() {
                    form.next_field();
                }
            }
            AppEvent::FormInputChar(ch) => {
                if let Some(form) = state.flag_form.as_mut() {
                    form.input_char(ch);
                }
            }
            AppEvent::FormBackspace => {
                if let Some(form) = state.flag_form.as_mut() {
                    form.backspace();
                }
            }
            AppEvent::SearchBack => state.show_view(View::FlagList),
            AppEvent::SearchSubmit => {
                if !state.movie_search.loading {
                    state.pending_async_action = Some(AsyncAction::SearchMovies);
                }
            }
            AppEvent::SearchNextField => state.movie_search.next_field(),
            AppEvent::SearchCycleType => state.movie_search.cycle_kind(),
            AppEvent::SearchInputChar(ch) => state.movie_search.input_char(ch),
            AppEvent::SearchBackspace => state.movie_search.backspace(),
            AppEvent::NextMovie => state.movie_search.next_movie(),
            AppEvent::PreviousMovie => state.movie_search.previous_movie(),
            AppEvent::RetryStatus => {
                state.pending_async_action = Some(AsyncAction::CheckStatus);
            }
            AppEvent::ConfirmationToggle => {
                if let Some(ref mut dialog) = state.confirmation_dialog {
                    dialog.selected_option = !dialog.selected_option;
                }
            }
            AppEvent::ConfirmationConfirm => {
                if let Some(dialog) = state.confirmation_dialog.take() {
                    if dialog.selected_option {
                        match dialog.confirm_action {
                            ConfirmAction::DeleteFlag(id) => {
                                state.pending_async_action = Some(AsyncAction::DeleteFlag(id));
                            }
                        }
                    }
                    // If not confirmed, just close the dialog
                }
            }
            AppEvent::ConfirmationCancel => {
                state.confirmation_dialog = None;
            }
        }
    }
}
