// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct app actions

use flagdeck::app::{AppEvent, AppState, EventHandler, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn key(state: &mut AppState, code: KeyCode) -> Option<AppEvent> {
    EventHandler::handle_key_event(create_key_event(code), state)
}

fn ctrl(state: &mut AppState, ch: char) -> Option<AppEvent> {
    EventHandler::handle_key_event(
        create_key_event_with_modifiers(KeyCode::Char(ch), KeyModifiers::CONTROL),
        state,
    )
}

#[tokio::test]
async fn test_quit_key_events() {
    let mut state = AppState::default();

    assert_eq!(key(&mut state, KeyCode::Char('q')), Some(AppEvent::Quit));
    assert_eq!(key(&mut state, KeyCode::Esc), Some(AppEvent::Quit));
    assert_eq!(ctrl(&mut state, 'c'), Some(AppEvent::Quit));
}

#[tokio::test]
async fn test_flag_list_navigation_keys() {
    let mut state = AppState::default();

    assert_eq!(key(&mut state, KeyCode::Char('j')), Some(AppEvent::NextFlag));
    assert_eq!(key(&mut state, KeyCode::Down), Some(AppEvent::NextFlag));
    assert_eq!(key(&mut state, KeyCode::Char('k')), Some(AppEvent::PreviousFlag));
    assert_eq!(key(&mut state, KeyCode::Up), Some(AppEvent::PreviousFlag));
    assert_eq!(key(&mut state, KeyCode::Char('g')), Some(AppEvent::GoToTop));
    assert_eq!(key(&mut state, KeyCode::Char('G')), Some(AppEvent::GoToBottom));
}

#[tokio::test]
async fn test_flag_action_keys() {
    let mut state = AppState::default();

    assert_eq!(key(&mut state, KeyCode::Char('n')), Some(AppEvent::NewFlag));
    assert_eq!(key(&mut state, KeyCode::Char('e')), Some(AppEvent::EditFlag));
    assert_eq!(key(&mut state, KeyCode::Enter), Some(AppEvent::EditFlag));
    assert_eq!(key(&mut state, KeyCode::Char('t')), Some(AppEvent::ToggleFlag));
    assert_eq!(key(&mut state, KeyCode::Char('d')), Some(AppEvent::DeleteFlag));
    assert_eq!(key(&mut state, KeyCode::Char('f')), Some(AppEvent::RefreshFlags));
    assert_eq!(key(&mut state, KeyCode::Char('m')), Some(AppEvent::OpenMovieSearch));
    assert_eq!(key(&mut state, KeyCode::Char('x')), Some(AppEvent::DismissToast));
    assert_eq!(key(&mut state, KeyCode::Char('c')), Some(AppEvent::ClearToasts));
}

#[tokio::test]
async fn test_navigation_wraps_around() {
    let mut state = AppState::default();
    state.load_mock_data();

    EventHandler::process_event(AppEvent::PreviousFlag, &mut state);
    assert_eq!(state.selected_flag_index, Some(2));
    EventHandler::process_event(AppEvent::NextFlag, &mut state);
    assert_eq!(state.selected_flag_index, Some(0));
    EventHandler::process_event(AppEvent::GoToBottom, &mut state);
    assert_eq!(state.selected_flag_index, Some(2));
    EventHandler::process_event(AppEvent::GoToTop, &mut state);
    assert_eq!(state.selected_flag_index, Some(0));
}

#[tokio::test]
async fn test_form_captures_letters_that_are_shortcuts_elsewhere() {
    let mut state = AppState::default();
    EventHandler::process_event(AppEvent::NewFlag, &mut state);

    for ch in ['q', 'd', '?'] {
        assert_eq!(key(&mut state, KeyCode::Char(ch)), Some(AppEvent::FormInputChar(ch)));
    }
    assert_eq!(key(&mut state, KeyCode::Tab), Some(AppEvent::FormNextField));
    assert_eq!(key(&mut state, KeyCode::Esc), Some(AppEvent::FormCancel));

    EventHandler::process_event(AppEvent::FormCancel, &mut state);
    assert_eq!(state.current_view, View::FlagList);
    assert!(state.flag_form.is_none());
}

#[tokio::test]
async fn test_movie_search_keys() {
    let mut state = AppState::default();
    EventHandler::process_event(AppEvent::OpenMovieSearch, &mut state);
    assert_eq!(state.current_view, View::MovieSearch);

    assert_eq!(key(&mut state, KeyCode::Char('q')), Some(AppEvent::SearchInputChar('q')));
    assert_eq!(ctrl(&mut state, 't'), Some(AppEvent::SearchCycleType));
    assert_eq!(key(&mut state, KeyCode::Enter), Some(AppEvent::SearchSubmit));
    assert_eq!(key(&mut state, KeyCode::Esc), Some(AppEvent::SearchBack));

    EventHandler::process_event(AppEvent::SearchCycleType, &mut state);
    assert_eq!(state.movie_search.kind.map(|k| k.as_str()), Some("movie"));
}

#[tokio::test]
async fn test_help_toggle_and_capture() {
    let mut state = AppState::default();

    assert_eq!(key(&mut state, KeyCode::Char('?')), Some(AppEvent::ToggleHelp));
    assert_eq!(key(&mut state, KeyCode::F(1)), Some(AppEvent::ToggleHelp));

    EventHandler::process_event(AppEvent::ToggleHelp, &mut state);
    assert!(state.help_visible);

    // While help is shown other keys are swallowed
    assert_eq!(key(&mut state, KeyCode::Char('n')), None);
    assert_eq!(key(&mut state, KeyCode::Esc), Some(AppEvent::ToggleHelp));
}

#[tokio::test]
async fn test_confirmation_dialog_has_priority() {
    let mut state = AppState::default();
    state.load_mock_data();
    EventHandler::process_event(AppEvent::DeleteFlag, &mut state);

    assert_eq!(key(&mut state, KeyCode::Char('q')), None);
    assert_eq!(key(&mut state, KeyCode::Left), Some(AppEvent::ConfirmationToggle));
    assert_eq!(key(&mut state, KeyCode::Esc), Some(AppEvent::ConfirmationCancel));

    // 'y' selects "Yes" and confirms in one go
    assert_eq!(key(&mut state, KeyCode::Char('y')), Some(AppEvent::ConfirmationConfirm));
    assert!(state.confirmation_dialog.as_ref().unwrap().selected_option);
}

#[tokio::test]
async fn test_maintenance_keys() {
    let mut state = AppState::default();
    state.set_maintenance_mode(true);

    assert_eq!(key(&mut state, KeyCode::Char('r')), Some(AppEvent::RetryStatus));
    assert_eq!(key(&mut state, KeyCode::Char('n')), None);
    assert_eq!(key(&mut state, KeyCode::Char('q')), Some(AppEvent::Quit));
}

#[tokio::test]
async fn test_global_ctrl_shortcuts() {
    let mut state = AppState::default();

    assert_eq!(ctrl(&mut state, 'd'), Some(AppEvent::ToggleDarkMode));
    assert_eq!(ctrl(&mut state, 'x'), Some(AppEvent::DismissToast));
    // Ctrl+T only means something on the search screen
    assert_eq!(ctrl(&mut state, 't'), None);
}
