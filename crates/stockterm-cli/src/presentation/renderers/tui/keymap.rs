//! Key bindings of the interactive screen, per input focus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use stockterm_engine::{Preset, SortField};
use stockterm_types::Action;

use crate::presentation::presenters::catalog::preset_key;
use crate::presentation::presenters::screen::action_key;
use crate::presentation::view_models::{InputFocus, PickerKind};

/// What a key press asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,

    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    MoveFirst,
    MoveLast,
    Confirm,
    Refresh,

    ClearFilters,
    FocusSearch,
    OpenPicker(PickerKind),
    ToggleAction(Action),
    TogglePreset(Preset),
    ToggleSort(SortField),

    SearchInput(char),
    SearchBackspace,
    LeaveSearch,

    PickerUp,
    PickerDown,
    PickerSelect,
    PickerToggle,
    ClosePicker,
}

pub fn map_key(key: KeyEvent, focus: InputFocus) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    match focus {
        InputFocus::Table => map_table_key(key.code),
        InputFocus::Search => map_search_key(key.code),
        InputFocus::Picker => map_picker_key(key.code),
    }
}

fn map_table_key(code: KeyCode) -> Option<KeyAction> {
    let action = match code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home | KeyCode::Char('g') => KeyAction::MoveFirst,
        KeyCode::End | KeyCode::Char('G') => KeyAction::MoveLast,
        KeyCode::Enter => KeyAction::Confirm,
        KeyCode::Char('r') => KeyAction::Refresh,
        KeyCode::Esc => KeyAction::ClearFilters,
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char('/') => KeyAction::FocusSearch,
        KeyCode::Char('s') => KeyAction::OpenPicker(PickerKind::Sector),
        KeyCode::Char('u') => KeyAction::OpenPicker(PickerKind::SubSector),
        KeyCode::Char('t') => KeyAction::OpenPicker(PickerKind::Tag),
        KeyCode::F(n) => {
            let field = SortField::ALL.get(usize::from(n).checked_sub(1)?)?;
            KeyAction::ToggleSort(*field)
        }
        KeyCode::Char(c) => {
            if let Some(action) = Action::ALL.into_iter().find(|a| action_key(*a) == c) {
                KeyAction::ToggleAction(action)
            } else {
                let preset = Preset::ALL.into_iter().find(|p| preset_key(*p) == c)?;
                KeyAction::TogglePreset(preset)
            }
        }
        _ => return None,
    };
    Some(action)
}

fn map_search_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Esc | KeyCode::Enter => Some(KeyAction::LeaveSearch),
        KeyCode::Backspace => Some(KeyAction::SearchBackspace),
        KeyCode::Char(c) => Some(KeyAction::SearchInput(c)),
        _ => None,
    }
}

fn map_picker_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::PickerUp),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::PickerDown),
        KeyCode::Enter => Some(KeyAction::PickerSelect),
        KeyCode::Char(' ') => Some(KeyAction::PickerToggle),
        KeyCode::Esc | KeyCode::Char('q') => Some(KeyAction::ClosePicker),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_table_bindings() {
        let f = InputFocus::Table;
        assert_eq!(map_key(press(KeyCode::Char('q')), f), Some(KeyAction::Quit));
        assert_eq!(map_key(press(KeyCode::Down), f), Some(KeyAction::MoveDown));
        assert_eq!(map_key(press(KeyCode::Esc), f), Some(KeyAction::ClearFilters));
        assert_eq!(
            map_key(press(KeyCode::Char('b')), f),
            Some(KeyAction::ToggleAction(Action::Buy))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('x')), f),
            Some(KeyAction::ToggleAction(Action::Avoid))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('1')), f),
            Some(KeyAction::TogglePreset(Preset::ALL[0]))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('u')), f),
            Some(KeyAction::OpenPicker(PickerKind::SubSector))
        );
        assert_eq!(map_key(press(KeyCode::Char('z')), f), None);
    }

    #[test]
    fn test_function_keys_follow_sort_field_order() {
        let f = InputFocus::Table;
        assert_eq!(
            map_key(press(KeyCode::F(1)), f),
            Some(KeyAction::ToggleSort(SortField::ALL[0]))
        );
        assert_eq!(
            map_key(press(KeyCode::F(8)), f),
            Some(KeyAction::ToggleSort(SortField::ALL[7]))
        );
        assert_eq!(map_key(press(KeyCode::F(9)), f), None);
        assert_eq!(map_key(press(KeyCode::F(0)), f), None);
    }

    #[test]
    fn test_search_focus_captures_letters() {
        let f = InputFocus::Search;
        assert_eq!(map_key(press(KeyCode::Char('q')), f), Some(KeyAction::SearchInput('q')));
        assert_eq!(map_key(press(KeyCode::Char('b')), f), Some(KeyAction::SearchInput('b')));
        assert_eq!(map_key(press(KeyCode::Backspace), f), Some(KeyAction::SearchBackspace));
        assert_eq!(map_key(press(KeyCode::Esc), f), Some(KeyAction::LeaveSearch));
    }

    #[test]
    fn test_picker_bindings() {
        let f = InputFocus::Picker;
        assert_eq!(map_key(press(KeyCode::Char(' ')), f), Some(KeyAction::PickerToggle));
        assert_eq!(map_key(press(KeyCode::Enter), f), Some(KeyAction::PickerSelect));
        assert_eq!(map_key(press(KeyCode::Esc), f), Some(KeyAction::ClosePicker));
    }

    #[test]
    fn test_ctrl_c_quits_from_any_focus() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for focus in [InputFocus::Table, InputFocus::Search, InputFocus::Picker] {
            assert_eq!(map_key(ctrl_c, focus), Some(KeyAction::Quit));
        }
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, InputFocus::Table), None);
    }
}
