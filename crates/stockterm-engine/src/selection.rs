use std::fmt;

use stockterm_types::{StockCode, StockRecord};

use crate::pipeline::ScreenView;

/// Focus within the current view. `Focused.index` is always `< view.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Focused { code: StockCode, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The requested record is not part of the current view
    NotInView(StockCode),
    /// The requested view index is past the end of the view
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NotInView(code) => write!(f, "{} is not in the current view", code),
            SelectionError::OutOfRange { index, len } => {
                write!(f, "row {} is outside the view ({} rows)", index, len)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Focused { index, .. } => Some(*index),
        }
    }

    pub fn code(&self) -> Option<&StockCode> {
        match self {
            Selection::None => None,
            Selection::Focused { code, .. } => Some(code),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Re-resolve focus after the view changed: same record at its new index,
    /// else the first row, else nothing.
    pub fn sync(&mut self, view: &ScreenView, records: &[StockRecord]) {
        let resolved = self
            .code()
            .and_then(|code| view.position_of(records, code));
        *self = match resolved {
            Some(index) => focus_at(view, records, index),
            None => focus_at(view, records, 0),
        };
    }

    /// Explicit selection by identity. Rejected (state unchanged) when the
    /// record is not in the view.
    pub fn select(
        &mut self,
        view: &ScreenView,
        records: &[StockRecord],
        code: &StockCode,
    ) -> Result<usize, SelectionError> {
        let index = view
            .position_of(records, code)
            .ok_or_else(|| SelectionError::NotInView(code.clone()))?;
        *self = focus_at(view, records, index);
        Ok(index)
    }

    /// Explicit selection by view row.
    pub fn select_at(
        &mut self,
        view: &ScreenView,
        records: &[StockRecord],
        index: usize,
    ) -> Result<(), SelectionError> {
        if index >= view.len() {
            return Err(SelectionError::OutOfRange {
                index,
                len: view.len(),
            });
        }
        *self = focus_at(view, records, index);
        Ok(())
    }

    pub fn move_down(&mut self, view: &ScreenView, records: &[StockRecord]) {
        self.move_by(view, records, 1);
    }

    pub fn move_up(&mut self, view: &ScreenView, records: &[StockRecord]) {
        self.move_by(view, records, -1);
    }

    /// Move by `delta` rows, clamped to `[0, len-1]`.
    pub fn move_by(&mut self, view: &ScreenView, records: &[StockRecord], delta: isize) {
        if view.is_empty() {
            *self = Selection::None;
            return;
        }
        let Some(index) = self.index() else {
            *self = focus_at(view, records, 0);
            return;
        };
        let last = view.len() - 1;
        let current = index.min(last);
        let target = current.saturating_add_signed(delta).min(last);
        if self.index() != Some(target) {
            *self = focus_at(view, records, target);
        }
    }

    pub fn move_first(&mut self, view: &ScreenView, records: &[StockRecord]) {
        *self = focus_at(view, records, 0);
    }

    pub fn move_last(&mut self, view: &ScreenView, records: &[StockRecord]) {
        *self = focus_at(view, records, view.len().saturating_sub(1));
    }
}

fn focus_at(view: &ScreenView, records: &[StockRecord], index: usize) -> Selection {
    match view.get(records, index) {
        Some(record) => Selection::Focused {
            code: record.code.clone(),
            index,
        },
        None => Selection::None,
    }
}
