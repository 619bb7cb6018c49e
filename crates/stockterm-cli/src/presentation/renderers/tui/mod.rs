//! TUI Renderer for the screen command
//!
//! Owns the screening session plus the UI-only state around it (input
//! focus, open picker, last drawn table area). Every frame is rebuilt
//! from a fresh `ScreenViewModel`.
//!
//! ## Design:
//! - Input is mapped to a `KeyAction` first, then applied to the session
//! - Snapshot fetches run on the fetcher's worker and are polled each tick
//! - Views never see the session, only view models

mod keymap;

pub use keymap::{KeyAction, map_key};

use std::collections::BTreeSet;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use stockterm_runtime::{DisplayConfig, Screener, SnapshotFetcher};

use crate::presentation::presenters::{ScreenContext, picker_options, present_screen};
use crate::presentation::view_models::{InputFocus, PickerKind};
use crate::presentation::views::tui::{
    DetailView, PickerView, StatusBarView, TableView, TopBarView,
};

const TICK: Duration = Duration::from_millis(100);
const WHEEL_ROWS: isize = 3;

// Border plus column header above the first table row.
const TABLE_CHROME_TOP: u16 = 2;

pub struct TuiRenderer {
    screener: Screener,
    fetcher: SnapshotFetcher,
    display: DisplayConfig,
    row_extent: usize,
    source: String,

    focus: InputFocus,
    picker: Option<(PickerKind, usize)>,
    detail_expanded: bool,
    table_area: Rect,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(
        screener: Screener,
        fetcher: SnapshotFetcher,
        display: DisplayConfig,
        row_extent: usize,
    ) -> Self {
        let source = fetcher.describe();
        Self {
            screener,
            fetcher,
            display,
            row_extent: row_extent.max(1),
            source,
            focus: InputFocus::Table,
            picker: None,
            detail_expanded: false,
            table_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            std::process::exit(0);
        })?;

        self.refresh();
        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            if let Some(outcome) = self.fetcher.poll() {
                self.screener.complete_fetch(outcome);
            }

            terminal.draw(|f| self.render(f))?;

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Start a fetch unless one is already outstanding.
    fn refresh(&mut self) {
        if self.screener.begin_fetch().is_err() {
            tracing::debug!("refresh ignored: fetch in flight");
            return;
        }
        if let Err(e) = self.fetcher.request() {
            tracing::warn!(error = %e, "could not start snapshot fetch");
            self.screener.complete_fetch(Err(e.to_string()));
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(action) = map_key(key, self.focus) {
            self.apply(action);
        }
    }

    pub(crate) fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,

            KeyAction::MoveUp => self.screener.move_up(),
            KeyAction::MoveDown => self.screener.move_down(),
            KeyAction::PageUp => self.screener.page_up(),
            KeyAction::PageDown => self.screener.page_down(),
            KeyAction::MoveFirst => self.screener.move_first(),
            KeyAction::MoveLast => self.screener.move_last(),
            KeyAction::Confirm => {
                if let Some(record) = self.screener.confirm() {
                    tracing::debug!(code = %record.code, "confirmed focus");
                    self.detail_expanded = !self.detail_expanded;
                }
            }
            KeyAction::Refresh => self.refresh(),

            KeyAction::ClearFilters => self.screener.clear_filters(),
            KeyAction::FocusSearch => self.focus = InputFocus::Search,
            KeyAction::OpenPicker(kind) => {
                self.picker = Some((kind, 0));
                self.focus = InputFocus::Picker;
            }
            KeyAction::ToggleAction(a) => self.screener.update_filter(|f| f.toggle_action(a)),
            KeyAction::TogglePreset(p) => self.screener.update_filter(|f| f.toggle_preset(p)),
            KeyAction::ToggleSort(field) => self.screener.toggle_sort(field),

            KeyAction::SearchInput(c) => self.screener.update_filter(|f| f.search.push(c)),
            KeyAction::SearchBackspace => self.screener.update_filter(|f| {
                f.search.pop();
            }),
            KeyAction::LeaveSearch => self.focus = InputFocus::Table,

            KeyAction::PickerUp => self.move_picker(-1),
            KeyAction::PickerDown => self.move_picker(1),
            KeyAction::PickerSelect => {
                self.pick(false);
                self.close_picker();
            }
            KeyAction::PickerToggle => self.pick(true),
            KeyAction::ClosePicker => self.close_picker(),
        }
    }

    fn close_picker(&mut self) {
        self.picker = None;
        self.focus = InputFocus::Table;
    }

    fn move_picker(&mut self, delta: isize) {
        let Some((kind, cursor)) = self.picker else {
            return;
        };
        let count = picker_options(self.screener.snapshot(), self.screener.filter(), kind).len();
        let cursor = cursor
            .saturating_add_signed(delta)
            .min(count.saturating_sub(1));
        self.picker = Some((kind, cursor));
    }

    /// Apply the option under the cursor. `toggle` flips membership;
    /// otherwise the option becomes the only selection. The "all" entry
    /// clears either way.
    fn pick(&mut self, toggle: bool) {
        let Some((kind, cursor)) = self.picker else {
            return;
        };
        let options = picker_options(self.screener.snapshot(), self.screener.filter(), kind);
        let Some(option) = options.get(cursor) else {
            return;
        };

        match (&option.value, toggle) {
            (None, _) => self.screener.update_filter(|f| match kind {
                PickerKind::Sector => f.set_sectors(BTreeSet::new()),
                PickerKind::SubSector => f.sub_sectors.clear(),
                PickerKind::Tag => f.tags.clear(),
            }),
            (Some(value), true) => self.screener.update_filter(|f| match kind {
                PickerKind::Sector => f.toggle_sector(value),
                PickerKind::SubSector => f.toggle_sub_sector(value),
                PickerKind::Tag => f.toggle_tag(value),
            }),
            (Some(value), false) => {
                let only = BTreeSet::from([value.clone()]);
                self.screener.update_filter(|f| match kind {
                    PickerKind::Sector => f.set_sectors(only),
                    PickerKind::SubSector => f.sub_sectors = only,
                    PickerKind::Tag => f.tags = only,
                })
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let step = WHEEL_ROWS * self.row_extent as isize;
        match mouse.kind {
            MouseEventKind::ScrollDown => self.screener.scroll_by(step),
            MouseEventKind::ScrollUp => self.screener.scroll_by(-step),
            MouseEventKind::Down(_) if self.focus == InputFocus::Table => {
                if let Some(index) = self.row_at(mouse.column, mouse.row)
                    && let Err(e) = self.screener.select_at(index)
                {
                    tracing::debug!(error = %e, "click outside view");
                }
            }
            _ => {}
        }
    }

    /// View index of the table row drawn at terminal cell (`x`, `y`).
    fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.table_area;
        let first_row_y = area.y + TABLE_CHROME_TOP;
        let inside = x > area.x
            && x < area.right().saturating_sub(1)
            && y >= first_row_y
            && y < area.bottom().saturating_sub(1);
        if !inside {
            return None;
        }
        let visible = self.screener.window().visible()?;
        Some(visible.lo + usize::from(y - first_row_y))
    }

    /// Split the frame into top bar, table, detail pane and status bar.
    fn layout(&self, area: Rect) -> [Rect; 4] {
        let [top, main, status] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .areas(area);

        let split = if self.detail_expanded {
            [Constraint::Percentage(35), Constraint::Percentage(65)]
        } else {
            [Constraint::Percentage(62), Constraint::Percentage(38)]
        };
        let [table, detail] = Layout::horizontal(split).areas(main);

        [top, table, detail, status]
    }

    fn render(&mut self, f: &mut Frame) {
        let [top, table, detail, status] = self.layout(f.area());

        // Body lines: the table area minus both borders and the header row.
        let body_lines = usize::from(table.height.saturating_sub(TABLE_CHROME_TOP + 1));
        self.screener.set_viewport(body_lines * self.row_extent);
        self.table_area = table;

        let screen = present_screen(
            &self.screener,
            ScreenContext {
                focus: self.focus,
                picker: self.picker,
                source: &self.source,
            },
        );

        f.render_widget(TopBarView::new(&screen.top_bar), top);
        f.render_widget(TableView::new(&screen.table, &self.display), table);
        f.render_widget(DetailView::new(screen.detail.as_ref(), &self.display), detail);
        f.render_widget(StatusBarView::new(&screen.status_bar), status);

        if let Some(picker) = &screen.picker {
            f.render_widget(PickerView::new(picker), f.area());
        }
    }
}
