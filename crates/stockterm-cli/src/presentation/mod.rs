//! # Presentation Layer
//!
//! Everything between a session result and the terminal, organized as an
//! adaptation of **MVVM (Model-View-ViewModel)**.
//!
//! ## Data Flow
//!
//! ### Console commands (plain / JSON / CSV):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(json)==> serde_json --> stdout
//!                                                                  ==(csv)===> CsvTable ----> stdout
//!                                                                  ==(plain)=> [ View ] -----> stdout
//! ```
//!
//! ### Interactive screen:
//!
//! ```text
//! key/mouse --> [ TuiRenderer ] --> Screener (session) --> [ Presenter ] --> ScreenViewModel --> [ Widgets ]
//!                  (UI state: focus, picker)
//! ```
//!
//! ## Rules
//!
//! 1. **Raw data in view models.** Prices, ratios and scores stay numbers;
//!    JSON output is an API. Formatting happens in views via `formatters`.
//! 2. **Presenters decide, views draw.** Tones, badges, warnings and empty
//!    states are chosen by presenters; views only map them to text or color.
//! 3. **One pipeline.** `list` and the interactive screen derive rows from
//!    the same `Screener`, so a filter means the same thing everywhere.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
pub use views::ViewContext;
