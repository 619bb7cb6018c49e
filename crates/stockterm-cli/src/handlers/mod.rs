mod context;

pub mod config;
pub mod dates;
pub mod import;
pub mod list;
pub mod presets;
pub mod screen;
pub mod show;
pub mod vocab;

pub use context::HandlerContext;
