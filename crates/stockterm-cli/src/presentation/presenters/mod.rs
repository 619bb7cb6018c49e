pub mod catalog;
pub mod detail;
pub mod screen;
pub mod stock;
pub mod workspace;

pub use catalog::{present_dates, present_presets, present_vocabulary};
pub use detail::present_detail;
pub use screen::{ScreenContext, picker_options, present_screen};
pub use stock::{present_row, present_stock_list};
pub use workspace::{present_config, present_config_init, present_import};
