pub mod labels;
pub mod number;
pub mod text;

pub use labels::{risk_label, trend_label, warning_label};
pub use number::{
    format_change, format_currency, format_number, format_percent, format_percent_detail,
    format_price, format_signed_percent, group_number,
};
pub use text::{fit, truncate};
