pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod mvu;
pub mod session;
pub mod view;

pub use controller::feed::extract_rounds;
pub use controller::resolver::{resolve_report, resolve_selection};
pub use controller::round_date::normalize_round_date;
pub use controller::round_label::parse_round_label;
pub use error::AppError;
