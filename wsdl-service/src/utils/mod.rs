pub mod date_layout;

pub use date_layout::{DateLayoutError, RequestDate};
