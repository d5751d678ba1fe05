// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client_config;
mod config_file;
mod metric_query;
mod metric_source;
mod region;
mod report_mode;
mod time_window;

pub use client_config::*;
pub use config_file::*;
pub use metric_query::*;
pub use metric_source::*;
pub use region::*;
pub use report_mode::*;
pub use time_window::*;
