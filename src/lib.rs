pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, Config};
pub use crate::core::fetcher::Fetcher;
pub use crate::core::service::{RunReport, TodoService};
pub use crate::domain::model::{RawRecord, TodoRecord};
pub use crate::domain::ports::{Clock, Storage, SystemClock};
pub use crate::utils::error::{Result, ServiceError};
