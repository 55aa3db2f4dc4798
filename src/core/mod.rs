pub mod fetcher;
pub mod service;
pub mod writer;

pub use crate::domain::model::{RawRecord, TodoRecord};
pub use crate::domain::ports::{Clock, Storage};
pub use crate::utils::error::Result;
