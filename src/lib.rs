pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{FileRegion, InMemoryRegion};
pub use crate::config::CliConfig;
pub use crate::core::controller::{JobBoard, UiEvent};
pub use crate::core::loader::HttpJobSource;
pub use crate::domain::model::{FilterSet, Job};
pub use crate::domain::ports::{ConfigProvider, JobSource, ViewRegion};
pub use crate::utils::error::{BoardError, Result};
