pub mod controller;
pub mod filter;
pub mod loader;
pub mod render;

pub use crate::domain::model::{FilterSet, Job};
pub use crate::domain::ports::{ConfigProvider, JobSource, ViewRegion};
pub use crate::utils::error::Result;
