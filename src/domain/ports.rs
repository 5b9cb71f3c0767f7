use crate::domain::model::Job;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the job list. Fetched exactly once per widget lifetime.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<Job>>;
}

/// A writable view region the renderer targets. The widget owns two of
/// these (job list, filter bar) and replaces their contents wholesale on
/// every state change.
pub trait ViewRegion {
    /// Replaces the region's contents with the given markup.
    fn replace(&mut self, markup: &str);

    fn show(&mut self);

    fn hide(&mut self);
}

pub trait ConfigProvider: Send + Sync {
    fn data_url(&self) -> &str;
    fn output_path(&self) -> &str;
}
