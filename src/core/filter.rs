use crate::domain::model::{FilterSet, Job};

/// A job is visible iff every active filter tag is among its derived tags.
/// An empty filter set keeps every job visible.
pub fn matches_filters(job: &Job, filters: &FilterSet) -> bool {
    if filters.is_empty() {
        return true;
    }
    let tags = job.tags();
    filters.iter().all(|f| tags.contains(&f))
}

/// Computes the visible subset of `jobs`, preserving list order.
/// Pure and deterministic; malformed jobs simply expose fewer tags.
pub fn visible_jobs<'a>(jobs: &'a [Job], filters: &FilterSet) -> Vec<&'a Job> {
    jobs.iter().filter(|job| matches_filters(job, filters)).collect()
}
