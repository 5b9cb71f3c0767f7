use crate::core::filter::visible_jobs;
use crate::core::render::{render_filter_bar, render_job_list};
use crate::domain::model::{FilterSet, Job};
use crate::domain::ports::{JobSource, ViewRegion};

/// A user interaction, already classified. Produced by the delegated click
/// dispatcher and consumed by [`JobBoard::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A tag button inside a job card was clicked.
    TagClick(String),
    /// The close button of a filter-bar chip was clicked.
    ChipClose(String),
    /// The clear-all control was clicked.
    ClearAll,
}

impl UiEvent {
    /// Delegated dispatch: a single listener at a stable ancestor classifies
    /// the clicked element by its structural class marker and `data-tag`
    /// attribute. Unknown targets produce no event.
    pub fn from_click(css_class: &str, data_tag: Option<&str>) -> Option<UiEvent> {
        match css_class {
            "tag" => data_tag.map(|t| UiEvent::TagClick(t.to_string())),
            "chip-close" => data_tag.map(|t| UiEvent::ChipClose(t.to_string())),
            "clear-filters" => Some(UiEvent::ClearAll),
            _ => None,
        }
    }
}

/// The whole widget state: the immutable job list, the active filter set,
/// and the two view regions kept consistent with them. Constructed once at
/// startup; the sole mutator of the filter set.
pub struct JobBoard<V: ViewRegion> {
    jobs: Vec<Job>,
    filters: FilterSet,
    job_list_region: V,
    filter_bar_region: V,
}

impl<V: ViewRegion> JobBoard<V> {
    pub fn new(job_list_region: V, filter_bar_region: V) -> Self {
        Self {
            jobs: Vec::new(),
            filters: FilterSet::new(),
            job_list_region,
            filter_bar_region,
        }
    }

    /// Loads the job list once and performs the initial render. A failed
    /// load leaves the board empty rather than surfacing an error.
    pub async fn start<S: JobSource>(&mut self, source: &S) {
        self.jobs = crate::core::loader::load_or_empty(source).await;
        tracing::info!("Job board ready with {} jobs", self.jobs.len());
        self.sync();
    }

    /// Applies one state transition, then re-renders both regions.
    /// Synchronous and atomic with respect to the event loop.
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::TagClick(tag) => {
                if self.filters.add(&tag) {
                    tracing::debug!("Filter added: {}", tag);
                }
            }
            UiEvent::ChipClose(tag) => {
                if self.filters.remove(&tag) {
                    tracing::debug!("Filter removed: {}", tag);
                }
            }
            UiEvent::ClearAll => {
                tracing::debug!("Filters cleared");
                self.filters.clear();
            }
        }
        self.sync();
    }

    /// Full-replace render of the filter bar and the visible job list.
    fn sync(&mut self) {
        if self.filters.is_empty() {
            self.filter_bar_region.hide();
        } else {
            self.filter_bar_region
                .replace(&render_filter_bar(&self.filters));
            self.filter_bar_region.show();
        }

        let visible = visible_jobs(&self.jobs, &self.filters);
        self.job_list_region.replace(&render_job_list(&visible));
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn visible(&self) -> Vec<&Job> {
        visible_jobs(&self.jobs, &self.filters)
    }

    pub fn job_list_region(&self) -> &V {
        &self.job_list_region
    }

    pub fn filter_bar_region(&self) -> &V {
        &self.filter_bar_region
    }
}
