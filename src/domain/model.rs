use serde::{Deserialize, Serialize};

/// A single job posting as delivered by the data source. Loaded once,
/// read-only afterwards. Every field defaults when absent so a partial
/// record still renders instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    pub company: String,
    pub logo: String,
    pub position: String,
    pub role: String,
    pub level: String,
    pub languages: Vec<String>,
    pub tools: Vec<String>,
    pub posted_at: String,
    pub contract: String,
    pub location: String,
    pub new: bool,
    pub featured: bool,
}

impl Job {
    /// Filterable tags of this job: role, level, languages, tools.
    /// Duplicates collapsed, first occurrence wins; empty fields
    /// contribute no tag.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        let candidates = [self.role.as_str(), self.level.as_str()]
            .into_iter()
            .chain(self.languages.iter().map(String::as_str))
            .chain(self.tools.iter().map(String::as_str));

        for tag in candidates {
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }
}

/// The set of tags the user is currently filtering by. Unique membership,
/// insertion-ordered so the filter bar renders stably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    tags: Vec<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag. Returns false if it was already active.
    pub fn add(&mut self, tag: &str) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Removes a tag. Returns false if it was not active.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}
