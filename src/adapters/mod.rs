use crate::domain::ports::ViewRegion;
use std::fs;
use std::path::{Path, PathBuf};

/// View region held entirely in memory. Used by tests and by embedders
/// that push the markup into their own UI shell.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegion {
    contents: String,
    visible: bool,
}

impl InMemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl ViewRegion for InMemoryRegion {
    fn replace(&mut self, markup: &str) {
        self.contents = markup.to_string();
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.contents.clear();
    }
}

/// View region backed by an HTML file, for the CLI shell. Each replace
/// rewrites the file; hiding truncates it.
#[derive(Debug, Clone)]
pub struct FileRegion {
    path: PathBuf,
}

impl FileRegion {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, markup: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create {}: {}", parent.display(), e);
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, markup) {
            tracing::error!("Failed to write {}: {}", self.path.display(), e);
        }
    }
}

impl ViewRegion for FileRegion {
    fn replace(&mut self, markup: &str) {
        self.write(markup);
    }

    fn show(&mut self) {}

    fn hide(&mut self) {
        self.write("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_region_replace_and_hide() {
        let mut region = InMemoryRegion::new();
        region.replace("<p>hello</p>");
        region.show();
        assert_eq!(region.contents(), "<p>hello</p>");
        assert!(region.is_visible());

        region.hide();
        assert!(!region.is_visible());
        assert_eq!(region.contents(), "");
    }

    #[test]
    fn test_file_region_writes_and_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("regions/jobs.html");
        let mut region = FileRegion::new(&path);

        region.replace("<article>card</article>");
        assert_eq!(fs::read_to_string(&path).unwrap(), "<article>card</article>");

        region.hide();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
