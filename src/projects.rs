use std::path::{Path, PathBuf};

use crate::loaders::ModelFormat;

/// One browsable model file
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
    pub format: Option<ModelFormat>,
}

impl Project {
    /// Named after the file stem
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path: path.to_path_buf(),
            format: ModelFormat::from_path(path),
        }
    }

    /// "STL Format", "glTF Format", ...
    pub fn format_label(&self) -> String {
        match self.format {
            Some(format) => format!("{} Format", format.name()),
            None => "Unknown Format".to_string(),
        }
    }
}

/// Ordered projects with a cursor. Stepping stops at either end.
#[derive(Debug, Clone, Default)]
pub struct ProjectList {
    projects: Vec<Project>,
    index: usize,
}

impl ProjectList {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects, index: 0 }
    }

    pub fn from_paths<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Self {
        Self::new(paths.into_iter().map(Project::from_path).collect())
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Project> {
        self.projects.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.projects.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Returns whether the cursor moved
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Returns whether the cursor moved
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// 1-based position, e.g. "2 / 3"
    pub fn position(&self) -> String {
        if self.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.projects.len())
    }

    /// Fraction of the list reached, for the slider bar
    pub fn progress(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f32 / self.projects.len() as f32
    }
}
