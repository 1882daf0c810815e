use std::fmt::Display;

/// A project name in the two forms the scaffold needs.
///
/// `kebab` names the directory, `snake` is what CMake sees. Characters other than
/// spaces, underscores and hyphens are passed through as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    kebab: String,
    snake: String,
}

impl ProjectName {
    pub fn new(raw: &str) -> Self {
        let kebab = raw.to_lowercase().replace([' ', '_'], "-");
        let snake = kebab.replace('-', "_");
        Self { kebab, snake }
    }

    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    pub fn snake(&self) -> &str {
        &self.snake
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kebab.fmt(f)
    }
}
