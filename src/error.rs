use std::path::PathBuf;

/// A node tree that cannot be serialized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("leaf node has no value")]
    MissingLeafValue,
    #[error("parent node has no tag")]
    MissingParentTag,
    #[error("parent node has no children")]
    MissingParentChildren,
}

/// Error while converting a markdown document to HTML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("unbalanced delimiter `{delimiter}`: found {count} occurrences")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        count: usize,
    },
    #[error("malformed node tree: {0}")]
    Node(#[from] NodeError),
}

/// Error while building a site from a directory of markdown files.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no `# ` heading found in {}", path.display())]
    MissingTitleHeading { path: PathBuf },
    #[error("source directory does not exist: {}", .0.display())]
    MissingSourceDirectory(PathBuf),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| SiteError::Io { path, source }
    }
}
