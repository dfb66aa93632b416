//! Site building around the renderer: static file mirroring, title
//! extraction, template filling and page generation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::SiteError;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Outcome of [`build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub files_copied: usize,
    pub pages: Vec<PathBuf>,
}

/// The text of the first `# ` heading line, if any.
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# ").filter(|title| !title.is_empty()))
}

/// Substitute the title and rendered content into a page template.
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Render one markdown file into `dest` using `template`.
pub fn generate_page(from: &Path, template: &str, dest: &Path) -> Result<(), SiteError> {
    log::info!("generating {} -> {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from).map_err(SiteError::io(from))?;
    let html = crate::render(&markdown).map_err(|source| SiteError::Render {
        path: from.to_path_buf(),
        source,
    })?;
    let title = extract_title(&markdown).ok_or_else(|| SiteError::MissingTitleHeading {
        path: from.to_path_buf(),
    })?;
    let page = apply_template(template, title, &html);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
    }
    fs::write(dest, page).map_err(SiteError::io(dest))
}

/// Replace `dest` with a copy of the `src` tree. Returns the number of
/// files copied.
pub fn copy_directory(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    if !src.is_dir() {
        return Err(SiteError::MissingSourceDirectory(src.to_path_buf()));
    }

    if dest.exists() {
        log::warn!("removing existing {}", dest.display());
        fs::remove_dir_all(dest).map_err(SiteError::io(dest))?;
    }
    fs::create_dir_all(dest).map_err(SiteError::io(dest))?;

    let mut copied = 0;
    for entry in walk(src)? {
        let target = dest.join(entry.relative());
        match entry {
            Entry::Dir(_) => fs::create_dir(&target).map_err(SiteError::io(&target))?,
            Entry::File(relative) => {
                let source = src.join(&relative);
                fs::copy(&source, &target).map_err(SiteError::io(&source))?;
                log::info!("copied {} -> {}", source.display(), target.display());
                copied += 1;
            }
        }
    }

    Ok(copied)
}

/// Render every file under `content_dir` into the same relative location
/// under `dest_dir`, swapping its extension for `extension`.
pub fn generate_pages(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingSourceDirectory(content_dir.to_path_buf()));
    }
    let template = fs::read_to_string(template_path).map_err(SiteError::io(template_path))?;

    let mut pages = Vec::new();
    for entry in walk(content_dir)? {
        let Entry::File(relative) = entry else {
            continue;
        };
        let dest = dest_dir.join(&relative).with_extension(extension);
        generate_page(&content_dir.join(&relative), &template, &dest)?;
        pages.push(dest);
    }

    Ok(pages)
}

/// Copy static files, then render content pages, into the output dir.
pub fn build(config: &Config) -> Result<BuildReport, SiteError> {
    let paths = &config.paths;
    let files_copied = copy_directory(&paths.static_dir, &paths.output_dir)?;
    let pages = generate_pages(
        &paths.content_dir,
        &paths.template,
        &paths.output_dir,
        &config.output.extension,
    )?;
    Ok(BuildReport {
        files_copied,
        pages,
    })
}

/// A path relative to the root being walked.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Dir(PathBuf),
    File(PathBuf),
}

impl Entry {
    fn relative(&self) -> &Path {
        match self {
            Entry::Dir(path) | Entry::File(path) => path,
        }
    }
}

/// Every entry under `root`, each directory listed before its contents.
///
/// Uses an explicit stack so deep trees cannot overflow the call stack.
fn walk(root: &Path) -> Result<Vec<Entry>, SiteError> {
    let mut entries = Vec::new();
    let mut pending = vec![PathBuf::new()];

    while let Some(relative) = pending.pop() {
        let dir = root.join(&relative);
        let mut children = fs::read_dir(&dir)
            .map_err(SiteError::io(&dir))?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(SiteError::io(&dir))?;
        children.sort();

        for child in children {
            let Some(name) = child.file_name() else {
                continue;
            };
            let child_relative = relative.join(name);
            if child.is_dir() {
                entries.push(Entry::Dir(child_relative.clone()));
                pending.push(child_relative);
            } else {
                entries.push(Entry::File(child_relative));
            }
        }
    }

    Ok(entries)
}
