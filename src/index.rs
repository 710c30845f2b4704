use std::path::{Path, PathBuf};

use crate::error::{CompgenError, Result};

const INDEX_FILE: &str = "index.ts";

/// Outcome of patching the parent index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexUpdate {
    Added,
    AlreadyPresent,
}

/// The re-export statement for a component module.
pub fn export_line(name: &str) -> String {
    format!("export * from './{}'", name)
}

pub fn parent_index_path(target_dir: &Path) -> PathBuf {
    target_dir.join(INDEX_FILE)
}

/// Returns the new index content, or `None` when the export is already there.
///
/// Presence is a substring check over the whole file, so the quoted module
/// path is what keeps `./Button'` from matching `./ButtonGroup'`.
pub fn patch_index(content: &str, name: &str) -> Option<String> {
    let line = export_line(name);
    if content.contains(&line) {
        return None;
    }
    Some(format!("{}\n{}", line, content))
}

/// Prepends the component's export to `<target_dir>/index.ts`.
///
/// The index must already exist; it is never created here.
pub fn update_parent_index(name: &str, target_dir: &Path) -> Result<IndexUpdate> {
    let path = parent_index_path(target_dir);
    let content = std::fs::read_to_string(&path).map_err(|err| CompgenError::at(&path, err))?;

    let Some(updated) = patch_index(&content, name) else {
        return Ok(IndexUpdate::AlreadyPresent);
    };
    std::fs::write(&path, updated).map_err(|err| CompgenError::at(&path, err))?;
    Ok(IndexUpdate::Added)
}
