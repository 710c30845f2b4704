use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

use crate::error::{CompgenError, Result};
use crate::hooks::{PostGenerateHook, run_hooks};
use crate::templates;

/// A component to generate, with its identifier derived once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    pub name: String,
    pub capitalized_name: String,
    pub target_dir: PathBuf,
}

impl ComponentSpec {
    /// Builds a spec, rejecting an empty name.
    pub fn new(name: &str, target_dir: impl Into<PathBuf>) -> Result<Self> {
        if name.is_empty() {
            return Err(CompgenError::InvalidName(
                "component name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            capitalized_name: capitalize_first(name),
            target_dir: target_dir.into(),
        })
    }

    /// Paths are concatenated, never joined, so an absolute name still lands
    /// below `target_dir`.
    pub fn paths(&self) -> ComponentPaths {
        let dir = append(&self.target_dir, &self.name);
        ComponentPaths {
            component: append(&dir, &format!("{}.tsx", self.name)),
            stylesheet: append(&dir, &format!("{}.module.scss", self.name)),
            index: append(&dir, "index.ts"),
            story: append(&dir, &format!("{}.stories.tsx", self.name)),
            dir,
        }
    }
}

/// Where a component's files land on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPaths {
    pub dir: PathBuf,
    pub component: PathBuf,
    pub stylesheet: PathBuf,
    pub index: PathBuf,
    pub story: PathBuf,
}

impl ComponentPaths {
    /// Files in write order.
    pub fn files(&self) -> [&Path; 4] {
        [
            self.component.as_path(),
            self.stylesheet.as_path(),
            self.index.as_path(),
            self.story.as_path(),
        ]
    }
}

/// `<base>/<tail>` as plain text; unlike `Path::join`, an absolute tail
/// does not replace the base.
fn append(base: &Path, tail: &str) -> PathBuf {
    let mut path = base.as_os_str().to_owned();
    path.push("/");
    path.push(tail);
    PathBuf::from(path)
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Writes the four component files, then runs the post-generation hooks.
///
/// Existing files are overwritten. A failed write stops the remaining writes
/// and leaves whatever was already written in place. Hook failures are only
/// reported.
pub fn create_component(
    spec: &ComponentSpec,
    hooks: &[Box<dyn PostGenerateHook>],
) -> Result<ComponentPaths> {
    let paths = spec.paths();
    ensure_dir(&paths.dir)?;

    let payloads = [
        (&paths.component, templates::component(spec)),
        (&paths.stylesheet, templates::stylesheet(spec)),
        (&paths.index, templates::index(spec)),
        (&paths.story, templates::story(spec)),
    ];
    for (path, content) in payloads {
        std::fs::write(path, content).map_err(|err| CompgenError::at(path, err))?;
    }

    run_hooks(hooks, &spec.target_dir, &paths.dir);
    Ok(paths)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    match builder.create(dir) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(err) => Err(CompgenError::at(dir, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_only_the_first_character() {
        assert_eq!(capitalize_first("button"), "Button");
        assert_eq!(capitalize_first("buttonGroup"), "ButtonGroup");
        assert_eq!(capitalize_first("Button"), "Button");
        assert_eq!(capitalize_first("9lives"), "9lives");
        assert_eq!(capitalize_first("_private"), "_private");
        assert_eq!(capitalize_first("x"), "X");
        assert_eq!(capitalize_first("élan"), "Élan");
    }

    #[test]
    fn rejects_empty_name() {
        let err = ComponentSpec::new("", "/tmp").expect_err("empty name");
        assert!(matches!(err, CompgenError::InvalidName(_)));
    }

    #[test]
    fn builds_paths_under_named_subdirectory() {
        let spec = ComponentSpec::new("card", "/work/ui").expect("valid");
        let paths = spec.paths();
        assert_eq!(paths.dir, PathBuf::from("/work/ui/card"));
        assert_eq!(paths.component, PathBuf::from("/work/ui/card/card.tsx"));
        assert_eq!(
            paths.stylesheet,
            PathBuf::from("/work/ui/card/card.module.scss")
        );
        assert_eq!(paths.index, PathBuf::from("/work/ui/card/index.ts"));
        assert_eq!(paths.story, PathBuf::from("/work/ui/card/card.stories.tsx"));
    }

    #[test]
    fn absolute_name_stays_under_target_dir() {
        let spec = ComponentSpec::new("/elsewhere/Evil", "/work/ui").expect("valid");
        let paths = spec.paths();
        assert_eq!(paths.dir, PathBuf::from("/work/ui//elsewhere/Evil"));
        for file in paths.files() {
            assert!(file.starts_with("/work/ui/elsewhere/Evil"), "{}", file.display());
        }
        assert_eq!(
            paths.component,
            PathBuf::from("/work/ui//elsewhere/Evil//elsewhere/Evil.tsx")
        );
    }

    #[test]
    fn capitalized_name_is_derived_once() {
        let spec = ComponentSpec::new("modal", "ui").expect("valid");
        assert_eq!(spec.name, "modal");
        assert_eq!(spec.capitalized_name, "Modal");
    }
}
