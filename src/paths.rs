//! Home-directory expansion and absolute path resolution
//!
//! The user's home and the working directory are captured once in a
//! [`PathResolver`] and handed to every component that touches template
//! paths, so nothing reads process-wide state behind the caller's back.

use crate::{Result, TempleError};
use std::path::{Component, Path, PathBuf};

/// Expands `~` and turns relative paths into absolute ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    home: PathBuf,
    cwd: PathBuf,
}

impl PathResolver {
    /// Create a resolver from explicit directories
    #[must_use]
    pub fn new(home: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            cwd: cwd.into(),
        }
    }

    /// Capture the current user's home and the process working directory
    ///
    /// # Errors
    ///
    /// Returns `TempleError::NoHomeDir` if the home directory is unknown, or
    /// an I/O error if the working directory cannot be read.
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or(TempleError::NoHomeDir)?;
        let cwd = std::env::current_dir()?;
        Ok(Self::new(home, cwd))
    }

    /// The home directory `~` expands to
    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The directory relative paths are resolved against
    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Expand a leading `~` component to the home directory
    ///
    /// `~user` forms are left untouched.
    #[must_use]
    pub fn expand(&self, path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde_with_context(path, || Some(self.home.to_string_lossy())).as_ref())
    }

    /// Expand `~`, anchor relative paths at the working directory and
    /// lexically remove `.` and `..` components
    ///
    /// The target does not have to exist.
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        let expanded = self.expand(path);
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            self.cwd.join(expanded)
        };
        clean(&absolute)
    }
}

/// Lexical normalization of an absolute path
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PathResolver {
        PathResolver::new("/home/alice", "/work/project")
    }

    #[test]
    fn test_expand_tilde_prefix() {
        let r = resolver();
        assert_eq!(r.expand("~/t/a.go"), PathBuf::from("/home/alice/t/a.go"));
        assert_eq!(r.expand("~"), PathBuf::from("/home/alice"));
    }

    #[test]
    fn test_expand_leaves_other_paths() {
        let r = resolver();
        assert_eq!(r.expand("/etc/hosts"), PathBuf::from("/etc/hosts"));
        assert_eq!(r.expand("a/~/b"), PathBuf::from("a/~/b"));
        assert_eq!(r.expand("~bob/file"), PathBuf::from("~bob/file"));
    }

    #[test]
    fn test_resolve_relative_against_cwd() {
        let r = resolver();
        assert_eq!(r.resolve("b.go"), PathBuf::from("/work/project/b.go"));
        assert_eq!(r.resolve("./b.go"), PathBuf::from("/work/project/b.go"));
        assert_eq!(r.resolve("../b.go"), PathBuf::from("/work/b.go"));
    }

    #[test]
    fn test_resolve_cleans_absolute_paths() {
        let r = resolver();
        assert_eq!(r.resolve("/a/./b/../c"), PathBuf::from("/a/c"));
        assert_eq!(r.resolve("/../x"), PathBuf::from("/x"));
        assert_eq!(r.resolve("~/t/../t/a.go"), PathBuf::from("/home/alice/t/a.go"));
    }

    #[test]
    fn test_resolve_identical_targets_compare_equal() {
        let r = PathResolver::new("/home/alice", "/home/alice/t");
        assert_eq!(r.resolve("~/t/a.go"), r.resolve("a.go"));
    }
}
