//! Source tree walking with exclusion policy
//!
//! The exclusion policy is a set of gitignore-style globs (dependency
//! caches, VCS internals, build output, compiled artifacts, lockfiles)
//! compiled once per analysis. Excluded directories are pruned from
//! the walk, so their contents are never visited regardless of what
//! they contain.

use anyhow::{Context, Result};
use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Walks a source tree, yielding candidate file paths.
///
/// The walk is a pure function of filesystem state: every call to
/// [`SourceWalker::files`] re-walks the tree from scratch.
pub struct SourceWalker {
    root: PathBuf,
    overrides: Override,
}

impl SourceWalker {
    /// Compile the exclusion patterns for `root`.
    pub fn new(root: &Path, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = OverrideBuilder::new(root);
        for pattern in exclude_patterns {
            // In override position a `!` prefix turns a whitelist glob
            // into an ignore glob.
            builder
                .add(&format!("!{pattern}"))
                .with_context(|| format!("Invalid exclusion pattern '{pattern}'"))?;
        }
        let overrides = builder
            .build()
            .context("Failed to compile exclusion patterns")?;

        Ok(Self {
            root: root.to_path_buf(),
            overrides,
        })
    }

    /// Lazily yield the files under the root that survive the
    /// exclusion policy. Hidden entries are skipped; unreadable
    /// entries are logged and skipped, never aborting the walk.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .require_git(false)
            .overrides(self.overrides.clone())
            .build();

        walker.filter_map(|entry| match entry {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    Some(path.to_path_buf())
                } else {
                    None
                }
            }
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
    }
}
