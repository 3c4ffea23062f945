use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, bail};

/// Creates the output directory. An existing directory is fine, any other failure is not.
pub fn prepare_output_dir(dir: &Path) -> anyhow::Result<()> {
    match std::fs::create_dir(dir) {
        Ok(()) => {
            log::debug!("created output directory {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e).with_context(|| {
            format!("failed to create output directory {}", dir.display())
        }),
    }
}

/// Deletes every file directly inside `dir`.
///
/// The output directory is expected to be flat. A subdirectory aborts the
/// cleanup instead of being removed recursively.
pub fn clear_output_dir(dir: &Path) -> anyhow::Result<usize> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list output directory {}", dir.display()))?;

    let mut removed = 0;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", path.display()))?;
        if file_type.is_dir() {
            bail!(
                "output directory contains a subdirectory {}, refusing to remove it",
                path.display()
            );
        }
        std::fs::remove_file(&path)
            .with_context(|| format!("failed to remove stale output {}", path.display()))?;
        log::trace!("removed {}", path.display());
        removed += 1;
    }

    Ok(removed)
}

/// Removes a file left behind by a failed compile. A file that was never written is not an error.
pub fn discard_output(path: &Path) -> anyhow::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => {
            Err(e).with_context(|| format!("failed to remove failed output {}", path.display()))
        }
    }
}
