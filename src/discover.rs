use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::Config;

/// True when the final extension of `path` is one of the configured shader extensions.
pub fn is_shader(config: &Config, path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.is_shader_extension(ext))
}

/// Lists the shader sources directly inside the configured source directory, sorted by file name.
pub fn discover_shaders(config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let dir = &config.source_dir;
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list shader directory {}", dir.display()))?;

    let mut shaders = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read entry in {}", dir.display()))?
            .path();
        if !is_shader(config, &path) {
            continue;
        }
        if !path.is_file() {
            log::warn!("skipping {}, not a regular file", path.display());
            continue;
        }
        shaders.push(path);
    }

    shaders.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!("found {} shader(s) in {}", shaders.len(), dir.display());
    Ok(shaders)
}
