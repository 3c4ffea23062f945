use std::path::PathBuf;

use anyhow::Context;

use crate::compile::{CompileStatus, ShaderCompiler, ShaderJob};
use crate::config::Config;
use crate::discover::discover_shaders;
use crate::output::{clear_output_dir, discard_output, prepare_output_dir};

/// Process exit status when the run finished but some shaders did not compile.
pub const EXIT_SHADER_FAILED: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderResult {
    Compiled,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderOutcome {
    pub source: PathBuf,
    pub output: PathBuf,
    pub result: ShaderResult,
}

#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<ShaderOutcome>,
}

impl Report {
    pub fn compiled(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.result == ShaderResult::Compiled)
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ShaderOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, ShaderResult::Failed { .. }))
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn exit_status(&self) -> u8 {
        if self.is_success() { 0 } else { EXIT_SHADER_FAILED }
    }
}

/// Wipes the output directory and regenerates one header per shader source.
///
/// Filesystem failures and an unrunnable compiler abort the run. A shader the
/// compiler rejects is recorded in the report and its output is removed.
pub fn generate(config: &Config, compiler: &dyn ShaderCompiler) -> anyhow::Result<Report> {
    prepare_output_dir(&config.output_dir)?;
    let removed = clear_output_dir(&config.output_dir)?;
    if removed > 0 {
        log::debug!(
            "removed {} stale file(s) from {}",
            removed,
            config.output_dir.display()
        );
    }

    let shaders = discover_shaders(config)?;

    let mut report = Report::default();
    for source in shaders {
        let job = ShaderJob::new(&source, &config.output_dir)?;
        log::info!("compiling {} -> {}", source.display(), job.output.display());

        let result = match compiler.compile(&job)? {
            CompileStatus::Success => ShaderResult::Compiled,
            CompileStatus::Failed(reason) => {
                discard_output(&job.output).with_context(|| {
                    format!("failed to clean up after {}", job.source.display())
                })?;
                log::warn!("{} failed to compile: {}", source.display(), reason);
                ShaderResult::Failed { reason }
            }
        };

        report.outcomes.push(ShaderOutcome {
            source: job.source,
            output: job.output,
            result,
        });
    }

    Ok(report)
}
