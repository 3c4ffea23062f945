use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

/// Everything derived from one shader source before the compiler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderJob {
    pub source: PathBuf,
    pub variable_name: String,
    pub output: PathBuf,
}

impl ShaderJob {
    pub fn new(source: &Path, output_dir: &Path) -> anyhow::Result<Self> {
        let file_name = source
            .file_name()
            .with_context(|| format!("shader path {} has no file name", source.display()))?;

        let name = file_name.to_str().with_context(|| {
            format!(
                "shader file name {} is not valid UTF-8, cannot derive a variable name",
                source.display()
            )
        })?;

        let mut header_name = OsString::from(file_name);
        header_name.push(".h");

        Ok(Self {
            source: source.to_path_buf(),
            variable_name: variable_name(name),
            output: output_dir.join(header_name),
        })
    }
}

/// `foo.vert.hlsl` becomes `foo_vert_hlsl_bytecode`.
pub fn variable_name(file_name: &str) -> String {
    format!("{}_bytecode", file_name.replace('.', "_"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileStatus {
    Success,
    Failed(String),
}

pub trait ShaderCompiler {
    /// Runs one compile to completion.
    ///
    /// `Err` means the compiler could not be run at all. A compiler that ran
    /// and rejected the shader reports `CompileStatus::Failed`.
    fn compile(&self, job: &ShaderJob) -> anyhow::Result<CompileStatus>;
}

/// Drives the `glslangValidator` executable, targeting Vulkan SPIR-V and emitting a C header.
pub struct GlslangValidator {
    program: PathBuf,
    entry_point: String,
}

impl GlslangValidator {
    pub fn new(program: impl Into<PathBuf>, entry_point: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            entry_point: entry_point.into(),
        }
    }

    pub fn command(&self, job: &ShaderJob) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-V")
            .arg("--vn")
            .arg(&job.variable_name)
            .arg("-o")
            .arg(&job.output)
            .arg(&job.source)
            .arg("-e")
            .arg(&self.entry_point);
        command
    }
}

impl ShaderCompiler for GlslangValidator {
    fn compile(&self, job: &ShaderJob) -> anyhow::Result<CompileStatus> {
        #[cfg(feature = "tracing")]
        let _span = tracy_client::Client::running()
            .map(|client| client.span(tracy_client::span_location!("compile_shader"), 0));

        let status = self.command(job).status().with_context(|| {
            format!(
                "failed to run {} on {}",
                self.program.display(),
                job.source.display()
            )
        })?;

        if status.success() {
            Ok(CompileStatus::Success)
        } else {
            Ok(CompileStatus::Failed(status.to_string()))
        }
    }
}
