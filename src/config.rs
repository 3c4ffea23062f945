use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_COMPILER: &str = "glslangValidator";
pub const COMPILER_ENV: &str = "SHADER_COMPILER";

/// Layout and compiler settings for a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub compiler: PathBuf,
    /// Final extensions (without the dot) recognized as shader sources.
    pub extensions: Vec<String>,
    pub entry_point: String,
}

impl Config {
    /// Standard project layout: `<root>/src/Shaders` in, `<root>/src/ShaderBytecode` out.
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            source_dir: root.join("src").join("Shaders"),
            output_dir: root.join("src").join("ShaderBytecode"),
            compiler: PathBuf::from(DEFAULT_COMPILER),
            extensions: vec!["hlsl".to_string()],
            entry_point: "main".to_string(),
        }
    }

    pub fn with_compiler(mut self, compiler: impl Into<PathBuf>) -> Self {
        self.compiler = compiler.into();
        self
    }

    /// Applies overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_compiler_override(std::env::var_os(COMPILER_ENV))
    }

    /// Replaces the compiler unless `compiler` is unset or empty.
    pub fn with_compiler_override(self, compiler: Option<OsString>) -> Self {
        match compiler {
            Some(compiler) if !compiler.is_empty() => self.with_compiler(compiler),
            _ => self,
        }
    }

    pub fn is_shader_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }
}
