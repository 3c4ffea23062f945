use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command, value_parser};

use crate::compile::GlslangValidator;
use crate::config::Config;
use crate::generator::generate;

mod compile;
mod config;
mod discover;
mod generator;
mod logging;
mod output;
#[cfg(test)]
mod testing;

fn cli() -> Command<'static> {
    Command::new("shader-bytecode-gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Regenerates SPIR-V bytecode headers from the HLSL shaders of a project")
        .arg(
            Arg::new("root")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Project root containing src/Shaders and src/ShaderBytecode"),
        )
}

fn root_arg(matches: &ArgMatches) -> anyhow::Result<PathBuf> {
    matches
        .get_one::<PathBuf>("root")
        .cloned()
        .context("missing root directory argument")
}

fn main() -> anyhow::Result<ExitCode> {
    logging::init()?;

    let matches = cli().get_matches();
    let root = root_arg(&matches)?;

    #[cfg(feature = "tracing")]
    let _client = tracy_client::Client::start();

    let config = Config::for_root(&root).with_env();
    log::debug!("{:?}", config);
    let compiler = GlslangValidator::new(&config.compiler, &config.entry_point);

    let report = match generate(&config, &compiler)
        .with_context(|| format!("failed to regenerate shader headers in {}", root.display()))
    {
        Ok(report) => report,
        Err(e) => {
            log::error!("{:?}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let failed: Vec<_> = report.failures().collect();
    log::info!(
        "{} shader(s) compiled, {} failed",
        report.compiled(),
        failed.len()
    );
    for outcome in &failed {
        if let generator::ShaderResult::Failed { reason } = &outcome.result {
            log::error!(
                "{}: {} ({} not generated)",
                outcome.source.display(),
                reason,
                outcome.output.display()
            );
        }
    }

    Ok(ExitCode::from(report.exit_status()))
}
