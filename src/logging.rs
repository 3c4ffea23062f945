use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const CONFIG_FILE: &str = "log4rs.yml";

/// Loads `log4rs.yml` from the working directory, or logs to stderr at `Info` when there is none.
pub fn init() -> anyhow::Result<()> {
    if Path::new(CONFIG_FILE).is_file() {
        return log4rs::init_file(CONFIG_FILE, Default::default())
            .context("failed to load logging config file");
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:<5})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
        .context("failed to build default logging config")?;
    log4rs::init_config(config).context("failed to install logger")?;
    Ok(())
}
