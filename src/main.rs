use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use crate::compiler::Compiler;
use crate::runner::{ShaderBuild, default_shader_dir};

mod artifact;
mod compiler;
mod error;
mod runner;
mod stage;

/// Compiles shaders/shader.vert and shaders/shader.frag to SPIR-V with glslc.
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    /// Path to the glslc executable
    #[clap(long, env = "GLSLC")]
    compiler: Option<PathBuf>,

    /// log4rs configuration file, a console logger is used if it does not exist
    #[clap(long, default_value = "log4rs.yml")]
    log_config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_config)?;

    #[cfg(feature = "tracing")]
    let _tracy = tracy_client::Client::start();

    let compiler = Compiler::locate(args.compiler);
    let report = ShaderBuild::new(compiler, default_shader_dir())
        .run()
        .context("failed to compile shaders")?;

    if !report.all_compiled() {
        log::error!(
            "Not every shader in {} compiled; see compiler output above",
            report.shader_dir.display()
        );
    }

    Ok(())
}

fn init_logging(config: &Path) -> anyhow::Result<()> {
    if config.is_file() {
        return log4rs::init_file(config, Default::default())
            .with_context(|| format!("failed to load logging config file {}", config.display()));
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h({l:<5})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .context("failed to build console logging config")?;
    log4rs::init_config(config).context("failed to install logger")?;

    Ok(())
}
