use std::{
    io,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use crate::{artifact::load_spirv, compiler::Compiler, error::CompileError, stage::ShaderStage};

/// The `shaders/` directory shipped next to the crate manifest.
pub fn default_shader_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders")
}

#[derive(Debug)]
pub enum StageOutcome {
    Compiled { words: usize },
    Failed(ExitStatus),
    Unreadable(io::Error),
}

impl StageOutcome {
    pub fn is_compiled(&self) -> bool {
        matches!(self, StageOutcome::Compiled { .. })
    }
}

#[derive(Debug)]
pub struct BuildReport {
    pub shader_dir: PathBuf,
    pub stages: Vec<(ShaderStage, StageOutcome)>,
}

impl BuildReport {
    pub fn outcome(&self, stage: ShaderStage) -> Option<&StageOutcome> {
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, outcome)| outcome)
    }

    pub fn all_compiled(&self) -> bool {
        ShaderStage::ALL
            .iter()
            .all(|stage| self.outcome(*stage).is_some_and(StageOutcome::is_compiled))
    }
}

pub struct ShaderBuild {
    compiler: Compiler,
    shader_dir: PathBuf,
}

impl ShaderBuild {
    pub fn new(compiler: Compiler, shader_dir: impl Into<PathBuf>) -> Self {
        Self {
            compiler,
            shader_dir: shader_dir.into(),
        }
    }

    /// Compiles every stage in order inside the shader directory.
    ///
    /// A stage whose compiler exits non-zero does not stop the next one. A compiler that
    /// cannot be started aborts the run.
    pub fn run(&self) -> Result<BuildReport, CompileError> {
        let dir = self
            .shader_dir
            .canonicalize()
            .map_err(|source| CompileError::ShaderDir {
                path: self.shader_dir.clone(),
                source,
            })?;

        log::info!(
            "Compiling shaders in {} with {}",
            dir.display(),
            self.compiler.path().display()
        );

        let mut stages = Vec::with_capacity(ShaderStage::ALL.len());
        for stage in ShaderStage::ALL {
            let status = self.compiler.compile(&dir, stage)?;
            let outcome = if status.success() {
                match load_spirv(&dir.join(stage.output_name())) {
                    Ok(words) => StageOutcome::Compiled { words: words.len() },
                    Err(e) => StageOutcome::Unreadable(e),
                }
            } else {
                StageOutcome::Failed(status)
            };

            match &outcome {
                StageOutcome::Compiled { words } => log::info!(
                    "{} -> {} ({words} words)",
                    stage.source_name(),
                    stage.output_name()
                ),
                StageOutcome::Failed(status) => {
                    log::warn!("{stage} shader {} failed: {status}", stage.source_name())
                }
                StageOutcome::Unreadable(e) => {
                    log::warn!("{} is not a readable SPIR-V module: {e}", stage.output_name())
                }
            }
            stages.push((stage, outcome));
        }

        Ok(BuildReport {
            shader_dir: dir,
            stages,
        })
    }
}
