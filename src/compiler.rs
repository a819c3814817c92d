use std::{
    env::{self, consts::EXE_SUFFIX},
    ffi::OsStr,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use crate::{error::CompileError, stage::ShaderStage};

const GLSLC: &str = "glslc";

/// A `glslc` executable, either a concrete path or a bare name resolved via `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    path: PathBuf,
}

impl Compiler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Picks the explicit path if given, then the Vulkan SDK's `glslc`, then `glslc` on `PATH`.
    pub fn locate(explicit: Option<PathBuf>) -> Self {
        let sdk = env::var_os("VULKAN_SDK");
        Self::locate_with(explicit, sdk.as_deref())
    }

    fn locate_with(explicit: Option<PathBuf>, vulkan_sdk: Option<&OsStr>) -> Self {
        if let Some(path) = explicit {
            return Self::new(path);
        }

        if let Some(sdk) = vulkan_sdk {
            let exe = format!("{GLSLC}{EXE_SUFFIX}");
            // Windows installs use `Bin`, Linux and macOS use `bin`.
            for bin in ["Bin", "bin"] {
                let candidate = Path::new(sdk).join(bin).join(&exe);
                if candidate.is_file() {
                    return Self::new(candidate);
                }
            }
            log::debug!(
                "VULKAN_SDK is set to {:?} but contains no {exe}; falling back to PATH",
                sdk
            );
        }

        Self::new(GLSLC)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `<compiler> <source> -o <output>` inside `dir` and waits for it to exit.
    ///
    /// The child inherits stdout and stderr so compiler diagnostics reach the terminal as-is.
    /// A non-zero exit is returned as a status, only a failure to spawn is an error.
    pub fn compile(&self, dir: &Path, stage: ShaderStage) -> Result<ExitStatus, CompileError> {
        #[cfg(feature = "tracing")]
        let _span = tracy_client::span!("compile_stage");

        log::debug!(
            "{} {} -o {} (in {})",
            self.path.display(),
            stage.source_name(),
            stage.output_name(),
            dir.display()
        );

        Command::new(&self.path)
            .current_dir(dir)
            .arg(stage.source_name())
            .args(["-o", stage.output_name()])
            .status()
            .map_err(|source| CompileError::Spawn {
                stage,
                compiler: self.path.clone(),
                source,
            })
    }
}
