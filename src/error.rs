use std::{io, path::PathBuf};

use thiserror::Error;

use crate::stage::ShaderStage;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("could not resolve shader directory {}", path.display())]
    ShaderDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not start {} for the {stage} stage", compiler.display())]
    Spawn {
        stage: ShaderStage,
        compiler: PathBuf,
        #[source]
        source: io::Error,
    },
}
