use std::path::PathBuf;
use thiserror::Error;

/// Conditions that end a run with a specific exit status
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("The comic directory doesn't contain a directory called text: {0}")]
    TextDirMissing(PathBuf),

    #[error("Process terminated, because the following text image name contains no number: {0}")]
    TextWithoutNumber(String),

    #[error("Process terminated, because the following image name contains no number: {0}")]
    ImageWithoutNumber(String),

    #[error("Couldn't read {}", .path.display())]
    StoreRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Couldn't parse {}", .path.display())]
    StoreParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Couldn't create or edit {}", .path.display())]
    StoreWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input closed before all questions were answered")]
    InputClosed,
}

impl FatalError {
    /// Process exit status for this condition
    pub fn exit_code(&self) -> u8 {
        match self {
            FatalError::TextDirMissing(_)
            | FatalError::TextWithoutNumber(_)
            | FatalError::InputClosed => 1,
            FatalError::ImageWithoutNumber(_) => 2,
            FatalError::StoreWrite { .. } => 3,
            FatalError::StoreRead { .. } | FatalError::StoreParse { .. } => 4,
        }
    }
}

/// Exit status for any error bubbling out of a command
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FatalError>())
        .map(FatalError::exit_code)
        .unwrap_or(1)
}
