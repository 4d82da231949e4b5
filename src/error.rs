use std::{io, path::PathBuf};

use thiserror::Error;

/// Every way a recording can fail. All of them are I/O.
#[derive(Debug, Error)]
pub enum IoFailure {
    #[error("failed to write to the console")]
    Prompt(#[source] io::Error),

    #[error("failed to read the idea from standard input")]
    Read(#[source] io::Error),

    #[error("standard input closed before an idea was entered")]
    InputClosed,

    #[error("failed to open {} for appending", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write entry to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
