use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item table could not be read: {0}")]
    Unreadable(String),

    #[error("item table is malformed{}: {message}", line_suffix(.line))]
    Malformed { line: Option<u64>, message: String },

    #[error("item table could not be written: {0}")]
    Write(String),
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Failure of an OCR or image-description collaborator.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("no {0} is configured")]
    NotConfigured(&'static str),

    #[error("failed to launch {program}: {message}")]
    Launch { program: String, message: String },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("{program} produced non UTF-8 output")]
    InvalidOutput { program: String },
}
