use std::ffi::OsStr;
use tokio::process::Command;
use tracing::debug;

use inv_core::ports::VisionError;

/// Runs `program` with `args` to completion and returns its stdout as text.
///
/// A non-zero exit becomes `VisionError::Failed` carrying the trimmed stderr.
pub(crate) async fn run_captured<I, S>(program: &str, args: I) -> Result<String, VisionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| VisionError::Launch {
            program: program.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let status = output
            .status
            .code()
            .map(|c| format!("status {c}"))
            .unwrap_or_else(|| "a signal".to_string());
        return Err(VisionError::Failed {
            program: program.to_string(),
            status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    debug!(program, bytes = output.stdout.len(), "external program finished");
    String::from_utf8(output.stdout).map_err(|_| VisionError::InvalidOutput {
        program: program.to_string(),
    })
}
