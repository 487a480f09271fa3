// moo-core/src/check/self_test.rs
use std::path::Path;
use std::process::{Command, Stdio};

use moo_common::error::{MooError, Result};
use moo_common::model::SelfTestSpec;
use tracing::debug;

/// Combined output and exit status of a bare run of the installed binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfTestReport {
    pub output: String,
    pub exit_code: i32,
}

/// Runs `binary` with no arguments and no stdin, then checks its combined
/// stdout/stderr contains `spec.expected_output` and that it exited with
/// `spec.expected_status`.
pub fn run_self_test(binary: &Path, spec: &SelfTestSpec) -> Result<SelfTestReport> {
    if !binary.is_file() {
        return Err(MooError::NotFound(format!(
            "Installed binary {} does not exist (run install first)",
            binary.display()
        )));
    }

    debug!("Running self-test: {}", binary.display());
    let output = Command::new(binary)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            MooError::CommandExecError(format!("Failed to run {}: {}", binary.display(), e))
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    // Killed by a signal: no exit code.
    let exit_code = output.status.code().unwrap_or(-1);
    debug!("Self-test exited with {}: {}", exit_code, combined.trim_end());

    if exit_code != spec.expected_status {
        return Err(MooError::SelfTestError(format!(
            "expected exit status {}, got {}; output: {}",
            spec.expected_status,
            exit_code,
            combined.trim_end()
        )));
    }
    if !combined.contains(&spec.expected_output) {
        return Err(MooError::SelfTestError(format!(
            "output does not mention '{}': {}",
            spec.expected_output,
            combined.trim_end()
        )));
    }

    Ok(SelfTestReport {
        output: combined,
        exit_code,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::{tempdir, TempDir};

    use super::*;
    use crate::install::set_executable;

    fn script(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("moo-statusline");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        set_executable(&path).unwrap();
        path
    }

    fn spec() -> SelfTestSpec {
        SelfTestSpec {
            expected_output: "jq".into(),
            expected_status: 1,
        }
    }

    #[test]
    fn passes_when_dependency_is_named_and_status_is_one() {
        let dir = tempdir().unwrap();
        let bin = script(&dir, "echo 'Error: jq is required' >&2\nexit 1");

        let report = run_self_test(&bin, &spec()).unwrap();
        assert_eq!(report.exit_code, 1);
        assert!(report.output.contains("jq"));
    }

    #[test]
    fn fails_on_unexpected_status() {
        let dir = tempdir().unwrap();
        let bin = script(&dir, "echo 'jq found'\nexit 0");

        let err = run_self_test(&bin, &spec()).unwrap_err();
        assert!(matches!(err, MooError::SelfTestError(_)));
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn fails_when_output_lacks_dependency_name() {
        let dir = tempdir().unwrap();
        let bin = script(&dir, "echo 'something broke'\nexit 1");

        let err = run_self_test(&bin, &spec()).unwrap_err();
        assert!(matches!(err, MooError::SelfTestError(_)));
    }

    #[test]
    fn missing_binary_is_not_found() {
        let dir = tempdir().unwrap();
        let err = run_self_test(&dir.path().join("absent"), &spec()).unwrap_err();
        assert!(matches!(err, MooError::NotFound(_)));
    }
}
