// moo-core/src/check/dependencies.rs
use tracing::debug;

/// Returns the tools from `depends_on` that cannot be found on `PATH`.
pub fn missing_dependencies(depends_on: &[String]) -> Vec<String> {
    depends_on
        .iter()
        .filter(|tool| match which::which(tool.as_str()) {
            Ok(path) => {
                debug!("Found dependency '{}' at {}", tool, path.display());
                false
            }
            Err(e) => {
                debug!("Dependency '{}' not found on PATH: {}", tool, e);
                true
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn reports_only_absent_tools() {
        let missing = missing_dependencies(&[
            "sh".to_string(),
            "moo-surely-not-a-real-tool-4f1c".to_string(),
        ]);
        assert_eq!(missing, vec!["moo-surely-not-a-real-tool-4f1c".to_string()]);
    }

    #[test]
    fn no_dependencies_means_nothing_missing() {
        assert!(missing_dependencies(&[]).is_empty());
    }
}
