use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::process::Command;

const FIND_FLOWER: &str = "import os, flower; print(os.path.dirname(flower.__file__))";

/// Directory of the Flower package to patch.
///
/// An explicit path (flag or `FLOWER_PATH`) wins; otherwise the given Python
/// interpreter is asked where it imports `flower` from.
pub fn flower_root(explicit: Option<PathBuf>, python: &str) -> Result<PathBuf> {
    if let Some(path) = explicit {
        tracing::debug!("using explicit Flower path {}", path.display());
        return Ok(path);
    }

    let output = Command::new(python)
        .args(["-c", FIND_FLOWER])
        .output()
        .with_context(|| format!("running {python}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "{python} could not import flower (is it installed?): {}",
            stderr.trim()
        );
    }

    let stdout = String::from_utf8(output.stdout).context("flower path is not UTF-8")?;
    let path = stdout.trim();
    if path.is_empty() {
        bail!("{python} printed no path for flower");
    }
    Ok(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_skips_python() {
        let path = flower_root(Some(PathBuf::from("/opt/flower")), "/nonexistent/python").unwrap();
        assert_eq!(path, PathBuf::from("/opt/flower"));
    }

    #[test]
    fn missing_interpreter_is_an_error() {
        let err = flower_root(None, "/nonexistent/python").unwrap_err();
        assert!(err.to_string().contains("running /nonexistent/python"));
    }
}
