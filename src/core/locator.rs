use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use crate::utils::fs::{newest_log_file, resolve_path};

/// Where a diagnosis reads its log text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    File(PathBuf),
    Stdin,
}

impl LogSource {
    /// Interpret an explicit command-line argument; `-` means standard input.
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            LogSource::Stdin
        } else {
            LogSource::File(arg.to_path_buf())
        }
    }

    /// Read the whole log. Invalid UTF-8 is replaced rather than rejected.
    pub async fn read(&self) -> Result<String> {
        let bytes = match self {
            LogSource::File(path) => tokio::fs::read(path)
                .await
                .with_context(|| format!("reading log {}", path.display()))?,
            LogSource::Stdin => {
                let mut bytes = Vec::new();
                tokio::io::stdin()
                    .read_to_end(&mut bytes)
                    .await
                    .context("reading log from stdin")?;
                bytes
            }
        };
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl std::fmt::Display for LogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogSource::File(path) => write!(f, "{}", path.display()),
            LogSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Try `candidates` in order and return the first log that exists. A
/// directory candidate yields its newest `*.log` file.
pub fn locate(base: &Path, candidates: &[String]) -> Option<PathBuf> {
    for raw in candidates {
        let path = resolve_path(base, raw);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "using log file");
            return Some(path);
        }
        if path.is_dir() {
            if let Some(found) = newest_log_file(&path) {
                tracing::debug!(dir = %path.display(), path = %found.display(), "using newest log in directory");
                return Some(found);
            }
        }
        tracing::debug!(candidate = %raw, "no log at candidate");
    }
    None
}

/// Resolve the log to read: an explicit argument wins, otherwise the
/// configured candidates are searched.
pub fn resolve_source(
    explicit: Option<&Path>,
    base: &Path,
    candidates: &[String],
) -> Option<LogSource> {
    match explicit {
        Some(arg) => Some(LogSource::from_arg(arg)),
        None => locate(base, candidates).map(LogSource::File),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn candidates(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("fastlane")).unwrap();
        fs::write(tmp.path().join("fastlane/report.xml"), "<testsuites/>").unwrap();
        fs::write(tmp.path().join("second.log"), "later").unwrap();

        let found = locate(
            tmp.path(),
            &candidates(&["missing.log", "fastlane/report.xml", "second.log"]),
        );
        assert_eq!(found, Some(tmp.path().join("fastlane/report.xml")));
    }

    #[test]
    fn test_directory_candidate_yields_log() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("gym")).unwrap();
        fs::write(tmp.path().join("gym/App-App.log"), "log").unwrap();

        let found = locate(tmp.path(), &candidates(&["gym"]));
        assert_eq!(found, Some(tmp.path().join("gym/App-App.log")));
    }

    #[test]
    fn test_empty_directory_falls_through() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("gym")).unwrap();
        fs::write(tmp.path().join("build.log"), "log").unwrap();

        let found = locate(tmp.path(), &candidates(&["gym", "build.log"]));
        assert_eq!(found, Some(tmp.path().join("build.log")));
    }

    #[test]
    fn test_nothing_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(locate(tmp.path(), &candidates(&["a.log", "b"])), None);
    }

    #[test]
    fn test_explicit_argument_wins() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("build.log"), "log").unwrap();
        let source = resolve_source(
            Some(Path::new("other.log")),
            tmp.path(),
            &candidates(&["build.log"]),
        );
        assert_eq!(source, Some(LogSource::File(PathBuf::from("other.log"))));
        assert_eq!(LogSource::from_arg(Path::new("-")), LogSource::Stdin);
    }

    #[tokio::test]
    async fn test_read_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let source = LogSource::File(tmp.path().join("nope.log"));
        assert!(source.read().await.is_err());
    }

    #[tokio::test]
    async fn test_read_replaces_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("build.log");
        fs::write(&path, [b'o', b'k', 0xff, b'!']).unwrap();
        let content = LogSource::File(path).read().await.unwrap();
        assert!(content.starts_with("ok"));
        assert!(content.ends_with('!'));
        assert!(content.contains('\u{FFFD}'));
    }
}
