//! Username list writing with permission fallback.
//!
//! The list is written sorted, one username per line. When the requested
//! path is not writable the writer retries in the user's home directory and
//! finally in the system temp directory, so a run against a read-only
//! working directory still produces a usable wordlist.

use crate::aggregator::UsernameSet;
use crate::constants::DEFAULT_OUTPUT_FILENAME;
use crate::error::AppError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

/// Serializes the set sorted lexicographically, newline-delimited.
fn render(usernames: &UsernameSet) -> String {
    let mut sorted: Vec<&str> = usernames.iter().collect();
    sorted.sort_unstable();

    let mut content = String::new();
    for username in sorted {
        content.push_str(username);
        content.push('\n');
    }
    content
}

/// Writes `content` at `path`, creating the parent directory if needed.
async fn try_write(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, content).await
}

/// Fallback locations tried in order when the requested path is not
/// writable: `usernames.list` in the home directory, then in the system
/// temp directory.
fn fallback_paths() -> Vec<PathBuf> {
    vec![
        dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(DEFAULT_OUTPUT_FILENAME),
        std::env::temp_dir().join(DEFAULT_OUTPUT_FILENAME),
    ]
}

/// Writes `content` at `path`, walking the fallback chain on permission
/// errors. Only `PermissionDenied` advances the chain; any other error, or
/// `PermissionDenied` on the last location, propagates.
async fn write_with_fallback(
    path: &Path,
    fallbacks: &[PathBuf],
    content: &str,
) -> Result<PathBuf, AppError> {
    match try_write(path, content).await {
        Ok(()) => return Ok(path.to_path_buf()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            warn!(path = %path.display(), "permission denied, trying fallback location");
        }
        Err(e) => return Err(e.into()),
    }

    for (index, fallback) in fallbacks.iter().enumerate() {
        match try_write(fallback, content).await {
            Ok(()) => return Ok(fallback.clone()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied && index + 1 < fallbacks.len() => {
                warn!(path = %fallback.display(), "permission denied, trying next fallback location");
            }
            Err(e) => return Err(e.into()),
        }
    }

    // Reached only with an empty fallback chain
    Err(std::io::Error::new(
        ErrorKind::PermissionDenied,
        format!("no writable location for {}", path.display()),
    )
    .into())
}

/// Writes the username list, falling back on permission errors.
///
/// Fallback chain: requested path, then `usernames.list` in the home
/// directory, then in the system temp directory. Returns the path actually
/// written.
pub async fn write_username_list(
    path: &Path,
    usernames: &UsernameSet,
) -> Result<PathBuf, AppError> {
    let content = render(usernames);
    write_with_fallback(path, &fallback_paths(), &content).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn set_of(usernames: &[&str]) -> UsernameSet {
        let mut set = UsernameSet::new();
        for username in usernames {
            set.insert(username.to_string());
        }
        set
    }

    #[test]
    fn test_render_sorts_and_terminates_lines() {
        let set = set_of(&["jsmith", "asmith", "j.smith"]);
        assert_eq!(render(&set), "asmith\nj.smith\njsmith\n");
    }

    #[test]
    fn test_render_empty_set() {
        assert_eq!(render(&UsernameSet::new()), "");
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out").join("lists").join("usernames.list");

        let written = write_username_list(&nested, &set_of(&["jsmith"]))
            .await
            .unwrap();

        assert_eq!(written, nested);
        let content = std::fs::read_to_string(&nested).unwrap();
        assert_eq!(content, "jsmith\n");
    }

    /// Creates a read-only directory inside `dir`. Returns `None` when the
    /// process ignores permission bits (e.g. running as root), in which
    /// case permission-denied behavior cannot be exercised.
    #[cfg(unix)]
    fn locked_dir(dir: &Path) -> Option<std::path::PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let locked = dir.join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();
        if std::fs::write(locked.join(".writecheck"), b"").is_ok() {
            return None;
        }
        Some(locked)
    }

    #[cfg(unix)]
    fn unlock_dir(locked: &Path) {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_permission_denied_selects_first_fallback() {
        let dir = tempdir().unwrap();
        let Some(locked) = locked_dir(dir.path()) else {
            return;
        };

        let denied = locked.join("usernames.list");
        let fallback = dir.path().join("fallback.list");
        let written = write_with_fallback(&denied, &[fallback.clone()], "jsmith\n")
            .await
            .unwrap();

        assert_eq!(written, fallback);
        assert_eq!(std::fs::read_to_string(&fallback).unwrap(), "jsmith\n");
        assert!(!denied.exists());
        unlock_dir(&locked);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_permission_denied_walks_whole_chain() {
        let dir = tempdir().unwrap();
        let Some(locked) = locked_dir(dir.path()) else {
            return;
        };

        // Requested path and first fallback both unwritable; second works
        let first = locked.join("first.list");
        let second = dir.path().join("second.list");
        let written = write_with_fallback(
            &locked.join("usernames.list"),
            &[first, second.clone()],
            "jsmith\n",
        )
        .await
        .unwrap();

        assert_eq!(written, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "jsmith\n");
        unlock_dir(&locked);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_permission_denied_on_last_fallback_is_an_error() {
        let dir = tempdir().unwrap();
        let Some(locked) = locked_dir(dir.path()) else {
            return;
        };

        let error = write_with_fallback(
            &locked.join("usernames.list"),
            &[locked.join("last.list")],
            "jsmith\n",
        )
        .await
        .unwrap_err();

        assert!(matches!(error, AppError::Io(_)));
        unlock_dir(&locked);
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("usernames.list");
        std::fs::write(&path, "stale\n").unwrap();

        write_username_list(&path, &set_of(&["fresh"])).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }
}
