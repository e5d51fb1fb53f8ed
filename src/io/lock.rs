use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Advisory file lock serializing writes to the store directory.
///
/// Uses platform-native flock (Unix) so a running TUI and a concurrent CLI
/// invocation never interleave prefs writes. The `.lock` file is never
/// removed: waiters keep polling the fd they opened, and unlinking the path
/// would let a newcomer lock a fresh inode while a waiter locks the stale
/// one — two holders at once. The empty marker file is harmless.
pub struct FileLock {
    _file: File,
}

/// Error type for lock operations
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not create lock file at {path}: {source}")]
    CreateError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not acquire lock on {path}: another tick process may be writing")]
    Timeout { path: PathBuf },
    #[error("lock error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FileLock {
    /// Acquire an advisory lock on the store directory.
    /// Blocks up to `timeout` waiting for the lock.
    pub fn acquire(store_dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        if !store_dir.exists() {
            fs::create_dir_all(store_dir).map_err(|e| LockError::CreateError {
                path: store_dir.to_path_buf(),
                source: e,
            })?;
        }
        let lock_path = store_dir.join(".lock");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| LockError::CreateError {
                path: lock_path.clone(),
                source: e,
            })?;

        let start = Instant::now();
        loop {
            match try_lock(&file) {
                Ok(()) => {
                    return Ok(FileLock { _file: file });
                }
                Err(_) if start.elapsed() < timeout => {
                    std::thread::sleep(Duration::from_millis(10));
                }
                Err(_) => {
                    return Err(LockError::Timeout { path: lock_path });
                }
            }
        }
    }

    /// Acquire with default timeout (5 seconds)
    pub fn acquire_default(store_dir: &Path) -> Result<Self, LockError> {
        Self::acquire(store_dir, Duration::from_secs(5))
    }
}

/// Try to acquire an exclusive flock on the file (non-blocking)
#[cfg(unix)]
fn try_lock(file: &File) -> Result<(), std::io::Error> {
    use std::os::unix::io::AsRawFd;
    let fd = file.as_raw_fd();
    let result = unsafe { libc::flock(fd, libc::LOCK_EX | libc::LOCK_NB) };
    if result == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn try_lock(_file: &File) -> Result<(), std::io::Error> {
    // On non-Unix platforms, just succeed (advisory locking)
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn acquire_and_release() {
        let tmp = TempDir::new().unwrap();

        let lock = FileLock::acquire_default(tmp.path());
        assert!(lock.is_ok());
        drop(lock);

        // Releasing makes the lock available again
        let lock2 = FileLock::acquire_default(tmp.path());
        assert!(lock2.is_ok());
    }

    #[test]
    fn contention_times_out() {
        let tmp = TempDir::new().unwrap();

        let _held = FileLock::acquire_default(tmp.path()).unwrap();
        let second = FileLock::acquire(tmp.path(), Duration::from_millis(50));
        assert!(second.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn release_keeps_the_lock_file_in_place() {
        use std::os::unix::fs::MetadataExt;

        let tmp = TempDir::new().unwrap();
        let lock_path = tmp.path().join(".lock");

        let lock = FileLock::acquire_default(tmp.path()).unwrap();
        let before = fs::metadata(&lock_path).unwrap();
        drop(lock);

        // Same path, same inode: a waiter polling its original fd still
        // contends on the same file as any new arrival.
        let after = fs::metadata(&lock_path).unwrap();
        assert_eq!(before.ino(), after.ino());
    }

    #[test]
    fn waiter_excludes_newcomers_after_release() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().to_path_buf();

        let held = FileLock::acquire_default(&dir).unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        let waiter = std::thread::spawn({
            let dir = dir.clone();
            move || {
                let lock = FileLock::acquire(&dir, Duration::from_secs(2)).unwrap();
                tx.send(()).unwrap();
                std::thread::sleep(Duration::from_millis(300));
                drop(lock);
            }
        });

        std::thread::sleep(Duration::from_millis(50));
        drop(held);
        rx.recv().unwrap();

        // The waiter holds the lock now; a fresh acquire must not slip in
        // on a different inode.
        let newcomer = FileLock::acquire(&dir, Duration::from_millis(50));
        assert!(newcomer.is_err());
        waiter.join().unwrap();
    }

    #[test]
    fn acquire_creates_missing_store_dir() {
        let tmp = TempDir::new().unwrap();
        let store_dir = tmp.path().join("store");
        let lock = FileLock::acquire_default(&store_dir);
        assert!(lock.is_ok());
        assert!(store_dir.is_dir());
    }
}
