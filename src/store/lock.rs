//! Per-collection advisory write lock.
//!
//! The lock is a sibling `<collection>.json.lock` file created exclusively. Holding the
//! guard means holding the lock; dropping it removes the file. A lock file older than
//! the stale threshold is assumed to belong to a crashed writer and is broken, one
//! contender at a time under a `.break` sibling guard.

use crate::errors::{Error, Result};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    thread,
    time::{Duration, Instant, SystemTime},
};
use tracing::{debug, warn};

const RETRY_INTERVAL: Duration = Duration::from_millis(25);
const MIN_GUARD_AGE: Duration = Duration::from_secs(5);

/// Guard for an acquired collection lock.
#[derive(Debug)]
pub struct CollectionLock {
    lock_path: PathBuf,
}

impl CollectionLock {
    /// Acquires the lock at `lock_path`, waiting up to `timeout`.
    ///
    /// `label` names the collection in error messages.
    pub fn acquire(
        lock_path: &Path,
        label: &str,
        timeout: Duration,
        stale_after: Duration,
    ) -> Result<Self> {
        let started = Instant::now();
        loop {
            match fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(lock_path)
            {
                Ok(mut file) => {
                    // Owner pid is informational only.
                    let _ = writeln!(file, "{}", std::process::id());
                    debug!("Acquired write lock {:?}", lock_path);
                    return Ok(Self {
                        lock_path: lock_path.to_path_buf(),
                    });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    if is_stale(lock_path, stale_after)
                        && break_stale(lock_path, label, stale_after)?
                    {
                        continue;
                    }
                    if started.elapsed() >= timeout {
                        return Err(Error::storage(
                            label,
                            format!(
                                "timed out after {}ms waiting for write lock {}",
                                timeout.as_millis(),
                                lock_path.display()
                            ),
                        ));
                    }
                    thread::sleep(RETRY_INTERVAL);
                }
                Err(e) => {
                    return Err(Error::storage(
                        label,
                        format!("failed to acquire write lock: {e}"),
                    ));
                }
            }
        }
    }

    /// Path of the lock file this guard owns.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.lock_path
    }
}

impl Drop for CollectionLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.lock_path) {
            warn!("Failed to release write lock {:?}: {}", self.lock_path, e);
        }
    }
}

/// Removes `lock_path` if it is still stale, serialized through a `.break` sibling.
///
/// Only the holder of the break guard may delete the lock, and it re-checks the age
/// first, so a lock freshly created by another contender is never removed. Returns
/// true if the stale lock was removed.
fn break_stale(lock_path: &Path, label: &str, stale_after: Duration) -> Result<bool> {
    let guard_path = break_guard_path(lock_path);
    let _guard = match fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&guard_path)
    {
        Ok(_) => CollectionLock {
            lock_path: guard_path,
        },
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            // A guard can only outlive its holder if that process crashed mid-break.
            if is_stale(&guard_path, stale_after.max(MIN_GUARD_AGE)) {
                let _ = fs::remove_file(&guard_path);
            }
            return Ok(false);
        }
        Err(e) => {
            return Err(Error::storage(
                label,
                format!("failed to break stale lock: {e}"),
            ));
        }
    };

    if !is_stale(lock_path, stale_after) {
        return Ok(false);
    }
    warn!("Breaking stale write lock {:?}", lock_path);
    match fs::remove_file(lock_path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::storage(
            label,
            format!("failed to break stale lock: {e}"),
        )),
    }
}

fn break_guard_path(lock_path: &Path) -> PathBuf {
    let mut name = lock_path.as_os_str().to_os_string();
    name.push(".break");
    PathBuf::from(name)
}

fn is_stale(lock_path: &Path, stale_after: Duration) -> bool {
    fs::metadata(lock_path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|age| age >= stale_after)
}
