use crate::error::StoreError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Staged write with atomic promotion.
///
/// `stage` writes the full payload to `<target>.lock`; `commit` renames it
/// over `<target>`, so readers only ever see a complete JSON document.
/// Dropping a staged write without committing removes the lock file.
/// A second stage against the same target fails while the first is live.
pub struct Lockfile {
    target: PathBuf,
    lock_path: PathBuf,
    committed: bool,
}

impl Lockfile {
    /// Write `data` to the lock file next to `target`.
    pub fn stage(target: impl AsRef<Path>, data: &[u8]) -> Result<Self, StoreError> {
        let target = target.as_ref().to_path_buf();
        let mut name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        name.push_str(".lock");
        let lock_path = target.with_file_name(name);

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(StoreError::LockConflict(lock_path.display().to_string()));
            }
            Err(e) => return Err(StoreError::Io(e)),
        };
        file.write_all(data)?;
        file.flush()?;

        Ok(Self {
            target,
            lock_path,
            committed: false,
        })
    }

    /// Rename the lock file over the target.
    pub fn commit(mut self) -> Result<(), StoreError> {
        fs::rename(&self.lock_path, &self.target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for Lockfile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.lock_path);
        }
    }
}
