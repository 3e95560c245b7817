//! Model snapshot rotation on disk
//!
//! A checkpoint slot is the file pair `<name>.model.json` and
//! `<name>-backup.model.json` in one directory. Saving rotates: the old
//! backup is dropped, the current snapshot becomes the backup, the new
//! snapshot becomes current. At most one backup ever exists. The rotation
//! is not crash-atomic; a failure between the rename and the write leaves
//! only the backup on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Checkpoint {
    current: PathBuf,
    backup: PathBuf,
}

impl Checkpoint {
    pub fn new(dir: impl AsRef<Path>, name: &str) -> Self {
        let dir = dir.as_ref();
        Checkpoint {
            current: dir.join(format!("{name}.model.json")),
            backup: dir.join(format!("{name}-backup.model.json")),
        }
    }

    pub fn current_path(&self) -> &Path {
        &self.current
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup
    }

    /// True when a current snapshot exists on disk.
    pub fn exists(&self) -> bool {
        self.current.exists()
    }

    /// Rotate the slot and write `json` as the new current snapshot.
    ///
    /// Any disk error propagates unmodified; callers treat a failed save
    /// as fatal for the training loop.
    pub fn save(&self, json: &str) -> Result<()> {
        if self.backup.exists() {
            fs::remove_file(&self.backup)
                .map_err(|e| Error::io(format!("remove backup {}", self.backup.display()), e))?;
        }
        if self.current.exists() {
            fs::rename(&self.current, &self.backup).map_err(|e| {
                Error::io(format!("rotate {} to backup", self.current.display()), e)
            })?;
        }
        fs::write(&self.current, json)
            .map_err(|e| Error::io(format!("write {}", self.current.display()), e))
    }

    /// Read the current snapshot.
    pub fn load(&self) -> Result<String> {
        fs::read_to_string(&self.current)
            .map_err(|e| Error::io(format!("read {}", self.current.display()), e))
    }
}
