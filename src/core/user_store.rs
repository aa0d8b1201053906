use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::catalog::Result;
use crate::model::user::User;

/// The saved demo user: one JSON document on disk.
#[derive(Clone, Debug)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        UserStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable records load as no user.
    pub fn load(&self) -> Option<User> {
        if !self.path.exists() {
            return None;
        }
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                warn!("cannot read {}: {}", self.path.display(), err);
                return None;
            }
        };
        match serde_json::from_str::<User>(&text) {
            Ok(user) => {
                debug!("loaded user {} from {}", user.email, self.path.display());
                Some(user)
            }
            Err(err) => {
                warn!("ignoring corrupt user record {}: {}", self.path.display(), err);
                None
            }
        }
    }

    pub fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = fs::File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, user)?;
        writer.flush()?;
        debug!("saved user {} to {}", user.email, self.path.display());
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!("removed {}", self.path.display());
        }
        Ok(())
    }
}
