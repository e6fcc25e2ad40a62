//! Contact photo lookup for the list, grid, and picker screens.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// What a row should show in its photo position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Photo {
    Placeholder,
    File(PathBuf),
}

impl Photo {
    /// Short marker for text rows: `*` when a photo file exists
    pub fn marker(&self) -> &'static str {
        match self {
            Photo::Placeholder => " ",
            Photo::File(_) => "*",
        }
    }
}

/// Resolves photo ids for a screen. Screens call `resume` when they become
/// visible and `stop` when they are torn down.
pub trait PhotoLoader {
    fn load(&mut self, photo_id: Option<i64>) -> Photo;
    fn resume(&mut self);
    fn stop(&mut self);
}

/// Looks up `<dir>/<photo_id>.jpg` and remembers the answer until stopped.
pub struct FilePhotoLoader {
    dir: PathBuf,
    cache: HashMap<i64, Photo>,
    paused: bool,
}

impl FilePhotoLoader {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            cache: HashMap::new(),
            paused: true,
        }
    }

    /// Canonical photo path for an id (always .jpg)
    pub fn photo_path(&self, photo_id: i64) -> PathBuf {
        self.dir.join(format!("{}.jpg", photo_id))
    }
}

impl PhotoLoader for FilePhotoLoader {
    fn load(&mut self, photo_id: Option<i64>) -> Photo {
        let Some(id) = photo_id else {
            return Photo::Placeholder;
        };
        if let Some(hit) = self.cache.get(&id) {
            return hit.clone();
        }
        // No disk access while stopped
        if self.paused {
            return Photo::Placeholder;
        }

        let path = self.photo_path(id);
        let photo = if path.is_file() {
            Photo::File(path)
        } else {
            Photo::Placeholder
        };
        self.cache.insert(id, photo.clone());
        photo
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn stop(&mut self) {
        self.paused = true;
        self.cache.clear();
    }
}
