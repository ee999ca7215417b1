//! File system utility functions
//!
//! Provides the native move used when the host shell is bypassed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Move `src` into the directory `dest_dir`, keeping its file name.
    ///
    /// Returns the new location. Directories are only ever renamed; regular
    /// files fall back to copy + delete when a rename is not possible.
    #[instrument(skip(self))]
    pub fn move_into<P: AsRef<Path> + std::fmt::Debug, Q: AsRef<Path> + std::fmt::Debug>(
        &self,
        src: P,
        dest_dir: Q,
    ) -> io::Result<PathBuf> {
        let src = src.as_ref();
        let name = src.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no file name", src.display()),
            )
        })?;
        let dst = dest_dir.as_ref().join(name);

        debug!("Moving: {} -> {}", src.display(), dst.display());

        match fs::rename(src, &dst) {
            Ok(()) => {
                debug!("Moved via rename");
                Ok(dst)
            }
            Err(e) if src.is_file() && !dst.exists() => {
                // Rename across filesystems fails; files can still be copied
                debug!("Rename failed ({}), trying copy + delete", e);
                fs::copy(src, &dst)?;
                fs::remove_file(src)?;
                debug!("Moved via copy + delete");
                Ok(dst)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
