//! Zip unarchiver for release bundles

use std::io::Cursor;
use std::path::Path;

use super::{ArchiveError, Unarchiver};

/// Unarchiver for zip release bundles
#[derive(Debug, Default, Clone)]
pub struct ZipUnarchiver;

impl ZipUnarchiver {
    pub fn new() -> Self {
        Self
    }
}

impl Unarchiver for ZipUnarchiver {
    fn unpack(&self, bytes: &[u8], destination: &Path) -> Result<(), ArchiveError> {
        std::fs::create_dir_all(destination)?;
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        archive.extract(destination)?;
        Ok(())
    }
}
