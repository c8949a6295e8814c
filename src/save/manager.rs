use super::codec;
use super::snapshot::SaveSnapshot;
use crate::core::constants::{SAVE_FILE_EXTENSION, SAVE_VERSION_MAGIC};
use crate::error::SaveError;
use directories::ProjectDirs;
use log::warn;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Manages one checksummed save file per profile.
pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager rooted at the platform config directory
    /// (via the `directories` crate).
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs =
            ProjectDirs::from("", "", "beer-clicker").ok_or(SaveError::NoConfigDir)?;
        Self::in_dir(project_dirs.config_dir())
    }

    /// Creates a SaveManager rooted at an explicit directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    #[cfg(test)]
    fn new_for_test() -> Result<Self, SaveError> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "beer-clicker-test-{}-{}",
            std::process::id(),
            test_id
        ));
        Self::in_dir(temp_dir)
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Path of a profile's save file. Characters outside `[A-Za-z0-9_-]`
    /// are replaced so a profile name can never escape the save directory.
    pub fn profile_path(&self, profile: &str) -> PathBuf {
        let safe: String = profile
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let safe = if safe.is_empty() { "default".to_string() } else { safe };
        self.save_dir
            .join(format!("{}.{}", safe, SAVE_FILE_EXTENSION))
    }

    /// Saves a snapshot with checksum verification.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - bincode snapshot (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, profile: &str, snapshot: &SaveSnapshot) -> Result<(), SaveError> {
        let data = codec::to_bytes(snapshot)?;
        let framed = frame(&data)?;
        // Atomic replace via rename
        let path = self.profile_path(profile);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, framed)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Loads a snapshot, verifying magic, checksum and structure.
    pub fn load(&self, profile: &str) -> Result<SaveSnapshot, SaveError> {
        let bytes = fs::read(self.profile_path(profile))?;
        let data = unframe(&bytes)?;
        codec::from_bytes(&data)
    }

    /// Startup load: a missing save is a new player, a corrupt one is
    /// logged and treated the same way.
    pub fn load_or_fresh(&self, profile: &str) -> Option<SaveSnapshot> {
        match self.load(profile) {
            Ok(snapshot) => Some(snapshot),
            Err(SaveError::Io(e)) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("ignoring unreadable save for profile {profile}: {e}");
                None
            }
        }
    }

    pub fn exists(&self, profile: &str) -> bool {
        self.profile_path(profile).exists()
    }

    /// Removes a profile's save. Returns false if there was none.
    pub fn delete(&self, profile: &str) -> Result<bool, SaveError> {
        match fs::remove_file(self.profile_path(profile)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Wrap a payload in magic + length + checksum.
pub fn frame(data: &[u8]) -> Result<Vec<u8>, SaveError> {
    let data_len = u32::try_from(data.len())
        .map_err(|_| SaveError::malformed("save payload exceeds 4 GiB"))?;

    let mut hasher = Sha256::new();
    hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
    hasher.update(data_len.to_le_bytes());
    hasher.update(data);
    let checksum = hasher.finalize();

    let mut out = Vec::with_capacity(8 + 4 + data.len() + 32);
    out.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(data);
    out.extend_from_slice(&checksum);
    Ok(out)
}

/// Verify a framed file and return its payload.
pub fn unframe(bytes: &[u8]) -> Result<Vec<u8>, SaveError> {
    let mut reader = bytes;

    // Read and verify version magic
    let mut version_bytes = [0u8; 8];
    read_exact(&mut reader, &mut version_bytes)?;
    let version = u64::from_le_bytes(version_bytes);
    if version != SAVE_VERSION_MAGIC {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION_MAGIC,
            found: version,
        });
    }

    let mut length_bytes = [0u8; 4];
    read_exact(&mut reader, &mut length_bytes)?;
    let data_len = u32::from_le_bytes(length_bytes) as usize;
    if data_len > reader.len() {
        return Err(SaveError::malformed("truncated save"));
    }

    let mut data = vec![0u8; data_len];
    read_exact(&mut reader, &mut data)?;

    let mut stored_checksum = [0u8; 32];
    read_exact(&mut reader, &mut stored_checksum)?;

    let mut hasher = Sha256::new();
    hasher.update(version_bytes);
    hasher.update(length_bytes);
    hasher.update(&data);
    let computed_checksum = hasher.finalize();

    if stored_checksum != computed_checksum.as_slice() {
        return Err(SaveError::ChecksumMismatch);
    }
    Ok(data)
}

fn read_exact(reader: &mut &[u8], buf: &mut [u8]) -> Result<(), SaveError> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            SaveError::malformed("truncated save")
        } else {
            SaveError::Io(e)
        }
    })
}
