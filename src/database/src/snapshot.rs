use crate::DatabaseError;
use core::simulator::SimulatorData;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use log::info;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Gzip-compressed JSON save files.
pub struct SnapshotStore;

impl SnapshotStore {
    pub fn to_bytes(data: &SimulatorData) -> Result<Vec<u8>, DatabaseError> {
        let json = serde_json::to_vec(data)?;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&json)?;

        Ok(encoder.finish()?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<SimulatorData, DatabaseError> {
        let mut json = Vec::new();
        GzDecoder::new(bytes).read_to_end(&mut json)?;

        Ok(serde_json::from_slice(&json)?)
    }

    pub fn save(data: &SimulatorData, path: impl AsRef<Path>) -> Result<(), DatabaseError> {
        let path = path.as_ref();
        let bytes = Self::to_bytes(data)?;

        fs::write(path, &bytes)?;

        info!("snapshot saved: {} ({} bytes)", path.display(), bytes.len());

        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<SimulatorData, DatabaseError> {
        let path = path.as_ref();
        let data = Self::from_bytes(&fs::read(path)?)?;

        info!("snapshot loaded: {}", path.display());

        Ok(data)
    }
}
