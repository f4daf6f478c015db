//! Ladder snapshot store
//!
//! One bincode snapshot file per market, integrity-checked with CRC32C
//! on load and re-validated through `PriceLadder::new` so a corrupt or
//! hand-edited file can never smuggle an invalid boundary pointer back
//! into the engine.
//!
//! # Binary format (per file)
//! ```text
//! bincode(LadderSnapshot {
//!     version:   u32
//!     tick_size: i64
//!     ask_index: u64
//!     levels:    Vec<i64>
//!     checksum:  u32  // CRC32C over tick_size ++ ask_index ++ levels
//! })
//! ```

use crc32c::crc32c;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use matching_engine::book::PriceLadder;
use matching_engine::store::LadderStore;
use types::errors::StoreError;
use types::ids::MarketId;
use types::numeric::{Price, Size};

/// Current snapshot format version
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Integrity check failed: expected {expected:#010x}, got {actual:#010x}")]
    IntegrityFailure { expected: u32, actual: u32 },

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    #[error("Snapshot holds an invalid ladder: {0}")]
    InvalidLadder(String),
}

impl From<SnapshotError> for StoreError {
    fn from(err: SnapshotError) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Serialized form of one market's ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LadderSnapshot {
    version: u32,
    tick_size: Price,
    ask_index: u64,
    levels: Vec<Size>,
    /// CRC32C over (tick_size ++ ask_index ++ levels)
    checksum: u32,
}

impl LadderSnapshot {
    fn of(ladder: &PriceLadder) -> Self {
        let tick_size = ladder.tick_size();
        let ask_index = ladder.ask_index() as u64;
        let levels = ladder.levels().to_vec();
        let checksum = Self::compute_checksum(tick_size, ask_index, &levels);
        Self {
            version: SNAPSHOT_VERSION,
            tick_size,
            ask_index,
            levels,
            checksum,
        }
    }

    fn compute_checksum(tick_size: Price, ask_index: u64, levels: &[Size]) -> u32 {
        let mut buf = Vec::with_capacity(8 + 8 + levels.len() * 8);
        buf.extend_from_slice(&tick_size.to_le_bytes());
        buf.extend_from_slice(&ask_index.to_le_bytes());
        for level in levels {
            buf.extend_from_slice(&level.to_le_bytes());
        }
        crc32c(&buf)
    }

    fn into_ladder(self) -> Result<PriceLadder, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }
        let actual = Self::compute_checksum(self.tick_size, self.ask_index, &self.levels);
        if actual != self.checksum {
            return Err(SnapshotError::IntegrityFailure {
                expected: self.checksum,
                actual,
            });
        }
        PriceLadder::new(self.levels, self.tick_size, self.ask_index as usize)
            .map_err(|err| SnapshotError::InvalidLadder(err.to_string()))
    }
}

/// File-backed `LadderStore`: one snapshot per market under `dir`
pub struct SnapshotLadderStore {
    dir: PathBuf,
}

impl SnapshotLadderStore {
    /// Open (and create, if needed) a snapshot directory
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, market: MarketId) -> PathBuf {
        self.dir.join(format!("market-{market}.snap"))
    }

    fn read(&self, market: MarketId) -> Result<PriceLadder, SnapshotError> {
        let bytes = fs::read(self.path_for(market))?;
        let snapshot: LadderSnapshot = bincode::deserialize(&bytes)
            .map_err(|err| SnapshotError::Serialization(err.to_string()))?;
        snapshot.into_ladder()
    }

    fn write(&self, market: MarketId, ladder: &PriceLadder) -> Result<(), SnapshotError> {
        let snapshot = LadderSnapshot::of(ladder);
        let bytes = bincode::serialize(&snapshot)
            .map_err(|err| SnapshotError::Serialization(err.to_string()))?;
        // Write-then-rename so a crash never leaves a torn snapshot.
        let tmp = self.path_for(market).with_extension("snap.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, self.path_for(market))?;
        Ok(())
    }
}

impl LadderStore for SnapshotLadderStore {
    fn load(&self, market: MarketId) -> Result<PriceLadder, StoreError> {
        match self.read(market) {
            Ok(ladder) => Ok(ladder),
            Err(SnapshotError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::MarketNotFound { market })
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, market: MarketId, ladder: &PriceLadder) -> Result<(), StoreError> {
        Ok(self.write(market, ladder)?)
    }
}
