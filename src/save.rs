//! Gzip-compressed save files whose inventory list is edited in place.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tracing::{debug, info};
use zerocopy::BigEndian;

use crate::{
    INVENTORY_MARKER, Item, ReadConfig, Region, Result, Tag, items_from_list, rebuild_list,
    splice_region,
};

/// A decompressed save buffer together with its decoded inventory list.
///
/// The original buffer and region are kept unchanged, so every write
/// splices against the span the list occupied when the file was loaded.
#[derive(Clone, Debug)]
pub struct SaveFile {
    data: Vec<u8>,
    region: Region,
    inventory: Tag,
    compression: Compression,
}

impl SaveFile {
    /// Reads and gunzips `path`, then locates and decodes the inventory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &INVENTORY_MARKER, &ReadConfig::default())
    }

    pub fn open_with(path: impl AsRef<Path>, marker: &[u8], config: &ReadConfig) -> Result<Self> {
        let path = path.as_ref();
        let mut data = Vec::new();
        GzDecoder::new(BufReader::new(File::open(path)?)).read_to_end(&mut data)?;
        info!(path = %path.display(), bytes = data.len(), "loaded save file");
        Self::from_decompressed_with(data, marker, config)
    }

    /// Uses an already decompressed buffer.
    pub fn from_decompressed(data: Vec<u8>) -> Result<Self> {
        Self::from_decompressed_with(data, &INVENTORY_MARKER, &ReadConfig::default())
    }

    pub fn from_decompressed_with(
        data: Vec<u8>,
        marker: &[u8],
        config: &ReadConfig,
    ) -> Result<Self> {
        let (region, inventory) = Region::decode_with(&data, marker, config)?;
        debug!(
            start = region.start,
            end = region.end,
            "located inventory list"
        );
        Ok(Self {
            data,
            region,
            inventory,
            compression: Compression::default(),
        })
    }

    /// Gzip level used by [`SaveFile::write_items`].
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn inventory(&self) -> &Tag {
        &self.inventory
    }

    /// The decompressed buffer as loaded.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn items(&self) -> Result<Vec<Item>> {
        items_from_list(&self.inventory)
    }

    /// The decompressed buffer with the inventory list replaced by `items`.
    pub fn patched_bytes(&self, items: &[Item]) -> Result<Vec<u8>> {
        let list = rebuild_list(&self.inventory, items)?;
        let encoded = list.write_to_vec::<BigEndian>()?;
        debug!(
            items = items.len(),
            old_len = self.region.len(),
            new_len = encoded.len(),
            "re-encoded inventory list"
        );
        splice_region(&self.data, self.region, &encoded)
    }

    /// Writes the patched buffer gzip-compressed to `path`.
    pub fn write_items(&self, items: &[Item], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let patched = self.patched_bytes(items)?;
        let mut encoder = GzEncoder::new(File::create(path)?, self.compression);
        encoder.write_all(&patched)?;
        encoder.finish()?.sync_all()?;
        info!(path = %path.display(), bytes = patched.len(), "wrote save file");
        Ok(())
    }
}
