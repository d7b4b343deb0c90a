//! Low-level ZIP archive writer.
//!
//! This module serializes an ordered set of named payloads into a single
//! archive buffer following the standard PKZIP layout.
//!
//! ## Writing Strategy
//!
//! ZIP files are written front to back in three regions:
//! 1. A Local File Header followed by the raw data, for each entry
//! 2. The Central Directory, one record per entry, referencing the
//!    local header offsets recorded while writing region 1
//! 3. The End of Central Directory (EOCD) record
//!
//! Assembly is a pure two-pass fold over the entry list: the first pass
//! emits local headers and payloads while tracking a running offset, the
//! second emits directory records from the recorded offsets. Nothing is
//! shared between calls, so independent writers can assemble concurrently.

use flate2::Crc;

use super::error::{Result, ZipError};
use super::structures::*;

/// One named payload queued for assembly.
///
/// Sizes, checksum, and the local header offset are derived at assembly
/// time; an entry holds only what the caller supplied.
#[derive(Debug, Clone)]
pub struct ZipEntry {
    name: String,
    payload: Vec<u8>,
}

impl ZipEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// In-memory ZIP archive builder.
///
/// Entries are appended with [`add_entry`](Self::add_entry) and serialized
/// with [`assemble`](Self::assemble). Insertion order is preserved and
/// defines both the physical layout and the directory listing order.
///
/// ## Example
///
/// ```
/// use ruzip::ZipWriter;
///
/// let mut writer = ZipWriter::new();
/// writer.add_entry("hello.txt", b"hello".to_vec())?;
/// let archive = writer.assemble()?;
/// assert_eq!(&archive[0..4], b"PK\x03\x04");
/// # Ok::<(), ruzip::ZipError>(())
/// ```
#[derive(Debug, Default)]
pub struct ZipWriter {
    entries: Vec<ZipEntry>,
}

impl ZipWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the archive.
    ///
    /// # Errors
    ///
    /// Returns [`ZipError::InvalidEntry`] if the name is empty. Size
    /// limits are checked later, during [`assemble`](Self::assemble).
    pub fn add_entry(&mut self, name: impl Into<String>, payload: Vec<u8>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ZipError::InvalidEntry("entry name must not be empty".into()));
        }
        self.entries.push(ZipEntry { name, payload });
        Ok(())
    }

    /// Entries queued so far, in insertion order.
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize all entries into one complete archive buffer.
    ///
    /// This is a pure function over the entry list: calling it twice
    /// yields byte-for-byte identical buffers, and the writer can keep
    /// accepting entries afterwards.
    ///
    /// An empty writer produces the minimal valid archive: just the
    /// 22-byte trailer with zero entry counts.
    ///
    /// # Errors
    ///
    /// Returns [`ZipError::SizeLimitExceeded`] if an entry name exceeds
    /// 65535 bytes, or if any size, offset, or count would overflow the
    /// fixed-width fields of the standard format (this writer does not
    /// emit ZIP64 extensions). Validation happens before the offending
    /// entry's bytes are emitted; no partial buffer escapes.
    pub fn assemble(&self) -> Result<Vec<u8>> {
        if self.entries.len() > u16::MAX as usize {
            return Err(ZipError::SizeLimitExceeded(format!(
                "{} entries exceed the 65535-entry trailer limit",
                self.entries.len()
            )));
        }

        // Pass 1: local headers and raw payloads. Each entry's absolute
        // offset is the running length of this region before the entry.
        let mut local = Vec::new();
        let mut offsets = Vec::with_capacity(self.entries.len());
        let mut checksums = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            if entry.name.len() > u16::MAX as usize {
                return Err(ZipError::SizeLimitExceeded(format!(
                    "entry name is {} bytes, the format caps names at 65535 bytes",
                    entry.name.len()
                )));
            }
            let size = field_u32(entry.payload.len(), "entry payload size")?;
            let offset = field_u32(local.len(), "local header offset")?;
            let crc32 = payload_crc32(&entry.payload);

            LocalFileHeader {
                flags: name_flags(&entry.name),
                method: CompressionMethod::Stored,
                last_mod_time: DOS_EPOCH_TIME,
                last_mod_date: DOS_EPOCH_DATE,
                crc32,
                compressed_size: size,
                uncompressed_size: size,
                file_name: entry.name.as_bytes(),
            }
            .write_to(&mut local)?;
            local.extend_from_slice(&entry.payload);

            offsets.push(offset);
            checksums.push(crc32);
        }

        // The directory starts where the local region ends.
        let cd_offset = field_u32(local.len(), "central directory offset")?;

        // Pass 2: one directory record per entry, same order, using the
        // offsets recorded above.
        let mut directory = Vec::new();
        for (entry, (&offset, &crc32)) in
            self.entries.iter().zip(offsets.iter().zip(&checksums))
        {
            let size = entry.payload.len() as u32; // validated in pass 1
            CentralDirHeader {
                flags: name_flags(&entry.name),
                method: CompressionMethod::Stored,
                last_mod_time: DOS_EPOCH_TIME,
                last_mod_date: DOS_EPOCH_DATE,
                crc32,
                compressed_size: size,
                uncompressed_size: size,
                lfh_offset: offset,
                file_name: entry.name.as_bytes(),
            }
            .write_to(&mut directory)?;
        }
        let cd_size = field_u32(directory.len(), "central directory size")?;

        let total = local.len() + directory.len() + EndOfCentralDirectory::SIZE;
        if u32::try_from(total).is_err() {
            return Err(ZipError::SizeLimitExceeded(format!(
                "archive would be {total} bytes, ZIP64 is required beyond 4 GiB"
            )));
        }

        let mut buf = local;
        buf.reserve(directory.len() + EndOfCentralDirectory::SIZE);
        buf.extend_from_slice(&directory);
        EndOfCentralDirectory {
            disk_entries: self.entries.len() as u16,
            total_entries: self.entries.len() as u16,
            cd_size,
            cd_offset,
        }
        .write_to(&mut buf)?;

        Ok(buf)
    }
}

/// Narrow a length to a 32-bit field, naming the field on overflow.
fn field_u32(value: usize, field: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        ZipError::SizeLimitExceeded(format!("{field} of {value} does not fit in 32 bits"))
    })
}

/// General purpose flags for a name: the UTF-8 bit when non-ASCII.
fn name_flags(name: &str) -> u16 {
    if name.is_ascii() { 0 } else { FLAG_UTF8_NAME }
}

/// CRC-32 over the full payload.
fn payload_crc32(payload: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(payload);
    crc.sum()
}
