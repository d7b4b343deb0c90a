use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

/// Version needed to extract: 2.0, the minimum for a store-only archive.
pub const VERSION_NEEDED: u16 = 20;

/// Version made by, kept at 2.0 to match the extraction requirement.
pub const VERSION_MADE_BY: u16 = 20;

/// General purpose flag bit 11: file name is encoded as UTF-8.
pub const FLAG_UTF8_NAME: u16 = 0x0800;

/// DOS timestamp sentinel: 1980-01-01 00:00:00 (the DOS epoch).
///
/// Using a fixed timestamp keeps archive output byte-for-byte
/// deterministic for identical inputs.
pub const DOS_EPOCH_TIME: u16 = 0;
pub const DOS_EPOCH_DATE: u16 = (1 << 5) | 1; // month = 1, day = 1, year = 1980

/// ZIP compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Deflate,
    Unknown(u16),
}

impl CompressionMethod {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => CompressionMethod::Stored,
            8 => CompressionMethod::Deflate,
            _ => CompressionMethod::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            CompressionMethod::Stored => 0,
            CompressionMethod::Deflate => 8,
            CompressionMethod::Unknown(v) => *v,
        }
    }
}

/// Local File Header (LFH) - 30 bytes plus the file name.
///
/// Precedes each entry's raw data in the archive. The payload bytes follow
/// immediately after the name, with no extra field in between.
pub struct LocalFileHeader<'a> {
    pub flags: u16,
    pub method: CompressionMethod,
    pub last_mod_time: u16,
    pub last_mod_date: u16,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name: &'a [u8],
}

impl LocalFileHeader<'_> {
    pub const SIGNATURE: &'static [u8] = b"PK\x03\x04";
    pub const FIXED_SIZE: usize = 30;

    /// Total encoded length: fixed fields plus the file name.
    pub fn encoded_len(&self) -> usize {
        Self::FIXED_SIZE + self.file_name.len()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(Self::SIGNATURE)?;
        writer.write_u16::<LittleEndian>(VERSION_NEEDED)?;
        writer.write_u16::<LittleEndian>(self.flags)?;
        writer.write_u16::<LittleEndian>(self.method.as_u16())?;
        writer.write_u16::<LittleEndian>(self.last_mod_time)?;
        writer.write_u16::<LittleEndian>(self.last_mod_date)?;
        writer.write_u32::<LittleEndian>(self.crc32)?;
        writer.write_u32::<LittleEndian>(self.compressed_size)?;
        writer.write_u32::<LittleEndian>(self.uncompressed_size)?;
        writer.write_u16::<LittleEndian>(self.file_name.len() as u16)?;
        writer.write_u16::<LittleEndian>(0)?; // extra field length
        writer.write_all(self.file_name)?;
        Ok(())
    }
}

/// Central Directory File Header (CDFH) - 46 bytes plus the file name.
///
/// Mirrors the local header's fields and adds the absolute offset of that
/// entry's local header, so readers can seek straight to the data.
pub struct CentralDirHeader<'a> {
    pub flags: u16,
    pub method: CompressionMethod,
    pub last_mod_time: u16,
    pub last_mod_date: u16,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub lfh_offset: u32,
    pub file_name: &'a [u8],
}

impl CentralDirHeader<'_> {
    pub const SIGNATURE: &'static [u8] = b"PK\x01\x02";
    pub const FIXED_SIZE: usize = 46;

    pub fn encoded_len(&self) -> usize {
        Self::FIXED_SIZE + self.file_name.len()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(Self::SIGNATURE)?;
        writer.write_u16::<LittleEndian>(VERSION_MADE_BY)?;
        writer.write_u16::<LittleEndian>(VERSION_NEEDED)?;
        writer.write_u16::<LittleEndian>(self.flags)?;
        writer.write_u16::<LittleEndian>(self.method.as_u16())?;
        writer.write_u16::<LittleEndian>(self.last_mod_time)?;
        writer.write_u16::<LittleEndian>(self.last_mod_date)?;
        writer.write_u32::<LittleEndian>(self.crc32)?;
        writer.write_u32::<LittleEndian>(self.compressed_size)?;
        writer.write_u32::<LittleEndian>(self.uncompressed_size)?;
        writer.write_u16::<LittleEndian>(self.file_name.len() as u16)?;
        writer.write_u16::<LittleEndian>(0)?; // extra field length
        writer.write_u16::<LittleEndian>(0)?; // file comment length
        writer.write_u16::<LittleEndian>(0)?; // disk number start
        writer.write_u16::<LittleEndian>(0)?; // internal file attributes
        writer.write_u32::<LittleEndian>(0)?; // external file attributes
        writer.write_u32::<LittleEndian>(self.lfh_offset)?;
        writer.write_all(self.file_name)?;
        Ok(())
    }
}

/// End of Central Directory (EOCD) - 22 bytes
pub struct EndOfCentralDirectory {
    pub disk_entries: u16,
    pub total_entries: u16,
    pub cd_size: u32,
    pub cd_offset: u32,
}

impl EndOfCentralDirectory {
    pub const SIGNATURE: &'static [u8] = b"PK\x05\x06";
    pub const SIZE: usize = 22;

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(Self::SIGNATURE)?;
        writer.write_u16::<LittleEndian>(0)?; // number of this disk
        writer.write_u16::<LittleEndian>(0)?; // disk where the directory starts
        writer.write_u16::<LittleEndian>(self.disk_entries)?;
        writer.write_u16::<LittleEndian>(self.total_entries)?;
        writer.write_u32::<LittleEndian>(self.cd_size)?;
        writer.write_u32::<LittleEndian>(self.cd_offset)?;
        writer.write_u16::<LittleEndian>(0)?; // comment length
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_method_roundtrip() {
        assert_eq!(CompressionMethod::from_u16(0), CompressionMethod::Stored);
        assert_eq!(CompressionMethod::from_u16(8), CompressionMethod::Deflate);
        assert_eq!(
            CompressionMethod::from_u16(12),
            CompressionMethod::Unknown(12)
        );
        assert_eq!(CompressionMethod::Stored.as_u16(), 0);
        assert_eq!(CompressionMethod::Deflate.as_u16(), 8);
    }

    #[test]
    fn local_header_layout() {
        let header = LocalFileHeader {
            flags: 0,
            method: CompressionMethod::Stored,
            last_mod_time: DOS_EPOCH_TIME,
            last_mod_date: DOS_EPOCH_DATE,
            crc32: 0xDEADBEEF,
            compressed_size: 5,
            uncompressed_size: 5,
            file_name: b"a.txt",
        };

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();

        assert_eq!(buf.len(), header.encoded_len());
        assert_eq!(&buf[0..4], LocalFileHeader::SIGNATURE);
        assert_eq!(&buf[4..6], &20u16.to_le_bytes()); // version needed
        assert_eq!(&buf[8..10], &0u16.to_le_bytes()); // method = store
        assert_eq!(&buf[14..18], &0xDEADBEEFu32.to_le_bytes());
        // File name length lives at offset 26 in the fixed LFH layout.
        assert_eq!(&buf[26..28], &5u16.to_le_bytes());
        assert_eq!(&buf[28..30], &0u16.to_le_bytes()); // extra field length
        assert_eq!(&buf[30..], b"a.txt");
    }

    #[test]
    fn central_header_layout() {
        let header = CentralDirHeader {
            flags: FLAG_UTF8_NAME,
            method: CompressionMethod::Stored,
            last_mod_time: DOS_EPOCH_TIME,
            last_mod_date: DOS_EPOCH_DATE,
            crc32: 0,
            compressed_size: 0,
            uncompressed_size: 0,
            lfh_offset: 0x11223344,
            file_name: "é.txt".as_bytes(),
        };

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();

        assert_eq!(buf.len(), header.encoded_len());
        assert_eq!(&buf[0..4], CentralDirHeader::SIGNATURE);
        assert_eq!(&buf[8..10], &FLAG_UTF8_NAME.to_le_bytes());
        // Relative offset of the local header at offset 42.
        assert_eq!(&buf[42..46], &0x11223344u32.to_le_bytes());
        assert_eq!(&buf[46..], "é.txt".as_bytes());
    }

    #[test]
    fn eocd_is_exactly_22_bytes() {
        let eocd = EndOfCentralDirectory {
            disk_entries: 3,
            total_entries: 3,
            cd_size: 150,
            cd_offset: 1024,
        };

        let mut buf = Vec::new();
        eocd.write_to(&mut buf).unwrap();

        assert_eq!(buf.len(), EndOfCentralDirectory::SIZE);
        assert_eq!(&buf[0..4], EndOfCentralDirectory::SIGNATURE);
        assert_eq!(&buf[8..10], &3u16.to_le_bytes());
        assert_eq!(&buf[10..12], &3u16.to_le_bytes());
        assert_eq!(&buf[12..16], &150u32.to_le_bytes());
        assert_eq!(&buf[16..20], &1024u32.to_le_bytes());
        assert_eq!(&buf[20..22], &0u16.to_le_bytes());
    }
}
