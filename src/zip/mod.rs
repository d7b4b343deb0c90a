//! ZIP archive creation.
//!
//! This module provides functionality for building ZIP archives in memory,
//! producing output decodable by any standards-compliant reader.
//!
//! ## Architecture
//!
//! The module is organized into three main components:
//!
//! - [`structures`]: Data structures representing ZIP format elements (local
//!   file header, central directory record, EOCD)
//! - [`writer`]: Entry bookkeeping and the two-pass assembly algorithm
//! - [`error`]: Typed errors for invalid entries and format limits
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end
//!
//! This implementation writes the file front to back: the local region
//! first while recording each entry's offset, then the Central Directory
//! referencing those offsets, then the EOCD. Payloads must be fully
//! materialized before assembly begins; the whole archive is buffered in
//! memory.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - STORED (no compression) method
//! - CRC-32 integrity checksums over every payload
//! - UTF-8 file name flag for non-ASCII names
//!
//! ## Limitations
//!
//! - No compression (store only)
//! - No encryption support
//! - No multi-disk archive support
//! - No ZIP64 extensions: names, sizes, offsets, and entry counts must fit
//!   the standard 16/32-bit fields

pub mod error;
mod structures;
mod writer;

pub use error::ZipError;
pub use structures::*;
pub use writer::{ZipEntry, ZipWriter};
