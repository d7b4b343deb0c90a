//! # ruzip
//!
//! A Rust zip creation utility with HTTP source support.
//!
//! This library builds ZIP archives entirely in memory from named binary
//! payloads, producing a single buffer decodable by any standards-compliant
//! reader. Payloads can come from anywhere; the bundled CLI gathers them
//! from local files and HTTP URLs. Entries are stored uncompressed with
//! CRC-32 checksums, so output is deterministic for identical inputs.
//!
//! ## Features
//!
//! - Pure in-memory assembly: no I/O inside the writer
//! - Store-only (method 0) with real CRC-32 checksums
//! - UTF-8 name flag for non-ASCII entry names
//! - Payload sources for local files and HTTP/HTTPS URLs with resumable
//!   downloads
//!
//! ## Example
//!
//! ```
//! use ruzip::ZipWriter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut writer = ZipWriter::new();
//!     writer.add_entry("images/cat.png", vec![0u8; 1024])?;
//!     writer.add_entry("notes.txt", b"meow".to_vec())?;
//!
//!     let archive = writer.assemble()?;
//!     assert_eq!(&archive[0..4], b"PK\x03\x04");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod io;
pub mod zip;

pub use cli::Cli;
pub use io::{HttpSource, LocalFileSource, PayloadSource};
pub use zip::{ZipEntry, ZipError, ZipWriter};
