//! Byte-accurate structural mapping of Apache Parquet files.
//!
//! Given a Parquet file, [`parse_parquet_file`] attributes every byte to
//! exactly one named, typed [`Segment`]: magic numbers, the footer with
//! its fully decoded metadata tree, page headers and page payloads,
//! column/offset indexes, bloom filters, and `unknown` fillers for
//! whatever could not be attributed. On top of that map the crate offers
//! JSON projections (summary, footer, per-column pages) and an HTML
//! report.
//!
//! Page payloads are treated as opaque byte ranges: this crate inspects
//! structure, it does not decompress or decode column values.

pub mod aggregate;
pub mod error;
pub mod html;
pub mod reader;
pub mod report;
pub mod schema;
pub mod segment;
pub mod stats;
pub mod thrift;
pub mod walker;

pub use error::{ParquetError, Result};
pub use report::{get_pages, get_summary, Summary};
pub use segment::{find_footer_segment, json_encode, segment_to_json, Segment, SegmentValue};
pub use walker::{parse_parquet_file, ChunkPageOffsets, ColumnOffsetMap};
