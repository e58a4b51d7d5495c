//! Top-level orchestration: walking a Parquet file into segments.
//!
//! The walk proceeds in passes: verify the leading magic number, locate
//! and decode the footer, then follow the footer's offsets through every
//! column chunk of every row group (dictionary page, data pages, column
//! index, offset index, bloom filter), and finally sort the collected
//! segments and fill unattributed holes with `unknown` segments so that
//! the segment lengths sum to the file size.
//!
//! Magic-number mismatches and footer decode failures are fatal. Errors
//! inside a single column chunk are logged as warnings and the walk moves
//! on to the next chunk; whatever bytes were not attributed end up in
//! `unknown` segments.

use std::io::{Read, Seek};

use log::{debug, warn};

use crate::error::{ParquetError, Result};
use crate::reader::ByteReader;
use crate::schema::{BLOOM_FILTER_HEADER, COLUMN_INDEX, FILE_META_DATA, OFFSET_INDEX, PAGE_HEADER};
use crate::segment::{fill_gaps, Segment, SegmentValue};
use crate::thrift;

const MAGIC: &[u8; 4] = b"PAR1";

/// Absolute offsets recorded for one column chunk while walking it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkPageOffsets {
    pub dictionary_page: Option<u64>,
    pub data_pages: Vec<u64>,
    pub column_index: Option<u64>,
    pub offset_index: Option<u64>,
    pub bloom_filter: Option<u64>,
}

/// Mapping from schema path to one [`ChunkPageOffsets`] per row group, in
/// row-group order. Iteration preserves the order in which columns were
/// first seen (footer order).
#[derive(Debug, Default)]
pub struct ColumnOffsetMap {
    entries: Vec<(Vec<String>, Vec<ChunkPageOffsets>)>,
}

impl ColumnOffsetMap {
    pub fn push(&mut self, path: Vec<String>, offsets: ChunkPageOffsets) {
        match self.entries.iter_mut().find(|(p, _)| *p == path) {
            Some((_, list)) => list.push(offsets),
            None => self.entries.push((path, vec![offsets])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Vec<String>, Vec<ChunkPageOffsets>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Inspect the Parquet file at `file_path`.
///
/// Returns the gap-filled, offset-sorted top-level segments and the
/// per-column offset map.
pub fn parse_parquet_file(file_path: &str) -> Result<(Vec<Segment>, ColumnOffsetMap)> {
    let mut reader = ByteReader::open(file_path)?;
    parse(&mut reader)
}

/// Inspect a Parquet file through an already-opened reader.
pub fn parse<R: Read + Seek>(
    reader: &mut ByteReader<R>,
) -> Result<(Vec<Segment>, ColumnOffsetMap)> {
    let file_size = reader.len();

    reader.seek_to(0)?;
    if reader.read_size(4)? != MAGIC {
        return Err(ParquetError::BadHeader);
    }
    if file_size < 12 {
        return Err(ParquetError::BadFooter);
    }
    reader.seek_to(file_size - 4)?;
    if reader.read_size(4)? != MAGIC {
        return Err(ParquetError::BadFooter);
    }

    reader.seek_to(file_size - 8)?;
    let length_bytes = reader.read_size(4)?;
    let footer_length = match length_bytes.as_slice() {
        [a, b, c, d] => u64::from(u32::from_le_bytes([*a, *b, *c, *d])),
        _ => return Err(ParquetError::BadFooter),
    };
    let footer_start = (file_size - 8).checked_sub(footer_length).ok_or_else(|| {
        ParquetError::decode(file_size - 8, "footer length larger than the file")
    })?;
    debug!(
        "Footer: {} bytes at offset {} (file size {})",
        footer_length, footer_start, file_size
    );

    let mut segments = vec![
        Segment::with_value(0, 4, "magic_number", SegmentValue::Text("PAR1".to_string())),
        Segment::with_value(
            file_size - 8,
            4,
            "footer_length",
            SegmentValue::Int(footer_length as i64),
        ),
        Segment::with_value(
            file_size - 4,
            4,
            "magic_number",
            SegmentValue::Text("PAR1".to_string()),
        ),
    ];

    reader.seek_to(footer_start)?;
    let footer_info = thrift::decode(reader, "footer", &FILE_META_DATA)
        .map_err(|e| e.rebase(footer_start))?;
    let mut footer = Segment::from_offset_info(&footer_info, footer_start);
    // The footer segment covers the declared footer area exactly, even if
    // the writer padded beyond the decoded struct.
    footer.length = footer_length;

    let mut column_offsets = ColumnOffsetMap::default();
    let row_groups = footer.child("row_groups").map(Segment::children).unwrap_or(&[]);
    for (row_group_index, row_group) in row_groups.iter().enumerate() {
        let columns = row_group.child("columns").map(Segment::children).unwrap_or(&[]);
        for (column_index, chunk) in columns.iter().enumerate() {
            let Some(meta_data) = chunk.child("meta_data") else {
                warn!(
                    "Column chunk at row group {}, column {} has no meta_data",
                    row_group_index, column_index
                );
                continue;
            };
            let path: Vec<String> = meta_data
                .child("path_in_schema")
                .map(Segment::children)
                .unwrap_or(&[])
                .iter()
                .filter_map(|c| c.as_str().map(str::to_string))
                .collect();

            let mut record = ChunkPageOffsets::default();
            if let Err(err) = read_pages(reader, chunk, &mut segments, &mut record) {
                warn!(
                    "Failed to walk pages for row group {}, column {}: {}",
                    row_group_index, column_index, err
                );
            }
            if let Err(err) = read_column_index(reader, chunk, &mut segments, &mut record) {
                warn!(
                    "Failed to read column index for row group {}, column {}: {}",
                    row_group_index, column_index, err
                );
            }
            if let Err(err) = read_offset_index(reader, chunk, &mut segments, &mut record) {
                warn!(
                    "Failed to read offset index for row group {}, column {}: {}",
                    row_group_index, column_index, err
                );
            }
            if let Err(err) = read_bloom_filter(reader, chunk, &mut segments, &mut record) {
                warn!(
                    "Failed to read bloom filter for row group {}, column {}: {}",
                    row_group_index, column_index, err
                );
            }
            column_offsets.push(path, record);
        }
    }

    segments.push(footer);
    let segments = fill_gaps(segments, file_size)?;
    Ok((segments, column_offsets))
}

/// Decoded essentials of one page: how long its header was, how many
/// payload bytes follow it, and how many values it contributes.
struct PageParts {
    header_length: u64,
    compressed_size: u64,
    num_values: i64,
}

/// Decode one page header at `offset`, emitting a `page_header` segment
/// for the header bytes and a `page_data` segment spanning the declared
/// `compressed_page_size` bytes that follow.
fn read_page_at<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    offset: u64,
    segments: &mut Vec<Segment>,
) -> Result<PageParts> {
    let file_size = reader.len();
    reader.seek_to(offset)?;
    let info = thrift::decode(reader, "page_header", &PAGE_HEADER).map_err(|e| e.rebase(offset))?;
    let header = Segment::from_offset_info(&info, offset);

    let compressed_size = header
        .child("compressed_page_size")
        .and_then(Segment::as_i64)
        .ok_or_else(|| ParquetError::decode(offset, "page header missing compressed_page_size"))?;
    if compressed_size < 0 {
        return Err(ParquetError::decode(offset, "negative compressed_page_size"));
    }
    let compressed_size = compressed_size as u64;
    let header_length = header.length;
    if offset + header_length + compressed_size > file_size {
        return Err(ParquetError::decode(
            offset,
            "compressed_page_size runs past end of file",
        ));
    }

    let num_values = header
        .child("data_page_header")
        .or_else(|| header.child("data_page_header_v2"))
        .and_then(|h| h.child("num_values"))
        .and_then(Segment::as_i64)
        .unwrap_or(0);

    segments.push(header);
    segments.push(Segment::new(
        offset + header_length,
        compressed_size,
        "page_data",
    ));
    Ok(PageParts {
        header_length,
        compressed_size,
        num_values,
    })
}

/// Walk the dictionary page (if any) and the data pages of one column
/// chunk, recording their offsets and emitting their segments.
fn read_pages<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    chunk: &Segment,
    segments: &mut Vec<Segment>,
    record: &mut ChunkPageOffsets,
) -> Result<()> {
    let Some(meta_data) = chunk.child("meta_data") else {
        return Ok(());
    };
    let num_values = meta_data
        .child("num_values")
        .and_then(Segment::as_i64)
        .unwrap_or(0);

    let mut dictionary_end = None;
    if let Some(dict_offset) = meta_data
        .child("dictionary_page_offset")
        .and_then(Segment::as_i64)
    {
        let dict_offset = dict_offset as u64;
        let page = read_page_at(reader, dict_offset, segments)?;
        record.dictionary_page = Some(dict_offset);
        // A dictionary page without payload takes no part in the
        // data_page_offset fix-up below.
        if page.compressed_size != 0 {
            dictionary_end = Some(dict_offset + page.header_length + page.compressed_size);
        }
    }

    let data_page_offset = meta_data
        .child("data_page_offset")
        .and_then(Segment::as_i64)
        .ok_or_else(|| {
            ParquetError::decode(chunk.offset, "column chunk metadata missing data_page_offset")
        })?;
    let mut cursor = data_page_offset as u64;
    if let Some(end) = dictionary_end {
        // Some writers record the dictionary page's own offset in
        // data_page_offset; see duckdb/duckdb#10829. The real data pages
        // start right after the dictionary page.
        if cursor < end {
            warn!("Fixing data_page_offset from {} to {}", cursor, end);
            cursor = end;
        }
    }

    let mut remaining_values = num_values;
    while remaining_values > 0 {
        let page = read_page_at(reader, cursor, segments)?;
        record.data_pages.push(cursor);
        if page.num_values == 0 {
            warn!(
                "Page header at offset {} contributes no values; stopping the walk for this column chunk",
                cursor
            );
            break;
        }
        remaining_values -= page.num_values;
        cursor += page.header_length + page.compressed_size;
    }
    Ok(())
}

/// Decode the column index referenced by the chunk, if any. The emitted
/// segment spans the declared `column_index_length` bytes.
fn read_column_index<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    chunk: &Segment,
    segments: &mut Vec<Segment>,
    record: &mut ChunkPageOffsets,
) -> Result<()> {
    let Some(offset) = chunk.child("column_index_offset").and_then(Segment::as_i64) else {
        return Ok(());
    };
    let offset = offset as u64;
    reader.seek_to(offset)?;
    let info = thrift::decode(reader, "column_index", &COLUMN_INDEX).map_err(|e| e.rebase(offset))?;
    let mut segment = Segment::from_offset_info(&info, offset);
    if let Some(declared) = chunk.child("column_index_length").and_then(Segment::as_i64) {
        if declared >= 0 {
            segment.length = declared as u64;
        }
    }
    if offset + segment.length > reader.len() {
        return Err(ParquetError::decode(
            offset,
            "column index runs past end of file",
        ));
    }
    segments.push(segment);
    record.column_index = Some(offset);
    Ok(())
}

/// Decode the offset index referenced by the chunk, if any.
fn read_offset_index<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    chunk: &Segment,
    segments: &mut Vec<Segment>,
    record: &mut ChunkPageOffsets,
) -> Result<()> {
    let Some(offset) = chunk.child("offset_index_offset").and_then(Segment::as_i64) else {
        return Ok(());
    };
    let offset = offset as u64;
    reader.seek_to(offset)?;
    let info = thrift::decode(reader, "offset_index", &OFFSET_INDEX).map_err(|e| e.rebase(offset))?;
    let mut segment = Segment::from_offset_info(&info, offset);
    if let Some(declared) = chunk.child("offset_index_length").and_then(Segment::as_i64) {
        if declared >= 0 {
            segment.length = declared as u64;
        }
    }
    if offset + segment.length > reader.len() {
        return Err(ParquetError::decode(
            offset,
            "offset index runs past end of file",
        ));
    }
    segments.push(segment);
    record.offset_index = Some(offset);
    Ok(())
}

/// Decode the bloom filter header referenced by the chunk's metadata, if
/// any. The emitted segment also covers the filter bitset: either the
/// declared `bloom_filter_length`, or the decoded header length plus the
/// header's own `numBytes` for writers that predate the length field.
fn read_bloom_filter<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    chunk: &Segment,
    segments: &mut Vec<Segment>,
    record: &mut ChunkPageOffsets,
) -> Result<()> {
    let Some(meta_data) = chunk.child("meta_data") else {
        return Ok(());
    };
    let Some(offset) = meta_data.child("bloom_filter_offset").and_then(Segment::as_i64) else {
        return Ok(());
    };
    let offset = offset as u64;
    reader.seek_to(offset)?;
    let info = thrift::decode(reader, "bloom_filter", &BLOOM_FILTER_HEADER)
        .map_err(|e| e.rebase(offset))?;
    let mut segment = Segment::from_offset_info(&info, offset);
    let header_length = segment.length;
    let num_bytes = segment
        .child("numBytes")
        .and_then(Segment::as_i64)
        .unwrap_or(0)
        .max(0) as u64;
    segment.length = match meta_data.child("bloom_filter_length").and_then(Segment::as_i64) {
        Some(declared) if declared >= 0 => declared as u64,
        _ => header_length + num_bytes,
    };
    if offset + segment.length > reader.len() {
        return Err(ParquetError::decode(
            offset,
            "bloom filter runs past end of file",
        ));
    }
    segments.push(segment);
    record.bloom_filter = Some(offset);
    Ok(())
}
