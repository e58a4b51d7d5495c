//! Reporting projections: the flat summary and the per-column page view.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::segment::{find_footer_segment, segment_to_json, Segment};
use crate::walker::ColumnOffsetMap;

/// Flat size-and-count overview of an inspected file.
///
/// Field order matches the rendered JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub num_rows: i64,
    pub num_row_groups: u64,
    pub num_columns: u64,
    pub num_pages: u64,
    pub num_data_pages: u64,
    pub num_v1_data_pages: u64,
    pub num_v2_data_pages: u64,
    pub num_dict_pages: u64,
    pub page_header_size: u64,
    pub uncompressed_page_data_size: i64,
    pub compressed_page_data_size: i64,
    pub uncompressed_page_size: i64,
    pub compressed_page_size: i64,
    pub column_index_size: i64,
    pub offset_index_size: i64,
    pub bloom_filter_size: i64,
    pub footer_size: u64,
    pub file_size: u64,
}

/// Compute the summary from the footer JSON projection and the segment
/// list.
///
/// Page counts come from the `page_header` segments: the page `type` enum
/// classifies data vs dictionary pages, and the presence of
/// `data_page_header` vs `data_page_header_v2` distinguishes v1 from v2
/// data pages. Sizes come from the footer's own bookkeeping fields.
pub fn get_summary(footer_json: &Value, segments: &[Segment]) -> Summary {
    let mut summary = Summary::default();

    for segment in segments {
        summary.file_size = summary.file_size.max(segment.offset + segment.length);
        if segment.name != "page_header" {
            continue;
        }
        summary.num_pages += 1;
        summary.page_header_size += segment.length;
        match segment.child("type").and_then(Segment::enum_name) {
            Some("DATA_PAGE") | Some("DATA_PAGE_V2") => summary.num_data_pages += 1,
            Some("DICTIONARY_PAGE") => summary.num_dict_pages += 1,
            _ => {}
        }
        if segment.child("data_page_header").is_some() {
            summary.num_v1_data_pages += 1;
        }
        if segment.child("data_page_header_v2").is_some() {
            summary.num_v2_data_pages += 1;
        }
    }

    summary.num_rows = footer_json["num_rows"].as_i64().unwrap_or(0);
    let empty = Vec::new();
    let row_groups = footer_json["row_groups"].as_array().unwrap_or(&empty);
    summary.num_row_groups = row_groups.len() as u64;
    summary.num_columns = row_groups
        .first()
        .and_then(|rg| rg["columns"].as_array())
        .map(|columns| columns.len() as u64)
        .unwrap_or(0);

    for row_group in row_groups {
        for column_chunk in row_group["columns"].as_array().unwrap_or(&empty) {
            let meta_data = &column_chunk["meta_data"];
            summary.uncompressed_page_data_size +=
                meta_data["total_uncompressed_size"].as_i64().unwrap_or(0);
            summary.compressed_page_data_size +=
                meta_data["total_compressed_size"].as_i64().unwrap_or(0);
            summary.column_index_size +=
                column_chunk["column_index_length"].as_i64().unwrap_or(0);
            summary.offset_index_size +=
                column_chunk["offset_index_length"].as_i64().unwrap_or(0);
            summary.bloom_filter_size +=
                column_chunk["bloom_filter_length"].as_i64().unwrap_or(0);
        }
    }
    summary.uncompressed_page_size = summary.uncompressed_page_data_size;
    summary.compressed_page_size = summary.compressed_page_data_size;

    if let Some(footer) = find_footer_segment(segments) {
        summary.footer_size = footer.length;
    }
    summary
}

/// Per-column page view: one entry per column of the offset map (in
/// insertion order), each listing per row group the JSON projections of
/// the recorded dictionary page, data pages, column index, offset index
/// and bloom filter, augmented with their absolute `$offset`.
pub fn get_pages(segments: &[Segment], column_offsets: &ColumnOffsetMap) -> Value {
    let mut page_headers: HashMap<u64, &Segment> = HashMap::new();
    let mut column_indexes: HashMap<u64, &Segment> = HashMap::new();
    let mut offset_indexes: HashMap<u64, &Segment> = HashMap::new();
    let mut bloom_filters: HashMap<u64, &Segment> = HashMap::new();
    for segment in segments {
        match segment.name.as_str() {
            "page_header" => {
                page_headers.insert(segment.offset, segment);
            }
            "column_index" => {
                column_indexes.insert(segment.offset, segment);
            }
            "offset_index" => {
                offset_indexes.insert(segment.offset, segment);
            }
            "bloom_filter" => {
                bloom_filters.insert(segment.offset, segment);
            }
            _ => {}
        }
    }

    let project = |lookup: &HashMap<u64, &Segment>, offset: u64| -> Option<Value> {
        lookup.get(&offset).map(|segment| {
            let mut value = segment_to_json(segment);
            if let Value::Object(object) = &mut value {
                object.insert("$offset".to_string(), json!(offset));
            }
            value
        })
    };

    let mut entries = Vec::new();
    for (path, row_groups) in column_offsets.iter() {
        let row_group_values: Vec<Value> = row_groups
            .iter()
            .map(|record| {
                let mut object = Map::new();
                if let Some(value) = record
                    .dictionary_page
                    .and_then(|offset| project(&page_headers, offset))
                {
                    object.insert("dictionary_page".to_string(), value);
                }
                let data_pages: Vec<Value> = record
                    .data_pages
                    .iter()
                    .filter_map(|offset| project(&page_headers, *offset))
                    .collect();
                if !data_pages.is_empty() {
                    object.insert("data_pages".to_string(), Value::Array(data_pages));
                }
                if let Some(value) = record
                    .column_index
                    .and_then(|offset| project(&column_indexes, offset))
                {
                    object.insert("column_index".to_string(), value);
                }
                if let Some(value) = record
                    .offset_index
                    .and_then(|offset| project(&offset_indexes, offset))
                {
                    object.insert("offset_index".to_string(), value);
                }
                if let Some(value) = record
                    .bloom_filter
                    .and_then(|offset| project(&bloom_filters, offset))
                {
                    object.insert("bloom_filter".to_string(), value);
                }
                Value::Object(object)
            })
            .collect();
        entries.push(json!({
            "column": path,
            "row_groups": row_group_values,
        }));
    }
    Value::Array(entries)
}
