//! Schema reconstruction and per-column aggregation of the footer.
//!
//! The footer stores the schema as a flat pre-order list of elements, each
//! announcing how many children follow it, and stores column chunks per
//! row group. This module rebuilds the schema tree, derives the logical
//! type of every leaf column, and folds the per-row-group column chunks
//! into one aggregate per column: summed counts and sizes, unioned
//! encodings and codecs, and combined statistics whose min/max are
//! compared in decoded space and re-encoded once at the end.

use std::collections::HashMap;
use std::fmt;

use log::warn;

use crate::segment::Segment;
use crate::stats::{decode_stats_value, encode_stats_value, StatValue};

/// Logical type annotation of a schema element.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalType {
    String,
    Map,
    List,
    Enum,
    Decimal { scale: i32, precision: i32 },
    Date,
    Time { is_adjusted_to_utc: bool, unit: TimeUnit },
    Timestamp { is_adjusted_to_utc: bool, unit: TimeUnit },
    Integer { bit_width: i64, is_signed: bool },
    Unknown,
    Json,
    Bson,
    Uuid,
    Float16,
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Millis,
    Micros,
    Nanos,
    Unspecified,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Millis => write!(f, "MILLIS"),
            TimeUnit::Micros => write!(f, "MICROS"),
            TimeUnit::Nanos => write!(f, "NANOS"),
            TimeUnit::Unspecified => write!(f, "unknown unit"),
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::String => write!(f, "STRING"),
            LogicalType::Map => write!(f, "MAP"),
            LogicalType::List => write!(f, "LIST"),
            LogicalType::Enum => write!(f, "ENUM"),
            LogicalType::Decimal { scale, precision } => {
                write!(f, "DECIMAL({},{})", precision, scale)
            }
            LogicalType::Date => write!(f, "DATE"),
            LogicalType::Time {
                is_adjusted_to_utc,
                unit,
            } => {
                write!(f, "TIME({})", unit)?;
                if *is_adjusted_to_utc {
                    write!(f, " (adjusted to UTC)")?;
                }
                Ok(())
            }
            LogicalType::Timestamp {
                is_adjusted_to_utc,
                unit,
            } => {
                write!(f, "TIMESTAMP({})", unit)?;
                if *is_adjusted_to_utc {
                    write!(f, " (adjusted to UTC)")?;
                }
                Ok(())
            }
            LogicalType::Integer {
                bit_width,
                is_signed,
            } => {
                let sign = if *is_signed { "SIGNED" } else { "UNSIGNED" };
                write!(f, "{} {}-BIT INTEGER", sign, bit_width)
            }
            LogicalType::Unknown => write!(f, "UNKNOWN"),
            LogicalType::Json => write!(f, "JSON"),
            LogicalType::Bson => write!(f, "BSON"),
            LogicalType::Uuid => write!(f, "UUID"),
            LogicalType::Float16 => write!(f, "FLOAT16"),
            LogicalType::Other(name) => write!(f, "{}", name),
        }
    }
}

impl LogicalType {
    /// Read the logical type out of a decoded `logicalType` union
    /// segment; the union carries exactly one child naming the variant.
    pub fn from_segment(segment: &Segment) -> Option<LogicalType> {
        let variant = segment.children().first()?;
        Some(match variant.name.as_str() {
            "STRING" => LogicalType::String,
            "MAP" => LogicalType::Map,
            "LIST" => LogicalType::List,
            "ENUM" => LogicalType::Enum,
            "DECIMAL" => LogicalType::Decimal {
                scale: variant
                    .child("scale")
                    .and_then(Segment::as_i64)
                    .unwrap_or(0) as i32,
                precision: variant
                    .child("precision")
                    .and_then(Segment::as_i64)
                    .unwrap_or(0) as i32,
            },
            "DATE" => LogicalType::Date,
            "TIME" => LogicalType::Time {
                is_adjusted_to_utc: variant
                    .child("isAdjustedToUTC")
                    .and_then(Segment::as_bool)
                    .unwrap_or(false),
                unit: time_unit(variant.child("unit")),
            },
            "TIMESTAMP" => LogicalType::Timestamp {
                is_adjusted_to_utc: variant
                    .child("isAdjustedToUTC")
                    .and_then(Segment::as_bool)
                    .unwrap_or(false),
                unit: time_unit(variant.child("unit")),
            },
            "INTEGER" => LogicalType::Integer {
                bit_width: variant
                    .child("bitWidth")
                    .and_then(Segment::as_i64)
                    .unwrap_or(0),
                is_signed: variant
                    .child("isSigned")
                    .and_then(Segment::as_bool)
                    .unwrap_or(true),
            },
            "UNKNOWN" => LogicalType::Unknown,
            "JSON" => LogicalType::Json,
            "BSON" => LogicalType::Bson,
            "UUID" => LogicalType::Uuid,
            "FLOAT16" => LogicalType::Float16,
            other => LogicalType::Other(other.to_string()),
        })
    }
}

fn time_unit(unit: Option<&Segment>) -> TimeUnit {
    match unit
        .and_then(|u| u.children().first())
        .map(|variant| variant.name.as_str())
    {
        Some("MILLIS") => TimeUnit::Millis,
        Some("MICROS") => TimeUnit::Micros,
        Some("NANOS") => TimeUnit::Nanos,
        _ => TimeUnit::Unspecified,
    }
}

/// One element of the footer schema, with its children resolved.
#[derive(Debug, Clone, Default)]
pub struct SchemaElement {
    pub physical_type: Option<String>,
    pub type_length: Option<i64>,
    pub repetition_type: Option<String>,
    pub name: String,
    pub num_children: i64,
    pub converted_type: Option<String>,
    pub scale: Option<i64>,
    pub precision: Option<i64>,
    pub field_id: Option<i64>,
    pub logical_type: Option<LogicalType>,
    pub children: Vec<SchemaElement>,
}

impl SchemaElement {
    fn from_segment(segment: &Segment) -> SchemaElement {
        SchemaElement {
            physical_type: segment
                .child("type")
                .and_then(Segment::enum_name)
                .map(str::to_string),
            type_length: segment.child("type_length").and_then(Segment::as_i64),
            repetition_type: segment
                .child("repetition_type")
                .and_then(Segment::enum_name)
                .map(str::to_string),
            name: segment
                .child("name")
                .and_then(Segment::as_str)
                .unwrap_or_default()
                .to_string(),
            num_children: segment
                .child("num_children")
                .and_then(Segment::as_i64)
                .unwrap_or(0),
            converted_type: segment
                .child("converted_type")
                .and_then(Segment::enum_name)
                .map(str::to_string),
            scale: segment.child("scale").and_then(Segment::as_i64),
            precision: segment.child("precision").and_then(Segment::as_i64),
            field_id: segment.child("field_id").and_then(Segment::as_i64),
            logical_type: segment.child("logicalType").and_then(LogicalType::from_segment),
            children: Vec::new(),
        }
    }
}

/// Rebuild the schema tree from the footer's flat pre-order element list.
pub fn build_schema_tree(footer: &Segment) -> Vec<SchemaElement> {
    let flat: Vec<SchemaElement> = footer
        .child("schema")
        .map(Segment::children)
        .unwrap_or(&[])
        .iter()
        .map(SchemaElement::from_segment)
        .collect();

    fn build(flat: &[SchemaElement], index: usize) -> (SchemaElement, usize) {
        let mut node = flat[index].clone();
        let mut index = index + 1;
        for _ in 0..node.num_children {
            if index >= flat.len() {
                warn!("Schema element '{}' announces more children than the schema holds", node.name);
                break;
            }
            let (child, next) = build(flat, index);
            node.children.push(child);
            index = next;
        }
        (node, index)
    }

    let mut tree = Vec::new();
    let mut index = 0;
    while index < flat.len() {
        let (node, next) = build(&flat, index);
        tree.push(node);
        index = next;
    }
    tree
}

/// Map every schema path (excluding the root element) to its logical
/// type, where one is declared.
pub fn build_logical_type_mapping(
    schema_tree: &[SchemaElement],
) -> HashMap<Vec<String>, LogicalType> {
    fn traverse(
        node: &SchemaElement,
        path: &[String],
        mapping: &mut HashMap<Vec<String>, LogicalType>,
    ) {
        let mut current = path.to_vec();
        current.push(node.name.clone());
        if let Some(logical) = &node.logical_type {
            mapping.insert(current.clone(), logical.clone());
        }
        for child in &node.children {
            traverse(child, &current, mapping);
        }
    }

    let mut mapping = HashMap::new();
    for root in schema_tree {
        for child in &root.children {
            traverse(child, &[], &mut mapping);
        }
    }
    mapping
}

/// De-duplicated compression codecs of all column chunks, in footer
/// order.
pub fn get_codecs(footer: &Segment) -> Vec<String> {
    let mut codecs = Vec::new();
    for_each_meta_data(footer, |meta_data| {
        if let Some(codec) = meta_data.child("codec").and_then(Segment::enum_name) {
            if !codecs.iter().any(|c| c == codec) {
                codecs.push(codec.to_string());
            }
        }
    });
    codecs
}

/// De-duplicated, sorted encodings of all column chunks.
pub fn get_encodings(footer: &Segment) -> Vec<String> {
    let mut encodings = Vec::new();
    for_each_meta_data(footer, |meta_data| {
        let elements = meta_data
            .child("encodings")
            .map(Segment::children)
            .unwrap_or(&[]);
        for element in elements {
            if let Some(name) = element.enum_name() {
                if !encodings.iter().any(|e| e == name) {
                    encodings.push(name.to_string());
                }
            }
        }
    });
    encodings.sort();
    encodings
}

fn for_each_meta_data<'a>(footer: &'a Segment, mut visit: impl FnMut(&'a Segment)) {
    let row_groups = footer.child("row_groups").map(Segment::children).unwrap_or(&[]);
    for row_group in row_groups {
        let columns = row_group.child("columns").map(Segment::children).unwrap_or(&[]);
        for chunk in columns {
            if let Some(meta_data) = chunk.child("meta_data") {
                visit(meta_data);
            }
        }
    }
}

/// Per-(page type, encoding) page count of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingStat {
    pub page_type: String,
    pub encoding: String,
    pub count: i64,
}

/// Statistics folded across all row groups of one column, with min/max
/// re-encoded into the column's physical representation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStatistics {
    pub null_count: Option<i64>,
    pub min_value: Option<Vec<u8>>,
    pub max_value: Option<Vec<u8>>,
    pub is_min_value_exact: Option<bool>,
    pub is_max_value_exact: Option<bool>,
}

/// One column of the file, aggregated across row groups.
#[derive(Debug, Clone, Default)]
pub struct ColumnAggregate {
    pub path_in_schema: Vec<String>,
    pub physical_type: Option<String>,
    pub type_length: Option<i64>,
    pub num_values: i64,
    pub total_uncompressed_size: i64,
    pub total_compressed_size: i64,
    pub encodings: Vec<String>,
    pub codecs: Vec<String>,
    pub encoding_stats: Vec<EncodingStat>,
    pub statistics: Option<ColumnStatistics>,
}

#[derive(Default)]
struct StatsFold {
    null_count: Option<i64>,
    min_value: Option<StatValue>,
    max_value: Option<StatValue>,
    is_min_value_exact: Option<bool>,
    is_max_value_exact: Option<bool>,
    seen: bool,
}

/// Group the footer's column chunks by schema path and fold each group
/// into a [`ColumnAggregate`]. Column order follows first appearance in
/// the footer.
pub fn aggregate_column_chunks(
    footer: &Segment,
    logical_types: &HashMap<Vec<String>, LogicalType>,
) -> Vec<ColumnAggregate> {
    let mut columns: Vec<(ColumnAggregate, StatsFold)> = Vec::new();

    for_each_meta_data(footer, |meta_data| {
        let path: Vec<String> = meta_data
            .child("path_in_schema")
            .map(Segment::children)
            .unwrap_or(&[])
            .iter()
            .filter_map(|c| c.as_str().map(str::to_string))
            .collect();
        if path.is_empty() {
            return;
        }
        let logical = logical_types.get(&path);

        let position = match columns.iter().position(|(c, _)| c.path_in_schema == path) {
            Some(position) => position,
            None => {
                columns.push((
                    ColumnAggregate {
                        path_in_schema: path.clone(),
                        physical_type: meta_data
                            .child("type")
                            .and_then(Segment::enum_name)
                            .map(str::to_string),
                        type_length: meta_data.child("type_length").and_then(Segment::as_i64),
                        ..Default::default()
                    },
                    StatsFold::default(),
                ));
                columns.len() - 1
            }
        };
        let (aggregate, fold) = &mut columns[position];

        aggregate.num_values += meta_data
            .child("num_values")
            .and_then(Segment::as_i64)
            .unwrap_or(0);
        aggregate.total_uncompressed_size += meta_data
            .child("total_uncompressed_size")
            .and_then(Segment::as_i64)
            .unwrap_or(0);
        aggregate.total_compressed_size += meta_data
            .child("total_compressed_size")
            .and_then(Segment::as_i64)
            .unwrap_or(0);

        let encoding_elements = meta_data
            .child("encodings")
            .map(Segment::children)
            .unwrap_or(&[]);
        for element in encoding_elements {
            if let Some(name) = element.enum_name() {
                if !aggregate.encodings.iter().any(|e| e == name) {
                    aggregate.encodings.push(name.to_string());
                }
            }
        }
        if let Some(codec) = meta_data.child("codec").and_then(Segment::enum_name) {
            if !aggregate.codecs.iter().any(|c| c == codec) {
                aggregate.codecs.push(codec.to_string());
            }
        }

        let stats_elements = meta_data
            .child("encoding_stats")
            .map(Segment::children)
            .unwrap_or(&[]);
        for item in stats_elements {
            let page_type = item
                .child("page_type")
                .and_then(Segment::enum_name)
                .unwrap_or_default()
                .to_string();
            let encoding = item
                .child("encoding")
                .and_then(Segment::enum_name)
                .unwrap_or_default()
                .to_string();
            let count = item.child("count").and_then(Segment::as_i64).unwrap_or(0);
            match aggregate
                .encoding_stats
                .iter_mut()
                .find(|s| s.page_type == page_type && s.encoding == encoding)
            {
                Some(stat) => stat.count += count,
                None => aggregate.encoding_stats.push(EncodingStat {
                    page_type,
                    encoding,
                    count,
                }),
            }
        }

        if let Some(statistics) = meta_data.child("statistics") {
            fold.seen = true;
            if let Some(null_count) = statistics.child("null_count").and_then(Segment::as_i64) {
                *fold.null_count.get_or_insert(0) += null_count;
            }
            let physical = aggregate.physical_type.as_deref();
            if let (Some(raw), Some(physical)) = (
                statistics.child("min_value").and_then(Segment::as_bytes),
                physical,
            ) {
                let decoded = decode_stats_value(raw, physical, logical);
                fold.min_value = Some(match fold.min_value.take() {
                    Some(current) => {
                        if decoded.partial_cmp(&current) == Some(std::cmp::Ordering::Less) {
                            decoded
                        } else {
                            current
                        }
                    }
                    None => decoded,
                });
            }
            if let (Some(raw), Some(physical)) = (
                statistics.child("max_value").and_then(Segment::as_bytes),
                physical,
            ) {
                let decoded = decode_stats_value(raw, physical, logical);
                fold.max_value = Some(match fold.max_value.take() {
                    Some(current) => {
                        if decoded.partial_cmp(&current) == Some(std::cmp::Ordering::Greater) {
                            decoded
                        } else {
                            current
                        }
                    }
                    None => decoded,
                });
            }
            if let Some(exact) = statistics
                .child("is_min_value_exact")
                .and_then(Segment::as_bool)
            {
                let combined = fold.is_min_value_exact.unwrap_or(true) && exact;
                fold.is_min_value_exact = Some(combined);
            }
            if let Some(exact) = statistics
                .child("is_max_value_exact")
                .and_then(Segment::as_bool)
            {
                let combined = fold.is_max_value_exact.unwrap_or(true) && exact;
                fold.is_max_value_exact = Some(combined);
            }
        }
    });

    columns
        .into_iter()
        .map(|(mut aggregate, fold)| {
            aggregate.encodings.sort();
            if fold.seen {
                let physical = aggregate.physical_type.as_deref().unwrap_or("");
                aggregate.statistics = Some(ColumnStatistics {
                    null_count: fold.null_count,
                    min_value: fold
                        .min_value
                        .map(|value| encode_stats_value(&value, physical)),
                    max_value: fold
                        .max_value
                        .map(|value| encode_stats_value(&value, physical)),
                    is_min_value_exact: fold.is_min_value_exact,
                    is_max_value_exact: fold.is_max_value_exact,
                });
            }
            aggregate
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{SegmentMetadata, SegmentValue};
    use crate::thrift::EnumName;

    fn struct_segment(name: &str, children: Vec<Segment>) -> Segment {
        let mut segment = Segment::with_value(0, 0, name, SegmentValue::Segments(children));
        segment.metadata = Some(SegmentMetadata {
            kind: Some("struct"),
            ..Default::default()
        });
        segment
    }

    fn list_segment(name: &str, children: Vec<Segment>) -> Segment {
        let mut segment = Segment::with_value(0, 0, name, SegmentValue::Segments(children));
        segment.metadata = Some(SegmentMetadata {
            kind: Some("list"),
            ..Default::default()
        });
        segment
    }

    fn int_segment(name: &str, value: i64) -> Segment {
        Segment::with_value(0, 0, name, SegmentValue::Int(value))
    }

    fn text_segment(name: &str, value: &str) -> Segment {
        Segment::with_value(0, 0, name, SegmentValue::Text(value.to_string()))
    }

    fn bytes_segment(name: &str, value: &[u8]) -> Segment {
        Segment::with_value(0, 0, name, SegmentValue::Bytes(value.to_vec()))
    }

    fn enum_segment(name: &str, enum_type: &'static str, value: i64, symbol: &str) -> Segment {
        let mut segment = Segment::with_value(0, 0, name, SegmentValue::Int(value));
        segment.metadata = Some(SegmentMetadata {
            kind: Some("i32"),
            type_class: None,
            enum_type: Some(enum_type),
            enum_name: Some(EnumName::Single(symbol.to_string())),
        });
        segment
    }

    fn schema_element(name: &str, num_children: i64, logical: Option<Segment>) -> Segment {
        let mut children = vec![text_segment("name", name)];
        if num_children > 0 {
            children.push(int_segment("num_children", num_children));
        }
        if let Some(logical) = logical {
            children.push(logical);
        }
        struct_segment("element", children)
    }

    fn decimal_logical(scale: i64, precision: i64) -> Segment {
        struct_segment(
            "logicalType",
            vec![struct_segment(
                "DECIMAL",
                vec![
                    int_segment("scale", scale),
                    int_segment("precision", precision),
                ],
            )],
        )
    }

    fn chunk(path: &str, min: &[u8], max: &[u8], null_count: i64) -> Segment {
        struct_segment(
            "element",
            vec![struct_segment(
                "meta_data",
                vec![
                    enum_segment("type", "Type", 7, "FIXED_LEN_BYTE_ARRAY"),
                    list_segment(
                        "encodings",
                        vec![enum_segment("element", "Encoding", 0, "PLAIN")],
                    ),
                    list_segment("path_in_schema", vec![text_segment("element", path)]),
                    enum_segment("codec", "CompressionCodec", 1, "SNAPPY"),
                    int_segment("num_values", 10),
                    int_segment("total_uncompressed_size", 100),
                    int_segment("total_compressed_size", 60),
                    struct_segment(
                        "statistics",
                        vec![
                            int_segment("null_count", null_count),
                            bytes_segment("max_value", max),
                            bytes_segment("min_value", min),
                        ],
                    ),
                ],
            )],
        )
    }

    fn sample_footer() -> Segment {
        let schema = list_segment(
            "schema",
            vec![
                schema_element("schema", 1, None),
                schema_element("amount", 0, Some(decimal_logical(2, 9))),
            ],
        );
        let row_group = |chunks: Vec<Segment>| {
            struct_segment("element", vec![list_segment("columns", chunks)])
        };
        struct_segment(
            "footer",
            vec![
                schema,
                list_segment(
                    "row_groups",
                    vec![
                        row_group(vec![chunk("amount", &[0x02], &[0x30, 0x39], 1)]),
                        row_group(vec![chunk("amount", &[0x01], &[0x10], 2)]),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_build_schema_tree() {
        let footer = sample_footer();
        let tree = build_schema_tree(&footer);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name, "schema");
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].name, "amount");
        assert_eq!(
            tree[0].children[0].logical_type,
            Some(LogicalType::Decimal {
                scale: 2,
                precision: 9
            })
        );
    }

    #[test]
    fn test_logical_type_mapping_drops_root() {
        let tree = build_schema_tree(&sample_footer());
        let mapping = build_logical_type_mapping(&tree);
        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.get(&vec!["amount".to_string()]),
            Some(&LogicalType::Decimal {
                scale: 2,
                precision: 9
            })
        );
    }

    #[test]
    fn test_codecs_and_encodings() {
        let footer = sample_footer();
        assert_eq!(get_codecs(&footer), vec!["SNAPPY".to_string()]);
        assert_eq!(get_encodings(&footer), vec!["PLAIN".to_string()]);
    }

    #[test]
    fn test_aggregate_folds_statistics_in_decoded_space() {
        let footer = sample_footer();
        let mapping = build_logical_type_mapping(&build_schema_tree(&footer));
        let aggregates = aggregate_column_chunks(&footer, &mapping);

        assert_eq!(aggregates.len(), 1);
        let column = &aggregates[0];
        assert_eq!(column.path_in_schema, vec!["amount".to_string()]);
        assert_eq!(column.num_values, 20);
        assert_eq!(column.total_uncompressed_size, 200);
        assert_eq!(column.total_compressed_size, 120);
        assert_eq!(column.encodings, vec!["PLAIN".to_string()]);
        assert_eq!(column.codecs, vec!["SNAPPY".to_string()]);

        let statistics = column.statistics.as_ref().unwrap();
        assert_eq!(statistics.null_count, Some(3));
        // min: 0x01 (= 0.01) beats 0x02; max: 0x3039 (= 123.45) beats
        // 0x10. Both re-encoded in minimal big-endian form.
        assert_eq!(statistics.min_value, Some(vec![0x01]));
        assert_eq!(statistics.max_value, Some(vec![0x30, 0x39]));
    }

    #[test]
    fn test_aggregate_sums_encoding_stats() {
        let stats_chunk = |count: i64| {
            struct_segment(
                "element",
                vec![struct_segment(
                    "meta_data",
                    vec![
                        list_segment("path_in_schema", vec![text_segment("element", "x")]),
                        list_segment(
                            "encoding_stats",
                            vec![struct_segment(
                                "element",
                                vec![
                                    enum_segment("page_type", "PageType", 0, "DATA_PAGE"),
                                    enum_segment("encoding", "Encoding", 0, "PLAIN"),
                                    int_segment("count", count),
                                ],
                            )],
                        ),
                    ],
                )],
            )
        };
        let footer = struct_segment(
            "footer",
            vec![list_segment(
                "row_groups",
                vec![
                    struct_segment("element", vec![list_segment("columns", vec![stats_chunk(2)])]),
                    struct_segment("element", vec![list_segment("columns", vec![stats_chunk(3)])]),
                ],
            )],
        );

        let aggregates = aggregate_column_chunks(&footer, &HashMap::new());
        assert_eq!(aggregates.len(), 1);
        assert_eq!(
            aggregates[0].encoding_stats,
            vec![EncodingStat {
                page_type: "DATA_PAGE".to_string(),
                encoding: "PLAIN".to_string(),
                count: 5
            }]
        );
        assert!(aggregates[0].statistics.is_none());
    }

    #[test]
    fn test_logical_type_display() {
        assert_eq!(
            LogicalType::Decimal {
                scale: 2,
                precision: 9
            }
            .to_string(),
            "DECIMAL(9,2)"
        );
        assert_eq!(
            LogicalType::Integer {
                bit_width: 32,
                is_signed: false
            }
            .to_string(),
            "UNSIGNED 32-BIT INTEGER"
        );
        assert_eq!(
            LogicalType::Timestamp {
                is_adjusted_to_utc: true,
                unit: TimeUnit::Micros
            }
            .to_string(),
            "TIMESTAMP(MICROS) (adjusted to UTC)"
        );
        assert_eq!(LogicalType::String.to_string(), "STRING");
    }
}
