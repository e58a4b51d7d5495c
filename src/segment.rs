//! Segments: named, typed byte ranges of the inspected file.
//!
//! A [`Segment`] is the fundamental output unit of the inspection: an
//! absolute byte range plus a semantic name, a decoded value and optional
//! type metadata. Struct-like segments carry their decoded fields as child
//! segments, so the footer surfaces as one `footer` segment whose children
//! tile (most of) its byte range.
//!
//! Reserved top-level names: `magic_number`, `footer`, `footer_length`,
//! `page_header`, `page_data`, `column_index`, `offset_index`,
//! `bloom_filter` and `unknown`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{ParquetError, Result};
use crate::thrift::{EnumName, NodeValue, OffsetInfo};

/// Binary values longer than this keep only a 32-byte prefix in their
/// JSON rendering.
const JSON_BINARY_PREVIEW: usize = 32;

/// Decoded value of a segment.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentValue {
    /// No value (gap fillers, page payloads, magic numbers read as text
    /// carry `Text` instead).
    Absent,
    Bool(bool),
    Int(i64),
    Double(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// Child segments of a struct, list, set or map.
    Segments(Vec<Segment>),
}

impl SegmentValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, SegmentValue::Absent)
    }
}

/// Descriptive metadata attached to decoded segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentMetadata {
    /// Schema-level type: `struct`, `list`, `set`, `map` or a primitive
    /// name such as `i32`.
    pub kind: Option<&'static str>,
    /// Name of the structure schema, e.g. `FileMetaData`.
    pub type_class: Option<&'static str>,
    /// Name of the enumeration the numeric value belongs to.
    pub enum_type: Option<&'static str>,
    /// Symbolic name(s) for the numeric value(s).
    pub enum_name: Option<EnumName>,
}

impl SegmentMetadata {
    fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.type_class.is_none()
            && self.enum_type.is_none()
            && self.enum_name.is_none()
    }
}

/// One byte range of the file with a semantic name and decoded contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Absolute file offset of the first byte.
    pub offset: u64,
    /// Number of bytes covered; zero is allowed for absent optionals.
    pub length: u64,
    pub name: String,
    pub value: SegmentValue,
    pub metadata: Option<SegmentMetadata>,
}

impl Segment {
    /// Bare segment without value or metadata.
    pub fn new(offset: u64, length: u64, name: &str) -> Segment {
        Segment {
            offset,
            length,
            name: name.to_string(),
            value: SegmentValue::Absent,
            metadata: None,
        }
    }

    /// Segment carrying a value.
    pub fn with_value(offset: u64, length: u64, name: &str, value: SegmentValue) -> Segment {
        Segment {
            offset,
            length,
            name: name.to_string(),
            value,
            metadata: None,
        }
    }

    /// Convert a decoded offset tree into a segment, shifting all ranges
    /// by `base_offset`. The same tree can thus be rebased onto wherever
    /// the structure actually lives: the footer start for the footer, the
    /// page-header offset for page headers.
    pub fn from_offset_info(info: &OffsetInfo, base_offset: u64) -> Segment {
        let value = match &info.value {
            NodeValue::Bool(b) => SegmentValue::Bool(*b),
            NodeValue::Int(v) => SegmentValue::Int(*v),
            NodeValue::Double(v) => SegmentValue::Double(*v),
            NodeValue::Bytes(b) => SegmentValue::Bytes(b.clone()),
            NodeValue::Text(s) => SegmentValue::Text(s.clone()),
            NodeValue::Nodes(children) => SegmentValue::Segments(
                children
                    .iter()
                    .map(|child| Segment::from_offset_info(child, base_offset))
                    .collect(),
            ),
        };
        Segment {
            offset: base_offset + info.range_from,
            length: info.range_to - info.range_from,
            name: info.name.clone(),
            value,
            metadata: Some(SegmentMetadata {
                kind: Some(info.kind.as_str()),
                type_class: info.type_class,
                enum_type: info.enum_type,
                enum_name: info.enum_name.clone(),
            }),
        }
    }

    /// Child segments, or an empty slice for scalar segments.
    pub fn children(&self) -> &[Segment] {
        match &self.value {
            SegmentValue::Segments(children) => children,
            _ => &[],
        }
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Segment> {
        self.children().iter().find(|c| c.name == name)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.value {
            SegmentValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            SegmentValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            SegmentValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.value {
            SegmentValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Symbolic enum name of this segment, when a single one is attached.
    pub fn enum_name(&self) -> Option<&str> {
        match self.metadata.as_ref().and_then(|m| m.enum_name.as_ref()) {
            Some(EnumName::Single(name)) => Some(name),
            _ => None,
        }
    }
}

/// Linear scan for the unique segment named `footer`.
pub fn find_footer_segment(segments: &[Segment]) -> Option<&Segment> {
    segments.iter().find(|s| s.name == "footer")
}

/// Sort top-level segments by offset and insert `unknown` segments for
/// every unattributed hole, including the tail before end-of-file.
/// Existing segments are preserved verbatim; running the pass twice is a
/// no-op. Overlapping segments are refused: the map must stay consistent.
pub fn fill_gaps(mut segments: Vec<Segment>, file_size: u64) -> Result<Vec<Segment>> {
    segments.sort_by_key(|s| s.offset);
    let mut result = Vec::with_capacity(segments.len());
    let mut end = 0u64;
    for segment in segments {
        if segment.offset < end {
            return Err(ParquetError::decode(
                segment.offset,
                format!("segment '{}' overlaps the previous segment", segment.name),
            ));
        }
        if segment.offset > end {
            result.push(Segment::new(end, segment.offset - end, "unknown"));
        }
        end = segment.offset + segment.length;
        result.push(segment);
    }
    if end > file_size {
        return Err(ParquetError::decode(
            end,
            "segments extend past end of file",
        ));
    }
    if end < file_size {
        result.push(Segment::new(end, file_size - end, "unknown"));
    }
    Ok(result)
}

/// Tagged JSON rendering of a raw byte value: `{type, length, value}` for
/// short payloads, `{type, length, value_truncated}` with a 32-byte
/// prefix for long ones. Anything that is not raw bytes is refused.
pub fn json_encode(value: &SegmentValue) -> Result<Value> {
    let bytes = match value {
        SegmentValue::Bytes(b) => b,
        other => {
            return Err(ParquetError::BadArgument(format!(
                "json_encode expects raw bytes, got {:?}",
                other
            )))
        }
    };
    let mut object = Map::new();
    object.insert("type".to_string(), json!("binary"));
    object.insert("length".to_string(), json!(bytes.len()));
    if bytes.len() <= JSON_BINARY_PREVIEW {
        object.insert("value".to_string(), json!(bytes));
    } else {
        object.insert(
            "value_truncated".to_string(),
            json!(bytes[..JSON_BINARY_PREVIEW]),
        );
    }
    Ok(Value::Object(object))
}

/// Lossy JSON projection of a segment: structs become objects keyed by
/// child name (duplicate names: last wins), lists and sets become arrays,
/// maps become objects, enum-decorated numbers become their symbolic
/// names, bytes become the tagged binary form.
pub fn segment_to_json(segment: &Segment) -> Value {
    let kind = segment.metadata.as_ref().and_then(|m| m.kind);
    match kind {
        Some("struct") => {
            let mut object = Map::new();
            for child in segment.children() {
                object.insert(child.name.clone(), segment_to_json(child));
            }
            Value::Object(object)
        }
        Some("list") | Some("set") => {
            Value::Array(segment.children().iter().map(segment_to_json).collect())
        }
        Some("map") => {
            let mut object = Map::new();
            let mut children = segment.children().iter();
            while let (Some(key), Some(value)) = (children.next(), children.next()) {
                let key_json = segment_to_json(key);
                let key_text = match key_json {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                object.insert(key_text, segment_to_json(value));
            }
            Value::Object(object)
        }
        _ => match segment.metadata.as_ref().and_then(|m| m.enum_name.as_ref()) {
            Some(EnumName::Single(name)) => json!(name),
            Some(EnumName::Many(names)) => json!(names),
            None => match &segment.value {
                SegmentValue::Absent => Value::Null,
                SegmentValue::Bool(b) => json!(b),
                SegmentValue::Int(v) => json!(v),
                SegmentValue::Double(v) => json!(v),
                SegmentValue::Text(s) => json!(s),
                SegmentValue::Bytes(_) => {
                    json_encode(&segment.value).unwrap_or(Value::Null)
                }
                SegmentValue::Segments(children) => {
                    Value::Array(children.iter().map(segment_to_json).collect())
                }
            },
        },
    }
}

// ── Serde renderings ────────────────────────────────────────────────────

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("offset", &self.offset)?;
        map.serialize_entry("length", &self.length)?;
        map.serialize_entry("name", &self.name)?;
        if !self.value.is_absent() {
            map.serialize_entry("value", &self.value)?;
        }
        if let Some(metadata) = &self.metadata {
            if !metadata.is_empty() {
                map.serialize_entry("metadata", metadata)?;
            }
        }
        map.end()
    }
}

impl Serialize for SegmentValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SegmentValue::Absent => serializer.serialize_none(),
            SegmentValue::Bool(b) => serializer.serialize_bool(*b),
            SegmentValue::Int(v) => serializer.serialize_i64(*v),
            SegmentValue::Double(v) => serializer.serialize_f64(*v),
            SegmentValue::Text(s) => serializer.serialize_str(s),
            SegmentValue::Bytes(_) => {
                let tagged = json_encode(self).map_err(serde::ser::Error::custom)?;
                tagged.serialize(serializer)
            }
            SegmentValue::Segments(children) => children.serialize(serializer),
        }
    }
}

impl Serialize for SegmentMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(kind) = self.kind {
            map.serialize_entry("type", kind)?;
        }
        if let Some(type_class) = self.type_class {
            map.serialize_entry("type_class", type_class)?;
        }
        if let Some(enum_type) = self.enum_type {
            map.serialize_entry("enum_type", enum_type)?;
        }
        if let Some(enum_name) = &self.enum_name {
            match enum_name {
                EnumName::Single(name) => map.serialize_entry("enum_name", name)?,
                EnumName::Many(names) => map.serialize_entry("enum_name", names)?,
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thrift::NodeKind;

    fn enum_segment(offset: u64, length: u64, name: &str, value: i64, symbol: &str) -> Segment {
        let mut segment = Segment::with_value(offset, length, name, SegmentValue::Int(value));
        segment.metadata = Some(SegmentMetadata {
            kind: Some("i32"),
            type_class: None,
            enum_type: Some("PageType"),
            enum_name: Some(EnumName::Single(symbol.to_string())),
        });
        segment
    }

    #[test]
    fn test_from_offset_info_struct() {
        let info = OffsetInfo {
            name: "root".to_string(),
            kind: NodeKind::Struct,
            type_class: None,
            range_from: 0,
            range_to: 4,
            value: NodeValue::Nodes(vec![OffsetInfo {
                name: "field".to_string(),
                kind: NodeKind::I32,
                type_class: None,
                range_from: 0,
                range_to: 4,
                value: NodeValue::Int(7),
                enum_type: None,
                enum_name: None,
            }]),
            enum_type: None,
            enum_name: None,
        };

        let segment = Segment::from_offset_info(&info, 10);
        assert_eq!(segment.name, "root");
        assert_eq!(segment.offset, 10);
        assert_eq!(segment.length, 4);
        let child = &segment.children()[0];
        assert_eq!(child.name, "field");
        assert_eq!(child.offset, 10);
        assert_eq!(child.as_i64(), Some(7));
        assert_eq!(child.metadata.as_ref().unwrap().kind, Some("i32"));
    }

    #[test]
    fn test_from_offset_info_list_children() {
        let element = |from: u64, to: u64, value: i64| OffsetInfo {
            name: "element".to_string(),
            kind: NodeKind::I32,
            type_class: None,
            range_from: from,
            range_to: to,
            value: NodeValue::Int(value),
            enum_type: None,
            enum_name: None,
        };
        let info = OffsetInfo {
            name: "values".to_string(),
            kind: NodeKind::List,
            type_class: None,
            range_from: 2,
            range_to: 6,
            value: NodeValue::Nodes(vec![element(2, 4, 11), element(4, 6, 22)]),
            enum_type: None,
            enum_name: None,
        };

        let segment = Segment::from_offset_info(&info, 8);
        assert_eq!(segment.offset, 10);
        assert_eq!(segment.length, 4);
        assert_eq!(segment.metadata.as_ref().unwrap().kind, Some("list"));
        let values: Vec<i64> = segment
            .children()
            .iter()
            .filter_map(|c| c.as_i64())
            .collect();
        assert_eq!(values, vec![11, 22]);
    }

    #[test]
    fn test_fill_gaps_inserts_unknown_segments() {
        let segments = vec![
            Segment::with_value(0, 4, "magic", SegmentValue::Text("PAR1".to_string())),
            Segment::new(10, 2, "footer"),
        ];

        let result = fill_gaps(segments, 15).unwrap();

        assert_eq!(result.len(), 4);
        assert_eq!(result[1].name, "unknown");
        assert_eq!(result[1].offset, 4);
        assert_eq!(result[1].length, 6);
        assert_eq!(result[3].name, "unknown");
        assert_eq!(result[3].offset, 12);
        assert_eq!(result[3].length, 3);
    }

    #[test]
    fn test_fill_gaps_is_idempotent() {
        let segments = vec![
            Segment::new(0, 4, "magic"),
            Segment::new(10, 2, "footer"),
        ];
        let filled = fill_gaps(segments, 15).unwrap();
        let refilled = fill_gaps(filled.clone(), 15).unwrap();
        assert_eq!(filled, refilled);
    }

    #[test]
    fn test_fill_gaps_no_missing_regions() {
        let segments = vec![Segment::new(0, 3, "a"), Segment::new(3, 3, "b")];
        let result = fill_gaps(segments.clone(), 6).unwrap();
        assert_eq!(result, segments);
    }

    #[test]
    fn test_fill_gaps_rejects_overlap() {
        let segments = vec![Segment::new(0, 5, "a"), Segment::new(3, 3, "b")];
        assert!(fill_gaps(segments, 10).is_err());
    }

    #[test]
    fn test_json_encode_short_binary() {
        let value = SegmentValue::Bytes(b"abc".to_vec());
        let encoded = json_encode(&value).unwrap();
        assert_eq!(encoded["type"], "binary");
        assert_eq!(encoded["length"], 3);
        assert_eq!(encoded["value"], serde_json::json!([97, 98, 99]));
    }

    #[test]
    fn test_json_encode_truncates_long_binary() {
        let payload = b"0123456789abcdefghijklmnopqrstuvwxyz".to_vec();
        let encoded = json_encode(&SegmentValue::Bytes(payload.clone())).unwrap();
        assert_eq!(encoded["length"], payload.len());
        assert!(encoded.get("value").is_none());
        assert_eq!(encoded["value_truncated"].as_array().unwrap().len(), 32);
    }

    #[test]
    fn test_json_encode_rejects_non_bytes() {
        let err = json_encode(&SegmentValue::Text("not-bytes".to_string())).unwrap_err();
        assert!(matches!(err, ParquetError::BadArgument(_)));
    }

    #[test]
    fn test_segment_to_json_struct_and_enum() {
        let mut wrapper = Segment::with_value(
            0,
            4,
            "wrapper",
            SegmentValue::Segments(vec![enum_segment(0, 4, "field", 1, "ONE")]),
        );
        wrapper.metadata = Some(SegmentMetadata {
            kind: Some("struct"),
            ..Default::default()
        });

        assert_eq!(segment_to_json(&wrapper), serde_json::json!({"field": "ONE"}));
    }

    #[test]
    fn test_segment_to_json_struct_duplicate_names_last_wins() {
        let mut wrapper = Segment::with_value(
            0,
            4,
            "wrapper",
            SegmentValue::Segments(vec![
                Segment::with_value(0, 2, "field", SegmentValue::Int(1)),
                Segment::with_value(2, 2, "field", SegmentValue::Int(2)),
            ]),
        );
        wrapper.metadata = Some(SegmentMetadata {
            kind: Some("struct"),
            ..Default::default()
        });

        assert_eq!(segment_to_json(&wrapper), serde_json::json!({"field": 2}));
    }

    #[test]
    fn test_segment_to_json_list_without_enum() {
        let mut list = Segment::with_value(
            0,
            4,
            "values",
            SegmentValue::Segments(vec![
                Segment::with_value(0, 2, "element", SegmentValue::Int(7)),
                Segment::with_value(2, 2, "element", SegmentValue::Int(8)),
            ]),
        );
        list.metadata = Some(SegmentMetadata {
            kind: Some("list"),
            ..Default::default()
        });

        assert_eq!(segment_to_json(&list), serde_json::json!([7, 8]));
    }

    #[test]
    fn test_segment_to_json_enum_scalar() {
        let segment = enum_segment(0, 1, "type", 0, "DATA_PAGE");
        assert_eq!(segment_to_json(&segment), serde_json::json!("DATA_PAGE"));
    }

    #[test]
    fn test_find_footer_segment() {
        assert!(find_footer_segment(&[Segment::new(0, 1, "page_header")]).is_none());
        let segments = vec![Segment::new(0, 1, "page_header"), Segment::new(1, 2, "footer")];
        let footer = find_footer_segment(&segments).unwrap();
        assert_eq!(footer.offset, 1);
    }

    #[test]
    fn test_segment_serializes_with_tagged_bytes() {
        let segment = Segment::with_value(0, 2, "blob", SegmentValue::Bytes(vec![1, 2]));
        let value = serde_json::to_value(&segment).unwrap();
        assert_eq!(value["name"], "blob");
        assert_eq!(value["value"]["type"], "binary");
        assert_eq!(value["value"]["length"], 2);
    }
}
