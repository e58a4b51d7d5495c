//! Offset-recording decoder for the Thrift compact protocol.
//!
//! The Parquet footer, page headers and page indexes are all serialized
//! with the Thrift compact encoding: field headers carrying a field-id
//! delta and a wire-type nibble, zig-zag varints for integers,
//! varint-length-prefixed byte strings, size-and-type headers for
//! containers and an explicit stop byte for structs.
//!
//! Stock compact-protocol decoders reconstruct values but throw away the
//! one thing a forensic mapping needs: *where* each value lived. The
//! decoder here is descriptor-driven from the outset and records, for
//! every scalar and every sub-structure, the exact `[from, to)` byte range
//! it consumed, counted from the start of the decode. Positions are
//! captured before and after each read; the cursor never moves backwards.
//!
//! Field ids that do not appear in the descriptor are still consumed (the
//! wire format is self-describing enough for that) and surface under the
//! name `unknown_<id>`.

use std::io::Read;

use crate::error::{ParquetError, Result};
use crate::schema::{EnumDescriptor, FieldDescriptor, FieldType, StructDescriptor};

// Compact protocol wire types.
const CT_STOP: u8 = 0x00;
const CT_BOOL_TRUE: u8 = 0x01;
const CT_BOOL_FALSE: u8 = 0x02;
const CT_I8: u8 = 0x03;
const CT_I16: u8 = 0x04;
const CT_I32: u8 = 0x05;
const CT_I64: u8 = 0x06;
const CT_DOUBLE: u8 = 0x07;
const CT_BINARY: u8 = 0x08;
const CT_LIST: u8 = 0x09;
const CT_SET: u8 = 0x0a;
const CT_MAP: u8 = 0x0b;
const CT_STRUCT: u8 = 0x0c;

/// Refuse to allocate byte strings larger than this. Parquet metadata
/// values are small; a longer length prefix means a corrupt stream.
const MAX_BINARY_LEN: u64 = 256 * 1024 * 1024;

/// Parquet metadata never nests deeper than a handful of levels; a stream
/// exceeding this is corrupt.
const MAX_NESTING_DEPTH: usize = 64;

/// Schema-level kind of a decoded node, used as the `type` metadata of
/// the segment built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Double,
    Binary,
    Text,
    Struct,
    List,
    Set,
    Map,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Bool => "bool",
            NodeKind::I8 => "i8",
            NodeKind::I16 => "i16",
            NodeKind::I32 => "i32",
            NodeKind::I64 => "i64",
            NodeKind::Double => "double",
            NodeKind::Binary => "binary",
            NodeKind::Text => "string",
            NodeKind::Struct => "struct",
            NodeKind::List => "list",
            NodeKind::Set => "set",
            NodeKind::Map => "map",
        }
    }
}

/// Decoded value carried by an [`OffsetInfo`] node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    Bytes(Vec<u8>),
    Text(String),
    Nodes(Vec<OffsetInfo>),
}

/// Symbolic enum rendering of a numeric node: a single name for scalar
/// fields, one name per element for list-of-enum fields.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumName {
    Single(String),
    Many(Vec<String>),
}

/// One node of the offset tree: schema name, kind, byte range (relative
/// to the start of the decode) and decoded value, plus enum decoration
/// when the descriptor declares one.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetInfo {
    pub name: String,
    pub kind: NodeKind,
    pub type_class: Option<&'static str>,
    pub range_from: u64,
    pub range_to: u64,
    pub value: NodeValue,
    pub enum_type: Option<&'static str>,
    pub enum_name: Option<EnumName>,
}

impl OffsetInfo {
    fn new(name: String, kind: NodeKind, range_from: u64, range_to: u64, value: NodeValue) -> Self {
        OffsetInfo {
            name,
            kind,
            type_class: None,
            range_from,
            range_to,
            value,
            enum_type: None,
            enum_name: None,
        }
    }
}

/// Decode one compact-encoded struct from the current position of
/// `source`, guided by `descriptor`. Byte ranges in the returned tree are
/// relative to the position of `source` when the call was made.
pub fn decode<R: Read>(
    source: &mut R,
    name: &str,
    descriptor: &'static StructDescriptor,
) -> Result<OffsetInfo> {
    let mut decoder = CompactDecoder { source, pos: 0 };
    decoder.read_struct(name.to_string(), Some(descriptor), 0, 0)
}

struct CompactDecoder<'a, R> {
    source: &'a mut R,
    pos: u64,
}

impl<R: Read> CompactDecoder<'_, R> {
    fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.source
            .read_exact(&mut buf)
            .map_err(|_| ParquetError::decode(self.pos, "unexpected end of stream"))?;
        self.pos += 1;
        Ok(buf[0])
    }

    fn read_exact(&mut self, len: u64) -> Result<Vec<u8>> {
        if len > MAX_BINARY_LEN {
            return Err(ParquetError::decode(
                self.pos,
                format!("byte string length {} exceeds sanity limit", len),
            ));
        }
        let mut buf = vec![0u8; len as usize];
        self.source
            .read_exact(&mut buf)
            .map_err(|_| ParquetError::decode(self.pos, "unexpected end of stream"))?;
        self.pos += len;
        Ok(buf)
    }

    fn read_varint(&mut self) -> Result<u64> {
        let mut result: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = self.read_u8()?;
            result |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(result);
            }
            shift += 7;
            if shift >= 64 {
                return Err(ParquetError::decode(self.pos, "varint overflow"));
            }
        }
    }

    fn read_zigzag(&mut self) -> Result<i64> {
        let v = self.read_varint()?;
        Ok(((v >> 1) as i64) ^ -((v & 1) as i64))
    }

    fn read_struct(
        &mut self,
        name: String,
        descriptor: Option<&'static StructDescriptor>,
        start: u64,
        depth: usize,
    ) -> Result<OffsetInfo> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ParquetError::decode(self.pos, "structure nesting too deep"));
        }
        let mut children = Vec::new();
        let mut last_field_id: i16 = 0;
        loop {
            let field_start = self.pos;
            let header = self.read_u8()?;
            if header == CT_STOP {
                break;
            }
            let wire = header & 0x0f;
            let delta = header >> 4;
            let field_id = if delta == 0 {
                self.read_zigzag()? as i16
            } else {
                last_field_id.wrapping_add(delta as i16)
            };
            last_field_id = field_id;

            let field = descriptor.and_then(|d| d.field(field_id));
            let child = match field {
                Some(f) => self.read_field(f, wire, field_start, depth)?,
                None => self.read_wire_value(
                    format!("unknown_{}", field_id),
                    wire,
                    field_start,
                    depth,
                    false,
                )?,
            };
            children.push(child);
        }
        let mut node = OffsetInfo::new(
            name,
            NodeKind::Struct,
            start,
            self.pos,
            NodeValue::Nodes(children),
        );
        node.type_class = descriptor.map(|d| d.name);
        Ok(node)
    }

    /// Decode a field whose id resolved against the descriptor.
    fn read_field(
        &mut self,
        field: &'static FieldDescriptor,
        wire: u8,
        start: u64,
        depth: usize,
    ) -> Result<OffsetInfo> {
        let expected = expected_wire(&field.kind);
        let matches = match expected {
            CT_BOOL_TRUE => wire == CT_BOOL_TRUE || wire == CT_BOOL_FALSE,
            other => wire == other,
        };
        if !matches {
            return Err(ParquetError::decode(
                start,
                format!(
                    "field '{}' has wire type {:#x}, descriptor expects {:#x}",
                    field.name, wire, expected
                ),
            ));
        }

        match field.kind {
            FieldType::Bool => Ok(OffsetInfo::new(
                field.name.to_string(),
                NodeKind::Bool,
                start,
                self.pos,
                NodeValue::Bool(wire == CT_BOOL_TRUE),
            )),
            FieldType::I8 => {
                let v = self.read_u8()? as i8;
                Ok(OffsetInfo::new(
                    field.name.to_string(),
                    NodeKind::I8,
                    start,
                    self.pos,
                    NodeValue::Int(i64::from(v)),
                ))
            }
            FieldType::I16 | FieldType::I32 | FieldType::I64 => {
                let v = self.read_zigzag()?;
                let kind = match field.kind {
                    FieldType::I16 => NodeKind::I16,
                    FieldType::I32 => NodeKind::I32,
                    _ => NodeKind::I64,
                };
                let mut node = OffsetInfo::new(
                    field.name.to_string(),
                    kind,
                    start,
                    self.pos,
                    NodeValue::Int(v),
                );
                if let Some(e) = field.enumeration {
                    annotate_enum(&mut node, e, v);
                }
                Ok(node)
            }
            FieldType::Double => {
                let raw = self.read_exact(8)?;
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&raw);
                Ok(OffsetInfo::new(
                    field.name.to_string(),
                    NodeKind::Double,
                    start,
                    self.pos,
                    NodeValue::Double(f64::from_le_bytes(bytes)),
                ))
            }
            FieldType::Binary => {
                let len = self.read_varint()?;
                let bytes = self.read_exact(len)?;
                Ok(OffsetInfo::new(
                    field.name.to_string(),
                    NodeKind::Binary,
                    start,
                    self.pos,
                    NodeValue::Bytes(bytes),
                ))
            }
            FieldType::Text => {
                let len = self.read_varint()?;
                let bytes = self.read_exact(len)?;
                Ok(OffsetInfo::new(
                    field.name.to_string(),
                    NodeKind::Text,
                    start,
                    self.pos,
                    NodeValue::Text(String::from_utf8_lossy(&bytes).into_owned()),
                ))
            }
            FieldType::Struct(sd) => {
                self.read_struct(field.name.to_string(), Some(sd), start, depth + 1)
            }
            FieldType::List(elem) => self.read_container(
                field.name.to_string(),
                Some(*elem),
                field.enumeration,
                start,
                NodeKind::List,
                depth,
            ),
            FieldType::Set(elem) => self.read_container(
                field.name.to_string(),
                Some(*elem),
                field.enumeration,
                start,
                NodeKind::Set,
                depth,
            ),
            FieldType::Map(key, value) => {
                self.read_map(field.name.to_string(), Some((*key, *value)), start, depth)
            }
        }
    }

    /// Decode a value by wire type alone; used for field ids the
    /// descriptor does not know about.
    fn read_wire_value(
        &mut self,
        name: String,
        wire: u8,
        start: u64,
        depth: usize,
        in_container: bool,
    ) -> Result<OffsetInfo> {
        match wire {
            CT_BOOL_TRUE | CT_BOOL_FALSE => {
                let value = if in_container {
                    self.read_u8()? == CT_BOOL_TRUE
                } else {
                    wire == CT_BOOL_TRUE
                };
                Ok(OffsetInfo::new(
                    name,
                    NodeKind::Bool,
                    start,
                    self.pos,
                    NodeValue::Bool(value),
                ))
            }
            CT_I8 => {
                let v = self.read_u8()? as i8;
                Ok(OffsetInfo::new(
                    name,
                    NodeKind::I8,
                    start,
                    self.pos,
                    NodeValue::Int(i64::from(v)),
                ))
            }
            CT_I16 | CT_I32 | CT_I64 => {
                let v = self.read_zigzag()?;
                let kind = match wire {
                    CT_I16 => NodeKind::I16,
                    CT_I32 => NodeKind::I32,
                    _ => NodeKind::I64,
                };
                Ok(OffsetInfo::new(
                    name,
                    kind,
                    start,
                    self.pos,
                    NodeValue::Int(v),
                ))
            }
            CT_DOUBLE => {
                let raw = self.read_exact(8)?;
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&raw);
                Ok(OffsetInfo::new(
                    name,
                    NodeKind::Double,
                    start,
                    self.pos,
                    NodeValue::Double(f64::from_le_bytes(bytes)),
                ))
            }
            CT_BINARY => {
                let len = self.read_varint()?;
                let bytes = self.read_exact(len)?;
                Ok(OffsetInfo::new(
                    name,
                    NodeKind::Binary,
                    start,
                    self.pos,
                    NodeValue::Bytes(bytes),
                ))
            }
            CT_LIST => self.read_container(name, None, None, start, NodeKind::List, depth),
            CT_SET => self.read_container(name, None, None, start, NodeKind::Set, depth),
            CT_MAP => self.read_map(name, None, start, depth),
            CT_STRUCT => self.read_struct(name, None, start, depth + 1),
            other => Err(ParquetError::decode(
                start,
                format!("unsupported wire type {:#x}", other),
            )),
        }
    }

    /// Decode a list or set: header byte with size and element type, then
    /// the elements back to back. Every element becomes a child node.
    fn read_container(
        &mut self,
        name: String,
        elem: Option<FieldType>,
        enumeration: Option<&'static EnumDescriptor>,
        start: u64,
        kind: NodeKind,
        depth: usize,
    ) -> Result<OffsetInfo> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ParquetError::decode(self.pos, "structure nesting too deep"));
        }
        let header = self.read_u8()?;
        let elem_wire = header & 0x0f;
        let mut size = u64::from(header >> 4);
        if size == 15 {
            size = self.read_varint()?;
        }

        if let Some(elem_kind) = elem {
            let expected = expected_wire(&elem_kind);
            let matches = match expected {
                CT_BOOL_TRUE => elem_wire == CT_BOOL_TRUE || elem_wire == CT_BOOL_FALSE,
                other => elem_wire == other,
            };
            if size > 0 && !matches {
                return Err(ParquetError::decode(
                    start,
                    format!(
                        "container '{}' has element type {:#x}, descriptor expects {:#x}",
                        name, elem_wire, expected
                    ),
                ));
            }
        }

        let mut children = Vec::with_capacity(size.min(1024) as usize);
        for _ in 0..size {
            let elem_start = self.pos;
            let mut child = match elem {
                Some(FieldType::Struct(sd)) => {
                    self.read_struct("element".to_string(), Some(sd), elem_start, depth + 1)?
                }
                Some(FieldType::Text) => {
                    let len = self.read_varint()?;
                    let bytes = self.read_exact(len)?;
                    OffsetInfo::new(
                        "element".to_string(),
                        NodeKind::Text,
                        elem_start,
                        self.pos,
                        NodeValue::Text(String::from_utf8_lossy(&bytes).into_owned()),
                    )
                }
                _ => self.read_wire_value(
                    "element".to_string(),
                    elem_wire,
                    elem_start,
                    depth + 1,
                    true,
                )?,
            };
            if let (Some(e), NodeValue::Int(v)) = (enumeration, child.value.clone()) {
                annotate_enum(&mut child, e, v);
            }
            children.push(child);
        }

        let mut node = OffsetInfo::new(name, kind, start, self.pos, NodeValue::Nodes(children));
        if let Some(e) = enumeration {
            node.enum_type = Some(e.name);
            let names = match &node.value {
                NodeValue::Nodes(elems) => elems
                    .iter()
                    .map(|c| match (&c.enum_name, &c.value) {
                        (Some(EnumName::Single(n)), _) => n.clone(),
                        (_, NodeValue::Int(v)) => v.to_string(),
                        _ => String::new(),
                    })
                    .collect(),
                _ => Vec::new(),
            };
            node.enum_name = Some(EnumName::Many(names));
        }
        Ok(node)
    }

    /// Decode a map: varint entry count, one key/value-type byte when the
    /// map is non-empty, then alternating keys and values. Children
    /// alternate between `key` and `value` nodes.
    fn read_map(
        &mut self,
        name: String,
        kinds: Option<(FieldType, FieldType)>,
        start: u64,
        depth: usize,
    ) -> Result<OffsetInfo> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ParquetError::decode(self.pos, "structure nesting too deep"));
        }
        let count = self.read_varint()?;
        let mut children = Vec::new();
        if count > 0 {
            let type_byte = self.read_u8()?;
            let key_wire = type_byte >> 4;
            let value_wire = type_byte & 0x0f;
            for _ in 0..count {
                let key_start = self.pos;
                let key = match kinds {
                    Some((FieldType::Struct(sd), _)) => {
                        self.read_struct("key".to_string(), Some(sd), key_start, depth + 1)?
                    }
                    _ => self.read_wire_value(
                        "key".to_string(),
                        key_wire,
                        key_start,
                        depth + 1,
                        true,
                    )?,
                };
                children.push(key);
                let value_start = self.pos;
                let value = match kinds {
                    Some((_, FieldType::Struct(sd))) => {
                        self.read_struct("value".to_string(), Some(sd), value_start, depth + 1)?
                    }
                    _ => self.read_wire_value(
                        "value".to_string(),
                        value_wire,
                        value_start,
                        depth + 1,
                        true,
                    )?,
                };
                children.push(value);
            }
        }
        Ok(OffsetInfo::new(
            name,
            NodeKind::Map,
            start,
            self.pos,
            NodeValue::Nodes(children),
        ))
    }
}

fn annotate_enum(node: &mut OffsetInfo, enumeration: &'static EnumDescriptor, value: i64) {
    node.enum_type = Some(enumeration.name);
    if let Ok(v) = i32::try_from(value) {
        if let Some(symbol) = enumeration.name_of(v) {
            node.enum_name = Some(EnumName::Single(symbol.to_string()));
        }
    }
}

/// Compact wire type a descriptor type is expected to arrive as.
/// Booleans are reported as `CT_BOOL_TRUE`; callers accept either
/// boolean wire type.
fn expected_wire(kind: &FieldType) -> u8 {
    match kind {
        FieldType::Bool => CT_BOOL_TRUE,
        FieldType::I8 => CT_I8,
        FieldType::I16 => CT_I16,
        FieldType::I32 => CT_I32,
        FieldType::I64 => CT_I64,
        FieldType::Double => CT_DOUBLE,
        FieldType::Binary | FieldType::Text => CT_BINARY,
        FieldType::List(_) => CT_LIST,
        FieldType::Set(_) => CT_SET,
        FieldType::Map(_, _) => CT_MAP,
        FieldType::Struct(_) => CT_STRUCT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EnumDescriptor, FieldDescriptor, FieldType, StructDescriptor, ENCODING};
    use std::io::Cursor;

    static T_I32: FieldType = FieldType::I32;

    static COLOR: EnumDescriptor = EnumDescriptor {
        name: "Color",
        values: &[(0, "RED"), (1, "GREEN")],
    };

    static INNER: StructDescriptor = StructDescriptor {
        name: "Inner",
        fields: &[FieldDescriptor {
            id: 1,
            name: "count",
            kind: FieldType::I32,
            enumeration: None,
        }],
    };

    static SAMPLE: StructDescriptor = StructDescriptor {
        name: "Sample",
        fields: &[
            FieldDescriptor {
                id: 1,
                name: "number",
                kind: FieldType::I32,
                enumeration: None,
            },
            FieldDescriptor {
                id: 2,
                name: "label",
                kind: FieldType::Text,
                enumeration: None,
            },
            FieldDescriptor {
                id: 3,
                name: "flag",
                kind: FieldType::Bool,
                enumeration: None,
            },
            FieldDescriptor {
                id: 4,
                name: "inner",
                kind: FieldType::Struct(&INNER),
                enumeration: None,
            },
            FieldDescriptor {
                id: 5,
                name: "codes",
                kind: FieldType::List(&T_I32),
                enumeration: Some(&ENCODING),
            },
            FieldDescriptor {
                id: 6,
                name: "color",
                kind: FieldType::I32,
                enumeration: Some(&COLOR),
            },
            FieldDescriptor {
                id: 7,
                name: "payload",
                kind: FieldType::Binary,
                enumeration: None,
            },
        ],
    };

    fn decode_bytes(bytes: &[u8]) -> Result<OffsetInfo> {
        decode(&mut Cursor::new(bytes.to_vec()), "root", &SAMPLE)
    }

    #[test]
    fn test_scalar_field_ranges() {
        // field 1 (i32) = 7: header 0x15, zigzag(7) = 0x0e, stop.
        let root = decode_bytes(&[0x15, 0x0e, 0x00]).unwrap();
        assert_eq!(root.range_from, 0);
        assert_eq!(root.range_to, 3);
        assert_eq!(root.type_class, Some("Sample"));
        let children = match &root.value {
            NodeValue::Nodes(c) => c,
            _ => panic!("expected struct children"),
        };
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "number");
        assert_eq!(children[0].kind, NodeKind::I32);
        assert_eq!(children[0].range_from, 0);
        assert_eq!(children[0].range_to, 2);
        assert_eq!(children[0].value, NodeValue::Int(7));
    }

    #[test]
    fn test_text_and_bool_fields() {
        // field 2 string "abc", field 3 bool true.
        let root = decode_bytes(&[0x28, 0x03, b'a', b'b', b'c', 0x11, 0x00]).unwrap();
        let children = match &root.value {
            NodeValue::Nodes(c) => c.clone(),
            _ => panic!(),
        };
        assert_eq!(children[0].name, "label");
        assert_eq!(children[0].value, NodeValue::Text("abc".to_string()));
        assert_eq!(children[0].range_from, 0);
        assert_eq!(children[0].range_to, 5);
        assert_eq!(children[1].name, "flag");
        assert_eq!(children[1].value, NodeValue::Bool(true));
        // The bool value lives entirely in the field header byte.
        assert_eq!(children[1].range_to - children[1].range_from, 1);
    }

    #[test]
    fn test_nested_struct_spans_stop_byte() {
        // field 4 struct { field 1 i32 = 3 }, then stop of both structs.
        let root = decode_bytes(&[0x4c, 0x15, 0x06, 0x00, 0x00]).unwrap();
        let children = match &root.value {
            NodeValue::Nodes(c) => c.clone(),
            _ => panic!(),
        };
        let inner = &children[0];
        assert_eq!(inner.name, "inner");
        assert_eq!(inner.kind, NodeKind::Struct);
        assert_eq!(inner.type_class, Some("Inner"));
        assert_eq!(inner.range_from, 0);
        assert_eq!(inner.range_to, 4);
        let grand = match &inner.value {
            NodeValue::Nodes(c) => c.clone(),
            _ => panic!(),
        };
        assert_eq!(grand[0].name, "count");
        assert_eq!(grand[0].value, NodeValue::Int(3));
    }

    #[test]
    fn test_list_of_enums_collects_names() {
        // field 5: list of 2 x i32, values 0 (PLAIN) and 3 (RLE).
        let root = decode_bytes(&[0x59, 0x25, 0x00, 0x06, 0x00]).unwrap();
        let children = match &root.value {
            NodeValue::Nodes(c) => c.clone(),
            _ => panic!(),
        };
        let list = &children[0];
        assert_eq!(list.name, "codes");
        assert_eq!(list.kind, NodeKind::List);
        assert_eq!(list.enum_type, Some("Encoding"));
        assert_eq!(
            list.enum_name,
            Some(EnumName::Many(vec!["PLAIN".to_string(), "RLE".to_string()]))
        );
        let elements = match &list.value {
            NodeValue::Nodes(c) => c.clone(),
            _ => panic!(),
        };
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].name, "element");
        assert_eq!(elements[0].value, NodeValue::Int(0));
        assert_eq!(
            elements[0].enum_name,
            Some(EnumName::Single("PLAIN".to_string()))
        );
        assert_eq!(elements[1].value, NodeValue::Int(3));
        // Element ranges tile the list body.
        assert_eq!(elements[0].range_from + 1, elements[0].range_to);
        assert_eq!(elements[0].range_to, elements[1].range_from);
    }

    #[test]
    fn test_scalar_enum_annotation() {
        // field 6 i32 = 1 -> GREEN. Long-form header: delta 0, id zigzag.
        let root = decode_bytes(&[0x05, 0x0c, 0x02, 0x00]).unwrap();
        let children = match &root.value {
            NodeValue::Nodes(c) => c.clone(),
            _ => panic!(),
        };
        assert_eq!(children[0].name, "color");
        assert_eq!(children[0].enum_type, Some("Color"));
        assert_eq!(
            children[0].enum_name,
            Some(EnumName::Single("GREEN".to_string()))
        );
    }

    #[test]
    fn test_unknown_field_is_consumed_and_labeled() {
        // field 9 (not in descriptor) i64, then field 1 i32 via long form.
        let root = decode_bytes(&[0x96, 0x08, 0x05, 0x02, 0x0e, 0x00]).unwrap();
        let children = match &root.value {
            NodeValue::Nodes(c) => c.clone(),
            _ => panic!(),
        };
        assert_eq!(children[0].name, "unknown_9");
        assert_eq!(children[0].value, NodeValue::Int(4));
        assert_eq!(children[1].name, "number");
        assert_eq!(children[1].value, NodeValue::Int(7));
    }

    #[test]
    fn test_binary_field_surfaces_bytes() {
        let root = decode_bytes(&[0x78, 0x02, 0xff, 0x00, 0x00]).unwrap();
        let children = match &root.value {
            NodeValue::Nodes(c) => c.clone(),
            _ => panic!(),
        };
        assert_eq!(children[0].name, "payload");
        assert_eq!(children[0].kind, NodeKind::Binary);
        assert_eq!(children[0].value, NodeValue::Bytes(vec![0xff, 0x00]));
    }

    #[test]
    fn test_truncated_stream_is_a_decode_error() {
        // String field announcing 3 bytes but delivering 1.
        let err = decode_bytes(&[0x28, 0x03, b'a']).unwrap_err();
        assert!(matches!(err, ParquetError::Decode { .. }));
    }

    #[test]
    fn test_wire_type_mismatch_is_a_decode_error() {
        // field 1 declared i32 but encoded as a string.
        let err = decode_bytes(&[0x18, 0x01, b'x', 0x00]).unwrap_err();
        assert!(matches!(err, ParquetError::Decode { .. }));
    }

    #[test]
    fn test_varint_overflow_is_a_decode_error() {
        let mut bytes = vec![0x15];
        bytes.extend([0xff; 11]);
        let err = decode_bytes(&bytes).unwrap_err();
        assert!(matches!(err, ParquetError::Decode { .. }));
    }
}
