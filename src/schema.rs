//! Static descriptors for every structure of the parquet-format metadata.
//!
//! The Thrift compact protocol is self-describing only at the wire-type
//! level; field names, nested struct types and enum value names all come
//! from the parquet.thrift IDL. This module is the hand-maintained
//! equivalent of the generated `thrift_spec` tables: one
//! [`StructDescriptor`] per structure, listing field ids, names, types and
//! enum decorations. The decoder walks these tables while reading bytes.
//!
//! Field ids and names follow parquet.thrift as shipped with
//! parquet-format; see <https://github.com/apache/parquet-format>.

/// A named enumeration and its value-to-name table.
pub struct EnumDescriptor {
    pub name: &'static str,
    pub values: &'static [(i32, &'static str)],
}

impl EnumDescriptor {
    /// Symbolic name for `value`, if the enumerator is known.
    pub fn name_of(&self, value: i32) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, n)| *n)
    }
}

/// Schema-level type of a single field.
///
/// `Binary` and `Text` share a wire representation (length-prefixed
/// bytes); the descriptor decides whether the payload surfaces as raw
/// bytes or as a string.
#[derive(Clone, Copy)]
pub enum FieldType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Double,
    Binary,
    Text,
    Struct(&'static StructDescriptor),
    List(&'static FieldType),
    Set(&'static FieldType),
    Map(&'static FieldType, &'static FieldType),
}

/// One field of a struct: id, schema name, type, optional enum decoration.
pub struct FieldDescriptor {
    pub id: i16,
    pub name: &'static str,
    pub kind: FieldType,
    pub enumeration: Option<&'static EnumDescriptor>,
}

/// A struct (or Thrift union, which is wire-identical) and its fields.
pub struct StructDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl StructDescriptor {
    /// Field descriptor for the given field id.
    pub fn field(&self, id: i16) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }
}

const fn field(id: i16, name: &'static str, kind: FieldType) -> FieldDescriptor {
    FieldDescriptor {
        id,
        name,
        kind,
        enumeration: None,
    }
}

const fn enum_field(
    id: i16,
    name: &'static str,
    kind: FieldType,
    enumeration: &'static EnumDescriptor,
) -> FieldDescriptor {
    FieldDescriptor {
        id,
        name,
        kind,
        enumeration: Some(enumeration),
    }
}

// ── Enumerations ────────────────────────────────────────────────────────

pub static PHYSICAL_TYPE: EnumDescriptor = EnumDescriptor {
    name: "Type",
    values: &[
        (0, "BOOLEAN"),
        (1, "INT32"),
        (2, "INT64"),
        (3, "INT96"),
        (4, "FLOAT"),
        (5, "DOUBLE"),
        (6, "BYTE_ARRAY"),
        (7, "FIXED_LEN_BYTE_ARRAY"),
    ],
};

pub static CONVERTED_TYPE: EnumDescriptor = EnumDescriptor {
    name: "ConvertedType",
    values: &[
        (0, "UTF8"),
        (1, "MAP"),
        (2, "MAP_KEY_VALUE"),
        (3, "LIST"),
        (4, "ENUM"),
        (5, "DECIMAL"),
        (6, "DATE"),
        (7, "TIME_MILLIS"),
        (8, "TIME_MICROS"),
        (9, "TIMESTAMP_MILLIS"),
        (10, "TIMESTAMP_MICROS"),
        (11, "UINT_8"),
        (12, "UINT_16"),
        (13, "UINT_32"),
        (14, "UINT_64"),
        (15, "INT_8"),
        (16, "INT_16"),
        (17, "INT_32"),
        (18, "INT_64"),
        (19, "JSON"),
        (20, "BSON"),
        (21, "INTERVAL"),
    ],
};

pub static FIELD_REPETITION_TYPE: EnumDescriptor = EnumDescriptor {
    name: "FieldRepetitionType",
    values: &[(0, "REQUIRED"), (1, "OPTIONAL"), (2, "REPEATED")],
};

pub static ENCODING: EnumDescriptor = EnumDescriptor {
    name: "Encoding",
    values: &[
        (0, "PLAIN"),
        (2, "PLAIN_DICTIONARY"),
        (3, "RLE"),
        (4, "BIT_PACKED"),
        (5, "DELTA_BINARY_PACKED"),
        (6, "DELTA_LENGTH_BYTE_ARRAY"),
        (7, "DELTA_BYTE_ARRAY"),
        (8, "RLE_DICTIONARY"),
        (9, "BYTE_STREAM_SPLIT"),
    ],
};

pub static COMPRESSION_CODEC: EnumDescriptor = EnumDescriptor {
    name: "CompressionCodec",
    values: &[
        (0, "UNCOMPRESSED"),
        (1, "SNAPPY"),
        (2, "GZIP"),
        (3, "LZO"),
        (4, "BROTLI"),
        (5, "LZ4"),
        (6, "ZSTD"),
        (7, "LZ4_RAW"),
    ],
};

pub static PAGE_TYPE: EnumDescriptor = EnumDescriptor {
    name: "PageType",
    values: &[
        (0, "DATA_PAGE"),
        (1, "INDEX_PAGE"),
        (2, "DICTIONARY_PAGE"),
        (3, "DATA_PAGE_V2"),
    ],
};

pub static BOUNDARY_ORDER: EnumDescriptor = EnumDescriptor {
    name: "BoundaryOrder",
    values: &[(0, "UNORDERED"), (1, "ASCENDING"), (2, "DESCENDING")],
};

// ── Element type aliases for list fields ────────────────────────────────

static T_BOOL: FieldType = FieldType::Bool;
static T_I32: FieldType = FieldType::I32;
static T_I64: FieldType = FieldType::I64;
static T_BINARY: FieldType = FieldType::Binary;
static T_TEXT: FieldType = FieldType::Text;
static T_SCHEMA_ELEMENT: FieldType = FieldType::Struct(&SCHEMA_ELEMENT);
static T_ROW_GROUP: FieldType = FieldType::Struct(&ROW_GROUP);
static T_COLUMN_CHUNK: FieldType = FieldType::Struct(&COLUMN_CHUNK);
static T_KEY_VALUE: FieldType = FieldType::Struct(&KEY_VALUE);
static T_SORTING_COLUMN: FieldType = FieldType::Struct(&SORTING_COLUMN);
static T_PAGE_ENCODING_STATS: FieldType = FieldType::Struct(&PAGE_ENCODING_STATS);
static T_COLUMN_ORDER: FieldType = FieldType::Struct(&COLUMN_ORDER);
static T_PAGE_LOCATION: FieldType = FieldType::Struct(&PAGE_LOCATION);

// ── Logical types (unions of mostly-empty structs) ──────────────────────

pub static STRING_TYPE: StructDescriptor = StructDescriptor {
    name: "StringType",
    fields: &[],
};
pub static MAP_TYPE: StructDescriptor = StructDescriptor {
    name: "MapType",
    fields: &[],
};
pub static LIST_TYPE: StructDescriptor = StructDescriptor {
    name: "ListType",
    fields: &[],
};
pub static ENUM_TYPE: StructDescriptor = StructDescriptor {
    name: "EnumType",
    fields: &[],
};
pub static DATE_TYPE: StructDescriptor = StructDescriptor {
    name: "DateType",
    fields: &[],
};
pub static NULL_TYPE: StructDescriptor = StructDescriptor {
    name: "NullType",
    fields: &[],
};
pub static JSON_TYPE: StructDescriptor = StructDescriptor {
    name: "JsonType",
    fields: &[],
};
pub static BSON_TYPE: StructDescriptor = StructDescriptor {
    name: "BsonType",
    fields: &[],
};
pub static UUID_TYPE: StructDescriptor = StructDescriptor {
    name: "UUIDType",
    fields: &[],
};
pub static FLOAT16_TYPE: StructDescriptor = StructDescriptor {
    name: "Float16Type",
    fields: &[],
};

pub static DECIMAL_TYPE: StructDescriptor = StructDescriptor {
    name: "DecimalType",
    fields: &[
        field(1, "scale", FieldType::I32),
        field(2, "precision", FieldType::I32),
    ],
};

pub static MILLI_SECONDS: StructDescriptor = StructDescriptor {
    name: "MilliSeconds",
    fields: &[],
};
pub static MICRO_SECONDS: StructDescriptor = StructDescriptor {
    name: "MicroSeconds",
    fields: &[],
};
pub static NANO_SECONDS: StructDescriptor = StructDescriptor {
    name: "NanoSeconds",
    fields: &[],
};

pub static TIME_UNIT: StructDescriptor = StructDescriptor {
    name: "TimeUnit",
    fields: &[
        field(1, "MILLIS", FieldType::Struct(&MILLI_SECONDS)),
        field(2, "MICROS", FieldType::Struct(&MICRO_SECONDS)),
        field(3, "NANOS", FieldType::Struct(&NANO_SECONDS)),
    ],
};

pub static TIME_TYPE: StructDescriptor = StructDescriptor {
    name: "TimeType",
    fields: &[
        field(1, "isAdjustedToUTC", FieldType::Bool),
        field(2, "unit", FieldType::Struct(&TIME_UNIT)),
    ],
};

pub static TIMESTAMP_TYPE: StructDescriptor = StructDescriptor {
    name: "TimestampType",
    fields: &[
        field(1, "isAdjustedToUTC", FieldType::Bool),
        field(2, "unit", FieldType::Struct(&TIME_UNIT)),
    ],
};

pub static INT_TYPE: StructDescriptor = StructDescriptor {
    name: "IntType",
    fields: &[
        field(1, "bitWidth", FieldType::I8),
        field(2, "isSigned", FieldType::Bool),
    ],
};

pub static LOGICAL_TYPE: StructDescriptor = StructDescriptor {
    name: "LogicalType",
    fields: &[
        field(1, "STRING", FieldType::Struct(&STRING_TYPE)),
        field(2, "MAP", FieldType::Struct(&MAP_TYPE)),
        field(3, "LIST", FieldType::Struct(&LIST_TYPE)),
        field(4, "ENUM", FieldType::Struct(&ENUM_TYPE)),
        field(5, "DECIMAL", FieldType::Struct(&DECIMAL_TYPE)),
        field(6, "DATE", FieldType::Struct(&DATE_TYPE)),
        field(7, "TIME", FieldType::Struct(&TIME_TYPE)),
        field(8, "TIMESTAMP", FieldType::Struct(&TIMESTAMP_TYPE)),
        field(10, "INTEGER", FieldType::Struct(&INT_TYPE)),
        field(11, "UNKNOWN", FieldType::Struct(&NULL_TYPE)),
        field(12, "JSON", FieldType::Struct(&JSON_TYPE)),
        field(13, "BSON", FieldType::Struct(&BSON_TYPE)),
        field(14, "UUID", FieldType::Struct(&UUID_TYPE)),
        field(15, "FLOAT16", FieldType::Struct(&FLOAT16_TYPE)),
    ],
};

// ── Schema and footer structures ────────────────────────────────────────

pub static SCHEMA_ELEMENT: StructDescriptor = StructDescriptor {
    name: "SchemaElement",
    fields: &[
        enum_field(1, "type", FieldType::I32, &PHYSICAL_TYPE),
        field(2, "type_length", FieldType::I32),
        enum_field(3, "repetition_type", FieldType::I32, &FIELD_REPETITION_TYPE),
        field(4, "name", FieldType::Text),
        field(5, "num_children", FieldType::I32),
        enum_field(6, "converted_type", FieldType::I32, &CONVERTED_TYPE),
        field(7, "scale", FieldType::I32),
        field(8, "precision", FieldType::I32),
        field(9, "field_id", FieldType::I32),
        field(10, "logicalType", FieldType::Struct(&LOGICAL_TYPE)),
    ],
};

pub static KEY_VALUE: StructDescriptor = StructDescriptor {
    name: "KeyValue",
    fields: &[
        field(1, "key", FieldType::Text),
        field(2, "value", FieldType::Text),
    ],
};

pub static SORTING_COLUMN: StructDescriptor = StructDescriptor {
    name: "SortingColumn",
    fields: &[
        field(1, "column_idx", FieldType::I32),
        field(2, "descending", FieldType::Bool),
        field(3, "nulls_first", FieldType::Bool),
    ],
};

pub static PAGE_ENCODING_STATS: StructDescriptor = StructDescriptor {
    name: "PageEncodingStats",
    fields: &[
        enum_field(1, "page_type", FieldType::I32, &PAGE_TYPE),
        enum_field(2, "encoding", FieldType::I32, &ENCODING),
        field(3, "count", FieldType::I32),
    ],
};

pub static STATISTICS: StructDescriptor = StructDescriptor {
    name: "Statistics",
    fields: &[
        field(1, "max", FieldType::Binary),
        field(2, "min", FieldType::Binary),
        field(3, "null_count", FieldType::I64),
        field(4, "distinct_count", FieldType::I64),
        field(5, "max_value", FieldType::Binary),
        field(6, "min_value", FieldType::Binary),
        field(7, "is_max_value_exact", FieldType::Bool),
        field(8, "is_min_value_exact", FieldType::Bool),
    ],
};

pub static SIZE_STATISTICS: StructDescriptor = StructDescriptor {
    name: "SizeStatistics",
    fields: &[
        field(1, "unencoded_byte_array_data_bytes", FieldType::I64),
        field(2, "repetition_level_histogram", FieldType::List(&T_I64)),
        field(3, "definition_level_histogram", FieldType::List(&T_I64)),
    ],
};

pub static COLUMN_META_DATA: StructDescriptor = StructDescriptor {
    name: "ColumnMetaData",
    fields: &[
        enum_field(1, "type", FieldType::I32, &PHYSICAL_TYPE),
        enum_field(2, "encodings", FieldType::List(&T_I32), &ENCODING),
        field(3, "path_in_schema", FieldType::List(&T_TEXT)),
        enum_field(4, "codec", FieldType::I32, &COMPRESSION_CODEC),
        field(5, "num_values", FieldType::I64),
        field(6, "total_uncompressed_size", FieldType::I64),
        field(7, "total_compressed_size", FieldType::I64),
        field(8, "key_value_metadata", FieldType::List(&T_KEY_VALUE)),
        field(9, "data_page_offset", FieldType::I64),
        field(10, "index_page_offset", FieldType::I64),
        field(11, "dictionary_page_offset", FieldType::I64),
        field(12, "statistics", FieldType::Struct(&STATISTICS)),
        field(13, "encoding_stats", FieldType::List(&T_PAGE_ENCODING_STATS)),
        field(14, "bloom_filter_offset", FieldType::I64),
        field(15, "bloom_filter_length", FieldType::I32),
        field(16, "size_statistics", FieldType::Struct(&SIZE_STATISTICS)),
    ],
};

pub static ENCRYPTION_WITH_FOOTER_KEY: StructDescriptor = StructDescriptor {
    name: "EncryptionWithFooterKey",
    fields: &[],
};

pub static ENCRYPTION_WITH_COLUMN_KEY: StructDescriptor = StructDescriptor {
    name: "EncryptionWithColumnKey",
    fields: &[
        field(1, "path_in_schema", FieldType::List(&T_TEXT)),
        field(2, "key_metadata", FieldType::Binary),
    ],
};

pub static COLUMN_CRYPTO_META_DATA: StructDescriptor = StructDescriptor {
    name: "ColumnCryptoMetaData",
    fields: &[
        field(
            1,
            "ENCRYPTION_WITH_FOOTER_KEY",
            FieldType::Struct(&ENCRYPTION_WITH_FOOTER_KEY),
        ),
        field(
            2,
            "ENCRYPTION_WITH_COLUMN_KEY",
            FieldType::Struct(&ENCRYPTION_WITH_COLUMN_KEY),
        ),
    ],
};

pub static COLUMN_CHUNK: StructDescriptor = StructDescriptor {
    name: "ColumnChunk",
    fields: &[
        field(1, "file_path", FieldType::Text),
        field(2, "file_offset", FieldType::I64),
        field(3, "meta_data", FieldType::Struct(&COLUMN_META_DATA)),
        field(4, "offset_index_offset", FieldType::I64),
        field(5, "offset_index_length", FieldType::I32),
        field(6, "column_index_offset", FieldType::I64),
        field(7, "column_index_length", FieldType::I32),
        field(8, "crypto_metadata", FieldType::Struct(&COLUMN_CRYPTO_META_DATA)),
        field(9, "encrypted_column_metadata", FieldType::Binary),
    ],
};

pub static ROW_GROUP: StructDescriptor = StructDescriptor {
    name: "RowGroup",
    fields: &[
        field(1, "columns", FieldType::List(&T_COLUMN_CHUNK)),
        field(2, "total_byte_size", FieldType::I64),
        field(3, "num_rows", FieldType::I64),
        field(4, "sorting_columns", FieldType::List(&T_SORTING_COLUMN)),
        field(5, "file_offset", FieldType::I64),
        field(6, "total_compressed_size", FieldType::I64),
        field(7, "ordinal", FieldType::I16),
    ],
};

pub static TYPE_DEFINED_ORDER: StructDescriptor = StructDescriptor {
    name: "TypeDefinedOrder",
    fields: &[],
};

pub static COLUMN_ORDER: StructDescriptor = StructDescriptor {
    name: "ColumnOrder",
    fields: &[field(
        1,
        "TYPE_ORDER",
        FieldType::Struct(&TYPE_DEFINED_ORDER),
    )],
};

pub static AES_GCM_V1: StructDescriptor = StructDescriptor {
    name: "AesGcmV1",
    fields: &[
        field(1, "aad_prefix", FieldType::Binary),
        field(2, "aad_file_unique", FieldType::Binary),
        field(3, "supply_aad_prefix", FieldType::Bool),
    ],
};

pub static AES_GCM_CTR_V1: StructDescriptor = StructDescriptor {
    name: "AesGcmCtrV1",
    fields: &[
        field(1, "aad_prefix", FieldType::Binary),
        field(2, "aad_file_unique", FieldType::Binary),
        field(3, "supply_aad_prefix", FieldType::Bool),
    ],
};

pub static ENCRYPTION_ALGORITHM: StructDescriptor = StructDescriptor {
    name: "EncryptionAlgorithm",
    fields: &[
        field(1, "AES_GCM_V1", FieldType::Struct(&AES_GCM_V1)),
        field(2, "AES_GCM_CTR_V1", FieldType::Struct(&AES_GCM_CTR_V1)),
    ],
};

pub static FILE_META_DATA: StructDescriptor = StructDescriptor {
    name: "FileMetaData",
    fields: &[
        field(1, "version", FieldType::I32),
        field(2, "schema", FieldType::List(&T_SCHEMA_ELEMENT)),
        field(3, "num_rows", FieldType::I64),
        field(4, "row_groups", FieldType::List(&T_ROW_GROUP)),
        field(5, "key_value_metadata", FieldType::List(&T_KEY_VALUE)),
        field(6, "created_by", FieldType::Text),
        field(7, "column_orders", FieldType::List(&T_COLUMN_ORDER)),
        field(
            8,
            "encryption_algorithm",
            FieldType::Struct(&ENCRYPTION_ALGORITHM),
        ),
        field(9, "footer_signing_key_metadata", FieldType::Binary),
    ],
};

// ── Page headers ────────────────────────────────────────────────────────

pub static DATA_PAGE_HEADER: StructDescriptor = StructDescriptor {
    name: "DataPageHeader",
    fields: &[
        field(1, "num_values", FieldType::I32),
        enum_field(2, "encoding", FieldType::I32, &ENCODING),
        enum_field(3, "definition_level_encoding", FieldType::I32, &ENCODING),
        enum_field(4, "repetition_level_encoding", FieldType::I32, &ENCODING),
        field(5, "statistics", FieldType::Struct(&STATISTICS)),
    ],
};

pub static INDEX_PAGE_HEADER: StructDescriptor = StructDescriptor {
    name: "IndexPageHeader",
    fields: &[],
};

pub static DICTIONARY_PAGE_HEADER: StructDescriptor = StructDescriptor {
    name: "DictionaryPageHeader",
    fields: &[
        field(1, "num_values", FieldType::I32),
        enum_field(2, "encoding", FieldType::I32, &ENCODING),
        field(3, "is_sorted", FieldType::Bool),
    ],
};

pub static DATA_PAGE_HEADER_V2: StructDescriptor = StructDescriptor {
    name: "DataPageHeaderV2",
    fields: &[
        field(1, "num_values", FieldType::I32),
        field(2, "num_nulls", FieldType::I32),
        field(3, "num_rows", FieldType::I32),
        enum_field(4, "encoding", FieldType::I32, &ENCODING),
        field(5, "definition_levels_byte_length", FieldType::I32),
        field(6, "repetition_levels_byte_length", FieldType::I32),
        field(7, "is_compressed", FieldType::Bool),
        field(8, "statistics", FieldType::Struct(&STATISTICS)),
    ],
};

pub static PAGE_HEADER: StructDescriptor = StructDescriptor {
    name: "PageHeader",
    fields: &[
        enum_field(1, "type", FieldType::I32, &PAGE_TYPE),
        field(2, "uncompressed_page_size", FieldType::I32),
        field(3, "compressed_page_size", FieldType::I32),
        field(4, "crc", FieldType::I32),
        field(5, "data_page_header", FieldType::Struct(&DATA_PAGE_HEADER)),
        field(6, "index_page_header", FieldType::Struct(&INDEX_PAGE_HEADER)),
        field(
            7,
            "dictionary_page_header",
            FieldType::Struct(&DICTIONARY_PAGE_HEADER),
        ),
        field(
            8,
            "data_page_header_v2",
            FieldType::Struct(&DATA_PAGE_HEADER_V2),
        ),
    ],
};

// ── Page index structures ───────────────────────────────────────────────

pub static COLUMN_INDEX: StructDescriptor = StructDescriptor {
    name: "ColumnIndex",
    fields: &[
        field(1, "null_pages", FieldType::List(&T_BOOL)),
        field(2, "min_values", FieldType::List(&T_BINARY)),
        field(3, "max_values", FieldType::List(&T_BINARY)),
        enum_field(4, "boundary_order", FieldType::I32, &BOUNDARY_ORDER),
        field(5, "null_counts", FieldType::List(&T_I64)),
        field(6, "repetition_level_histograms", FieldType::List(&T_I64)),
        field(7, "definition_level_histograms", FieldType::List(&T_I64)),
    ],
};

pub static PAGE_LOCATION: StructDescriptor = StructDescriptor {
    name: "PageLocation",
    fields: &[
        field(1, "offset", FieldType::I64),
        field(2, "compressed_page_size", FieldType::I32),
        field(3, "first_row_index", FieldType::I64),
    ],
};

pub static OFFSET_INDEX: StructDescriptor = StructDescriptor {
    name: "OffsetIndex",
    fields: &[
        field(1, "page_locations", FieldType::List(&T_PAGE_LOCATION)),
        field(2, "unencoded_byte_array_data_bytes", FieldType::List(&T_I64)),
    ],
};

// ── Bloom filter structures ─────────────────────────────────────────────

pub static SPLIT_BLOCK_ALGORITHM: StructDescriptor = StructDescriptor {
    name: "SplitBlockAlgorithm",
    fields: &[],
};

pub static BLOOM_FILTER_ALGORITHM: StructDescriptor = StructDescriptor {
    name: "BloomFilterAlgorithm",
    fields: &[field(1, "BLOCK", FieldType::Struct(&SPLIT_BLOCK_ALGORITHM))],
};

pub static XX_HASH: StructDescriptor = StructDescriptor {
    name: "XxHash",
    fields: &[],
};

pub static BLOOM_FILTER_HASH: StructDescriptor = StructDescriptor {
    name: "BloomFilterHash",
    fields: &[field(1, "XXHASH", FieldType::Struct(&XX_HASH))],
};

pub static BLOOM_FILTER_UNCOMPRESSED: StructDescriptor = StructDescriptor {
    name: "Uncompressed",
    fields: &[],
};

pub static BLOOM_FILTER_COMPRESSION: StructDescriptor = StructDescriptor {
    name: "BloomFilterCompression",
    fields: &[field(
        1,
        "UNCOMPRESSED",
        FieldType::Struct(&BLOOM_FILTER_UNCOMPRESSED),
    )],
};

pub static BLOOM_FILTER_HEADER: StructDescriptor = StructDescriptor {
    name: "BloomFilterHeader",
    fields: &[
        field(1, "numBytes", FieldType::I32),
        field(2, "algorithm", FieldType::Struct(&BLOOM_FILTER_ALGORITHM)),
        field(3, "hash", FieldType::Struct(&BLOOM_FILTER_HASH)),
        field(4, "compression", FieldType::Struct(&BLOOM_FILTER_COMPRESSION)),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup_by_id() {
        let f = FILE_META_DATA.field(4).unwrap();
        assert_eq!(f.name, "row_groups");
        assert!(FILE_META_DATA.field(99).is_none());
    }

    #[test]
    fn test_enum_name_lookup() {
        assert_eq!(PAGE_TYPE.name_of(0), Some("DATA_PAGE"));
        assert_eq!(PAGE_TYPE.name_of(3), Some("DATA_PAGE_V2"));
        assert_eq!(PAGE_TYPE.name_of(42), None);
        assert_eq!(COMPRESSION_CODEC.name_of(6), Some("ZSTD"));
    }

    #[test]
    fn test_encodings_field_is_enum_decorated() {
        let f = COLUMN_META_DATA.field(2).unwrap();
        assert_eq!(f.name, "encodings");
        assert_eq!(f.enumeration.unwrap().name, "Encoding");
        assert!(matches!(f.kind, FieldType::List(_)));
    }
}
