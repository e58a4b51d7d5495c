//! Self-contained HTML report of an inspected file.
//!
//! The report is assembled with plain string building: a summary table,
//! the reconstructed schema tree, per-column aggregates with decoded
//! statistics, and a byte map of the top-level segments.

use crate::aggregate::{
    aggregate_column_chunks, build_logical_type_mapping, build_schema_tree, get_codecs,
    get_encodings, ColumnAggregate, SchemaElement,
};
use crate::report::Summary;
use crate::segment::Segment;
use crate::stats::format_stats_value;

/// Human-readable byte size: powers of 1024 up to TB.
pub fn format_bytes(size: u64) -> String {
    const LABELS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];
    let mut value = size as f64;
    let mut power = 0;
    while value >= 1024.0 && power < LABELS.len() - 1 {
        value /= 1024.0;
        power += 1;
    }
    if power == 0 {
        format!("{} {}", size, LABELS[0])
    } else {
        format!("{:.2} {}", value, LABELS[power])
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn segment_class(name: &str) -> &'static str {
    match name {
        "magic_number" => "segment--magic",
        "footer_length" => "segment--value",
        "footer" => "segment--footer",
        "page_header" => "segment--page-header",
        "page_data" => "segment--page-data",
        "column_index" => "segment--column-index",
        "offset_index" => "segment--offset-index",
        "bloom_filter" => "segment--bloom-filter",
        _ => "segment--unknown",
    }
}

fn render_schema_element(element: &SchemaElement, out: &mut String) {
    out.push_str("<li><code>");
    out.push_str(&escape(&element.name));
    out.push_str("</code>");
    let mut notes = Vec::new();
    if let Some(physical) = &element.physical_type {
        notes.push(escape(physical));
    }
    if let Some(logical) = &element.logical_type {
        notes.push(escape(&logical.to_string()));
    }
    if let Some(repetition) = &element.repetition_type {
        notes.push(escape(repetition));
    }
    if !notes.is_empty() {
        out.push_str(&format!(" <span class=\"notes\">{}</span>", notes.join(" · ")));
    }
    if !element.children.is_empty() {
        out.push_str("<ul>");
        for child in &element.children {
            render_schema_element(child, out);
        }
        out.push_str("</ul>");
    }
    out.push_str("</li>");
}

fn render_column_row(
    column: &ColumnAggregate,
    logical_types: &std::collections::HashMap<Vec<String>, crate::aggregate::LogicalType>,
    out: &mut String,
) {
    let path = column.path_in_schema.join(".");
    let logical = logical_types.get(&column.path_in_schema);
    let physical = column.physical_type.as_deref().unwrap_or("");
    let stats = column.statistics.as_ref();
    let min = stats
        .and_then(|s| s.min_value.as_deref())
        .map(|raw| format_stats_value(raw, physical, logical))
        .unwrap_or_default();
    let max = stats
        .and_then(|s| s.max_value.as_deref())
        .map(|raw| format_stats_value(raw, physical, logical))
        .unwrap_or_default();
    let null_count = stats
        .and_then(|s| s.null_count)
        .map(|n| n.to_string())
        .unwrap_or_default();

    out.push_str("<tr>");
    out.push_str(&format!("<td><code>{}</code></td>", escape(&path)));
    out.push_str(&format!("<td>{}</td>", escape(physical)));
    out.push_str(&format!(
        "<td>{}</td>",
        logical.map(|l| escape(&l.to_string())).unwrap_or_default()
    ));
    out.push_str(&format!("<td>{}</td>", column.num_values));
    out.push_str(&format!(
        "<td>{}</td>",
        format_bytes(column.total_uncompressed_size.max(0) as u64)
    ));
    out.push_str(&format!(
        "<td>{}</td>",
        format_bytes(column.total_compressed_size.max(0) as u64)
    ));
    out.push_str(&format!("<td>{}</td>", escape(&column.encodings.join(", "))));
    out.push_str(&format!("<td>{}</td>", escape(&column.codecs.join(", "))));
    out.push_str(&format!("<td>{}</td>", escape(&min)));
    out.push_str(&format!("<td>{}</td>", escape(&max)));
    out.push_str(&format!("<td>{}</td>", null_count));
    out.push_str("</tr>");
}

/// Render the full report for one inspected file.
pub fn generate_html_report(
    file_path: &str,
    summary: &Summary,
    footer: &Segment,
    segments: &[Segment],
) -> String {
    let schema_tree = build_schema_tree(footer);
    let logical_types = build_logical_type_mapping(&schema_tree);
    let columns = aggregate_column_chunks(footer, &logical_types);
    let codecs = get_codecs(footer);
    let encodings = get_encodings(footer);
    let file_name = std::path::Path::new(file_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    let mut out = String::new();
    out.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{}</title>", escape(&file_name)));
    out.push_str(
        "<style>\
         body{font-family:sans-serif;margin:2em;}\
         table{border-collapse:collapse;margin-bottom:2em;}\
         td,th{border:1px solid #ccc;padding:4px 8px;text-align:left;}\
         .notes{color:#666;font-size:0.9em;}\
         .chips span{background:#eee;border-radius:4px;padding:2px 6px;margin-right:4px;}\
         .segment--magic{background:#ffe9a8;}\
         .segment--value{background:#ffd1a8;}\
         .segment--footer{background:#c9e4ff;}\
         .segment--page-header{background:#d5f5d5;}\
         .segment--page-data{background:#eefaee;}\
         .segment--column-index{background:#f1d9ff;}\
         .segment--offset-index{background:#e4ccff;}\
         .segment--bloom-filter{background:#ffd9ec;}\
         .segment--unknown{background:#eeeeee;}\
         </style></head><body>",
    );
    out.push_str(&format!("<h1>{}</h1>", escape(&file_name)));
    out.push_str(&format!("<p><code>{}</code></p>", escape(file_path)));

    out.push_str("<h2>Summary</h2><table>");
    let rows: [(&str, String); 10] = [
        ("Rows", summary.num_rows.to_string()),
        ("Row groups", summary.num_row_groups.to_string()),
        ("Columns", summary.num_columns.to_string()),
        ("Pages", summary.num_pages.to_string()),
        (
            "Data pages (v1 / v2)",
            format!(
                "{} ({} / {})",
                summary.num_data_pages, summary.num_v1_data_pages, summary.num_v2_data_pages
            ),
        ),
        ("Dictionary pages", summary.num_dict_pages.to_string()),
        (
            "Page data (uncompressed)",
            format_bytes(summary.uncompressed_page_data_size.max(0) as u64),
        ),
        (
            "Page data (compressed)",
            format_bytes(summary.compressed_page_data_size.max(0) as u64),
        ),
        ("Footer", format_bytes(summary.footer_size)),
        ("File", format_bytes(summary.file_size)),
    ];
    for (label, value) in rows {
        out.push_str(&format!("<tr><th>{}</th><td>{}</td></tr>", label, value));
    }
    out.push_str("</table>");

    out.push_str("<h2>Schema</h2><ul class=\"schema\">");
    for element in &schema_tree {
        render_schema_element(element, &mut out);
    }
    out.push_str("</ul>");

    out.push_str("<h2>Codecs &amp; encodings</h2><p class=\"chips\">");
    for codec in &codecs {
        out.push_str(&format!("<span>{}</span>", escape(codec)));
    }
    for encoding in &encodings {
        out.push_str(&format!("<span>{}</span>", escape(encoding)));
    }
    out.push_str("</p>");

    out.push_str(
        "<h2>Columns</h2><table><tr>\
         <th>Column</th><th>Type</th><th>Logical type</th><th>Values</th>\
         <th>Uncompressed</th><th>Compressed</th><th>Encodings</th>\
         <th>Codecs</th><th>Min</th><th>Max</th><th>Nulls</th></tr>",
    );
    for column in &columns {
        render_column_row(column, &logical_types, &mut out);
    }
    out.push_str("</table>");

    out.push_str(
        "<h2>Byte map</h2><table><tr><th>Offset</th><th>Length</th><th>Segment</th></tr>",
    );
    for segment in segments {
        out.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td></tr>",
            segment_class(&segment.name),
            segment.offset,
            format_bytes(segment.length),
            escape(&segment.name),
        ));
    }
    out.push_str("</table></body></html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{SegmentMetadata, SegmentValue};

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 bytes");
        assert_eq!(format_bytes(512), "512 bytes");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_report_contains_sections() {
        let mut footer = Segment::with_value(0, 0, "footer", SegmentValue::Segments(vec![]));
        footer.metadata = Some(SegmentMetadata {
            kind: Some("struct"),
            ..Default::default()
        });
        let segments = vec![
            Segment::with_value(0, 4, "magic_number", SegmentValue::Text("PAR1".to_string())),
            footer.clone(),
        ];
        let summary = Summary {
            num_rows: 3,
            file_size: 4,
            ..Default::default()
        };

        let html = generate_html_report("/data/example.parquet", &summary, &footer, &segments);
        assert!(html.contains("<h1>example.parquet</h1>"));
        assert!(html.contains("<h2>Summary</h2>"));
        assert!(html.contains("<h2>Schema</h2>"));
        assert!(html.contains("<h2>Byte map</h2>"));
        assert!(html.contains("segment--magic"));
    }
}
