use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod chart;
pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render a list of records; the table layout uses `columns` in the given order.
pub fn render_columns<T: Serialize>(
    rows: &[T],
    columns: &[&str],
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&rows, format);
    }
    if rows.is_empty() {
        return Ok(String::from("(no rows)"));
    }

    let cells = rows
        .iter()
        .map(|row| -> anyhow::Result<Vec<String>> {
            let value = serde_json::to_value(row)?;
            Ok(columns
                .iter()
                .map(|column| value.get(*column).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>())
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(table::render_table(columns, &cells, table_options()))
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a list of records with an explicit table column order.
pub fn output_columns<T: Serialize>(
    rows: &[T],
    columns: &[&str],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render_columns(rows, columns, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| {
                    item.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{render, render_columns};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        name: &'static str,
        hours: f64,
        note: Option<&'static str>,
    }

    fn sample() -> Vec<Example> {
        vec![
            Example {
                name: "Acme",
                hours: 3.5,
                note: None,
            },
            Example {
                name: "Globex",
                hours: 10.0,
                note: Some("late"),
            },
        ]
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&sample(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[0]["name"], "Acme");
        assert_eq!(parsed[1]["hours"], 10.0);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&sample(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert!(parsed[0]["note"].is_null());
    }

    #[test]
    fn table_render_for_object_lists_keys() {
        let out = render(&sample()[0], OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("name"));
        assert!(out.contains("Acme"));
    }

    #[test]
    fn columns_follow_requested_order() {
        let out = render_columns(&sample(), &["name", "hours", "note"], OutputFormat::Table)
            .expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "name    hours  note");
        assert_eq!(lines[2], "Acme      3.5  -");
        assert_eq!(lines[3], "Globex   10.0  late");
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let rows: Vec<Example> = Vec::new();
        let out = render_columns(&rows, &["name"], OutputFormat::Table).expect("render");
        assert_eq!(out, "(no rows)");
        let out = render_columns(&rows, &["name"], OutputFormat::Json).expect("render");
        assert_eq!(out, "[]");
    }
}
