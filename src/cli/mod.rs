use crate::config::OutputFormat;
use crate::error::CatalogResult;
use crate::system_catalog::names::INFORMATION_SCHEMA;
use crate::system_catalog::ViewTable;

/// Render the given relations in `format`. JSON output is a single array of
/// `{"name", "columns", "rows"}` objects.
pub fn render_views(views: &[&ViewTable], format: OutputFormat) -> CatalogResult<String> {
    match format {
        OutputFormat::Json => {
            let docs: Vec<serde_json::Value> = views.iter().map(|v| v.to_json()).collect();
            Ok(serde_json::to_string_pretty(&docs)?)
        }
        OutputFormat::Frame => {
            let mut out = String::new();
            for v in views {
                out.push_str(&format!("{}.{}\n{}\n", INFORMATION_SCHEMA, v.name(), v.to_dataframe()?));
            }
            Ok(out)
        }
        OutputFormat::Table => {
            let mut out = String::new();
            for v in views {
                out.push_str(&format!("{}.{}\n", INFORMATION_SCHEMA, v.name()));
                out.push_str(&render_table(v));
            }
            Ok(out)
        }
    }
}

/// Bordered text table followed by a `rows: N, cols: M` summary line.
pub fn render_table(view: &ViewTable) -> String {
    let cols: Vec<String> = view.columns().iter().map(|c| c.name.to_string()).collect();
    let rows: Vec<Vec<String>> = view.rows().iter().map(|r| r.iter().map(|v| v.to_string()).collect()).collect();

    let max_col_width: usize = 80;
    let mut widths: Vec<usize> = cols.iter().map(|s| display_len(s).min(max_col_width)).collect();
    for r in &rows {
        for (i, cell) in r.iter().enumerate().take(cols.len()) {
            let w = display_len(cell);
            if w > widths[i] { widths[i] = w.min(max_col_width); }
        }
    }

    let sep = build_separator(&widths);
    let mut out = String::new();
    out.push_str(&sep); out.push('\n');
    out.push_str(&build_row(&cols, &widths)); out.push('\n');
    out.push_str(&sep); out.push('\n');
    for r in &rows {
        out.push_str(&build_row(r, &widths)); out.push('\n');
    }
    if !rows.is_empty() {
        out.push_str(&sep); out.push('\n');
    }
    out.push_str(&format!("rows: {}, cols: {}\n", rows.len(), cols.len()));
    out
}

fn display_len(s: &str) -> usize { s.chars().count() }

fn build_separator(widths: &[usize]) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.push_str(&"-".repeat(*w + 2));
        s.push('+');
    }
    s
}

fn build_row(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::from("|");
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).map(|c| c.as_str()).unwrap_or("");
        let text = truncate(cell, *w);
        let pad = " ".repeat(w.saturating_sub(display_len(&text)));
        s.push(' ');
        if is_numeric_like(cell) {
            s.push_str(&pad);
            s.push_str(&text);
        } else {
            s.push_str(&text);
            s.push_str(&pad);
        }
        s.push_str(" |");
    }
    s
}

fn truncate(s: &str, max: usize) -> String {
    if display_len(s) <= max { return s.to_string(); }
    if max <= 1 { return "…".to_string(); }
    s.chars().take(max - 1).collect::<String>() + "…"
}

fn is_numeric_like(s: &str) -> bool {
    let st = s.trim();
    !st.is_empty() && st.chars().all(|c| c.is_ascii_digit() || c == '-') && st.chars().any(|c| c.is_ascii_digit())
}
