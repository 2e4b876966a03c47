//! Client-side export of already loaded data: spreadsheet (CSV) downloads and
//! printable reports handed to the browser's print-to-PDF dialog.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const CSV_SEPARATOR: &str = ";";

/// Types that can be exported as spreadsheet rows
pub trait SpreadsheetExportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// Cell values in header order
    fn to_csv_row(&self) -> Vec<String>;
}

/// Title block written above the header row
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportTitle {
    pub title: String,
    /// Period / branch line
    pub subtitle: Option<String>,
}

impl ExportTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// Quotes a cell containing the separator, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn push_row(out: &mut String, cells: &[String]) {
    let escaped: Vec<String> = cells.iter().map(|c| escape_csv_cell(c)).collect();
    out.push_str(&escaped.join(CSV_SEPARATOR));
    out.push('\n');
}

/// CSV document: UTF-8 BOM, title block, blank line, header row, data rows
pub fn build_csv<T: SpreadsheetExportable>(title: &ExportTitle, data: &[T]) -> String {
    let mut csv = String::new();
    csv.push('\u{FEFF}');
    push_row(&mut csv, &[title.title.clone()]);
    if let Some(subtitle) = &title.subtitle {
        push_row(&mut csv, &[subtitle.clone()]);
    }
    csv.push('\n');

    let headers: Vec<String> = T::headers().into_iter().map(str::to_string).collect();
    push_row(&mut csv, &headers);
    for item in data {
        push_row(&mut csv, &item.to_csv_row());
    }
    csv
}

/// `{prefix}_{date}.{ext}` with spaces turned into dashes
pub fn export_filename(prefix: &str, date: &str, ext: &str) -> String {
    format!("{}_{}.{}", prefix.trim().replace(' ', "-").to_lowercase(), date, ext)
}

/// Builds the CSV and starts the download
pub fn export_to_spreadsheet<T: SpreadsheetExportable>(
    data: &[T],
    title: &ExportTitle,
    filename: &str,
) -> Result<(), String> {
    if data.is_empty() {
        return Err("Tidak ada data untuk diekspor".to_string());
    }
    let blob = create_blob(&build_csv(title, data), "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

/// Table section of a printable report
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrintTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Summary cards plus tables, rendered as standalone HTML for printing
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrintableReport {
    pub title: String,
    pub subtitle: Option<String>,
    /// (label, formatted value)
    pub cards: Vec<(String, String)>,
    pub tables: Vec<PrintTable>,
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const PRINT_STYLE: &str = "body{font-family:Arial,sans-serif;color:#222;margin:24px}\
h1{font-size:20px;margin:0}.subtitle{color:#666;margin:4px 0 16px}\
.cards{display:flex;gap:12px;flex-wrap:wrap;margin-bottom:16px}\
.card{border:1px solid #ddd;border-radius:6px;padding:8px 12px;min-width:160px}\
.card .label{font-size:11px;color:#666}.card .value{font-size:16px;font-weight:bold}\
h2{font-size:15px;margin:16px 0 6px}table{border-collapse:collapse;width:100%;font-size:12px}\
th,td{border:1px solid #ccc;padding:4px 6px;text-align:left}th{background:#f3f3f3}";

impl PrintableReport {
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html><html lang=\"id\"><head><meta charset=\"utf-8\">");
        html.push_str(&format!("<title>{}</title>", escape_html(&self.title)));
        html.push_str(&format!("<style>{}</style></head><body>", PRINT_STYLE));
        html.push_str(&format!("<h1>{}</h1>", escape_html(&self.title)));
        if let Some(subtitle) = &self.subtitle {
            html.push_str(&format!("<p class=\"subtitle\">{}</p>", escape_html(subtitle)));
        }

        if !self.cards.is_empty() {
            html.push_str("<div class=\"cards\">");
            for (label, value) in &self.cards {
                html.push_str(&format!(
                    "<div class=\"card\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
                    escape_html(label),
                    escape_html(value)
                ));
            }
            html.push_str("</div>");
        }

        for table in &self.tables {
            html.push_str(&format!("<h2>{}</h2><table><thead><tr>", escape_html(&table.title)));
            for header in &table.headers {
                html.push_str(&format!("<th>{}</th>", escape_html(header)));
            }
            html.push_str("</tr></thead><tbody>");
            if table.rows.is_empty() {
                html.push_str(&format!(
                    "<tr><td colspan=\"{}\">Tidak ada data</td></tr>",
                    table.headers.len().max(1)
                ));
            }
            for row in &table.rows {
                html.push_str("<tr>");
                for cell in row {
                    html.push_str(&format!("<td>{}</td>", escape_html(cell)));
                }
                html.push_str("</tr>");
            }
            html.push_str("</tbody></table>");
        }

        html.push_str("<script>window.onload=function(){window.print();};</script></body></html>");
        html
    }

    /// Opens the report in a new tab that immediately prints itself
    pub fn open_print_view(&self) -> Result<(), String> {
        let window = web_sys::window().ok_or("No window object")?;
        let blob = create_blob(&self.to_html(), "text/html;charset=utf-8")?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))?;
        match window.open_with_url_and_target(&url, "_blank") {
            Ok(Some(_)) => {
                log::info!("opened print view for '{}'", self.title);
                Ok(())
            }
            Ok(None) => Err("Jendela cetak diblokir oleh browser".to_string()),
            Err(e) => Err(format!("Failed to open print window: {:?}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl SpreadsheetExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Nama", "Jumlah"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn csv_has_title_block_then_table() {
        let title = ExportTitle::new("Laporan Pengeluaran").with_subtitle("Periode: Oktober 2026");
        let csv = build_csv(&title, &[Row("Gas; LPG", 50000.0), Row("Listrik \"PLN\"", 1.5)]);
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(
            lines,
            vec![
                "Laporan Pengeluaran",
                "Periode: Oktober 2026",
                "",
                "Nama;Jumlah",
                "\"Gas; LPG\";50000",
                "\"Listrik \"\"PLN\"\"\";1.5",
            ]
        );
    }

    #[test]
    fn filename_is_slugged() {
        assert_eq!(
            export_filename("Laporan Penjualan", "2026-10-18", "csv"),
            "laporan-penjualan_2026-10-18.csv"
        );
    }

    #[test]
    fn printable_report_escapes_and_prints() {
        let report = PrintableReport {
            title: "Laporan <Penjualan>".into(),
            subtitle: Some("Semua Cabang".into()),
            cards: vec![("Total".into(), "Rp 50.000".into())],
            tables: vec![PrintTable {
                title: "Per Cabang".into(),
                headers: vec!["Cabang".into()],
                rows: vec![],
            }],
        };
        let html = report.to_html();
        assert!(html.contains("Laporan &lt;Penjualan&gt;"));
        assert!(html.contains("Rp 50.000"));
        assert!(html.contains("Tidak ada data"));
        assert!(html.contains("window.print()"));
    }
}
