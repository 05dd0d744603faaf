//! Workbook snapshot produced by `POST /report/univer`.
//!
//! The client does not interpret cells; it only needs a few top-level fields
//! for titles and must hand the whole document to the spreadsheet widget
//! untouched. Unknown keys are kept in `extra` and written back on serialize.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookSnapshot {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub app_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default)]
    pub styles: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sheet_order: Vec<String>,
    #[serde(default)]
    pub sheets: BTreeMap<String, SheetSnapshot>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSnapshot {
    pub id: String,
    pub name: String,
    /// row -> column -> cell; keys are decimal indices as sent on the wire
    #[serde(default)]
    pub cell_data: BTreeMap<String, BTreeMap<String, CellData>>,
    #[serde(default)]
    pub row_count: u32,
    #[serde(default)]
    pub column_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_data: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<Value>,
    /// Style id or inline style object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f: Option<String>,
    /// Rich text (`p`), `custom` and any other cell keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkbookSnapshot {
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.values().all(|s| s.cell_count() == 0)
    }

    /// Sheets in display order: `sheetOrder` first, then the rest by key.
    pub fn ordered_sheets(&self) -> Vec<&SheetSnapshot> {
        let mut ordered: Vec<&SheetSnapshot> = self
            .sheet_order
            .iter()
            .filter_map(|id| self.sheets.get(id))
            .collect();
        for (id, sheet) in &self.sheets {
            if !self.sheet_order.contains(id) {
                ordered.push(sheet);
            }
        }
        ordered
    }
}

impl SheetSnapshot {
    pub fn cell_count(&self) -> usize {
        self.cell_data.values().map(|row| row.len()).sum()
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&CellData> {
        self.cell_data
            .get(&row.to_string())?
            .get(&col.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SNAPSHOT: &str = r##"{
        "id": "workbook-01",
        "name": "P&L Report 2025",
        "appVersion": "0.1.0",
        "locale": "th-TH",
        "styles": {"header": {"bl": 1, "bg": {"rgb": "#4472C4"}}},
        "sheets": {
            "sheet-02": {"id": "sheet-02", "name": "Notes", "cellData": {}, "rowCount": 5, "columnCount": 2},
            "sheet-01": {
                "id": "sheet-01",
                "name": "P&L Report",
                "cellData": {"0": {"0": {"v": "Revenue", "s": "header"}, "1": {"v": 1850000}}},
                "rowCount": 40,
                "columnCount": 10,
                "defaultRowHeight": 25,
                "defaultColumnWidth": 120
            }
        },
        "sheetOrder": ["sheet-01", "sheet-02"],
        "resources": []
    }"##;

    #[test]
    fn test_parse_snapshot() {
        let snapshot: WorkbookSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        assert_eq!(snapshot.sheet_count(), 2);
        assert!(!snapshot.is_empty());

        let names: Vec<&str> = snapshot.ordered_sheets().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["P&L Report", "Notes"]);

        let sheet = &snapshot.sheets["sheet-01"];
        assert_eq!(sheet.cell_count(), 2);
        assert_eq!(sheet.cell(0, 1).and_then(|c| c.v.clone()), Some(serde_json::json!(1850000)));
        assert!(sheet.cell(5, 5).is_none());
    }

    #[test]
    fn test_unknown_fields_survive_serialization() {
        let snapshot: WorkbookSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let original: Value = serde_json::from_str(SNAPSHOT).unwrap();
        let written = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(written["resources"], original["resources"]);
        assert_eq!(
            written["sheets"]["sheet-01"]["defaultRowHeight"],
            original["sheets"]["sheet-01"]["defaultRowHeight"]
        );
        assert_eq!(written["sheetOrder"], original["sheetOrder"]);
    }

    #[test]
    fn test_sheets_without_order_fall_back_to_key_order() {
        let mut snapshot: WorkbookSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        snapshot.sheet_order.clear();
        let ids: Vec<&str> = snapshot.ordered_sheets().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sheet-01", "sheet-02"]);
    }

    #[test]
    fn test_cells_are_written_back_unchanged() {
        for raw in [r#"{"v":1,"custom":{"k":1},"p":{"body":{}}}"#, r#"{"s":"st1"}"#] {
            let cell: CellData = serde_json::from_str(raw).unwrap();
            let original: Value = serde_json::from_str(raw).unwrap();
            assert_eq!(serde_json::to_value(&cell).unwrap(), original);
        }
    }
}
