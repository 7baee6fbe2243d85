use crate::api::{cell_text, record_id, Record};
use crate::ui::{escape_html, placeholder};

/// Generic row table. Headers come from the first row's keys.
pub struct DataGrid;

impl DataGrid {
    pub fn new() -> Self {
        Self
    }

    /// Table of a stored table's rows with an Edit/Delete pair per row.
    pub fn render_table_data(&self, rows: &[Record]) -> String {
        if rows.is_empty() {
            return placeholder("No data found in this table.");
        }
        self.render(rows, true)
    }

    /// Table of ad-hoc query results, without row actions.
    pub fn render_query_rows(&self, rows: &[Record]) -> String {
        if rows.is_empty() {
            return placeholder("No data returned.");
        }
        self.render(rows, false)
    }

    fn render(&self, rows: &[Record], with_actions: bool) -> String {
        let columns: Vec<&String> = rows[0].keys().collect();

        let mut header: String = columns
            .iter()
            .map(|col| format!("<th>{}</th>", escape_html(col)))
            .collect();
        if with_actions {
            header.push_str("<th>Actions</th>");
        }

        let body: String = rows
            .iter()
            .map(|row| {
                let mut cells: String = columns
                    .iter()
                    .map(|col| {
                        let text = row.get(col.as_str()).map(cell_text).unwrap_or_default();
                        format!("<td>{}</td>", escape_html(&text))
                    })
                    .collect();
                if with_actions {
                    cells.push_str(&format!("<td>{}</td>", Self::row_actions(row)));
                }
                format!("<tr>{}</tr>", cells)
            })
            .collect();

        format!(
            "<div class=\"data-table\"><table><thead><tr>{}</tr></thead><tbody>{}</tbody></table></div>",
            header, body
        )
    }

    // Rows without an integer id can't be addressed by the edit/delete routes.
    fn row_actions(row: &Record) -> String {
        match record_id(row) {
            Some(id) => format!(
                "<div class=\"action-buttons\">\
                 <button onclick=\"editRecord({id})\" class=\"btn btn-primary btn-small\">Edit</button>\
                 <button onclick=\"deleteRecord({id})\" class=\"btn btn-danger btn-small\">Delete</button>\
                 </div>"
            ),
            None => String::new(),
        }
    }
}
