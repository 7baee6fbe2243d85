use crate::api::{ColumnSchema, TableSchema};
use crate::ui::{escape_html, placeholder};

pub struct SchemaView;

impl SchemaView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, tables: &[TableSchema]) -> String {
        if tables.is_empty() {
            return placeholder("No tables found in database.");
        }

        tables.iter().map(|table| self.render_table(table)).collect()
    }

    fn render_table(&self, table: &TableSchema) -> String {
        let columns: String = table.columns.iter().map(|col| self.render_column(col)).collect();
        format!(
            "<div class=\"table-schema\">\
             <div class=\"table-name\">{} ({} columns)</div>\
             <div class=\"columns-list\">{}</div>\
             </div>",
            escape_html(&table.name),
            table.columns.len(),
            columns
        )
    }

    fn render_column(&self, column: &ColumnSchema) -> String {
        let mut badges = String::new();
        if column.primary_key {
            badges.push_str("<span class=\"column-attribute\">PK</span>");
        }
        if column.not_null {
            badges.push_str("<span class=\"column-attribute\">NOT NULL</span>");
        }
        if let Some(default) = &column.default_value {
            badges.push_str(&format!(
                "<span class=\"column-attribute\">DEFAULT: {}</span>",
                escape_html(default)
            ));
        }

        format!(
            "<div class=\"column-item\">\
             <span class=\"column-name\">{}</span>\
             <span class=\"column-type\">{}</span>\
             <div class=\"column-attributes\">{}</div>\
             </div>",
            escape_html(&column.name),
            escape_html(column.column_type.as_str()),
            badges
        )
    }
}
