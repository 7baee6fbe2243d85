use crate::api::TableSchema;
use crate::ui::escape_html;

/// `<option>` list for the table picker on the Manage Tables tab.
pub struct TableSelect;

impl TableSelect {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, tables: &[TableSchema], selected: Option<&str>) -> String {
        let mut html = String::from("<option value=\"\">Select a table...</option>");
        for table in tables {
            let name = escape_html(&table.name);
            let marker = if selected == Some(table.name.as_str()) { " selected" } else { "" };
            html.push_str(&format!("<option value=\"{}\"{}>{}</option>", name, marker, name));
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str) -> TableSchema {
        TableSchema {
            name: name.to_string(),
            columns: vec![],
        }
    }

    #[test]
    fn test_lists_tables_after_prompt() {
        let tables = [table("resources"), table("inventory")];
        let html = TableSelect::new().render(&tables, Some("inventory"));
        assert!(html.starts_with("<option value=\"\">Select a table...</option>"));
        assert!(html.contains("<option value=\"resources\">resources</option>"));
        assert!(html.contains("<option value=\"inventory\" selected>inventory</option>"));
    }

    #[test]
    fn test_empty_list_keeps_prompt() {
        let html = TableSelect::new().render(&[], None);
        assert_eq!(html, "<option value=\"\">Select a table...</option>");
    }
}
