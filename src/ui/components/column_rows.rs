use crate::api::ColumnType;
use crate::models::{ColumnDraft, NewTableForm};
use crate::ui::escape_html;

/// Repeatable column rows of the Create Table form.
pub struct ColumnRows;

impl ColumnRows {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, form: &NewTableForm) -> String {
        form.columns()
            .iter()
            .enumerate()
            .map(|(index, column)| self.render_row(index, column))
            .collect()
    }

    fn render_row(&self, index: usize, column: &ColumnDraft) -> String {
        let options: String = ColumnType::all()
            .iter()
            .map(|ty| {
                let selected = if *ty == column.column_type { " selected" } else { "" };
                format!("<option value=\"{0}\"{1}>{0}</option>", ty.as_str(), selected)
            })
            .collect();
        let checked = |flag: bool| if flag { " checked" } else { "" };

        format!(
            "<div class=\"column-row\" data-index=\"{index}\">\
             <input type=\"text\" placeholder=\"Column name\" class=\"column-name\" value=\"{name}\">\
             <select class=\"column-type\">{options}</select>\
             <label><input type=\"checkbox\" class=\"column-primary\"{primary}> Primary Key</label>\
             <label><input type=\"checkbox\" class=\"column-notnull\"{not_null}> Not Null</label>\
             <input type=\"text\" placeholder=\"Default value\" class=\"column-default\" value=\"{default}\">\
             <button type=\"button\" onclick=\"removeColumn(this)\" class=\"btn btn-danger btn-small\">Remove</button>\
             </div>",
            index = index,
            name = escape_html(&column.name),
            options = options,
            primary = checked(column.primary_key),
            not_null = checked(column.not_null),
            default = escape_html(&column.default_value),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_renders_one_row() {
        let html = ColumnRows::new().render(&NewTableForm::new());
        assert_eq!(html.matches("class=\"column-row\"").count(), 1);
        assert!(html.contains("<option value=\"INTEGER\" selected>INTEGER</option>"));
        assert!(html.contains("<option value=\"BLOB\">BLOB</option>"));
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn test_row_reflects_draft() {
        let mut form = NewTableForm::new();
        let column = form.column_mut(0).unwrap();
        column.name = "label".to_string();
        column.column_type = ColumnType::Text;
        column.not_null = true;
        column.default_value = "'a&b'".to_string();
        form.add_column();

        let html = ColumnRows::new().render(&form);
        assert_eq!(html.matches("class=\"column-row\"").count(), 2);
        assert!(html.contains("value=\"label\""));
        assert!(html.contains("<option value=\"TEXT\" selected>TEXT</option>"));
        assert!(html.contains("class=\"column-notnull\" checked>"));
        assert!(html.contains("value=\"&#039;a&amp;b&#039;\""));
        assert!(html.contains("<div class=\"column-row\" data-index=\"1\">"));
        assert_eq!(html.matches("onclick=\"removeColumn(this)\"").count(), 2);
    }
}
