use crate::models::{EditorMode, RecordEditor};
use crate::ui::escape_html;

/// Inputs of the add/edit modal, one text field per column.
pub struct RecordForm;

impl RecordForm {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, editor: &RecordEditor) -> String {
        let creating = matches!(editor.mode(), EditorMode::Creating);

        editor
            .fields()
            .iter()
            .map(|field| {
                let name = escape_html(&field.column.name);
                let marker = if field.required() { " *" } else { "" };
                let disabled = if field.disabled { " disabled" } else { "" };
                let required = if field.required() && creating { " required" } else { "" };

                format!(
                    "<div class=\"form-group\">\
                     <label for=\"edit_{name}\">{name} ({column_type}){marker}</label>\
                     <input type=\"text\" id=\"edit_{name}\" name=\"{name}\" value=\"{value}\"{disabled}{required}>\
                     </div>",
                    name = name,
                    column_type = escape_html(field.column.column_type.as_str()),
                    marker = marker,
                    value = escape_html(&field.value),
                    disabled = disabled,
                    required = required,
                )
            })
            .collect()
    }

    /// The whole modal; hidden while the editor is closed.
    pub fn render_modal(&self, editor: &RecordEditor) -> String {
        let display = if editor.is_open() { "block" } else { "none" };
        format!(
            "<div id=\"editModal\" class=\"modal\" style=\"display: {display}\">\
             <div class=\"modal-content\">\
             <span class=\"close\" onclick=\"closeModal()\">&times;</span>\
             <h3 id=\"modalTitle\">{title}</h3>\
             <form id=\"editForm\">{form}</form>\
             <div class=\"modal-actions\">\
             <button onclick=\"saveRecord()\" class=\"btn btn-primary\">Save</button>\
             <button onclick=\"closeModal()\" class=\"btn btn-secondary\">Cancel</button>\
             </div></div></div>",
            display = display,
            title = editor.title(),
            form = self.render(editor),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ColumnSchema, ColumnType, Record};
    use serde_json::json;

    fn columns() -> Vec<ColumnSchema> {
        vec![
            ColumnSchema {
                name: "id".to_string(),
                column_type: ColumnType::Integer,
                primary_key: true,
                not_null: false,
                default_value: None,
            },
            ColumnSchema {
                name: "name".to_string(),
                column_type: ColumnType::Text,
                primary_key: false,
                not_null: true,
                default_value: None,
            },
        ]
    }

    #[test]
    fn test_create_form_is_empty_and_marks_required() {
        let mut editor = RecordEditor::new();
        editor.open_create("resources", &columns());
        let html = RecordForm::new().render(&editor);
        assert!(html.contains("name (TEXT) *"));
        assert!(html.contains("name=\"name\" value=\"\" required>"));
        assert!(html.contains("name=\"id\" value=\"\">"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_edit_form_prefills_and_disables_key() {
        let record: Record =
            serde_json::from_value(json!({"id": 5, "name": "Tom \"T\" & Co"})).unwrap();
        let mut editor = RecordEditor::new();
        editor.open_edit("resources", &columns(), record).unwrap();
        let html = RecordForm::new().render(&editor);
        assert!(html.contains("name=\"id\" value=\"5\" disabled>"));
        assert!(html.contains("value=\"Tom &quot;T&quot; &amp; Co\">"));
        assert!(!html.contains("required"));
    }

    #[test]
    fn test_modal_visibility_follows_editor() {
        let form = RecordForm::new();
        let mut editor = RecordEditor::new();
        assert!(form.render_modal(&editor).contains("display: none"));
        editor.open_create("resources", &columns());
        let html = form.render_modal(&editor);
        assert!(html.contains("display: block"));
        assert!(html.contains("Add New Record"));
    }
}
