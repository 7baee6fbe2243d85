use serde_json::Value;

use crate::api::{cell_text, record_id, ColumnSchema, Record};
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Closed,
    Creating,
    Editing { id: i64, record: Record },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub column: ColumnSchema,
    pub value: String,
    /// Value the field was opened with, when editing.
    pub original: Option<Value>,
    pub disabled: bool,
}

impl FormField {
    pub fn required(&self) -> bool {
        self.column.not_null
    }

    fn is_unchanged(&self) -> bool {
        match &self.original {
            Some(original) => cell_text(original) == self.value,
            None => false,
        }
    }
}

/// What the editor asks the server to do when the form is submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create { table: String, data: Record },
    Update { table: String, id: i64, data: Record },
}

/// Modal form for adding or editing one row.
#[derive(Debug, Clone)]
pub struct RecordEditor {
    table: String,
    mode: EditorMode,
    fields: Vec<FormField>,
}

impl Default for RecordEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordEditor {
    pub fn new() -> Self {
        Self {
            table: String::new(),
            mode: EditorMode::Closed,
            fields: Vec::new(),
        }
    }

    pub fn open_create(&mut self, table: &str, columns: &[ColumnSchema]) {
        self.table = table.to_string();
        self.mode = EditorMode::Creating;
        self.fields = columns
            .iter()
            .map(|column| FormField {
                column: column.clone(),
                value: String::new(),
                original: None,
                disabled: false,
            })
            .collect();
    }

    /// Opens the form pre-filled from `record`. Primary-key fields are disabled.
    pub fn open_edit(
        &mut self,
        table: &str,
        columns: &[ColumnSchema],
        record: Record,
    ) -> Result<(), ClientError> {
        let id = record_id(&record)
            .ok_or_else(|| ClientError::Validation("Record has no id".to_string()))?;

        self.table = table.to_string();
        self.fields = columns
            .iter()
            .map(|column| {
                let original = record.get(&column.name).cloned().unwrap_or(Value::Null);
                FormField {
                    column: column.clone(),
                    value: cell_text(&original),
                    original: Some(original),
                    disabled: column.primary_key,
                }
            })
            .collect();
        self.mode = EditorMode::Editing { id, record };
        Ok(())
    }

    pub fn close(&mut self) {
        self.mode = EditorMode::Closed;
        self.fields.clear();
        self.table.clear();
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.mode, EditorMode::Closed)
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Editing { .. } => "Edit Record",
            _ => "Add New Record",
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.column.name == name)
    }

    /// Types `value` into the named field. Unknown and disabled fields are
    /// left alone and reported as a validation error.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), ClientError> {
        let field = self
            .fields
            .iter_mut()
            .find(|field| field.column.name == name)
            .ok_or_else(|| ClientError::Validation(format!("Unknown field: {}", name)))?;

        if field.disabled {
            return Err(ClientError::Validation(format!("Field {} cannot be edited", name)));
        }

        field.value = value.to_string();
        Ok(())
    }

    /// Builds the request payload for the open form.
    ///
    /// Creating sends only non-empty fields so the server fills in defaults.
    /// Editing sends every column: untouched fields keep their original value,
    /// and a cleared field becomes null.
    pub fn submission(&self) -> Option<Submission> {
        match &self.mode {
            EditorMode::Closed => None,
            EditorMode::Creating => {
                let data = self
                    .fields
                    .iter()
                    .filter(|field| !field.value.is_empty())
                    .map(|field| (field.column.name.clone(), Value::String(field.value.clone())))
                    .collect();
                Some(Submission::Create {
                    table: self.table.clone(),
                    data,
                })
            }
            EditorMode::Editing { id, .. } => {
                let data = self
                    .fields
                    .iter()
                    .map(|field| {
                        let value = match &field.original {
                            Some(original) if field.disabled || field.is_unchanged() => {
                                original.clone()
                            }
                            _ if field.value.is_empty() => Value::Null,
                            _ => Value::String(field.value.clone()),
                        };
                        (field.column.name.clone(), value)
                    })
                    .collect();
                Some(Submission::Update {
                    table: self.table.clone(),
                    id: *id,
                    data,
                })
            }
        }
    }
}

/// Rewrites the constraint errors SQLite reports into something a person can
/// act on. Other messages pass through unchanged.
pub fn friendly_error(message: &str) -> String {
    let column_of = |marker: &str| -> Option<String> {
        let start = message.find(marker)? + marker.len();
        let target = message[start..]
            .trim_start()
            .split(|c: char| c == ',' || c == ')' || c.is_whitespace())
            .next()?;
        let column = target.rsplit('.').next().unwrap_or(target);
        (!column.is_empty()).then(|| column.to_string())
    };

    if let Some(column) = column_of("UNIQUE constraint failed:") {
        return format!("A record with this {} already exists", column);
    }
    if let Some(column) = column_of("NOT NULL constraint failed:") {
        return format!("Field {} is required", column);
    }
    message.to_string()
}
