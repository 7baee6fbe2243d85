use std::str::FromStr;

use crate::api::{ColumnSchema, ColumnType, CreateTableRequest};
use crate::error::ClientError;

/// One repeatable column row of the table creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnDraft {
    pub name: String,
    pub column_type: ColumnType,
    pub primary_key: bool,
    pub not_null: bool,
    pub default_value: String,
}

impl ColumnDraft {
    pub fn new(name: &str, column_type: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            column_type,
            ..Self::default()
        }
    }

    fn to_schema(&self) -> ColumnSchema {
        let default_value = self.default_value.trim();
        ColumnSchema {
            name: self.name.trim().to_string(),
            column_type: self.column_type.clone(),
            primary_key: self.primary_key,
            not_null: self.not_null,
            default_value: (!default_value.is_empty()).then(|| default_value.to_string()),
        }
    }
}

/// Parses `name:TYPE[:pk][:notnull][:default=VALUE]`. The default takes the
/// rest of the string, colons included.
impl FromStr for ColumnDraft {
    type Err = ClientError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut parts = spec.splitn(3, ':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(ClientError::Validation(format!("Column needs a name: {}", spec)));
        }

        let mut column = ColumnDraft::new(name, ColumnType::default());
        if let Some(column_type) = parts.next().filter(|t| !t.trim().is_empty()) {
            column.column_type = ColumnType::parse(column_type);
        }

        let mut flags = parts.next().unwrap_or_default();
        while !flags.is_empty() {
            if let Some(value) = flags.strip_prefix("default=") {
                column.default_value = value.to_string();
                break;
            }

            let (flag, rest) = flags.split_once(':').unwrap_or((flags, ""));
            match flag.trim().to_ascii_lowercase().as_str() {
                "pk" => column.primary_key = true,
                "notnull" => column.not_null = true,
                other => {
                    return Err(ClientError::Validation(format!("Unknown column flag: {}", other)))
                }
            }
            flags = rest;
        }

        Ok(column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTableForm {
    pub table_name: String,
    columns: Vec<ColumnDraft>,
}

impl Default for NewTableForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NewTableForm {
    /// A blank form with one empty column row.
    pub fn new() -> Self {
        Self {
            table_name: String::new(),
            columns: vec![ColumnDraft::default()],
        }
    }

    pub fn columns(&self) -> &[ColumnDraft] {
        &self.columns
    }

    pub fn column_mut(&mut self, index: usize) -> Option<&mut ColumnDraft> {
        self.columns.get_mut(index)
    }

    pub fn add_column(&mut self) -> &mut ColumnDraft {
        self.columns.push(ColumnDraft::default());
        let last = self.columns.len() - 1;
        &mut self.columns[last]
    }

    pub fn push_column(&mut self, column: ColumnDraft) {
        self.columns.push(column);
    }

    pub fn remove_column(&mut self, index: usize) -> Option<ColumnDraft> {
        (index < self.columns.len()).then(|| self.columns.remove(index))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Checks the form and builds the request. Names and defaults are
    /// trimmed; a blank default is sent as null.
    pub fn validate(&self) -> Result<CreateTableRequest, ClientError> {
        let table_name = self.table_name.trim();
        if table_name.is_empty() {
            return Err(ClientError::Validation("Please enter a table name".to_string()));
        }

        if self.columns.is_empty() {
            return Err(ClientError::Validation("Please add at least one column".to_string()));
        }

        if self.columns.iter().any(|column| column.name.trim().is_empty()) {
            return Err(ClientError::Validation("All columns must have a name".to_string()));
        }

        Ok(CreateTableRequest {
            table_name: table_name.to_string(),
            columns: self.columns.iter().map(ColumnDraft::to_schema).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_has_one_blank_row() {
        let form = NewTableForm::new();
        assert_eq!(form.columns().len(), 1);
        assert_eq!(form.columns()[0], ColumnDraft::default());
        assert_eq!(form.columns()[0].column_type, ColumnType::Integer);
    }

    #[test]
    fn test_validate_requires_table_name() {
        let mut form = NewTableForm::new();
        form.table_name = "   ".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.message(), "Please enter a table name");
    }

    #[test]
    fn test_validate_requires_columns() {
        let mut form = NewTableForm::new();
        form.table_name = "foo".to_string();
        form.remove_column(0);
        assert_eq!(form.validate().unwrap_err().message(), "Please add at least one column");
    }

    #[test]
    fn test_validate_requires_column_names() {
        let mut form = NewTableForm::new();
        form.table_name = "foo".to_string();
        form.column_mut(0).unwrap().name = "id".to_string();
        form.add_column();
        assert_eq!(form.validate().unwrap_err().message(), "All columns must have a name");
    }

    #[test]
    fn test_validate_builds_request() {
        let mut form = NewTableForm::new();
        form.table_name = " foo ".to_string();
        {
            let id = form.column_mut(0).unwrap();
            id.name = "id".to_string();
            id.primary_key = true;
        }
        let label = form.add_column();
        label.name = " label ".to_string();
        label.column_type = ColumnType::Text;
        label.not_null = true;
        label.default_value = " 'x' ".to_string();

        let request = form.validate().unwrap();
        assert_eq!(request.table_name, "foo");
        assert_eq!(request.columns.len(), 2);
        assert!(request.columns[0].primary_key);
        assert_eq!(request.columns[0].default_value, None);
        assert_eq!(request.columns[1].name, "label");
        assert_eq!(request.columns[1].column_type, ColumnType::Text);
        assert_eq!(request.columns[1].default_value.as_deref(), Some("'x'"));
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut form = NewTableForm::new();
        assert_eq!(form.remove_column(5), None);
        assert_eq!(form.columns().len(), 1);
    }

    #[test]
    fn test_parse_column_spec() {
        let column: ColumnDraft = "id:integer:pk".parse().unwrap();
        assert_eq!(column.name, "id");
        assert_eq!(column.column_type, ColumnType::Integer);
        assert!(column.primary_key);
        assert!(!column.not_null);

        let column: ColumnDraft = "url:TEXT:notnull:default=http://x:80".parse().unwrap();
        assert_eq!(column.column_type, ColumnType::Text);
        assert!(column.not_null);
        assert_eq!(column.default_value, "http://x:80");

        let column: ColumnDraft = "count".parse().unwrap();
        assert_eq!(column, ColumnDraft::new("count", ColumnType::Integer));
    }

    #[test]
    fn test_parse_column_spec_rejects_bad_input() {
        assert!("".parse::<ColumnDraft>().is_err());
        assert!(":TEXT".parse::<ColumnDraft>().is_err());
        let err = "id:INTEGER:unique".parse::<ColumnDraft>().unwrap_err();
        assert_eq!(err.message(), "Unknown column flag: unique");
    }

    #[test]
    fn test_reset_restores_blank_form() {
        let mut form = NewTableForm::new();
        form.table_name = "foo".to_string();
        form.push_column(ColumnDraft::new("name", ColumnType::Text));
        form.reset();
        assert_eq!(form, NewTableForm::new());
    }
}
