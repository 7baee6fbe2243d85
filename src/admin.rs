use chrono::Utc;
use tracing::{error, info};

use crate::api::{record_id, ApiClient, TableSchema};
use crate::error::ClientError;
use crate::models::{friendly_error, NewTableForm, Notifier, RecordEditor, Submission};
use crate::ui::components::*;
use crate::ui::page::{
    COLUMNS_CONTAINER, EDIT_FORM, QUERY_RESULTS, SCHEMA_CONTAINER, TABLE_DATA_CONTAINER,
    TABLE_SELECT,
};
use crate::ui::{admin_page, AdminPageView, AdminTab, Page};

/// Database admin front end: schema viewer, row editor, query runner and
/// table creation form.
///
/// Every handler catches its own failures and reports them through
/// `notifier`; the panel stays usable after any error.
pub struct AdminPanel {
    api: ApiClient,

    // Rendered regions and feedback
    pub page: Page,
    pub notifier: Notifier,
    pub active_tab: AdminTab,

    // Table management state
    current_table: Option<String>,
    add_enabled: bool,
    editor: RecordEditor,

    // Form state
    table_form: NewTableForm,
    query_input: String,

    // UI Components
    schema_view: SchemaView,
    table_select: TableSelect,
    data_grid: DataGrid,
    query_panel: QueryPanel,
    record_form: RecordForm,
    column_rows: ColumnRows,
    toast: NotificationToast,
}

impl AdminPanel {
    pub fn new(api: ApiClient) -> Self {
        let mut panel = Self {
            api,
            page: Page::new(),
            notifier: Notifier::admin(),
            active_tab: AdminTab::Schema,
            current_table: None,
            add_enabled: false,
            editor: RecordEditor::new(),
            table_form: NewTableForm::new(),
            query_input: String::new(),
            schema_view: SchemaView::new(),
            table_select: TableSelect::new(),
            data_grid: DataGrid::new(),
            query_panel: QueryPanel::new(),
            record_form: RecordForm::new(),
            column_rows: ColumnRows::new(),
            toast: NotificationToast::new(),
        };

        panel.page.set(TABLE_SELECT, panel.table_select.render(&[], None));
        panel.sync_columns();
        panel.sync_editor();
        panel
    }

    /// Initial page load: schema view plus the table picker.
    pub async fn init(&mut self) {
        self.show_tab(AdminTab::Schema);
        self.load_schema().await;
        self.load_table_list().await;
    }

    pub fn show_tab(&mut self, tab: AdminTab) {
        self.active_tab = tab;
    }

    pub fn current_table(&self) -> Option<&str> {
        self.current_table.as_deref()
    }

    pub fn add_enabled(&self) -> bool {
        self.add_enabled
    }

    pub fn editor(&self) -> &RecordEditor {
        &self.editor
    }

    pub fn table_form(&self) -> &NewTableForm {
        &self.table_form
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub async fn load_schema(&mut self) {
        match self.api.schema().await {
            Ok(tables) => {
                info!("Loaded schema with {} tables", tables.len());
                self.page.set(SCHEMA_CONTAINER, self.schema_view.render(&tables));
            }
            Err(e) => {
                error!("Error loading schema: {}", e);
                self.notifier.error("Failed to load database schema");
            }
        }
    }

    pub async fn load_table_list(&mut self) {
        match self.api.schema().await {
            Ok(tables) => {
                let html = self.table_select.render(&tables, self.current_table.as_deref());
                self.page.set(TABLE_SELECT, html);
            }
            Err(e) => {
                error!("Error loading table list: {}", e);
                self.notifier.error("Failed to load table list");
            }
        }
    }

    /// Picks the table shown on the Manage Tables tab. An empty name clears
    /// the selection.
    pub async fn select_table(&mut self, table_name: &str) {
        let table_name = table_name.trim();
        if table_name.is_empty() {
            self.current_table = None;
            self.add_enabled = false;
            self.page.clear(TABLE_DATA_CONTAINER);
            return;
        }

        self.current_table = Some(table_name.to_string());
        self.add_enabled = true;
        self.load_table_data().await;
    }

    /// Re-fetches the rows of the current table.
    pub async fn load_table_data(&mut self) {
        let Some(table) = self.current_table.clone() else {
            return;
        };

        match self.api.table_rows(&table).await {
            Ok(rows) => {
                info!("Retrieved {} rows from table {}", rows.len(), table);
                self.page.set(TABLE_DATA_CONTAINER, self.data_grid.render_table_data(&rows));
            }
            Err(e @ (ClientError::Malformed(_) | ClientError::Parse(_))) => {
                error!("Unreadable response for table {}: {}", table, e);
                self.notifier.error(format!("Table {} returned an unreadable response", table));
            }
            Err(e) => {
                error!("Error loading table data: {}", e);
                self.notifier.error(format!("Failed to load data for table: {}", table));
            }
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query_input = query.to_string();
    }

    /// Loads one of the example queries into the input.
    pub fn use_example_query(&mut self, index: usize) -> bool {
        match EXAMPLE_QUERIES.get(index) {
            Some((_, query)) => {
                self.set_query(query);
                true
            }
            None => false,
        }
    }

    pub async fn execute_query(&mut self) {
        let query = self.query_input.trim().to_string();
        if query.is_empty() {
            self.notifier.error("Please enter a SQL query");
            return;
        }

        match self.api.execute_query(&query).await {
            Ok(result) => {
                info!("Query returned {} row(s)", result.count);
                self.page.set(QUERY_RESULTS, self.query_panel.render_results(&result));
                self.notifier.success("Query executed successfully");
            }
            Err(e) => {
                error!("Error executing query: {}", e);
                self.notifier.error(format!("Query failed: {}", e.message()));
            }
        }
    }

    /// Applies `edit` to the table creation form and re-renders its rows.
    pub fn edit_table_form(&mut self, edit: impl FnOnce(&mut NewTableForm)) {
        edit(&mut self.table_form);
        self.sync_columns();
    }

    pub fn add_column(&mut self) {
        self.edit_table_form(|form| {
            form.add_column();
        });
    }

    pub fn remove_column(&mut self, index: usize) {
        self.edit_table_form(|form| {
            form.remove_column(index);
        });
    }

    pub async fn create_table(&mut self) {
        let request = match self.table_form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.notifier.error(e.message());
                return;
            }
        };

        match self.api.create_table(&request).await {
            Ok(()) => {
                info!(
                    "Created table {} with {} columns",
                    request.table_name,
                    request.columns.len()
                );
                self.notifier
                    .success(format!("Table \"{}\" created successfully", request.table_name));

                self.table_form.reset();
                self.sync_columns();

                // Refresh schema and table list
                self.load_schema().await;
                self.load_table_list().await;
            }
            Err(e) => {
                error!("Error creating table: {}", e);
                self.notifier.error(format!("Failed to create table: {}", e.message()));
            }
        }
    }

    async fn table_schema(&self, table: &str) -> Result<Option<TableSchema>, ClientError> {
        let tables = self.api.schema().await?;
        Ok(tables.into_iter().find(|t| t.name == table))
    }

    /// Opens the modal with one empty input per column of the current table.
    pub async fn add_new_record(&mut self) {
        let Some(table) = self.current_table.clone() else {
            self.notifier.error("No table selected");
            return;
        };

        match self.table_schema(&table).await {
            Ok(Some(schema)) => {
                self.editor.open_create(&table, &schema.columns);
                self.sync_editor();
            }
            Ok(None) => self.notifier.error("Table schema not found"),
            Err(e) => {
                error!("Error preparing new record: {}", e);
                self.notifier.error("Failed to prepare new record form");
            }
        }
    }

    /// Opens the modal pre-filled with the row whose `id` is `record_id`.
    pub async fn edit_record(&mut self, id: i64) {
        let Some(table) = self.current_table.clone() else {
            self.notifier.error("No table selected");
            return;
        };

        let schema = match self.table_schema(&table).await {
            Ok(Some(schema)) => schema,
            Ok(None) => {
                self.notifier.error("Table schema not found");
                return;
            }
            Err(e) => {
                error!("Error loading record for edit: {}", e);
                self.notifier.error("Failed to load record for editing");
                return;
            }
        };

        let rows = match self.api.table_rows(&table).await {
            Ok(rows) => rows,
            Err(e) => {
                error!("Error loading record for edit: {}", e);
                self.notifier.error("Failed to load record for editing");
                return;
            }
        };

        let Some(record) = rows.into_iter().find(|row| record_id(row) == Some(id)) else {
            self.notifier.error("Record not found");
            return;
        };

        if let Err(e) = self.editor.open_edit(&table, &schema.columns, record) {
            self.notifier.error(e.message());
            return;
        }
        self.sync_editor();
    }

    /// Types into a field of the open form. Returns false, with a
    /// notification, when the field doesn't exist or is locked.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        match self.editor.set_field(name, value) {
            Ok(()) => {
                self.sync_editor();
                true
            }
            Err(e) => {
                self.notifier.error(e.message());
                false
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.editor.close();
        self.sync_editor();
    }

    /// Submits the open form. The modal only closes on success.
    pub async fn save_record(&mut self) {
        let Some(submission) = self.editor.submission() else {
            self.notifier.error("No record is being edited");
            return;
        };

        let (result, action) = match &submission {
            Submission::Create { table, data } => {
                (self.api.insert_row(table, data).await, "created")
            }
            Submission::Update { table, id, data } => {
                (self.api.update_row(table, *id, data).await, "updated")
            }
        };

        match result {
            Ok(()) => {
                self.notifier.success(format!("Record {} successfully", action));
                self.close_modal();
                self.load_table_data().await;
            }
            Err(e) => {
                error!("Error saving record: {}", e);
                self.notifier
                    .error(format!("Failed to save record: {}", friendly_error(&e.message())));
            }
        }
    }

    /// Deletes a row of the current table. Callers confirm with the user first.
    pub async fn delete_record(&mut self, id: i64) {
        let Some(table) = self.current_table.clone() else {
            self.notifier.error("No table selected");
            return;
        };

        match self.api.delete_row(&table, id).await {
            Ok(()) => {
                self.notifier.success("Record deleted successfully");
                self.load_table_data().await;
            }
            Err(e) => {
                error!("Error deleting record: {}", e);
                self.notifier.error(format!("Failed to delete record: {}", e.message()));
            }
        }
    }

    fn sync_editor(&mut self) {
        self.page.set(EDIT_FORM, self.record_form.render(&self.editor));
    }

    fn sync_columns(&mut self) {
        self.page.set(COLUMNS_CONTAINER, self.column_rows.render(&self.table_form));
    }

    pub fn render_page(&self) -> String {
        let notifications = self.notifier.active(Utc::now());
        admin_page(&AdminPageView {
            page: &self.page,
            active_tab: self.active_tab,
            add_enabled: self.add_enabled,
            new_table_name: &self.table_form.table_name,
            query_section: self.query_panel.render_input(&self.query_input),
            modal: self.record_form.render_modal(&self.editor),
            notifications: self.toast.render(&notifications),
        })
    }
}
