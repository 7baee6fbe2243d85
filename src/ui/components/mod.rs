mod cart_view;
mod category_filter;
mod column_rows;
mod data_grid;
mod notification_toast;
mod query_panel;
mod recipe_grid;
mod record_form;
mod resource_totals;
mod schema_view;
mod table_select;

pub use cart_view::CartView;
pub use category_filter::CategoryFilter;
pub use column_rows::ColumnRows;
pub use data_grid::DataGrid;
pub use notification_toast::NotificationToast;
pub use query_panel::{QueryPanel, EXAMPLE_QUERIES};
pub use recipe_grid::RecipeGrid;
pub use record_form::RecordForm;
pub use resource_totals::ResourceTotals;
pub use schema_view::SchemaView;
pub use table_select::TableSelect;
