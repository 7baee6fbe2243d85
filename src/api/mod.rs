mod client;
mod models;

pub use client::ApiClient;
pub use models::{
    cell_text, record_id, CalculateItem, CalculateRequest, ColumnSchema, ColumnType,
    CreateTableRequest, QueryResult, Recipe, RecipeResource, Record, ResourceTotal, TableSchema,
};
