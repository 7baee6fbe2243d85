use std::collections::BTreeMap;

pub const SCHEMA_CONTAINER: &str = "schemaContainer";
pub const TABLE_SELECT: &str = "tableSelect";
pub const TABLE_DATA_CONTAINER: &str = "tableDataContainer";
pub const QUERY_RESULTS: &str = "queryResults";
pub const COLUMNS_CONTAINER: &str = "columnsContainer";
pub const EDIT_FORM: &str = "editForm";
pub const CATEGORY_FILTER: &str = "categoryFilter";
pub const RECIPES_GRID: &str = "recipesGrid";
pub const CART: &str = "cart";
pub const RESOURCE_TOTALS: &str = "resourceTotals";

/// Rendered HTML of each dynamic region, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    regions: BTreeMap<&'static str, String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: &'static str, html: String) {
        self.regions.insert(id, html);
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(String::as_str)
    }

    /// Region contents, empty when nothing was rendered there yet.
    pub fn html(&self, id: &str) -> &str {
        self.get(id).unwrap_or("")
    }

    pub fn clear(&mut self, id: &'static str) {
        self.regions.insert(id, String::new());
    }
}
