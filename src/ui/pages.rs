use crate::ui::escape_html;
use crate::ui::page::{
    Page, CART, CATEGORY_FILTER, COLUMNS_CONTAINER, QUERY_RESULTS, RECIPES_GRID, RESOURCE_TOTALS,
    SCHEMA_CONTAINER, TABLE_DATA_CONTAINER, TABLE_SELECT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Schema,
    Query,
    Tables,
    Create,
}

impl AdminTab {
    pub fn all() -> [AdminTab; 4] {
        [AdminTab::Schema, AdminTab::Query, AdminTab::Tables, AdminTab::Create]
    }

    pub fn id(&self) -> &'static str {
        match self {
            AdminTab::Schema => "schema",
            AdminTab::Query => "query",
            AdminTab::Tables => "tables",
            AdminTab::Create => "create",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Schema => "Database Schema",
            AdminTab::Query => "SQL Query",
            AdminTab::Tables => "Manage Tables",
            AdminTab::Create => "Create Table",
        }
    }
}

pub struct AdminPageView<'a> {
    pub page: &'a Page,
    pub active_tab: AdminTab,
    pub add_enabled: bool,
    pub new_table_name: &'a str,
    pub query_section: String,
    pub modal: String,
    pub notifications: String,
}

pub struct CraftingPageView<'a> {
    pub page: &'a Page,
    pub search: &'a str,
    pub results_visible: bool,
    pub notifications: String,
}

fn document(title: &str, stylesheets: &[&str], body: &str, script: &str) -> String {
    let links: String = stylesheets
        .iter()
        .map(|href| format!("<link rel=\"stylesheet\" href=\"{}\">", href))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n{}\n</head>\n<body>\n{}\n<script src=\"{}\"></script>\n</body>\n</html>\n",
        escape_html(title),
        links,
        body,
        script
    )
}

fn nav(admin_active: bool) -> String {
    let class = |active: bool| if active { "nav-link active" } else { "nav-link" };
    format!(
        "<nav><a href=\"/\" class=\"{}\">Crafting Helper</a><a href=\"/admin\" class=\"{}\">Database Admin</a></nav>",
        class(!admin_active),
        class(admin_active)
    )
}

pub fn admin_page(view: &AdminPageView<'_>) -> String {
    let tab_buttons: String = AdminTab::all()
        .iter()
        .map(|tab| {
            let class = if *tab == view.active_tab { "tab-btn active" } else { "tab-btn" };
            format!(
                "<button class=\"{}\" onclick=\"showTab('{}')\">{}</button>",
                class,
                tab.id(),
                tab.label()
            )
        })
        .collect();

    let tab_class = |tab: AdminTab| {
        if tab == view.active_tab {
            "tab-content active"
        } else {
            "tab-content"
        }
    };
    let add_disabled = if view.add_enabled { "" } else { " disabled" };

    let body = format!(
        "<div class=\"container\">\
         <header><h1>Database Administration</h1>{nav}</header>\
         <div class=\"admin-tabs\">{tabs}</div>\
         <div id=\"schema-tab\" class=\"{schema_class}\"><h2>Database Schema</h2>\
         <button onclick=\"loadSchema()\" class=\"btn btn-primary\">Refresh Schema</button>\
         <div id=\"{schema_id}\">{schema}</div></div>\
         <div id=\"query-tab\" class=\"{query_class}\"><h2>Execute SQL Query</h2>{query_section}\
         <div id=\"{results_id}\">{results}</div></div>\
         <div id=\"tables-tab\" class=\"{tables_class}\"><h2>Manage Table Data</h2>\
         <div class=\"table-selector\"><select id=\"{select_id}\" onchange=\"loadTableData()\">{select}</select>\
         <button onclick=\"addNewRecord()\" class=\"btn btn-success\" id=\"addRecordBtn\"{add_disabled}>Add New Record</button></div>\
         <div id=\"{data_id}\">{data}</div></div>\
         <div id=\"create-tab\" class=\"{create_class}\"><h2>Create New Table</h2>\
         <div class=\"create-table-form\"><div class=\"form-group\"><label for=\"newTableName\">Table Name:</label>\
         <input type=\"text\" id=\"newTableName\" placeholder=\"Enter table name\" value=\"{table_name}\"></div>\
         <div class=\"columns-section\"><h3>Columns:</h3><div id=\"{columns_id}\">{columns}</div>\
         <button type=\"button\" onclick=\"addColumn()\" class=\"btn btn-secondary\">Add Column</button></div>\
         <button onclick=\"createTable()\" class=\"btn btn-primary\">Create Table</button></div></div>\
         {modal}</div>{notifications}",
        nav = nav(true),
        tabs = tab_buttons,
        schema_class = tab_class(AdminTab::Schema),
        schema_id = SCHEMA_CONTAINER,
        schema = view.page.html(SCHEMA_CONTAINER),
        query_class = tab_class(AdminTab::Query),
        query_section = view.query_section,
        results_id = QUERY_RESULTS,
        results = view.page.html(QUERY_RESULTS),
        tables_class = tab_class(AdminTab::Tables),
        select_id = TABLE_SELECT,
        select = view.page.html(TABLE_SELECT),
        add_disabled = add_disabled,
        data_id = TABLE_DATA_CONTAINER,
        data = view.page.html(TABLE_DATA_CONTAINER),
        create_class = tab_class(AdminTab::Create),
        table_name = escape_html(view.new_table_name),
        columns_id = COLUMNS_CONTAINER,
        columns = view.page.html(COLUMNS_CONTAINER),
        modal = view.modal,
        notifications = view.notifications,
    );

    document(
        "Palworld Helper - Database Admin",
        &["/static/css/main.css", "/static/css/admin.css"],
        &body,
        "/static/js/admin.js",
    )
}

pub fn crafting_page(view: &CraftingPageView<'_>) -> String {
    let results_class = if view.results_visible {
        "results-section"
    } else {
        "results-section hidden"
    };

    let body = format!(
        "<div class=\"container\">\
         <header><h1>Palworld Helper</h1>{nav}</header>\
         <div class=\"search-section\">\
         <input type=\"text\" id=\"searchBox\" class=\"search-box\" placeholder=\"Search for items...\" value=\"{search}\">\
         <div class=\"category-filter\" id=\"{filter_id}\">{filter}</div></div>\
         <div class=\"recipes-grid\" id=\"{grid_id}\">{grid}</div>\
         <div class=\"cart-section\"><h2>Selected Items</h2><div id=\"{cart_id}\">{cart}</div>\
         <button class=\"calculate-btn\" onclick=\"calculateResources()\">Calculate Total Resources</button></div>\
         <div class=\"{results_class}\" id=\"results\"><h2>Total Resources Needed</h2>\
         <div id=\"{totals_id}\">{totals}</div></div>\
         </div>{notifications}",
        nav = nav(false),
        search = escape_html(view.search),
        filter_id = CATEGORY_FILTER,
        filter = view.page.html(CATEGORY_FILTER),
        grid_id = RECIPES_GRID,
        grid = view.page.html(RECIPES_GRID),
        cart_id = CART,
        cart = view.page.html(CART),
        results_class = results_class,
        totals_id = RESOURCE_TOTALS,
        totals = view.page.html(RESOURCE_TOTALS),
        notifications = view.notifications,
    );

    document("Palworld Helper", &["/static/css/main.css"], &body, "/static/js/main.js")
}
