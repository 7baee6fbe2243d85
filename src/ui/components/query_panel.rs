use crate::api::QueryResult;
use crate::ui::components::DataGrid;
use crate::ui::escape_html;

/// Example queries offered next to the query input.
pub const EXAMPLE_QUERIES: [(&str, &str); 3] = [
    ("View All Recipes", "SELECT * FROM crafting_recipes"),
    ("View All Resources", "SELECT * FROM resources"),
    (
        "View Recipe Details",
        "SELECT cr.name, r.name, rr.quantity FROM crafting_recipes cr JOIN recipe_resources rr ON cr.id = rr.recipe_id JOIN resources r ON rr.resource_id = r.id",
    ),
];

// Body of a single-quoted JS string literal.
fn js_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub struct QueryPanel {
    grid: DataGrid,
}

impl QueryPanel {
    pub fn new() -> Self {
        Self { grid: DataGrid::new() }
    }

    pub fn render_results(&self, result: &QueryResult) -> String {
        let body = if result.results.is_empty() {
            "<p>No results to display.</p>".to_string()
        } else {
            self.grid.render_query_rows(&result.results)
        };

        format!(
            "<div class=\"query-result\"><div class=\"result-info\">Query returned {} row(s)</div>{}</div>",
            result.count, body
        )
    }

    pub fn render_input(&self, query: &str) -> String {
        let examples: String = EXAMPLE_QUERIES
            .iter()
            .map(|(label, sql)| {
                format!(
                    "<button onclick=\"setQuery('{}')\" class=\"btn btn-secondary\">{}</button>",
                    escape_html(&js_string(sql)),
                    escape_html(label)
                )
            })
            .collect();

        format!(
            "<div class=\"query-section\">\
             <textarea id=\"queryInput\" placeholder=\"Enter your SQL query here...\" rows=\"6\">{}</textarea>\
             <button onclick=\"executeQuery()\" class=\"btn btn-primary\">Execute Query</button>\
             <div class=\"query-examples\"><h3>Example Queries:</h3>{}</div>\
             </div>",
            escape_html(query),
            examples
        )
    }
}
