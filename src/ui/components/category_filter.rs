use crate::models::ALL_CATEGORIES;
use crate::ui::escape_html;

/// Category buttons above the recipe grid, "All" first.
pub struct CategoryFilter;

impl CategoryFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, categories: &[String], active: &str) -> String {
        let mut html = Self::button(ALL_CATEGORIES, "All", active);
        for category in categories {
            html.push_str(&Self::button(category, category, active));
        }
        html
    }

    fn button(value: &str, label: &str, active: &str) -> String {
        let class = if value == active { "category-btn active" } else { "category-btn" };
        format!(
            "<button class=\"{}\" data-category=\"{}\">{}</button>",
            class,
            escape_html(value),
            escape_html(label)
        )
    }
}
