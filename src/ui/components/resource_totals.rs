use crate::api::ResourceTotal;
use crate::ui::{escape_html, placeholder};

pub struct ResourceTotals;

impl ResourceTotals {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, totals: &[ResourceTotal]) -> String {
        if totals.is_empty() {
            return placeholder("No resources needed.");
        }

        totals
            .iter()
            .map(|resource| {
                format!(
                    "<div class=\"resource-total\"><span>{}</span><span>{}</span></div>",
                    escape_html(&resource.name),
                    resource.total
                )
            })
            .collect()
    }
}
