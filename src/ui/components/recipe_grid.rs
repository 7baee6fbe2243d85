use crate::api::Recipe;
use crate::ui::{escape_html, placeholder};

/// Recipe cards with a quantity input and an add button.
pub struct RecipeGrid;

impl RecipeGrid {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, recipes: &[&Recipe]) -> String {
        if recipes.is_empty() {
            return placeholder("No recipes found.");
        }

        recipes.iter().map(|recipe| self.render_card(recipe)).collect()
    }

    fn render_card(&self, recipe: &Recipe) -> String {
        let resources: String = recipe
            .resources
            .iter()
            .map(|r| format!("<li>{}: {}</li>", escape_html(&r.name), r.quantity))
            .collect();

        format!(
            "<div class=\"recipe-card\">\
             <div class=\"recipe-title\">{name}</div>\
             <div class=\"recipe-category\">{category}</div>\
             <div class=\"recipe-description\">{description}</div>\
             <ul class=\"resources-list\">{resources}</ul>\
             <div class=\"recipe-actions\">\
             <input type=\"number\" class=\"quantity-input\" min=\"1\" value=\"1\" data-recipe-id=\"{id}\">\
             <button onclick=\"addToCart({id})\" class=\"btn btn-primary\">Add recipe</button>\
             </div></div>",
            name = escape_html(&recipe.name),
            category = escape_html(&recipe.category),
            description = escape_html(&recipe.description),
            resources = resources,
            id = recipe.id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecipeResource;

    #[test]
    fn test_empty_search_placeholder() {
        let html = RecipeGrid::new().render(&[]);
        assert!(html.contains("No recipes found."));
    }

    #[test]
    fn test_card_contents() {
        let recipe = Recipe {
            id: 7,
            name: "Pal Sphere".to_string(),
            category: "Pal Items".to_string(),
            description: "Capture wild <Pals>".to_string(),
            resources: vec![RecipeResource {
                id: Some(4),
                name: "Paldium Fragment".to_string(),
                quantity: 3,
            }],
        };
        let html = RecipeGrid::new().render(&[&recipe]);
        assert!(html.contains("<div class=\"recipe-title\">Pal Sphere</div>"));
        assert!(html.contains("Capture wild &lt;Pals&gt;"));
        assert!(html.contains("<li>Paldium Fragment: 3</li>"));
        assert!(html.contains("data-recipe-id=\"7\""));
        assert!(html.contains("addToCart(7)"));
    }
}
