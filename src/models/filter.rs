use serde::{Deserialize, Serialize};

use crate::api::Recipe;

/// Category value that matches every recipe.
pub const ALL_CATEGORIES: &str = "all";

/// Client-side predicate over the loaded recipe list: a category and a
/// free-text search, both of which must match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFilter {
    pub category: String,
    pub search: String,
}

impl Default for RecipeFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

impl RecipeFilter {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            search: String::new(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.category == ALL_CATEGORIES
    }

    pub fn matches_category(&self, recipe: &Recipe) -> bool {
        self.is_all() || recipe.category == self.category
    }

    /// Case-insensitive substring match on name, description, and resource names.
    /// An empty search always matches.
    pub fn matches_search(&self, recipe: &Recipe) -> bool {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        recipe.name.to_lowercase().contains(&term)
            || recipe.description.to_lowercase().contains(&term)
            || recipe
                .resources
                .iter()
                .any(|resource| resource.name.to_lowercase().contains(&term))
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_category(recipe) && self.matches_search(recipe)
    }

    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }
}

/// Distinct categories in order of first appearance.
pub fn distinct_categories(recipes: &[Recipe]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for recipe in recipes {
        if !categories.contains(&recipe.category) {
            categories.push(recipe.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecipeResource;

    fn recipe(
        id: i64,
        name: &str,
        category: &str,
        description: &str,
        resources: &[(&str, i64)],
    ) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            resources: resources
                .iter()
                .map(|(name, quantity)| RecipeResource {
                    id: None,
                    name: name.to_string(),
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            recipe(
                1,
                "Wooden Club",
                "Weapons",
                "A simple wooden weapon",
                &[("Wood", 5), ("Stone", 2)],
            ),
            recipe(
                2,
                "Stone Pickaxe",
                "Tools",
                "Essential tool for mining",
                &[("Wood", 5), ("Stone", 5)],
            ),
            recipe(3, "Cloth Outfit", "Armor", "Basic protection", &[("Cloth", 10)]),
            recipe(4, "Stone Axe", "Tools", "Cuts trees", &[("Wood", 5), ("Stone", 5)]),
        ]
    }

    fn names(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_all_matches_everything() {
        let recipes = catalog();
        let filter = RecipeFilter::default();
        assert_eq!(filter.apply(&recipes).len(), 4);
    }

    #[test]
    fn test_all_filter_is_idempotent() {
        let recipes = catalog();
        let filter = RecipeFilter::new(ALL_CATEGORIES);
        let once = names(&filter.apply(&recipes));
        let twice = names(&filter.apply(&recipes));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_filter() {
        let recipes = catalog();
        let filter = RecipeFilter::new("Tools");
        assert_eq!(names(&filter.apply(&recipes)), vec!["Stone Pickaxe", "Stone Axe"]);
    }

    #[test]
    fn test_search_covers_description_and_resources() {
        let recipes = catalog();
        let mut filter = RecipeFilter::default();

        filter.search = "CLOTH".to_string();
        assert_eq!(names(&filter.apply(&recipes)), vec!["Cloth Outfit"]);

        filter.search = "mining".to_string();
        assert_eq!(names(&filter.apply(&recipes)), vec!["Stone Pickaxe"]);

        filter.search = "stone".to_string();
        assert_eq!(filter.apply(&recipes).len(), 3);
    }

    #[test]
    fn test_search_combines_with_category() {
        let recipes = catalog();
        let filter = RecipeFilter {
            category: "Tools".to_string(),
            search: "axe".to_string(),
        };
        assert_eq!(names(&filter.apply(&recipes)), vec!["Stone Pickaxe", "Stone Axe"]);

        let filter = RecipeFilter {
            category: "Armor".to_string(),
            search: "wood".to_string(),
        };
        assert!(filter.apply(&recipes).is_empty());
    }

    #[test]
    fn test_distinct_categories_keep_first_seen_order() {
        let recipes = catalog();
        assert_eq!(distinct_categories(&recipes), vec!["Weapons", "Tools", "Armor"]);
        assert!(distinct_categories(&[]).is_empty());
    }
}
