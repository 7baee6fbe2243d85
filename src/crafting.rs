use chrono::Utc;
use tracing::{error, info, warn};

use crate::api::{ApiClient, Recipe};
use crate::models::{
    distinct_categories, parse_quantity, Cart, KeyValueStore, Notifier, RecipeFilter,
    ACTIVE_CATEGORY_KEY, ALL_CATEGORIES,
};
use crate::ui::components::{
    CartView, CategoryFilter, NotificationToast, RecipeGrid, ResourceTotals,
};
use crate::ui::page::{CART, CATEGORY_FILTER, RECIPES_GRID, RESOURCE_TOTALS};
use crate::ui::{crafting_page, CraftingPageView, Page};

/// Recipe browser and resource calculator.
pub struct CraftingPage {
    api: ApiClient,
    store: Box<dyn KeyValueStore + Send>,

    pub page: Page,
    pub notifier: Notifier,

    recipes: Vec<Recipe>,
    categories: Vec<String>,
    filter: RecipeFilter,
    cart: Cart,
    results_visible: bool,

    // UI Components
    category_filter: CategoryFilter,
    recipe_grid: RecipeGrid,
    cart_view: CartView,
    resource_totals: ResourceTotals,
    toast: NotificationToast,
}

impl CraftingPage {
    /// Restores the saved category filter, falling back to "all".
    pub fn new(api: ApiClient, store: Box<dyn KeyValueStore + Send>) -> Self {
        let category = store
            .get(ACTIVE_CATEGORY_KEY)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());

        let mut crafting = Self {
            api,
            store,
            page: Page::new(),
            notifier: Notifier::crafting(),
            recipes: Vec::new(),
            categories: Vec::new(),
            filter: RecipeFilter::new(&category),
            cart: Cart::new(),
            results_visible: false,
            category_filter: CategoryFilter::new(),
            recipe_grid: RecipeGrid::new(),
            cart_view: CartView::new(),
            resource_totals: ResourceTotals::new(),
            toast: NotificationToast::new(),
        };

        crafting.render_categories();
        crafting.render_cart();
        crafting
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &RecipeFilter {
        &self.filter
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Recipes passing the current category and search.
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        self.filter.apply(&self.recipes)
    }

    pub async fn load_recipes(&mut self) {
        match self.api.recipes().await {
            Ok(recipes) => {
                info!("Loaded {} recipes", recipes.len());
                self.categories = distinct_categories(&recipes);
                self.recipes = recipes;

                let category = self.filter.category.clone();
                self.filter_by_category(&category);
            }
            Err(e) => {
                error!("Error loading recipes: {}", e);
                self.notifier
                    .error("Failed to load recipes. Please check if the server is running.");
            }
        }
    }

    /// Switches the category and remembers it for the next session.
    pub fn filter_by_category(&mut self, category: &str) {
        self.filter.category = category.to_string();
        if let Err(e) = self.store.set(ACTIVE_CATEGORY_KEY, category) {
            warn!("Could not save category filter: {}", e);
        }

        self.render_categories();
        self.render_recipes();
    }

    pub fn search(&mut self, term: &str) {
        self.filter.search = term.to_string();
        self.render_recipes();
    }

    /// Adds `quantity_input` of a recipe, merging with an existing cart line.
    pub fn add_to_cart(&mut self, recipe_id: i64, quantity_input: &str) {
        let quantity = parse_quantity(quantity_input);
        let Some(recipe) = self.recipes.iter().find(|r| r.id == recipe_id) else {
            self.notifier.error("Recipe not found");
            return;
        };

        let name = recipe.name.clone();
        self.cart.add(recipe_id, &name, quantity);
        self.render_cart();
        self.notifier.success(format!("Added {} x{} to cart", name, quantity));
    }

    pub fn remove_from_cart(&mut self, recipe_id: i64) {
        if let Some(item) = self.cart.remove(recipe_id) {
            self.render_cart();
            self.notifier.success(format!("Removed {} from cart", item.name));
        }
    }

    pub async fn calculate_resources(&mut self) {
        if self.cart.is_empty() {
            self.notifier.error("Please select some items first!");
            return;
        }

        match self.api.calculate(&self.cart.to_request()).await {
            Ok(totals) => {
                info!(
                    "Calculated {} resource totals for {} items",
                    totals.len(),
                    self.cart.len()
                );
                self.results_visible = true;
                self.page.set(RESOURCE_TOTALS, self.resource_totals.render(&totals));
            }
            Err(e) => {
                error!("Error calculating resources: {}", e);
                self.notifier.error("Failed to calculate resources. Please try again.");
            }
        }
    }

    fn render_categories(&mut self) {
        let html = self
            .category_filter
            .render(&self.categories, &self.filter.category);
        self.page.set(CATEGORY_FILTER, html);
    }

    fn render_recipes(&mut self) {
        let html = self.recipe_grid.render(&self.filter.apply(&self.recipes));
        self.page.set(RECIPES_GRID, html);
    }

    fn render_cart(&mut self) {
        self.page.set(CART, self.cart_view.render(&self.cart));
    }

    pub fn render_page(&self) -> String {
        let notifications = self.notifier.active(Utc::now());
        crafting_page(&CraftingPageView {
            page: &self.page,
            search: &self.filter.search,
            results_visible: self.results_visible,
            notifications: self.toast.render(&notifications),
        })
    }
}
