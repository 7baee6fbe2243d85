pub mod components;
mod html;
pub mod page;
mod pages;

pub use html::{escape_html, placeholder};
pub use page::Page;
pub use pages::{admin_page, crafting_page, AdminPageView, AdminTab, CraftingPageView};
