mod cart;
mod filter;
mod notification;
mod record_editor;
mod state;
mod table_form;

pub use cart::{parse_quantity, Cart, CartItem};
pub use filter::{distinct_categories, RecipeFilter, ALL_CATEGORIES};
pub use notification::{Notification, NotificationKind, Notifier};
pub use record_editor::{friendly_error, EditorMode, FormField, RecordEditor, Submission};
pub use state::{FileStore, KeyValueStore, MemoryStore, ACTIVE_CATEGORY_KEY};
pub use table_form::{ColumnDraft, NewTableForm};
