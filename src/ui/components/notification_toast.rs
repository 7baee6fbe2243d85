use crate::models::Notification;
use crate::ui::escape_html;

pub struct NotificationToast;

impl NotificationToast {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, notifications: &[&Notification]) -> String {
        notifications
            .iter()
            .map(|n| {
                format!(
                    "<div class=\"notification notification-{}\">{}</div>",
                    n.kind.as_str(),
                    escape_html(&n.message)
                )
            })
            .collect()
    }
}
