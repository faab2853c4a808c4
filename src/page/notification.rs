/// Slide-in delay after the toast is attached.
pub const SHOW_AFTER_MS: i32 = 100;
/// When the toast starts sliding back out.
pub const HIDE_AFTER_MS: i32 = 3000;
/// Removal delay once it has started sliding out.
pub const REMOVE_AFTER_MS: i32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "linear-gradient(45deg, #4caf50, #45a049)",
            NotificationKind::Error => "linear-gradient(45deg, #f44336, #da190b)",
            NotificationKind::Info => "linear-gradient(45deg, #64ffda, #00bcd4)",
        }
    }
}
