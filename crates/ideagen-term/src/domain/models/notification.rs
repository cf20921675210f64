use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

/// A message shown to the user immediately, until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, text: &str) -> Notification {
        return Notification {
            kind,
            text: text.to_string(),
        };
    }

    pub fn error(text: &str) -> Notification {
        return Notification::new(NotificationKind::Error, text);
    }

    pub fn warning(text: &str) -> Notification {
        return Notification::new(NotificationKind::Warning, text);
    }
}
