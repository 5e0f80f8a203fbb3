//! Toast notifications.

/// Visual tone of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub tone: Tone,
    pub message: String,
}

/// Ordered list of visible notifications.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    /// Add a notification and return its id for later dismissal.
    pub fn push(&mut self, tone: Tone, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            tone,
            message: message.into(),
        });
        id
    }

    /// Remove a notification. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}
