//! User notification channel
//!
//! Every error the controller catches ends up here. The terminal front end
//! shows the message in a modal overlay; tests collect it with
//! [`RecordingNotifier`].

/// Tell the user something went wrong
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Collects notifications in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received, oldest first
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Most recent message
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Forget everything received so far
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}
