/// Id of the element the status text is appended to.
pub const MESSAGE_PANEL_ID: &str = "message";

/// Append-only display element for fetched status text.
///
/// Content starts empty and only changes when a response is actually
/// delivered; a failed or unanswered request leaves it untouched.
#[derive(Debug, Default)]
pub struct MessagePanel {
    content: String,
}

impl MessagePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &'static str {
        MESSAGE_PANEL_ID
    }

    /// Append text verbatim to the panel content.
    pub fn append(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The visible form of the panel.
    pub fn render(&self) -> String {
        format!("[{}] {}", self.id(), self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_starts_empty() {
        let panel = MessagePanel::new();
        assert_eq!(panel.content(), "");
        assert_eq!(panel.id(), "message");
    }

    #[test]
    fn test_append_is_verbatim() {
        let mut panel = MessagePanel::new();
        panel.append("status: <b>ok</b>\n");
        assert_eq!(panel.content(), "status: <b>ok</b>\n");
    }

    #[test]
    fn test_render_includes_id_and_content() {
        let mut panel = MessagePanel::new();
        panel.append("hello");
        assert_eq!(panel.render(), "[message] hello");
    }
}
