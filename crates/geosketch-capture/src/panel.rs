/// A text-bearing output surface, standing in for a DOM element.
///
/// Writes replace the whole content, mirroring `textContent` assignment.
/// Content that was never written stays empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPanel {
    element_id: String,
    content: String,
}

impl TextPanel {
    pub fn new(element_id: &str) -> Self {
        Self {
            element_id: element_id.to_string(),
            content: String::new(),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn set_text(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
    }

    pub fn text(&self) -> &str {
        &self.content
    }
}
