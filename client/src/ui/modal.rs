/// A dialog that is either closed or open with its working copy `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal<T> {
    content: Option<T>,
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self { content: None }
    }
}

impl<T> Modal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// Opens with `content`. Returns `false` and keeps the current content
    /// when already open.
    pub fn open(&mut self, content: T) -> bool {
        if self.is_open() {
            return false;
        }

        self.content = Some(content);
        true
    }

    /// Closes and drops any unsaved edits.
    pub fn close(&mut self) {
        self.content = None;
    }

    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut T> {
        self.content.as_mut()
    }
}
