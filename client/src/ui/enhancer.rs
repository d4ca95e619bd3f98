/// Side panel that rewrites free text through the enhancement endpoint.
#[derive(Debug, Clone, Default)]
pub struct EnhancementPanel {
    pub input: String,
    /// Editable once filled.
    pub result: String,
    in_flight: bool,
}

impl EnhancementPanel {
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the enhance button is enabled.
    pub fn can_enhance(&self) -> bool {
        !self.in_flight && !self.input.trim().is_empty()
    }

    /// Marks a request as outstanding and returns the text to send, or
    /// `None` when refused.
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_enhance() {
            return None;
        }

        self.in_flight = true;
        Some(self.input.clone())
    }

    /// Settles the outstanding request. A failure keeps the previous result.
    pub fn finish(&mut self, enhanced: Option<String>) {
        self.in_flight = false;
        if let Some(enhanced) = enhanced {
            self.result = enhanced;
        }
    }

    pub fn has_result(&self) -> bool {
        !self.result.trim().is_empty()
    }
}
