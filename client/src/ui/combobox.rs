#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySuggestion {
    Existing(String),
    /// Offer to create the typed category.
    Create(String),
}

/// Category input with autocomplete over known categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryCombobox {
    pub input: String,
}

impl CategoryCombobox {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn suggestions(&self, known: &[String]) -> Vec<CategorySuggestion> {
        let needle = self.input.trim().to_lowercase();

        let matches = known
            .iter()
            .filter(|category| category.to_lowercase().contains(&needle))
            .cloned()
            .map(CategorySuggestion::Existing)
            .collect::<Vec<CategorySuggestion>>();

        if matches.is_empty() && !needle.is_empty() {
            return vec![CategorySuggestion::Create(self.input.trim().to_string())];
        }

        matches
    }

    pub fn select(&mut self, suggestion: CategorySuggestion) {
        self.input = match suggestion {
            CategorySuggestion::Existing(category) | CategorySuggestion::Create(category) => {
                category
            }
        };
    }
}
