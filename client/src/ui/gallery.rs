use promptvault_core::domain::{
    category::{distinct_categories, same_category},
    prompt::entities::prompt::Prompt,
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    api::PromptApi,
    error::ClientError,
    ui::{
        clipboard::{Clipboard, MemoryClipboard},
        combobox::{CategoryCombobox, CategorySuggestion},
        enhancer::EnhancementPanel,
        form::PromptForm,
        modal::Modal,
        telemetry::{NoopTelemetry, TelemetryEvent, TelemetrySink},
        toast::Toasts,
    },
};

/// Filter value that matches every category.
pub const ALL_CATEGORIES: &str = "All";

pub const NO_PROMPTS_MESSAGE: &str = "No prompts added yet.";
pub const NO_MATCHES_MESSAGE: &str = "No prompts found matching your criteria.";
pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    /// The first load failed; the page shows a full error with a retry button.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub prompt_id: Uuid,
    pub form: PromptForm,
}

/// State of the gallery page.
///
/// The list is only ever replaced by a fresh fetch; mutations never patch it
/// locally.
pub struct PromptGallery<A, T = NoopTelemetry, C = MemoryClipboard> {
    api: A,
    telemetry: T,
    clipboard: C,

    prompts: Vec<Prompt>,
    categories: Vec<String>,
    status: LoadStatus,

    search: String,
    category_filter: String,

    add_modal: Modal<PromptForm>,
    edit_modal: Modal<EditDraft>,
    view_modal: Modal<Uuid>,
    delete_modal: Modal<Uuid>,
    form_errors: Vec<&'static str>,

    enhancement: EnhancementPanel,
    toasts: Toasts,
}

impl<A: PromptApi> PromptGallery<A> {
    pub fn with_defaults(api: A) -> Self {
        Self::new(api, NoopTelemetry, MemoryClipboard::default())
    }
}

impl<A, T, C> PromptGallery<A, T, C>
where
    A: PromptApi,
    T: TelemetrySink,
    C: Clipboard,
{
    pub fn new(api: A, telemetry: T, clipboard: C) -> Self {
        Self {
            api,
            telemetry,
            clipboard,
            prompts: Vec::new(),
            categories: Vec::new(),
            status: LoadStatus::Loading,
            search: String::new(),
            category_filter: ALL_CATEGORIES.to_string(),
            add_modal: Modal::new(),
            edit_modal: Modal::new(),
            view_modal: Modal::new(),
            delete_modal: Modal::new(),
            form_errors: Vec::new(),
            enhancement: EnhancementPanel::default(),
            toasts: Toasts::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Known categories as reported by the server.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category_filter(&self) -> &str {
        &self.category_filter
    }

    /// Fetches prompts then categories.
    ///
    /// Before the first success a prompt fetch failure is fatal for the page;
    /// afterwards it only raises a toast and the previous list stays.
    pub async fn load(&mut self) {
        match self.api.fetch_prompts().await {
            Ok(prompts) => {
                debug!(count = prompts.len(), "prompts loaded");
                self.prompts = prompts;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                warn!(error = ?e, "{}", e);
                if self.status == LoadStatus::Ready {
                    self.toasts.error(e.to_string());
                } else {
                    self.status = LoadStatus::Failed(e.to_string());
                }
                return;
            }
        }

        match self.api.fetch_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => {
                warn!(error = ?e, "{}", e);
                self.toasts.error(e.to_string());
            }
        }
    }

    pub async fn retry(&mut self) {
        if matches!(self.status, LoadStatus::Failed(_)) {
            self.status = LoadStatus::Loading;
            self.load().await;
        }
    }

    /// Prompts passing both the search term and the category filter.
    pub fn visible_prompts(&self) -> Vec<&Prompt> {
        let term = self.search.to_lowercase();

        self.prompts
            .iter()
            .filter(|prompt| {
                term.is_empty()
                    || prompt.title.to_lowercase().contains(&term)
                    || prompt.content.to_lowercase().contains(&term)
                    || prompt.category.to_lowercase().contains(&term)
            })
            .filter(|prompt| {
                self.category_filter == ALL_CATEGORIES
                    || same_category(&prompt.category, &self.category_filter)
            })
            .collect()
    }

    /// `All` followed by the categories present in the loaded list.
    pub fn filter_categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        categories.extend(distinct_categories(
            self.prompts.iter().map(|prompt| prompt.category.as_str()),
        ));
        categories
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.prompts.is_empty() {
            Some(NO_PROMPTS_MESSAGE)
        } else if self.visible_prompts().is_empty() {
            Some(NO_MATCHES_MESSAGE)
        } else {
            None
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        if !self.search.trim().is_empty() {
            self.telemetry.record(TelemetryEvent::Search {
                term: self.search.clone(),
            });
        }
    }

    /// Also used by the category chip on each card.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.category_filter = category.into();
        self.telemetry.record(TelemetryEvent::CategoryFilter {
            category: self.category_filter.clone(),
        });
    }

    fn find_prompt(&self, prompt_id: Uuid) -> Option<&Prompt> {
        self.prompts.iter().find(|prompt| prompt.id == prompt_id)
    }

    // Modals

    pub fn add_modal(&self) -> &Modal<PromptForm> {
        &self.add_modal
    }

    pub fn edit_modal(&self) -> &Modal<EditDraft> {
        &self.edit_modal
    }

    pub fn view_modal(&self) -> &Modal<Uuid> {
        &self.view_modal
    }

    pub fn delete_modal(&self) -> &Modal<Uuid> {
        &self.delete_modal
    }

    pub fn add_form_mut(&mut self) -> Option<&mut PromptForm> {
        self.add_modal.content_mut()
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut PromptForm> {
        self.edit_modal.content_mut().map(|draft| &mut draft.form)
    }

    /// Blank fields found by the last rejected submit.
    pub fn form_errors(&self) -> &[&'static str] {
        &self.form_errors
    }

    /// Autocomplete for the category field of whichever form is open.
    pub fn category_suggestions(&self) -> Vec<CategorySuggestion> {
        let input = self
            .add_modal
            .content()
            .or_else(|| self.edit_modal.content().map(|draft| &draft.form))
            .map(|form| form.category.clone())
            .unwrap_or_default();

        CategoryCombobox::new(input).suggestions(&self.categories)
    }

    pub fn open_add(&mut self) -> bool {
        self.form_errors.clear();
        self.add_modal.open(PromptForm::default())
    }

    pub fn cancel_add(&mut self) {
        self.form_errors.clear();
        self.add_modal.close();
    }

    pub fn open_edit(&mut self, prompt_id: Uuid) -> bool {
        let Some(form) = self.find_prompt(prompt_id).map(PromptForm::from_prompt) else {
            return false;
        };

        self.form_errors.clear();
        self.edit_modal.open(EditDraft { prompt_id, form })
    }

    pub fn cancel_edit(&mut self) {
        self.form_errors.clear();
        self.edit_modal.close();
    }

    pub fn open_view(&mut self, prompt_id: Uuid) -> bool {
        if self.find_prompt(prompt_id).is_none() {
            return false;
        }

        self.view_modal.open(prompt_id)
    }

    /// The prompt shown in the view modal.
    pub fn viewed_prompt(&self) -> Option<&Prompt> {
        self.view_modal
            .content()
            .and_then(|prompt_id| self.find_prompt(*prompt_id))
    }

    pub fn close_view(&mut self) {
        self.view_modal.close();
    }

    pub fn open_delete(&mut self, prompt_id: Uuid) -> bool {
        if self.find_prompt(prompt_id).is_none() {
            return false;
        }

        self.delete_modal.open(prompt_id)
    }

    pub fn cancel_delete(&mut self) {
        self.delete_modal.close();
    }

    /// "Edit" button of the view modal.
    pub fn edit_from_view(&mut self) -> bool {
        let Some(prompt_id) = self.view_modal.content().copied() else {
            return false;
        };

        self.view_modal.close();
        self.open_edit(prompt_id)
    }

    /// "Delete" button of the view modal.
    pub fn delete_from_view(&mut self) -> bool {
        let Some(prompt_id) = self.view_modal.content().copied() else {
            return false;
        };

        self.view_modal.close();
        self.open_delete(prompt_id)
    }

    // Actions

    pub async fn submit_add(&mut self) -> bool {
        let Some(form) = self.add_modal.content().cloned() else {
            return false;
        };

        if !self.accept_form(&form) {
            return false;
        }

        match self.api.add_prompt(form.to_fields()).await {
            Ok(()) => {
                self.add_modal.close();
                self.succeed("Prompt added successfully", TelemetryEvent::PromptAdded)
                    .await;
                true
            }
            Err(e) => self.fail(e),
        }
    }

    pub async fn submit_edit(&mut self) -> bool {
        let Some(draft) = self.edit_modal.content().cloned() else {
            return false;
        };

        if !self.accept_form(&draft.form) {
            return false;
        }

        match self
            .api
            .update_prompt(draft.prompt_id, draft.form.to_fields())
            .await
        {
            Ok(()) => {
                self.edit_modal.close();
                self.succeed("Prompt updated successfully", TelemetryEvent::PromptUpdated)
                    .await;
                true
            }
            Err(e) => self.fail(e),
        }
    }

    pub async fn confirm_delete(&mut self) -> bool {
        let Some(prompt_id) = self.delete_modal.content().copied() else {
            return false;
        };

        match self.api.delete_prompt(prompt_id).await {
            Ok(()) => {
                self.delete_modal.close();
                self.succeed("Prompt deleted successfully", TelemetryEvent::PromptDeleted)
                    .await;
                true
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn copy_prompt(&mut self, prompt_id: Uuid) -> bool {
        let Some(content) = self.find_prompt(prompt_id).map(|prompt| prompt.content.clone())
        else {
            return false;
        };

        self.copy(&content, COPIED_MESSAGE)
    }

    // Enhancement panel

    pub fn enhancement(&self) -> &EnhancementPanel {
        &self.enhancement
    }

    pub fn enhancement_mut(&mut self) -> &mut EnhancementPanel {
        &mut self.enhancement
    }

    /// Returns `false` without calling the server while a request is
    /// outstanding or the input is blank.
    pub async fn enhance(&mut self) -> bool {
        let Some(text) = self.enhancement.begin() else {
            return false;
        };

        match self.api.enhance_prompt(text).await {
            Ok(enhanced) => {
                self.enhancement.finish(Some(enhanced));
                self.toasts.success("Prompt enhanced successfully");
                self.telemetry.record(TelemetryEvent::PromptEnhanced);
                true
            }
            Err(e) => {
                self.enhancement.finish(None);
                self.fail(e)
            }
        }
    }

    pub fn copy_enhanced(&mut self) -> bool {
        if !self.enhancement.has_result() {
            return false;
        }

        let text = self.enhancement.result.clone();
        self.copy(&text, COPIED_MESSAGE)
    }

    /// Opens the add modal with the enhanced text as content.
    pub fn save_enhanced_as_new(&mut self) -> bool {
        if !self.enhancement.has_result() {
            return false;
        }

        self.form_errors.clear();
        self.add_modal
            .open(PromptForm::with_content(self.enhancement.result.clone()))
    }

    fn accept_form(&mut self, form: &PromptForm) -> bool {
        self.form_errors = form.missing_fields();
        self.form_errors.is_empty()
    }

    fn copy(&mut self, text: &str, message: &str) -> bool {
        match self.clipboard.set_text(text) {
            Ok(()) => {
                self.toasts.success(message);
                self.telemetry.record(TelemetryEvent::PromptCopied);
                true
            }
            Err(e) => {
                warn!("{}", e);
                self.toasts.error(e.to_string());
                false
            }
        }
    }

    async fn succeed(&mut self, message: &str, event: TelemetryEvent) {
        self.toasts.success(message);
        self.telemetry.record(event);
        self.load().await;
    }

    fn fail(&mut self, error: ClientError) -> bool {
        warn!(error = ?error, "{}", error);
        self.toasts.error(error.to_string());
        false
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        sync::{Arc, Mutex},
    };

    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::{
        api::PromptFields,
        error::{ApiAction, ClipboardError},
        ui::toast::ToastKind,
    };

    #[derive(Default)]
    struct FakeApi {
        prompts: Mutex<Vec<Prompt>>,
        failing: Mutex<HashSet<ApiAction>>,
        fetch_count: Mutex<usize>,
        enhance_count: Mutex<usize>,
    }

    impl FakeApi {
        fn with_prompts(prompts: Vec<Prompt>) -> Self {
            Self {
                prompts: Mutex::new(prompts),
                ..Self::default()
            }
        }

        fn fail_on(&self, action: ApiAction) {
            self.failing.lock().unwrap().insert(action);
        }

        fn recover(&self) {
            self.failing.lock().unwrap().clear();
        }

        fn check(&self, action: ApiAction) -> Result<(), ClientError> {
            if self.failing.lock().unwrap().contains(&action) {
                return Err(ClientError::Rejected {
                    action,
                    status: 500,
                });
            }
            Ok(())
        }

        fn fetches(&self) -> usize {
            *self.fetch_count.lock().unwrap()
        }
    }

    impl PromptApi for FakeApi {
        async fn fetch_prompts(&self) -> Result<Vec<Prompt>, ClientError> {
            *self.fetch_count.lock().unwrap() += 1;
            self.check(ApiAction::FetchPrompts)?;
            let mut prompts = self.prompts.lock().unwrap().clone();
            prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(prompts)
        }

        async fn fetch_categories(&self) -> Result<Vec<String>, ClientError> {
            self.check(ApiAction::FetchCategories)?;
            let prompts = self.prompts.lock().unwrap();
            Ok(distinct_categories(
                prompts.iter().map(|prompt| prompt.category.as_str()),
            ))
        }

        async fn add_prompt(&self, fields: PromptFields) -> Result<(), ClientError> {
            self.check(ApiAction::AddPrompt)?;
            let mut prompts = self.prompts.lock().unwrap();
            let created_at = Utc.timestamp_opt(1_000, 0).unwrap()
                + Duration::seconds(prompts.len() as i64);
            prompts.push(Prompt {
                id: Uuid::new_v4(),
                title: fields.title,
                content: fields.content,
                category: fields.category,
                created_at,
            });
            Ok(())
        }

        async fn update_prompt(
            &self,
            prompt_id: Uuid,
            fields: PromptFields,
        ) -> Result<(), ClientError> {
            self.check(ApiAction::UpdatePrompt)?;
            let mut prompts = self.prompts.lock().unwrap();
            if let Some(prompt) = prompts.iter_mut().find(|prompt| prompt.id == prompt_id) {
                prompt.title = fields.title;
                prompt.content = fields.content;
                prompt.category = fields.category;
            }
            Ok(())
        }

        async fn delete_prompt(&self, prompt_id: Uuid) -> Result<(), ClientError> {
            self.check(ApiAction::DeletePrompt)?;
            self.prompts
                .lock()
                .unwrap()
                .retain(|prompt| prompt.id != prompt_id);
            Ok(())
        }

        async fn enhance_prompt(&self, prompt: String) -> Result<String, ClientError> {
            *self.enhance_count.lock().unwrap() += 1;
            self.check(ApiAction::EnhancePrompt)?;
            Ok(format!("Enhanced: {prompt}"))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingTelemetry {
        events: Arc<Mutex<Vec<&'static str>>>,
    }

    impl RecordingTelemetry {
        fn names(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().clone()
        }
    }

    impl TelemetrySink for RecordingTelemetry {
        fn record(&self, event: TelemetryEvent) {
            self.events.lock().unwrap().push(event.name());
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError("permission denied".to_string()))
        }
    }

    fn prompt(title: &str, content: &str, category: &str, secs: i64) -> Prompt {
        Prompt {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    fn sample() -> Vec<Prompt> {
        vec![
            prompt("Greeting", "Say hello warmly", "General Chat", 100),
            prompt("Review", "Check this diff", "Code Review", 200),
            prompt("Haiku", "Write a haiku about rust", "Writing", 300),
        ]
    }

    async fn loaded(
        prompts: Vec<Prompt>,
    ) -> PromptGallery<FakeApi, RecordingTelemetry, MemoryClipboard> {
        let mut gallery = PromptGallery::new(
            FakeApi::with_prompts(prompts),
            RecordingTelemetry::default(),
            MemoryClipboard::default(),
        );
        gallery.load().await;
        gallery
    }

    fn last_toast(gallery: &PromptGallery<FakeApi, RecordingTelemetry>) -> (ToastKind, String) {
        let toast = gallery.toasts().last().unwrap();
        (toast.kind, toast.message.clone())
    }

    #[tokio::test]
    async fn test_initial_load() {
        let gallery = loaded(sample()).await;

        assert_eq!(gallery.status(), &LoadStatus::Ready);
        assert_eq!(gallery.prompts()[0].title, "Haiku");
        assert_eq!(
            gallery.categories(),
            &["Code Review", "General Chat", "Writing"]
        );
        assert_eq!(gallery.empty_message(), None);
    }

    #[tokio::test]
    async fn test_failed_initial_load_is_fatal_until_retry() {
        let api = FakeApi::with_prompts(sample());
        api.fail_on(ApiAction::FetchPrompts);
        let mut gallery = PromptGallery::with_defaults(api);

        gallery.load().await;
        assert_eq!(
            gallery.status(),
            &LoadStatus::Failed("Failed to fetch prompts".to_string())
        );
        assert!(gallery.toasts().items().is_empty());

        gallery.api().recover();
        gallery.retry().await;
        assert_eq!(gallery.status(), &LoadStatus::Ready);
        assert_eq!(gallery.prompts().len(), 3);
    }

    #[tokio::test]
    async fn test_later_fetch_failure_is_transient() {
        let mut gallery = loaded(sample()).await;
        gallery.api().fail_on(ApiAction::FetchPrompts);

        gallery.load().await;

        assert_eq!(gallery.status(), &LoadStatus::Ready);
        assert_eq!(gallery.prompts().len(), 3);
        assert_eq!(
            last_toast(&gallery),
            (ToastKind::Error, "Failed to fetch prompts".to_string())
        );
    }

    #[tokio::test]
    async fn test_search_and_category_filter_combine() {
        let mut gallery = loaded(sample()).await;

        gallery.set_search("HELLO");
        let titles = gallery
            .visible_prompts()
            .iter()
            .map(|prompt| prompt.title.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(titles, vec!["Greeting"]);

        gallery.select_category("code review");
        assert!(gallery.visible_prompts().is_empty());
        assert_eq!(gallery.empty_message(), Some(NO_MATCHES_MESSAGE));

        gallery.set_search("");
        assert_eq!(gallery.visible_prompts().len(), 1);
        assert_eq!(gallery.visible_prompts()[0].title, "Review");

        gallery.select_category(ALL_CATEGORIES);
        assert_eq!(gallery.visible_prompts().len(), 3);

        assert_eq!(
            gallery.telemetry().names(),
            vec!["search", "category_filter", "category_filter"]
        );
    }

    #[tokio::test]
    async fn test_search_matches_category_text() {
        let mut gallery = loaded(sample()).await;
        gallery.set_search("writ");

        assert_eq!(gallery.visible_prompts().len(), 1);
        assert_eq!(gallery.visible_prompts()[0].title, "Haiku");
    }

    #[tokio::test]
    async fn test_filter_categories_start_with_all() {
        let gallery = loaded(sample()).await;
        assert_eq!(
            gallery.filter_categories(),
            vec!["All", "Code Review", "General Chat", "Writing"]
        );
    }

    #[tokio::test]
    async fn test_empty_gallery_message() {
        let gallery = loaded(Vec::new()).await;
        assert_eq!(gallery.empty_message(), Some(NO_PROMPTS_MESSAGE));
    }

    #[tokio::test]
    async fn test_add_refetches_and_notifies() {
        let mut gallery = loaded(Vec::new()).await;
        let fetches = gallery.api().fetches();

        assert!(gallery.open_add());
        let form = gallery.add_form_mut().unwrap();
        form.title = "Greeting".to_string();
        form.content = "Say hello".to_string();
        form.category = "General Chat".to_string();

        assert!(gallery.submit_add().await);

        assert!(!gallery.add_modal().is_open());
        assert_eq!(gallery.api().fetches(), fetches + 1);
        assert_eq!(gallery.prompts().len(), 1);
        assert_eq!(
            last_toast(&gallery),
            (ToastKind::Success, "Prompt added successfully".to_string())
        );
        assert_eq!(gallery.telemetry().names(), vec!["prompt_added"]);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mut gallery = loaded(Vec::new()).await;
        gallery.open_add();
        gallery.add_form_mut().unwrap().title = "Only a title".to_string();

        assert!(!gallery.submit_add().await);

        assert!(gallery.add_modal().is_open());
        assert_eq!(gallery.form_errors(), &["content", "category"]);
        assert!(gallery.api().prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_add_leaves_state_unchanged() {
        let mut gallery = loaded(sample()).await;
        gallery.api().fail_on(ApiAction::AddPrompt);
        let fetches = gallery.api().fetches();

        gallery.open_add();
        *gallery.add_form_mut().unwrap() = PromptForm {
            title: "t".to_string(),
            content: "c".to_string(),
            category: "g".to_string(),
        };
        assert!(!gallery.submit_add().await);

        assert_eq!(gallery.prompts().len(), 3);
        assert!(gallery.add_modal().is_open());
        assert_eq!(gallery.api().fetches(), fetches);
        assert_eq!(
            last_toast(&gallery),
            (ToastKind::Error, "Failed to add prompt".to_string())
        );
        assert!(gallery.telemetry().names().is_empty());
    }

    #[tokio::test]
    async fn test_edit_through_view_modal() {
        let mut gallery = loaded(sample()).await;
        let id = gallery.prompts()[0].id;

        assert!(gallery.open_view(id));
        assert_eq!(gallery.viewed_prompt().unwrap().title, "Haiku");

        assert!(gallery.edit_from_view());
        assert!(!gallery.view_modal().is_open());
        assert!(gallery.edit_modal().is_open());

        gallery.edit_form_mut().unwrap().title = "Rust haiku".to_string();
        assert!(gallery.submit_edit().await);

        assert!(!gallery.edit_modal().is_open());
        assert_eq!(gallery.prompts()[0].title, "Rust haiku");
        assert_eq!(gallery.telemetry().names(), vec!["prompt_updated"]);
    }

    #[tokio::test]
    async fn test_cancel_edit_discards_changes() {
        let mut gallery = loaded(sample()).await;
        let id = gallery.prompts()[0].id;

        gallery.open_edit(id);
        gallery.edit_form_mut().unwrap().title = "scratch".to_string();
        gallery.cancel_edit();

        gallery.open_edit(id);
        assert_eq!(gallery.edit_modal().content().unwrap().form.title, "Haiku");
    }

    #[tokio::test]
    async fn test_delete_through_view_modal() {
        let mut gallery = loaded(sample()).await;
        let id = gallery.prompts()[1].id;

        gallery.open_view(id);
        assert!(gallery.delete_from_view());
        assert!(!gallery.view_modal().is_open());
        assert_eq!(gallery.delete_modal().content(), Some(&id));

        assert!(gallery.confirm_delete().await);

        assert_eq!(gallery.prompts().len(), 2);
        assert!(gallery.prompts().iter().all(|prompt| prompt.id != id));
        assert_eq!(
            last_toast(&gallery),
            (ToastKind::Success, "Prompt deleted successfully".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_prompt() {
        let mut gallery = loaded(sample()).await;
        gallery.api().fail_on(ApiAction::DeletePrompt);
        let id = gallery.prompts()[0].id;

        gallery.open_delete(id);
        assert!(!gallery.confirm_delete().await);

        assert_eq!(gallery.prompts().len(), 3);
        assert_eq!(
            last_toast(&gallery),
            (ToastKind::Error, "Failed to delete prompt".to_string())
        );
    }

    #[tokio::test]
    async fn test_copy_prompt() {
        let mut gallery = loaded(sample()).await;
        let id = gallery.prompts()[0].id;

        assert!(gallery.copy_prompt(id));

        assert_eq!(
            gallery.clipboard().text.as_deref(),
            Some("Write a haiku about rust")
        );
        assert_eq!(gallery.telemetry().names(), vec!["prompt_copied"]);
        assert_eq!(
            last_toast(&gallery),
            (ToastKind::Success, "Copied to clipboard!".to_string())
        );
    }

    #[tokio::test]
    async fn test_clipboard_failure_raises_error_toast() {
        let mut gallery = PromptGallery::new(
            FakeApi::with_prompts(sample()),
            NoopTelemetry,
            BrokenClipboard,
        );
        gallery.load().await;
        let id = gallery.prompts()[0].id;

        assert!(!gallery.copy_prompt(id));
        assert_eq!(gallery.toasts().last().unwrap().kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn test_enhance_then_save_as_new() {
        let mut gallery = loaded(Vec::new()).await;
        gallery.enhancement_mut().input = "write a poem".to_string();

        assert!(gallery.enhance().await);
        assert_eq!(gallery.enhancement().result, "Enhanced: write a poem");

        gallery.enhancement_mut().result.push_str(" in spring");
        assert!(gallery.copy_enhanced());
        assert_eq!(
            gallery.clipboard().text.as_deref(),
            Some("Enhanced: write a poem in spring")
        );
        assert_eq!(
            last_toast(&gallery),
            (ToastKind::Success, "Copied to clipboard!".to_string())
        );

        assert!(gallery.save_enhanced_as_new());
        let form = gallery.add_modal().content().unwrap();
        assert_eq!(form.content, "Enhanced: write a poem in spring");
        assert!(form.title.is_empty());

        assert_eq!(
            gallery.telemetry().names(),
            vec!["prompt_enhanced", "prompt_copied"]
        );
    }

    #[tokio::test]
    async fn test_enhance_refused_while_in_flight() {
        let mut gallery = loaded(Vec::new()).await;
        gallery.enhancement_mut().input = "write a poem".to_string();
        gallery.enhancement_mut().begin();

        assert!(!gallery.enhance().await);
        assert_eq!(*gallery.api().enhance_count.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_enhance_keeps_result() {
        let mut gallery = loaded(Vec::new()).await;
        gallery.api().fail_on(ApiAction::EnhancePrompt);
        gallery.enhancement_mut().input = "write a poem".to_string();

        assert!(!gallery.enhance().await);

        assert!(!gallery.enhancement().is_in_flight());
        assert!(!gallery.enhancement().has_result());
        assert_eq!(
            last_toast(&gallery),
            (ToastKind::Error, "Failed to enhance prompt".to_string())
        );
    }

    #[tokio::test]
    async fn test_category_suggestions_follow_open_form() {
        let mut gallery = loaded(sample()).await;
        gallery.open_add();
        gallery.add_form_mut().unwrap().category = "travel".to_string();

        assert_eq!(
            gallery.category_suggestions(),
            vec![CategorySuggestion::Create("travel".to_string())]
        );

        gallery.add_form_mut().unwrap().category = "chat".to_string();
        assert_eq!(
            gallery.category_suggestions(),
            vec![CategorySuggestion::Existing("General Chat".to_string())]
        );
    }
}
