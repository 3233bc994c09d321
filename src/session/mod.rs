pub mod admin;
pub mod draft;
pub mod notice;
pub mod state;

use crate::assist::{CategoryRecommender, LinkOpener, Recommendation, Transcriber};
use crate::booking::{IntentBuilder, RewardsLedger};
use crate::catalog::Catalog;
use crate::config::HubConfig;
use crate::discovery::{FilterCriteria, SortField, SortState};
use crate::error::{HubError, Result};
use crate::models::{BookingRequest, ConfirmationData, PropertyBookingRequest, Provider};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub use admin::AdminGate;
pub use draft::{MoveDirection, PortfolioField, ProviderDraft};
pub use notice::{Notice, NoticeKind};
pub use state::{Modal, Screen, View};

/// Result of an AI category search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Query was blank
    Ignored,
    /// A search is already in flight
    Busy,
    /// The suggested category was opened
    Matched(String),
    /// The suggested category id is not in the catalog
    UnknownCategory,
    /// The recommender returned nothing
    Unavailable,
}

/// Clears the loading flag when a search ends, including when it is dropped
/// mid-flight.
struct LoadingFlag<'a>(&'a mut bool);

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// One user's browsing session: what is on screen, which dialog is open,
/// the catalog being browsed and the points balance.
pub struct Session {
    catalog: Catalog,
    ledger: RewardsLedger,
    intents: IntentBuilder,
    screen: Screen,
    modal: Option<Modal>,
    notice: Option<Notice>,
    notice_ttl: Duration,
    sort: SortState,
    admin_gate: AdminGate,
    is_admin: bool,
    ai_query: String,
    ai_loading: bool,
}

impl Session {
    pub fn new(config: &HubConfig, catalog: Catalog) -> Self {
        Self {
            catalog,
            ledger: RewardsLedger::new(config.starting_points),
            intents: IntentBuilder::new(config.messaging_base_url.clone()),
            screen: Screen::Welcome,
            modal: None,
            notice: None,
            notice_ttl: Duration::from_millis(config.notice_ttl_ms),
            sort: SortState::default(),
            admin_gate: AdminGate::new(config.admin_sequence.clone()),
            is_admin: false,
            ai_query: String::new(),
            ai_loading: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn points(&self) -> u64 {
        self.ledger.balance()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn ai_query(&self) -> &str {
        &self.ai_query
    }

    pub fn ai_loading(&self) -> bool {
        self.ai_loading
    }

    /// The latest notice, unless it has expired
    pub fn notice(&self) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|n| !n.is_expired(Instant::now()))
    }

    /// The pending confirmation, if one is open
    pub fn confirmation(&self) -> Option<&ConfirmationData> {
        match &self.modal {
            Some(Modal::Confirmation(data)) => Some(data),
            _ => None,
        }
    }

    fn notify(&mut self, message: impl Into<String>, kind: NoticeKind) {
        let notice = Notice::new(message, kind, self.notice_ttl);
        debug!("Notice ({:?}): {}", notice.kind, notice.message);
        self.notice = Some(notice);
    }

    // Navigation

    /// Switch top-level screen. Any selected category is dropped. The admin
    /// console stays closed until unlocked.
    pub fn navigate(&mut self, view: View) {
        if view == View::Admin && !self.is_admin {
            warn!("Admin console requested before unlock");
            return;
        }
        self.screen = view.into();
    }

    /// Open the provider list for `category_id`. Unknown ids are ignored.
    pub fn select_category(&mut self, category_id: &str) -> bool {
        if self.catalog.category(category_id).is_none() {
            warn!("Unknown category {}", category_id);
            return false;
        }
        info!("Browsing category {}", category_id);
        self.screen = Screen::Customer {
            category: Some(category_id.to_string()),
        };
        true
    }

    pub fn back_to_categories(&mut self) {
        if let Screen::Customer { category } = &mut self.screen {
            *category = None;
        }
    }

    /// Providers in the selected category that pass `criteria`
    pub fn visible_providers(&self, criteria: &FilterCriteria) -> Vec<Provider> {
        match self.screen.selected_category() {
            Some(category) => self.catalog.filtered_providers(category, criteria),
            None => Vec::new(),
        }
    }

    /// Submitted from the provider registration screen
    pub fn submit_registration(&mut self) {
        self.notify("Application received! We will contact you soon.", NoticeKind::Success);
        self.screen = Screen::Welcome;
    }

    /// "Become a Host" on the stays screen
    pub fn request_hosting(&mut self) {
        self.notify("Property Hosting system coming soon!", NoticeKind::Info);
    }

    // Dialogs

    pub fn open_profile(&mut self, provider_id: u32) {
        if self.catalog.provider(provider_id).is_some() {
            self.modal = Some(Modal::Profile(provider_id));
        }
    }

    pub fn open_service_booking(&mut self, provider_id: u32) {
        if self.catalog.provider(provider_id).is_some() {
            self.modal = Some(Modal::ServiceBooking(provider_id));
        }
    }

    pub fn open_stay_booking(&mut self, property_id: u32) {
        if self.catalog.property(property_id).is_some() {
            self.modal = Some(Modal::StayBooking(property_id));
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // Booking

    /// Build the confirmation for a service booking and show it.
    ///
    /// On an unknown provider the flow aborts with an error notice and no
    /// confirmation is produced.
    pub fn start_service_booking(&mut self, request: &BookingRequest) -> Result<ConfirmationData> {
        let category = self
            .screen
            .selected_category()
            .and_then(|id| self.catalog.category(id));
        let built = self
            .intents
            .service(request, self.catalog.providers(), category);
        self.show_confirmation(built)
    }

    /// Build the confirmation for a rental request and show it
    pub fn start_stay_booking(
        &mut self,
        request: &PropertyBookingRequest,
    ) -> Result<ConfirmationData> {
        let built = self.intents.property(request, self.catalog.properties());
        self.show_confirmation(built)
    }

    fn show_confirmation(&mut self, built: Result<ConfirmationData>) -> Result<ConfirmationData> {
        match built {
            Ok(data) => {
                info!("Confirmation ready: {}", data.subtitle);
                self.modal = Some(Modal::Confirmation(data.clone()));
                Ok(data)
            }
            Err(e) => {
                warn!("Booking aborted: {}", e);
                self.modal = None;
                self.notify(e.user_message(), NoticeKind::Error);
                Err(e)
            }
        }
    }

    /// Hand the pending confirmation to the messaging channel and credit its
    /// points. Without a pending confirmation this does nothing.
    pub fn finalize_booking(&mut self, opener: &dyn LinkOpener) -> u64 {
        let data = match self.modal.take() {
            Some(Modal::Confirmation(data)) => data,
            other => {
                self.modal = other;
                return self.ledger.balance();
            }
        };
        opener.open(&data.outbound_link);
        let balance = self.ledger.credit(data.points_earned);
        self.notify("Redirecting to WhatsApp...", NoticeKind::Success);
        balance
    }

    /// Discard the pending confirmation without crediting points
    pub fn cancel_booking(&mut self) {
        if self.confirmation().is_some() {
            debug!("Confirmation discarded");
            self.modal = None;
        }
    }

    // Admin

    /// Feed one key press to the admin shortcut
    pub fn press_key(&mut self, key: &str) {
        if self.admin_gate.push_key(key) {
            info!("Admin console unlocked");
            self.is_admin = true;
            self.screen = Screen::Admin;
        }
    }

    /// Provider table for the admin console, in the active sort order
    pub fn admin_providers(&self) -> Vec<Provider> {
        self.sort.apply(self.catalog.providers())
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    /// Open the edit dialog for a provider
    pub fn edit_provider(&mut self, provider_id: u32) {
        if let Some(provider) = self.catalog.provider(provider_id) {
            self.modal = Some(Modal::EditProvider(ProviderDraft::new(provider)));
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProviderDraft> {
        match &mut self.modal {
            Some(Modal::EditProvider(draft)) => Some(draft),
            _ => None,
        }
    }

    /// Save the open edit dialog into the catalog
    pub fn save_draft(&mut self) {
        match self.modal.take() {
            Some(Modal::EditProvider(draft)) => self.update_provider(draft.into_provider()),
            other => self.modal = other,
        }
    }

    /// Replace the provider with the same id. Unknown ids change nothing.
    pub fn update_provider(&mut self, updated: Provider) {
        if self.catalog.provider(updated.id).is_none() {
            debug!("Ignoring update for unknown provider {}", updated.id);
            return;
        }
        let name = updated.name.clone();
        self.catalog = self.catalog.update_provider(updated);
        info!("Updated provider {}", name);
        self.notify(format!("Information updated for {name}"), NoticeKind::Success);
    }

    /// Remove a provider. Unknown ids change nothing.
    pub fn delete_provider(&mut self, provider_id: u32) {
        if self.catalog.provider(provider_id).is_none() {
            debug!("Ignoring delete for unknown provider {}", provider_id);
            return;
        }
        self.catalog = self.catalog.delete_provider(provider_id);
        info!("Removed provider {}", provider_id);
        self.notify("Provider removed", NoticeKind::Info);
    }

    // Search assistance

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.ai_query = query.into();
    }

    /// Mark a search as in flight and hand back the query to send.
    ///
    /// Callers driving the recommender themselves render `ai_loading()`
    /// until they pass the reply to `finish_ai_search`.
    pub fn begin_ai_search(&mut self) -> std::result::Result<String, SearchOutcome> {
        if self.ai_loading {
            return Err(SearchOutcome::Busy);
        }
        let query = self.ai_query.trim().to_string();
        if query.is_empty() {
            return Err(SearchOutcome::Ignored);
        }
        self.ai_loading = true;
        Ok(query)
    }

    /// Apply the recommender's reply and clear the loading state
    pub fn finish_ai_search(&mut self, recommendation: Option<Recommendation>) -> SearchOutcome {
        self.ai_loading = false;
        let Some(rec) = recommendation else {
            self.notify("AI search is unavailable, please try manual browsing.", NoticeKind::Error);
            return SearchOutcome::Unavailable;
        };
        if self.select_category(&rec.category_id) {
            self.notify(format!("AI suggests: {}", rec.reason), NoticeKind::Info);
            SearchOutcome::Matched(rec.category_id)
        } else {
            self.notify(
                "AI couldn't find a matching category, but try browsing our list.",
                NoticeKind::Info,
            );
            SearchOutcome::UnknownCategory
        }
    }

    /// Ask the recommender which category fits the current query and open it.
    /// Dropping the returned future leaves the session ready for another search.
    pub async fn ai_search(&mut self, recommender: &dyn CategoryRecommender) -> SearchOutcome {
        let query = match self.begin_ai_search() {
            Ok(query) => query,
            Err(outcome) => return outcome,
        };
        let recommendation = {
            let _loading = LoadingFlag(&mut self.ai_loading);
            recommender.recommend(&query).await
        };
        self.finish_ai_search(recommendation)
    }

    /// Put transcribed speech into the search box
    pub fn apply_transcription(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.notify(format!("Voice recognized: {text}"), NoticeKind::Info);
        self.ai_query = text;
    }

    /// Transcribe recorded audio into the search box
    pub async fn transcribe(&mut self, transcriber: &dyn Transcriber, audio: &[u8], mime_type: &str) {
        match transcriber.transcribe(audio, mime_type).await {
            Ok(text) => self.apply_transcription(text),
            Err(e) => {
                warn!("Transcription failed: {:#}", e);
                let err = HubError::Unavailable("Voice input".to_string());
                self.notify(err.user_message(), NoticeKind::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, uri: &str) {
            self.opened.borrow_mut().push(uri.to_string());
        }
    }

    struct FixedRecommender(Option<Recommendation>);

    #[async_trait]
    impl CategoryRecommender for FixedRecommender {
        async fn recommend(&self, _query: &str) -> Option<Recommendation> {
            self.0.clone()
        }
    }

    struct FixedTranscriber(Option<&'static str>);

    #[async_trait]
    impl Transcriber for FixedTranscriber {
        async fn transcribe(&self, _audio: &[u8], _mime_type: &str) -> anyhow::Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("microphone unplugged"))
        }
    }

    fn session() -> Session {
        Session::new(&HubConfig::default(), Catalog::seeded())
    }

    fn service_request(provider_id: u32) -> BookingRequest {
        BookingRequest {
            provider_id,
            customer_name: "Ada Cole".to_string(),
            customer_phone: "0775550101".to_string(),
            date: "2024-02-01".to_string(),
            time: "10:00".to_string(),
            description: "Replace breaker".to_string(),
        }
    }

    fn stay_request(property_id: u32) -> PropertyBookingRequest {
        PropertyBookingRequest {
            property_id,
            customer_name: "Ada Cole".to_string(),
            customer_phone: "0775550101".to_string(),
            check_in: "2024-01-10".to_string(),
            check_out: "2024-01-13".to_string(),
            guests: 2,
        }
    }

    #[test]
    fn finalize_credits_points_once() {
        let mut s = session();
        let opener = RecordingOpener::default();
        s.start_stay_booking(&stay_request(2)).unwrap();
        assert_eq!(s.points(), 250);

        assert_eq!(s.finalize_booking(&opener), 300);
        assert_eq!(s.finalize_booking(&opener), 300);
        assert_eq!(opener.opened.borrow().len(), 1);
        assert!(s.confirmation().is_none());
        assert_eq!(s.notice().map(|n| n.kind), Some(NoticeKind::Success));
    }

    #[test]
    fn cancel_discards_without_points() {
        let mut s = session();
        let opener = RecordingOpener::default();
        s.select_category("electrician");
        s.start_service_booking(&service_request(1)).unwrap();

        s.cancel_booking();
        assert!(s.modal().is_none());
        assert_eq!(s.finalize_booking(&opener), 250);
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn unknown_provider_aborts_with_notice() {
        let mut s = session();
        s.open_service_booking(1);

        let err = s.start_service_booking(&service_request(4_242)).unwrap_err();

        assert_eq!(err, HubError::ProviderNotFound(4_242));
        assert!(s.modal().is_none());
        assert_eq!(s.points(), 250);
        assert_eq!(s.notice().map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn service_confirmation_uses_browsed_category() {
        let mut s = session();
        s.select_category("electrician");
        let data = s.start_service_booking(&service_request(1)).unwrap();
        assert_eq!(data.details[0].value, "Electrician");

        let mut s = session();
        let data = s.start_service_booking(&service_request(1)).unwrap();
        assert_eq!(data.details[0].value, "Professional Service");
    }

    #[test]
    fn confirmation_replaces_the_booking_dialog() {
        let mut s = session();
        s.open_profile(1);
        s.open_service_booking(1);
        assert_eq!(s.modal(), Some(&Modal::ServiceBooking(1)));

        s.start_service_booking(&service_request(1)).unwrap();
        assert!(matches!(s.modal(), Some(Modal::Confirmation(_))));
    }

    #[test]
    fn navigation_clears_category() {
        let mut s = session();
        assert!(s.select_category("plumber"));
        assert_eq!(s.screen().selected_category(), Some("plumber"));
        assert_eq!(s.visible_providers(&FilterCriteria::default()).len(), 1);

        s.back_to_categories();
        assert_eq!(s.screen(), &Screen::Customer { category: None });
        assert!(s.visible_providers(&FilterCriteria::default()).is_empty());

        s.select_category("plumber");
        s.navigate(View::Stays);
        assert_eq!(s.screen(), &Screen::Stays);
        assert!(!s.select_category("astronaut"));
        assert_eq!(s.screen(), &Screen::Stays);
    }

    #[test]
    fn admin_console_needs_the_key_sequence() {
        let mut s = session();
        s.navigate(View::Admin);
        assert_eq!(s.screen(), &Screen::Welcome);

        for key in ["a", "d", "m", "i", "n", "1", "2", "3"] {
            s.press_key(key);
        }
        assert!(s.is_admin());
        assert_eq!(s.screen().view(), View::Admin);
    }

    #[test]
    fn admin_edits_flow_into_catalog() {
        let mut s = session();
        s.edit_provider(1);
        {
            let draft = s.draft_mut().unwrap();
            draft.set_name("Volt Masters");
            draft.move_portfolio_item(0, MoveDirection::Down);
        }
        s.save_draft();

        let saved = s.catalog().provider(1).unwrap();
        assert_eq!(saved.name, "Volt Masters");
        assert_eq!(saved.portfolio[0].title, "Modern Lighting Design");
        assert!(s.modal().is_none());
        assert_eq!(
            s.notice().map(|n| n.message.as_str()),
            Some("Information updated for Volt Masters")
        );
    }

    #[test]
    fn admin_mutations_ignore_unknown_ids() {
        let mut s = session();
        let before = s.catalog().clone();
        let mut ghost = before.providers()[0].clone();
        ghost.id = 777;
        s.update_provider(ghost);
        s.delete_provider(777);
        assert_eq!(s.catalog(), &before);
        assert!(s.notice().is_none());

        s.delete_provider(5);
        assert!(s.catalog().provider(5).is_none());
        assert_eq!(s.notice().map(|n| n.message.as_str()), Some("Provider removed"));
    }

    #[test]
    fn admin_table_follows_sort_toggles() {
        let mut s = session();
        s.toggle_sort(SortField::CompletedJobs);
        let jobs: Vec<u32> = s.admin_providers().iter().map(|p| p.completed_jobs).collect();
        assert!(jobs.windows(2).all(|w| w[0] <= w[1]));

        s.toggle_sort(SortField::CompletedJobs);
        let jobs: Vec<u32> = s.admin_providers().iter().map(|p| p.completed_jobs).collect();
        assert!(jobs.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn ai_search_opens_recommended_category() {
        let mut s = session();
        let recommender = FixedRecommender(Some(Recommendation {
            category_id: "plumber".to_string(),
            reason: "Leaking pipes".to_string(),
        }));

        assert_eq!(s.ai_search(&recommender).await, SearchOutcome::Ignored);

        s.set_query("my sink is leaking");
        assert_eq!(
            s.ai_search(&recommender).await,
            SearchOutcome::Matched("plumber".to_string())
        );
        assert_eq!(s.screen().selected_category(), Some("plumber"));
        assert_eq!(s.notice().map(|n| n.message.as_str()), Some("AI suggests: Leaking pipes"));
        assert!(!s.ai_loading());
    }

    #[tokio::test]
    async fn ai_search_reports_misses_and_outages() {
        let mut s = session();
        s.set_query("walk my llama");

        let unknown = FixedRecommender(Some(Recommendation {
            category_id: "llama-walker".to_string(),
            reason: "Llamas".to_string(),
        }));
        assert_eq!(s.ai_search(&unknown).await, SearchOutcome::UnknownCategory);
        assert_eq!(s.notice().map(|n| n.kind), Some(NoticeKind::Info));

        assert_eq!(s.ai_search(&FixedRecommender(None)).await, SearchOutcome::Unavailable);
        assert_eq!(s.notice().map(|n| n.kind), Some(NoticeKind::Error));
        assert_eq!(s.screen(), &Screen::Welcome);
    }

    #[tokio::test]
    async fn transcription_fills_the_query() {
        let mut s = session();
        s.transcribe(&FixedTranscriber(Some("fix my roof")), b"...", "audio/webm").await;
        assert_eq!(s.ai_query(), "fix my roof");
        assert_eq!(
            s.notice().map(|n| n.message.as_str()),
            Some("Voice recognized: fix my roof")
        );

        s.transcribe(&FixedTranscriber(None), b"...", "audio/webm").await;
        assert_eq!(s.ai_query(), "fix my roof");
        assert_eq!(s.notice().map(|n| n.kind), Some(NoticeKind::Error));
    }

    struct StalledRecommender;

    #[async_trait]
    impl CategoryRecommender for StalledRecommender {
        async fn recommend(&self, _query: &str) -> Option<Recommendation> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            None
        }
    }

    fn plumber_recommender() -> FixedRecommender {
        FixedRecommender(Some(Recommendation {
            category_id: "plumber".to_string(),
            reason: "Leaking pipes".to_string(),
        }))
    }

    #[tokio::test]
    async fn abandoned_search_does_not_block_the_next_one() {
        let mut s = session();
        s.set_query("my sink is leaking");

        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), s.ai_search(&StalledRecommender)).await;
        assert!(timed_out.is_err());
        assert!(!s.ai_loading());

        assert_eq!(
            s.ai_search(&plumber_recommender()).await,
            SearchOutcome::Matched("plumber".to_string())
        );
    }

    #[test]
    fn split_search_exposes_loading_state() {
        let mut s = session();
        assert_eq!(s.begin_ai_search(), Err(SearchOutcome::Ignored));

        s.set_query("my sink is leaking");
        let query = s.begin_ai_search().unwrap();
        assert_eq!(query, "my sink is leaking");
        assert!(s.ai_loading());
        assert_eq!(s.begin_ai_search(), Err(SearchOutcome::Busy));

        let outcome = s.finish_ai_search(plumber_recommender().0);
        assert_eq!(outcome, SearchOutcome::Matched("plumber".to_string()));
        assert!(!s.ai_loading());
        assert!(s.begin_ai_search().is_ok());
    }

    #[test]
    fn unknown_property_aborts_with_notice() {
        let mut s = session();
        s.open_stay_booking(1);

        let err = s.start_stay_booking(&stay_request(404)).unwrap_err();

        assert_eq!(err, HubError::PropertyNotFound(404));
        assert!(s.modal().is_none());
        assert_eq!(s.points(), 250);
        assert_eq!(s.notice().map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn finalize_and_save_leave_other_dialogs_open() {
        let mut s = session();
        let opener = RecordingOpener::default();
        s.open_profile(1);

        assert_eq!(s.finalize_booking(&opener), 250);
        s.save_draft();
        assert_eq!(s.modal(), Some(&Modal::Profile(1)));
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn hosting_request_shows_coming_soon() {
        let mut s = session();
        s.navigate(View::Stays);
        s.request_hosting();
        assert_eq!(
            s.notice().map(|n| n.message.as_str()),
            Some("Property Hosting system coming soon!")
        );
        assert_eq!(s.notice().map(|n| n.kind), Some(NoticeKind::Info));
    }

    #[test]
    fn registration_returns_home() {
        let mut s = session();
        s.navigate(View::Provider);
        assert_eq!(s.screen(), &Screen::Registration);
        s.submit_registration();
        assert_eq!(s.screen(), &Screen::Welcome);
    }
}
