// ABOUTME: Application state management, view switching, and async API actions
// API outcomes are reported to the user through the toast manager

use crate::api::{ApiError, FlagsClient, MoviesClient};
use crate::app::forms::{FlagFormState, MovieSearchState};
use crate::app::poller::{poll_once, StatusPoller, StatusUpdate};
use crate::config::{Config, StartView};
use crate::models::{CacheStats, FeatureFlag, ServiceHealth};
use crate::toast::{Subscription, Toast, ToastManager};
use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    FlagList,
    FlagForm,
    MovieSearch,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    LoadFlags,
    SubmitFlagForm,
    ToggleFlag(i64),
    DeleteFlag(i64),
    SearchMovies,
    CheckStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteFlag(i64),
}

#[derive(Debug, Clone)]
pub struct ConfirmationDialog {
    pub title: String,
    pub message: String,
    pub confirm_action: ConfirmAction,
    /// `true` while "Yes" is highlighted.
    pub selected_option: bool,
}

/// What the last status poll said about the backend.
#[derive(Debug, Clone, Default)]
pub struct ServiceStatus {
    pub maintenance_mode: bool,
    pub remote_dark_mode: bool,
    /// Local dark mode choice; overrides the remote flag once set.
    pub dark_mode_override: Option<bool>,
    pub cache_stats: Option<CacheStats>,
    pub health: Option<ServiceHealth>,
    pub last_checked: Option<DateTime<Local>>,
}

impl ServiceStatus {
    pub fn is_connected(&self) -> bool {
        self.health.is_some()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode_override.unwrap_or(self.remote_dark_mode)
    }
}

/// Both backend clients.
#[derive(Debug, Clone)]
pub struct Backends {
    pub flags: FlagsClient,
    pub movies: MoviesClient,
}

impl Backends {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Ok(Self {
            flags: FlagsClient::new(&config.flags_api_url, config.request_timeout())?,
            movies: MoviesClient::new(&config.movies_api_url, config.request_timeout())?,
        })
    }
}

#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    /// View to return to when maintenance mode ends.
    pub previous_view: View,
    pub should_quit: bool,
    pub help_visible: bool,
    pub flags: Vec<FeatureFlag>,
    pub selected_flag_index: Option<usize>,
    pub flags_loading: bool,
    pub flags_error: Option<String>,
    pub flag_form: Option<FlagFormState>,
    pub movie_search: MovieSearchState,
    pub status: ServiceStatus,
    pub confirmation_dialog: Option<ConfirmationDialog>,
    pub pending_async_action: Option<AsyncAction>,
    /// Latest snapshot received from the toast manager.
    pub active_toasts: Vec<Toast>,
    pub toasts: ToastManager,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ToastManager::new())
    }
}

impl AppState {
    pub fn new(toasts: ToastManager) -> Self {
        Self {
            current_view: View::FlagList,
            previous_view: View::FlagList,
            should_quit: false,
            help_visible: false,
            flags: Vec::new(),
            selected_flag_index: None,
            flags_loading: false,
            flags_error: None,
            flag_form: None,
            movie_search: MovieSearchState::default(),
            status: ServiceStatus::default(),
            confirmation_dialog: None,
            pending_async_action: None,
            active_toasts: Vec::new(),
            toasts,
        }
    }

    pub fn load_mock_data(&mut self) {
        let flag = |id: i64, name: &str, enabled: bool, description: Option<&str>| FeatureFlag {
            id,
            name: name.to_string(),
            enabled,
            description: description.map(str::to_string),
            created_at: None,
            updated_at: None,
        };

        self.flags = vec![
            flag(1, "dark_mode", true, Some("Dark theme for the movie search UI")),
            flag(2, "maintenance_mode", false, Some("Show the maintenance page")),
            flag(3, "new_checkout", false, None),
        ];
        self.selected_flag_index = Some(0);
    }

    pub fn selected_flag(&self) -> Option<&FeatureFlag> {
        self.flags.get(self.selected_flag_index?)
    }

    fn flag_name(&self, id: i64) -> Option<String> {
        self.flags.iter().find(|f| f.id == id).map(|f| f.name.clone())
    }

    pub fn next_flag(&mut self) {
        if !self.flags.is_empty() {
            let current = self.selected_flag_index.unwrap_or(0);
            self.selected_flag_index = Some((current + 1) % self.flags.len());
        }
    }

    pub fn previous_flag(&mut self) {
        if !self.flags.is_empty() {
            let current = self.selected_flag_index.unwrap_or(0);
            self.selected_flag_index = Some(if current == 0 {
                self.flags.len() - 1
            } else {
                current - 1
            });
        }
    }

    pub fn first_flag(&mut self) {
        if !self.flags.is_empty() {
            self.selected_flag_index = Some(0);
        }
    }

    pub fn last_flag(&mut self) {
        if !self.flags.is_empty() {
            self.selected_flag_index = Some(self.flags.len() - 1);
        }
    }

    fn clamp_flag_selection(&mut self) {
        self.selected_flag_index = match self.selected_flag_index {
            _ if self.flags.is_empty() => None,
            Some(idx) if idx >= self.flags.len() => Some(self.flags.len() - 1),
            None => Some(0),
            keep => keep,
        };
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn show_view(&mut self, view: View) {
        if self.status.maintenance_mode && view != View::Maintenance {
            // Stay on the maintenance page; go there once it lifts.
            self.previous_view = view;
            return;
        }
        self.current_view = view;
    }

    pub fn open_create_form(&mut self) {
        self.flag_form = Some(FlagFormState::create());
        self.show_view(View::FlagForm);
    }

    pub fn open_edit_form(&mut self) {
        if let Some(form) = self.selected_flag().map(FlagFormState::edit) {
            self.flag_form = Some(form);
            self.show_view(View::FlagForm);
        }
    }

    pub fn cancel_form(&mut self) {
        self.flag_form = None;
        self.show_view(View::FlagList);
        if self.pending_async_action == Some(AsyncAction::SubmitFlagForm) {
            self.pending_async_action = None;
        }
    }

    pub fn show_delete_confirmation(&mut self) {
        let Some((id, name)) = self.selected_flag().map(|f| (f.id, f.name.clone())) else {
            return;
        };
        self.confirmation_dialog = Some(ConfirmationDialog {
            title: "Delete Feature Flag".to_string(),
            message: format!(
                "Are you sure you want to delete the flag \"{name}\"? This action cannot be undone."
            ),
            confirm_action: ConfirmAction::DeleteFlag(id),
            selected_option: false,
        });
    }

    /// Dismisses the most recently raised toast.
    pub fn dismiss_latest_toast(&mut self) {
        if let Some(toast) = self.active_toasts.last() {
            self.toasts.remove_toast(toast.id());
        }
    }

    pub fn clear_toasts(&mut self) {
        self.toasts.clear();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.status.dark_mode_override = Some(!self.status.is_dark_mode());
    }

    pub fn is_dark_mode(&self) -> bool {
        self.status.is_dark_mode()
    }

    pub fn set_maintenance_mode(&mut self, enabled: bool) {
        if enabled == self.status.maintenance_mode {
            return;
        }

        self.status.maintenance_mode = enabled;
        if enabled {
            info!("Maintenance mode enabled");
            if self.current_view != View::Maintenance {
                self.previous_view = self.current_view;
            }
            self.current_view = View::Maintenance;
            self.confirmation_dialog = None;
        } else {
            info!("Maintenance mode lifted, returning to {:?}", self.previous_view);
            self.current_view = self.previous_view;
        }
    }

    pub fn apply_status(&mut self, update: StatusUpdate) {
        if let Some(flags) = update.flags {
            self.status.remote_dark_mode = flags.dark_mode;
            self.status.cache_stats = Some(flags.cache_stats);
            self.set_maintenance_mode(flags.maintenance_mode);
        }
        self.status.health = update.health;
        self.status.last_checked = Some(update.checked_at);
    }

    pub async fn load_flags(&mut self, client: &FlagsClient) {
        self.flags_loading = true;
        self.flags_error = None;

        match client.list().await {
            Ok(flags) => {
                info!("Loaded {} feature flags", flags.len());
                self.flags = flags;
                self.clamp_flag_selection();
            }
            Err(e) => {
                warn!("Failed to load feature flags: {}", e);
                let message = e.user_message("Failed to fetch flags");
                self.flags_error = Some(message.clone());
                self.toasts.error(message, None);
            }
        }

        self.flags_loading = false;
    }

    pub async fn submit_flag_form(&mut self, client: &FlagsClient) {
        let Some(form) = self.flag_form.as_mut() else {
            return;
        };

        let request = form.to_request();
        let errors = request.validate();
        if !errors.is_empty() {
            debug!("Flag form rejected: {:?}", errors);
            form.errors = errors;
            return;
        }
        form.submitting = true;
        let editing_id = form.editing_id;

        let result = match editing_id {
            Some(id) => client.update(id, &request).await,
            None => client.create(&request).await,
        };

        match result {
            Ok(flag) => {
                if let Some(id) = editing_id {
                    info!("Updated feature flag {}", id);
                    if let Some(existing) = self.flags.iter_mut().find(|f| f.id == id) {
                        *existing = flag;
                    }
                    self.toasts
                        .success(format!("Flag \"{}\" updated successfully", request.name), None);
                } else {
                    info!("Created feature flag {} ({})", flag.name, flag.id);
                    self.flags.push(flag);
                    self.selected_flag_index = Some(self.flags.len() - 1);
                    self.toasts
                        .success(format!("Flag \"{}\" created successfully", request.name), None);
                }
                self.flag_form = None;
                self.show_view(View::FlagList);
            }
            Err(e) => {
                warn!("Failed to save feature flag: {}", e);
                let fallback = if editing_id.is_some() {
                    "Failed to update flag"
                } else {
                    "Failed to create flag"
                };
                if let Some(form) = self.flag_form.as_mut() {
                    form.submitting = false;
                }
                self.toasts.error(e.user_message(fallback), None);
            }
        }
    }

    pub async fn toggle_flag(&mut self, client: &FlagsClient, id: i64) {
        match client.toggle(id).await {
            Ok(flag) => {
                info!("Toggled feature flag {} to {}", flag.name, flag.enabled);
                let message = format!("Flag \"{}\" {}", flag.name, flag.status_label());
                if let Some(existing) = self.flags.iter_mut().find(|f| f.id == id) {
                    *existing = flag;
                }
                self.toasts.success(message, None);
            }
            Err(e) => {
                warn!("Failed to toggle feature flag {}: {}", id, e);
                self.toasts.error(e.user_message("Failed to toggle flag"), None);
            }
        }
    }

    pub async fn delete_flag(&mut self, client: &FlagsClient, id: i64) {
        let name = self.flag_name(id).unwrap_or_else(|| id.to_string());

        match client.delete(id).await {
            Ok(()) => {
                info!("Deleted feature flag {}", name);
                self.flags.retain(|f| f.id != id);
                self.clamp_flag_selection();
                self.toasts
                    .success(format!("Flag \"{name}\" deleted successfully"), None);
            }
            Err(e) => {
                warn!("Failed to delete feature flag {}: {}", id, e);
                self.toasts.error(e.user_message("Failed to delete flag"), None);
            }
        }
    }

    pub async fn search_movies(&mut self, client: &MoviesClient) {
        let Some(query) = self.movie_search.query() else {
            return;
        };

        let search = &mut self.movie_search;
        search.loading = true;
        search.error = None;
        search.last_title = Some(query.title.clone());

        match client.search(&query).await {
            Ok(response) if response.is_success() => {
                let total = response.total_results().to_string();
                info!("Movie search for '{}' found {} results", query.title, total);
                search.set_results(response.movies().to_vec(), &total);
                self.toasts.success(format!("Found {total} movies"), None);
            }
            Ok(response) => {
                let message = response
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| "No movies found".to_string());
                search.clear_results();
                search.error = Some(message.clone());
                self.toasts.info(message, None);
            }
            Err(ApiError::Maintenance) => {
                warn!("Movie search rejected: service in maintenance");
                search.clear_results();
                search.error = Some("Movie search is currently under maintenance".to_string());
                self.toasts
                    .warning("Movie search is currently under maintenance", None);
                self.set_maintenance_mode(true);
            }
            Err(e) => {
                warn!("Movie search failed: {}", e);
                let message = e.user_message("Failed to search movies");
                search.clear_results();
                search.error = Some(message.clone());
                self.toasts.error(message, None);
            }
        }

        self.movie_search.loading = false;
    }

    pub async fn check_status(&mut self, client: &MoviesClient) {
        let update = poll_once(client).await;
        self.apply_status(update);
    }

    pub async fn process_async_action(&mut self, backends: &Backends) -> anyhow::Result<()> {
        if let Some(action) = self.pending_async_action.take() {
            debug!("Processing async action {:?}", action);
            match action {
                AsyncAction::LoadFlags => self.load_flags(&backends.flags).await,
                AsyncAction::SubmitFlagForm => self.submit_flag_form(&backends.flags).await,
                AsyncAction::ToggleFlag(id) => self.toggle_flag(&backends.flags, id).await,
                AsyncAction::DeleteFlag(id) => self.delete_flag(&backends.flags, id).await,
                AsyncAction::SearchMovies => self.search_movies(&backends.movies).await,
                AsyncAction::CheckStatus => {
                    // Add timeout to prevent hanging on the maintenance page
                    use tokio::time::timeout;
                    if timeout(Duration::from_secs(10), self.check_status(&backends.movies))
                        .await
                        .is_err()
                    {
                        return Err(anyhow::anyhow!("Status check timed out"));
                    }
                }
            }
        }
        Ok(())
    }
}

pub struct App {
    pub state: AppState,
    backends: Backends,
    toast_rx: mpsc::UnboundedReceiver<Vec<Toast>>,
    toast_subscription: Option<Subscription>,
    status_rx: Option<mpsc::Receiver<StatusUpdate>>,
    poller: Option<JoinHandle<()>>,
    poll_interval: Duration,
    ui_refresh_needed: bool,
}

impl App {
    pub fn new(backends: Backends, toasts: ToastManager, poll_interval: Duration) -> Self {
        let (tx, toast_rx) = mpsc::unbounded_channel();
        let toast_subscription = toasts.subscribe(move |snapshot| {
            let _ = tx.send(snapshot);
        });

        Self {
            state: AppState::new(toasts),
            backends,
            toast_rx,
            toast_subscription: Some(toast_subscription),
            status_rx: None,
            poller: None,
            poll_interval,
            ui_refresh_needed: false,
        }
    }

    pub fn from_config(config: &Config, toasts: ToastManager) -> Result<Self, ApiError> {
        let mut app = Self::new(Backends::from_config(config)?, toasts, config.poll_interval());
        if config.start_view == StartView::Movies {
            app.state.show_view(View::MovieSearch);
        }
        Ok(app)
    }

    pub async fn init(&mut self) {
        self.start_poller();
        self.state.load_flags(&self.backends.flags).await;
        self.sync_toasts();
    }

    fn start_poller(&mut self) {
        let (handle, rx) = StatusPoller::spawn(self.backends.movies.clone(), self.poll_interval);
        self.poller = Some(handle);
        self.status_rx = Some(rx);
    }

    /// Copies any toast snapshots delivered since the last call into the state.
    fn sync_toasts(&mut self) {
        while let Ok(snapshot) = self.toast_rx.try_recv() {
            self.state.active_toasts = snapshot;
            self.ui_refresh_needed = true;
        }
    }

    fn sync_status(&mut self) {
        let Some(rx) = self.status_rx.as_mut() else {
            return;
        };
        let mut updates = Vec::new();
        while let Ok(update) = rx.try_recv() {
            updates.push(update);
        }
        for update in updates {
            self.state.apply_status(update);
            self.ui_refresh_needed = true;
        }

        if self.poller.as_ref().is_some_and(JoinHandle::is_finished) {
            warn!("Status poller stopped unexpectedly, restarting");
            self.start_poller();
        }
    }

    pub async fn tick(&mut self) -> anyhow::Result<()> {
        self.sync_toasts();
        self.sync_status();

        // Process any pending async actions
        match self.state.process_async_action(&self.backends).await {
            Ok(()) => {}
            Err(e) => {
                warn!("Error processing async action: {}", e);
            }
        }

        self.sync_toasts();
        Ok(())
    }

    /// Returns `true` once after toasts or status changed.
    pub fn needs_ui_refresh(&mut self) -> bool {
        std::mem::take(&mut self.ui_refresh_needed)
    }

    pub fn shutdown(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
        if let Some(subscription) = self.toast_subscription.take() {
            subscription.unsubscribe();
        }
        self.state.toasts.clear();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
