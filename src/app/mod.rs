mod browse;
mod entries;
mod navigation;
mod types;
mod view;

pub use entries::{Entry, EntryStore, entry_view_url, parse_entry_route};
pub use navigation::Navigable;
pub use types::StatusToast;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use record_nav::{NavConfig, NavigationActions};
use std::time::Duration;

/// Application mode state
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Browse,
    View,
    Help,
}

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub previous_mode: Option<AppMode>,
    pub should_quit: bool,
    pub nav_config: NavConfig,
    pub use_memory_store: bool,

    // Browse fields
    pub entries: Vec<Entry>,
    pub selected_index: usize,

    // View fields
    pub current_entry: Option<Entry>,
    pub navigation: Option<NavigationActions>,

    pub entry_store: Option<EntryStore>,
    pub storage_runtime: Option<tokio::runtime::Runtime>,
    pub status_toast: Option<StatusToast>,
}

impl App {
    /// Creates a new application instance with the given navigation config
    pub fn new(nav_config: NavConfig) -> Self {
        Self {
            mode: AppMode::Browse,
            previous_mode: None,
            should_quit: false,
            nav_config,
            use_memory_store: false,
            entries: Vec::new(),
            selected_index: 0,
            current_entry: None,
            navigation: None,
            entry_store: None,
            storage_runtime: None,
            status_toast: None,
        }
    }

    /// Initializes storage and loads the entry list
    pub fn init_storage(&mut self, use_memory: bool) {
        self.use_memory_store = use_memory;
        if !self.ensure_storage() {
            self.show_status_toast("STORAGE UNAVAILABLE");
            return;
        }
        self.load_entries();
    }

    pub(crate) fn ensure_storage_runtime(&mut self) -> bool {
        if self.storage_runtime.is_some() {
            return true;
        }
        self.storage_runtime = tokio::runtime::Runtime::new().ok();
        self.storage_runtime.is_some()
    }

    pub(crate) fn storage_runtime(&self) -> Option<&tokio::runtime::Runtime> {
        self.storage_runtime.as_ref()
    }

    pub(crate) fn ensure_storage(&mut self) -> bool {
        if self.entry_store.is_some() {
            return true;
        }
        if !self.ensure_storage_runtime() {
            return false;
        }
        let Some(runtime) = self.storage_runtime() else {
            return false;
        };
        let use_memory = self.use_memory_store;
        self.entry_store = runtime.block_on(async {
            if use_memory {
                EntryStore::memory().await.ok()
            } else {
                EntryStore::open().await.ok()
            }
        });
        self.entry_store.is_some()
    }

    pub(crate) fn storage_with_runtime(&self) -> Result<(&EntryStore, &tokio::runtime::Runtime)> {
        let store = self
            .entry_store
            .as_ref()
            .ok_or_else(|| eyre!("Storage not initialized"))?;
        let runtime = self
            .storage_runtime
            .as_ref()
            .ok_or_else(|| eyre!("Storage runtime not initialized"))?;
        Ok((store, runtime))
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        let should_clear = self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(Duration::from_secs(3)));
        if should_clear {
            self.status_toast = None;
        }
    }

    #[must_use]
    pub fn status_toast_message(&self) -> Option<&str> {
        self.status_toast
            .as_ref()
            .map(|toast| toast.message.as_str())
    }

    pub fn open_help(&mut self) {
        if self.mode != AppMode::Help {
            self.previous_mode = Some(self.mode.clone());
        }
        self.mode = AppMode::Help;
    }

    pub fn close_help(&mut self) {
        self.mode = self.previous_mode.take().unwrap_or(AppMode::Browse);
    }
}
