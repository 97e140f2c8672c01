use color_eyre::Result;
use record_nav::{NavAction, present_navigation};

use super::{App, AppMode, Entry, entry_view_url, parse_entry_route};

impl App {
    /// Opens an entry on the view screen and computes its navigation
    pub fn open_entry(&mut self, entry: Entry) -> Result<()> {
        self.current_entry = Some(entry);
        self.mode = AppMode::View;
        self.refresh_navigation()
    }

    /// Recomputes both navigation actions for the entry on screen
    ///
    /// Called on every transition; nothing from the previous render is
    /// reused, so the buttons always reflect the current table contents.
    pub(crate) fn refresh_navigation(&mut self) -> Result<()> {
        self.navigation = None;
        let Some(entry) = self.current_entry.clone() else {
            return Ok(());
        };

        let actions = {
            let (store, runtime) = self.storage_with_runtime()?;
            runtime.block_on(present_navigation(
                store,
                &entry,
                &self.nav_config,
                entry_view_url,
            ))?
        };

        self.navigation = Some(actions);
        Ok(())
    }

    /// Follows the previous-record action
    pub fn activate_previous(&mut self) -> Result<()> {
        let action = self.navigation.as_ref().map(|nav| nav.previous.clone());
        self.activate(action)
    }

    /// Follows the next-record action
    pub fn activate_next(&mut self) -> Result<()> {
        let action = self.navigation.as_ref().map(|nav| nav.next.clone());
        self.activate(action)
    }

    /// Activates one action; a disabled or linkless control does nothing
    fn activate(&mut self, action: Option<NavAction>) -> Result<()> {
        let Some(action) = action else {
            return Ok(());
        };
        if !action.is_actionable() {
            return Ok(());
        }
        let Some(href) = action.href else {
            return Ok(());
        };
        let Some(id) = parse_entry_route(&href) else {
            return Ok(());
        };
        self.open_entry_by_id(id)
    }

    /// Looks up a record by its view route id and opens it
    pub(crate) fn open_entry_by_id(&mut self, id: i64) -> Result<()> {
        let entry = {
            let (store, runtime) = self.storage_with_runtime()?;
            runtime.block_on(store.get(id))?
        };

        let Some(entry) = entry else {
            self.show_status_toast("RECORD NOT FOUND");
            return Ok(());
        };
        self.open_entry(entry)
    }

    /// Returns to the browse list, keeping the cursor on the viewed entry
    pub fn close_view(&mut self) {
        if let Some(current) = &self.current_entry {
            let key = current.record_key();
            if let Some(position) = self
                .entries
                .iter()
                .position(|entry| entry.record_key() == key)
            {
                self.selected_index = position;
            }
        }
        self.mode = AppMode::Browse;
        self.current_entry = None;
        self.navigation = None;
    }
}
