use color_eyre::Result;

use super::{App, Navigable};

impl Navigable for App {
    fn item_count(&self) -> usize {
        self.entries.len()
    }

    fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }
}

impl App {
    /// Reloads the browse list from storage
    pub(crate) fn load_entries(&mut self) {
        self.ensure_storage();
        let Some(store) = &self.entry_store else {
            return;
        };
        let Some(runtime) = self.storage_runtime() else {
            return;
        };

        self.entries = runtime
            .block_on(async { store.list().await.ok() })
            .unwrap_or_default();

        if self.selected_index >= self.entries.len() {
            self.selected_index = self.entries.len().saturating_sub(1);
        }
    }

    /// Opens the entry under the cursor
    pub fn open_selected_entry(&mut self) -> Result<()> {
        let Some(entry) = self.entries.get(self.selected_index).cloned() else {
            return Ok(());
        };
        self.open_entry(entry)
    }
}
