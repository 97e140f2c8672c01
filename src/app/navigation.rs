/// List selection shared by screens with a selectable list
///
/// Selection clamps at both ends rather than wrapping, matching the way
/// record navigation goes dead at the first and last record.
pub trait Navigable {
    /// Returns the total number of items in the list
    fn item_count(&self) -> usize;

    /// Returns the currently selected index
    fn selected_index(&self) -> usize;

    /// Sets the selected index
    fn set_selected_index(&mut self, index: usize);

    /// Moves the selection down one item, stopping at the end
    fn select_next(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let next = (self.selected_index() + 1).min(count - 1);
            self.set_selected_index(next);
        }
    }

    /// Moves the selection up one item, stopping at the start
    fn select_previous(&mut self) {
        self.set_selected_index(self.selected_index().saturating_sub(1));
    }

    /// Jumps to the first item
    fn select_first(&mut self) {
        if self.item_count() > 0 {
            self.set_selected_index(0);
        }
    }

    /// Jumps to the last item
    fn select_last(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.set_selected_index(count - 1);
        }
    }
}
