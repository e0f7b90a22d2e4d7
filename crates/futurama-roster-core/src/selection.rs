//! Selection state for list views
//!
//! Keeps a cursor inside a list of items with bounds checking, so the
//! renderer never has to clamp indices itself.

/// A list with one selected item
///
/// # Examples
///
/// ```
/// use futurama_roster_core::selection::SelectableList;
///
/// let mut list = SelectableList::new(vec!["Fry", "Leela", "Bender"]);
///
/// assert_eq!(list.selected(), Some(&"Fry"));
/// list.select_next();
/// assert_eq!(list.selected(), Some(&"Leela"));
/// list.select_last();
/// list.select_next();
/// assert_eq!(list.selected(), Some(&"Bender"));
/// ```
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    items: Vec<T>,
    selected: usize,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub fn selected_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(self.selected)
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Move down one item, stopping at the end
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    /// Move up one item, stopping at the start
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page);
    }

    pub fn page_down(&mut self, page: usize) {
        self.selected = (self.selected + page).min(self.items.len().saturating_sub(1));
    }

    /// Replace the items, keeping the cursor in bounds
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}

impl<T> From<Vec<T>> for SelectableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let mut list: SelectableList<i32> = SelectableList::default();
        assert!(list.is_empty());
        assert!(list.selected().is_none());
        list.select_next();
        list.select_prev();
        list.select_last();
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_navigation_stops_at_edges() {
        let mut list = SelectableList::new(vec![1, 2, 3]);
        list.select_prev();
        assert_eq!(list.selected(), Some(&1));

        list.select_next();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(&3));
    }

    #[test]
    fn test_paging() {
        let mut list = SelectableList::new((0..50).collect::<Vec<_>>());
        list.page_down(20);
        assert_eq!(list.selected_index(), 20);
        list.page_down(40);
        assert_eq!(list.selected_index(), 49);
        list.page_up(100);
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_set_items_clamps_cursor() {
        let mut list = SelectableList::new(vec![1, 2, 3, 4]);
        list.select_last();
        list.set_items(vec![9, 8]);
        assert_eq!(list.selected(), Some(&8));

        list.set_items(Vec::new());
        assert_eq!(list.selected_index(), 0);
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_selected_mut() {
        let mut list = SelectableList::new(vec![String::from("a"), String::from("b")]);
        list.select_next();
        if let Some(item) = list.selected_mut() {
            item.push('!');
        }
        assert_eq!(list.items()[1], "b!");
    }
}
