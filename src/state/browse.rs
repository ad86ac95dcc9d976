// Browse state management.
// Handles catalog data loading and list selection for the browse view.

use ratatui::widgets::ListState;

use crate::catalog::{BadgeFile, BadgeStyle, Category};

use super::navigation::{NavigationStack, ViewLevel};

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// State for a selectable list with keyboard navigation.
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    pub data: LoadingState<Vec<T>>,
    pub list_state: ListState,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            data: LoadingState::Idle,
            list_state: ListState::default(),
        }
    }
}

impl<T> SelectableList<T> {
    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Select the next item in the list.
    pub fn select_next(&mut self) {
        if let Some(items) = self.data.data() {
            if items.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => {
                    if i >= items.len() - 1 {
                        i // Stay at end
                    } else {
                        i + 1
                    }
                }
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    /// Select the previous item in the list.
    pub fn select_prev(&mut self) {
        if let Some(items) = self.data.data() {
            if items.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => i.saturating_sub(1),
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    /// Get the selected item.
    pub fn selected_item(&self) -> Option<&T> {
        let index = self.list_state.selected()?;
        let items = self.data.data()?;
        items.get(index)
    }

    /// Replace the list contents and select the first item.
    pub fn set_loaded(&mut self, items: Vec<T>) {
        let selection = if items.is_empty() { None } else { Some(0) };
        self.data = LoadingState::Loaded(items);
        self.list_state.select(selection);
    }

    /// Mark the list as loading and clear the selection.
    pub fn set_loading(&mut self) {
        self.data = LoadingState::Loading;
        self.list_state.select(None);
    }

    /// Record a load failure.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.data = LoadingState::Error(message.into());
        self.list_state.select(None);
    }
}

/// Full state of the browse view: navigation, both lists, and the active
/// badge style.
#[derive(Debug, Default)]
pub struct BrowseState {
    pub nav: NavigationStack,
    pub categories: SelectableList<Category>,
    pub files: SelectableList<BadgeFile>,
    pub style: BadgeStyle,
}

impl BrowseState {
    /// Drill into the currently selected category, if any.
    pub fn open_selected_category(&mut self) {
        let Some(category) = self.categories.selected_item() else {
            return;
        };

        let files = category.files.clone();
        self.nav.push(ViewLevel::Files {
            category: category.value.clone(),
            label: category.label.clone(),
        });
        self.files.set_loaded(files);
    }

    /// Go back one level. Returns false if already at the root.
    pub fn go_back(&mut self) -> bool {
        self.nav.pop()
    }

    /// The list the current view level is showing.
    pub fn current_level(&self) -> &ViewLevel {
        self.nav.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(value: &str, label: &str, files: usize) -> Category {
        Category {
            value: value.to_string(),
            label: label.to_string(),
            files: (0..files)
                .map(|i| BadgeFile {
                    value: format!("badge-{}_vector.svg", i),
                    label: format!("Badge {}", i),
                    url: format!("{}/badge-{}_vector.svg", value, i),
                })
                .collect(),
        }
    }

    #[test]
    fn test_selection_bounds() {
        let mut list = SelectableList::default();
        list.set_loaded(vec!["a", "b", "c"]);

        assert_eq!(list.selected(), Some(0));
        list.select_prev();
        assert_eq!(list.selected(), Some(0));

        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(2));
        list.select_next();
        assert_eq!(list.selected(), Some(2));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut list: SelectableList<&str> = SelectableList::default();
        list.set_loaded(Vec::new());

        assert_eq!(list.selected(), None);
        list.select_next();
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_open_category_loads_files() {
        let mut browse = BrowseState::default();
        browse
            .categories
            .set_loaded(vec![category("discord-plugin", "Discord Plugin", 2)]);

        browse.open_selected_category();
        assert_eq!(
            browse.current_level(),
            &ViewLevel::Files {
                category: "discord-plugin".to_string(),
                label: "Discord Plugin".to_string(),
            }
        );
        assert_eq!(browse.files.data.data().map(Vec::len), Some(2));
        assert_eq!(browse.files.selected(), Some(0));

        assert!(browse.go_back());
        assert_eq!(browse.current_level(), &ViewLevel::Categories);
        assert!(!browse.go_back());
    }

    #[test]
    fn test_open_without_selection_is_noop() {
        let mut browse = BrowseState::default();
        browse.open_selected_category();
        assert_eq!(browse.current_level(), &ViewLevel::Categories);
    }
}
