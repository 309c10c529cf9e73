// Blueprint - app/navigation.rs
//
// Page routes and the navigation dock's item table.

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Company directory with the filter side panel.
    #[default]
    Directory,
    Dashboard,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Directory => "Blueprint Directory",
            Route::Dashboard => "Dashboard",
        }
    }
}

/// One button in the navigation dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockItem {
    pub label: &'static str,
    /// Glyph drawn on the button.
    pub icon: &'static str,
    /// Page opened on click. `None` items are shown but inert.
    pub target: Option<Route>,
}

/// Dock contents, left to right.
pub const DOCK_ITEMS: &[DockItem] = &[
    DockItem {
        label: "Blueprints",
        icon: "\u{25a6}",
        target: Some(Route::Directory),
    },
    DockItem {
        label: "Reach Out",
        icon: "\u{27a4}",
        target: None,
    },
    DockItem {
        label: "Log-in",
        icon: "\u{263a}",
        target: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_titles() {
        assert_eq!(Route::Directory.title(), "Blueprint Directory");
        assert_eq!(Route::Dashboard.title(), "Dashboard");
    }

    #[test]
    fn test_only_blueprints_navigates() {
        let targets: Vec<_> = DOCK_ITEMS.iter().filter_map(|i| i.target).collect();
        assert_eq!(targets, vec![Route::Directory]);
    }
}
