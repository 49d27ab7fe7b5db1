//! Page routing table.
//!
//! Paths map to pages declaratively; anything unmatched lands on the
//! catch-all `Page::NotFound`. Page internals live outside this crate -
//! pages read the stores owned by `crate::app::App`.

/// Pages the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Barkeeper,
    Settings,
    Order,
    NotFound,
}

impl Page {
    /// Display title for navigation.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Barkeeper => "Barkeeper",
            Page::Settings => "Settings",
            Page::Order => "Order",
            Page::NotFound => "Not Found",
        }
    }
}

/// One routing entry: a literal path and the page it mounts.
pub struct Route {
    pub path: &'static str,
    pub page: Page,
}

/// The routing table. The catch-all is not an entry - `resolve` falls
/// back to `Page::NotFound` for anything the table does not name.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/barkeeper",
        page: Page::Barkeeper,
    },
    Route {
        path: "/settings",
        page: Page::Settings,
    },
    Route {
        path: "/order",
        page: Page::Order,
    },
];

/// Resolve a request path to a page. Trailing slashes are ignored.
pub fn resolve(path: &str) -> Page {
    let trimmed = path.trim_end_matches('/');
    ROUTES
        .iter()
        .find(|route| route.path == trimmed)
        .map(|route| route.page)
        .unwrap_or(Page::NotFound)
}
