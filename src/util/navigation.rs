//! Route navigation for the login dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog names routes as segment lists (`["/reset", "request"]`) and
//! `RouterNavigator` turns them into paths for the leptos_router navigate
//! closure, the same closure shape route guards receive.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;

pub trait Navigator {
    /// Navigate to the route formed by `segments`.
    fn navigate(&self, segments: &[&str]);
    /// Path of the route currently displayed.
    fn current_url(&self) -> String;
}

/// Join route segments into an absolute path.
///
/// `[""]` is the root, and leading/trailing slashes on segments are ignored.
pub fn join_segments(segments: &[&str]) -> String {
    let parts: Vec<&str> = segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect();
    format!("/{}", parts.join("/"))
}

/// Whether `url` is one of the account pages a fresh login should leave.
pub fn is_auth_route(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path == "/register" || path.starts_with("/activate/") || path.starts_with("/reset/")
}

/// `Navigator` over a leptos_router navigate closure and a current-path getter.
pub struct RouterNavigator<F, C> {
    navigate: F,
    current: C,
}

impl<F, C> RouterNavigator<F, C>
where
    F: Fn(&str, NavigateOptions),
    C: Fn() -> String,
{
    pub fn new(navigate: F, current: C) -> Self {
        Self { navigate, current }
    }
}

impl<F, C> Navigator for RouterNavigator<F, C>
where
    F: Fn(&str, NavigateOptions),
    C: Fn() -> String,
{
    fn navigate(&self, segments: &[&str]) {
        let path = join_segments(segments);
        log::debug!("navigating to {path}");
        (self.navigate)(&path, NavigateOptions::default());
    }

    fn current_url(&self) -> String {
        (self.current)()
    }
}
