//! Inline SVG icons.
//!
//! Icons are an enum with an exhaustive renderer. String keys (from
//! configuration or content tables) go through [`Icon::from_key`], which
//! rejects and logs unknown keys instead of silently drawing a fallback.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Plus,
    Refresh,
    Edit,
    Delete,
    Eye,
    X,
    ChevronLeft,
    ChevronRight,
    ChevronsLeft,
    ChevronsRight,
    Students,
    Classrooms,
    Parents,
    Teachers,
    Logout,
}

impl Icon {
    pub const ALL: [Icon; 15] = [
        Icon::Plus,
        Icon::Refresh,
        Icon::Edit,
        Icon::Delete,
        Icon::Eye,
        Icon::X,
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::ChevronsLeft,
        Icon::ChevronsRight,
        Icon::Students,
        Icon::Classrooms,
        Icon::Parents,
        Icon::Teachers,
        Icon::Logout,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Icon::Plus => "plus",
            Icon::Refresh => "refresh",
            Icon::Edit => "edit",
            Icon::Delete => "delete",
            Icon::Eye => "eye",
            Icon::X => "x",
            Icon::ChevronLeft => "chevron-left",
            Icon::ChevronRight => "chevron-right",
            Icon::ChevronsLeft => "chevrons-left",
            Icon::ChevronsRight => "chevrons-right",
            Icon::Students => "students",
            Icon::Classrooms => "classrooms",
            Icon::Parents => "parents",
            Icon::Teachers => "teachers",
            Icon::Logout => "logout",
        }
    }

    /// Looks up an icon by key; unknown keys are logged and rejected.
    pub fn from_key(key: &str) -> Option<Icon> {
        let found = Icon::ALL.into_iter().find(|i| i.key() == key);
        if found.is_none() {
            log::warn!("unknown icon key: {:?}", key);
        }
        found
    }

    pub fn view(self) -> AnyView {
        match self {
            Icon::Plus => frame(16, view! {
                <path d="M12 5v14"/>
                <path d="M5 12h14"/>
            }),
            Icon::Refresh => frame(16, view! {
                <polyline points="23 4 23 10 17 10"/>
                <path d="M20.49 15a9 9 0 1 1-2.12-9.36L23 10"/>
            }),
            Icon::Edit => frame(16, view! {
                <path d="M12 20h9"/>
                <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>
            }),
            Icon::Delete => frame(16, view! {
                <polyline points="3 6 5 6 21 6"/>
                <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
                <path d="M10 11v6"/>
                <path d="M14 11v6"/>
            }),
            Icon::Eye => frame(16, view! {
                <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/>
                <circle cx="12" cy="12" r="3"/>
            }),
            Icon::X => frame(16, view! {
                <path d="M18 6 6 18"/>
                <path d="M6 6l12 12"/>
            }),
            Icon::ChevronLeft => frame(16, view! { <polyline points="15 18 9 12 15 6"/> }),
            Icon::ChevronRight => frame(16, view! { <polyline points="9 18 15 12 9 6"/> }),
            Icon::ChevronsLeft => frame(16, view! {
                <polyline points="11 17 6 12 11 7"/>
                <polyline points="18 17 13 12 18 7"/>
            }),
            Icon::ChevronsRight => frame(16, view! {
                <polyline points="13 17 18 12 13 7"/>
                <polyline points="6 17 11 12 6 7"/>
            }),
            Icon::Students => frame(20, view! {
                <path d="M22 10 12 5 2 10l10 5 10-5z"/>
                <path d="M6 12v5c3 3 9 3 12 0v-5"/>
            }),
            Icon::Classrooms => frame(20, view! {
                <rect x="3" y="3" width="7" height="7" rx="1"/>
                <rect x="14" y="3" width="7" height="7" rx="1"/>
                <rect x="14" y="14" width="7" height="7" rx="1"/>
                <rect x="3" y="14" width="7" height="7" rx="1"/>
            }),
            Icon::Parents => frame(20, view! {
                <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
            }),
            Icon::Teachers => frame(20, view! {
                <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/>
                <circle cx="12" cy="7" r="4"/>
            }),
            Icon::Logout => frame(16, view! {
                <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
                <polyline points="16 17 21 12 16 7"/>
                <path d="M21 12H9"/>
            }),
        }
    }
}

fn frame(size: u32, body: impl IntoView + Send + 'static) -> AnyView {
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {body}
        </svg>
    }
    .into_any()
}

/// Renders the icon for `key`, or nothing when the key is unknown.
pub fn icon_for_key(key: &str) -> AnyView {
    match Icon::from_key(key) {
        Some(icon) => icon.view(),
        None => view! { <></> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_resolve_to_their_icon() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_key(icon.key()), Some(icon));
        }
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert_eq!(Icon::from_key("rocket"), None);
        assert_eq!(Icon::from_key("Plus"), None);
    }
}
