//! Sidebar navigation between the entity screens

use crate::shared::icons::icon_for_key;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem { href: "/students", label: "Students", icon: "students" },
    MenuItem { href: "/classrooms", label: "Classrooms", icon: "classrooms" },
    MenuItem { href: "/parents", label: "Parents", icon: "parents" },
    MenuItem { href: "/teachers", label: "Teachers", icon: "teachers" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            {MENU_ITEMS.iter().map(|item| view! {
                <A href=item.href attr:class="app-sidebar__item">
                    <div class="app-sidebar__item-content">
                        {icon_for_key(item.icon)}
                        <span>{item.label}</span>
                    </div>
                </A>
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::icons::Icon;

    #[test]
    fn test_every_menu_icon_key_resolves() {
        for item in MENU_ITEMS {
            assert!(Icon::from_key(item.icon).is_some(), "no icon for {}", item.href);
        }
    }
}
