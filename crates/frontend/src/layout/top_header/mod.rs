//! Application top bar: sidebar toggle, title, current user and logout.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::Icon;
use crate::system::auth::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    let user_label = move || {
        session
            .user()
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {Icon::ChevronsLeft.view()}
                </button>
                <span class="top-header__title">"School Admin"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">{user_label}</span>
                <button
                    class="top-header__icon-btn"
                    title="Sign out"
                    on:click=move |_| session.logout()
                >
                    {Icon::Logout.view()}
                </button>
            </div>
        </div>
    }
}
