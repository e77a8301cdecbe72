use leptos::prelude::*;

use super::context::use_session;

/// Renders children only for an authenticated session
#[component]
pub fn RequireAuth(
    #[prop(optional, into)] fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let fallback = fallback
        .unwrap_or_else(|| ViewFn::from(|| view! { <div>"Not authenticated. Please login."</div> }));

    view! {
        <Show when=move || session.is_authenticated() fallback=fallback>
            {children()}
        </Show>
    }
}
