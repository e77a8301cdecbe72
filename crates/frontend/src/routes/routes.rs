use crate::domain::a001_classroom::ui::list::ClassroomsPage;
use crate::domain::a002_student::ui::list::StudentsPage;
use crate::domain::a003_parent::ui::list::ParentsPage;
use crate::domain::a004_teacher::ui::list::TeachersPage;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::{use_session, RequireAuth};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Router>
            <Shell left=|| view! { <Sidebar /> }.into_any()>
                <Routes fallback=|| view! { <div class="page">"Page not found."</div> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/students" /> } />
                    <Route path=path!("/students") view=StudentsPage />
                    <Route path=path!("/classrooms") view=ClassroomsPage />
                    <Route path=path!("/parents") view=ParentsPage />
                    <Route path=path!("/teachers") view=TeachersPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let restoring = move || session.state().with(|s| s.restoring);

    view! {
        <RequireAuth fallback=|| view! { <LoginPage /> }>
            <Show
                when=move || !restoring()
                fallback=|| view! { <div class="app-loading">"Restoring session..."</div> }
            >
                <MainLayout />
            </Show>
        </RequireAuth>
    }
}
