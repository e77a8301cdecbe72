use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{provide_app_config, AppConfig};
use crate::system::auth::SessionContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("API base: {}", config.api_base);

    let session = SessionContext::new(config.api_base.clone());
    provide_app_config(config);
    provide_context(session);
    provide_context(AppGlobalContext::new());

    session.restore();

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
