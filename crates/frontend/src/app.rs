use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::load_remote_config;
use crate::shared::product_store::ProductStore;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Survives navigation between pages, lost on reload.
    provide_context(ProductStore::new());

    let (config_ready, set_config_ready) = signal(false);
    spawn_local(async move {
        load_remote_config().await;
        set_config_ready.set(true);
    });

    view! {
        <ConfigProvider>
            <AuthProvider>
                <Show
                    when=move || config_ready.get()
                    fallback=|| view! { <div class="page-loading">"Cargando..."</div> }
                >
                    <AppRoutes />
                </Show>
            </AuthProvider>
        </ConfigProvider>
    }
}
