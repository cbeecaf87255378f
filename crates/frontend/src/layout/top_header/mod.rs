//! Top bar: logo, section links, signed-in operator and sign-out.

use crate::shared::icons::icon;
use crate::shared::product_store::use_product_store;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let store = use_product_store();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(set_auth_state);
        navigate("/signin", Default::default());
    };

    view! {
        <div class="top-header">
            <a class="top-header__brand" href="/dashboard">
                <img src="/logo.png" alt="Logo" class="top-header__logo" />
            </a>

            <nav class="top-header__nav">
                <a href="/">
                    "Entradas"
                    {move || {
                        let pending = store.pending_count();
                        (pending > 0).then(|| view! { <span class="top-header__badge">{pending}</span> })
                    }}
                </a>
                <a href="/entradas-pendientes">"Pendientes"</a>
                <a href="/tarimas">"Tarimas"</a>
                <a href="/camera">"Escanear"</a>
                <a href="/reporte">"Reporte"</a>
            </nav>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user_name().unwrap_or_else(|| "Invitado".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
