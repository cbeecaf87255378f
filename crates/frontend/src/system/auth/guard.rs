use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::context::use_auth;

/// Renders `children` only with a session; otherwise sends the user to `/signin`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let state = auth_state.get();
        if !state.restoring && !state.is_authenticated() {
            navigate(
                "/signin",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=move || {
                auth_state.get().restoring.then(|| view! { <div class="page-loading">"Cargando..."</div> })
            }
        >
            {children()}
        </Show>
    }
}
