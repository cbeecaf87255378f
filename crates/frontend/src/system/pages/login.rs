use contracts::domain::a001_operator::Operator;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::a001_operator::api::fetch_operators;
use crate::system::auth::context::{do_login, use_auth};

const BAD_CREDENTIALS: &str = "Credenciales incorrectas. Inténtalo de nuevo.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (operators, set_operators) = signal(Vec::<Operator>::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    // Already signed in (restored session): skip the form.
    let go_dashboard = navigate.clone();
    Effect::new(move |_| {
        if auth_state.get().is_authenticated() {
            go_dashboard("/dashboard", Default::default());
        }
    });

    spawn_local(async move {
        match fetch_operators().await {
            Ok(list) => set_operators.set(list),
            Err(e) => {
                leptos::logging::log!("Failed to load operators: {}", e);
                set_error_message.set(Some("No se pudo cargar la lista de operadores".into()));
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        if username_val.is_empty() {
            set_error_message.set(Some("Selecciona un operador".into()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match do_login(username_val, password_val, set_auth_state).await {
                Ok(()) => {
                    set_is_loading.set(false);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    leptos::logging::log!("Login failed: {}", e);
                    set_password.set(String::new());
                    set_error_message.set(Some(BAD_CREDENTIALS.into()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <img class="login-logo" src="/logo.png" alt="Logo" />
                <h1>"Entradas Automáticas"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Operador"</label>
                        <select
                            id="username"
                            prop:value=move || username.get()
                            on:change=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        >
                            <option value="">"-- Selecciona un operador --"</option>
                            <For
                                each=move || operators.get()
                                key=|op| op.id
                                children=move |op: Operator| {
                                    view! { <option value=op.name.clone()>{op.name.clone()}</option> }
                                }
                            />
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
