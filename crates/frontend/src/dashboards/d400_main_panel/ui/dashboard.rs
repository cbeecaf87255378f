use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

struct PanelCard {
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

const CARDS: [PanelCard; 4] = [
    PanelCard {
        href: "/",
        icon: "antenna",
        title: "Entradas Automáticas",
        description: "Gestión automática de entradas con RFID.",
        accent: "panel-card--green",
    },
    PanelCard {
        href: "/entradas-pendientes",
        icon: "list",
        title: "Gestionar Entradas",
        description: "Consulta y asigna operadores.",
        accent: "panel-card--yellow",
    },
    PanelCard {
        href: "/camera",
        icon: "camera",
        title: "Tarima Faltante",
        description: "Escaneo manual",
        accent: "panel-card--red",
    },
    PanelCard {
        href: "/reporte",
        icon: "report",
        title: "Reporte Diario Entradas",
        description: "Resumen de entradas por estatus y operador.",
        accent: "panel-card--blue",
    },
];

/// Landing page after sign-in.
#[component]
pub fn MainPanelDashboard() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(set_auth_state);
        navigate("/signin", Default::default());
    };

    view! {
        <div class="main-panel">
            <div class="main-panel__header">
                <img src="/logo.png" alt="Logo" class="main-panel__logo" />
                <h1>"PANEL DE ENTRADAS AUTOMÁTICAS"</h1>
                {move || auth_state.get().user_name().map(|name| view! {
                    <p class="main-panel__welcome">"Bienvenido, " <span>{name}</span></p>
                })}
                <button class="btn-danger" on:click=logout>
                    {icon("log-out")}
                    "Cerrar Sesión"
                </button>
            </div>

            <div class="main-panel__grid">
                {CARDS
                    .iter()
                    .map(|card| view! {
                        <a href=card.href class=format!("panel-card {}", card.accent)>
                            <Card>
                                <div class="panel-card__icon">{icon(card.icon)}</div>
                                <h2>{card.title}</h2>
                                <p>{card.description}</p>
                            </Card>
                        </a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
