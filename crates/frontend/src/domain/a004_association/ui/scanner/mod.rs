//! Manual pallet association by scanning the pallet's QR label.

use chrono::{Datelike, Local};
use contracts::domain::a001_operator::{find_by_name, Operator};
use contracts::domain::a004_association::RecentAssociation;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_operator::api::fetch_operators;
use crate::domain::a004_association::api::associate_pallet;
use crate::domain::a004_association::recent::push_recent;
use crate::shared::date_utils::now_time;
use crate::shared::icons::icon;
use crate::shared::modal::{AlertDialog, Notice};
use crate::shared::qr_scanner::QrScanner;
use crate::system::auth::context::use_auth;

const SCANNER_ID: &str = "reader";

/// Stops and drops the running scanner, if any.
async fn stop_scanner(scanner: StoredValue<Option<QrScanner>, LocalStorage>) {
    let running = scanner.try_update_value(|s| s.take()).flatten();
    if let Some(running) = running {
        if let Err(e) = running.stop().await {
            log!("Error al detener escáner: {}", e);
        }
    }
}

#[component]
pub fn AssociationPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let operator = RwSignal::new(None::<Operator>);
    let (loading_operators, set_loading_operators) = signal(true);
    let (busy, set_busy) = signal(false);
    let (scanning, set_scanning) = signal(false);
    let (last_qr, set_last_qr) = signal(None::<String>);
    let recent = RwSignal::new(Vec::<RecentAssociation>::new());
    let notice = RwSignal::new(None::<Notice>);
    let scanner = StoredValue::new_local(None::<QrScanner>);

    // Roster match against the signed-in user; re-runs once the session is restored.
    Effect::new(move |_| {
        let Some(user_name) = auth_state.get().user_name() else {
            return;
        };
        set_loading_operators.set(true);
        spawn_local(async move {
            match fetch_operators().await {
                Ok(list) => match find_by_name(&list, &user_name) {
                    Some(op) => operator.set(Some(op.clone())),
                    None => {
                        operator.set(None);
                        notice.set(Some(Notice::info(
                            "Operador no encontrado",
                            "No se encontró un operador que coincida con tu usuario. Contacta al administrador.",
                        )));
                    }
                },
                Err(e) => {
                    log!("Error al obtener operadores: {}", e);
                    notice.set(Some(Notice::error(
                        "Error de conexión",
                        "No se pudieron cargar los operadores. Intenta nuevamente.",
                    )));
                }
            }
            set_loading_operators.set(false);
        });
    });

    let associate = move |qr_text: String| {
        let Some(op) = operator.get_untracked() else {
            notice.set(Some(Notice::error(
                "Operador no detectado",
                "No se pudo asociar tu usuario con un operador válido. Contacta al administrador.",
            )));
            return;
        };
        set_busy.set(true);
        set_last_qr.set(Some(qr_text.clone()));

        spawn_local(async move {
            match associate_pallet(&qr_text, &op.rfid).await {
                Ok(()) => {
                    recent.update(|list| {
                        push_recent(
                            list,
                            RecentAssociation {
                                qr: qr_text,
                                operator: op.name.clone(),
                                timestamp: now_time(),
                            },
                        )
                    });
                    notice.set(Some(Notice::success(
                        "¡Asociación exitosa!",
                        "La tarima ha sido asociada correctamente.",
                    )));
                }
                Err(e) => {
                    log!("Error al asociar tarima: {}", e);
                    notice.set(Some(Notice::error(
                        "Error de asociación",
                        "Hubo un problema al asociar la tarima. Verifica la conexión e intenta nuevamente.",
                    )));
                }
            }
            set_busy.set(false);
        });
    };

    let start_camera = move |_| {
        set_scanning.set(true);
        spawn_local(async move {
            // Let the layout settle before the library measures the container.
            TimeoutFuture::new(300).await;
            if !scanning.get_untracked() {
                return;
            }

            let on_decode = move |text: String| {
                spawn_local(async move {
                    stop_scanner(scanner).await;
                    set_scanning.set(false);
                    associate(text);
                });
            };

            match QrScanner::start(SCANNER_ID, on_decode).await {
                Ok(running) => {
                    if scanning.get_untracked() {
                        scanner.set_value(Some(running));
                    } else if let Err(e) = running.stop().await {
                        log!("Error al detener escáner: {}", e);
                    }
                }
                Err(e) => {
                    log!("Error al iniciar escaneo: {}", e);
                    set_scanning.set(false);
                    notice.set(Some(Notice::error(
                        "Error de cámara",
                        "No se pudo iniciar la cámara. Verifica los permisos del navegador.",
                    )));
                }
            }
        });
    };

    let stop_camera = move |_| {
        set_scanning.set(false);
        spawn_local(stop_scanner(scanner));
    };

    on_cleanup(move || {
        let running = scanner.try_update_value(|s| s.take()).flatten();
        if let Some(running) = running {
            spawn_local(async move {
                let _ = running.stop().await;
            });
        }
    });

    view! {
        <div class="page association-page">
            <div class="page__header">
                <Flex gap=FlexGap::Small>
                    <a class="nav-button" href="/dashboard">"Regresar al Dashboard"</a>
                    <a class="nav-button" href="/entradas-pendientes">"Gestionar Tarimas"</a>
                </Flex>
                <p class="welcome">
                    {move || match auth_state.get().user_name() {
                        Some(name) => format!("Bienvenido, {}", name),
                        None => "Cargando usuario...".to_string(),
                    }}
                </p>
                <h1>"Asociación de Tarima"</h1>
            </div>

            <div class="association-page__body">
                <div class="association-page__main">
                    <Card>
                        <h3 class="card-title">{icon("user")} "Operador Actual"</h3>
                        {move || {
                            if loading_operators.get() {
                                view! { <Spinner /> }.into_any()
                            } else if let Some(op) = operator.get() {
                                view! {
                                    <div class="operator-ok">
                                        {icon("check")}
                                        <div>
                                            <p class="operator-ok__name">{op.name}</p>
                                            <p>"Operando como usuario activo en el sistema"</p>
                                        </div>
                                    </div>
                                }.into_any()
                            } else {
                                view! {
                                    <div class="operator-waiting">
                                        "Esperando identificación de operador..."
                                    </div>
                                }.into_any()
                            }
                        }}
                    </Card>

                    <Card>
                        <h3 class="card-title">{icon("camera")} "Escanear Código QR"</h3>
                        <div class="scanner-box">
                            <div id=SCANNER_ID class="scanner-box__view"></div>
                            <Show
                                when=move || scanning.get()
                                fallback=move || view! {
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=start_camera
                                        disabled=Signal::derive(move || operator.get().is_none() || busy.get())
                                    >
                                        {move || if busy.get() { "Procesando..." } else { "Activar Cámara" }}
                                    </Button>
                                }
                            >
                                <Button appearance=ButtonAppearance::Subtle on_click=stop_camera>
                                    {icon("x")}
                                </Button>
                            </Show>
                        </div>

                        {move || last_qr.get().map(|qr| view! {
                            <div class="scanner-result">
                                <p>"Código QR Detectado:"</p>
                                <code>{qr}</code>
                            </div>
                        })}
                    </Card>
                </div>

                <div class="association-page__side">
                    <Card>
                        <h3 class="card-title">"Asociaciones Recientes"</h3>
                        <Show
                            when=move || !recent.get().is_empty()
                            fallback=|| view! { <p class="muted">"Las asociaciones realizadas aparecerán aquí"</p> }
                        >
                            <For
                                each=move || recent.get().into_iter().enumerate()
                                key=|(idx, a)| (*idx, a.qr.clone(), a.timestamp.clone())
                                children=|(_, a): (usize, RecentAssociation)| view! {
                                    <div class="recent-item">
                                        <p class="muted">{a.timestamp}</p>
                                        <p>{a.operator}</p>
                                        <code>{a.qr}</code>
                                    </div>
                                }
                            />
                        </Show>
                    </Card>
                </div>
            </div>

            <div class="page__footer">
                {format!("Sistema de Asociación de Tarimas • {}", Local::now().year())}
            </div>

            <AlertDialog notice=notice auto_close_ms=3000 />
        </div>
    }
}
