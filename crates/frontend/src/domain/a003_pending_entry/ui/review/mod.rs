use contracts::domain::a003_pending_entry::EntryReview;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_pending_entry::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

const LOAD_FAILED: &str =
    "No se pudo obtener la información. Verifica la conexión con el servidor.";

/// Operator batches waiting for review.
#[component]
pub fn PendingEntriesPage() -> impl IntoView {
    let (entries, set_entries) = signal(Vec::<EntryReview>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_reviews().await {
                Ok(list) => set_entries.set(list),
                Err(e) => {
                    log!("Failed to load pending entries: {}", e);
                    set_error.set(Some(LOAD_FAILED.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    load();

    view! {
        <div class="page pending-entries">
            <div class="page__header">
                <h2>"Entradas Pendientes"</h2>
                <p>
                    "Actualmente tienes "
                    <strong>{move || entries.get().len()}</strong>
                    " tareas por completar."
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-banner">
                    {icon("alert")}
                    <strong>"Error"</strong>
                    <span>{e}</span>
                </div>
            })}

            {move || {
                if loading.get() {
                    (0..3)
                        .map(|_| view! {
                            <div class="skeleton-card">
                                <div class="skeleton-line skeleton-line--short"></div>
                                <div class="skeleton-line"></div>
                            </div>
                        })
                        .collect_view()
                        .into_any()
                } else if error.get().is_none() {
                    view! {
                        <div class="review-grid">
                            <For
                                each=move || entries.get()
                                key=|e| e.id
                                children=move |entry: EntryReview| view! { <ReviewCard entry=entry /> }
                            />
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div></div> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ReviewCard(entry: EntryReview) -> impl IntoView {
    let codes = entry
        .traceability_codes()
        .into_iter()
        .map(|code| code.to_string())
        .map(|code| view! { <Badge appearance=BadgeAppearance::Outline>{code}</Badge> })
        .collect_view();
    let operator = entry.operator.clone();
    let status = entry.status.clone();
    let epc_count = entry.epc_count;
    let created = format_datetime(&entry.created_at);

    view! {
        <Card>
            <div class="review-card__header">"Operador: " {operator}</div>
            <div class="review-card__body">
                <p><strong>"Estatus: "</strong>{status}</p>
                <p><strong>"Número de Tarimas: "</strong>{epc_count}</p>
                <Flex gap=FlexGap::Small style="flex-wrap: wrap;">{codes}</Flex>
                <p class="review-card__time">"Creado: " {created}</p>
            </div>
        </Card>
    }
}
