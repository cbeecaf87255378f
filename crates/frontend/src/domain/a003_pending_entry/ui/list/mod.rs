pub mod state;

use self::state::{create_state, FilterMode, PalletQuery};
use crate::domain::a003_pending_entry::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal::{AlertDialog, Notice};
use contracts::domain::a003_pending_entry::PendingEntry;
use contracts::enums::PalletStatus;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn status_badge_color(status: PalletStatus) -> BadgeColor {
    match status {
        PalletStatus::Received => BadgeColor::Informative,
        PalletStatus::LocationAssigned => BadgeColor::Brand,
        PalletStatus::RegisteredInErp => BadgeColor::Success,
        PalletStatus::Reprocessing => BadgeColor::Warning,
        PalletStatus::Unknown(_) => BadgeColor::Subtle,
    }
}

/// Pallet management: pending entries by stage or by date, with rework action.
#[component]
pub fn PalletManagementPage() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let updating = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<Notice>);

    let load_items = move || {
        let query = match state.with_untracked(|s| s.query()) {
            Ok(q) => q,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            log!("Loading pallets: {:?}", query);
            let result = match query {
                PalletQuery::Status(status) => api::fetch_by_status(status).await,
                PalletQuery::Range(range) => api::fetch_by_date_range(&range).await,
            };
            match result {
                Ok(items) => {
                    state.update(|s| {
                        s.items = items;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log!("Failed to load pallets: {}", e);
                    set_error.set(Some(format!("No se pudieron cargar las tarimas: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    load_items();

    let mark_reprocessing = move |entry: PendingEntry| {
        let rfid = entry.rfid().to_string();
        updating.set(Some(rfid.clone()));
        spawn_local(async move {
            match api::update_status(&rfid, PalletStatus::Reprocessing).await {
                Ok(()) => {
                    notice.set(Some(Notice::success(
                        "Reproceso",
                        format!("Tarima {} enviada a reproceso.", entry.pallet_number),
                    )));
                    load_items();
                }
                Err(e) => {
                    log!("Status update failed for {}: {}", rfid, e);
                    notice.set(Some(Notice::error("Error", e)));
                }
            }
            updating.set(None);
        });
    };

    let mode = move || state.with(|s| s.mode);

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Gestión de Tarimas"</h2>
            </div>

            <div class="filter-panel">
                <Flex gap=FlexGap::Medium style="align-items: flex-end; flex-wrap: wrap;">
                    <div class="form-group">
                        <label>"Filtrar por"</label>
                        <select
                            prop:value=move || state.with(|s| s.mode.as_str())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.mode = FilterMode::from_value(&value));
                            }
                        >
                            <option value="status">"Estatus"</option>
                            <option value="range">"Rango de fechas"</option>
                        </select>
                    </div>

                    <Show
                        when=move || mode() == FilterMode::ByStatus
                        fallback=move || view! {
                            <div class="form-group">
                                <label>"Desde"</label>
                                <input
                                    type="date"
                                    prop:value=move || state.with(|s| s.date_from.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.date_from = value);
                                    }
                                />
                            </div>
                            <div class="form-group">
                                <label>"Hasta"</label>
                                <input
                                    type="date"
                                    prop:value=move || state.with(|s| s.date_to.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.date_to = value);
                                    }
                                />
                            </div>
                        }
                    >
                        <div class="form-group">
                            <label>"Estatus"</label>
                            <select
                                prop:value=move || state.with(|s| s.status.code().to_string())
                                on:change=move |ev| {
                                    if let Ok(code) = event_target_value(&ev).parse::<i32>() {
                                        state.update(|s| s.status = PalletStatus::from(code));
                                    }
                                }
                            >
                                {PalletStatus::all()
                                    .into_iter()
                                    .map(|st| view! {
                                        <option value=st.code().to_string()>{st.display_name()}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </Show>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        "Buscar"
                    </Button>
                </Flex>
            </div>

            {move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                        <Spinner />
                        "Cargando tarimas..."
                    </Flex>
                }
            >
                <Show
                    when=move || state.with(|s| !s.items.is_empty())
                    fallback=move || state.with(|s| s.is_loaded).then(|| view! {
                        <p class="page__empty">"No hay tarimas para el filtro seleccionado."</p>
                    })
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"No. Tarima"</TableHeaderCell>
                                <TableHeaderCell>"Producto"</TableHeaderCell>
                                <TableHeaderCell>"Trazabilidad"</TableHeaderCell>
                                <TableHeaderCell>"Operador"</TableHeaderCell>
                                <TableHeaderCell>"Estatus"</TableHeaderCell>
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|e| (e.id, e.status.code())
                                children=move |entry: PendingEntry| {
                                    let product = entry
                                        .product
                                        .as_ref()
                                        .map(|p| format!("{} {}", p.clave_producto, p.nombre_producto))
                                        .unwrap_or_default();
                                    let rfid = entry.rfid().to_string();
                                    let busy = move || updating.get().as_deref() == Some(rfid.as_str());
                                    let can_rework = entry.status.can_mark_reprocessing();
                                    let row = entry.clone();
                                    let pallet_number = entry.pallet_number.clone();
                                    let traceability = entry.traceability.clone();
                                    let operator = entry.operator_label().to_string();
                                    let status = entry.status;
                                    let created = format_datetime(&entry.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>{pallet_number}</TableCell>
                                            <TableCell>{product}</TableCell>
                                            <TableCell>{traceability}</TableCell>
                                            <TableCell>{operator}</TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=status_badge_color(status)>
                                                    {status.display_name()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>{created}</TableCell>
                                            <TableCell>
                                                {can_rework.then(|| view! {
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        disabled=Signal::derive(busy.clone())
                                                        on_click=move |_| mark_reprocessing(row.clone())
                                                    >
                                                        "Reproceso"
                                                    </Button>
                                                })}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </Show>

            <AlertDialog notice=notice auto_close_ms=3000 />
        </div>
    }
}
