//! Live entries: pallets read by the antenna, waiting for an operator.

use contracts::domain::a001_operator::{find_by_rfid, Operator};
use contracts::domain::a002_pallet_product::ProductData;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_operator::api::fetch_operators;
use crate::domain::a002_pallet_product::api;
use crate::shared::api_utils::remote;
use crate::shared::date_utils::today_long_es;
use crate::shared::icons::icon;
use crate::shared::modal::{AlertDialog, ConfirmDialog, Notice};
use crate::shared::product_store::{use_product_store, ProductStore};
use crate::shared::push::{connect, PushHandle};

const STOP_REFUSED: &str =
    "Todos los productos deben tener un operador asignado antes de detener las entradas.";

#[component]
pub fn LiveEntriesPage() -> impl IntoView {
    let store = use_product_store();
    let (operators, set_operators) = signal(Vec::<Operator>::new());
    let assign_notice = RwSignal::new(None::<Notice>);
    let reader_notice = RwSignal::new(None::<Notice>);
    let (restarting, set_restarting) = signal(false);
    let stop_open = RwSignal::new(false);

    spawn_local(async move {
        match fetch_operators().await {
            Ok(list) => set_operators.set(list),
            Err(e) => log!("Error al obtener operadores: {}", e),
        }
    });

    if store.get_products().is_empty() {
        spawn_local(async move {
            match api::fetch_latest_entry().await {
                Ok(Some(latest)) if !store.contains_epc(latest.epc()) => store.add(latest),
                Ok(_) => {}
                Err(e) => log!("Error al obtener la última entrada: {}", e),
            }
        });
    }

    let push = StoredValue::new_local(None::<PushHandle>);
    let cfg = remote();
    push.set_value(Some(connect(cfg.hub_url, cfg.hub_method, move |data| {
        on_pushed_product(store, data)
    })));
    on_cleanup(move || {
        if let Some(handle) = push.try_update_value(|h| h.take()).flatten() {
            handle.close();
        }
    });

    let restart_antenna = move |_| {
        set_restarting.set(true);
        reader_notice.set(None);
        spawn_local(async move {
            let notice = match api::restart_reader().await {
                Ok(message) => Notice::success("¡Éxito!", message),
                Err(error) => Notice::error("Error", error),
            };
            reader_notice.set(Some(notice));
            set_restarting.set(false);
        });
    };

    let stop_entries = move |_| {
        if store.pending_count() > 0 {
            assign_notice.set(Some(Notice::error("Error", STOP_REFUSED)));
        } else {
            stop_open.set(true);
        }
    };

    let confirm_stop = Callback::new(move |_| {
        log!("Stopping entries, clearing {} pallets", store.get_products().len());
        store.reset();
        assign_notice.set(Some(Notice::success(
            "Entradas detenidas",
            "Proceso de entradas detenido y antena desactivada con éxito.",
        )));
    });

    view! {
        <div class="live-page">
            <div class="live-page__list">
                <div class="live-page__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=restart_antenna
                        disabled=Signal::derive(move || restarting.get())
                    >
                        {move || if restarting.get() { "Reiniciando..." } else { "REINICIAR ANTENA" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=stop_entries>
                        "DETENER ENTRADAS"
                    </Button>
                </div>

                <h2 class="live-page__title">"Productos Entrantes"</h2>
                <ProductCards store=store />
            </div>

            <div class="live-page__detail">
                <p class="live-page__date">{today_long_es()}</p>
                <ProductDetail store=store operators=operators notice=assign_notice />
            </div>

            <AlertDialog notice=assign_notice auto_close_ms=3000 />
            <AlertDialog notice=reader_notice />
            <ConfirmDialog
                open=stop_open
                title="Detener entradas"
                message="¿Seguro que deseas detener el proceso de entradas? Se limpiará la lista actual."
                on_confirm=confirm_stop
                confirm_label="Detener"
            />
        </div>
    }
}

/// Adds a pallet from the push channel and looks up who already claimed it.
fn on_pushed_product(store: ProductStore, data: ProductData) {
    if store.contains_epc(data.epc()) {
        log!("Tarima {} ya está en la lista", data.epc());
        return;
    }
    let id = data.id().to_string();
    let epc = data.epc().to_string();
    store.add(data);

    spawn_local(async move {
        match api::fetch_operator_by_rfid(&epc).await {
            Ok(Some(name)) => store.update_operator(&id, &name),
            Ok(None) => {}
            Err(e) => log!("Error al obtener el operador de {}: {}", epc, e),
        }
    });
}

#[component]
fn ProductCards(store: ProductStore) -> impl IntoView {
    view! {
        <Show
            when=move || !store.is_empty()
            fallback=|| view! { <p class="live-page__empty">"Esperando lecturas de la antena..."</p> }
        >
            <div class="product-cards">
                <For
                    each=move || store.products()
                    key=|p| (p.product.id.clone(), p.product.operator.clone())
                    children=move |p: ProductData| {
                        let class = if p.product.is_assigned() {
                            "product-card product-card--assigned"
                        } else {
                            "product-card product-card--pending"
                        };
                        let id = p.product.id.clone();
                        let is_selected = move || {
                            store.selected().map(|s| s.product.id == id).unwrap_or(false)
                        };
                        let name = p.product.name.clone();
                        let epc = p.product.epc.clone();
                        let operator = p.product.operator_label().to_string();
                        view! {
                            <div
                                class=class
                                class:product-card--selected=is_selected
                                on:click=move |_| store.select_manual(p.clone())
                            >
                                <h3>{name}</h3>
                                <p>"EPC: " {epc}</p>
                                <p>"Operador: " {operator}</p>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn ProductDetail(
    store: ProductStore,
    operators: ReadSignal<Vec<Operator>>,
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    let operator_choice = RwSignal::new(String::new());
    let (assigning, set_assigning) = signal(false);

    // A pending choice belongs to the pallet it was made for.
    Effect::new(move |prev: Option<Option<String>>| {
        let current = store.selected().map(|s| s.product.id);
        if prev.is_some_and(|p| p != current) {
            operator_choice.set(String::new());
        }
        current
    });

    let confirm = move |_| {
        let Some(selected) = store.selected_untracked() else {
            return;
        };
        let rfid = operator_choice.get_untracked();
        if rfid.is_empty() {
            return;
        }
        let roster = operators.get_untracked();
        set_assigning.set(true);

        spawn_local(async move {
            let result = match api::register_antenna_record(selected.epc(), &rfid).await {
                Ok(()) => find_by_rfid(&roster, &rfid)
                    .map(|op| op.name.clone())
                    .ok_or_else(|| "No se encontró el operador en la lista local.".to_string()),
                Err(e) => Err(e),
            };
            match result {
                Ok(name) => {
                    store.mark_assigned(selected.id(), &name);
                    notice.set(Some(Notice::success(
                        "Éxito",
                        "Operador asignado correctamente.",
                    )));
                }
                Err(e) => {
                    log!("Error al asignar operador: {}", e);
                    notice.set(Some(Notice::error("Error", e)));
                }
            }
            operator_choice.set(String::new());
            set_assigning.set(false);
        });
    };

    view! {
        {move || match store.selected() {
            None => view! {
                <div class="product-detail product-detail--empty">
                    <p>"Seleccione un producto para ver los detalles"</p>
                </div>
            }.into_any(),
            Some(data) => {
                let p = data.product;
                let assigned = p.is_assigned();
                let image = if p.image_url.is_empty() { "/placeholder.svg".to_string() } else { p.image_url.clone() };
                view! {
                    <div class="product-detail">
                        <h3 class="product-detail__name">{p.name.clone()}</h3>
                        <div class="product-detail__body">
                            <div class="product-detail__media">
                                <img src=image alt=p.name.clone() />
                                <DetailTile label="CÓDIGO DE PRODUCTO" value=p.clave_producto.clone() />
                            </div>
                            <div class="product-detail__facts">
                                <div class="product-detail__grid">
                                    <DetailTile label="PESO NETO" value=format!("{} KILOGRAMOS", p.net_weight) />
                                    <DetailTile label="PIEZAS" value=format!("{} {}", p.pieces, p.unit_of_measure) />
                                    <DetailTile label="ÁREA" value=p.area.clone() />
                                    <DetailTile label="PRINTCARD" value=p.print_card.clone() />
                                </div>

                                <div class="product-detail__operator">
                                    <p class="product-detail__label">"OPERADOR"</p>
                                    {if assigned {
                                        view! {
                                            <div class="operator-assigned">
                                                <span>{p.operator.clone()}</span>
                                                {icon("check")}
                                            </div>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <div class="operator-picker">
                                                <Select value=operator_choice>
                                                    <option value="">"Seleccionar operador"</option>
                                                    <For
                                                        each=move || operators.get()
                                                        key=|op| op.id
                                                        children=move |op: Operator| {
                                                            view! { <option value=op.rfid.clone()>{op.name.clone()}</option> }
                                                        }
                                                    />
                                                </Select>
                                                <Show when=move || !operator_choice.get().is_empty()>
                                                    <Button
                                                        appearance=ButtonAppearance::Primary
                                                        on_click=confirm
                                                        disabled=Signal::derive(move || assigning.get())
                                                    >
                                                        {move || if assigning.get() { "Asignando..." } else { "Confirmar selección" }}
                                                    </Button>
                                                </Show>
                                            </div>
                                        }.into_any()
                                    }}
                                </div>

                                <div class=if assigned { "assignment-state assignment-state--ok" } else { "assignment-state assignment-state--error" }>
                                    {icon(if assigned { "check" } else { "alert" })}
                                    <strong>{if assigned { "Éxito" } else { "Error" }}</strong>
                                    <p>
                                        "Estado: "
                                        {if assigned {
                                            "El operador está asignado correctamente."
                                        } else {
                                            "No se ha asignado un operador."
                                        }}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}

#[component]
fn DetailTile(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail-tile">
            <p class="detail-tile__label">{label}</p>
            <p class="detail-tile__value">{value}</p>
        </div>
    }
}
