use contracts::domain::a003_pending_entry::DateRangeQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d401_daily_entries::summary::{summarize, EntrySummary};
use crate::domain::a003_pending_entry::api;
use crate::shared::date_utils::{format_date, today_iso};

/// Daily entries report
#[component]
pub fn DailyEntriesDashboard() -> impl IntoView {
    let today = today_iso();
    let (date_from, set_date_from) = signal(today.clone());
    let (date_to, set_date_to) = signal(today);

    let (data, set_data) = signal(None::<EntrySummary>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        let range = match DateRangeQuery::parse(&date_from.get_untracked(), &date_to.get_untracked()) {
            Ok(range) => range,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::fetch_by_date_range(&range).await {
                Ok(entries) => {
                    log::info!("Report {:?}: {} entries", range, entries.len());
                    set_data.set(Some(summarize(&entries)));
                }
                Err(e) => {
                    log::error!("Failed to load daily report: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    load();

    view! {
        <div class="page report-page">
            <div class="page__header">
                <h2>"Reporte Diario de Entradas"</h2>
                <p>
                    {move || format!("Del {} al {}", format_date(&date_from.get()), format_date(&date_to.get()))}
                </p>
            </div>

            <Flex gap=FlexGap::Medium style="align-items: flex-end; flex-wrap: wrap; margin-bottom: var(--spacing-md);">
                <div class="form-group">
                    <label>"Desde"</label>
                    <input
                        type="date"
                        prop:value=move || date_from.get()
                        on:change=move |ev| set_date_from.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Hasta"</label>
                    <input
                        type="date"
                        prop:value=move || date_to.get()
                        on:change=move |ev| set_date_to.set(event_target_value(&ev))
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    "Consultar"
                </Button>
            </Flex>

            {move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            {move || {
                if loading.get() {
                    return view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                            <Spinner />
                        </Flex>
                    }.into_any();
                }
                match data.get() {
                    Some(summary) => view! { <SummaryView summary=summary /> }.into_any(),
                    None => view! { <div></div> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn SummaryView(summary: EntrySummary) -> impl IntoView {
    let EntrySummary {
        total,
        by_status,
        by_operator,
        unassigned,
        total_weight,
    } = summary;

    view! {
        <Flex gap=FlexGap::Medium style="flex-wrap: wrap; margin-bottom: var(--spacing-md);">
            <Card>
                <p class="kpi__label">"Tarimas"</p>
                <p class="kpi__value">{total}</p>
            </Card>
            <Card>
                <p class="kpi__label">"Sin operador"</p>
                <p class="kpi__value">{unassigned}</p>
            </Card>
            <Card>
                <p class="kpi__label">"Peso neto"</p>
                <p class="kpi__value">{format!("{:.1} kg", total_weight)}</p>
            </Card>
        </Flex>

        <div class="report-page__tables">
            <Card>
                <h3>"Por estatus"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Estatus"</TableHeaderCell>
                            <TableHeaderCell>"Tarimas"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {by_status
                            .into_iter()
                            .map(|row| view! {
                                <TableRow>
                                    <TableCell>{row.status.display_name()}</TableCell>
                                    <TableCell>{row.count}</TableCell>
                                </TableRow>
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </Card>

            <Card>
                <h3>"Por operador"</h3>
                {if by_operator.is_empty() {
                    view! { <p class="muted">"Sin entradas asignadas en el periodo."</p> }.into_any()
                } else {
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Operador"</TableHeaderCell>
                                    <TableHeaderCell>"Tarimas"</TableHeaderCell>
                                    <TableHeaderCell>"Peso neto (kg)"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {by_operator
                                    .into_iter()
                                    .map(|row| view! {
                                        <TableRow>
                                            <TableCell>{row.operator}</TableCell>
                                            <TableCell>{row.count}</TableCell>
                                            <TableCell>{format!("{:.1}", row.weight)}</TableCell>
                                        </TableRow>
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }.into_any()
                }}
            </Card>
        </div>
    }
}
