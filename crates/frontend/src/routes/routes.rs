use crate::dashboards::{DailyEntriesDashboard, MainPanelDashboard};
use crate::domain::a002_pallet_product::ui::LiveEntriesPage;
use crate::domain::a003_pending_entry::ui::{PalletManagementPage, PendingEntriesPage};
use crate::domain::a004_association::ui::AssociationPage;
use crate::layout::AppShell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Signed-in page inside the shell.
macro_rules! protected {
    ($page:ident) => {
        || {
            view! {
                <RequireAuth>
                    <AppShell>
                        <$page />
                    </AppShell>
                </RequireAuth>
            }
        }
    };
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h2>"Página no encontrada"</h2>
            <a href="/dashboard">"Volver al panel"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/signin") view=LoginPage />
                <Route path=path!("/") view=protected!(LiveEntriesPage) />
                <Route path=path!("/dashboard") view=protected!(MainPanelDashboard) />
                <Route path=path!("/entradas-pendientes") view=protected!(PendingEntriesPage) />
                <Route path=path!("/tarimas") view=protected!(PalletManagementPage) />
                <Route path=path!("/camera") view=protected!(AssociationPage) />
                <Route path=path!("/reporte") view=protected!(DailyEntriesDashboard) />
            </Routes>
        </Router>
    }
}
