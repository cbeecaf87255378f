pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Page chrome for every signed-in screen.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              page content                |
/// +------------------------------------------+
/// ```
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
