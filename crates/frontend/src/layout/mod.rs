pub mod global_context;
pub mod pages;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use global_context::use_global_context;
use pages::{find_page, render_page, resolve_page};
use sidebar::Sidebar;
use top_header::TopHeader;

use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireCapability;

/// Main application shell.
///
/// ```text
/// +------------------------------------+
/// |             TopHeader              |
/// +------------------------------------+
/// |  Sidebar  |        Content         |
/// +------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    // Keep the active page one the current role may open
    Effect::new(move |_| {
        let requested = ctx.active.get();
        let resolved = resolve_page(requested.as_deref(), session.role());
        if resolved != requested.as_deref() {
            ctx.active.set(resolved.map(str::to_string));
        }
    });

    let content = move || {
        let key = ctx.active.get();
        match key.as_deref().and_then(find_page) {
            Some(page) => view! {
                <RequireCapability capability=page.capability>
                    {render_page(page.key)}
                </RequireCapability>
            }
            .into_any(),
            None => view! {
                <div class="access-denied">
                    <p>"Tidak ada halaman yang dapat diakses oleh peran Anda."</p>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </div>
                <div class="app-main">
                    <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
                        {content}
                    </div>
                </div>
            </div>
        </div>
    }
}
