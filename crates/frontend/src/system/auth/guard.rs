use contracts::system::access::Capability;
use leptos::prelude::*;

use super::context::use_session;

/// Renders children only when the session holds `capability`
#[component]
pub fn RequireCapability(capability: Capability, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.can(capability)
            fallback=|| view! {
                <div class="access-denied">
                    <h3>"Akses ditolak"</h3>
                    <p>"Anda tidak memiliki izin untuk membuka halaman ini."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
