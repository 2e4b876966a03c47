use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::SessionContext;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once when the dashboard is shown
    ctx.init_router_integration();

    view! { <Shell /> }
}

#[component]
pub fn App() -> impl IntoView {
    // Session is read from storage exactly once and shared via context
    let session = SessionContext::from_storage();
    provide_context(session);
    provide_context(AppGlobalContext::new());

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
