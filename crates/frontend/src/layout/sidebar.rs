//! Sidebar menu grouped by section; only pages the session may open are listed.

use crate::layout::global_context::use_global_context;
use crate::layout::pages::{visible_pages, GROUPS};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    view! {
        <div class="app-sidebar__content">
            {move || {
                let pages = visible_pages(session.role());
                GROUPS
                    .iter()
                    .filter_map(|group| {
                        let items: Vec<_> = pages.iter().filter(|p| p.group == *group).copied().collect();
                        if items.is_empty() {
                            return None;
                        }
                        Some(view! {
                            <div class="app-sidebar__group">
                                <div class="app-sidebar__group-label">{*group}</div>
                                {items
                                    .into_iter()
                                    .map(|page| {
                                        let key = page.key;
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    ctx.active.get().as_deref() == Some(key)
                                                }
                                                on:click=move |_| ctx.open_page(key)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(page.icon)}
                                                    <span>{page.label}</span>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        })
                    })
                    .collect_view()
            }}
        </div>
    }
}
