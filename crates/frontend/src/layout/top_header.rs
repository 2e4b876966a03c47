//! Top bar: sidebar toggle, brand, branch switcher, user and logout.

use contracts::domain::a001_branch::{Branch, BranchRef};
use contracts::system::access::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::remote_list::RemoteList;
use crate::system::auth::context::use_session;

const ALL_BRANCHES: &str = "";

/// Branch switcher for super admins; changing it rescopes every list
#[component]
fn BranchSwitcher() -> impl IntoView {
    let session = use_session();
    let branches = RemoteList::<Branch>::new("cabang");
    let client = session.client();
    branches.load(async move { client.fetch_all::<Branch>(None).await });

    let selected = move || {
        session
            .branch
            .get()
            .map(|b| b.id_cabang.to_string())
            .unwrap_or_default()
    };

    let on_change = move |value: String| {
        let choice = value
            .parse::<i64>()
            .ok()
            .and_then(|id| branches.state.with_untracked(|s| s.items.iter().find(|b| b.id_cabang == id).map(Branch::to_ref)));
        log::info!(
            "branch scope -> {}",
            choice.as_ref().map(|b: &BranchRef| b.nama_cabang.as_str()).unwrap_or("semua")
        );
        session.select_branch(choice);
    };

    view! {
        <div class="top-header__branch">
            {icon("building")}
            <select
                class="form__select form__select--compact"
                prop:value=selected
                on:change=move |ev| on_change(event_target_value(&ev))
            >
                <option value=ALL_BRANCHES>"Semua Cabang"</option>
                {move || {
                    branches
                        .items()
                        .into_iter()
                        .map(|b| {
                            let id = b.id_cabang.to_string();
                            let is_selected = {
                                let id = id.clone();
                                move || selected() == id
                            };
                            view! { <option value=id selected=is_selected>{b.nama_cabang}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    let logout = move |_| {
        spawn_local(async move {
            let _ = session.sign_out().await;
        });
    };

    let user_name = move || {
        session
            .user
            .get()
            .map(|u| u.display_name())
            .unwrap_or_else(|| "Tamu".to_string())
    };
    let role_name = move || {
        session
            .role()
            .map(|r| r.display_name())
            .unwrap_or("-")
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Sembunyikan menu" } else { "Tampilkan menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"GoChicken Dashboard"</span>
            </div>

            <div class="top-header__actions">
                {move || if session.can(Capability::SwitchBranch) {
                    view! { <BranchSwitcher /> }.into_any()
                } else {
                    view! {
                        <div class="top-header__branch">
                            {icon("building")}
                            <span>{move || session.branch_label()}</span>
                        </div>
                    }
                    .into_any()
                }}

                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                    <span class="badge badge--neutral">{role_name}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Keluar">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
