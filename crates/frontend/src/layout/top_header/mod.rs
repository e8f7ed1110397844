//! TopHeader component - application top bar with branding from settings.

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Navigation ausblenden" } else { "Navigation einblenden" }
                >
                    {icon("panel-left")}
                </button>
                {move || {
                    let logo = ctx.branding_logo.get();
                    (!logo.is_empty()).then(|| view! {
                        <img class="top-header__logo" src=logo alt="Logo" />
                    })
                }}
                <span class="top-header__title">{move || ctx.branding_title.get()}</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="Einstellungen"
                    on:click=move |_| ctx.open_page(Page::Settings)
                >
                    {icon("settings")}
                </button>
            </div>
        </div>
    }
}
