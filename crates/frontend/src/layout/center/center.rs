use crate::domain::a001_guest::ui::list::GuestList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::projections::p900_occupancy_report::ui::list::OccupancyReport;
use crate::system::data_browser::ui::DataBrowserPage;
use crate::system::settings::ui::SettingsPage;
use leptos::prelude::*;

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Guests => view! { <GuestList /> }.into_any(),
        Page::DataBrowser => view! { <DataBrowserPage /> }.into_any(),
        Page::Reports => view! { <OccupancyReport /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

/// Центральная область: активная страница
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || render_page(ctx.active.get())}
        </div>
    }
}
