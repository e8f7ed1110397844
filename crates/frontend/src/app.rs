use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::settings::api::load_branding;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    // Заголовок и логотип приходят из настроек
    leptos::task::spawn_local(load_branding(ctx));

    view! {
        <Shell left=|| view! { <Sidebar /> }.into_any() />
    }
}
