#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod handlers;
pub mod view;

pub use handlers::Effect;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

/// Every page is a fresh load: the route and carried query are read once and
/// the page is rendered from them.
#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    use crate::storage::WebStorage;
    use busbook_core::{QueryParams, session};

    let location = use_location();
    let path = location
        .as_ref()
        .map(|loc| crate::paths::strip_base(loc.path()))
        .unwrap_or_default();
    let route = Route::from_path(&path);
    let query = location
        .as_ref()
        .map(|loc| QueryParams::decode(loc.query_str()))
        .unwrap_or_default();
    log::debug!("rendering {route:?}");

    let user = session::current_user(&WebStorage);
    view::render_shell(user, view::render_page(&route, &path, &query, WebStorage))
}
