mod canvas;
mod cursor;
mod dom;
mod hooks;
mod pages;
mod prefs;
mod preloader;
mod reveal;
mod sections;

use crate::{
    logging::{log_event, LogLevel},
    site::config::{SiteConfig, PROJECT_HEADER},
};
use cursor::CustomCursor;
use gloo_net::http::Request;
use pages::{Home, NotFound, ServiceDetailPage};
use prefs::PreferencesProvider;
use preloader::Preloader;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/:slug")]
    ServiceDetail { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::ServiceDetail { slug } => html! { <ServiceDetailPage slug={slug} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

async fn fetch_site_config() -> SiteConfig {
    let Ok(response) = Request::get("/api/site-config").send().await else {
        return SiteConfig::default();
    };
    response.json::<SiteConfig>().await.unwrap_or_default()
}

/// Startup reachability check against the hosted backend. Failures are logged
/// and otherwise ignored.
async fn ping_backend() {
    let config = fetch_site_config().await;
    let url = config.ping_url();
    let outcome = Request::get(&url)
        .header(PROJECT_HEADER, &config.backend_project_id)
        .send()
        .await;

    match outcome {
        Ok(response) if response.ok() => log_event(
            LogLevel::Info,
            "backend_ping_complete",
            serde_json::json!({ "url": url, "status": response.status() }),
        ),
        Ok(response) => log_event(
            LogLevel::Info,
            "backend_ping_failed",
            serde_json::json!({ "url": url, "status": response.status() }),
        ),
        Err(error) => log_event(
            LogLevel::Info,
            "backend_ping_failed",
            serde_json::json!({ "url": url, "error": error.to_string() }),
        ),
    }
}

/// Every navigation starts at the top of the page.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let path = use_location().map(|location| location.path().to_string());
    use_effect_with(path, |_| {
        dom::scroll_to_top();
        || ()
    });
    Html::default()
}

/// Page content mounts only once the entrance sequence has finished, so no
/// reveal starts underneath it.
#[function_component(App)]
fn app() -> Html {
    let loading = use_state(|| true);

    use_effect_with((), |_| {
        spawn_local(ping_backend());
        || ()
    });

    let on_complete = {
        let loading = loading.clone();
        Callback::from(move |_| loading.set(false))
    };

    html! {
        <PreferencesProvider>
            <CustomCursor />
            if *loading {
                <Preloader on_complete={on_complete} />
            } else {
                <BrowserRouter>
                    <ScrollToTop />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            }
        </PreferencesProvider>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
