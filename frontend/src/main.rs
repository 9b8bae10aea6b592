use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod i18n;
mod appwrite {
    pub mod client;
    pub mod error;
    pub mod query;
    pub mod storage;
    #[cfg(test)]
    pub mod memory;
}
mod services {
    pub mod models;
    pub mod site_data;
}
mod state {
    pub mod carousel;
    pub mod downloads;
    pub mod figures;
    pub mod forms;
    pub mod overlay;
    pub mod remote;
    pub mod toasts;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod download;
    pub mod features;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod how_it_works;
    pub mod lead_capture;
    pub mod pricing;
    pub mod testimonials;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use config::AppwriteConfig;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    AppwriteConfig::from_build_env().warn_if_incomplete();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
