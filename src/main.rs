use std::rc::Rc;

use gloo_console::error;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod artists;
pub mod catalog;
pub mod data;
pub mod detail;
pub mod lightbox;
pub mod pages;
pub mod routes;

use crate::data::{ProjectRecord, SiteContext, SiteData};
use crate::detail::{DetailHandle, ProjectDetail};
use crate::routes::{switch, Route};

pub fn data_url() -> &'static str {
    option_env!("PORTFOLIO_DATA_URL").unwrap_or("projects-cms.json")
}

// ----- App Root -----

#[function_component(App)]
fn app() -> Html {
    // Captured once; every image URL carries it as a cache-defeating query.
    let cache_stamp = *use_state(|| js_sys::Date::now() as u64);
    let site = use_state(|| None::<Rc<SiteData>>);

    {
        let site = site.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let data = match SiteData::load(data_url(), cache_stamp).await {
                    Ok(data) => data,
                    Err(err) => {
                        error!(format!("failed to load project data: {err}"));
                        SiteData::default()
                    }
                };
                site.set(Some(Rc::new(data)));
            });
            || ()
        });
    }

    let body = match &*site {
        Some(data) => html! { <SiteRoot data={data.clone()} {cache_stamp} /> },
        None => html! { <main class="loading">{ "Loading…" }</main> },
    };

    html! {
        <BrowserRouter>
            { body }
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
struct SiteRootProps {
    data: Rc<SiteData>,
    cache_stamp: u64,
}

#[function_component(SiteRoot)]
fn site_root(props: &SiteRootProps) -> Html {
    let selected = use_state(|| None::<ProjectRecord>);
    let navigator = use_navigator().expect("router navigator");
    let location = use_location();
    let path = location
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    // Switching pages closes any open detail view and returns to the top.
    {
        let selected = selected.clone();
        use_effect_with(path, move |_| {
            selected.set(None);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |record| selected.set(Some(record)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };
    let close_detail = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };
    let on_logo = {
        let selected = selected.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            selected.set(None);
            navigator.push(&Route::Work);
        })
    };

    let site_context = SiteContext {
        data: props.data.clone(),
        cache_stamp: props.cache_stamp,
    };
    let detail_handle = DetailHandle { on_select };
    let overlay = (*selected)
        .clone()
        .map(|record| html! { <ProjectDetail {record} on_close={on_close.clone()} /> });

    html! {
        <ContextProvider<SiteContext> context={site_context}>
        <ContextProvider<DetailHandle> context={detail_handle}>
            <nav class="navbar">
                <a class="logo" href="/" onclick={on_logo}>{ "PORTFOLIO" }</a>
                <ul>
                    <li onclick={close_detail.clone()}>
                        <Link<Route> to={Route::Work} classes="nav-link">{ "Work" }</Link<Route>>
                    </li>
                    <li onclick={close_detail.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">{ "About" }</Link<Route>>
                    </li>
                    <li onclick={close_detail}>
                        <Link<Route> to={Route::Contact} classes="nav-link">{ "Contact" }</Link<Route>>
                    </li>
                </ul>
            </nav>

            <main>
                <Switch<Route> render={switch} />
            </main>

            { overlay }
        </ContextProvider<DetailHandle>>
        </ContextProvider<SiteContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
