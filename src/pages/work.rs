use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::catalog::{sorted_projects, tile_label, FilterTab};
use crate::data::{cache_busted, ProjectRecord, SiteContext};
use crate::detail::DetailHandle;

#[function_component(Work)]
pub fn work() -> Html {
    let site = use_context::<SiteContext>().expect("SiteContext provided");
    let detail = use_context::<DetailHandle>().expect("DetailHandle provided");
    let filter = use_state(|| FilterTab::All);

    let tabs = FilterTab::ALL.iter().map(|tab| {
        let tab = *tab;
        let class = if *filter == tab {
            "filter-tab active"
        } else {
            "filter-tab"
        };
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_| filter.set(tab))
        };
        html! {
            <button {class} data-filter={tab.key()} {onclick}>{ tab.label() }</button>
        }
    });

    let sorted = sorted_projects(&site.data.projects);
    let tiles = sorted.iter().enumerate().map(|(index, record)| {
        html! {
            <GridTile
                key={record.id}
                record={(*record).clone()}
                {index}
                visible={filter.matches(&record.category)}
                on_select={detail.on_select.clone()}
                cache_stamp={site.cache_stamp}
            />
        }
    });

    html! {
        <>
            <div class="filter-tabs">{ for tabs }</div>
            <div class="project-grid">{ for tiles }</div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct TileProps {
    pub record: ProjectRecord,
    pub index: usize,
    pub visible: bool,
    pub on_select: Callback<ProjectRecord>,
    pub cache_stamp: u64,
}

#[function_component(GridTile)]
pub fn grid_tile(props: &TileProps) -> Html {
    let revealed = use_state(|| false);
    let image_failed = use_state(|| false);
    let node_ref = use_node_ref();

    // Animate in once the tile scrolls into view; once revealed it stays
    // revealed, and the observer lets go of the element.
    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let observed = observe_reveal(&node_ref, revealed);
            move || {
                if let Some((observer, closure)) = observed {
                    observer.disconnect();
                    drop(closure);
                }
            }
        });
    }

    let placeholder = || {
        html! {
            <div class="image-placeholder" data-title={props.record.title.clone()}>
                <span class="placeholder-org">{ props.record.organization.clone() }</span>
                <span class="placeholder-title">{ props.record.title.clone() }</span>
            </div>
        }
    };
    let media = match props.record.cover() {
        Some(src) if !*image_failed => {
            let onerror = {
                let image_failed = image_failed.clone();
                Callback::from(move |_: Event| image_failed.set(true))
            };
            html! {
                <img
                    class="tile-image"
                    src={cache_busted(src, props.cache_stamp)}
                    alt={props.record.title.clone()}
                    {onerror}
                />
            }
        }
        _ => placeholder(),
    };

    let onclick = {
        let on_select = props.on_select.clone();
        let record = props.record.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(record.clone()))
    };

    let mut class = classes!(
        "grid-item",
        props.record.grid_size.clone().unwrap_or_else(|| "normal".to_string())
    );
    if *revealed {
        class.push("revealed");
    }
    let style = if props.visible {
        format!("transition-delay: {}ms;", props.index * 30)
    } else {
        format!("transition-delay: {}ms; display: none;", props.index * 30)
    };

    html! {
        <article
            {class}
            {style}
            data-category={props.record.category.clone()}
            data-project-id={props.record.id.to_string()}
            ref={node_ref}
            {onclick}
        >
            <div class="image-wrapper">
                { media }
                <div class="image-overlay">
                    <span class="overlay-category">{ tile_label(&props.record) }</span>
                    <h3 class="project-title">{ props.record.title.clone() }</h3>
                    <p class="project-year">{ props.record.year.clone().unwrap_or_default() }</p>
                </div>
            </div>
        </article>
    }
}

type RevealClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_reveal(
    node_ref: &NodeRef,
    revealed: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, RevealClosure)> {
    let element = node_ref.cast::<Element>()?;
    let callback: RevealClosure =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    revealed.set(true);
                    observer.unobserve(&entry.target());
                }
            }
        });
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(&element);
    Some((observer, callback))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::EventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_tile(record: ProjectRecord) -> web_sys::Element {
        let document = web_sys::window()
            .expect("window available")
            .document()
            .expect("document available");
        let root = document.create_element("div").expect("test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("root attached");
        let props = TileProps {
            record,
            index: 0,
            visible: true,
            on_select: Callback::noop(),
            cache_stamp: 1,
        };
        yew::Renderer::<GridTile>::with_root_and_props(root.clone(), props).render();
        root
    }

    #[wasm_bindgen_test]
    async fn broken_cover_swaps_to_the_placeholder() {
        let record = ProjectRecord {
            id: 7,
            title: "Vanishing Cover".to_string(),
            organization: "AUTOMATA".to_string(),
            cover_image: Some("missing/cover.jpg".to_string()),
            ..ProjectRecord::default()
        };
        let root = mount_tile(record);
        TimeoutFuture::new(0).await;

        let img = root
            .query_selector("img.tile-image")
            .unwrap()
            .expect("tile image rendered");
        // The browser fires a non-bubbling error for the bad URL, but the
        // framework delegates listeners at the root, so raise a bubbling one.
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("error", &init).expect("synthetic error event");
        img.dispatch_event(&event).expect("event dispatched");
        TimeoutFuture::new(0).await;

        assert!(root.query_selector("img.tile-image").unwrap().is_none());
        let placeholder = root
            .query_selector(".image-placeholder")
            .unwrap()
            .expect("placeholder rendered");
        assert_eq!(
            placeholder.get_attribute("data-title").as_deref(),
            Some("Vanishing Cover")
        );
        root.remove();
    }
}
