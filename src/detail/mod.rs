pub mod sections;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

use crate::data::{cache_busted, ProjectRecord, SiteContext};
use crate::lightbox::Lightbox;
use self::sections::{detail_sections, SectionCtx};

/// Handed to the grid through a context so tiles can open the detail view.
#[derive(Clone, PartialEq)]
pub struct DetailHandle {
    pub on_select: Callback<ProjectRecord>,
}

/// The lightbox sequence: hero cover first, then grid images in order.
/// Indices line up with the ones the gallery section emits.
pub fn gallery_images(record: &ProjectRecord, cache_stamp: u64) -> Vec<String> {
    record
        .cover()
        .into_iter()
        .chain(record.images.iter().map(String::as_str))
        .map(|src| cache_busted(src, cache_stamp))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub record: ProjectRecord,
    pub on_close: Callback<()>,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &Props) -> Html {
    let site = use_context::<SiteContext>().expect("SiteContext provided");
    let lightbox_index = use_state(|| None::<usize>);
    let panel_ref = use_node_ref();

    // Lock page scroll while the overlay is up and start the panel at the
    // top; a different record gets a fresh scroll position and lightbox.
    {
        let panel_ref = panel_ref.clone();
        let lightbox_index = lightbox_index.clone();
        use_effect_with(props.record.id, move |_| {
            if let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            {
                let _ = body.style().set_property("overflow", "hidden");
            }
            if let Some(panel) = panel_ref.cast::<web_sys::Element>() {
                panel.set_scroll_top(0);
            }
            lightbox_index.set(None);
            || {
                if let Some(body) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.body())
                {
                    let _ = body.style().remove_property("overflow");
                }
            }
        });
    }

    // Escape closes the detail view, unless the lightbox is up — then its
    // own listener owns the key.
    {
        let on_close = props.on_close.clone();
        let lightbox_open = lightbox_index.is_some();
        use_effect_with(lightbox_open, move |open| {
            let listener = (!*open).then(|| {
                let window = web_sys::window().expect("window available");
                EventListener::new(&window, "keydown", move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        if event.key() == "Escape" {
                            on_close.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_image_click = {
        let lightbox_index = lightbox_index.clone();
        Callback::from(move |index: usize| lightbox_index.set(Some(index)))
    };
    let ctx = SectionCtx {
        record: &props.record,
        links: &site.data.artist_links,
        cache_stamp: site.cache_stamp,
        on_image_click,
    };
    let sections = detail_sections(&ctx);

    let images = gallery_images(&props.record, site.cache_stamp);
    let close_lightbox = {
        let lightbox_index = lightbox_index.clone();
        Callback::from(move |_| lightbox_index.set(None))
    };
    let lightbox = (*lightbox_index).map(|start| {
        html! { <Lightbox images={images.clone()} {start} on_close={close_lightbox.clone()} /> }
    });

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="project-detail active" ref={panel_ref}>
            <button class="close-project" onclick={on_close}>{ "×" }</button>
            <div class="project-content">
                { for sections.into_iter() }
            </div>
            { lightbox }
        </div>
    }
}
