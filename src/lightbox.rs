use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

const FADE_MS: u32 = 150;

/// Cyclic successor. Callers guarantee `len >= 1`.
pub(crate) fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Cyclic predecessor. Callers guarantee `len >= 1`.
pub(crate) fn prev_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub images: Vec<String>,
    pub start: usize,
    pub on_close: Callback<()>,
}

/// Full-screen image carousel. A fresh instance is mounted every time the
/// detail view opens one, and its keydown listener dies with it.
#[function_component(Lightbox)]
pub fn lightbox(props: &Props) -> Html {
    let index = use_state(|| props.start);
    let fading = use_state(|| false);

    let len = props.images.len();
    let current = (*index).min(len.saturating_sub(1));

    // Fade out, swap the URL, fade back in.
    let show = {
        let index = index.clone();
        let fading = fading.clone();
        Callback::from(move |target: usize| {
            fading.set(true);
            let index = index.clone();
            let fading = fading.clone();
            Timeout::new(FADE_MS, move || {
                index.set(target);
                fading.set(false);
            })
            .forget();
        })
    };

    {
        let on_close = props.on_close.clone();
        let show = show.clone();
        use_effect_with((current, len), move |(current, len)| {
            let (current, len) = (*current, *len);
            let window = web_sys::window().expect("window available");
            let listener = EventListener::new(&window, "keydown", move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                match event.key().as_str() {
                    "Escape" => on_close.emit(()),
                    "ArrowRight" if len > 1 => show.emit(next_index(current, len)),
                    "ArrowLeft" if len > 1 => show.emit(prev_index(current, len)),
                    _ => {}
                }
            });
            || drop(listener)
        });
    }

    let on_prev = {
        let show = show.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            show.emit(prev_index(current, len));
        })
    };
    let on_next = {
        let show = show.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            show.emit(next_index(current, len));
        })
    };
    let controls = (len > 1).then(|| {
        html! {
            <>
                <button class="lightbox-prev" onclick={on_prev}>{ "‹" }</button>
                <button class="lightbox-next" onclick={on_next}>{ "›" }</button>
            </>
        }
    });

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_close.emit(());
        })
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    let image_class = if *fading {
        "lightbox-image fading"
    } else {
        "lightbox-image"
    };
    let src = props.images.get(current).cloned().unwrap_or_default();

    html! {
        <div class="lightbox" onclick={on_backdrop}>
            <button class="lightbox-close" onclick={on_close_button}>{ "×" }</button>
            <img class={image_class} {src} onclick={keep_open} />
            <div class="lightbox-counter">{ format!("{} / {}", current + 1, len) }</div>
            { controls }
        </div>
    }
}
