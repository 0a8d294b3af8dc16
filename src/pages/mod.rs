use yew::prelude::*;

pub mod layout;
pub mod work;

pub use layout::Layout;
pub use work::Work;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <>
            <h1>{ "About" }</h1>
            <p>
                { "I produce exhibitions and activations for generative and AI art,
                and write about the spaces where code meets collecting. " }
                { "The work page gathers the projects: gallery activations across
                cities, minting receptions, publications, and talks." }
            </p>
        </>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <>
            <h2>{ "Contact" }</h2>
            <ul>
                <li>
                    <a href="mailto:studio@example.com">{ "Email" }</a>
                </li>
                <li>
                    <a href="https://x.com/example" target="_blank" rel="noopener noreferrer">
                        { "X / Twitter" }
                    </a>
                </li>
            </ul>
        </>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! { <h1>{ "404 - Page Not Found" }</h1> }
}
