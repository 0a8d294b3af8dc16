use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{About, Contact, Layout, NotFound, Work};

#[derive(Routable, PartialEq, Eq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Work,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    let page = match route {
        Route::Work => html! { <Work /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <Layout>
            { page }
        </Layout>
    }
}
