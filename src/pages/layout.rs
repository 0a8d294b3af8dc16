use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <div class="page">
                { for props.children.iter() }
            </div>

            <footer class="site-footer">
                <div class="footer-container">
                    <div class="footer-about">
                        <h3>{ "About" }</h3>
                        <p>
                            { "Exhibitions, writing, and generative-art activations,
                            collected in one place. Thanks for looking around." }
                        </p>
                    </div>

                    <div class="footer-contact">
                        <h3>{ "Contact" }</h3>
                        <p>{ "Email: " }<a href="mailto:studio@example.com">{ "studio@example.com" }</a></p>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{ "© 2025. All rights reserved." }</p>
                </div>
            </footer>
        </>
    }
}
