use i18nrs::yew::use_translation;
use yew::{Callback, Children, Html, Properties, classes, function_component, html};

use crate::containers::header::Header;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Header, page content and footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Header on_logout={props.on_logout.clone()} />
            <main class={classes!("flex-grow", "p-4", "transition-all", "duration-300")}>
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 bg-neutral text-neutral-content">
                <p>{ i18n.t("app.footer") }</p>
            </footer>
        </div>
    }
}
