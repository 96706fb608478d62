use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::Routable;
use yew_router::prelude::{Link, use_navigator};

use crate::routes::Route;
use crate::session::{SessionStore, logout};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Called after the session has been cleared.
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// App title with the Home and Logout links.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let target = logout(&SessionStore::browser());
            if let Some(callback) = &on_logout {
                callback.emit(());
            }
            if let Some(navigator) = &navigator {
                target.apply(navigator);
            }
        })
    };

    html! {
        <nav class="navbar justify-between bg-base-300 px-5">
            <h1 class="text-2xl font-bold">{ i18n.t("app.title") }</h1>
            <ul class="menu menu-horizontal gap-4">
                <li>
                    <Link<Route> to={Route::Dashboard}>
                        <Icon icon_id={IconId::HeroiconsOutlineHome} class="w-5 h-5" />
                        { i18n.t("header.home") }
                    </Link<Route>>
                </li>
                <li>
                    <a href={Route::Login.to_path()} onclick={on_logout_click}>
                        <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-5 h-5" />
                        { i18n.t("header.logout") }
                    </a>
                </li>
            </ul>
        </nav>
    }
}
