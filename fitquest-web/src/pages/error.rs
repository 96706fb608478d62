use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::Route;

/// Shown for paths no route matches.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("not_found.title") }</h1>
            <p>{ i18n.t("not_found.message") }</p>
            <Link<Route> to={Route::Login} classes="btn btn-primary">
                { i18n.t("login.title") }
            </Link<Route>>
        </div>
    }
}
