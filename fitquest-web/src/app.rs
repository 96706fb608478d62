use yew::{Callback, Html, function_component, html};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::models::app_state::AppState;
use crate::routes::{Route, switch_with_logout};

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();

    let logout_callback = Callback::from(move |()| {
        dispatch.set(AppState::default());
    });

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route| switch_with_logout(route, logout_callback.clone())} />
        </BrowserRouter>
    }
}
