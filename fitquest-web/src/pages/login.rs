use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_dispatch;

use crate::api::FitQuestClient;
use crate::components::alert::FormAlerts;
use crate::components::form_field::{SubmitButton, TextField};
use crate::config::FrontendConfig;
use crate::controllers::{LoginController, LoginFields};
use crate::forms::FieldValue;
use crate::hooks::use_page;
use crate::models::app_state::AppState;
use crate::routes::Route;
use crate::session::SessionStore;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let page = use_page();
    let dispatch = use_dispatch::<AppState>();
    let controller = use_memo((), |_| {
        LoginController::new(
            FitQuestClient::shared(),
            SessionStore::browser(),
            FrontendConfig::new().redirect_delay(),
        )
    });

    let edit = |apply: fn(&mut LoginFields, FieldValue)| {
        let controller = controller.clone();
        let page = page.clone();
        Callback::from(move |value: FieldValue| {
            controller.edit(|fields| apply(fields, value));
            page.refresh();
        })
    };

    let onsubmit = {
        let controller = controller.clone();
        let page = page.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let controller = controller.clone();
            let dispatch = dispatch.clone();
            page.spawn(async move { controller.submit().await }, move |page, success| {
                if let Some(success) = success {
                    dispatch.set(AppState {
                        session: success.session,
                    });
                    page.redirect(success.redirect);
                }
            });
        })
    };

    let form = controller.form();
    let fields = form.fields();

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{ i18n.t("login.title") }</h2>
                    <FormAlerts
                        error={form.error().map(str::to_string)}
                        success={form.success().map(str::to_string)}
                    />
                    <TextField
                        id="email"
                        input_type="email"
                        label={i18n.t("login.email")}
                        value={fields.email.clone()}
                        on_input={edit(|fields, value| fields.email = value)}
                        required=true
                    />
                    <TextField
                        id="password"
                        input_type="password"
                        label={i18n.t("login.password")}
                        value={fields.password.clone()}
                        on_input={edit(|fields, value| fields.password = value)}
                        required=true
                    />
                    <div class="form-control mt-6">
                        <SubmitButton
                            label={i18n.t("login.submit")}
                            busy_label={i18n.t("login.submitting")}
                            busy={form.is_loading()}
                        />
                    </div>
                    <p class="text-sm text-center">
                        { i18n.t("login.no_account") }{ " " }
                        <Link<Route> to={Route::SignUp} classes="link link-primary">
                            { i18n.t("login.sign_up_link") }
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
