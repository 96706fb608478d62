use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::FitQuestClient;
use crate::components::alert::FormAlerts;
use crate::components::form_field::{LevelSelect, SubmitButton, TextField};
use crate::config::FrontendConfig;
use crate::controllers::{SignUpController, SignUpFields};
use crate::forms::FieldValue;
use crate::hooks::use_page;
use crate::routes::Route;

#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let (i18n, ..) = use_translation();
    let page = use_page();
    let controller = use_memo((), |_| {
        SignUpController::new(FitQuestClient::shared(), FrontendConfig::new().redirect_delay())
    });

    {
        let controller = controller.clone();
        let page = page.clone();
        use_effect_with((), move |_| {
            page.spawn(async move { controller.load_levels().await }, |_, ()| {});
            || ()
        });
    }

    let edit = |apply: fn(&mut SignUpFields, FieldValue)| {
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
            page.spawn(async move { controller.submit().await }, |page, redirect| {
                if let Some(redirect) = redirect {
                    page.redirect(redirect);
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
                    <h2 class="card-title text-2xl">{ i18n.t("sign_up.title") }</h2>
                    <FormAlerts
                        error={form.error().map(str::to_string)}
                        success={form.success().map(str::to_string)}
                    />
                    <TextField
                        id="username"
                        label={i18n.t("sign_up.username")}
                        value={fields.username.clone()}
                        on_input={edit(|fields, value| fields.username = value)}
                        required=true
                    />
                    <TextField
                        id="email"
                        input_type="email"
                        label={i18n.t("sign_up.email")}
                        value={fields.email.clone()}
                        on_input={edit(|fields, value| fields.email = value)}
                        required=true
                    />
                    <TextField
                        id="password"
                        input_type="password"
                        label={i18n.t("sign_up.password")}
                        value={fields.password.clone()}
                        on_input={edit(|fields, value| fields.password = value)}
                        required=true
                    />
                    <LevelSelect
                        id="level"
                        label={i18n.t("sign_up.level")}
                        placeholder={i18n.t("common.select_level")}
                        levels={controller.levels().clone()}
                        value={fields.level.clone()}
                        on_change={edit(|fields, value| fields.level = value)}
                        required=true
                    />
                    <div class="form-control mt-6">
                        <SubmitButton
                            label={i18n.t("sign_up.submit")}
                            busy_label={i18n.t("sign_up.submitting")}
                            busy={form.is_loading()}
                        />
                    </div>
                    <p class="text-sm text-center">
                        { i18n.t("sign_up.have_account") }{ " " }
                        <Link<Route> to={Route::Login} classes="link link-primary">
                            { i18n.t("sign_up.login_link") }
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
