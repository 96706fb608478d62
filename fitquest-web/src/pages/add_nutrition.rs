use i18nrs::yew::use_translation;
use shared::models::UserId;
use yew::prelude::*;

use crate::api::FitQuestClient;
use crate::components::alert::FormAlerts;
use crate::components::form_field::{SubmitButton, TextField};
use crate::components::nav_button::NavButton;
use crate::config::FrontendConfig;
use crate::controllers::{AddNutritionController, NutritionFields};
use crate::forms::FieldValue;
use crate::hooks::use_page;

#[derive(Properties, PartialEq)]
pub struct AddNutritionPageProps {
    pub created_by: UserId,
}

#[function_component(AddNutritionPage)]
pub fn add_nutrition_page(props: &AddNutritionPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let page = use_page();
    let controller = use_memo(props.created_by, |created_by| {
        AddNutritionController::new(
            FitQuestClient::shared(),
            *created_by,
            FrontendConfig::new().redirect_delay(),
        )
    });

    let edit = |apply: fn(&mut NutritionFields, FieldValue)| {
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
        <div class="flex justify-center p-4">
            <div class="card w-full max-w-lg shadow-lg bg-base-200">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{ i18n.t("nutrition.add_title") }</h2>
                    <FormAlerts
                        error={form.error().map(str::to_string)}
                        success={form.success().map(str::to_string)}
                    />
                    <TextField
                        id="meal_name"
                        label={i18n.t("nutrition.meal_name")}
                        value={fields.meal_name.clone()}
                        on_input={edit(|fields, value| fields.meal_name = value)}
                        required=true
                    />
                    <TextField
                        id="calories"
                        input_type="number"
                        label={i18n.t("nutrition.calories")}
                        value={fields.calories.clone()}
                        on_input={edit(|fields, value| fields.calories = value)}
                        required=true
                    />
                    <TextField
                        id="logged_at"
                        input_type="datetime-local"
                        label={i18n.t("nutrition.logged_at")}
                        value={fields.logged_at.clone()}
                        on_input={edit(|fields, value| fields.logged_at = value)}
                        required=true
                    />
                    <div class="form-control mt-6 gap-2">
                        <SubmitButton
                            label={i18n.t("nutrition.submit")}
                            busy_label={i18n.t("nutrition.submitting")}
                            busy={form.is_loading()}
                        />
                        <NavButton
                            target={controller.log_target()}
                            label={i18n.t("common.go_back")}
                            class="btn btn-ghost w-full"
                        />
                    </div>
                </form>
            </div>
        </div>
    }
}
