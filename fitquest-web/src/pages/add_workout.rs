use i18nrs::yew::use_translation;
use shared::models::UserId;
use yew::prelude::*;

use crate::api::FitQuestClient;
use crate::components::alert::FormAlerts;
use crate::components::form_field::{LevelSelect, SubmitButton, TextAreaField, TextField};
use crate::config::FrontendConfig;
use crate::controllers::{AddWorkoutController, WorkoutFields};
use crate::forms::FieldValue;
use crate::hooks::use_page;

#[derive(Properties, PartialEq)]
pub struct AddWorkoutPageProps {
    pub created_by: UserId,
}

#[function_component(AddWorkoutPage)]
pub fn add_workout_page(props: &AddWorkoutPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let page = use_page();
    let controller = use_memo(props.created_by, |created_by| {
        AddWorkoutController::new(
            FitQuestClient::shared(),
            *created_by,
            FrontendConfig::new().redirect_delay(),
        )
    });

    {
        let controller = controller.clone();
        let page = page.clone();
        use_effect_with(props.created_by, move |_| {
            page.spawn(async move { controller.load_levels().await }, |_, ()| {});
            || ()
        });
    }

    let edit = |apply: fn(&mut WorkoutFields, FieldValue)| {
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
                    <h2 class="card-title text-2xl">{ i18n.t("workout.add_title") }</h2>
                    <FormAlerts
                        error={form.error().map(str::to_string)}
                        success={form.success().map(str::to_string)}
                    />
                    <TextField
                        id="name"
                        label={i18n.t("workout.name")}
                        value={fields.name.clone()}
                        on_input={edit(|fields, value| fields.name = value)}
                        required=true
                    />
                    <TextAreaField
                        id="description"
                        label={i18n.t("workout.description")}
                        value={fields.description.clone()}
                        on_input={edit(|fields, value| fields.description = value)}
                    />
                    <TextField
                        id="duration"
                        input_type="number"
                        label={i18n.t("workout.duration")}
                        value={fields.duration.clone()}
                        on_input={edit(|fields, value| fields.duration = value)}
                        required=true
                    />
                    <TextField
                        id="calories_burned"
                        input_type="number"
                        label={i18n.t("workout.calories")}
                        value={fields.calories_burned.clone()}
                        on_input={edit(|fields, value| fields.calories_burned = value)}
                        required=true
                    />
                    <LevelSelect
                        id="level"
                        label={i18n.t("workout.level")}
                        placeholder={i18n.t("common.select_level")}
                        levels={controller.levels().clone()}
                        value={fields.level.clone()}
                        on_change={edit(|fields, value| fields.level = value)}
                    />
                    <div class="form-control mt-6">
                        <SubmitButton
                            label={i18n.t("workout.submit")}
                            busy_label={i18n.t("workout.submitting")}
                            busy={form.is_loading()}
                        />
                    </div>
                </form>
            </div>
        </div>
    }
}
