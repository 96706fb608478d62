use i18nrs::yew::use_translation;
use shared::models::WorkoutId;
use yew::prelude::*;

use crate::api::FitQuestClient;
use crate::components::alert::FormAlerts;
use crate::components::form_field::{SubmitButton, TextAreaField, TextField};
use crate::config::FrontendConfig;
use crate::controllers::{AddExerciseController, ExerciseFields};
use crate::forms::FieldValue;
use crate::hooks::use_page;

#[derive(Properties, PartialEq)]
pub struct AddExercisePageProps {
    pub workout_id: WorkoutId,
}

#[function_component(AddExercisePage)]
pub fn add_exercise_page(props: &AddExercisePageProps) -> Html {
    let (i18n, ..) = use_translation();
    let page = use_page();
    let controller = use_memo(props.workout_id, |workout_id| {
        AddExerciseController::new(
            FitQuestClient::shared(),
            *workout_id,
            FrontendConfig::new().redirect_delay(),
        )
    });

    let edit = |apply: fn(&mut ExerciseFields, FieldValue)| {
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
                    <h2 class="card-title text-2xl">{ i18n.t("exercise.add_title") }</h2>
                    <FormAlerts
                        error={form.error().map(str::to_string)}
                        success={form.success().map(str::to_string)}
                    />
                    <TextField
                        id="name"
                        label={i18n.t("exercise.name")}
                        value={fields.name.clone()}
                        on_input={edit(|fields, value| fields.name = value)}
                        required=true
                    />
                    <TextField
                        id="duration"
                        input_type="number"
                        label={i18n.t("exercise.duration_seconds")}
                        value={fields.duration.clone()}
                        on_input={edit(|fields, value| fields.duration = value)}
                        required=true
                    />
                    <TextAreaField
                        id="description"
                        label={i18n.t("exercise.description")}
                        value={fields.description.clone()}
                        on_input={edit(|fields, value| fields.description = value)}
                        required=true
                    />
                    <div class="form-control mt-6">
                        <SubmitButton
                            label={i18n.t("exercise.submit")}
                            busy_label={i18n.t("exercise.submitting")}
                            busy={form.is_loading()}
                        />
                    </div>
                </form>
            </div>
        </div>
    }
}
