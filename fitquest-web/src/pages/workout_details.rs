use i18nrs::yew::use_translation;
use shared::models::{Workout, WorkoutId};
use yew::prelude::*;

use crate::api::FitQuestClient;
use crate::components::level_badge::LevelBadge;
use crate::components::loading::Loading;
use crate::components::nav_button::NavButton;
use crate::controllers::workout_details::{NO_EXERCISES, NO_WORKOUT};
use crate::controllers::{WorkoutDetailsController, WorkoutDetailsView};
use crate::display::{format_calories, format_minutes};
use crate::hooks::{use_page, use_progress};

const NO_DESCRIPTION: &str = "No description available";

#[derive(Properties, PartialEq)]
pub struct WorkoutDetailsPageProps {
    pub workout_id: WorkoutId,
}

#[function_component(WorkoutDetailsPage)]
pub fn workout_details_page(props: &WorkoutDetailsPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let page = use_page();
    let controller = use_memo(props.workout_id, |workout_id| {
        WorkoutDetailsController::new(FitQuestClient::shared(), *workout_id)
    });

    {
        let controller = controller.clone();
        let page = page.clone();
        use_effect_with(props.workout_id, move |_| {
            page.spawn(async move { controller.load().await }, |_, ()| {});
            || ()
        });
    }

    let view = controller.view();
    let percent = use_progress(matches!(*view, WorkoutDetailsView::Loading));

    let body = match &*view {
        WorkoutDetailsView::Loading => {
            return html! { <Loading label={i18n.t("common.loading")} {percent} /> };
        }
        WorkoutDetailsView::Failed(message) => return html! { <div class="p-4">{ *message }</div> },
        WorkoutDetailsView::Missing => html! { <p>{ NO_WORKOUT }</p> },
        WorkoutDetailsView::Loaded(workout) => workout_tables(workout, &|key| i18n.t(key)),
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("details.title") }</h1>
            { body }
            <NavButton
                target={WorkoutDetailsController::back_target()}
                label={i18n.t("common.go_back")}
                class="btn btn-outline"
            />
        </div>
    }
}

fn workout_tables(workout: &Workout, t: &dyn Fn(&str) -> String) -> Html {
    let exercises = if workout.exercises.is_empty() {
        html! {
            <tr><td colspan="3" class="text-center">{ NO_EXERCISES }</td></tr>
        }
    } else {
        workout
            .exercises
            .iter()
            .map(|exercise| {
                let description = exercise
                    .description
                    .as_deref()
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or(NO_DESCRIPTION)
                    .to_string();
                html! {
                    <tr>
                        <td>{ exercise.name.clone() }</td>
                        <td>{ format_minutes(exercise.duration_seconds) }</td>
                        <td>{ description }</td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <>
            <table class="table w-full">
                <thead>
                    <tr>
                        <th>{ t("workout.name") }</th>
                        <th>{ t("workout.calories") }</th>
                        <th>{ t("workout.level") }</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td>{ workout.name.clone() }</td>
                        <td>{ format_calories(workout.calories_burned) }</td>
                        <td><LevelBadge level={workout.level.clone()} /></td>
                    </tr>
                </tbody>
            </table>
            <h2 class="text-xl font-semibold">{ t("exercise.title") }</h2>
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>{ t("exercise.name") }</th>
                        <th>{ t("exercise.duration_minutes") }</th>
                        <th>{ t("exercise.description") }</th>
                    </tr>
                </thead>
                <tbody>{ exercises }</tbody>
            </table>
        </>
    }
}
