use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::api::FitQuestClient;
use crate::components::level_badge::LevelBadge;
use crate::components::loading::Loading;
use crate::components::nav_button::NavButton;
use crate::controllers::dashboard::NO_WORKOUTS;
use crate::controllers::{DashboardController, DashboardView};
use crate::display::{NOT_AVAILABLE, format_calories};
use crate::hooks::{use_page, use_progress};
use crate::session::AuthenticatedUser;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub user: AuthenticatedUser,
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let (i18n, _) = use_translation();
    let page = use_page();
    let controller = use_memo(props.user.clone(), |user| {
        DashboardController::new(FitQuestClient::shared(), user.clone())
    });

    {
        let controller = controller.clone();
        let page = page.clone();
        use_effect_with(props.user.clone(), move |_| {
            page.spawn(async move { controller.load().await }, |_, ()| {});
            || ()
        });
    }

    let view = controller.view();
    let percent = use_progress(view.is_loading());

    let Some(DashboardView { username, workouts }) = view.ready() else {
        return html! { <Loading label={i18n.t("common.loading")} {percent} /> };
    };

    let rows = workouts.iter().map(|workout| {
        let duration = workout
            .duration_minutes
            .map_or_else(|| NOT_AVAILABLE.to_string(), |minutes| minutes.to_string());
        html! {
            <tr key={workout.id}>
                <td>{ workout.name.clone() }</td>
                <td>{ workout.description.clone().unwrap_or_default() }</td>
                <td>{ duration }</td>
                <td>{ format_calories(workout.calories_burned) }</td>
                <td><LevelBadge level={workout.level.clone()} /></td>
                <td class="flex gap-2">
                    <NavButton
                        target={DashboardController::details_target(workout.id)}
                        label={i18n.t("dashboard.view")}
                        class="btn btn-sm btn-outline"
                    />
                    <NavButton
                        target={DashboardController::add_exercise_target(workout.id)}
                        label={i18n.t("dashboard.add_exercise")}
                        class="btn btn-sm btn-secondary"
                    />
                </td>
            </tr>
        }
    });

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">
                { format!("{}, {username}!", i18n.t("dashboard.welcome")) }
            </h1>
            <div class="flex gap-4">
                <NavButton target={controller.add_workout_target()} label={i18n.t("dashboard.add_workout")} />
                <NavButton
                    target={controller.nutrition_target()}
                    label={i18n.t("dashboard.nutrition")}
                    class="btn btn-accent"
                />
            </div>
            <h2 class="text-xl font-semibold flex items-center gap-2">
                <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-6 h-6" />
                { i18n.t("dashboard.your_workouts") }
            </h2>
            if workouts.is_empty() {
                <p class="text-base-content/70">{ NO_WORKOUTS }</p>
            } else {
                <div class="overflow-x-auto">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>{ i18n.t("workout.name") }</th>
                                <th>{ i18n.t("workout.description") }</th>
                                <th>{ i18n.t("workout.duration") }</th>
                                <th>{ i18n.t("workout.calories") }</th>
                                <th>{ i18n.t("workout.level") }</th>
                                <th>{ i18n.t("workout.actions") }</th>
                            </tr>
                        </thead>
                        <tbody>{ for rows }</tbody>
                    </table>
                </div>
            }
        </div>
    }
}
