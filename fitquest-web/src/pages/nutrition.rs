use chrono::Local;
use i18nrs::yew::use_translation;
use shared::models::UserId;
use yew::prelude::*;

use crate::api::FitQuestClient;
use crate::components::loading::Loading;
use crate::components::nav_button::NavButton;
use crate::controllers::nutrition::NO_DATA;
use crate::controllers::NutritionController;
use crate::display::{format_calories, format_logged_at};
use crate::hooks::{use_page, use_progress};

#[derive(Properties, PartialEq)]
pub struct NutritionPageProps {
    pub created_by: UserId,
}

#[function_component(NutritionPage)]
pub fn nutrition_page(props: &NutritionPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let page = use_page();
    let controller = use_memo(props.created_by, |created_by| {
        NutritionController::new(FitQuestClient::shared(), *created_by)
    });

    {
        let controller = controller.clone();
        let page = page.clone();
        use_effect_with(props.created_by, move |_| {
            page.spawn(async move { controller.load().await }, |_, ()| {});
            || ()
        });
    }

    let view = controller.view();
    let percent = use_progress(view.is_loading());
    let Some(view) = view.ready() else {
        return html! { <Loading label={i18n.t("common.loading")} {percent} /> };
    };

    let rows = view.entries.iter().enumerate().map(|(index, entry)| {
        html! {
            <tr key={entry.id.map_or_else(|| format!("row-{index}"), |id| id.to_string())}>
                <td>{ entry.meal_name.clone() }</td>
                <td>{ format_calories(entry.calories) }</td>
                <td>{ format_logged_at(&entry.logged_at, &Local) }</td>
            </tr>
        }
    });

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("nutrition.title") }</h1>
            <div class="flex gap-4">
                <NavButton
                    target={NutritionController::back_target()}
                    label={i18n.t("nutrition.back")}
                    class="btn btn-outline"
                />
                <NavButton target={controller.add_entry_target()} label={i18n.t("nutrition.add")} />
            </div>
            if view.entries.is_empty() {
                <p class="text-base-content/70">{ NO_DATA }</p>
            } else {
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>{ i18n.t("nutrition.meal") }</th>
                            <th>{ i18n.t("nutrition.calories") }</th>
                            <th>{ i18n.t("nutrition.logged_at") }</th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            }
        </div>
    }
}
