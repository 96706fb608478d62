//! A user's nutrition log.

use shared::models::{NutritionEntry, UserId};
use std::cell::{Ref, RefCell};

use super::Fetch;
use crate::api::FitQuestClient;
use crate::routes::{NavTarget, Route};

pub const NO_DATA: &str = "No nutrition data found.";

/// Entries of the acting user, in server order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NutritionView {
    pub entries: Vec<NutritionEntry>,
}

#[derive(Debug)]
pub struct NutritionController {
    client: FitQuestClient,
    created_by: UserId,
    view: RefCell<Fetch<NutritionView>>,
}

impl NutritionController {
    pub fn new(client: FitQuestClient, created_by: UserId) -> Self {
        Self {
            client,
            created_by,
            view: RefCell::new(Fetch::Loading),
        }
    }

    pub fn view(&self) -> Ref<'_, Fetch<NutritionView>> {
        self.view.borrow()
    }

    /// Fetch the log. Entries the API attributes to another user are
    /// dropped; a failed fetch shows the empty state.
    pub async fn load(&self) {
        let user = self.created_by;
        let entries = match self.client.nutrition(user).await {
            Ok(entries) => entries
                .into_iter()
                .filter(|entry| entry.belongs_to(user))
                .collect(),
            Err(err) => {
                log::warn!("failed to fetch nutrition data for user {user}: {err}");
                Vec::new()
            }
        };
        *self.view.borrow_mut() = Fetch::Ready(NutritionView { entries });
    }

    pub fn back_target() -> NavTarget {
        NavTarget::to(Route::Dashboard)
    }

    pub fn add_entry_target(&self) -> NavTarget {
        NavTarget::with_user(Route::AddNutrition, self.created_by)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::{Reply, ScriptedTransport, client_for};
    use reqwest::Method;
    use serde_json::json;

    fn entries_json() -> serde_json::Value {
        json!([
            { "meal_name": "Oats", "calories": 320, "logged_at": "2025-03-01T08:30", "user_id": 42 },
            { "meal_name": "Soup", "calories": 210, "logged_at": "2025-03-01T12:00", "user_id": 43 },
            { "meal_name": "Rice", "calories": "500", "logged_at": "2025-03-01T19:00", "user_id": 42 }
        ])
    }

    async fn meals_for(user: i64) -> Vec<String> {
        let transport = ScriptedTransport::new();
        transport.on(
            Method::GET,
            &format!("nutrition?created_by={user}"),
            Reply::Json(200, entries_json()),
        );
        let controller = NutritionController::new(client_for(&transport), UserId(user));
        controller.load().await;
        assert_eq!(
            transport.sent_paths(),
            vec![format!("/nutrition?created_by={user}")]
        );
        let view = controller.view();
        view.ready()
            .unwrap()
            .entries
            .iter()
            .map(|entry| entry.meal_name.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_entries_are_scoped_to_the_acting_user() {
        let for_42 = meals_for(42).await;
        let for_43 = meals_for(43).await;
        assert_eq!(for_42, vec!["Oats", "Rice"]);
        assert_eq!(for_43, vec!["Soup"]);
        assert!(for_42.iter().all(|meal| !for_43.contains(meal)));
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_empty_state() {
        let transport = ScriptedTransport::new();
        transport.on(Method::GET, "nutrition?created_by=42", Reply::Unreachable);
        let controller = NutritionController::new(client_for(&transport), UserId(42));
        controller.load().await;
        assert!(controller.view().ready().unwrap().entries.is_empty());
    }

    #[test]
    fn test_action_targets() {
        let controller = NutritionController::new(client_for(&ScriptedTransport::new()), UserId(42));
        assert_eq!(
            NutritionController::back_target().href().as_deref(),
            Some("/dashboard")
        );
        assert_eq!(
            controller.add_entry_target().href().as_deref(),
            Some("/add-nutrition?created_by=42")
        );
    }
}
