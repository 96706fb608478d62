use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use crate::session::{AuthenticatedUser, Session};
use serde::{Deserialize, Serialize};
use shared::models::{UserId, WorkoutId};
use strum::EnumIter;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The app routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sign-up")]
    SignUp,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/add-workout")]
    AddWorkout,
    #[at("/add-exercise/:workout_id")]
    AddExercise { workout_id: WorkoutId },
    #[at("/workout-details/:workout_id")]
    WorkoutDetails { workout_id: WorkoutId },
    #[at("/nutrition")]
    Nutrition,
    #[at("/add-nutrition")]
    AddNutrition,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string carrying the acting user, e.g. `?created_by=42`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl UserQuery {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            created_by: Some(user_id.to_string()),
        }
    }

    /// The parsed `created_by` value; malformed ids count as absent.
    pub fn user_id(&self) -> Option<UserId> {
        self.created_by.as_deref().and_then(|raw| raw.parse().ok())
    }
}

/// Where a controller wants the router to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    To(Route),
    ToWithUser(Route, UserId),
    Back,
}

impl NavTarget {
    pub fn to(route: Route) -> Self {
        Self::To(route)
    }

    pub fn with_user(route: Route, user_id: UserId) -> Self {
        Self::ToWithUser(route, user_id)
    }

    /// Location string of the target; `None` for history navigation.
    pub fn href(&self) -> Option<String> {
        match self {
            Self::To(route) => Some(route.to_path()),
            Self::ToWithUser(route, user_id) => {
                Some(format!("{}?created_by={user_id}", route.to_path()))
            }
            Self::Back => None,
        }
    }

    pub fn apply(&self, navigator: &Navigator) {
        log::info!("navigating to {}", self.href().as_deref().unwrap_or("<back>"));
        match self {
            Self::To(route) => navigator.push(route),
            Self::ToWithUser(route, user_id) => {
                if let Err(err) = navigator.push_with_query(route, &UserQuery::for_user(*user_id)) {
                    log::error!("failed to encode query for {route:?}: {err}");
                    navigator.push(route);
                }
            }
            Self::Back => navigator.back(),
        }
    }
}

/// A route resolved against the session and query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    SignUp,
    Login,
    Dashboard(AuthenticatedUser),
    AddWorkout(UserId),
    AddExercise(WorkoutId),
    WorkoutDetails(WorkoutId),
    Nutrition(UserId),
    AddNutrition(UserId),
    NotFound,
}

/// Resolve `route`, or return the route to redirect to instead.
pub fn resolve(route: &Route, session: &Session, query: &UserQuery) -> Result<Screen, Route> {
    let acting_user = || query.user_id().or_else(|| session.user_id()).ok_or(Route::Login);
    match route {
        Route::Home | Route::SignUp => Ok(Screen::SignUp),
        Route::Login => Ok(Screen::Login),
        Route::Dashboard => session
            .require()
            .map(|user| Screen::Dashboard(user.clone()))
            .map_err(|_| Route::Login),
        Route::AddWorkout => acting_user().map(Screen::AddWorkout),
        Route::Nutrition => acting_user().map(Screen::Nutrition),
        Route::AddNutrition => acting_user().map(Screen::AddNutrition),
        Route::AddExercise { workout_id } => Ok(Screen::AddExercise(*workout_id)),
        Route::WorkoutDetails { workout_id } => Ok(Screen::WorkoutDetails(*workout_id)),
        Route::NotFound => Ok(Screen::NotFound),
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: Route,
    pub on_logout: Callback<()>,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let location = use_location();
    let query = location
        .and_then(|location| location.query::<UserQuery>().ok())
        .unwrap_or_default();

    let screen = match resolve(&props.route, &session, &query) {
        Ok(screen) => screen,
        Err(redirect) => {
            log::info!("{:?} needs a signed-in user, redirecting", props.route);
            return html! { <Redirect<Route> to={redirect} /> };
        }
    };

    let content = match screen {
        Screen::SignUp => return html! { <SignUpPage /> },
        Screen::Login => return html! { <LoginPage /> },
        Screen::Dashboard(user) => html! { <DashboardPage {user} /> },
        Screen::AddWorkout(created_by) => html! { <AddWorkoutPage {created_by} /> },
        Screen::AddExercise(workout_id) => html! { <AddExercisePage {workout_id} /> },
        Screen::WorkoutDetails(workout_id) => html! { <WorkoutDetailsPage {workout_id} /> },
        Screen::Nutrition(created_by) => html! { <NutritionPage {created_by} /> },
        Screen::AddNutrition(created_by) => html! { <AddNutritionPage {created_by} /> },
        Screen::NotFound => html! { <ErrorPage /> },
    };

    html! {
        <Layout on_logout={props.on_logout.clone()}>
            {content}
        </Layout>
    }
}

/// Switch function for the app routes.
pub fn switch_with_logout(route: Route, on_logout: Callback<()>) -> Html {
    log::debug!("switching to route: {route:?}");
    html! { <RouteView {route} {on_logout} /> }
}
