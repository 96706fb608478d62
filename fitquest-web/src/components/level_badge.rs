use shared::models::{Level, LevelTone};
use yew::{Html, Properties, classes, function_component, html};

use crate::display::NOT_AVAILABLE;

pub fn tone_class(tone: LevelTone) -> &'static str {
    match tone {
        LevelTone::Beginner => "badge-success",
        LevelTone::Intermediate => "badge-info",
        LevelTone::Advanced => "badge-error",
        LevelTone::Neutral => "badge-ghost",
    }
}

#[derive(Properties, PartialEq)]
pub struct LevelBadgeProps {
    #[prop_or_default]
    pub level: Option<Level>,
}

/// Level name coloured by difficulty.
#[function_component(LevelBadge)]
pub fn level_badge(props: &LevelBadgeProps) -> Html {
    let tone = LevelTone::for_level(props.level.as_ref());
    let name = props
        .level
        .as_ref()
        .map_or(NOT_AVAILABLE, |level| level.name.as_str())
        .to_string();
    html! {
        <span class={classes!("badge", tone_class(tone))}>{ name }</span>
    }
}
