use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::routes::NavTarget;

#[derive(Properties, PartialEq)]
pub struct NavButtonProps {
    pub target: NavTarget,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("btn btn-primary"))]
    pub class: AttrValue,
}

/// Button navigating to a [`NavTarget`], including query and history targets.
#[function_component(NavButton)]
pub fn nav_button(props: &NavButtonProps) -> Html {
    let navigator = use_navigator();
    let onclick = {
        let target = props.target.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                target.apply(navigator);
            }
        })
    };
    html! {
        <button type="button" class={props.class.clone()} {onclick}>{ props.label.clone() }</button>
    }
}
