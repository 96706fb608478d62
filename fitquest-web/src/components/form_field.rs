//! Labelled form controls reporting their content as a [`FieldValue`].

use shared::models::Level;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::FieldValue;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: FieldValue,
    pub on_input: Callback<FieldValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_input.emit(FieldValue::from_input(input.value()));
            }
        })
    };

    html! {
        <div class="form-control">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            <input
                id={props.id.clone()}
                class="input input-bordered"
                type={props.input_type.clone()}
                required={props.required}
                value={props.value.as_str().to_string()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: FieldValue,
    pub on_input: Callback<FieldValue>,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                on_input.emit(FieldValue::from_input(area.value()));
            }
        })
    };

    html! {
        <div class="form-control">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            <textarea
                id={props.id.clone()}
                class="textarea textarea-bordered"
                required={props.required}
                value={props.value.as_str().to_string()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LevelSelectProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub levels: Vec<Level>,
    pub value: FieldValue,
    pub on_change: Callback<FieldValue>,
    #[prop_or_default]
    pub required: bool,
}

/// Level picker; the placeholder option maps to [`FieldValue::Empty`].
#[function_component(LevelSelect)]
pub fn level_select(props: &LevelSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(FieldValue::from_input(select.value()));
            }
        })
    };
    let selected = props.value.as_str().trim().to_string();

    html! {
        <div class="form-control">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            <select
                id={props.id.clone()}
                class="select select-bordered"
                required={props.required}
                {onchange}
            >
                <option value="" selected={selected.is_empty()}>{ props.placeholder.clone() }</option>
                { for props.levels.iter().map(|level| {
                    let id = level.id.to_string();
                    html! {
                        <option key={id.clone()} value={id.clone()} selected={selected == id}>
                            { level.name.clone() }
                        </option>
                    }
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub busy_label: AttrValue,
    pub busy: bool,
}

/// Submit button that is disabled and relabelled while a request runs.
#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button class="btn btn-primary w-full" type="submit" disabled={props.busy}>
            { if props.busy { props.busy_label.clone() } else { props.label.clone() } }
        </button>
    }
}
