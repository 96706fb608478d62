use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub label: AttrValue,
    /// Simulated progress, 0 to 100.
    pub percent: u8,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center p-6 gap-3 animate-fadeIn">
            <span class="text-lg font-medium">{ props.label.clone() }</span>
            <progress
                class="progress progress-primary w-56"
                value={props.percent.to_string()}
                max="100"
            ></progress>
            <span class="text-sm text-base-content/70">{ format!("{}%", props.percent) }</span>
        </div>
    }
}
