use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct FormAlertsProps {
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub success: Option<String>,
}

/// Error and success banners of a form; renders nothing when both are empty.
#[function_component(FormAlerts)]
pub fn form_alerts(props: &FormAlertsProps) -> Html {
    html! {
        <>
            if let Some(message) = &props.error {
                <div class="alert alert-error" role="alert">
                    <span>{ message.clone() }</span>
                </div>
            }
            if let Some(message) = &props.success {
                <div class="alert alert-success" role="status">
                    <span>{ message.clone() }</span>
                </div>
            }
        </>
    }
}
