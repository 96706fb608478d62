mod api;
mod app;
mod components;
mod config;
mod containers;
mod controllers;
mod display;
mod forms;
mod hooks;
mod language;
mod lifecycle;
mod logging;
mod models;
mod pages;
mod routes;
mod session;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod test_support;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::{DEFAULT_LANGUAGE, supported_languages};
use log::LevelFilter;
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    logging::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        match info.location() {
            Some(location) => log::error!(
                "panic: {payload}\n  at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ),
            None => log::error!("panic: {payload}"),
        }
    }));

    log::info!("starting FitQuest");

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match root {
        Some(body) => {
            Renderer::<InternationalApp>::with_root(body.into()).render();
        }
        None => log::error!("no document body to mount FitQuest into"),
    }
}
