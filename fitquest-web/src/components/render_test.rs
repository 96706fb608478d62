//! Server-side rendering checks for the presentational components.

#![cfg(target_arch = "wasm32")]

use shared::models::Level;
use wasm_bindgen_test::*;
use yew::{AttrValue, Callback, LocalServerRenderer};

use super::alert::{FormAlerts, FormAlertsProps};
use super::form_field::{LevelSelect, LevelSelectProps, SubmitButton, SubmitButtonProps};
use super::level_badge::{LevelBadge, LevelBadgeProps};
use super::loading::{Loading, LoadingProps};
use crate::display::NOT_AVAILABLE;
use crate::forms::FieldValue;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn alerts_render_only_present_messages() {
    let html = LocalServerRenderer::<FormAlerts>::with_props(FormAlertsProps {
        error: Some("Failed to log in.".to_string()),
        success: None,
    })
    .render()
    .await;
    assert!(html.contains("alert-error"));
    assert!(html.contains("Failed to log in."));
    assert!(!html.contains("alert-success"));
}

#[wasm_bindgen_test]
async fn level_badge_uses_tone_and_fallback() {
    let html = LocalServerRenderer::<LevelBadge>::with_props(LevelBadgeProps {
        level: Some(Level {
            id: 3,
            name: "Advanced".to_string(),
        }),
    })
    .render()
    .await;
    assert!(html.contains("badge-error"));
    assert!(html.contains("Advanced"));

    let html = LocalServerRenderer::<LevelBadge>::with_props(LevelBadgeProps { level: None })
        .render()
        .await;
    assert!(html.contains(NOT_AVAILABLE));
    assert!(html.contains("badge-ghost"));
}

#[wasm_bindgen_test]
async fn level_select_lists_levels_after_placeholder() {
    let html = LocalServerRenderer::<LevelSelect>::with_props(LevelSelectProps {
        id: AttrValue::Static("level"),
        label: AttrValue::Static("Level"),
        placeholder: AttrValue::Static("Select level"),
        levels: vec![
            Level {
                id: 1,
                name: "Beginner".to_string(),
            },
            Level {
                id: 2,
                name: "Intermediate".to_string(),
            },
        ],
        value: FieldValue::Empty,
        on_change: Callback::from(|_| ()),
        required: true,
    })
    .render()
    .await;
    let placeholder = html.find("Select level").unwrap();
    let beginner = html.find("Beginner").unwrap();
    let intermediate = html.find("Intermediate").unwrap();
    assert!(placeholder < beginner && beginner < intermediate);
}

#[wasm_bindgen_test]
async fn submit_button_shows_busy_label() {
    let html = LocalServerRenderer::<SubmitButton>::with_props(SubmitButtonProps {
        label: AttrValue::Static("Login"),
        busy_label: AttrValue::Static("Logging in..."),
        busy: true,
    })
    .render()
    .await;
    assert!(html.contains("Logging in..."));
    assert!(html.contains("disabled"));
}

#[wasm_bindgen_test]
async fn loading_shows_percentage() {
    let html = LocalServerRenderer::<Loading>::with_props(LoadingProps {
        label: AttrValue::Static("Loading"),
        percent: 40,
    })
    .render()
    .await;
    assert!(html.contains("40%"));
}
