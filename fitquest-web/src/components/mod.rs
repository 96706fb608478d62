pub mod alert;
pub mod form_field;
pub mod level_badge;
pub mod loading;
pub mod nav_button;

#[cfg(test)]
mod render_test;
