//! Theme
//!
//! Applies the light/dark preference as a body class.

use gantt_core::Theme;

pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.remove_1(theme.toggled().body_class());
    let _ = classes.add_1(theme.body_class());
}
