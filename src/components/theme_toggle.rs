use yew::prelude::*;

use super::app::ThemeContext;
use crate::state::Theme;

#[function_component]
pub fn ThemeToggle() -> Html {
    let theme = use_context::<ThemeContext>().expect("ThemeContext missing");
    let p = theme.theme.palette();
    let onclick = {
        let cb = theme.toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let label = match theme.theme {
        Theme::Dark => "☀ Light",
        Theme::Light => "☾ Dark",
    };
    html! {
        <button {onclick} style={format!("padding:6px 12px; border-radius:8px; border:1px solid {}; background:{}; color:{}; cursor:pointer;", p.border, p.surface, p.text)}>
            { label }
        </button>
    }
}
