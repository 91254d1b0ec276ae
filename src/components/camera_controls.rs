use yew::prelude::*;

use super::app::{ThemeContext, ViewportContext};
use crate::state::Rect;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    /// What "Fit" frames.
    pub content: Option<Rect>,
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    let viewport = use_context::<ViewportContext>().expect("ViewportContext missing");
    let theme = use_context::<ThemeContext>().expect("ThemeContext missing");
    let p = theme.theme.palette();

    let zi = {
        let ctx = viewport.clone();
        Callback::from(move |_| {
            let mut cam = ctx.camera.borrow_mut();
            cam.note_user_input();
            cam.zoom_in();
            drop(cam);
            ctx.redraw();
        })
    };
    let zo = {
        let ctx = viewport.clone();
        Callback::from(move |_| {
            let mut cam = ctx.camera.borrow_mut();
            cam.note_user_input();
            cam.zoom_out();
            drop(cam);
            ctx.redraw();
        })
    };
    let fit = {
        let ctx = viewport.clone();
        let content = props.content;
        Callback::from(move |_| {
            if let Some(rect) = content {
                let mut cam = ctx.camera.borrow_mut();
                cam.note_user_input();
                cam.fit_to(rect);
            }
            ctx.redraw();
        })
    };
    html! {<div style={format!("position:absolute; right:12px; bottom:12px; background:{}; border:1px solid {}; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;", p.surface, p.border)}>
        <button onclick={zo} title="Zoom out"> {"-"} </button>
        <button onclick={zi} title="Zoom in"> {"+"} </button>
        <span style="width:8px;"></span>
        <button onclick={fit}> {"Fit"} </button>
    </div>}
}
