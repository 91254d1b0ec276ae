use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, KeyboardEvent, PointerEvent, WheelEvent};
use yew::prelude::*;

use super::app::{ThemeContext, ViewportContext};
use super::preview_tile::PreviewTile;
use crate::model::ComponentKind;
use crate::state::camera::{DeltaMode, WheelInput};
use crate::state::layout::CANVAS_SIZE;
use crate::state::{MasonryLayout, Rect};
use crate::util::{is_text_entry, measure};

#[derive(Properties, PartialEq, Clone)]
pub struct CanvasViewProps {
    pub layout: Rc<MasonryLayout>,
    /// Bounds used for the first-load fit.
    pub initial_bounds: Option<Rect>,
    /// A detail view is open; the canvas ignores input.
    pub locked: bool,
    pub on_select: Callback<ComponentKind>,
}

#[function_component(CanvasView)]
pub fn canvas_view(props: &CanvasViewProps) -> Html {
    let viewport = use_context::<ViewportContext>().expect("ViewportContext missing");
    let theme = use_context::<ThemeContext>().expect("ThemeContext missing");
    let container_ref = use_node_ref();
    let layer_ref = use_node_ref();
    let polish_timer = use_mut_ref(|| None::<Timeout>);

    // Main mount effect: measure, register the draw hook, wire input, auto-center
    {
        let container_ref = container_ref.clone();
        let layer_ref = layer_ref.clone();
        let viewport = viewport.clone();
        let initial_bounds = props.initial_bounds;
        let polish_timer = polish_timer.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window();
            let container = container_ref.cast::<HtmlElement>();
            let camera = viewport.camera.clone();

            // Pushes the current transform to the layer element.
            let draw: Rc<dyn Fn()> = {
                let layer_ref = layer_ref.clone();
                let camera = camera.clone();
                Rc::new(move || {
                    let Some(layer) = layer_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let cam = camera.borrow();
                    let style = layer.style();
                    let _ = style.set_property("transform", &cam.transform.css());
                    let _ = style.set_property(
                        "transition",
                        &if cam.transition_ms > 0 {
                            format!("transform {}ms cubic-bezier(0.22, 1, 0.36, 1)", cam.transition_ms)
                        } else {
                            "none".to_string()
                        },
                    );
                })
            };
            *viewport.draw_ref.borrow_mut() = Some(draw.clone());

            if let Some(el) = &container {
                camera.borrow_mut().set_viewport(measure(el));
            }

            // Initial fit, then one cosmetic zoom step a little later
            if let Some(bounds) = initial_bounds {
                if camera.borrow_mut().auto_center_initial(bounds) {
                    draw();
                    let camera = camera.clone();
                    let draw = draw.clone();
                    let delay = camera.borrow().config.polish_delay_ms;
                    *polish_timer.borrow_mut() = Some(Timeout::new(delay, move || {
                        if camera.borrow_mut().auto_center_polish() {
                            draw();
                        }
                    }));
                }
            }

            let wheel_cb = {
                let camera = camera.clone();
                let draw = draw.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    let mut cam = camera.borrow_mut();
                    cam.note_user_input();
                    if cam.is_locked() {
                        return;
                    }
                    e.prevent_default();
                    cam.apply_wheel(WheelInput {
                        delta_x: e.delta_x(),
                        delta_y: e.delta_y(),
                        mode: DeltaMode::from_dom(e.delta_mode()),
                    });
                    drop(cam);
                    draw();
                }) as Box<dyn FnMut(_)>)
            };
            let pointerdown_cb = {
                let camera = camera.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    let mut cam = camera.borrow_mut();
                    cam.note_user_input();
                    if e.button() == 0 {
                        cam.begin_drag(e.client_x() as f64, e.client_y() as f64);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let pointermove_cb = {
                let camera = camera.clone();
                let draw = draw.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    let mut cam = camera.borrow_mut();
                    if !cam.panning {
                        return;
                    }
                    cam.drag_to(e.client_x() as f64, e.client_y() as f64);
                    drop(cam);
                    draw();
                }) as Box<dyn FnMut(_)>)
            };
            let pointerup_cb = {
                let camera = camera.clone();
                Closure::wrap(Box::new(move |_e: PointerEvent| {
                    camera.borrow_mut().end_drag();
                }) as Box<dyn FnMut(_)>)
            };
            let touchstart_cb = {
                let camera = camera.clone();
                Closure::wrap(Box::new(move |_e: web_sys::TouchEvent| {
                    camera.borrow_mut().note_user_input();
                }) as Box<dyn FnMut(_)>)
            };
            // Arrows pan, +/- zoom
            let keydown_cb = {
                let camera = camera.clone();
                let draw = draw.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if is_text_entry(&e) {
                        return;
                    }
                    let mut cam = camera.borrow_mut();
                    cam.note_user_input();
                    if cam.is_locked() {
                        return;
                    }
                    let step = cam.config.key_pan_step;
                    match e.key().as_str() {
                        "ArrowLeft" => cam.pan_by(step, 0.0),
                        "ArrowRight" => cam.pan_by(-step, 0.0),
                        "ArrowUp" => cam.pan_by(0.0, step),
                        "ArrowDown" => cam.pan_by(0.0, -step),
                        "+" | "=" => cam.zoom_in(),
                        "-" | "_" => cam.zoom_out(),
                        _ => return,
                    }
                    e.prevent_default();
                    drop(cam);
                    draw();
                }) as Box<dyn FnMut(_)>)
            };
            let resize_cb = {
                let camera = camera.clone();
                let container_ref = container_ref.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(el) = container_ref.cast::<HtmlElement>() {
                        camera.borrow_mut().set_viewport(measure(&el));
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(el) = &container {
                let _ = el.add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
                let _ = el.add_event_listener_with_callback(
                    "pointerdown",
                    pointerdown_cb.as_ref().unchecked_ref(),
                );
                let _ = el.add_event_listener_with_callback(
                    "touchstart",
                    touchstart_cb.as_ref().unchecked_ref(),
                );
            }
            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback(
                    "pointermove",
                    pointermove_cb.as_ref().unchecked_ref(),
                );
                let _ = win.add_event_listener_with_callback(
                    "pointerup",
                    pointerup_cb.as_ref().unchecked_ref(),
                );
                let _ = win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
                let _ = win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }

            // Cleanup
            move || {
                if let Some(el) = &container {
                    let _ = el.remove_event_listener_with_callback(
                        "wheel",
                        wheel_cb.as_ref().unchecked_ref(),
                    );
                    let _ = el.remove_event_listener_with_callback(
                        "pointerdown",
                        pointerdown_cb.as_ref().unchecked_ref(),
                    );
                    let _ = el.remove_event_listener_with_callback(
                        "touchstart",
                        touchstart_cb.as_ref().unchecked_ref(),
                    );
                }
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "pointermove",
                        pointermove_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "pointerup",
                        pointerup_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                polish_timer.borrow_mut().take();
                viewport.draw_ref.borrow_mut().take();
                camera.borrow_mut().set_viewport(None);
            }
        });
    }

    // Tiles ignore the click that ends a drag
    let on_tile = {
        let on_select = props.on_select.clone();
        let camera = viewport.camera.clone();
        let locked = props.locked;
        Callback::from(move |kind: ComponentKind| {
            if locked || camera.borrow().was_drag() {
                return;
            }
            on_select.emit(kind);
        })
    };

    let palette = theme.theme.palette();
    let initial_transform = viewport.camera.borrow().transform.css();
    let cursor = if props.locked { "default" } else { "grab" };
    html! {
        <div ref={container_ref}
            style={format!("position:absolute; inset:0; overflow:hidden; touch-action:none; cursor:{}; background-image:radial-gradient({} 1px, transparent 1px); background-size:24px 24px;", cursor, palette.border)}>
            <div ref={layer_ref}
                style={format!("position:absolute; left:0; top:0; width:{s}px; height:{s}px; transform-origin:0 0; transform:{t}; will-change:transform;", s = CANVAS_SIZE, t = initial_transform)}>
                { for props.layout.tiles.iter().map(|t| html! {
                    <PreviewTile key={t.kind.id()} kind={t.kind} bounds={t.bounds} on_select={on_tile.clone()} />
                }) }
            </div>
        </div>
    }
}
