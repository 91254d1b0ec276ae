use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlIFrameElement};
use yew::prelude::*;

use crate::model::ComponentKind;
use crate::showcase;

#[derive(Clone, PartialEq)]
enum FrameState {
    Pending,
    Ready(Element),
    /// No frame document (blocked or detached); render inline instead.
    Unavailable,
}

fn frame_body(frame: &HtmlIFrameElement) -> Option<Element> {
    let body = frame.content_document()?.body()?;
    let _ = body.set_attribute("style", "margin:0;");
    Some(body.into())
}

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewFrameProps {
    pub kind: ComponentKind,
    #[prop_or(480)]
    pub height: u32,
}

/// Mounts the component inside an iframe's document so its styles and the
/// page's styles never meet.
#[function_component(PreviewFrame)]
pub fn preview_frame(props: &PreviewFrameProps) -> Html {
    let frame_ref = use_node_ref();
    let state = use_state(|| FrameState::Pending);

    // Some browsers swap the initial about:blank document on load, so the body
    // is looked up now and again after `load`.
    {
        let frame_ref = frame_ref.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let frame = frame_ref.cast::<HtmlIFrameElement>();
            let load_cb = {
                let frame = frame.clone();
                let state = state.clone();
                Closure::wrap(Box::new(move || {
                    match frame.as_ref().and_then(frame_body) {
                        Some(body) => state.set(FrameState::Ready(body)),
                        None => {
                            log::warn!("preview frame has no document; rendering inline");
                            state.set(FrameState::Unavailable);
                        }
                    }
                }) as Box<dyn FnMut()>)
            };
            if let Some(f) = &frame {
                let _ = f.add_event_listener_with_callback("load", load_cb.as_ref().unchecked_ref());
                if let Some(body) = frame_body(f) {
                    state.set(FrameState::Ready(body));
                }
            } else {
                state.set(FrameState::Unavailable);
            }
            move || {
                if let Some(f) = &frame {
                    let _ = f.remove_event_listener_with_callback(
                        "load",
                        load_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    if *state == FrameState::Unavailable {
        return html! {
            <div style={format!("height:{}px; overflow:auto; border-radius:10px;", props.height)}>
                { showcase::render(props.kind) }
            </div>
        };
    }
    let portal = match &*state {
        FrameState::Ready(body) => create_portal(showcase::render(props.kind), body.clone()),
        _ => html! {},
    };
    html! {
        <>
            <iframe ref={frame_ref} title={props.kind.descriptor().title}
                style={format!("width:100%; height:{}px; border:0; border-radius:10px; background:#fff;", props.height)} />
            { portal }
        </>
    }
}
