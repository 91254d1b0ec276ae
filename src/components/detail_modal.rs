use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::app::ThemeContext;
use super::code_block::CodeBlock;
use super::install_instructions::InstallInstructions;
use super::preview_frame::PreviewFrame;
use crate::model::SelectedComponent;
use crate::source::SourceState;
use crate::state::{DetailPhase, DetailTab};

#[derive(Properties, PartialEq, Clone)]
pub struct DetailModalProps {
    pub selected: SelectedComponent,
    pub phase: DetailPhase,
    pub tab: DetailTab,
    pub source: Option<SourceState>,
    pub site_url: AttrValue,
    pub on_close: Callback<()>,
    pub on_tab: Callback<DetailTab>,
}

#[function_component]
pub fn DetailModal(props: &DetailModalProps) -> Html {
    let theme = use_context::<ThemeContext>().expect("ThemeContext missing");
    let p = theme.theme.palette();

    // Escape closes
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    on_close.emit(());
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let tab_button = |tab: DetailTab, label: &'static str| {
        let cb = props.on_tab.clone();
        let active = props.tab == tab;
        html! {
            <button onclick={Callback::from(move |_| cb.emit(tab))}
                style={format!("padding:6px 12px; border:none; border-bottom:2px solid {}; background:none; color:{}; cursor:pointer; font-weight:600;",
                    if active { p.accent } else { "transparent" }, p.text)}>
                { label }
            </button>
        }
    };

    let kind = props.selected.kind;
    let body = if props.phase == DetailPhase::Loading {
        html! {
            <div style={format!("display:flex; align-items:center; justify-content:center; height:320px; color:{};", p.muted)}>
                {"Loading…"}
            </div>
        }
    } else {
        let code_view = match &props.source {
            Some(SourceState::Loaded(code)) => html! { <CodeBlock code={AttrValue::from(code.to_string())} /> },
            Some(SourceState::Failed(e)) => html! {
                <div style="padding:14px; border-radius:10px; border:1px solid #f85149; color:#f85149;">{ e.user_message() }</div>
            },
            Some(SourceState::Loading) | None => html! {
                <div style={format!("padding:14px; color:{};", p.muted)}>{"Fetching source…"}</div>
            },
        };
        let panel = match props.tab {
            DetailTab::Code => code_view,
            DetailTab::Install => html! { <InstallInstructions kind={kind} site_url={props.site_url.clone()} /> },
        };
        html! {
            <>
                <PreviewFrame kind={kind} />
                <div style={format!("display:flex; gap:4px; border-bottom:1px solid {};", p.border)}>
                    { tab_button(DetailTab::Code, "Code") }
                    { tab_button(DetailTab::Install, "Install") }
                </div>
                { panel }
            </>
        }
    };

    html! {<div onclick={close_cb.clone()} style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div onclick={stop} style={format!("background:{}; border:1px solid {}; border-radius:14px; padding:16px 20px; width:min(960px, 94vw); max-height:92vh; overflow:auto; display:flex; flex-direction:column; gap:14px;", p.surface, p.border)}>
            <div style="display:flex; justify-content:space-between; align-items:flex-start; gap:12px;">
                <div>
                    <h3 style="margin:0; font-size:18px;">{ props.selected.name.clone() }</h3>
                    <p style={format!("margin:4px 0 0 0; font-size:13px; color:{};", p.muted)}>{ props.selected.description.clone() }</p>
                </div>
                <button onclick={close_cb} style="padding:4px 8px;">{"Close"}</button>
            </div>
            { body }
        </div>
    </div>}
}
