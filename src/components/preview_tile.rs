use yew::prelude::*;

use super::app::ThemeContext;
use crate::model::{AssetKind, ComponentKind};
use crate::state::Rect;

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewTileProps {
    pub kind: ComponentKind,
    pub bounds: Rect,
    pub on_select: Callback<ComponentKind>,
}

#[function_component(PreviewTile)]
pub fn preview_tile(props: &PreviewTileProps) -> Html {
    let theme = use_context::<ThemeContext>().expect("ThemeContext missing");
    let p = theme.theme.palette();
    let d = props.kind.descriptor();
    let onclick = {
        let cb = props.on_select.clone();
        let kind = props.kind;
        Callback::from(move |_| cb.emit(kind))
    };
    let b = props.bounds;
    // first asset is the poster; videos loop silently
    let media = match d.preview_assets.first() {
        Some(a) if a.kind == AssetKind::Video => html! {
            <video src={a.url} autoplay=true muted=true loop=true playsinline=true
                style="width:100%; height:100%; object-fit:cover; pointer-events:none;" />
        },
        Some(a) => html! {
            <img src={a.url} alt={d.title} draggable="false"
                style="width:100%; height:100%; object-fit:cover; pointer-events:none;" />
        },
        None => html! {
            <div style="display:flex; align-items:center; justify-content:center; height:100%; opacity:0.5;">{"No preview"}</div>
        },
    };
    html! {
        <div {onclick}
            style={format!("position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; display:flex; flex-direction:column; border:1px solid {}; border-radius:12px; overflow:hidden; background:{}; cursor:pointer; user-select:none;", b.x, b.y, b.width, b.height, p.border, p.surface)}>
            <div style="flex:1; min-height:0; background:#000;">{ media }</div>
            <div style="display:flex; justify-content:space-between; align-items:center; padding:8px 12px; font-size:13px;">
                <span style="font-weight:600;">{ d.title }</span>
                <span style={format!("color:{};", p.muted)}>{ d.category.label() }</span>
            </div>
        </div>
    }
}
