use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BackgroundGridProps {
    #[prop_or(32)]
    pub cell: u32,
    #[prop_or(AttrValue::from("rgba(15,23,42,0.08)"))]
    pub line: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BackgroundGrid)]
pub fn background_grid(props: &BackgroundGridProps) -> Html {
    let grid = format!(
        "position:absolute; inset:0; background-image:linear-gradient(to right, {line} 1px, transparent 1px), linear-gradient(to bottom, {line} 1px, transparent 1px); background-size:{c}px {c}px; mask-image:radial-gradient(ellipse at center, #000 40%, transparent 75%); -webkit-mask-image:radial-gradient(ellipse at center, #000 40%, transparent 75%);",
        line = props.line,
        c = props.cell
    );
    html! {
        <div style="position:relative; min-height:320px; background:#fff; overflow:hidden;">
            <div style={grid}></div>
            <div style="position:relative; display:flex; align-items:center; justify-content:center; min-height:320px; font-family:system-ui, sans-serif; color:#0f172a;">
                if props.children.is_empty() {
                    <span style="font-size:22px; font-weight:600;">{"Your content here"}</span>
                } else {
                    { props.children.clone() }
                }
            </div>
        </div>
    }
}
