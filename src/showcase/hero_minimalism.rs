use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroMinimalismProps {
    #[prop_or(AttrValue::from("Build less. Ship more."))]
    pub headline: AttrValue,
    #[prop_or(AttrValue::from("A calm starting point for product pages that let the words do the work."))]
    pub subline: AttrValue,
    #[prop_or_default]
    pub on_start: Callback<()>,
}

#[function_component(HeroMinimalism)]
pub fn hero_minimalism(props: &HeroMinimalismProps) -> Html {
    let start = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section style="min-height:420px; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:18px; padding:64px 24px; background:#fafafa; color:#111; font-family:system-ui, sans-serif; text-align:center;">
            <span style="font-size:12px; letter-spacing:0.18em; text-transform:uppercase; opacity:0.55;">{"Introducing"}</span>
            <h1 style="margin:0; font-size:48px; font-weight:600; letter-spacing:-0.02em; max-width:720px;">{ props.headline.clone() }</h1>
            <p style="margin:0; font-size:18px; line-height:1.5; opacity:0.7; max-width:520px;">{ props.subline.clone() }</p>
            <button onclick={start} style="margin-top:8px; padding:10px 22px; border-radius:999px; border:1px solid #111; background:#111; color:#fff; font-size:15px; cursor:pointer;">{"Get started"}</button>
        </section>
    }
}
