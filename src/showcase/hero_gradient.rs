use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroGradientProps {
    #[prop_or(AttrValue::from("Design at the speed of thought"))]
    pub headline: AttrValue,
    #[prop_or(AttrValue::from("#7c3aed"))]
    pub accent: AttrValue,
}

#[function_component(HeroGradient)]
pub fn hero_gradient(props: &HeroGradientProps) -> Html {
    let backdrop = format!(
        "position:absolute; inset:0; background:radial-gradient(60% 60% at 20% 20%, {accent}55 0%, transparent 70%), radial-gradient(50% 50% at 80% 30%, #06b6d455 0%, transparent 70%), radial-gradient(70% 60% at 50% 100%, {accent}33 0%, transparent 80%);",
        accent = props.accent
    );
    html! {
        <section style="position:relative; overflow:hidden; min-height:460px; display:flex; align-items:center; justify-content:center; padding:80px 24px; background:#0b0b12; color:#f5f5f7; font-family:system-ui, sans-serif;">
            <div style={backdrop}></div>
            <div style="position:relative; display:flex; flex-direction:column; align-items:center; gap:20px; text-align:center;">
                <h1 style="margin:0; font-size:56px; font-weight:700; letter-spacing:-0.03em; max-width:760px; line-height:1.05;">{ props.headline.clone() }</h1>
                <p style="margin:0; font-size:18px; opacity:0.75; max-width:540px;">{"Compose pages from ready-made sections and make them yours."}</p>
                <div style="display:flex; gap:12px;">
                    <a href="#" style="padding:11px 22px; border-radius:10px; background:#f5f5f7; color:#0b0b12; text-decoration:none; font-weight:600;">{"Start free"}</a>
                    <a href="#" style="padding:11px 22px; border-radius:10px; border:1px solid rgba(255,255,255,0.25); color:#f5f5f7; text-decoration:none;">{"Live demo"}</a>
                </div>
            </div>
        </section>
    }
}
