use yew::prelude::*;

const KEYFRAMES: &str = "@keyframes aurora-drift { 0% { transform: translate3d(-10%, -5%, 0) rotate(0deg); } 50% { transform: translate3d(10%, 5%, 0) rotate(8deg); } 100% { transform: translate3d(-10%, -5%, 0) rotate(0deg); } }";

#[derive(Properties, PartialEq, Clone)]
pub struct BackgroundAuroraProps {
    #[prop_or(18)]
    pub period_secs: u32,
}

#[function_component(BackgroundAurora)]
pub fn background_aurora(props: &BackgroundAuroraProps) -> Html {
    let band = |color: &str, delay: u32| {
        format!(
            "position:absolute; inset:-30%; background:radial-gradient(40% 30% at 50% 50%, {color} 0%, transparent 70%); filter:blur(40px); opacity:0.7; animation:aurora-drift {p}s ease-in-out {d}s infinite;",
            color = color,
            p = props.period_secs,
            d = delay
        )
    };
    html! {
        <div style="position:relative; min-height:360px; background:#020617; overflow:hidden;">
            <style>{ KEYFRAMES }</style>
            <div style={band("#22d3ee", 0)}></div>
            <div style={band("#a78bfa", 3)}></div>
            <div style={band("#34d399", 6)}></div>
            <div style="position:relative; display:flex; align-items:center; justify-content:center; min-height:360px; color:#e2e8f0; font-family:system-ui, sans-serif; font-size:24px; font-weight:600;">{"Northern lights"}</div>
        </div>
    }
}
