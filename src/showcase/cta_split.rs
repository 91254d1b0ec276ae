use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CtaSplitProps {
    #[prop_or_default]
    pub on_subscribe: Callback<String>,
}

#[function_component(CtaSplit)]
pub fn cta_split(props: &CtaSplitProps) -> Html {
    let email = use_state(String::new);
    let sent = use_state(|| false);

    let on_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_submit = {
        let email = email.clone();
        let sent = sent.clone();
        let cb = props.on_subscribe.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.contains('@') {
                cb.emit((*email).clone());
                sent.set(true);
            }
        })
    };

    html! {
        <section style="display:grid; grid-template-columns:1fr 1fr; gap:32px; align-items:center; padding:48px 40px; background:#eef2ff; color:#1e1b4b; font-family:system-ui, sans-serif;">
            <div>
                <h2 style="margin:0 0 8px 0; font-size:32px;">{"Stay in the loop"}</h2>
                <p style="margin:0; opacity:0.75;">{"One short email a month. New sections, no noise."}</p>
            </div>
            if *sent {
                <p style="margin:0; font-weight:600;">{"Thanks! Check your inbox."}</p>
            } else {
                <form onsubmit={on_submit} style="display:flex; gap:8px;">
                    <input type="email" placeholder="you@example.com" value={(*email).clone()} oninput={on_input}
                        style="flex:1; padding:10px 12px; border-radius:8px; border:1px solid #c7d2fe;" />
                    <button type="submit" style="padding:10px 18px; border-radius:8px; border:none; background:#4f46e5; color:#fff; font-weight:600; cursor:pointer;">{"Subscribe"}</button>
                </form>
            }
        </section>
    }
}
