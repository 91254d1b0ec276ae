use yew::prelude::*;

static ITEMS: [(&str, &str); 4] = [
    ("Can I use these in commercial projects?", "Yes. Copy them, change them, ship them."),
    ("Do I need a component library?", "No. Each section is a single file with inline styles."),
    ("Which yew version is supported?", "0.21 with the csr feature."),
    ("How do I report a bug?", "Open an issue with the component id and a screenshot."),
];

#[function_component(FaqAccordion)]
pub fn faq_accordion() -> Html {
    let open = use_state(|| None::<usize>);
    html! {
        <section style="padding:48px 24px; background:#f9fafb; color:#111827; font-family:system-ui, sans-serif; display:flex; justify-content:center;">
            <div style="width:100%; max-width:640px; display:flex; flex-direction:column; gap:8px;">
                <h2 style="margin:0 0 12px 0; font-size:28px;">{"Frequently asked questions"}</h2>
                { for ITEMS.iter().enumerate().map(|(i, (q, a))| {
                    let is_open = *open == Some(i);
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |_| open.set(if *open == Some(i) { None } else { Some(i) }))
                    };
                    html! {
                        <div style="border:1px solid #e5e7eb; border-radius:10px; background:#fff;">
                            <button {onclick} style="width:100%; display:flex; justify-content:space-between; padding:14px 16px; border:none; background:none; font-size:15px; font-weight:600; cursor:pointer; text-align:left;">
                                <span>{ *q }</span>
                                <span>{ if is_open { "−" } else { "+" } }</span>
                            </button>
                            if is_open {
                                <p style="margin:0; padding:0 16px 14px 16px; opacity:0.75; line-height:1.5;">{ *a }</p>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
