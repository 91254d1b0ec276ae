use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Billing {
    Monthly,
    Yearly,
}

struct Tier {
    name: &'static str,
    monthly: u32,
    features: &'static [&'static str],
    highlighted: bool,
}

static TIERS: [Tier; 3] = [
    Tier { name: "Starter", monthly: 0, features: &["1 project", "Community support"], highlighted: false },
    Tier { name: "Pro", monthly: 24, features: &["Unlimited projects", "Priority support", "Custom domains"], highlighted: true },
    Tier { name: "Team", monthly: 79, features: &["Everything in Pro", "SSO", "Audit log"], highlighted: false },
];

fn price_label(monthly: u32, billing: Billing) -> String {
    match (monthly, billing) {
        (0, _) => "Free".to_string(),
        (m, Billing::Monthly) => format!("${}/mo", m),
        // two months free on yearly
        (m, Billing::Yearly) => format!("${}/yr", m * 10),
    }
}

#[function_component(PricingCards)]
pub fn pricing_cards() -> Html {
    let billing = use_state(|| Billing::Monthly);
    let toggle = {
        let billing = billing.clone();
        Callback::from(move |_| {
            billing.set(match *billing {
                Billing::Monthly => Billing::Yearly,
                Billing::Yearly => Billing::Monthly,
            })
        })
    };
    let toggle_label = match *billing {
        Billing::Monthly => "Switch to yearly",
        Billing::Yearly => "Switch to monthly",
    };
    html! {
        <section style="padding:48px 24px; background:#fff; color:#0f172a; font-family:system-ui, sans-serif; display:flex; flex-direction:column; align-items:center; gap:24px;">
            <button onclick={toggle} style="padding:6px 14px; border-radius:999px; border:1px solid #cbd5e1; background:#f8fafc; cursor:pointer;">{ toggle_label }</button>
            <div style="display:flex; gap:16px; flex-wrap:wrap; justify-content:center;">
                { for TIERS.iter().map(|t| {
                    let border = if t.highlighted { "2px solid #2563eb" } else { "1px solid #e2e8f0" };
                    html! {
                        <div style={format!("width:220px; padding:20px; border-radius:14px; border:{}; display:flex; flex-direction:column; gap:10px;", border)}>
                            <h3 style="margin:0; font-size:18px;">{ t.name }</h3>
                            <div style="font-size:28px; font-weight:700;">{ price_label(t.monthly, *billing) }</div>
                            <ul style="margin:0; padding-left:18px; display:flex; flex-direction:column; gap:4px; font-size:14px;">
                                { for t.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                            </ul>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
