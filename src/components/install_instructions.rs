use yew::prelude::*;

use super::app::ThemeContext;
use super::code_block::CodeBlock;
use crate::install::{InstallMethod, install_command, module_declaration};
use crate::model::ComponentKind;

#[derive(Properties, PartialEq, Clone)]
pub struct InstallInstructionsProps {
    pub kind: ComponentKind,
    pub site_url: AttrValue,
}

#[function_component]
pub fn InstallInstructions(props: &InstallInstructionsProps) -> Html {
    let theme = use_context::<ThemeContext>().expect("ThemeContext missing");
    let p = theme.theme.palette();
    let method = use_state(|| InstallMethod::Curl);
    let d = props.kind.descriptor();

    let tabs = InstallMethod::ALL.iter().map(|&m| {
        let onclick = {
            let method = method.clone();
            Callback::from(move |_| method.set(m))
        };
        let active = *method == m;
        let style = format!(
            "padding:4px 10px; border-radius:6px; border:1px solid {}; background:{}; color:{}; cursor:pointer; font-size:12px;",
            p.border,
            if active { p.accent } else { "transparent" },
            if active { "#fff" } else { p.text },
        );
        html! { <button {onclick} {style}>{ m.label() }</button> }
    });

    let command = install_command(d, *method, &props.site_url);
    html! {
        <div style="display:flex; flex-direction:column; gap:12px;">
            <div style="display:flex; gap:6px;">{ for tabs }</div>
            <CodeBlock code={AttrValue::from(command)} line_numbers={false} />
            if *method != InstallMethod::Cargo {
                <div style={format!("font-size:12px; color:{};", p.muted)}>
                    {"Then register the module in src/components/mod.rs:"}
                </div>
                <CodeBlock code={AttrValue::from(module_declaration(d))} line_numbers={false} />
            }
        </div>
    }
}
