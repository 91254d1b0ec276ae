use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CodeBlockProps {
    pub code: AttrValue,
    #[prop_or(true)]
    pub line_numbers: bool,
}

#[function_component]
pub fn CodeBlock(props: &CodeBlockProps) -> Html {
    let gutter = "display:inline-block; width:3ch; margin-right:14px; text-align:right; opacity:0.4; user-select:none;";
    html! {
        <pre style="margin:0; padding:14px 16px; max-height:420px; overflow:auto; background:#0d1117; color:#e6edf3; border-radius:10px; font-size:12.5px; line-height:1.55; font-family:ui-monospace, SFMono-Regular, Menlo, monospace;">
            <code>
                { for props.code.lines().enumerate().map(|(i, line)| html! {
                    <div>
                        if props.line_numbers {
                            <span style={gutter}>{ i + 1 }</span>
                        }
                        { line.to_string() }
                    </div>
                }) }
            </code>
        </pre>
    }
}
