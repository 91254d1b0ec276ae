use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::app::ThemeContext;
use crate::filter::{CatalogFilter, SectionFilter, filter_catalog};
use crate::model::{CATALOG, ComponentKind, Section};

#[derive(Properties, PartialEq, Clone)]
pub struct CatalogPanelProps {
    pub filter: CatalogFilter,
    pub on_filter: Callback<CatalogFilter>,
    pub on_select: Callback<ComponentKind>,
}

#[function_component(CatalogPanel)]
pub fn catalog_panel(props: &CatalogPanelProps) -> Html {
    let theme = use_context::<ThemeContext>().expect("ThemeContext missing");
    let p = theme.theme.palette();
    let groups = filter_catalog(&CATALOG, &props.filter.query, props.filter.section);
    let total: usize = groups.iter().map(|g| g.items.len()).sum();

    let on_input = {
        let filter = props.filter.clone();
        let cb = props.on_filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(CatalogFilter {
                query: input.value(),
                ..filter.clone()
            });
        })
    };
    let section_button = |label: &'static str, section: SectionFilter| {
        let filter = props.filter.clone();
        let cb = props.on_filter.clone();
        let active = props.filter.section == section;
        let onclick = Callback::from(move |_| {
            cb.emit(CatalogFilter {
                section,
                ..filter.clone()
            })
        });
        let style = format!(
            "flex:1; padding:4px 8px; border-radius:6px; border:1px solid {}; background:{}; color:{}; cursor:pointer; font-size:12px;",
            p.border,
            if active { p.accent } else { "transparent" },
            if active { "#fff" } else { p.text },
        );
        html! { <button {onclick} {style}>{ label }</button> }
    };

    html! {
        <div style={format!("position:absolute; top:12px; left:12px; bottom:12px; width:260px; background:{}; border:1px solid {}; border-radius:10px; padding:12px; display:flex; flex-direction:column; gap:10px; font-size:14px;", p.surface, p.border)}>
            <h2 style="margin:0; font-size:16px;">{"Components"}</h2>
            <input type="search" placeholder="Search components…" value={props.filter.query.clone()} oninput={on_input}
                style={format!("padding:6px 10px; border-radius:6px; border:1px solid {}; background:transparent; color:{};", p.border, p.text)} />
            <div style="display:flex; gap:6px;">
                { section_button("All", SectionFilter::All) }
                { section_button("Blocks", SectionFilter::Only(Section::Blocks)) }
                { section_button("Backgrounds", SectionFilter::Only(Section::Backgrounds)) }
            </div>
            <div style="flex:1; overflow:auto; display:flex; flex-direction:column; gap:12px;">
                if total == 0 {
                    <div style={format!("color:{};", p.muted)}>{"No components match."}</div>
                }
                { for groups.iter().map(|g| html! {
                    <div>
                        <div style={format!("font-size:11px; text-transform:uppercase; letter-spacing:0.08em; color:{}; margin-bottom:4px;", p.muted)}>
                            { format!("{} ({})", g.category.label(), g.items.len()) }
                        </div>
                        { for g.items.iter().map(|d| {
                            let cb = props.on_select.clone();
                            let kind = d.kind;
                            html! {
                                <div onclick={Callback::from(move |_| cb.emit(kind))}
                                    style="padding:5px 8px; border-radius:6px; cursor:pointer;">
                                    { d.title }
                                </div>
                            }
                        }) }
                    </div>
                }) }
            </div>
        </div>
    }
}
