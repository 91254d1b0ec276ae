//! The catalog components themselves. Each file is a self-contained snippet:
//! it is compiled into the site for live previews and served verbatim by the registry.

pub mod background_aurora;
pub mod background_grid;
pub mod cta_split;
pub mod faq_accordion;
pub mod hero_gradient;
pub mod hero_minimalism;
pub mod pricing_cards;

use yew::prelude::*;

use crate::model::ComponentKind;

pub fn render(kind: ComponentKind) -> Html {
    match kind {
        ComponentKind::HeroMinimalism => html! { <hero_minimalism::HeroMinimalism /> },
        ComponentKind::HeroGradient => html! { <hero_gradient::HeroGradient /> },
        ComponentKind::CtaSplit => html! { <cta_split::CtaSplit /> },
        ComponentKind::PricingCards => html! { <pricing_cards::PricingCards /> },
        ComponentKind::FaqAccordion => html! { <faq_accordion::FaqAccordion /> },
        ComponentKind::BackgroundGrid => html! { <background_grid::BackgroundGrid /> },
        ComponentKind::BackgroundAurora => html! { <background_aurora::BackgroundAurora /> },
    }
}

/// Source text of a snippet as shipped in the bundle.
pub fn source_text(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::HeroMinimalism => include_str!("hero_minimalism.rs"),
        ComponentKind::HeroGradient => include_str!("hero_gradient.rs"),
        ComponentKind::CtaSplit => include_str!("cta_split.rs"),
        ComponentKind::PricingCards => include_str!("pricing_cards.rs"),
        ComponentKind::FaqAccordion => include_str!("faq_accordion.rs"),
        ComponentKind::BackgroundGrid => include_str!("background_grid.rs"),
        ComponentKind::BackgroundAurora => include_str!("background_aurora.rs"),
    }
}
