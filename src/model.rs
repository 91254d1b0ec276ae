//! Catalog data model for the showcase.
//! Descriptors are static: they are defined here at build time and never created at runtime.

/// Top-level split of the catalog, toggled in the catalog panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Blocks,
    Backgrounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Hero,
    Cta,
    Pricing,
    Faq,
    Background,
}

impl Category {
    /// Display order of category groups.
    pub const ORDERED: [Category; 5] = [
        Category::Hero,
        Category::Cta,
        Category::Pricing,
        Category::Faq,
        Category::Background,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Hero => "Hero Sections",
            Category::Cta => "Calls to Action",
            Category::Pricing => "Pricing",
            Category::Faq => "FAQ",
            Category::Background => "Backgrounds",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Category::Background => Section::Backgrounds,
            _ => Section::Blocks,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Video,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewAsset {
    pub kind: AssetKind,
    pub url: &'static str,
}

/// Every component the site knows how to render. Ids resolve to a variant at
/// compile time; only the string boundary (URLs, registry requests) goes through
/// [`ComponentKind::from_id`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    HeroMinimalism,
    HeroGradient,
    CtaSplit,
    PricingCards,
    FaqAccordion,
    BackgroundGrid,
    BackgroundAurora,
}

impl ComponentKind {
    #[cfg(test)]
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::HeroMinimalism,
        ComponentKind::HeroGradient,
        ComponentKind::CtaSplit,
        ComponentKind::PricingCards,
        ComponentKind::FaqAccordion,
        ComponentKind::BackgroundGrid,
        ComponentKind::BackgroundAurora,
    ];

    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    pub fn from_id(id: &str) -> Option<Self> {
        CATALOG.iter().find(|d| d.id == id).map(|d| d.kind)
    }

    pub fn descriptor(self) -> &'static ComponentDescriptor {
        // CATALOG is declared in variant order.
        &CATALOG[self as usize]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComponentDescriptor {
    pub kind: ComponentKind,
    /// Unique, kebab-case.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub preview_assets: &'static [PreviewAsset],
    /// Path of the snippet inside this crate; served verbatim by the registry.
    pub source_path: &'static str,
    /// `cargo add` specs the snippet needs.
    pub dependencies: &'static [&'static str],
    /// Height of the preview tile on the canvas, in canvas units.
    pub tile_height: f64,
}

const YEW: &str = "yew@0.21 --features csr";
const WEB_SYS: &str = "web-sys@0.3";

pub static CATALOG: [ComponentDescriptor; 7] = [
    ComponentDescriptor {
        kind: ComponentKind::HeroMinimalism,
        id: "hero-minimalism",
        title: "Hero Minimalism",
        description: "A quiet, type-led hero with a single call to action.",
        category: Category::Hero,
        preview_assets: &[PreviewAsset {
            kind: AssetKind::Image,
            url: "/previews/hero-minimalism.webp",
        }],
        source_path: "src/showcase/hero_minimalism.rs",
        dependencies: &[YEW],
        tile_height: 320.0,
    },
    ComponentDescriptor {
        kind: ComponentKind::HeroGradient,
        id: "hero-gradient",
        title: "Hero Gradient",
        description: "Bold headline over a layered radial gradient.",
        category: Category::Hero,
        preview_assets: &[
            PreviewAsset {
                kind: AssetKind::Image,
                url: "/previews/hero-gradient.webp",
            },
            PreviewAsset {
                kind: AssetKind::Video,
                url: "/previews/hero-gradient.mp4",
            },
        ],
        source_path: "src/showcase/hero_gradient.rs",
        dependencies: &[YEW],
        tile_height: 380.0,
    },
    ComponentDescriptor {
        kind: ComponentKind::CtaSplit,
        id: "cta-split",
        title: "CTA Split",
        description: "Two-column call to action with an email capture field.",
        category: Category::Cta,
        preview_assets: &[PreviewAsset {
            kind: AssetKind::Image,
            url: "/previews/cta-split.webp",
        }],
        source_path: "src/showcase/cta_split.rs",
        dependencies: &[YEW, WEB_SYS],
        tile_height: 240.0,
    },
    ComponentDescriptor {
        kind: ComponentKind::PricingCards,
        id: "pricing-cards",
        title: "Pricing Cards",
        description: "Three-tier pricing with a monthly/yearly switch.",
        category: Category::Pricing,
        preview_assets: &[PreviewAsset {
            kind: AssetKind::Image,
            url: "/previews/pricing-cards.webp",
        }],
        source_path: "src/showcase/pricing_cards.rs",
        dependencies: &[YEW],
        tile_height: 420.0,
    },
    ComponentDescriptor {
        kind: ComponentKind::FaqAccordion,
        id: "faq-accordion",
        title: "FAQ Accordion",
        description: "Collapsible question list, one item open at a time.",
        category: Category::Faq,
        preview_assets: &[PreviewAsset {
            kind: AssetKind::Image,
            url: "/previews/faq-accordion.webp",
        }],
        source_path: "src/showcase/faq_accordion.rs",
        dependencies: &[YEW],
        tile_height: 360.0,
    },
    ComponentDescriptor {
        kind: ComponentKind::BackgroundGrid,
        id: "background-grid",
        title: "Background Grid",
        description: "Fading line grid for section backdrops.",
        category: Category::Background,
        preview_assets: &[PreviewAsset {
            kind: AssetKind::Image,
            url: "/previews/background-grid.webp",
        }],
        source_path: "src/showcase/background_grid.rs",
        dependencies: &[YEW],
        tile_height: 260.0,
    },
    ComponentDescriptor {
        kind: ComponentKind::BackgroundAurora,
        id: "background-aurora",
        title: "Background Aurora",
        description: "Slow drifting colour bands behind content.",
        category: Category::Background,
        preview_assets: &[PreviewAsset {
            kind: AssetKind::Video,
            url: "/previews/background-aurora.mp4",
        }],
        source_path: "src/showcase/background_aurora.rs",
        dependencies: &[YEW],
        tile_height: 300.0,
    },
];

/// The component shown in the detail modal. Present only while it is open.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedComponent {
    pub kind: ComponentKind,
    pub name: String,
    pub description: String,
}

impl SelectedComponent {
    pub fn from_kind(kind: ComponentKind) -> Self {
        let d = kind.descriptor();
        Self {
            kind,
            name: d.title.to_string(),
            description: d.description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_order_matches_kind_discriminants() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.descriptor().kind, kind);
        }
    }

    #[test]
    fn ids_are_unique_and_round_trip() {
        let ids: HashSet<_> = CATALOG.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(ComponentKind::from_id("does-not-exist"), None);
    }

    #[test]
    fn backgrounds_are_their_own_section() {
        assert_eq!(Category::Background.section(), Section::Backgrounds);
        assert_eq!(Category::Hero.section(), Section::Blocks);
    }
}
