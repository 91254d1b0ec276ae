//! Catalog filtering: free-text search plus the blocks/backgrounds toggle.

use crate::model::{Category, ComponentDescriptor, Section};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionFilter {
    #[default]
    All,
    Only(Section),
}

impl SectionFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            SectionFilter::All => true,
            SectionFilter::Only(s) => category.section() == s,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogFilter {
    pub query: String,
    pub section: SectionFilter,
}

impl CatalogFilter {
    pub fn matches(&self, d: &ComponentDescriptor) -> bool {
        self.section.admits(d.category) && title_matches(d.title, &self.query)
    }
}

/// Case-insensitive substring match; a blank query matches everything.
pub fn title_matches(title: &str, query: &str) -> bool {
    let q = query.trim();
    if q.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&q.to_lowercase())
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub items: Vec<&'a ComponentDescriptor>,
}

/// Groups matching descriptors by category in display order, dropping empty groups.
pub fn filter_catalog<'a>(
    items: &'a [ComponentDescriptor],
    query: &str,
    section: SectionFilter,
) -> Vec<CategoryGroup<'a>> {
    let filter = CatalogFilter {
        query: query.to_string(),
        section,
    };
    Category::ORDERED
        .iter()
        .filter_map(|&category| {
            let matching: Vec<_> = items
                .iter()
                .filter(|d| d.category == category && filter.matches(d))
                .collect();
            if matching.is_empty() {
                None
            } else {
                Some(CategoryGroup {
                    category,
                    items: matching,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CATALOG;

    fn ids(groups: &[CategoryGroup]) -> Vec<&'static str> {
        groups
            .iter()
            .flat_map(|g| g.items.iter().map(|d| d.id))
            .collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(title_matches("Hero Minimalism", "hero"));
        assert!(title_matches("Hero Minimalism", "HERO"));
        assert!(title_matches("Hero Minimalism", "minim"));
        assert!(!title_matches("Hero Minimalism", "xyz123"));
    }

    #[test]
    fn unmatched_query_yields_no_groups() {
        assert!(filter_catalog(&CATALOG, "xyz123", SectionFilter::All).is_empty());
    }

    #[test]
    fn blank_query_keeps_everything_in_category_order() {
        let groups = filter_catalog(&CATALOG, "  ", SectionFilter::All);
        assert_eq!(ids(&groups).len(), CATALOG.len());
        let cats: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(cats, Category::ORDERED.to_vec());
    }

    #[test]
    fn hero_query_groups_only_heroes() {
        let groups = filter_catalog(&CATALOG, "hero", SectionFilter::All);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, Category::Hero);
        assert_eq!(ids(&groups), vec!["hero-minimalism", "hero-gradient"]);
    }

    #[test]
    fn section_toggle_restricts_categories() {
        let groups = filter_catalog(&CATALOG, "", SectionFilter::Only(Section::Backgrounds));
        assert!(groups.iter().all(|g| g.category == Category::Background));
        let groups = filter_catalog(&CATALOG, "background", SectionFilter::Only(Section::Blocks));
        assert!(groups.is_empty());
    }
}
