//! Client-side filtering over listings.

use domains::{Category, Listing, ListingType};

/// Browse/search criteria. Every unset criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub category: Option<Category>,
    pub kind: Option<ListingType>,
    pub query: Option<String>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn kind(mut self, kind: ListingType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if self.category.is_some_and(|c| c != listing.category) {
            return false;
        }
        if self.kind.is_some_and(|k| k != listing.kind) {
            return false;
        }
        match self.query.as_deref() {
            Some(q) => text_matches(
                q,
                [
                    listing.title.as_str(),
                    listing.description.as_str(),
                    listing.location.as_str(),
                    listing.owner.as_str(),
                ],
            ),
            None => true,
        }
    }
}

/// Case-insensitive substring match of a trimmed query against any field.
/// A blank query matches.
pub fn text_matches<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::seed::seed_listings;

    fn titles(filter: &ListingFilter) -> Vec<String> {
        seed_listings()
            .into_iter()
            .filter(|l| filter.matches(l))
            .map(|l| l.title)
            .collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        assert_eq!(titles(&ListingFilter::new()).len(), 4);
        assert_eq!(titles(&ListingFilter::new().query("   ")).len(), 4);
    }

    #[test]
    fn test_category_and_kind() {
        assert_eq!(
            titles(&ListingFilter::new().category(Category::Food)),
            vec!["Salad bowl", "Fresh tomatoes"]
        );
        assert_eq!(
            titles(&ListingFilter::new().kind(ListingType::FreeDelayed)),
            vec!["Cafe voucher"]
        );
        assert!(titles(
            &ListingFilter::new()
                .category(Category::Kerbside)
                .kind(ListingType::Free)
        )
        .is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        assert_eq!(titles(&ListingFilter::new().query("KETTLE")), vec!["Green kettle"]);
        // matches owner
        assert_eq!(titles(&ListingFilter::new().query("otti")), vec!["Cafe voucher"]);
        // matches location
        assert_eq!(titles(&ListingFilter::new().query(" west end ")), vec!["Fresh tomatoes"]);
        assert!(titles(&ListingFilter::new().query("piano")).is_empty());
    }
}
