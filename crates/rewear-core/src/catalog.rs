//! Browse page logic: narrow the catalog down and put it in order

use crate::models::{Category, Condition, Item, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the browse grid is ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured items first
    #[default]
    Featured,
    /// Highest id first
    Newest,
    PointsLow,
    PointsHigh,
    /// Leave the filtered order alone
    Unsorted,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PointsLow => "points-low",
            SortKey::PointsHigh => "points-high",
            SortKey::Unsorted => "unsorted",
        }
    }

    /// Unknown keys map to `Unsorted` rather than failing
    pub fn parse(key: &str) -> Self {
        match key {
            "featured" => SortKey::Featured,
            "newest" => SortKey::Newest,
            "points-low" => SortKey::PointsLow,
            "points-high" => SortKey::PointsHigh,
            _ => SortKey::Unsorted,
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::parse(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the browse page lets you narrow by. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub category: Option<Category>,
    pub size: Option<Size>,
    pub condition: Option<Condition>,
    pub sort_key: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn size(mut self, size: Option<Size>) -> Self {
        self.size = size;
        self
    }

    pub fn condition(mut self, condition: Option<Condition>) -> Self {
        self.condition = condition;
        self
    }

    pub fn sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// True when nothing narrows the list and the sort is the initial one
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    fn matches(&self, item: &Item, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || item.title.to_lowercase().contains(needle)
            || item.category.label().to_lowercase().contains(needle);
        let matches_category = self.category.as_ref().map_or(true, |c| *c == item.category);
        let matches_size = self.size.as_ref().map_or(true, |s| *s == item.size);
        let matches_condition = self
            .condition
            .as_ref()
            .map_or(true, |c| *c == item.condition);

        matches_search && matches_category && matches_size && matches_condition
    }
}

/// Parse a facet selection where "all" (or nothing) means no filter
pub fn facet<T: From<String>>(label: &str) -> Option<T> {
    let label = label.trim();
    if label.is_empty() || label.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(T::from(label.to_string()))
    }
}

/// Produce the visible, ordered subset of `items`.
///
/// Every filter has to pass. Sorting is stable, so records with equal keys
/// keep the order they had in `items`. The input is never touched.
pub fn filter_and_sort(items: &[Item], criteria: &FilterCriteria) -> Vec<Item> {
    let needle = criteria.search_term.to_lowercase();

    let mut visible: Vec<Item> = items
        .iter()
        .filter(|item| criteria.matches(item, &needle))
        .cloned()
        .collect();

    // slice::sort_by is stable, which keeps ties in input order
    match criteria.sort_key {
        SortKey::Featured => visible.sort_by(|a, b| b.featured.cmp(&a.featured)),
        SortKey::Newest => visible.sort_by(|a, b| b.id.cmp(&a.id)),
        SortKey::PointsLow => visible.sort_by(|a, b| a.points.cmp(&b.points)),
        SortKey::PointsHigh => visible.sort_by(|a, b| b.points.cmp(&a.points)),
        SortKey::Unsorted => {}
    }

    tracing::debug!(
        total = items.len(),
        visible = visible.len(),
        sort = %criteria.sort_key,
        "Filtered catalog"
    );
    visible
}

/// Flip `favorited` on the item with `item_id`, returning a fresh list.
/// An unknown id gives back an unchanged copy.
pub fn toggle_favorite(items: &[Item], item_id: u64) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if item.id == item_id {
                Item {
                    favorited: !item.favorited,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// "N items found" line under the filters
pub fn results_summary(count: usize) -> String {
    format!("{} items found", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, title: &str, category: Category, points: u32, featured: bool) -> Item {
        Item::new(id, title, category, Size::M, Condition::Good, points).with_featured(featured)
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("points-high"), SortKey::PointsHigh);
        assert_eq!(SortKey::parse("newest"), SortKey::Newest);
        assert_eq!(SortKey::parse("alphabetical"), SortKey::Unsorted);
        assert_eq!(SortKey::default(), SortKey::Featured);
    }

    #[test]
    fn test_facet_all_is_none() {
        assert_eq!(facet::<Category>("all"), None);
        assert_eq!(facet::<Category>("ALL"), None);
        assert_eq!(facet::<Category>(""), None);
        assert_eq!(facet::<Category>("Shoes"), Some(Category::Shoes));
    }

    #[test]
    fn test_is_default() {
        assert!(FilterCriteria::new().is_default());
        assert!(!FilterCriteria::new().search("coat").is_default());
        assert!(!FilterCriteria::new().sort(SortKey::Newest).is_default());
    }

    #[test]
    fn test_empty_input() {
        let criteria = FilterCriteria::new().search("coat").sort(SortKey::Newest);
        assert!(filter_and_sort(&[], &criteria).is_empty());
    }

    #[test]
    fn test_featured_is_stable_partition() {
        let items = vec![
            item(1, "A", Category::Tops, 10, false),
            item(2, "B", Category::Tops, 20, true),
            item(3, "C", Category::Tops, 30, false),
            item(4, "D", Category::Tops, 40, true),
        ];
        let result = filter_and_sort(&items, &FilterCriteria::new());
        assert_eq!(ids(&result), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_points_and_newest_orders() {
        let items = vec![
            item(1, "A", Category::Tops, 30, false),
            item(2, "B", Category::Tops, 10, false),
            item(3, "C", Category::Tops, 30, false),
        ];

        let low = filter_and_sort(&items, &FilterCriteria::new().sort(SortKey::PointsLow));
        assert_eq!(ids(&low), vec![2, 1, 3]);

        let high = filter_and_sort(&items, &FilterCriteria::new().sort(SortKey::PointsHigh));
        assert_eq!(ids(&high), vec![1, 3, 2]);

        let newest = filter_and_sort(&items, &FilterCriteria::new().sort(SortKey::Newest));
        assert_eq!(ids(&newest), vec![3, 2, 1]);

        let unsorted = filter_and_sort(&items, &FilterCriteria::new().sort(SortKey::Unsorted));
        assert_eq!(ids(&unsorted), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_matches_title_or_category() {
        let items = vec![
            item(1, "Vintage Denim Jacket", Category::Outerwear, 85, true),
            item(2, "Silk Blouse", Category::Tops, 55, false),
        ];

        let by_title = filter_and_sort(&items, &FilterCriteria::new().search("DENIM"));
        assert_eq!(ids(&by_title), vec![1]);

        let by_category = filter_and_sort(&items, &FilterCriteria::new().search("tops"));
        assert_eq!(ids(&by_category), vec![2]);
    }

    #[test]
    fn test_toggle_favorite() {
        let items = vec![
            item(1, "A", Category::Tops, 10, false),
            item(2, "B", Category::Tops, 20, false),
        ];
        let toggled = toggle_favorite(&items, 2);
        assert!(!toggled[0].favorited);
        assert!(toggled[1].favorited);
        assert!(!items[1].favorited);

        let back = toggle_favorite(&toggled, 2);
        assert_eq!(back, items);

        assert_eq!(toggle_favorite(&items, 99), items);
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(0), "0 items found");
        assert_eq!(results_summary(8), "8 items found");
    }
}
