//! Hard-coded demo data. There is no backend, so this is the marketplace.

use crate::dashboard::{Activity, ActivityKind, ActivityStatus, ListingStatus, OwnedListing, UserProfile};
use crate::detail::{Availability, ItemDetail, ListerProfile, ListingStats};
use crate::models::{Category, Condition, Item, Size};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The browse catalog
pub fn catalog() -> Vec<Item> {
    vec![
        Item::new(1, "Vintage Denim Jacket", Category::Outerwear, Size::M, Condition::Excellent, 85)
            .with_featured(true)
            .with_owner("Sarah J.")
            .with_image("/placeholder-jacket.jpg"),
        Item::new(2, "Floral Summer Dress", Category::Dresses, Size::S, Condition::Good, 65)
            .with_favorited(true)
            .with_owner("Emma W.")
            .with_image("/placeholder-dress.jpg"),
        Item::new(3, "Designer Handbag", Category::Accessories, Size::OneSize, Condition::LikeNew, 120)
            .with_featured(true)
            .with_owner("Lisa M.")
            .with_image("/placeholder-bag.jpg"),
        Item::new(4, "Cashmere Scarf", Category::Accessories, Size::OneSize, Condition::Excellent, 75)
            .with_owner("Maya P.")
            .with_image("/placeholder-scarf.jpg"),
        Item::new(5, "Black Leather Boots", Category::Shoes, Size::Other("8".to_string()), Condition::Good, 95)
            .with_favorited(true)
            .with_owner("Anna K.")
            .with_image("/placeholder-boots.jpg"),
        Item::new(6, "Silk Blouse", Category::Tops, Size::M, Condition::LikeNew, 55)
            .with_owner("Grace L.")
            .with_image("/placeholder-blouse.jpg"),
        Item::new(7, "Wool Coat", Category::Outerwear, Size::L, Condition::Excellent, 110)
            .with_featured(true)
            .with_owner("Olivia R.")
            .with_image("/placeholder-coat.jpg"),
        Item::new(8, "Gold Necklace", Category::Jewelry, Size::OneSize, Condition::NewWithTags, 140)
            .with_owner("Zoe T.")
            .with_image("/placeholder-necklace.jpg"),
    ]
}

pub fn demo_user() -> UserProfile {
    UserProfile {
        name: "Sarah Johnson".to_string(),
        email: "sarah@email.com".to_string(),
        points: 450,
        avatar: "/placeholder-avatar.jpg".to_string(),
        join_date: "March 2024".to_string(),
    }
}

pub fn owned_listings() -> Vec<OwnedListing> {
    vec![
        OwnedListing {
            item: Item::new(1, "Vintage Denim Jacket", Category::Outerwear, Size::M, Condition::Excellent, 85)
                .with_owner("Sarah Johnson")
                .with_image("/placeholder-jacket.jpg"),
            status: ListingStatus::Active,
            views: 23,
            favorites: 8,
        },
        OwnedListing {
            item: Item::new(2, "Floral Summer Dress", Category::Dresses, Size::S, Condition::Good, 65)
                .with_owner("Sarah Johnson")
                .with_image("/placeholder-dress.jpg"),
            status: ListingStatus::Swapped,
            views: 41,
            favorites: 15,
        },
        OwnedListing {
            item: Item::new(3, "Designer Handbag", Category::Accessories, Size::OneSize, Condition::LikeNew, 120)
                .with_owner("Sarah Johnson")
                .with_image("/placeholder-bag.jpg"),
            status: ListingStatus::Pending,
            views: 12,
            favorites: 3,
        },
    ]
}

pub fn activity_history() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            kind: ActivityKind::Swap,
            item: "Black Leather Boots".to_string(),
            with_user: Some("Emma Wilson".to_string()),
            date: date(2024, 1, 15),
            status: ActivityStatus::Completed,
            points: 95,
        },
        Activity {
            id: 2,
            kind: ActivityKind::Redeem,
            item: "Cashmere Scarf".to_string(),
            with_user: None,
            date: date(2024, 1, 10),
            status: ActivityStatus::Completed,
            points: -75,
        },
        Activity {
            id: 3,
            kind: ActivityKind::List,
            item: "Vintage Denim Jacket".to_string(),
            with_user: None,
            date: date(2024, 1, 5),
            status: ActivityStatus::Active,
            points: 85,
        },
    ]
}

/// The full record behind the item page
pub fn featured_detail() -> ItemDetail {
    ItemDetail {
        item: Item::new(1, "Vintage Denim Jacket", Category::Outerwear, Size::M, Condition::Excellent, 85)
            .with_featured(true)
            .with_owner("Sarah Johnson")
            .with_image("/placeholder-jacket-1.jpg"),
        description: "Beautiful vintage denim jacket in excellent condition. This is a classic \
            piece that never goes out of style. Features include button closure, chest pockets, \
            and a perfect faded wash. No stains, tears, or significant wear. From a smoke-free \
            home. Perfect for layering or as a statement piece."
            .to_string(),
        images: vec![
            "/placeholder-jacket-1.jpg".to_string(),
            "/placeholder-jacket-2.jpg".to_string(),
            "/placeholder-jacket-3.jpg".to_string(),
        ],
        tags: vec![
            "vintage".to_string(),
            "denim".to_string(),
            "classic".to_string(),
            "layering".to_string(),
        ],
        lister: ListerProfile {
            name: "Sarah Johnson".to_string(),
            avatar: "/placeholder-user.jpg".to_string(),
            rating: 4.8,
            total_swaps: 23,
            join_date: "March 2024".to_string(),
        },
        stats: ListingStats {
            views: 45,
            favorites: 12,
            listed_on: date(2024, 1, 15),
        },
        availability: Availability::Available,
    }
}

/// Detail view for any catalog item. Only the jacket has a full record;
/// everything else gets a minimal page built from the catalog entry.
///
/// The full record is used only when the listing itself matches, not just
/// the id, so a loaded catalog that reuses id 1 keeps its own title and points.
pub fn detail_for(item: &Item) -> ItemDetail {
    let featured = featured_detail();
    if is_same_listing(&featured.item, item) {
        return ItemDetail {
            item: item.clone(),
            ..featured
        };
    }

    ItemDetail {
        item: item.clone(),
        description: String::new(),
        images: vec![item.image.clone()],
        tags: Vec::new(),
        lister: ListerProfile {
            name: item.owner.clone(),
            avatar: String::new(),
            rating: 0.0,
            total_swaps: 0,
            join_date: String::new(),
        },
        stats: ListingStats {
            views: 0,
            favorites: 0,
            listed_on: NaiveDate::default(),
        },
        availability: Availability::Available,
    }
}

// Owner, image and per-viewer flags differ between the grid and detail copies
fn is_same_listing(a: &Item, b: &Item) -> bool {
    a.id == b.id
        && a.title == b.title
        && a.category == b.category
        && a.size == b.size
        && a.condition == b.condition
        && a.points == b.points
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let items = catalog();
        let ids: HashSet<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), items.len());
        assert_eq!(items.len(), 8);
    }

    #[test]
    fn test_catalog_featured_count() {
        assert_eq!(catalog().iter().filter(|i| i.featured).count(), 3);
    }

    #[test]
    fn test_detail_for_falls_back_to_catalog_entry() {
        let items = catalog();
        let boots = &items[4];
        let detail = detail_for(boots);
        assert_eq!(detail.item, *boots);
        assert_eq!(detail.lister.name, "Anna K.");

        let jacket = detail_for(&items[0]);
        assert_eq!(jacket.tags.len(), 4);
        assert_eq!(jacket.item, items[0]);
    }

    #[test]
    fn test_detail_for_ignores_jacket_record_on_id_clash() {
        let watch = Item::new(1, "Gold Watch", Category::Jewelry, Size::OneSize, Condition::LikeNew, 300)
            .with_owner("Kai D.");
        let detail = detail_for(&watch);
        assert_eq!(detail.item, watch);
        assert!(detail.tags.is_empty());
        assert_eq!(detail.lister.name, "Kai D.");
    }
}
