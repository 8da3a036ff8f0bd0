use crate::models::{Category, Condition, Item, Size, Style};
use crate::points::{estimate_points, estimate_points_for_labels};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const MAX_TAGS: usize = 8;
pub const MAX_IMAGES: usize = 6;
pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// A listing that is still being filled in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub size: Option<Size>,
    pub condition: Option<Condition>,
    pub style: Option<Style>,
    pub tags: Vec<String>,
    /// First image is the cover
    pub images: Vec<String>,
}

impl ListingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag. Blank, duplicate and over-limit tags are ignored.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.len() >= MAX_TAGS || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Stand-in for a real upload: appends a numbered placeholder path
    pub fn add_placeholder_image(&mut self) -> bool {
        if self.images.len() >= MAX_IMAGES {
            return false;
        }
        let path = format!("/placeholder-item-{}.jpg", self.images.len() + 1);
        self.images.push(path);
        true
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Live estimate shown while the form is being filled in.
    /// Anything not picked yet scores neutral.
    pub fn estimated_points(&self) -> u32 {
        let category = self.category.as_ref().map_or("", |c| c.label());
        let condition = self.condition.as_ref().map_or("", |c| c.label());
        estimate_points_for_labels(category, condition)
    }

    /// A whitespace-only title or description counts as missing. The length
    /// check counts chars, not bytes.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if self.condition.is_none() {
            missing.push("condition");
        }
        if self.images.is_empty() {
            missing.push("image");
        }
        if !missing.is_empty() {
            return Err(Error::MissingInformation(missing.join(", ")));
        }

        let length = self.description.chars().count();
        if length < MIN_DESCRIPTION_CHARS {
            return Err(Error::DescriptionTooShort {
                length,
                minimum: MIN_DESCRIPTION_CHARS,
            });
        }

        Ok(())
    }

    /// Turn the draft into a catalog item with the given id.
    ///
    /// Points always come from the estimator, never from the form.
    pub fn submit(&self, id: u64) -> Result<Item> {
        self.validate()?;

        let (Some(category), Some(condition)) = (self.category.clone(), self.condition.clone())
        else {
            return Err(Error::MissingInformation("category, condition".to_string()));
        };
        let points = estimate_points(&category, &condition);

        let mut item = Item::new(
            id,
            self.title.trim(),
            category,
            self.size.clone().unwrap_or(Size::OneSize),
            condition,
            points,
        );
        item.image = self.images.first().cloned().unwrap_or_default();

        tracing::info!(id, title = %item.title, points, "Listed new item");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ListingDraft {
        let mut draft = ListingDraft {
            title: "Vintage Denim Jacket".to_string(),
            description: "Classic faded wash, chest pockets, no stains.".to_string(),
            category: Some(Category::Outerwear),
            size: Some(Size::M),
            condition: Some(Condition::Excellent),
            ..ListingDraft::default()
        };
        draft.add_placeholder_image();
        draft
    }

    #[test]
    fn test_tags_are_trimmed_unique_and_capped() {
        let mut draft = ListingDraft::new();
        assert!(draft.add_tag("  vintage "));
        assert!(!draft.add_tag("vintage"));
        assert!(!draft.add_tag("   "));
        for i in 0..10 {
            draft.add_tag(&format!("tag{}", i));
        }
        assert_eq!(draft.tags.len(), MAX_TAGS);
        assert_eq!(draft.tags[0], "vintage");

        draft.remove_tag("vintage");
        assert_eq!(draft.tags.len(), MAX_TAGS - 1);
    }

    #[test]
    fn test_images_capped_at_six() {
        let mut draft = ListingDraft::new();
        for _ in 0..MAX_IMAGES {
            assert!(draft.add_placeholder_image());
        }
        assert!(!draft.add_placeholder_image());
        assert_eq!(draft.images[0], "/placeholder-item-1.jpg");

        draft.remove_image(0);
        draft.remove_image(42);
        assert_eq!(draft.images.len(), MAX_IMAGES - 1);
    }

    #[test]
    fn test_live_estimate_with_partial_selection() {
        let mut draft = ListingDraft::new();
        assert_eq!(draft.estimated_points(), 50);

        draft.category = Some(Category::Shoes);
        assert_eq!(draft.estimated_points(), 65);

        draft.condition = Some(Condition::Fair);
        assert_eq!(
            draft.estimated_points(),
            estimate_points(&Category::Shoes, &Condition::Fair)
        );
    }

    #[test]
    fn test_missing_information() {
        let draft = ListingDraft::new();
        match draft.validate() {
            Err(Error::MissingInformation(fields)) => {
                assert!(fields.contains("title"));
                assert!(fields.contains("image"));
            }
            other => panic!("expected missing information, got {:?}", other),
        }
    }

    #[test]
    fn test_short_description_rejected() {
        let mut draft = complete_draft();
        draft.description = "Too short".to_string();
        assert!(matches!(
            draft.validate(),
            Err(Error::DescriptionTooShort { length: 9, minimum: 20 })
        ));
    }

    #[test]
    fn test_whitespace_is_missing_and_length_counts_chars() {
        let mut draft = complete_draft();
        draft.title = "   ".to_string();
        assert!(matches!(
            draft.validate(),
            Err(Error::MissingInformation(fields)) if fields == "title"
        ));

        // 19 chars but 38 bytes
        let mut draft = complete_draft();
        draft.description = "é".repeat(19);
        assert!(matches!(
            draft.validate(),
            Err(Error::DescriptionTooShort { length: 19, .. })
        ));
        draft.description.push('é');
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_submit_stamps_estimated_points() {
        let draft = complete_draft();
        let item = draft.submit(9).unwrap();

        assert_eq!(item.id, 9);
        assert_eq!(item.points, draft.estimated_points());
        assert_eq!(item.points, 84);
        assert_eq!(item.image, "/placeholder-item-1.jpg");
        assert!(!item.featured);
        assert!(!item.favorited);
    }

    #[test]
    fn test_submit_defaults_size() {
        let mut draft = complete_draft();
        draft.size = None;
        assert_eq!(draft.submit(1).unwrap().size, Size::OneSize);
    }
}
