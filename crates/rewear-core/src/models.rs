use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A listed piece of clothing - the star of the show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub category: Category,
    pub size: Size,
    pub condition: Condition,
    pub points: u32,
    #[serde(default)]
    pub featured: bool,
    /// Per-viewer state, never persisted
    #[serde(default)]
    pub favorited: bool,
    /// Display name of whoever listed it
    #[serde(default)]
    pub owner: String,
    /// Cover image path
    #[serde(default)]
    pub image: String,
}

impl Item {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        category: Category,
        size: Size,
        condition: Condition,
        points: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            size,
            condition,
            points,
            featured: false,
            favorited: false,
            owner: String::new(),
            image: String::new(),
        }
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_favorited(mut self, favorited: bool) -> Self {
        self.favorited = favorited;
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// Clothing category
///
/// Labels outside the known list survive as `Other` so that seed data and
/// multiplier lookups like "Designer" keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
    Bags,
    Jewelry,
    Activewear,
    Formal,
    Other(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Dresses => "Dresses",
            Category::Outerwear => "Outerwear",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
            Category::Bags => "Bags",
            Category::Jewelry => "Jewelry",
            Category::Activewear => "Activewear",
            Category::Formal => "Formal",
            Category::Other(label) => label.as_str(),
        }
    }

    /// Exact, case-sensitive label match
    pub fn from_label(label: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or_else(|| Category::Other(label.to_string()))
    }

    pub fn all() -> Vec<Category> {
        vec![
            Category::Tops,
            Category::Bottoms,
            Category::Dresses,
            Category::Outerwear,
            Category::Shoes,
            Category::Accessories,
            Category::Bags,
            Category::Jewelry,
            Category::Activewear,
            Category::Formal,
        ]
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from_label(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    OneSize,
    /// Numeric shoe sizes and friends
    Other(String),
}

impl Size {
    pub fn label(&self) -> &str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
            Size::OneSize => "One Size",
            Size::Other(label) => label.as_str(),
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|s| s.label() == label)
            .unwrap_or_else(|| Size::Other(label.to_string()))
    }

    pub fn all() -> Vec<Size> {
        vec![
            Size::Xs,
            Size::S,
            Size::M,
            Size::L,
            Size::Xl,
            Size::Xxl,
            Size::OneSize,
        ]
    }
}

impl From<String> for Size {
    fn from(label: String) -> Self {
        Size::from_label(&label)
    }
}

impl From<Size> for String {
    fn from(size: Size) -> Self {
        size.label().to_string()
    }
}

impl FromStr for Size {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Size::from_label(s))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    NewWithTags,
    LikeNew,
    Excellent,
    Good,
    Fair,
    Other(String),
}

impl Condition {
    pub fn label(&self) -> &str {
        match self {
            Condition::NewWithTags => "New with Tags",
            Condition::LikeNew => "Like New",
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Other(label) => label.as_str(),
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or_else(|| Condition::Other(label.to_string()))
    }

    pub fn all() -> Vec<Condition> {
        vec![
            Condition::NewWithTags,
            Condition::LikeNew,
            Condition::Excellent,
            Condition::Good,
            Condition::Fair,
        ]
    }
}

impl From<String> for Condition {
    fn from(label: String) -> Self {
        Condition::from_label(&label)
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.label().to_string()
    }
}

impl FromStr for Condition {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Condition::from_label(s))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Optional "type" picked on the listing form. Purely descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    Casual,
    Formal,
    Business,
    Party,
    Vintage,
    Designer,
    Sustainable,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Casual => "Casual",
            Style::Formal => "Formal",
            Style::Business => "Business",
            Style::Party => "Party",
            Style::Vintage => "Vintage",
            Style::Designer => "Designer",
            Style::Sustainable => "Sustainable",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.as_str() == label)
    }

    pub fn all() -> Vec<Style> {
        vec![
            Style::Casual,
            Style::Formal,
            Style::Business,
            Style::Party,
            Style::Vintage,
            Style::Designer,
            Style::Sustainable,
        ]
    }
}
