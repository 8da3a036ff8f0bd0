//! Dashboard data: who you are, what you listed, what you did

use crate::models::Item;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Points available to spend
    pub points: u32,
    pub avatar: String,
    pub join_date: String,
}

impl UserProfile {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Avatar fallback: first letter of every word in the name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Swapped,
    Pending,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Swapped => "swapped",
            ListingStatus::Pending => "pending",
        }
    }
}

/// One of the user's own listings with its engagement numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnedListing {
    pub item: Item,
    pub status: ListingStatus,
    pub views: u32,
    /// How many people favorited it
    pub favorites: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Swap,
    Redeem,
    List,
}

impl ActivityKind {
    pub fn verb(&self) -> &'static str {
        match self {
            ActivityKind::Swap => "Swapped",
            ActivityKind::Redeem => "Redeemed",
            ActivityKind::List => "Listed",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ActivityKind::Swap => "⇄",
            ActivityKind::Redeem => "★",
            ActivityKind::List => "+",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Active,
    Pending,
}

impl ActivityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Completed => "completed",
            ActivityStatus::Active => "active",
            ActivityStatus::Pending => "pending",
        }
    }
}

/// Swap history entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub id: u64,
    pub kind: ActivityKind,
    pub item: String,
    pub with_user: Option<String>,
    pub date: NaiveDate,
    pub status: ActivityStatus,
    /// Negative when points were spent
    pub points: i64,
}

impl Activity {
    /// "Swapped Black Leather Boots"
    pub fn headline(&self) -> String {
        format!("{} {}", self.kind.verb(), self.item)
    }

    /// "+95 points" / "-75 points"
    pub fn points_label(&self) -> String {
        if self.points > 0 {
            format!("+{} points", self.points)
        } else {
            format!("{} points", self.points)
        }
    }
}

/// Quick stats row at the top of the dashboard
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub items_listed: usize,
    pub successful_swaps: usize,
    pub total_favorites: u64,
}

impl DashboardStats {
    pub fn compute(listings: &[OwnedListing], history: &[Activity]) -> Self {
        Self {
            items_listed: listings.len(),
            successful_swaps: history
                .iter()
                .filter(|a| a.kind == ActivityKind::Swap)
                .count(),
            total_favorites: listings.iter().map(|l| u64::from(l.favorites)).sum(),
        }
    }
}
