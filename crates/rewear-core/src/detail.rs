use crate::models::Item;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether an item can still change hands
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Pending,
    Swapped,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Pending => "pending",
            Availability::Swapped => "swapped",
        }
    }
}

/// Public profile of whoever listed the item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListerProfile {
    pub name: String,
    pub avatar: String,
    pub rating: f32,
    pub total_swaps: u32,
    /// Display string, e.g. "March 2024"
    pub join_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingStats {
    pub views: u32,
    pub favorites: u32,
    pub listed_on: NaiveDate,
}

/// Everything the item page shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDetail {
    pub item: Item,
    pub description: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub lister: ListerProfile,
    pub stats: ListingStats,
    pub availability: Availability,
}

impl ItemDetail {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    fn ensure_available(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(Error::ItemUnavailable(format!(
                "{} is {}",
                self.item.title,
                self.availability.label()
            )))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapRequest {
    pub item_id: u64,
    pub item_title: String,
    pub recipient: String,
}

impl SwapRequest {
    pub fn message(&self) -> String {
        format!(
            "Your swap request for {} has been sent to {}.",
            self.item_title, self.recipient
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedemptionQuote {
    pub item_id: u64,
    pub cost: u32,
    pub balance_before: u32,
    pub balance_after: u32,
}

/// Ask the lister for a swap. Only available items accept requests.
pub fn request_swap(detail: &ItemDetail) -> Result<SwapRequest> {
    detail.ensure_available()?;

    Ok(SwapRequest {
        item_id: detail.item.id,
        item_title: detail.item.title.clone(),
        recipient: detail.lister.name.clone(),
    })
}

/// Work out what redeeming the item with points would leave in the wallet
pub fn quote_redemption(detail: &ItemDetail, balance: u32) -> Result<RedemptionQuote> {
    detail.ensure_available()?;

    let cost = detail.item.points;
    let Some(balance_after) = balance.checked_sub(cost) else {
        tracing::warn!(item = detail.item.id, balance, cost, "Redemption rejected");
        return Err(Error::InsufficientPoints {
            balance,
            required: cost,
        });
    };

    Ok(RedemptionQuote {
        item_id: detail.item.id,
        cost,
        balance_before: balance,
        balance_after,
    })
}
