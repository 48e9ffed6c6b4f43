//! Donation checkout domain model.
//!
//! All monetary values are integers in the campaign's base currency unit.
//! Derived figures (tip, total) are always recomputed from scratch, never
//! stored, so they cannot drift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchasable line item from a campaign's expenditure plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit label shown next to the quantity ("box", "kg", ...).
    pub unit: String,
    pub price: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Wallet,
    PayOs,
    PayPal,
    Cash,
}

/// A line of an item-mode donation: catalog item id plus quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: String,
    pub quantity: u32,
}

/// The checkout submission sent to the payment gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationOrder {
    pub campaign_id: i64,
    pub amount: i64,
    pub tip_amount: i64,
    pub total_amount: i64,
    pub payment_method: PaymentMethod,
    pub anonymous: bool,
    /// Empty in free-amount mode.
    pub items: Vec<OrderLine>,
}

/// Gateway acknowledgement of a completed donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationReceipt {
    pub reference: String,
    pub total_amount: i64,
    pub paid_at: DateTime<Utc>,
}
