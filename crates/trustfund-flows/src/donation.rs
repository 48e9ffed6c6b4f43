//! Donation composer.
//!
//! Lets a donor express a contribution either as a free amount or as a
//! sum of catalog items from the campaign's expenditure plan, then
//! computes the payable total and submits the checkout.
//!
//! Money is integer base units throughout. Tip and total are derived on
//! every read from `base_amount` and `tip_percent`; recomputation always
//! starts from scratch off the selection map, never incrementally, so
//! repeated edits cannot drift.

use std::collections::BTreeMap;

use trustfund_core::gateway::DonationGateway;
use trustfund_core::models::donation::{
    CatalogItem, DonationOrder, DonationReceipt, OrderLine, PaymentMethod,
};

use crate::error::FlowError;

/// Mutually exclusive input modes. Switching is destructive: choosing an
/// amount discards any item selection, and touching an item abandons the
/// manually entered amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationMode {
    Amount,
    Items,
}

/// Where the checkout currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum DonationState {
    Composing,
    Completed(DonationReceipt),
}

pub struct DonationComposer<P: DonationGateway> {
    gateway: P,
    campaign_id: i64,
    catalog: Vec<CatalogItem>,
    mode: DonationMode,
    selected: BTreeMap<String, u32>,
    base_amount: i64,
    tip_percent: u8,
    payment_method: PaymentMethod,
    anonymous: bool,
    /// Guests must accept the disclaimer; signed-in donors skip it.
    terms_required: bool,
    terms_accepted: bool,
    state: DonationState,
}

impl<P: DonationGateway> DonationComposer<P> {
    pub fn new(
        gateway: P,
        campaign_id: i64,
        catalog: Vec<CatalogItem>,
        terms_required: bool,
    ) -> Self {
        Self {
            gateway,
            campaign_id,
            catalog,
            mode: DonationMode::Amount,
            selected: BTreeMap::new(),
            base_amount: 0,
            tip_percent: 0,
            payment_method: PaymentMethod::Wallet,
            anonymous: false,
            terms_required,
            terms_accepted: false,
            state: DonationState::Composing,
        }
    }

    pub fn mode(&self) -> DonationMode {
        self.mode
    }

    pub fn state(&self) -> &DonationState {
        &self.state
    }

    pub fn base_amount(&self) -> i64 {
        self.base_amount
    }

    pub fn tip_percent(&self) -> u8 {
        self.tip_percent
    }

    /// Tip, rounded half-up.
    pub fn tip_amount(&self) -> i64 {
        (self.base_amount * i64::from(self.tip_percent) + 50) / 100
    }

    /// Always `base + tip`, recomputed on every read. Never stored.
    pub fn total_amount(&self) -> i64 {
        self.base_amount + self.tip_amount()
    }

    pub fn selected_quantity(&self, item_id: &str) -> u32 {
        self.selected.get(item_id).copied().unwrap_or(0)
    }

    pub fn selected_items(&self) -> &BTreeMap<String, u32> {
        &self.selected
    }

    /// Pick a preset or manually entered amount. Forces amount mode and
    /// discards the entire item selection — there is no merge.
    pub fn set_amount(&mut self, value: i64) -> Result<(), FlowError> {
        if value < 0 {
            return Err(FlowError::NegativeAmount);
        }
        self.mode = DonationMode::Amount;
        self.base_amount = value;
        self.selected.clear();
        Ok(())
    }

    /// Add a catalog item to the selection (quantity 1 if new). Forces
    /// items mode.
    pub fn select_item(&mut self, item_id: &str) -> Result<(), FlowError> {
        let price_known = self.catalog.iter().any(|i| i.id == item_id);
        if !price_known {
            return Err(FlowError::UnknownItem {
                item_id: item_id.to_string(),
            });
        }
        self.mode = DonationMode::Items;
        self.selected.entry(item_id.to_string()).or_insert(1);
        self.recompute_base();
        Ok(())
    }

    /// Adjust an item's quantity by `delta`. The floor is zero — zero
    /// removes the entry, it is never stored. Any quantity change
    /// implies items mode.
    pub fn change_quantity(&mut self, item_id: &str, delta: i32) -> Result<(), FlowError> {
        if !self.catalog.iter().any(|i| i.id == item_id) {
            return Err(FlowError::UnknownItem {
                item_id: item_id.to_string(),
            });
        }
        self.mode = DonationMode::Items;
        let current = i64::from(self.selected_quantity(item_id));
        let next = (current + i64::from(delta)).max(0) as u32;
        if next == 0 {
            self.selected.remove(item_id);
        } else {
            self.selected.insert(item_id.to_string(), next);
        }
        self.recompute_base();
        Ok(())
    }

    /// Clamped to `[0, 100]`.
    pub fn set_tip_percent(&mut self, percent: i32) {
        self.tip_percent = percent.clamp(0, 100) as u8;
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub fn set_anonymous(&mut self, anonymous: bool) {
        self.anonymous = anonymous;
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// Items the picker should show.
    ///
    /// In amount mode, items priced above the chosen amount are hidden
    /// (cannot afford) unless no amount has been entered yet. This is a
    /// display policy only — the data layer does not enforce it.
    pub fn visible_items(&self) -> Vec<&CatalogItem> {
        match self.mode {
            DonationMode::Amount if self.base_amount > 0 => self
                .catalog
                .iter()
                .filter(|i| i.price <= self.base_amount)
                .collect(),
            _ => self.catalog.iter().collect(),
        }
    }

    /// Submit the checkout.
    ///
    /// Validates locally (payable total, accepted terms where required)
    /// before any network call. On success the composer moves to the
    /// receipt state; on failure it simply stays on the form.
    pub async fn submit(&mut self) -> Result<DonationReceipt, FlowError> {
        if self.total_amount() <= 0 {
            return Err(FlowError::NothingToPay);
        }
        if self.terms_required && !self.terms_accepted {
            return Err(FlowError::TermsNotAccepted);
        }

        let items = match self.mode {
            DonationMode::Amount => Vec::new(),
            DonationMode::Items => self
                .selected
                .iter()
                .map(|(item_id, &quantity)| OrderLine {
                    item_id: item_id.clone(),
                    quantity,
                })
                .collect(),
        };
        let order = DonationOrder {
            campaign_id: self.campaign_id,
            amount: self.base_amount,
            tip_amount: self.tip_amount(),
            total_amount: self.total_amount(),
            payment_method: self.payment_method,
            anonymous: self.anonymous,
            items,
        };

        let receipt = self.gateway.submit_donation(&order).await?;
        self.state = DonationState::Completed(receipt.clone());
        Ok(receipt)
    }

    /// Start a fresh checkout ("donate again"). Nothing survives from
    /// the previous composition.
    pub fn reset(&mut self) {
        self.mode = DonationMode::Amount;
        self.selected.clear();
        self.base_amount = 0;
        self.tip_percent = 0;
        self.anonymous = false;
        self.terms_accepted = false;
        self.state = DonationState::Composing;
    }

    /// Re-derive `base_amount` as Σ(price × quantity) over the current
    /// selection.
    fn recompute_base(&mut self) {
        self.base_amount = self
            .selected
            .iter()
            .filter_map(|(id, &qty)| {
                self.catalog
                    .iter()
                    .find(|i| i.id == *id)
                    .map(|i| i.price * i64::from(qty))
            })
            .sum();
    }
}
