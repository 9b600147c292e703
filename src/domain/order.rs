//! Order state accumulation and derived totals
//!
//! This module holds the single mutable record for the order in progress:
//! one selection slot per menu category, plus the pure computation of
//! subtotal, tax and total. Totals are derived fresh on every call and never
//! stored, so they cannot go stale.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::menu::{MenuCategory, MenuItem};

/// Derived monetary snapshot of an order at a fixed tax rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Totals of an empty order
    pub const ZERO: OrderTotals = OrderTotals {
        subtotal: Decimal::ZERO,
        tax: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// The accumulator for the order in progress
///
/// One `Option` slot per category; a slot is `None` until the user makes a
/// selection on the matching menu screen, and re-selecting replaces the slot.
/// All operations are total functions; there is nothing to validate beyond
/// the catalog the items already came from.
///
/// # Example
/// ```rust
/// use lunchline::domain::menu::MenuCatalog;
/// use lunchline::domain::order::OrderState;
/// use rust_decimal_macros::dec;
///
/// let mut order = OrderState::new();
/// order.update_entree(MenuCatalog::entrees()[0]);
///
/// let totals = order.compute_totals(dec!(0.08));
/// assert_eq!(totals.subtotal, MenuCatalog::entrees()[0].price);
///
/// order.reset();
/// assert!(order.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderState {
    entree: Option<MenuItem>,
    side_dish: Option<MenuItem>,
    accompaniment: Option<MenuItem>,
}

impl OrderState {
    /// Creates a new, empty order
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entree selection
    pub fn update_entree(&mut self, item: MenuItem) {
        self.entree = Some(item);
    }

    /// Replaces the side dish selection
    pub fn update_side_dish(&mut self, item: MenuItem) {
        self.side_dish = Some(item);
    }

    /// Replaces the accompaniment selection
    pub fn update_accompaniment(&mut self, item: MenuItem) {
        self.accompaniment = Some(item);
    }

    /// Clears all three slots
    ///
    /// Idempotent and callable at any point in the flow.
    pub fn reset(&mut self) {
        self.entree = None;
        self.side_dish = None;
        self.accompaniment = None;
    }

    /// Returns the current entree selection, if any
    pub fn entree(&self) -> Option<MenuItem> {
        self.entree
    }

    /// Returns the current side dish selection, if any
    pub fn side_dish(&self) -> Option<MenuItem> {
        self.side_dish
    }

    /// Returns the current accompaniment selection, if any
    pub fn accompaniment(&self) -> Option<MenuItem> {
        self.accompaniment
    }

    /// Returns the selection for the given category, if any
    pub fn selection_for(&self, category: MenuCategory) -> Option<MenuItem> {
        match category {
            MenuCategory::Entree => self.entree,
            MenuCategory::SideDish => self.side_dish,
            MenuCategory::Accompaniment => self.accompaniment,
        }
    }

    /// Returns the current selections in menu order
    pub fn selected_items(&self) -> Vec<MenuItem> {
        [self.entree, self.side_dish, self.accompaniment]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Checks whether no selection has been made yet
    pub fn is_empty(&self) -> bool {
        self.entree.is_none() && self.side_dish.is_none() && self.accompaniment.is_none()
    }

    /// Computes subtotal, tax and total from the current slots
    ///
    /// Pure and side-effect free; callable any number of times without
    /// changing state. Tax is `subtotal * tax_rate` rounded to cents with
    /// midpoint away from zero.
    pub fn compute_totals(&self, tax_rate: Decimal) -> OrderTotals {
        let subtotal: Decimal = self.selected_items().iter().map(|item| item.price).sum();
        let tax = (subtotal * tax_rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        OrderTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
