//! Order flow controller and coordination layer
//!
//! The controller composes the screen router and the order state and is the
//! sole mutator of both. UI selection callbacks land in OrderState updates,
//! UI navigation callbacks land in router transitions, and the two effects
//! of abandoning or completing an order (reset the order AND return to
//! Start) are one internal operation that cannot be triggered separately.

use tracing::{debug, info, warn};

use crate::app::router::{NavEvent, Screen, ScreenRouter};
use crate::config::pricing::PricingConfig;
use crate::domain::menu::{MenuCatalog, MenuCategory, MenuItem};
use crate::domain::order::{OrderState, OrderTotals};

/// The confirmed selections and totals returned when checkout completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub items: Vec<MenuItem>,
    pub totals: OrderTotals,
}

/// Orchestrates one order at a time through the fixed screen sequence
///
/// Owns the router, the order state and the pricing configuration for the
/// lifetime of the flow. All operations run synchronously in response to a
/// single user action; there is no concurrency to coordinate.
///
/// # Example
/// ```rust
/// use lunchline::app::controller::OrderFlowController;
/// use lunchline::app::router::Screen;
/// use lunchline::domain::menu::MenuCatalog;
///
/// let mut flow = OrderFlowController::new();
/// flow.start_order();
/// flow.select_item(MenuCatalog::entrees()[0]);
/// flow.next(); // side dish menu
/// flow.cancel();
///
/// assert_eq!(flow.current_screen(), Screen::Start);
/// assert!(flow.order().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct OrderFlowController {
    router: ScreenRouter,
    order: OrderState,
    pricing: PricingConfig,
}

impl Default for OrderFlowController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderFlowController {
    /// Creates a controller with the default pricing configuration
    pub fn new() -> Self {
        Self::with_pricing(PricingConfig::default())
    }

    /// Creates a controller with an explicit pricing configuration
    pub fn with_pricing(pricing: PricingConfig) -> Self {
        Self {
            router: ScreenRouter::new(),
            order: OrderState::new(),
            pricing,
        }
    }

    /// Returns the screen the flow is currently on
    pub fn current_screen(&self) -> Screen {
        self.router.current_screen()
    }

    /// Checks whether a prior screen is available to navigate back to
    pub fn can_navigate_back(&self) -> bool {
        self.router.can_navigate_back()
    }

    /// Returns a read-only view of the order in progress
    pub fn order(&self) -> &OrderState {
        &self.order
    }

    /// Returns the pricing configuration in effect
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Computes the current totals at the configured tax rate
    pub fn totals(&self) -> OrderTotals {
        self.order.compute_totals(self.pricing.tax_rate())
    }

    /// Returns the catalog options for the current screen, if it is a menu screen
    pub fn menu_options(&self) -> Option<&'static [MenuItem]> {
        self.current_screen()
            .menu_category()
            .map(MenuCatalog::options_for)
    }

    /// Handles the start screen's "begin order" button
    pub fn start_order(&mut self) {
        self.router.handle(NavEvent::StartOrder);
    }

    /// Handles a selection change on the current menu screen
    ///
    /// Dispatches to the order slot matching the screen's category. On a
    /// non-menu screen there is nothing to select, so the call is logged and
    /// ignored.
    pub fn select_item(&mut self, item: MenuItem) {
        match self.current_screen().menu_category() {
            Some(MenuCategory::Entree) => self.order.update_entree(item),
            Some(MenuCategory::SideDish) => self.order.update_side_dish(item),
            Some(MenuCategory::Accompaniment) => self.order.update_accompaniment(item),
            None => {
                warn!(
                    screen = ?self.current_screen(),
                    item = item.name,
                    "selection ignored outside a menu screen"
                );
                return;
            }
        }
        debug!(screen = ?self.current_screen(), item = item.name, "selection updated");
    }

    /// Handles the "next" button
    ///
    /// On a menu screen this advances the flow one screen. On Checkout it
    /// confirms the order: the receipt is captured, then the order is reset
    /// and the flow returns to Start in one combined step.
    pub fn next(&mut self) -> Option<OrderReceipt> {
        if self.current_screen() == Screen::Checkout {
            let receipt = OrderReceipt {
                items: self.order.selected_items(),
                totals: self.totals(),
            };
            info!(total = %receipt.totals.total, "order confirmed");
            self.finish_order(NavEvent::Next);
            Some(receipt)
        } else {
            self.router.handle(NavEvent::Next);
            None
        }
    }

    /// Handles the "cancel" button: abandon the order and return to Start
    pub fn cancel(&mut self) {
        debug!(screen = ?self.current_screen(), "order cancelled");
        self.finish_order(NavEvent::Cancel);
    }

    /// Pops back to the previous screen without touching the order
    ///
    /// Returns true if navigation happened, false if there was no history.
    pub fn navigate_up(&mut self) -> bool {
        self.router.navigate_up()
    }

    /// The one coupled tear-down: reset the order AND route to Start.
    ///
    /// Every path that ends an order goes through here so a stale order can
    /// never remain visible after returning to Start.
    fn finish_order(&mut self, event: NavEvent) {
        self.order.reset();
        self.router.handle(event);
    }
}
