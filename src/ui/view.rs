//! Read-only view models for the rendering layer
//!
//! The rendering collaborator never touches OrderState or the router
//! directly: it receives a snapshot of exactly the display data the current
//! screen needs, with monetary values already formatted.

use rust_decimal::Decimal;

use crate::app::controller::OrderFlowController;
use crate::app::router::Screen;
use crate::domain::menu::MenuItem;

/// Formats a monetary amount as `$X.XX`
pub fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Display data for one of the three menu screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuScreenView {
    pub title: &'static str,
    pub options: &'static [MenuItem],
    /// The item currently selected on this screen, if any
    pub selected: Option<MenuItem>,
    /// Formatted running subtotal shown under the option list
    pub subtotal: String,
}

/// One itemized line of the checkout summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: &'static str,
    pub price: String,
}

/// Display data for the checkout screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub title: &'static str,
    pub lines: Vec<SummaryLine>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

/// The per-screen snapshot handed to the rendering layer
///
/// # Example
/// ```rust
/// use lunchline::app::controller::OrderFlowController;
/// use lunchline::ui::view::ScreenView;
///
/// let flow = OrderFlowController::new();
/// let view = ScreenView::build(&flow);
/// assert!(matches!(view, ScreenView::Start { title: "Lunch Tray" }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Start { title: &'static str },
    Menu(MenuScreenView),
    Checkout(CheckoutView),
}

impl ScreenView {
    /// Builds the view for the controller's current screen
    pub fn build(flow: &OrderFlowController) -> ScreenView {
        let screen = flow.current_screen();

        if let Some(category) = screen.menu_category() {
            return ScreenView::Menu(MenuScreenView {
                title: screen.title(),
                options: flow.menu_options().unwrap_or(&[]),
                selected: flow.order().selection_for(category),
                subtotal: format_price(flow.totals().subtotal),
            });
        }

        match screen {
            Screen::Checkout => {
                let totals = flow.totals();
                let lines = flow
                    .order()
                    .selected_items()
                    .into_iter()
                    .map(|item| SummaryLine {
                        name: item.name,
                        price: format_price(item.price),
                    })
                    .collect();

                ScreenView::Checkout(CheckoutView {
                    title: screen.title(),
                    lines,
                    subtotal: format_price(totals.subtotal),
                    tax: format_price(totals.tax),
                    total: format_price(totals.total),
                })
            }
            _ => ScreenView::Start {
                title: screen.title(),
            },
        }
    }
}
