//! The action-callback seam between rendering and the flow
//!
//! Screen components hold a `&mut dyn ScreenActions` and invoke the handle
//! matching the button the user pressed; the controller is the only
//! implementation. The set of handles is fixed (one per control the screens
//! carry), so the rendering layer can stay entirely ignorant of routing and
//! order-state rules.

use crate::app::controller::OrderFlowController;
use crate::domain::menu::MenuItem;

/// The fixed set of callback handles the screens can invoke
pub trait ScreenActions {
    /// The start screen's "begin order" button
    fn on_start_order_clicked(&mut self);

    /// A menu screen's selection control changed to `item`
    fn on_selection_changed(&mut self, item: MenuItem);

    /// The "next" button (on Checkout: confirm the order)
    fn on_next_button_clicked(&mut self);

    /// The "cancel" button
    fn on_cancel_button_clicked(&mut self);
}

impl ScreenActions for OrderFlowController {
    fn on_start_order_clicked(&mut self) {
        self.start_order();
    }

    fn on_selection_changed(&mut self, item: MenuItem) {
        self.select_item(item);
    }

    fn on_next_button_clicked(&mut self) {
        self.next();
    }

    fn on_cancel_button_clicked(&mut self) {
        self.cancel();
    }
}
