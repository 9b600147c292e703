//! Ordering-flow core for a fixed-sequence lunch ordering app
//!
//! The crate glues a screen router (a finite state machine over the fixed
//! Start → Entree → Side Dish → Accompaniment → Checkout sequence) to a
//! single shared order-state accumulator. Rendering is an external
//! collaborator: it reads view models from [`ui`] and drives the flow
//! through the callback seam, while all mutation funnels through the
//! [`OrderFlowController`].
//!
//! Layering, bottom up:
//! - [`domain`]: pure data and logic, the menu catalog and the order state
//! - [`app`]: the screen router state machine and the flow controller
//! - [`ui`]: read-only view models and the action-callback seam
//! - [`config`]: validated in-memory pricing configuration

pub mod app;
pub mod config;
pub mod domain;
pub mod ui;

pub use app::controller::{OrderFlowController, OrderReceipt};
pub use app::router::{NavEvent, Screen, ScreenRouter};
pub use config::pricing::{PricingConfig, PricingError};
pub use domain::menu::{MenuCatalog, MenuCategory, MenuItem};
pub use domain::order::{OrderState, OrderTotals};
