//! Presentation boundary
//!
//! Everything the rendering collaborator sees: read-only per-screen view
//! models and the action-callback seam. Nothing in here mutates domain
//! state directly.

pub mod actions;
pub mod view;

pub use actions::ScreenActions;
pub use view::{CheckoutView, MenuScreenView, ScreenView, SummaryLine, format_price};
