//! Application orchestration layer
//!
//! This module holds the screen routing state machine and the controller
//! that wires it to the order state.

pub mod controller;
pub mod router;

pub use controller::{OrderFlowController, OrderReceipt};
pub use router::{NavEvent, Screen, ScreenRouter};
