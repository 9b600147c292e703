//! Screen routing state machine
//!
//! Defines the fixed screen sequence of the ordering flow and the router
//! that walks it. The transition table is closed: the screen set and its
//! edges are exhaustively enumerable, so an event outside the table is a
//! programming error, not a recoverable condition.

use tracing::{debug, warn};

use crate::domain::menu::MenuCategory;

/// One step in the fixed ordering flow, with its display title
///
/// Declaration order is the only valid forward path. The flow is cyclic:
/// Checkout always loops back to Start, there is no terminal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    EntreeMenu,
    SideDishMenu,
    AccompanimentMenu,
    Checkout,
}

impl Screen {
    /// Returns the title the rendering layer shows for this screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Start => "Lunch Tray",
            Screen::EntreeMenu => "Choose Entree",
            Screen::SideDishMenu => "Choose Side Dish",
            Screen::AccompanimentMenu => "Choose Accompaniment",
            Screen::Checkout => "Order Checkout",
        }
    }

    /// Returns the menu category selected on this screen, if it is a menu screen
    pub fn menu_category(&self) -> Option<MenuCategory> {
        match self {
            Screen::EntreeMenu => Some(MenuCategory::Entree),
            Screen::SideDishMenu => Some(MenuCategory::SideDish),
            Screen::AccompanimentMenu => Some(MenuCategory::Accompaniment),
            Screen::Start | Screen::Checkout => None,
        }
    }
}

/// Navigation events a screen can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The start screen's "begin order" button
    StartOrder,
    /// Advance one screen; on Checkout this confirms the order
    Next,
    /// Abandon the order and return to Start
    Cancel,
    /// Pop the most recent history entry (the top-bar back arrow)
    NavigateUp,
}

/// Finite state machine over the fixed screen sequence
///
/// Tracks the current screen and the navigation history. Forward transitions
/// push the departed screen onto the history stack; every transition landing
/// on Start clears it. `NavigateUp` is the only way to return to a prior
/// screen without the order being reset.
///
/// # Example
/// ```rust
/// use lunchline::app::router::{NavEvent, Screen, ScreenRouter};
///
/// let mut router = ScreenRouter::new();
/// assert_eq!(router.current_screen(), Screen::Start);
/// assert!(!router.can_navigate_back());
///
/// router.handle(NavEvent::StartOrder);
/// assert_eq!(router.current_screen(), Screen::EntreeMenu);
/// assert!(router.can_navigate_back());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRouter {
    current: Screen,
    history: Vec<Screen>,
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenRouter {
    /// Creates a router positioned at the start screen with empty history
    pub fn new() -> Self {
        Self {
            current: Screen::Start,
            history: Vec::new(),
        }
    }

    /// Returns the screen the flow is currently on
    pub fn current_screen(&self) -> Screen {
        self.current
    }

    /// Checks whether a prior screen is available to navigate back to
    ///
    /// False exactly when the router sits at Start with empty history.
    pub fn can_navigate_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Processes a navigation event and returns the new current screen
    ///
    /// The full transition table:
    ///
    /// | Screen            | Event        | Target        |
    /// |-------------------|--------------|---------------|
    /// | Start             | `StartOrder` | EntreeMenu    |
    /// | EntreeMenu        | `Next`       | SideDishMenu  |
    /// | SideDishMenu      | `Next`       | Accompaniment |
    /// | AccompanimentMenu | `Next`       | Checkout      |
    /// | Checkout          | `Next`       | Start         |
    /// | any menu/Checkout | `Cancel`     | Start         |
    /// | any               | `NavigateUp` | history pop   |
    ///
    /// Any other pair asserts in debug builds and is logged and ignored in
    /// release builds.
    pub fn handle(&mut self, event: NavEvent) -> Screen {
        match (self.current, event) {
            (Screen::Start, NavEvent::StartOrder) => self.advance(Screen::EntreeMenu),
            (Screen::EntreeMenu, NavEvent::Next) => self.advance(Screen::SideDishMenu),
            (Screen::SideDishMenu, NavEvent::Next) => self.advance(Screen::AccompanimentMenu),
            (Screen::AccompanimentMenu, NavEvent::Next) => self.advance(Screen::Checkout),
            (Screen::Checkout, NavEvent::Next) => self.return_to_start(),

            (
                Screen::EntreeMenu
                | Screen::SideDishMenu
                | Screen::AccompanimentMenu
                | Screen::Checkout,
                NavEvent::Cancel,
            ) => self.return_to_start(),

            // Availability of "up" depends on runtime history, so an empty
            // stack is a no-op rather than an assertion failure.
            (_, NavEvent::NavigateUp) => self.pop(),

            (screen, event) => {
                warn!(?screen, ?event, "ignoring navigation event outside the transition table");
                debug_assert!(
                    false,
                    "navigation event {event:?} is not valid on screen {screen:?}"
                );
                screen
            }
        }
    }

    /// Pops the most recent history entry and transitions to it
    ///
    /// Returns true if navigation happened, false if the history was empty.
    pub fn navigate_up(&mut self) -> bool {
        if !self.can_navigate_back() {
            return false;
        }
        self.handle(NavEvent::NavigateUp);
        true
    }

    fn advance(&mut self, target: Screen) -> Screen {
        debug!(from = ?self.current, to = ?target, "advancing");
        self.history.push(self.current);
        self.current = target;
        self.current
    }

    fn return_to_start(&mut self) -> Screen {
        debug!(from = ?self.current, "returning to start");
        self.history.clear();
        self.current = Screen::Start;
        self.current
    }

    fn pop(&mut self) -> Screen {
        match self.history.pop() {
            Some(previous) => {
                debug!(from = ?self.current, to = ?previous, "navigating up");
                self.current = previous;
            }
            None => debug!("navigate up ignored, history is empty"),
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router_at(screen: Screen) -> ScreenRouter {
        let mut router = ScreenRouter::new();
        let path = [
            NavEvent::StartOrder,
            NavEvent::Next,
            NavEvent::Next,
            NavEvent::Next,
        ];
        for event in path {
            if router.current_screen() == screen {
                break;
            }
            router.handle(event);
        }
        assert_eq!(router.current_screen(), screen);
        router
    }

    #[test]
    fn starts_at_start_with_no_history() {
        let router = ScreenRouter::new();
        assert_eq!(router.current_screen(), Screen::Start);
        assert!(!router.can_navigate_back());
    }

    #[test]
    fn forward_path_walks_the_fixed_sequence() {
        let mut router = ScreenRouter::new();

        assert_eq!(router.handle(NavEvent::StartOrder), Screen::EntreeMenu);
        assert_eq!(router.handle(NavEvent::Next), Screen::SideDishMenu);
        assert_eq!(router.handle(NavEvent::Next), Screen::AccompanimentMenu);
        assert_eq!(router.handle(NavEvent::Next), Screen::Checkout);
        assert!(router.can_navigate_back());
    }

    #[test]
    fn cancel_returns_to_start_from_every_screen() {
        let in_flow = [
            Screen::EntreeMenu,
            Screen::SideDishMenu,
            Screen::AccompanimentMenu,
            Screen::Checkout,
        ];

        for screen in in_flow {
            let mut router = router_at(screen);
            assert_eq!(router.handle(NavEvent::Cancel), Screen::Start);
            assert!(!router.can_navigate_back(), "history left over from {screen:?}");
        }
    }

    #[test]
    fn confirm_at_checkout_loops_back_to_start() {
        let mut router = router_at(Screen::Checkout);

        assert_eq!(router.handle(NavEvent::Next), Screen::Start);
        assert!(!router.can_navigate_back());

        // Cyclic flow: a fresh order can start immediately.
        assert_eq!(router.handle(NavEvent::StartOrder), Screen::EntreeMenu);
    }

    #[test]
    fn navigate_up_pops_one_entry() {
        let mut router = router_at(Screen::SideDishMenu);

        assert!(router.navigate_up());
        assert_eq!(router.current_screen(), Screen::EntreeMenu);
        assert!(router.can_navigate_back());

        assert!(router.navigate_up());
        assert_eq!(router.current_screen(), Screen::Start);
        assert!(!router.can_navigate_back());
    }

    #[test]
    fn navigate_up_without_history_is_inert() {
        let mut router = ScreenRouter::new();
        assert!(!router.navigate_up());
        assert_eq!(router.current_screen(), Screen::Start);

        // The raw event is equally inert.
        assert_eq!(router.handle(NavEvent::NavigateUp), Screen::Start);
    }

    #[test]
    fn screen_titles_are_attached() {
        assert_eq!(Screen::Start.title(), "Lunch Tray");
        assert_eq!(Screen::EntreeMenu.title(), "Choose Entree");
        assert_eq!(Screen::SideDishMenu.title(), "Choose Side Dish");
        assert_eq!(Screen::AccompanimentMenu.title(), "Choose Accompaniment");
        assert_eq!(Screen::Checkout.title(), "Order Checkout");
    }

    #[test]
    fn menu_screens_map_to_their_category() {
        use crate::domain::menu::MenuCategory;

        assert_eq!(Screen::Start.menu_category(), None);
        assert_eq!(Screen::EntreeMenu.menu_category(), Some(MenuCategory::Entree));
        assert_eq!(
            Screen::SideDishMenu.menu_category(),
            Some(MenuCategory::SideDish)
        );
        assert_eq!(
            Screen::AccompanimentMenu.menu_category(),
            Some(MenuCategory::Accompaniment)
        );
        assert_eq!(Screen::Checkout.menu_category(), None);
    }

    #[test]
    #[should_panic(expected = "is not valid on screen")]
    fn next_at_start_is_a_programming_error() {
        let mut router = ScreenRouter::new();
        router.handle(NavEvent::Next);
    }

    #[test]
    #[should_panic(expected = "is not valid on screen")]
    fn start_order_mid_flow_is_a_programming_error() {
        let mut router = router_at(Screen::SideDishMenu);
        router.handle(NavEvent::StartOrder);
    }
}
