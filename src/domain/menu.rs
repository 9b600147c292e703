//! Menu catalog data
//!
//! Static, read-only menu definitions for the ordering flow. The catalog is
//! pure data with no mutation and no failure modes; every selectable item is
//! known at compile time and shared for the process lifetime.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A selectable menu item with a display name and a price
///
/// Items are immutable and statically defined; prices are decimal values,
/// never binary floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: Decimal,
}

impl MenuItem {
    /// Creates a new menu item
    pub const fn new(name: &'static str, price: Decimal) -> Self {
        Self { name, price }
    }
}

/// The fixed set of menu categories, in the order the flow visits them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCategory {
    Entree,
    SideDish,
    Accompaniment,
}

static ENTREES: [MenuItem; 4] = [
    MenuItem::new("Cowboy Pizza", dec!(6.00)),
    MenuItem::new("Three Bean Chili", dec!(4.00)),
    MenuItem::new("Mushroom Pasta", dec!(5.50)),
    MenuItem::new("Spicy Chicken Sandwich", dec!(6.50)),
];

static SIDE_DISHES: [MenuItem; 4] = [
    MenuItem::new("Potstickers", dec!(2.50)),
    MenuItem::new("Summer Salad", dec!(3.00)),
    MenuItem::new("Soup of the Day", dec!(3.50)),
    MenuItem::new("Garlic Toast", dec!(2.00)),
];

static ACCOMPANIMENTS: [MenuItem; 4] = [
    MenuItem::new("Apple", dec!(0.50)),
    MenuItem::new("Mixed Berries", dec!(1.00)),
    MenuItem::new("Bread Roll", dec!(0.75)),
    MenuItem::new("Cheese Cubes", dec!(1.25)),
];

/// Read-only provider of the per-category menu lists
///
/// # Example
/// ```rust
/// use lunchline::domain::menu::{MenuCatalog, MenuCategory};
///
/// let entrees = MenuCatalog::entrees();
/// assert!(!entrees.is_empty());
/// assert_eq!(MenuCatalog::options_for(MenuCategory::Entree), entrees);
/// ```
pub struct MenuCatalog;

impl MenuCatalog {
    /// Returns the entree menu list
    pub fn entrees() -> &'static [MenuItem] {
        &ENTREES
    }

    /// Returns the side dish menu list
    pub fn side_dishes() -> &'static [MenuItem] {
        &SIDE_DISHES
    }

    /// Returns the accompaniment menu list
    pub fn accompaniments() -> &'static [MenuItem] {
        &ACCOMPANIMENTS
    }

    /// Returns the menu list for the given category
    pub fn options_for(category: MenuCategory) -> &'static [MenuItem] {
        match category {
            MenuCategory::Entree => Self::entrees(),
            MenuCategory::SideDish => Self::side_dishes(),
            MenuCategory::Accompaniment => Self::accompaniments(),
        }
    }
}
