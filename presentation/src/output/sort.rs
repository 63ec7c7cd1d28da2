//! Presentation-side ordering of listing results

use clap::ValueEnum;
use estate_domain::Property;

/// Display order for a listing
///
/// Applied to the catalog's result after filtering; the catalog itself
/// always answers in insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Featured properties first, otherwise catalog order
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    /// Most recently listed first (reverse catalog order)
    Newest,
}

impl SortOrder {
    /// Reorder `properties` in place. All sorts are stable.
    pub fn apply(self, properties: &mut [Property]) {
        match self {
            SortOrder::Featured => properties.sort_by_key(|p| !p.featured),
            SortOrder::PriceLowToHigh => properties.sort_by_key(|p| p.price),
            SortOrder::PriceHighToLow => {
                properties.sort_by(|a, b| b.price.cmp(&a.price));
            }
            SortOrder::Newest => properties.reverse(),
        }
    }
}
