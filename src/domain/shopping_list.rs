//! Shopping list aggregation and rendering.
//!
//! Ingredient lines from every recipe in a cart are summed per
//! `(ingredient_name, measurement_unit)` pair. Lines with the same name but a
//! different unit stay separate: `1 L` and `200 ml` of milk are two rows.
//!
//! Output order is the byte-wise order of name, then unit, so the same cart
//! always renders to the same bytes.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::domain::entities::IngredientLine;

/// First line of every rendered shopping list.
pub const HEADER: &str = "Shopping list";

/// One aggregated row of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    /// Sum of `u32` amounts; `u128` cannot overflow for any realistic cart.
    pub total_amount: u128,
}

/// Groups lines by `(name, unit)` and sums their amounts.
///
/// Duplicate lines inside one recipe contribute to the same group.
pub fn aggregate<I>(lines: I) -> Vec<ShoppingListItem>
where
    I: IntoIterator<Item = IngredientLine>,
{
    let mut groups: BTreeMap<(String, String), u128> = BTreeMap::new();

    for line in lines {
        *groups
            .entry((line.ingredient_name, line.measurement_unit))
            .or_default() += u128::from(line.amount);
    }

    groups
        .into_iter()
        .map(|((name, measurement_unit), total_amount)| ShoppingListItem {
            name,
            measurement_unit,
            total_amount,
        })
        .collect()
}

/// Renders items as the downloadable text document.
///
/// ```text
/// Shopping list
/// Flour 500 g
/// Salt 1 tsp
/// ```
///
/// Every line, the header included, ends with `\n`.
pub fn render(items: &[ShoppingListItem]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + items.len() * 24);
    out.push_str(HEADER);
    out.push('\n');

    for item in items {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{} {} {}",
            item.name, item.total_amount, item.measurement_unit
        );
    }

    out
}
