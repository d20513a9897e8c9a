//! Side-by-side comparison metrics for a small product selection: per-unit
//! price, best/worst value, and highest-concentration flags.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductId};

/// The comparison tray holds at most this many products.
pub const MAX_COMPARISON_PRODUCTS: usize = 3;

/// One active ingredient cell in the comparison grid. Missing
/// concentrations render as unknown, never as lowest, and are never
/// flagged highest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientConcentration {
    pub name: String,
    pub concentration: Option<f64>,
    pub highest: bool,
}

/// Per-product column of the comparison grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductMetrics {
    pub product_id: ProductId,
    pub price_per_ml: Option<Decimal>,
    pub has_ppml: bool,
    pub active_ingredients: Vec<IngredientConcentration>,
}

/// Metrics over the whole selection, plus the aggregate counts backing
/// "x/n have size info" style summaries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    pub products: Vec<ProductMetrics>,
    pub best_value: Option<ProductId>,
    pub worst_value: Option<ProductId>,
    pub ppml_count: usize,
    pub concentration_count: usize,
}

/// Positions of the lowest and highest present values, or `None` when the
/// comparison is meaningless: fewer than two values present, or every
/// present value equal. Ties resolve to the first-encountered position.
pub fn extreme_indices(values: &[Option<Decimal>]) -> Option<(usize, usize)> {
    let mut lowest: Option<(usize, Decimal)> = None;
    let mut highest: Option<(usize, Decimal)> = None;
    let mut present = 0usize;

    for (index, value) in values.iter().enumerate() {
        let Some(value) = value else { continue };
        present += 1;
        if lowest.map_or(true, |(_, current)| *value < current) {
            lowest = Some((index, *value));
        }
        if highest.map_or(true, |(_, current)| *value > current) {
            highest = Some((index, *value));
        }
    }

    let ((low_index, low), (high_index, high)) = lowest.zip(highest)?;
    if present < 2 || low == high {
        return None;
    }
    Some((low_index, high_index))
}

/// Compute comparison metrics for 1-3 selected products.
pub fn compare_products(selection: &[Product]) -> ComparisonMetrics {
    let ppml_values: Vec<Option<Decimal>> =
        selection.iter().map(Product::price_per_ml).collect();

    let mut products: Vec<ProductMetrics> = selection
        .iter()
        .zip(&ppml_values)
        .map(|(product, ppml)| ProductMetrics {
            product_id: product.id.clone(),
            price_per_ml: *ppml,
            has_ppml: ppml.is_some(),
            active_ingredients: product
                .active_ingredients
                .iter()
                .map(|active| IngredientConcentration {
                    name: active.name.clone(),
                    concentration: active.concentration,
                    highest: false,
                })
                .collect(),
        })
        .collect();

    let (best_value, worst_value) = match extreme_indices(&ppml_values) {
        Some((low, high)) => {
            (Some(selection[low].id.clone()), Some(selection[high].id.clone()))
        }
        None => (None, None),
    };

    flag_highest_concentrations(&mut products);

    let ppml_count = ppml_values.iter().filter(|value| value.is_some()).count();
    let concentration_count = products
        .iter()
        .filter(|metrics| {
            metrics.active_ingredients.iter().any(|cell| cell.concentration.is_some())
        })
        .count();

    ComparisonMetrics { products, best_value, worst_value, ppml_count, concentration_count }
}

/// Flag, per ingredient name, the cell holding the numeric maximum across
/// the selection. Needs at least two numeric entries for the ingredient;
/// a lone disclosure is never flagged. Ties flag the first-encountered
/// cell.
fn flag_highest_concentrations(products: &mut [ProductMetrics]) {
    let mut ingredient_names: Vec<String> = Vec::new();
    for metrics in products.iter() {
        for cell in &metrics.active_ingredients {
            let key = cell.name.to_lowercase();
            if !ingredient_names.contains(&key) {
                ingredient_names.push(key);
            }
        }
    }

    for name in &ingredient_names {
        let mut top: Option<(usize, usize, f64)> = None;
        let mut numeric_entries = 0usize;

        for (product_index, metrics) in products.iter().enumerate() {
            for (cell_index, cell) in metrics.active_ingredients.iter().enumerate() {
                if cell.name.to_lowercase() != *name {
                    continue;
                }
                let Some(concentration) = cell.concentration else { continue };
                numeric_entries += 1;
                let beats = top.map_or(true, |(_, _, current)| concentration > current);
                if beats {
                    top = Some((product_index, cell_index, concentration));
                }
            }
        }

        if numeric_entries < 2 {
            continue;
        }
        if let Some((product_index, cell_index, _)) = top {
            products[product_index].active_ingredients[cell_index].highest = true;
        }
    }
}
