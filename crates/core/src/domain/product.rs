use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// Declared unit for a product's package size. PPML math only works on
/// volume units; gram-denominated products report no per-ml price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeUnit {
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "l")]
    Liters,
    #[serde(rename = "fl_oz")]
    FluidOunces,
    #[serde(rename = "g")]
    Grams,
}

impl SizeUnit {
    /// Convert a size in this unit to milliliters. `None` for mass units.
    pub fn to_milliliters(&self, size: Decimal) -> Option<Decimal> {
        match self {
            SizeUnit::Milliliters => Some(size),
            SizeUnit::Liters => Some(size * Decimal::from(1000)),
            SizeUnit::FluidOunces => Some(size * Decimal::new(295_735, 4)),
            SizeUnit::Grams => None,
        }
    }
}

/// An active ingredient as printed on the label, with its declared
/// concentration percentage when the brand discloses one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveIngredient {
    pub name: String,
    pub concentration: Option<f64>,
}

/// Lifestyle/formulation flags carried by both products and user profiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceFlags {
    pub vegan: bool,
    pub cruelty_free: bool,
    pub fragrance_free: bool,
    pub alcohol_free: bool,
    pub reef_safe: bool,
}

impl PreferenceFlags {
    pub fn active(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.vegan {
            flags.push("vegan");
        }
        if self.cruelty_free {
            flags.push("cruelty_free");
        }
        if self.fragrance_free {
            flags.push("fragrance_free");
        }
        if self.alcohol_free {
            flags.push("alcohol_free");
        }
        if self.reef_safe {
            flags.push("reef_safe");
        }
        flags
    }

    /// Number of flags set on both sides.
    pub fn shared_count(&self, other: &PreferenceFlags) -> usize {
        [
            self.vegan && other.vegan,
            self.cruelty_free && other.cruelty_free,
            self.fragrance_free && other.fragrance_free,
            self.alcohol_free && other.alcohol_free,
            self.reef_safe && other.reef_safe,
        ]
        .into_iter()
        .filter(|shared| *shared)
        .count()
    }
}

/// A catalog product. Read-only input to every scorer; the engine never
/// mutates the catalog, it returns annotated copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: Decimal,
    pub rating: f64,
    pub review_count: u32,
    pub size: Option<Decimal>,
    pub size_unit: Option<SizeUnit>,
    pub concerns: Vec<String>,
    pub key_ingredients: Vec<String>,
    pub active_ingredients: Vec<ActiveIngredient>,
    pub skin_types: Vec<String>,
    pub preferences: PreferenceFlags,
    pub in_stock: bool,
}

impl Product {
    /// Whether the product is marketed for the given skin type. A product
    /// tagged "all" suits every skin type.
    pub fn suits_skin_type(&self, skin_type: &str) -> bool {
        self.skin_types.iter().any(|listed| {
            listed.eq_ignore_ascii_case(skin_type) || listed.eq_ignore_ascii_case("all")
        })
    }

    pub fn has_key_ingredients(&self) -> bool {
        !self.key_ingredients.is_empty()
    }

    /// Every ingredient name the product declares: key ingredients followed
    /// by active ingredient label names.
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.key_ingredients
            .iter()
            .map(String::as_str)
            .chain(self.active_ingredients.iter().map(|active| active.name.as_str()))
    }

    /// Price per milliliter, when the product declares a positive price and
    /// a positive volume size. Mass-denominated sizes yield `None`.
    pub fn price_per_ml(&self) -> Option<Decimal> {
        if self.price <= Decimal::ZERO {
            return None;
        }
        let size = self.size.filter(|size| *size > Decimal::ZERO)?;
        let milliliters = self.size_unit?.to_milliliters(size)?;
        if milliliters <= Decimal::ZERO {
            return None;
        }
        Some(self.price / milliliters)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{PreferenceFlags, Product, ProductId, SizeUnit};

    fn product(size: Option<Decimal>, unit: Option<SizeUnit>, price: Decimal) -> Product {
        Product {
            id: ProductId("prod-1".to_string()),
            name: "Hydra Serum".to_string(),
            brand: "Dewlab".to_string(),
            category: "serum".to_string(),
            description: String::new(),
            price,
            rating: 4.6,
            review_count: 120,
            size,
            size_unit: unit,
            concerns: vec!["dryness".to_string()],
            key_ingredients: vec!["Hyaluronic Acid".to_string()],
            active_ingredients: Vec::new(),
            skin_types: vec!["dry".to_string()],
            preferences: PreferenceFlags::default(),
            in_stock: true,
        }
    }

    #[test]
    fn price_per_ml_divides_price_by_volume() {
        let product =
            product(Some(Decimal::from(50)), Some(SizeUnit::Milliliters), Decimal::from(25));
        assert_eq!(product.price_per_ml(), Some(Decimal::new(5, 1)));
    }

    #[test]
    fn fluid_ounces_convert_before_dividing() {
        let product =
            product(Some(Decimal::from(2)), Some(SizeUnit::FluidOunces), Decimal::from(30));
        let ppml = product.price_per_ml().expect("volume size should price");
        assert!(ppml > Decimal::new(5, 1) && ppml < Decimal::new(51, 2));
    }

    #[test]
    fn gram_sizes_have_no_per_ml_price() {
        let product = product(Some(Decimal::from(50)), Some(SizeUnit::Grams), Decimal::from(25));
        assert_eq!(product.price_per_ml(), None);
    }

    #[test]
    fn missing_or_zero_size_has_no_per_ml_price() {
        assert_eq!(product(None, None, Decimal::from(25)).price_per_ml(), None);
        assert_eq!(
            product(Some(Decimal::ZERO), Some(SizeUnit::Milliliters), Decimal::from(25))
                .price_per_ml(),
            None
        );
    }

    #[test]
    fn all_skin_type_tag_suits_everyone() {
        let mut product = product(None, None, Decimal::from(10));
        product.skin_types = vec!["All".to_string()];
        assert!(product.suits_skin_type("oily"));
        assert!(product.suits_skin_type("dry"));
    }

    #[test]
    fn shared_preference_flags_are_counted_pairwise() {
        let left = PreferenceFlags { vegan: true, cruelty_free: true, ..Default::default() };
        let right = PreferenceFlags { vegan: true, fragrance_free: true, ..Default::default() };
        assert_eq!(left.shared_count(&right), 1);
    }
}
