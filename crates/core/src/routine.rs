//! AM/PM routine placement: classifies a product into morning, evening, or
//! both slots via an ordered keyword -> ingredient -> category cascade.

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Routine slot a product belongs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Am,
    Pm,
    Both,
}

/// Keyword, ingredient, and category tables driving the cascade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOfDayRules {
    pub am_keywords: Vec<String>,
    pub pm_keywords: Vec<String>,
    pub am_ingredients: Vec<String>,
    pub pm_ingredients: Vec<String>,
    pub category_defaults: Vec<(String, TimeOfDay)>,
}

impl Default for TimeOfDayRules {
    fn default() -> Self {
        let keywords = |entries: &[&str]| entries.iter().map(|entry| entry.to_string()).collect();
        Self {
            am_keywords: keywords(&[
                "morning",
                "daytime",
                "day cream",
                "spf",
                "sun protection",
                "uv protection",
            ]),
            pm_keywords: keywords(&["night", "overnight", "evening", "before bed", "sleeping"]),
            am_ingredients: keywords(&[
                "vitamin c",
                "ascorbic",
                "caffeine",
                "zinc oxide",
                "titanium dioxide",
            ]),
            pm_ingredients: keywords(&[
                "retinol",
                "retinal",
                "tretinoin",
                "glycolic",
                "lactic",
                "salicylic",
                "bakuchiol",
            ]),
            category_defaults: vec![
                ("sunscreen".to_string(), TimeOfDay::Am),
                ("mask".to_string(), TimeOfDay::Pm),
                ("sleeping mask".to_string(), TimeOfDay::Pm),
                ("cleanser".to_string(), TimeOfDay::Both),
                ("toner".to_string(), TimeOfDay::Both),
                ("serum".to_string(), TimeOfDay::Both),
                ("moisturizer".to_string(), TimeOfDay::Both),
                ("eye cream".to_string(), TimeOfDay::Both),
                ("essence".to_string(), TimeOfDay::Both),
            ],
        }
    }
}

/// Classifies products into routine slots.
#[derive(Clone, Debug, Default)]
pub struct TimeOfDayClassifier {
    rules: TimeOfDayRules,
}

impl TimeOfDayClassifier {
    pub fn new(rules: TimeOfDayRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &TimeOfDayRules {
        &self.rules
    }

    /// Four-layer cascade. Once the keyword or ingredient layer produces
    /// any signal that signal is final, even one-sided; the category
    /// default only applies to products with no signal at all.
    pub fn classify(&self, product: &Product) -> TimeOfDay {
        let text = format!("{} {}", product.name, product.description).to_lowercase();
        let am = scan(&self.rules.am_keywords, &text);
        let pm = scan(&self.rules.pm_keywords, &text);
        if am || pm {
            return slot_from_signals(am, pm);
        }

        let mut am = false;
        let mut pm = false;
        for ingredient in product.ingredient_names() {
            let ingredient = ingredient.to_lowercase();
            am = am || scan(&self.rules.am_ingredients, &ingredient);
            pm = pm || scan(&self.rules.pm_ingredients, &ingredient);
        }
        if am || pm {
            return slot_from_signals(am, pm);
        }

        self.rules
            .category_defaults
            .iter()
            .find(|(category, _)| category.eq_ignore_ascii_case(&product.category))
            .map(|(_, slot)| *slot)
            .unwrap_or(TimeOfDay::Both)
    }
}

fn scan(needles: &[String], haystack: &str) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

fn slot_from_signals(am: bool, pm: bool) -> TimeOfDay {
    match (am, pm) {
        (true, true) => TimeOfDay::Both,
        (true, false) => TimeOfDay::Am,
        _ => TimeOfDay::Pm,
    }
}

/// Classify with the default rule tables.
pub fn classify_time_of_day(product: &Product) -> TimeOfDay {
    TimeOfDayClassifier::default().classify(product)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::product::{
        ActiveIngredient, PreferenceFlags, Product, ProductId,
    };

    use super::{classify_time_of_day, TimeOfDay};

    fn product(name: &str, description: &str, category: &str) -> Product {
        Product {
            id: ProductId("prod-1".to_string()),
            name: name.to_string(),
            brand: "Dewlab".to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price: Decimal::from(20),
            rating: 4.0,
            review_count: 10,
            size: None,
            size_unit: None,
            concerns: Vec::new(),
            key_ingredients: Vec::new(),
            active_ingredients: Vec::new(),
            skin_types: Vec::new(),
            preferences: PreferenceFlags::default(),
            in_stock: true,
        }
    }

    #[test]
    fn unsignaled_products_fall_back_to_their_category_default() {
        let plain = product("Gentle Wash", "A mild gel cleanser.", "cleanser");
        assert_eq!(classify_time_of_day(&plain), TimeOfDay::Both);

        let sunscreen = product("Shield Fluid", "Lightweight fluid.", "sunscreen");
        assert_eq!(classify_time_of_day(&sunscreen), TimeOfDay::Am);

        let mask = product("Clay Treat", "Purifying clay.", "mask");
        assert_eq!(classify_time_of_day(&mask), TimeOfDay::Pm);
    }

    #[test]
    fn description_keywords_override_the_category_default() {
        let overnight = product("Gentle Wash", "Use overnight for best results.", "cleanser");
        assert_eq!(classify_time_of_day(&overnight), TimeOfDay::Pm);
    }

    #[test]
    fn keywords_on_both_sides_classify_as_both() {
        let around_the_clock =
            product("Day & Night Duo", "Morning and evening care.", "moisturizer");
        assert_eq!(classify_time_of_day(&around_the_clock), TimeOfDay::Both);
    }

    #[test]
    fn ingredient_layer_fires_only_without_keyword_signals() {
        let mut retinol_serum = product("Renewal Drops", "Concentrated treatment.", "serum");
        retinol_serum.key_ingredients = vec!["Retinol".to_string()];
        assert_eq!(classify_time_of_day(&retinol_serum), TimeOfDay::Pm);

        // A morning keyword outranks the evening-leaning ingredient.
        let mut morning_retinol = product("Morning Renewal", "Concentrated treatment.", "serum");
        morning_retinol.key_ingredients = vec!["Retinol".to_string()];
        assert_eq!(classify_time_of_day(&morning_retinol), TimeOfDay::Am);
    }

    #[test]
    fn active_ingredient_names_feed_the_ingredient_layer() {
        let mut brightener = product("Glow Drops", "Brightening treatment.", "serum");
        brightener.active_ingredients =
            vec![ActiveIngredient { name: "L-Ascorbic Acid".to_string(), concentration: Some(15.0) }];
        assert_eq!(classify_time_of_day(&brightener), TimeOfDay::Am);
    }

    #[test]
    fn one_sided_ingredient_signal_never_falls_through_to_category() {
        // Category says AM, ingredient says PM; the ingredient signal wins.
        let mut odd_sunscreen = product("Shield Fluid", "Lightweight fluid.", "sunscreen");
        odd_sunscreen.key_ingredients = vec!["Glycolic Acid".to_string()];
        assert_eq!(classify_time_of_day(&odd_sunscreen), TimeOfDay::Pm);
    }

    #[test]
    fn unknown_categories_default_to_both() {
        let gadget = product("Sculpt Tool", "Facial massage tool.", "device");
        assert_eq!(classify_time_of_day(&gadget), TimeOfDay::Both);
    }
}
