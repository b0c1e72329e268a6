//! Keyword-driven business-type classification
//!
//! Maps a free-text business description to one label from a fixed set by
//! counting case-insensitive keyword-substring matches per label. The
//! keyword table is data, not control flow: the matcher walks whatever
//! table it is given, so products can extend or replace the builtin table
//! without touching the algorithm.
//!
//! Classification only ever selects cosmetic defaults (color palette,
//! stock-image topics) for generated output. It is total: every input,
//! including the empty string, yields a label.

use serde::{Deserialize, Serialize};

/// The fixed label set. Table order doubles as the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    Restaurant,
    Bakery,
    Tech,
    Fitness,
    Beauty,
    Consulting,
    Retail,
    Healthcare,
    Education,
    RealEstate,
    Automotive,
    Construction,
    Legal,
    Financial,
    Travel,
    Pet,
    HomeServices,
    Creative,
    FoodDelivery,
    Coffee,
}

impl BusinessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Restaurant => "restaurant",
            BusinessType::Bakery => "bakery",
            BusinessType::Tech => "tech",
            BusinessType::Fitness => "fitness",
            BusinessType::Beauty => "beauty",
            BusinessType::Consulting => "consulting",
            BusinessType::Retail => "retail",
            BusinessType::Healthcare => "healthcare",
            BusinessType::Education => "education",
            BusinessType::RealEstate => "real_estate",
            BusinessType::Automotive => "automotive",
            BusinessType::Construction => "construction",
            BusinessType::Legal => "legal",
            BusinessType::Financial => "financial",
            BusinessType::Travel => "travel",
            BusinessType::Pet => "pet",
            BusinessType::HomeServices => "home_services",
            BusinessType::Creative => "creative",
            BusinessType::FoodDelivery => "food_delivery",
            BusinessType::Coffee => "coffee",
        }
    }

    /// Cosmetic defaults applied to generated output for this label.
    pub fn cosmetic_defaults(&self) -> CosmeticDefaults {
        match self {
            BusinessType::Restaurant => CosmeticDefaults {
                primary_color: "#8b2f2f",
                accent_color: "#e8c07d",
                stock_topics: &["plated dish", "dining room", "chef at work"],
            },
            BusinessType::Bakery => CosmeticDefaults {
                primary_color: "#a06235",
                accent_color: "#f3e3cf",
                stock_topics: &["fresh bread", "pastry display", "bakery counter"],
            },
            BusinessType::Tech => CosmeticDefaults {
                primary_color: "#1f4fd8",
                accent_color: "#9ad1f5",
                stock_topics: &["laptop workspace", "team whiteboard", "server room"],
            },
            BusinessType::Fitness => CosmeticDefaults {
                primary_color: "#1d8a4e",
                accent_color: "#c6f1d6",
                stock_topics: &["gym floor", "personal training", "outdoor run"],
            },
            BusinessType::Beauty => CosmeticDefaults {
                primary_color: "#b0487f",
                accent_color: "#f6dce8",
                stock_topics: &["salon chair", "skincare products", "styling session"],
            },
            BusinessType::Consulting => CosmeticDefaults {
                primary_color: "#2f4858",
                accent_color: "#b8c9d3",
                stock_topics: &["meeting room", "handshake", "strategy board"],
            },
            BusinessType::Retail => CosmeticDefaults {
                primary_color: "#c26d26",
                accent_color: "#f5ddc0",
                stock_topics: &["storefront", "product shelf", "checkout counter"],
            },
            BusinessType::Healthcare => CosmeticDefaults {
                primary_color: "#0f6f8f",
                accent_color: "#cdeef7",
                stock_topics: &["clinic reception", "care team", "consultation"],
            },
            BusinessType::Education => CosmeticDefaults {
                primary_color: "#5b3d9e",
                accent_color: "#ddd2f2",
                stock_topics: &["classroom", "study group", "graduation"],
            },
            BusinessType::RealEstate => CosmeticDefaults {
                primary_color: "#30567a",
                accent_color: "#cfe0ee",
                stock_topics: &["house exterior", "modern interior", "keys handover"],
            },
            BusinessType::Automotive => CosmeticDefaults {
                primary_color: "#44444c",
                accent_color: "#d94f2b",
                stock_topics: &["workshop lift", "car detail", "mechanic"],
            },
            BusinessType::Construction => CosmeticDefaults {
                primary_color: "#b5862a",
                accent_color: "#efe2c0",
                stock_topics: &["building site", "blueprints", "crane skyline"],
            },
            BusinessType::Legal => CosmeticDefaults {
                primary_color: "#2c3a54",
                accent_color: "#c8b98a",
                stock_topics: &["law library", "signing documents", "courthouse"],
            },
            BusinessType::Financial => CosmeticDefaults {
                primary_color: "#1a5c46",
                accent_color: "#bfe3d4",
                stock_topics: &["charts on screen", "advisor meeting", "city skyline"],
            },
            BusinessType::Travel => CosmeticDefaults {
                primary_color: "#1173a6",
                accent_color: "#ffd98e",
                stock_topics: &["beach horizon", "mountain trail", "airport departures"],
            },
            BusinessType::Pet => CosmeticDefaults {
                primary_color: "#946b2d",
                accent_color: "#e9f3c8",
                stock_topics: &["dog walk", "grooming table", "vet checkup"],
            },
            BusinessType::HomeServices => CosmeticDefaults {
                primary_color: "#3a6ea5",
                accent_color: "#e4ded1",
                stock_topics: &["toolbox", "kitchen renovation", "tidy living room"],
            },
            BusinessType::Creative => CosmeticDefaults {
                primary_color: "#7a3ab8",
                accent_color: "#f3c6e2",
                stock_topics: &["design studio", "camera rig", "mood board"],
            },
            BusinessType::FoodDelivery => CosmeticDefaults {
                primary_color: "#c93b3b",
                accent_color: "#ffe3ae",
                stock_topics: &["courier on bike", "takeout boxes", "doorstep handoff"],
            },
            BusinessType::Coffee => CosmeticDefaults {
                primary_color: "#5a3a26",
                accent_color: "#e7d3bd",
                stock_topics: &["latte art", "espresso machine", "cafe window"],
            },
        }
    }
}

/// Color palette and stock-image topics used to dress generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CosmeticDefaults {
    pub primary_color: &'static str,
    pub accent_color: &'static str,
    pub stock_topics: &'static [&'static str],
}

/// Ordered mapping from label to keyword substrings. Iteration order is the
/// tie-break: the first label with the highest match count wins.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(BusinessType, Vec<&'static str>)>,
}

impl KeywordTable {
    /// The builtin table shipped with the product. Keywords are lowercase;
    /// matching lowercases the description, never the table.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                (
                    BusinessType::Restaurant,
                    vec![
                        "restaurant", "dining", "menu", "cuisine", "chef", "bistro", "grill",
                        "eatery", "food truck",
                    ],
                ),
                (
                    BusinessType::Bakery,
                    vec![
                        "bakery", "bread", "pastry", "pastries", "cake", "croissant", "dessert",
                        "patisserie",
                    ],
                ),
                (
                    BusinessType::Tech,
                    vec![
                        "software", "startup", "saas", "app", "tech", "digital", "platform",
                        "developer", "cloud",
                    ],
                ),
                (
                    BusinessType::Fitness,
                    vec![
                        "gym", "fitness", "workout", "yoga", "pilates", "crossfit", "trainer",
                        "wellness",
                    ],
                ),
                (
                    BusinessType::Beauty,
                    vec![
                        "salon", "beauty", "spa", "hair", "nails", "makeup", "skincare", "barber",
                    ],
                ),
                (
                    BusinessType::Consulting,
                    vec!["consulting", "consultant", "advisory", "strategy", "coaching"],
                ),
                (
                    BusinessType::Retail,
                    vec!["shop", "store", "boutique", "retail", "merchandise", "ecommerce"],
                ),
                (
                    BusinessType::Healthcare,
                    vec![
                        "clinic", "medical", "health", "dental", "doctor", "therapy", "pharmacy",
                    ],
                ),
                (
                    BusinessType::Education,
                    vec![
                        "school", "tutoring", "education", "courses", "academy", "training",
                        "learning",
                    ],
                ),
                (
                    BusinessType::RealEstate,
                    vec!["real estate", "realtor", "property", "properties", "homes for sale"],
                ),
                (
                    BusinessType::Automotive,
                    vec![
                        "auto", "car", "mechanic", "garage", "vehicle", "tires", "detailing",
                    ],
                ),
                (
                    BusinessType::Construction,
                    vec![
                        "construction", "contractor", "builder", "remodeling", "roofing",
                        "renovation",
                    ],
                ),
                (
                    BusinessType::Legal,
                    vec!["law", "legal", "attorney", "lawyer", "notary"],
                ),
                (
                    BusinessType::Financial,
                    vec![
                        "accounting", "bookkeeping", "tax", "financial", "finance", "insurance",
                        "investment",
                    ],
                ),
                (
                    BusinessType::Travel,
                    vec!["travel", "tours", "tourism", "vacation", "hotel", "hostel"],
                ),
                (
                    BusinessType::Pet,
                    vec!["pet", "dog", "cat", "veterinary", "grooming", "kennel"],
                ),
                (
                    BusinessType::HomeServices,
                    vec![
                        "plumbing", "plumber", "electrician", "cleaning", "landscaping", "hvac",
                        "handyman",
                    ],
                ),
                (
                    BusinessType::Creative,
                    vec![
                        "design", "photography", "photographer", "studio", "art", "video",
                        "branding",
                    ],
                ),
                (
                    BusinessType::FoodDelivery,
                    vec!["delivery", "takeout", "meal prep", "catering", "ghost kitchen"],
                ),
                (
                    BusinessType::Coffee,
                    vec!["coffee", "cafe", "espresso", "roastery", "latte", "tea house"],
                ),
            ],
        }
    }

    /// Build a table from caller-supplied entries, preserving their order.
    pub fn with_entries(entries: Vec<(BusinessType, Vec<&'static str>)>) -> Self {
        Self { entries }
    }

    /// Count keyword-substring matches per label and pick the winner.
    /// Ties keep the earlier label; zero matches fall back to `consulting`.
    pub fn classify(&self, description: &str) -> BusinessType {
        let haystack = description.to_lowercase();
        let mut best = BusinessType::Consulting;
        let mut best_count = 0usize;

        for (label, keywords) in &self.entries {
            let count = keywords
                .iter()
                .filter(|keyword| haystack.contains(**keyword))
                .count();
            if count > best_count {
                best_count = count;
                best = *label;
            }
        }

        best
    }
}

/// Classify against the builtin table.
pub fn classify(description: &str) -> BusinessType {
    KeywordTable::builtin().classify(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bakery_description_classifies_deterministically() {
        assert_eq!(classify("cozy bakery downtown"), BusinessType::Bakery);
        assert_eq!(classify("cozy bakery downtown"), BusinessType::Bakery);
    }

    #[test]
    fn empty_description_defaults_to_consulting() {
        assert_eq!(classify(""), BusinessType::Consulting);
    }

    #[test]
    fn no_keyword_match_defaults_to_consulting() {
        assert_eq!(classify("we do mysterious things"), BusinessType::Consulting);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("THE BEST COFFEE IN TOWN"), BusinessType::Coffee);
    }

    #[test]
    fn highest_count_wins() {
        // One restaurant keyword, three coffee keywords.
        assert_eq!(
            classify("a cafe serving espresso and latte next to a restaurant"),
            BusinessType::Coffee
        );
    }

    #[test]
    fn ties_break_by_table_order() {
        // "restaurant" and "gym" each match exactly one keyword; restaurant
        // appears first in the builtin table.
        assert_eq!(classify("restaurant with a gym"), BusinessType::Restaurant);
    }

    #[test]
    fn custom_table_is_honored() {
        let table = KeywordTable::with_entries(vec![
            (BusinessType::Pet, vec!["axolotl"]),
            (BusinessType::Travel, vec!["expedition"]),
        ]);
        assert_eq!(table.classify("axolotl expedition axolotl"), BusinessType::Pet);
        assert_eq!(table.classify("nothing relevant"), BusinessType::Consulting);
    }

    #[test]
    fn every_label_has_cosmetic_defaults() {
        for (label, keywords) in KeywordTable::builtin().entries {
            assert!(!keywords.is_empty(), "{} has no keywords", label.as_str());
            let defaults = label.cosmetic_defaults();
            assert!(defaults.primary_color.starts_with('#'));
            assert!(defaults.accent_color.starts_with('#'));
            assert!(!defaults.stock_topics.is_empty());
        }
    }
}
