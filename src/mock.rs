//! Canned results for working on display code without a network or API key.
//!
//! These are fixed fixtures, not a simulation of the model: they never fail and
//! ignore the image entirely.

use crate::results::{
    CareGuide, Difficulty, GrowingConditions, Ingredient, Plant, PlantAnalysis, PlantDisease,
    PlantIdentificationResult, Recipe, RecipeIdentificationResult, Severity,
};
use chrono::Utc;
use std::time::Duration;

pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(2000);

/// Result types that have a canned stand-in
pub trait MockFixture {
    fn fixture() -> Self;
}

impl MockFixture for PlantIdentificationResult {
    fn fixture() -> Self {
        mock_plant_identification()
    }
}

impl MockFixture for RecipeIdentificationResult {
    fn fixture() -> Self {
        mock_recipe_identification()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn early_blight() -> PlantDisease {
    PlantDisease {
        name: "Early Blight".to_string(),
        scientific_name: Some("Alternaria solani".to_string()),
        description: "Early blight is a common fungal disease that affects tomato plants, causing \
                      characteristic dark spots on leaves and reducing overall plant vigor."
            .to_string(),
        symptoms: strings(&[
            "Dark brown spots on leaves with concentric rings",
            "Yellow areas surrounding the spots",
            "Spots appear on lower leaves first and move upward",
            "Leaf drop or withering",
            "Sunken dark spots may appear on stems and fruits",
        ]),
        causes: strings(&[
            "Fungus (Alternaria solani)",
            "Warm, humid conditions (75-85°F)",
            "Poor air circulation",
            "Extended leaf wetness",
            "Stressed or undernourished plants",
        ]),
        development_stage: Some(
            "Early to moderate development stage. The disease has established but hasn't \
             severely impacted the entire plant yet."
                .to_string(),
        ),
        potential_impact: Some(
            "If untreated, early blight can cause significant defoliation, reduced \
             photosynthesis, and decreased fruit production. Severe cases may lead to crop \
             yield reduction of 30-50%."
                .to_string(),
        ),
        treatments: strings(&[
            "Remove affected leaves immediately",
            "Apply approved fungicide every 7-10 days",
            "Water at the base of plant to keep foliage dry",
            "Improve air circulation around plants",
        ]),
        organic_solutions: strings(&[
            "Copper-based fungicides (apply every 7 days)",
            "Neem oil spray (apply every 7-14 days)",
            "Bacillus subtilis biological fungicide",
            "Compost tea foliar spray",
        ]),
        chemical_solutions: strings(&[
            "Chlorothalonil fungicide",
            "Mancozeb fungicide",
            "Azoxystrobin fungicide",
            "Propiconazole fungicide",
        ]),
        preventions: strings(&[
            "Crop rotation (avoid planting tomatoes in the same spot for 3 years)",
            "Proper spacing between plants",
            "Mulching to prevent soil splash",
            "Remove and destroy plant debris at end of season",
            "Use resistant varieties where available",
        ]),
        spread_risk: Some(
            "Moderate to high. Early blight spreads through wind-borne spores, rain splash, and \
             contact with contaminated tools or hands."
                .to_string(),
        ),
        treatment_schedule: Some(
            "Begin treatment immediately. Apply fungicides every 7-10 days until symptoms \
             subside. Continue preventative applications every 10-14 days throughout growing \
             season."
                .to_string(),
        ),
        recommended_products: strings(&[
            "Bonide Copper Fungicide",
            "Garden Safe Brand Neem Oil Extract",
            "Southern Ag Liquid Copper Fungicide",
            "Serenade Garden Disease Control",
        ]),
        severity: Severity::Medium,
        diagnostic_notes: Some(
            "Distinguishable from late blight by the presence of concentric rings in the spots \
             and the absence of fuzzy white growth on leaf undersides."
                .to_string(),
        ),
    }
}

/// Tomato plant with early blight, confidence 0.92
pub fn mock_plant_identification() -> PlantIdentificationResult {
    PlantIdentificationResult {
        plant: Plant {
            name: "Tomato Plant".to_string(),
            scientific_name: "Solanum lycopersicum".to_string(),
            description: "The tomato is the edible berry of the plant Solanum lycopersicum, \
                          commonly known as a tomato plant. It is one of the most widely grown \
                          vegetables in home gardens and is valued for its flavorful fruits."
                .to_string(),
            growing_conditions: Some(GrowingConditions {
                light: "Full sun".to_string(),
                water: "Regular, consistent moisture".to_string(),
                soil: "Well-draining, rich in organic matter".to_string(),
                temperature: "65-85°F (18-29°C)".to_string(),
                humidity: "Moderate to high".to_string(),
            }),
            care_guide: Some(CareGuide {
                watering: "Water deeply 1-2 times per week, ensuring soil stays evenly moist but \
                           not waterlogged. Avoid wetting the foliage when watering to prevent \
                           disease."
                    .to_string(),
                fertilizing: "Apply balanced fertilizer (10-10-10) every 2-3 weeks during \
                              growing season. Side-dress with compost when first fruits begin \
                              to form."
                    .to_string(),
                pruning: "Remove suckers (shoots growing between main stem and branches) to \
                          improve air circulation and focus plant energy on fruit production."
                    .to_string(),
                repotting: "Transplant seedlings to larger containers or garden when they reach \
                            6-8 inches tall. Space plants 24-36 inches apart."
                    .to_string(),
            }),
            fun_facts: strings(&[
                "Tomatoes are technically fruits, not vegetables.",
                "There are over 10,000 varieties of tomatoes worldwide.",
                "Tomatoes were once thought to be poisonous in the United States.",
                "Tomato plants can grow up to 10 feet tall with proper support.",
            ]),
            diseases: vec![early_blight()],
        },
        analysis: Some(PlantAnalysis {
            overall_health: "Fair".to_string(),
            issues_identified: true,
            growth_stage: Some("Mature vegetative/Early fruiting".to_string()),
            estimated_age: Some("8-10 weeks".to_string()),
            recommended_actions: strings(&[
                "Begin fungicide treatment within next 24 hours",
                "Remove all visibly affected leaves and destroy (do not compost)",
                "Improve air circulation around plant by pruning and proper spacing",
                "Apply balanced fertilizer to improve plant vigor",
                "Mulch around base to prevent soil splash",
            ]),
        }),
        confidence: 0.92,
        detected_disease: Some(early_blight()),
        timestamp: Utc::now(),
    }
}

/// Five pantry ingredients and two recipes, the first one easy
pub fn mock_recipe_identification() -> RecipeIdentificationResult {
    RecipeIdentificationResult {
        detected_ingredients: vec![
            Ingredient::new("Tomato", "3", "medium"),
            Ingredient::new("Onion", "1", "large"),
            Ingredient::new("Garlic", "2", "cloves"),
            Ingredient::new("Olive oil", "2", "tbsp"),
            Ingredient::new("Bell pepper", "1", "medium"),
        ],
        suggested_recipes: vec![
            Recipe {
                name: "Simple Tomato Sauce".to_string(),
                description: "A quick and flavorful tomato sauce that can be used for pasta or \
                              as a base for other dishes."
                    .to_string(),
                ingredients: vec![
                    Ingredient::new("Tomato", "3", "medium"),
                    Ingredient::new("Onion", "1", "large"),
                    Ingredient::new("Garlic", "2", "cloves"),
                    Ingredient::new("Olive oil", "2", "tbsp"),
                    Ingredient::new("Salt", "1/2", "tsp"),
                    Ingredient::new("Black pepper", "1/4", "tsp"),
                    Ingredient::new("Basil", "1", "tbsp"),
                ],
                instructions: strings(&[
                    "Dice the onion and mince the garlic.",
                    "Heat olive oil in a pan over medium heat.",
                    "Add onion and cook until translucent, about 5 minutes.",
                    "Add garlic and cook for 30 seconds until fragrant.",
                    "Add diced tomatoes and cook until soft, about 10 minutes.",
                    "Season with salt, pepper, and basil.",
                    "Simmer for 10-15 minutes until thickened.",
                ]),
                prep_time: 10,
                cook_time: 25,
                servings: 4,
                difficulty: Difficulty::Easy,
                cuisine: None,
                tags: vec![],
            },
            Recipe {
                name: "Stuffed Bell Peppers".to_string(),
                description: "Delicious bell peppers stuffed with tomato, onion, and garlic \
                              mixture."
                    .to_string(),
                ingredients: vec![
                    Ingredient::new("Bell pepper", "1", "medium"),
                    Ingredient::new("Tomato", "2", "medium"),
                    Ingredient::new("Onion", "1/2", "large"),
                    Ingredient::new("Garlic", "1", "clove"),
                    Ingredient::new("Olive oil", "1", "tbsp"),
                    Ingredient::new("Rice", "1/2", "cup"),
                    Ingredient::new("Salt", "1/2", "tsp"),
                    Ingredient::new("Black pepper", "1/4", "tsp"),
                ],
                instructions: strings(&[
                    "Preheat oven to 375°F (190°C).",
                    "Cook rice according to package directions.",
                    "Cut the top off the bell pepper and remove seeds.",
                    "Dice tomato and onion, mince garlic.",
                    "Sauté onion and garlic in olive oil until soft.",
                    "Add diced tomato and cook for 5 minutes.",
                    "Mix with cooked rice, salt, and pepper.",
                    "Stuff the mixture into the bell pepper.",
                    "Bake for 25-30 minutes until pepper is tender.",
                ]),
                prep_time: 15,
                cook_time: 30,
                servings: 1,
                difficulty: Difficulty::Medium,
                cuisine: None,
                tags: vec![],
            },
        ],
        confidence: 0.85,
        timestamp: Utc::now(),
    }
}
