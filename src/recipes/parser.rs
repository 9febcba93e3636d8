//! Line-oriented parser for the free-text recipes returned by the generator.
//!
//! The generator follows an informal convention (`Recipe N:` delimiters, a
//! title line, `Ingredients:` / `Instructions:` headers, bullet and numbered
//! lines, optional serving and nutrition lines). Anything that does not fit is
//! dropped rather than reported.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::keywords::{
    has_serving_keyword, is_ingredients_header, is_instructions_header, is_nutrition_header,
    is_serving_header, BULLET_MARKERS,
};

lazy_static! {
    static ref RECIPE_DELIMITER: Regex = Regex::new(r"Recipe \d+:").unwrap();
    // \d is Unicode-aware, so Urdu numerals also count as step numbers
    static ref NUMBERED_STEP: Regex = Regex::new(r"^\d+\.").unwrap();
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub serving_info: Vec<String>,
    pub nutrition_info: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Ingredients,
    Instructions,
    ServingInfo,
    NutritionInfo,
}

/// Split generator output into recipe blocks. Without any delimiter the whole
/// text is one block, even when it is empty.
fn split_blocks(raw: &str) -> Vec<&str> {
    if !RECIPE_DELIMITER.is_match(raw) {
        return vec![raw];
    }
    RECIPE_DELIMITER
        .split(raw)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

fn parse_block(block: &str, include_nutrition: bool) -> ParsedRecipe {
    let mut lines = block.trim().split('\n');
    let mut recipe = ParsedRecipe {
        title: lines.next().unwrap_or_default().trim().to_string(),
        ..Default::default()
    };

    let mut section = Section::None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();

        if is_ingredients_header(&lower) {
            section = Section::Ingredients;
            continue;
        }
        if is_instructions_header(&lower) {
            section = Section::Instructions;
            continue;
        }
        // serving and nutrition headers may also be content
        if is_serving_header(&lower) {
            section = Section::ServingInfo;
        }
        if is_nutrition_header(&lower) {
            section = Section::NutritionInfo;
        }

        match section {
            Section::Ingredients => {
                if let Some(rest) = line.strip_prefix(BULLET_MARKERS) {
                    recipe.ingredients.push(rest.trim().to_string());
                }
            }
            Section::Instructions => {
                if NUMBERED_STEP.is_match(line) {
                    recipe.instructions.push(line.to_string());
                }
            }
            Section::ServingInfo => {
                if has_serving_keyword(&lower) {
                    recipe.serving_info.push(line.to_string());
                }
            }
            Section::NutritionInfo => {
                if include_nutrition {
                    recipe.nutrition_info.push(line.to_string());
                }
            }
            Section::None => {}
        }
    }
    recipe
}

/// Parse generator output (original or translated) into structured recipes.
pub fn parse(raw: &str, include_nutrition: bool) -> Vec<ParsedRecipe> {
    split_blocks(raw)
        .into_iter()
        .map(|block| parse_block(block, include_nutrition))
        .collect()
}

/// Ingredient lines of every recipe in the text, in order.
pub fn extract_ingredients(raw: &str) -> Vec<String> {
    parse(raw, false)
        .into_iter()
        .flat_map(|r| r.ingredients)
        .collect()
}
