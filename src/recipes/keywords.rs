#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Urdu,
}

/// Header and content keywords for one language. All entries are lower-case;
/// lines are lower-cased before matching.
#[derive(Debug)]
pub struct SectionKeywords {
    pub language: Language,
    pub ingredients_header: &'static [&'static str],
    pub instructions_header: &'static [&'static str],
    pub serving_header: &'static [&'static str],
    pub serving_content: &'static [&'static str],
    pub nutrition_header: &'static [&'static str],
}

pub static LANGUAGES: &[SectionKeywords] = &[
    SectionKeywords {
        language: Language::English,
        ingredients_header: &["ingredients:"],
        instructions_header: &["instructions:"],
        serving_header: &["estimated serving", "serves"],
        serving_content: &["serving", "serves"],
        nutrition_header: &["nutritional", "calories", "protein:", "carbs:"],
    },
    SectionKeywords {
        language: Language::Urdu,
        ingredients_header: &["اجزاء:", "اجزا:"],
        instructions_header: &["ہدایات:", "طریقہ کار:"],
        serving_header: &["افراد", "سرونگ"],
        serving_content: &["افراد", "سرونگ"],
        nutrition_header: &["غذائی", "غذائیت", "کیلوریز"],
    },
];

pub const BULLET_MARKERS: &[char] = &['*', '•'];

fn any_table(line: &str, pick: impl Fn(&SectionKeywords) -> &'static [&'static str]) -> bool {
    LANGUAGES
        .iter()
        .flat_map(|lang| pick(lang).iter())
        .any(|kw| line.contains(kw))
}

pub fn is_ingredients_header(lower: &str) -> bool {
    any_table(lower, |k| k.ingredients_header)
}

pub fn is_instructions_header(lower: &str) -> bool {
    any_table(lower, |k| k.instructions_header)
}

pub fn is_serving_header(lower: &str) -> bool {
    any_table(lower, |k| k.serving_header)
}

pub fn has_serving_keyword(lower: &str) -> bool {
    any_table(lower, |k| k.serving_content)
}

pub fn is_nutrition_header(lower: &str) -> bool {
    any_table(lower, |k| k.nutrition_header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_fills_every_slot() {
        for lang in LANGUAGES {
            assert!(!lang.ingredients_header.is_empty(), "{:?}", lang.language);
            assert!(!lang.instructions_header.is_empty(), "{:?}", lang.language);
            assert!(!lang.serving_header.is_empty(), "{:?}", lang.language);
            assert!(!lang.serving_content.is_empty(), "{:?}", lang.language);
            assert!(!lang.nutrition_header.is_empty(), "{:?}", lang.language);
        }
    }

    #[test]
    fn urdu_headers_are_recognised() {
        assert!(is_ingredients_header("اجزاء:"));
        assert!(is_instructions_header("ہدایات:"));
        assert!(is_serving_header("4 افراد کے لیے"));
        assert!(is_nutrition_header("غذائی معلومات"));
    }

    #[test]
    fn english_serving_and_nutrition() {
        assert!(is_serving_header("estimated servings: 4"));
        assert!(is_serving_header("serves 2"));
        assert!(has_serving_keyword("per serving: 350 kcal"));
        assert!(is_nutrition_header("nutritional information (per serving):"));
        assert!(!is_nutrition_header("protein rich"));
    }
}
