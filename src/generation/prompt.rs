pub const CUISINES: &[&str] = &[
    "Desi",
    "Continental",
    "Asian",
    "Mexican",
    "Italian",
    "Middle Eastern",
];

#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub cuisine: Option<String>,
    pub fusion_cuisine: Option<String>,
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Preferences {
    /// Fusion with the preferred cuisine itself is meaningless and is dropped.
    pub fn effective_fusion(&self) -> Option<&str> {
        let fusion = non_blank(&self.fusion_cuisine)?;
        match non_blank(&self.cuisine) {
            Some(c) if c.eq_ignore_ascii_case(fusion) => None,
            _ => Some(fusion),
        }
    }
}

/// Cuisines that can still be fused with `preferred`.
pub fn fusion_options(preferred: &str) -> Vec<&'static str> {
    CUISINES
        .iter()
        .copied()
        .filter(|c| !c.eq_ignore_ascii_case(preferred.trim()))
        .collect()
}

/// Prompt sent to the generator webhook.
pub fn build_prompt<S: AsRef<str>>(pantry: &[S], prefs: &Preferences) -> String {
    let ingredients: Vec<&str> = pantry
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect();
    format!(
        "Ingredients: {}. Preference of cuisine: {}. Fuse with: {}.",
        ingredients.join(", "),
        non_blank(&prefs.cuisine).unwrap_or("any"),
        prefs.effective_fusion().unwrap_or("none"),
    )
}
