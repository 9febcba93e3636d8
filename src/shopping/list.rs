use rand::Rng;
use serde::Serialize;

use super::catalog::{categorize, estimate_price, extract_quantity, Category};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShoppingItem {
    pub name: String,
    pub quantity: String,
    pub category: Category,
    pub checked: bool,
    pub estimated_price: u32,
}

impl ShoppingItem {
    pub fn from_ingredient<R: Rng + ?Sized>(ingredient: &str, rng: &mut R) -> Self {
        Self {
            name: ingredient.to_string(),
            quantity: extract_quantity(ingredient),
            category: categorize(ingredient),
            checked: false,
            estimated_price: estimate_price(ingredient, rng),
        }
    }
}

pub fn build_shopping_items_with<S, R>(missing: &[S], rng: &mut R) -> Vec<ShoppingItem>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    missing
        .iter()
        .map(|m| ShoppingItem::from_ingredient(m.as_ref(), rng))
        .collect()
}

pub fn build_shopping_items<S: AsRef<str>>(missing: &[S]) -> Vec<ShoppingItem> {
    build_shopping_items_with(missing, &mut rand::thread_rng())
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub items: Vec<&'a ShoppingItem>,
}

#[derive(Debug, Clone)]
pub struct ShoppingList {
    pub recipe_name: String,
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new(recipe_name: impl Into<String>, items: Vec<ShoppingItem>) -> Self {
        Self {
            recipe_name: recipe_name.into(),
            items,
        }
    }

    /// Groups in order of first appearance; items keep their list order.
    pub fn grouped(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|g| g.category == item.category) {
                Some(group) => group.items.push(item),
                None => groups.push(CategoryGroup {
                    category: item.category,
                    items: vec![item],
                }),
            }
        }
        groups
    }

    pub fn total_estimated_cost(&self) -> u32 {
        self.items.iter().map(|i| i.estimated_price).sum()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Rounded percentage of checked items; 0 for an empty list.
    pub fn completion_percentage(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        (self.checked_count() as f64 / self.items.len() as f64 * 100.0).round() as u32
    }

    /// Flip `checked` on one item and return the new state.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.checked = !item.checked;
        Some(item.checked)
    }
}
