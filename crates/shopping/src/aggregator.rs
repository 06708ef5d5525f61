use std::collections::HashMap;

use fraction::Fraction;
use larder_shared::{pantry::PantryItem, recipe::Ingredient};
use serde::{Deserialize, Serialize};

use crate::{
    categorization::{Category, categorize},
    normalize::normalize_name,
    quantity::{display_quantity, from_amount, round_to_hundredths, to_f64, zero},
    substitution::substitutions,
    unit::{Unit, UnitFamily},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    pub key: String,
    pub name: String,
    /// Amount in `unit`, rounded to hundredths.
    pub quantity: Option<f64>,
    /// Amount rounded to a measurable fraction, e.g. "1 1/2".
    #[serde(default)]
    pub display_quantity: Option<String>,
    pub unit: Option<String>,
    pub category: Option<Category>,
    pub notes: Option<String>,
    #[serde(default)]
    pub substitutions: Vec<String>,
    pub recipe_ids: Vec<String>,
    pub checked: bool,
}

enum DisplayUnit {
    Same(Unit),
    Mixed,
}

struct Group {
    name: String,
    family: UnitFamily,
    /// Sum in canonical units, `None` while no contribution had an amount.
    quantity: Option<Fraction>,
    display: DisplayUnit,
    recipe_ids: Vec<String>,
    notes: Vec<String>,
}

impl Group {
    fn unit_label(&self) -> Option<String> {
        match &self.display {
            DisplayUnit::Same(unit) => unit.label.to_owned(),
            DisplayUnit::Mixed => Some(self.family.canonical_unit().to_owned()),
        }
    }

    /// Canonical amount expressed in the unit the item is reported in.
    fn in_display_unit(&self, canonical: Fraction) -> Fraction {
        match &self.display {
            DisplayUnit::Same(unit) => unit.from_canonical(canonical),
            DisplayUnit::Mixed => canonical,
        }
    }
}

/// Merges ingredients of several recipes into one deduplicated list.
///
/// Ingredients group by normalized name and unit family; incompatible families stay
/// separate line items. Amounts add up as exact fractions.
#[derive(Default)]
pub struct Aggregator {
    groups: HashMap<(String, UnitFamily), Group>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one ingredient, its amount multiplied by `scale`.
    pub fn add(
        &mut self,
        recipe_id: Option<&str>,
        ingredient: &Ingredient,
        scale: impl Into<Fraction>,
    ) {
        let name = normalize_name(&ingredient.name);
        if name.is_empty() {
            return;
        }

        let scale = scale.into();
        let unit = Unit::parse(ingredient.unit.as_deref());
        let quantity = ingredient
            .amount
            .and_then(from_amount)
            .map(|amount| unit.to_canonical(amount * scale));

        let group = self
            .groups
            .entry((name.to_owned(), unit.family.clone()))
            .or_insert_with(|| Group {
                name,
                family: unit.family.clone(),
                quantity: None,
                display: DisplayUnit::Same(unit.clone()),
                recipe_ids: vec![],
                notes: vec![],
            });

        group.quantity = match (group.quantity, quantity) {
            (Some(total), Some(quantity)) => Some(total + quantity),
            (total, quantity) => total.or(quantity),
        };

        if matches!(&group.display, DisplayUnit::Same(current) if current.label != unit.label) {
            group.display = DisplayUnit::Mixed;
        }

        if let Some(recipe_id) = recipe_id {
            if !group.recipe_ids.iter().any(|id| id == recipe_id) {
                group.recipe_ids.push(recipe_id.to_owned());
            }
        }

        let note = ingredient.notes.as_deref().map(str::trim).unwrap_or_default();
        if !note.is_empty() && !group.notes.iter().any(|n| n == note) {
            group.notes.push(note.to_owned());
        }
    }

    pub fn add_recipe(
        &mut self,
        recipe_id: &str,
        ingredients: &[Ingredient],
        scale: impl Into<Fraction>,
    ) {
        let scale = scale.into();
        for ingredient in ingredients {
            self.add(Some(recipe_id), ingredient, scale);
        }
    }

    /// Take what the pantry already holds off the list.
    ///
    /// Quantities only offset within one unit family. A pantry entry without quantity
    /// covers the ingredient entirely, and items without quantity go away as soon as the
    /// pantry has the ingredient at all. Expired entries are ignored. An item is dropped
    /// once what is left rounds to nothing in the unit it is reported in.
    pub fn subtract_pantry(&mut self, pantry: &[PantryItem], now: u64) {
        for stock in pantry {
            if stock.is_expired(now) {
                continue;
            }

            let name = normalize_name(&stock.name);
            let unit = Unit::parse(stock.unit.as_deref());

            let owned = match stock.quantity {
                None => {
                    self.groups.retain(|(group_name, _), _| *group_name != name);
                    continue;
                }
                Some(quantity) => match from_amount(quantity) {
                    Some(quantity) if quantity > zero() => unit.to_canonical(quantity),
                    _ => continue,
                },
            };

            self.groups.retain(|(group_name, family), group| {
                if *group_name != name {
                    return true;
                }

                let Some(needed) = group.quantity else {
                    return false;
                };

                if *family != unit.family {
                    return true;
                }

                let remaining = needed - owned;
                group.quantity = Some(remaining);

                round_to_hundredths(group.in_display_unit(remaining)) > zero()
            });
        }
    }

    /// Build the final, deterministically ordered list.
    pub fn finish(self, group_by_category: bool) -> Vec<ShoppingItem> {
        let mut items = self
            .groups
            .into_values()
            .map(|group| {
                let quantity = group
                    .quantity
                    .map(|q| to_f64(round_to_hundredths(group.in_display_unit(q))));

                let item = ShoppingItem {
                    key: format!("{}|{}", group.name, group.family),
                    category: group_by_category.then(|| categorize(&group.name)),
                    quantity,
                    display_quantity: quantity.and_then(display_quantity),
                    unit: group.unit_label(),
                    notes: (!group.notes.is_empty()).then(|| group.notes.join("; ")),
                    substitutions: substitutions(&group.name),
                    recipe_ids: group.recipe_ids,
                    name: group.name,
                    checked: false,
                };

                (group.family, item)
            })
            .collect::<Vec<_>>();

        items.sort_by(|(a_family, a), (b_family, b)| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a_family.cmp(b_family))
        });

        items.into_iter().map(|(_, item)| item).collect()
    }
}
