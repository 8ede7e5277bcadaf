//! Affixes and the stacking rules that combine them.
//!
//! An affix is a named modifier granted by an item, a slotted augment or an
//! active set bonus. Affixes carry a bonus-type tag (e.g. `Enhancement`,
//! `Insight`) that governs stacking: same-name same-type affixes do not
//! stack (the highest value wins), while same-name affixes of distinct
//! bonus types stack additively.

use std::collections::BTreeMap;

/// The value carried by an affix: a numeric magnitude or a presence flag.
///
/// Flags model toggled abilities (e.g. `Deathblock`). When a flag meets a
/// number under the same property name, the flag is coerced to 1.0/0.0 so
/// that combination stays well-defined.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AffixValue {
    /// A numeric magnitude, e.g. `+8`.
    Number(f64),
    /// A presence flag; `true` grants the effect.
    Flag(bool),
}

impl AffixValue {
    /// Returns the value as a number, coercing flags to 1.0/0.0.
    #[inline]
    pub fn as_number(&self) -> f64 {
        match *self {
            AffixValue::Number(n) => n,
            AffixValue::Flag(true) => 1.0,
            AffixValue::Flag(false) => 0.0,
        }
    }
}

impl Default for AffixValue {
    fn default() -> Self {
        AffixValue::Number(0.0)
    }
}

/// A single named modifier with a bonus-type tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affix {
    /// The property this affix modifies, e.g. `Strength`.
    pub name: String,
    /// The stacking tag, e.g. `Enhancement` or `Insight`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus_type: String,
    /// The granted value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: AffixValue,
}

impl Affix {
    /// Creates a numeric affix.
    pub fn number(name: impl Into<String>, bonus_type: impl Into<String>, value: f64) -> Self {
        Affix {
            name: name.into(),
            bonus_type: bonus_type.into(),
            value: AffixValue::Number(value),
        }
    }

    /// Creates a flag affix.
    pub fn flag(name: impl Into<String>, bonus_type: impl Into<String>) -> Self {
        Affix {
            name: name.into(),
            bonus_type: bonus_type.into(),
            value: AffixValue::Flag(true),
        }
    }
}

/// A combined pool of affixes, reduced to one scalar total per property.
///
/// Built by [`AffixPool::combine`]: affixes are grouped by property name,
/// then by bonus type within a name. Each (name, type) group contributes
/// only its maximum value; distinct bonus types for the same name are then
/// summed. The result is deterministic and independent of input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffixPool {
    totals: BTreeMap<String, f64>,
}

impl AffixPool {
    /// Combines affixes into a pool, applying the stacking rules.
    ///
    /// Affixes with an empty property name are malformed catalog records
    /// and are skipped with a warning. An empty input yields an empty pool.
    pub fn combine<'a, I>(affixes: I) -> AffixPool
    where
        I: IntoIterator<Item = &'a Affix>,
    {
        let mut per_type: BTreeMap<(&'a str, &'a str), f64> = BTreeMap::new();
        for affix in affixes {
            if affix.name.is_empty() {
                tracing::warn!(bonus_type = %affix.bonus_type, "skipping affix with empty name");
                continue;
            }
            let value = affix.value.as_number();
            per_type
                .entry((affix.name.as_str(), affix.bonus_type.as_str()))
                .and_modify(|best| {
                    if value > *best {
                        *best = value;
                    }
                })
                .or_insert(value);
        }

        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for ((name, _bonus_type), value) in per_type {
            *totals.entry(name.to_owned()).or_insert(0.0) += value;
        }
        AffixPool { totals }
    }

    /// Returns the summed value for a property, or 0 if absent.
    pub fn property_total(&self, name: &str) -> f64 {
        self.totals.get(name).copied().unwrap_or(0.0)
    }

    /// Iterates over (property name, total) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(name, &total)| (name.as_str(), total))
    }

    /// Returns the number of distinct properties in the pool.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns true if the pool has no properties.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
