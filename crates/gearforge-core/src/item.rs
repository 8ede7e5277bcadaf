//! Items, equipment slots and fighting-style classification.

use crate::affix::Affix;

/// The slot an item is equipped into, as declared by the catalog.
///
/// `Ring` items can go into either of the two ring positions of a setup.
/// `Augment` marks loose augment items; they are slotted into sockets via
/// the crafting catalog and never occupy a gear position themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentSlot {
    Armor,
    Belt,
    Boots,
    Bracers,
    Cloak,
    Gloves,
    Goggles,
    Helm,
    Necklace,
    Ring,
    Trinket,
    Weapon,
    Offhand,
    Augment,
}

/// One position in a gear setup.
///
/// Mirrors [`EquipmentSlot`] except that the interchangeable ring slot is
/// split into two independent positions and `Augment` is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GearSlot {
    Armor,
    Belt,
    Boots,
    Bracers,
    Cloak,
    Gloves,
    Goggles,
    Helm,
    Necklace,
    Ring1,
    Ring2,
    Trinket,
    Weapon,
    Offhand,
}

impl GearSlot {
    /// All gear positions, in canonical order.
    pub const ALL: [GearSlot; 14] = [
        GearSlot::Armor,
        GearSlot::Belt,
        GearSlot::Boots,
        GearSlot::Bracers,
        GearSlot::Cloak,
        GearSlot::Gloves,
        GearSlot::Goggles,
        GearSlot::Helm,
        GearSlot::Necklace,
        GearSlot::Ring1,
        GearSlot::Ring2,
        GearSlot::Trinket,
        GearSlot::Weapon,
        GearSlot::Offhand,
    ];

    /// Number of gear positions.
    pub const COUNT: usize = Self::ALL.len();

    /// Index of this position within [`GearSlot::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The catalog slot that items equipped here must declare.
    pub fn equipment_slot(self) -> EquipmentSlot {
        match self {
            GearSlot::Armor => EquipmentSlot::Armor,
            GearSlot::Belt => EquipmentSlot::Belt,
            GearSlot::Boots => EquipmentSlot::Boots,
            GearSlot::Bracers => EquipmentSlot::Bracers,
            GearSlot::Cloak => EquipmentSlot::Cloak,
            GearSlot::Gloves => EquipmentSlot::Gloves,
            GearSlot::Goggles => EquipmentSlot::Goggles,
            GearSlot::Helm => EquipmentSlot::Helm,
            GearSlot::Necklace => EquipmentSlot::Necklace,
            GearSlot::Ring1 | GearSlot::Ring2 => EquipmentSlot::Ring,
            GearSlot::Trinket => EquipmentSlot::Trinket,
            GearSlot::Weapon => EquipmentSlot::Weapon,
            GearSlot::Offhand => EquipmentSlot::Offhand,
        }
    }
}

/// Fighting-style classification of a weapon, derived from its sub-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponStyle {
    OneHanded,
    TwoHanded,
    Ranged,
    Unarmed,
}

impl WeaponStyle {
    /// Classifies a weapon sub-type string.
    ///
    /// Unknown categories fall back to one-handed, the least restrictive
    /// melee classification.
    pub fn classify(sub_type: &str) -> WeaponStyle {
        match sub_type {
            "Great Axe" | "Great Club" | "Great Sword" | "Maul" | "Quarterstaff"
            | "Falchion" => WeaponStyle::TwoHanded,
            "Long Bow" | "Short Bow" | "Great Crossbow" | "Heavy Crossbow"
            | "Light Crossbow" | "Repeating Heavy Crossbow" | "Repeating Light Crossbow"
            | "Throwing Axe" | "Throwing Dagger" | "Throwing Hammer" | "Dart"
            | "Shuriken" => WeaponStyle::Ranged,
            "Handwraps" => WeaponStyle::Unarmed,
            _ => WeaponStyle::OneHanded,
        }
    }
}

/// Classification of an item equipped in the offhand position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffhandKind {
    Shield,
    Orb,
    RuneArm,
    /// A one-handed weapon wielded in the offhand.
    Weapon,
}

impl OffhandKind {
    /// Classifies an offhand sub-type string.
    pub fn classify(sub_type: &str) -> OffhandKind {
        match sub_type {
            "Buckler" | "Small Shield" | "Large Shield" | "Tower Shield" => OffhandKind::Shield,
            "Orb" => OffhandKind::Orb,
            "Rune Arm" => OffhandKind::RuneArm,
            _ => OffhandKind::Weapon,
        }
    }
}

/// An equippable item from the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique name within the catalog.
    pub name: String,
    /// Minimum character level required to equip.
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_level: u32,
    /// The slot this item equips into.
    pub slot: EquipmentSlot,
    /// Optional sub-type, e.g. the weapon or shield category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sub_type: Option<String>,
    /// Modifiers granted by the item itself.
    #[cfg_attr(feature = "serde", serde(default))]
    pub affixes: Vec<Affix>,
    /// Quests or adventure packs this item drops from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quests: Vec<String>,
    /// Augment socket types on this item, e.g. `["Red", "Colorless"]`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub crafting_slots: Vec<String>,
    /// Names of the item sets this item belongs to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sets: Vec<String>,
    /// Artifact flag, carried as catalog data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub artifact: bool,
}

impl Item {
    /// Creates an item with a name and slot; remaining fields default.
    pub fn new(name: impl Into<String>, slot: EquipmentSlot) -> Self {
        Item {
            name: name.into(),
            min_level: 0,
            slot,
            sub_type: None,
            affixes: Vec::new(),
            quests: Vec::new(),
            crafting_slots: Vec::new(),
            sets: Vec::new(),
            artifact: false,
        }
    }

    /// The fighting style of this item when wielded as a main-hand weapon.
    ///
    /// Items with no sub-type are treated as one-handed.
    pub fn weapon_style(&self) -> WeaponStyle {
        self.sub_type
            .as_deref()
            .map(WeaponStyle::classify)
            .unwrap_or(WeaponStyle::OneHanded)
    }

    /// The offhand classification of this item.
    pub fn offhand_kind(&self) -> OffhandKind {
        self.sub_type
            .as_deref()
            .map(OffhandKind::classify)
            .unwrap_or(OffhandKind::Weapon)
    }
}

/// Whether a weapon/offhand pairing respects the fighting-style rules.
///
/// - Two-handed and unarmed weapons forbid any offhand.
/// - One-handed weapons permit a shield, orb, rune arm or second weapon.
/// - Ranged weapons permit only a rune arm (or an empty offhand).
/// - An empty weapon hand permits any offhand.
pub fn weapon_pair_is_valid(weapon: Option<&Item>, offhand: Option<&Item>) -> bool {
    let Some(offhand) = offhand else {
        return true;
    };
    let Some(weapon) = weapon else {
        return true;
    };
    match weapon.weapon_style() {
        WeaponStyle::TwoHanded | WeaponStyle::Unarmed => false,
        WeaponStyle::OneHanded => true,
        WeaponStyle::Ranged => offhand.offhand_kind() == OffhandKind::RuneArm,
    }
}
