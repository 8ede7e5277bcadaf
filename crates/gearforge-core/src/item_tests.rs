use crate::item::{weapon_pair_is_valid, EquipmentSlot, GearSlot, Item, OffhandKind, WeaponStyle};

fn weapon(sub_type: &str) -> Item {
    let mut item = Item::new(format!("Test {sub_type}"), EquipmentSlot::Weapon);
    item.sub_type = Some(sub_type.to_owned());
    item
}

fn offhand(sub_type: &str) -> Item {
    let mut item = Item::new(format!("Test {sub_type}"), EquipmentSlot::Offhand);
    item.sub_type = Some(sub_type.to_owned());
    item
}

#[test]
fn test_weapon_style_classification() {
    assert_eq!(WeaponStyle::classify("Great Axe"), WeaponStyle::TwoHanded);
    assert_eq!(WeaponStyle::classify("Quarterstaff"), WeaponStyle::TwoHanded);
    assert_eq!(WeaponStyle::classify("Long Bow"), WeaponStyle::Ranged);
    assert_eq!(WeaponStyle::classify("Handwraps"), WeaponStyle::Unarmed);
    assert_eq!(WeaponStyle::classify("Long Sword"), WeaponStyle::OneHanded);
}

#[test]
fn test_offhand_classification() {
    assert_eq!(OffhandKind::classify("Tower Shield"), OffhandKind::Shield);
    assert_eq!(OffhandKind::classify("Orb"), OffhandKind::Orb);
    assert_eq!(OffhandKind::classify("Rune Arm"), OffhandKind::RuneArm);
    assert_eq!(OffhandKind::classify("Dagger"), OffhandKind::Weapon);
}

#[test]
fn test_two_handed_forbids_offhand() {
    let maul = weapon("Maul");
    assert!(!weapon_pair_is_valid(Some(&maul), Some(&offhand("Orb"))));
    assert!(weapon_pair_is_valid(Some(&maul), None));
}

#[test]
fn test_unarmed_forbids_offhand() {
    let wraps = weapon("Handwraps");
    assert!(!weapon_pair_is_valid(
        Some(&wraps),
        Some(&offhand("Buckler"))
    ));
    assert!(weapon_pair_is_valid(Some(&wraps), None));
}

#[test]
fn test_one_handed_permits_any_offhand() {
    let sword = weapon("Long Sword");
    for sub in ["Tower Shield", "Orb", "Rune Arm", "Short Sword"] {
        assert!(weapon_pair_is_valid(Some(&sword), Some(&offhand(sub))));
    }
}

#[test]
fn test_ranged_permits_only_rune_arm() {
    let bow = weapon("Long Bow");
    assert!(weapon_pair_is_valid(Some(&bow), Some(&offhand("Rune Arm"))));
    assert!(weapon_pair_is_valid(Some(&bow), None));
    assert!(!weapon_pair_is_valid(Some(&bow), Some(&offhand("Orb"))));
    assert!(!weapon_pair_is_valid(
        Some(&bow),
        Some(&offhand("Short Sword"))
    ));
}

#[test]
fn test_empty_weapon_hand_permits_offhand() {
    assert!(weapon_pair_is_valid(None, Some(&offhand("Tower Shield"))));
    assert!(weapon_pair_is_valid(None, None));
}

#[test]
fn test_ring_positions_share_equipment_slot() {
    assert_eq!(GearSlot::Ring1.equipment_slot(), EquipmentSlot::Ring);
    assert_eq!(GearSlot::Ring2.equipment_slot(), EquipmentSlot::Ring);
}

#[test]
fn test_slot_indices_are_canonical() {
    for (i, slot) in GearSlot::ALL.iter().enumerate() {
        assert_eq!(slot.index(), i);
    }
}
