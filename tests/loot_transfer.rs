use underworld::combat::loot::{merge_inventory, transfer_assets};
use underworld::database::models::{Car, InventoryItem, Player, PlayerId};

fn quantities(player: &Player) -> Vec<(String, i64)> {
    player
        .inventory
        .iter()
        .map(|i| (i.name.clone(), i.quantity))
        .collect()
}

#[test]
fn same_named_items_stack_and_new_ones_append() {
    let mut attacker = Player::new(PlayerId(1), "ace");
    attacker.inventory = vec![InventoryItem::weapon("pistol", 2, 80.0)];
    let mut target = Player::new(PlayerId(2), "bruno");
    target.inventory = vec![
        InventoryItem::weapon("pistol", 3, 60.0),
        InventoryItem::weapon("knife", 1, 20.0),
    ];

    transfer_assets(&mut attacker, &mut target);

    assert_eq!(
        quantities(&attacker),
        vec![("pistol".to_string(), 5), ("knife".to_string(), 1)]
    );
    // The attacker's own stack keeps its attributes.
    assert_eq!(attacker.inventory[0].attributes.accuracy, Some(80.0));
    assert!(target.inventory.is_empty());
}

#[test]
fn money_and_cars_move_in_order() {
    let mut attacker = Player::new(PlayerId(1), "ace");
    attacker.money = 150;
    attacker.cars = vec![Car::new("Hatchback", 3_000)];
    let mut target = Player::new(PlayerId(2), "bruno");
    target.money = 900;
    target.cars = vec![Car::new("Limousine", 80_000), Car::new("Roadster", 45_000)];

    let loot = transfer_assets(&mut attacker, &mut target);

    assert_eq!(attacker.money, 1_050);
    assert_eq!(target.money, 0);
    let names: Vec<&str> = attacker.cars.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Hatchback", "Limousine", "Roadster"]);
    assert!(target.cars.is_empty());

    assert_eq!(loot.money, 900);
    assert_eq!(loot.cars.len(), 2);
}

#[test]
fn looting_an_empty_target_changes_nothing() {
    let mut attacker = Player::new(PlayerId(1), "ace");
    attacker.money = 10;
    attacker.inventory = vec![InventoryItem::new("bandage", 2)];
    let before = attacker.clone();
    let mut target = Player::new(PlayerId(2), "bruno");

    let loot = transfer_assets(&mut attacker, &mut target);

    assert_eq!(attacker, before);
    assert_eq!(loot.money, 0);
    assert!(loot.cars.is_empty() && loot.inventory.is_empty());
}

#[test]
fn merge_stacks_duplicates_within_the_incoming_list() {
    let mut held = vec![];
    merge_inventory(
        &mut held,
        vec![InventoryItem::new("ammo", 10), InventoryItem::new("ammo", 5)],
    );
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].quantity, 15);
}
