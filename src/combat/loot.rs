//! Moving a defeated target's possessions to the victor.

use crate::database::models::{Car, InventoryItem, Player};
use serde::Serialize;

/// What the target held right before being drained.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Loot {
    pub money: i64,
    pub cars: Vec<Car>,
    pub inventory: Vec<InventoryItem>,
}

/// Drains money, cars and inventory from `target` into `attacker` and returns a copy of
/// what moved. Cars keep their order after the attacker's own; same-named items stack.
pub fn transfer_assets(attacker: &mut Player, target: &mut Player) -> Loot {
    let money = std::mem::take(&mut target.money);
    let cars = std::mem::take(&mut target.cars);
    let inventory = std::mem::take(&mut target.inventory);
    let loot = Loot {
        money,
        cars: cars.clone(),
        inventory: inventory.clone(),
    };

    attacker.money = attacker.money.saturating_add(money);
    attacker.cars.extend(cars);
    merge_inventory(&mut attacker.inventory, inventory);
    loot
}

/// Adds quantities onto existing stacks by name, appends everything else unchanged.
pub fn merge_inventory(into: &mut Vec<InventoryItem>, items: Vec<InventoryItem>) {
    for item in items {
        match into.iter_mut().find(|held| held.name == item.name) {
            Some(held) => held.quantity = held.quantity.saturating_add(item.quantity),
            None => into.push(item),
        }
    }
}
