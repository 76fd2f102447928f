//! Sample data for `STARDEX_DEMO` mode.

use stardex_core::{Item, SearchResult};
use stardex_storage::{MemoryItemStore, MemorySearchIndex};

fn sample_items() -> Vec<Item> {
    vec![
        Item::new("beamaxe")
            .short_description("Matter Manipulator")
            .description("A tool for collecting and placing blocks.")
            .inventory_icon("/items/tools/beamaxe/icon.png")
            .item_type("beamminingtool")
            .rarity("Legendary"),
        Item::new("brokenprotectorateblade")
            .short_description("Broken Protectorate Blade")
            .description("A broken broadsword, once wielded by a Protector.")
            .item_type("broadsword")
            .rarity("Rare"),
        Item::new("copperbar")
            .short_description("Copper Bar")
            .description("A bar of copper. Useful for crafting.")
            .inventory_icon("/items/generic/crafting/copperbar.png")
            .item_type("craftingmaterial")
            .rarity("Common"),
        Item::new("firesword")
            .short_description("Fire Sword")
            .description("This blade burns with an eternal flame.")
            .item_type("broadsword")
            .rarity("Uncommon"),
        Item::new("flashlight")
            .short_description("Flashlight")
            .description("Lights up dark places.")
            .item_type("flashlight")
            .rarity("Common"),
        Item::new("icesword")
            .short_description("Ice Sword")
            .description("Cold to the touch.")
            .item_type("broadsword")
            .rarity("Uncommon"),
        Item::new("torch")
            .short_description("Torch")
            .description("A simple torch.")
            .inventory_icon("/objects/generic/torch/torchicon.png")
            .item_type("object")
            .rarity("Common"),
        Item::new("woodenbow")
            .short_description("Wooden Bow")
            .description("A basic hunting bow.")
            .item_type("bow")
            .rarity("Common"),
    ]
}

pub(crate) fn item_store() -> MemoryItemStore {
    MemoryItemStore::new(sample_items())
}

pub(crate) fn search_index() -> MemorySearchIndex {
    MemorySearchIndex::new(sample_items().into_iter().map(SearchResult::from))
}
