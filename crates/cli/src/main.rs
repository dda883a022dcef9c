//! Demonstration walkthrough of the inventory store.

use stockroom_inventory::{
    AuditLog, DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_STORE_PATH, Inventory, load, save, write_report,
};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let mut inventory = Inventory::new();
    let mut log = AuditLog::new();

    inventory.add("apple", 10, &mut log)?;
    inventory.add("banana", 2, &mut log)?;

    // Invalid input, rejected without mutating the store.
    if inventory.add("   ", 10, &mut log).is_err() {
        println!("Rejected invalid add; stock unchanged");
    }

    inventory.remove("apple", 3)?;
    if let Err(err) = inventory.remove("orange", 1) {
        println!("Could not remove orange: {err}");
    }

    println!("Apple stock: {}", inventory.quantity_of("apple"));
    println!("Low items: {:?}", inventory.low_stock(DEFAULT_LOW_STOCK_THRESHOLD));

    save(&inventory, DEFAULT_STORE_PATH)?;
    let inventory = load(DEFAULT_STORE_PATH)?;

    let stdout = std::io::stdout();
    write_report(&inventory, &mut stdout.lock())?;

    tracing::info!("program execution completed");
    Ok(())
}
