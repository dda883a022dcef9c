//! Read-only console report of the current store.

use std::io::{self, Write};

use crate::store::Inventory;

/// Write an `item -> quantity` line per entry to `out`, in name order.
/// Reads the store without mutating it.
pub fn write_report(inventory: &Inventory, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Items Report")?;
    for (item, qty) in inventory.iter() {
        writeln!(out, "{item} -> {qty}")?;
    }
    Ok(())
}
