use std::io::Write;

use dheap::DHeap;

/// Builds a heap sized to `keys`, prints its structure, then drains it
/// largest first.
pub fn run<W: Write>(keys: &[i64], d: usize, out: &mut W) -> anyhow::Result<()> {
    let mut heap = DHeap::try_new(keys.len(), d)?;
    for &key in keys {
        heap.insert(key)?;
    }

    writeln!(out, "The Print of heap example:")?;
    writeln!(out, "{heap}")?;
    writeln!(out)?;

    writeln!(out, " Print of extract max heap:")?;
    let extracted: Vec<String> = heap.map(|key| key.to_string()).collect();
    writeln!(out, "{}", extracted.join(" -> "))?;
    Ok(())
}
