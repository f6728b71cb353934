#![allow(unused_crate_dependencies, reason = "This is a demo, not the main crate.")]

use std::io::{self, Write as _};

use pooled_skiplist::{Descending, Rand32, SkipList};


fn main() -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    // Integers in ascending order, with the default of 20 layers.
    let mut list: SkipList<i32> = SkipList::new();
    list.insert(-5);
    list.insert(42);
    list.print(&mut stdout)?;

    if list.find(&42) {
        writeln!(stdout, "Found the answer to everything!")?;
    }

    list.remove(&42);
    if !list.find(&42) {
        writeln!(stdout, "The answer is not here anymore.")?;
    }

    // Strings in descending order, with at most 8 layers.
    let words: SkipList<String, Descending, Rand32, 8> = ["fefo", "phef", "outer", "wilds"]
        .into_iter()
        .map(String::from)
        .collect();

    for word in &words {
        writeln!(stdout, "{word}")?;
    }

    Ok(())
}
