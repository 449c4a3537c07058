use crate::foundation::core::{Entry, EntryList};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Christopher", "Karen", "Charles", "Lisa", "Daniel", "Nancy", "Matthew", "Betty", "Anthony",
    "Helen", "Mark", "Sandra", "Donald", "Donna",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young",
];

fn mix64(mut z: u64) -> u64 {
    // SplitMix64 finalizer.
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic entrant list for demos and load testing.
///
/// Tickets run from `start_ticket` upwards and are zero-padded to the width of the largest
/// one, so `sample_entries(12, 1, _)` yields `"01"` through `"12"`. Names depend only on
/// `seed` and the position in the list.
pub fn sample_entries(count: usize, start_ticket: u64, seed: u64) -> EntryList {
    let last_ticket = start_ticket.saturating_add((count as u64).saturating_sub(1));
    let width = last_ticket.to_string().len();

    (0..count as u64)
        .map(|i| {
            let h = mix64(seed ^ mix64(i.wrapping_add(0x9E37_79B9_7F4A_7C15)));
            let first = FIRST_NAMES[(h % FIRST_NAMES.len() as u64) as usize];
            let last = LAST_NAMES[((h >> 32) % LAST_NAMES.len() as u64) as usize];
            let ticket = start_ticket.saturating_add(i);
            Entry::new(first, last, format!("{ticket:0width$}"))
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/sample.rs"]
mod tests;
