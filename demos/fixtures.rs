//! Generate a small batch of user fixtures and print them.
//!
//! Run with `cargo run --example fixtures`. Set `RANDORA_SEED` to replay a
//! previous run; the seed in use is printed first.

use std::collections::BTreeSet;

use randora::rand::Rng;
use randora::*;

#[derive(Debug)]
struct User {
    id: u32,
    name: String,
    email: String,
    roles: BTreeSet<&'static str>,
    manager: Option<u32>,
}

const ROLES: [&str; 5] = ["admin", "auditor", "billing", "developer", "support"];

fn main() -> Result<()> {
    println!("seed: {}", shared_seed());

    let users = with_shared(|rng| -> Result<Vec<User>> {
        let ids = unique_vec(rng, |r| r.gen_range(1_000..10_000u32), 8);
        let mut users = Vec::with_capacity(ids.len());
        for &id in &ids {
            let name = words_string(rng);
            let handle = attempt(rng, |r| word(r), |w| w.len() >= 4)?;
            users.push(User {
                id,
                email: format!("{handle}.{}@example.test", hex(rng, 2)),
                name,
                roles: unique_sorted_set(rng, |r| *pick(r, &ROLES).unwrap_or(&"support"), 2),
                manager: optional(rng, |r| *pick(r, &ids).unwrap_or(&id)),
            });
        }
        Ok(users)
    })?;

    for user in &users {
        println!("{user:?}");
    }
    Ok(())
}
