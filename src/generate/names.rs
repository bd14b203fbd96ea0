//! Fixed name lists for synthetic identities.

use crate::ports::random::RandomSource;

/// Given-name pool, drawn from uniformly.
pub const FIRST_NAMES: [&str; 26] = [
    "Jacob",
    "Emma",
    "Noah",
    "Olivia",
    "Liam",
    "Ava",
    "Mason",
    "Sophia",
    "Ethan",
    "Mia",
    "Lucas",
    "Amelia",
    "Logan",
    "Isabella",
    "James",
    "Harper",
    "Benjamin",
    "Evelyn",
    "Alexander",
    "Ella",
    "Daniel",
    "Aria",
    "Henry",
    "Scarlett",
    "Michael",
    "Grace",
];

/// Surname pool, drawn from uniformly.
pub const LAST_NAMES: [&str; 26] = [
    "Adams",
    "Baker",
    "Carter",
    "Davis",
    "Edwards",
    "Foster",
    "Garcia",
    "Hughes",
    "Iverson",
    "Johnson",
    "Kim",
    "Lopez",
    "Mitchell",
    "Nguyen",
    "Owens",
    "Patel",
    "Quinn",
    "Roberts",
    "Sanders",
    "Turner",
    "Usman",
    "Vasquez",
    "Walker",
    "Xu",
    "Young",
    "Zimmerman",
];

/// Draws a given name from the pool.
pub fn pick_given(rng: &dyn RandomSource) -> &'static str {
    FIRST_NAMES[rng.below(FIRST_NAMES.len())]
}

/// Draws a surname from the pool.
pub fn pick_surname(rng: &dyn RandomSource) -> &'static str {
    LAST_NAMES[rng.below(LAST_NAMES.len())]
}
