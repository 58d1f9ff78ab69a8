//! Deterministic display-name generation using curated name lists.
//!
//! The generator only needs a plausible human name per user; realism
//! beyond that is not required. All generation is deterministic
//! (same RNG stream = same names).

use crate::rng::StreamRng;

/// Deterministic name source backed by curated name lists.
pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full name (first + last) deterministically.
    pub fn full_name(rng: &mut StreamRng) -> String {
        let first = Self::first_name(rng);
        let last = Self::last_name(rng);
        format!("{} {}", first, last)
    }

    pub fn first_name(rng: &mut StreamRng) -> &'static str {
        let names = Self::first_names();
        names[rng.next_u64_below(names.len() as u64) as usize]
    }

    pub fn last_name(rng: &mut StreamRng) -> &'static str {
        let names = Self::last_names();
        names[rng.next_u64_below(names.len() as u64) as usize]
    }

    /// Derive a stable email address from a full name and user index.
    /// The index suffix keeps addresses unique across duplicate names.
    pub fn email(full_name: &str, index: usize) -> String {
        let slug = full_name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(".")
            .replace('\'', "");
        format!("{}{}@example.com", slug, index + 1)
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
            "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Steven",
            "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Timothy", "Edward",
            "Jason", "Ryan", "Jacob", "Nicholas", "Eric", "Jonathan", "Stephen", "Justin",
            "Scott", "Brandon", "Benjamin", "Samuel", "Gregory", "Alexander", "Patrick", "Jack",
            "Dennis", "Tyler", "Aaron", "Jose", "Adam", "Nathan", "Henry", "Zachary",
            "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan", "Jessica",
            "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra", "Ashley",
            "Kimberly", "Emily", "Donna", "Michelle", "Carol", "Amanda", "Dorothy", "Melissa",
            "Deborah", "Stephanie", "Rebecca", "Sharon", "Laura", "Cynthia", "Kathleen", "Amy",
            "Angela", "Anna", "Brenda", "Pamela", "Emma", "Nicole", "Helen", "Samantha",
            "Katherine", "Christine", "Rachel", "Carolyn", "Janet", "Maria", "Heather", "Olivia",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
            "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
            "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
            "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
            "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell",
            "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz", "Parker",
            "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales", "Murphy",
            "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson", "Bailey",
            "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward", "Richardson", "Watson",
            "Brooks", "Chavez", "Wood", "Bennett", "Gray", "Mendoza", "Ruiz", "Hughes",
            "Price", "Alvarez", "Castillo", "Sanders", "Patel", "Myers", "Long", "Ross",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RngBank;

    #[test]
    fn name_generation_is_deterministic() {
        let mut rng1 = RngBank::new(12345).for_user(1);
        let name1 = NameGenerator::full_name(&mut rng1);

        let mut rng2 = RngBank::new(12345).for_user(1);
        let name2 = NameGenerator::full_name(&mut rng2);

        assert_eq!(name1, name2, "same seed should produce same name");
    }

    #[test]
    fn generates_valid_full_names() {
        let mut rng = RngBank::new(12345).for_user(1);
        for _ in 0..100 {
            let name = NameGenerator::full_name(&mut rng);
            let parts: Vec<&str> = name.split_whitespace().collect();
            assert_eq!(parts.len(), 2, "name should have exactly 2 parts: {}", name);
        }
    }

    #[test]
    fn emails_are_lowercase_and_indexed() {
        let email = NameGenerator::email("Emma O'Brien", 4);
        assert_eq!(email, "emma.obrien5@example.com");
    }
}
