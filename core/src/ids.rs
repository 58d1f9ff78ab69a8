//! Deterministic identifier derivation.
//!
//! Every id is a v5 UUID over a fixed namespace and a stable key, so
//! re-running with the same seed reproduces identical ids and foreign
//! keys stay stable even if generation order changes.

use uuid::Uuid;

/// Fixed namespace for all generated ids. Changing this value breaks
/// id stability across releases.
const ID_NAMESPACE: Uuid = Uuid::from_u128(0x7b1e_9d4a_3c2f_48e0_a5d6_b8c1_f0e2_d4a7);

fn derive(key: &str) -> String {
    Uuid::new_v5(&ID_NAMESPACE, key.as_bytes()).to_string()
}

pub fn user_id(index: usize, persona: &str) -> String {
    derive(&format!("user/{index}/{persona}"))
}

pub fn account_id(index: usize, persona: &str, role: &str) -> String {
    derive(&format!("account/{index}/{persona}/{role}"))
}

/// `kind` is a short batch tag ("inc", "sub", "exp", "fill", "int");
/// `seq` numbers transactions within one user+kind.
pub fn transaction_id(user_id: &str, kind: &str, seq: u32) -> String {
    derive(&format!("txn/{user_id}/{kind}/{seq}"))
}

/// Ties together repeated charges of one subscription product or one
/// payroll series.
pub fn recurring_group_id(user_id: &str, label: &str) -> String {
    derive(&format!("recurring/{user_id}/{label}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_across_calls() {
        assert_eq!(user_id(3, "Gig Worker"), user_id(3, "Gig Worker"));
        assert_eq!(
            transaction_id("u", "sub", 7),
            transaction_id("u", "sub", 7)
        );
    }

    #[test]
    fn ids_differ_by_role_and_index() {
        assert_ne!(user_id(3, "Gig Worker"), user_id(4, "Gig Worker"));
        assert_ne!(
            account_id(3, "Gig Worker", "CHK"),
            account_id(3, "Gig Worker", "CRD")
        );
    }
}
