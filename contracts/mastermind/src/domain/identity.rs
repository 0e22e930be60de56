use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env};

use super::combination::Combination;

/// Domain separator for player identities: ASCII "MMID"
const IDENTITY_TAG: [u8; 4] = [0x4D, 0x4D, 0x49, 0x44];

/// Domain separator for solution commitments: ASCII "MMSC"
const SOLUTION_TAG: [u8; 4] = [0x4D, 0x4D, 0x53, 0x43];

/// Commitment over a secret combination and its salt
pub type SolutionCommitment = BytesN<32>;

/// Commitment identifying a player
pub type PlayerId = BytesN<32>;

/// How a player identity is derived from the authenticated caller.
///
/// Fixed once per deployment.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IdentityScheme {
    /// Identity covers the authenticated address only
    Authenticated,
    /// Identity covers address and a player-chosen salt, which must be
    /// re-supplied on every move
    Salted,
}

/// identity = keccak256("MMID" || caller [|| salt])
pub fn derive_identity(
    env: &Env,
    scheme: IdentityScheme,
    caller: &Address,
    salt: &BytesN<32>,
) -> PlayerId {
    let mut preimage = Bytes::from_array(env, &IDENTITY_TAG);
    preimage.append(&caller.to_string().to_bytes());
    if scheme == IdentityScheme::Salted {
        preimage.append(&Bytes::from_array(env, &salt.to_array()));
    }
    env.crypto().keccak256(&preimage).into()
}

/// commitment = keccak256("MMSC" || d1 d2 d3 d4 || salt)
pub fn commit_solution(
    env: &Env,
    combination: &Combination,
    salt: &BytesN<32>,
) -> SolutionCommitment {
    let mut preimage = Bytes::from_array(env, &SOLUTION_TAG);
    preimage.append(&Bytes::from_array(env, &combination.to_bytes()));
    preimage.append(&Bytes::from_array(env, &salt.to_array()));
    env.crypto().keccak256(&preimage).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_authenticated_identity_ignores_salt() {
        let env = Env::default();
        let player = Address::generate(&env);
        let a = BytesN::from_array(&env, &[1u8; 32]);
        let b = BytesN::from_array(&env, &[2u8; 32]);

        assert_eq!(
            derive_identity(&env, IdentityScheme::Authenticated, &player, &a),
            derive_identity(&env, IdentityScheme::Authenticated, &player, &b)
        );
    }

    #[test]
    fn test_salted_identity_binds_salt() {
        let env = Env::default();
        let player = Address::generate(&env);
        let a = BytesN::from_array(&env, &[1u8; 32]);
        let b = BytesN::from_array(&env, &[2u8; 32]);

        assert_ne!(
            derive_identity(&env, IdentityScheme::Salted, &player, &a),
            derive_identity(&env, IdentityScheme::Salted, &player, &b)
        );
        assert_ne!(
            derive_identity(&env, IdentityScheme::Salted, &player, &a),
            derive_identity(&env, IdentityScheme::Authenticated, &player, &a)
        );
    }

    #[test]
    fn test_identities_differ_per_player() {
        let env = Env::default();
        let salt = BytesN::from_array(&env, &[7u8; 32]);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        assert_ne!(
            derive_identity(&env, IdentityScheme::Authenticated, &alice, &salt),
            derive_identity(&env, IdentityScheme::Authenticated, &bob, &salt)
        );
    }

    #[test]
    fn test_solution_commitment_binds_digits_and_salt() {
        let env = Env::default();
        let salt = BytesN::from_array(&env, &[3u8; 32]);
        let other_salt = BytesN::from_array(&env, &[4u8; 32]);
        let secret = Combination::decode(1234).unwrap();
        let other = Combination::decode(1534).unwrap();

        let commitment = commit_solution(&env, &secret, &salt);
        assert_eq!(commitment, commit_solution(&env, &secret, &salt));
        assert_ne!(commitment, commit_solution(&env, &other, &salt));
        assert_ne!(commitment, commit_solution(&env, &secret, &other_salt));
    }
}
