use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 6;

/// Mint a reservation code: "PNR-" plus six base-36 uppercase characters.
/// Uniqueness is enforced by the store's unique index; callers regenerate
/// on collision.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("PNR-{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_expected_shape() {
        let pnr = generate();
        assert_eq!(pnr.len(), 4 + SUFFIX_LEN);
        assert!(pnr.starts_with("PNR-"));
        assert!(pnr[4..]
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    }

    #[test]
    fn successive_codes_differ() {
        let codes: Vec<String> = (0..32).map(|_| generate()).collect();
        let first = &codes[0];
        assert!(codes.iter().any(|c| c != first));
    }
}
