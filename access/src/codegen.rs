//! Random access-code generation.

use rand::Rng;

/// Unambiguous alphabet: no `0`/`O` and no `1`/`I` confusion pairs.
pub const CODE_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

const CODE_SYMBOLS: usize = 8;
const GROUP_SIZE: usize = 4;

/// Generate a human-typable code: 8 alphabet symbols, dash after the fourth.
pub fn generate_code<R: Rng>(rng: &mut R) -> String {
    let mut code = String::with_capacity(CODE_SYMBOLS + 1);
    for i in 0..CODE_SYMBOLS {
        if i == GROUP_SIZE {
            code.push('-');
        }
        let idx = rng.gen_range(0..CODE_ALPHABET.len());
        code.push(CODE_ALPHABET[idx] as char);
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shape_is_four_dash_four() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = generate_code(&mut rng);
            assert_eq!(code.len(), 9);
            assert_eq!(code.as_bytes()[4], b'-');
            for (i, b) in code.bytes().enumerate() {
                if i != 4 {
                    assert!(CODE_ALPHABET.contains(&b), "unexpected symbol in {code}");
                }
            }
        }
    }

    #[test]
    fn alphabet_has_no_confusable_characters() {
        for confusable in [b'0', b'O', b'1', b'I'] {
            assert!(!CODE_ALPHABET.contains(&confusable));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_code(&mut StdRng::seed_from_u64(42));
        let b = generate_code(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
