use tiny_keccak::{Hasher, Keccak};

/// Keccak256 of `input`.
pub fn hash(input: &[u8]) -> Vec<u8> {
    let mut keccak = Keccak::v256();
    keccak.update(input);
    let mut result = vec![0; 32];
    keccak.finalize(result.as_mut_slice());
    result
}

/// `repeat_hash(x, 0) == x`, `repeat_hash(x, n) == hash(repeat_hash(x, n - 1))`.
///
/// Opens a randao commitment at `n` layers.
pub fn repeat_hash(input: [u8; 32], n: u64) -> [u8; 32] {
    let mut output = input;
    for _ in 0..n {
        let hashed = hash(&output);
        output.copy_from_slice(&hashed);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashing() {
        let input: Vec<u8> = From::from("hello");

        let output = hash(input.as_ref());
        let expected = &[
            0x1c, 0x8a, 0xff, 0x95, 0x06, 0x85, 0xc2, 0xed, 0x4b, 0xc3, 0x17, 0x4f, 0x34, 0x72,
            0x28, 0x7b, 0x56, 0xd9, 0x51, 0x7b, 0x9c, 0x94, 0x81, 0x27, 0x31, 0x9a, 0x09, 0xa7,
            0xa3, 0x6d, 0xea, 0xc8,
        ];
        assert_eq!(expected, output.as_slice());
    }

    #[test]
    fn test_repeat_hash_zero_layers() {
        let input = [42; 32];
        assert_eq!(repeat_hash(input, 0), input);
    }

    #[test]
    fn test_repeat_hash_layers_compose() {
        let input = [42; 32];

        let mut expected = [0; 32];
        expected.copy_from_slice(&hash(&hash(&input)));

        assert_eq!(repeat_hash(input, 2), expected);
        assert_eq!(repeat_hash(repeat_hash(input, 1), 1), expected);
    }
}
