//! Character-substitution digest that keeps `LIKE` queries working.
//!
//! The digest is deterministic and length-preserving: equal plaintext
//! substrings always map to equal digest substrings, so `LIKE '%abc%'`
//! matches against the digested column exactly where it would have matched
//! against the plaintext. The transform is one-way: `decrypt` returns its
//! input unchanged.
//!
//! # Security Warning
//!
//! This is a comparison-only representation, not confidentiality-grade
//! encryption. It reveals substring-equality patterns; use it only for
//! columns that must support `LIKE` queries.

use std::borrow::Cow;
use std::fmt;

use crate::algorithm::LikeEncryptAlgorithm;
use crate::context::EncryptContext;
use crate::dict::{self, DictIndex};
use crate::error::Error;
use crate::props::Properties;

/// Type identifier this algorithm registers under.
pub const ALGORITHM_TYPE: &str = "CHAR_DIGEST_LIKE";

const DELTA_KEY: &str = "delta";
const MASK_KEY: &str = "mask";
const START_KEY: &str = "start";
const DICT_KEY: &str = "dict";

const DEFAULT_DELTA: i32 = 1;
const DEFAULT_MASK: i32 = 0b1111_1011_1101;
const DEFAULT_START: i32 = 0x4E00;

/// Highest code point digested through the plain offset-and-mask branch.
const MAX_NUMERIC_LETTER_CHAR: u32 = 256;

/// SQL `LIKE` wildcard; must survive the transform unchanged.
const WILDCARD: char = '%';

/// One-way character-substitution digest for `LIKE` queries on encrypted columns.
///
/// All state is resolved once at construction and never mutates afterwards,
/// so a single instance can serve any number of threads concurrently.
///
/// # Options
///
/// | key     | meaning                                   | default        |
/// |---------|-------------------------------------------|----------------|
/// | `delta` | additive offset                           | `1`            |
/// | `mask`  | bitmask applied after the offset          | `4029`         |
/// | `start` | base offset for non-Latin-range results   | `19968`        |
/// | `dict`  | dictionary character sequence             | built-in CJK   |
///
/// # Example
///
/// ```
/// use likedigest::char_digest::CharDigestLike;
/// use likedigest::props::Properties;
///
/// let algorithm = CharDigestLike::new(&Properties::new())?;
///
/// assert_eq!(algorithm.digest("0"), "1");
/// assert_eq!(algorithm.digest("%"), "%");
/// # Ok::<(), likedigest::error::Error>(())
/// ```
#[derive(Debug)]
pub struct CharDigestLike {
    delta: i32,
    mask: i32,
    start: i32,
    dict_index: Cow<'static, DictIndex>,
}

impl CharDigestLike {
    /// Builds the algorithm from its configuration properties.
    ///
    /// Resolution runs exactly once; the returned instance is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlgorithmInitialization`] if `delta`, `mask` or
    /// `start` is supplied but is not a base-10 integer.
    pub fn new(props: &Properties) -> Result<Self, Error> {
        let delta = resolve_decimal(props, DELTA_KEY, DEFAULT_DELTA)?;
        let mask = resolve_decimal(props, MASK_KEY, DEFAULT_MASK)?;
        let start = resolve_decimal(props, START_KEY, DEFAULT_START)?;
        let dict_index = match props.get(DICT_KEY) {
            Some(custom) if !custom.is_empty() => Cow::Owned(DictIndex::build(custom)),
            _ => Cow::Borrowed(dict::default_index()),
        };
        Ok(Self { delta, mask, start, dict_index })
    }

    /// Digests `plain_value` character by character, preserving length.
    #[must_use]
    pub fn digest(&self, plain_value: &str) -> String {
        let mut result = String::with_capacity(plain_value.len());
        for each in plain_value.chars() {
            let masked = self.masked_char(each);
            // A masked value may collide with the wildcard; emitting the
            // original character keeps spurious wildcards out of the digest.
            if masked == WILDCARD {
                result.push(each);
            } else {
                result.push(masked);
            }
        }
        result
    }

    fn masked_char(&self, original: char) -> char {
        if original == WILDCARD {
            return original;
        }
        let code = original as u32;
        let masked = if code <= MAX_NUMERIC_LETTER_CHAR {
            (code as i32).wrapping_add(self.delta) & self.mask
        } else if let Some(position) = self.dict_index.position(original) {
            ((position as i32).wrapping_add(self.delta) & self.mask).wrapping_add(self.start)
        } else {
            ((code as i32).wrapping_add(self.delta) & self.mask).wrapping_add(self.start)
        };
        // Pathological configurations can land outside the Unicode scalar
        // range (negative, or inside the surrogate block); the original
        // character stands in so the digest stays total and length-preserving.
        u32::try_from(masked).ok().and_then(char::from_u32).unwrap_or(original)
    }
}

impl LikeEncryptAlgorithm for CharDigestLike {
    fn type_name(&self) -> &'static str {
        ALGORITHM_TYPE
    }

    fn encrypt(
        &self,
        plain_value: Option<&dyn fmt::Display>,
        _context: &EncryptContext,
    ) -> Option<String> {
        plain_value.map(|value| self.digest(&value.to_string()))
    }

    fn decrypt(&self, cipher_value: &str, _context: &EncryptContext) -> String {
        cipher_value.to_owned()
    }
}

fn resolve_decimal(props: &Properties, key: &'static str, default: i32) -> Result<i32, Error> {
    props.get(key).map_or(Ok(default), |raw| {
        raw.parse().map_err(|_| {
            Error::initialization(ALGORITHM_TYPE, format!("{key} can only be a decimal number"))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::DEFAULT_DICT;
    use proptest::prelude::*;

    fn default_algorithm() -> CharDigestLike {
        CharDigestLike::new(&Properties::new()).unwrap()
    }

    #[test]
    fn test_latin_offset_and_mask() {
        let algorithm = default_algorithm();

        // (48 + 1) & 4029 = 49
        assert_eq!(algorithm.digest("0"), "1");
        // the default mask clears bits 1 and 6: (65 + 1) & 4029 = 0
        assert_eq!(algorithm.digest("A"), "\u{0}");
        // (97 + 1) & 4029 = 32
        assert_eq!(algorithm.digest("a"), " ");
    }

    #[test]
    fn test_latin_branch_includes_code_256() {
        let algorithm = default_algorithm();

        // 'Ā' (256) still takes the offset-and-mask branch: (256 + 1) & 4029 = 257
        assert_eq!(algorithm.digest("\u{100}"), "\u{101}");
        // 'ā' (257) is past the boundary: ((257 + 1) & 4029) + 19968 = 20224
        assert_eq!(algorithm.digest("\u{101}"), "\u{4F00}");
    }

    #[test]
    fn test_dictionary_char_maps_through_position() {
        let algorithm = default_algorithm();
        let (position, ch) = DEFAULT_DICT.chars().enumerate().nth(100).unwrap();

        let expected =
            char::from_u32(((position as u32 + 1) & 4029) + 19968).unwrap();
        assert_eq!(algorithm.digest(&ch.to_string()), expected.to_string());
    }

    #[test]
    fn test_non_latin_char_outside_dictionary() {
        // Hiragana 'あ' (12354) is not in the CJK dictionary
        let digest = default_algorithm().digest("\u{3042}");

        let expected = char::from_u32(((12354 + 1) & 4029) + 19968).unwrap();
        assert_eq!(digest, expected.to_string());
    }

    #[test]
    fn test_wildcard_passes_through() {
        let algorithm = default_algorithm();

        assert_eq!(algorithm.digest("%"), "%");
        assert_eq!(
            algorithm.digest("a%b"),
            format!("{}%{}", algorithm.digest("a"), algorithm.digest("b"))
        );
    }

    #[test]
    fn test_empty_string_digests_to_empty() {
        assert_eq!(default_algorithm().digest(""), "");
    }

    #[test]
    fn test_collision_guard_emits_original_latin_char() {
        // delta -1 maps '&' (38) onto 37, the wildcard
        let props = Properties::new().with("delta", "-1");
        let algorithm = CharDigestLike::new(&props).unwrap();

        assert_eq!(algorithm.digest("&"), "&");
        // '(' (40) also lands on 37 once the mask clears bit 1
        assert_eq!(algorithm.digest("("), "(");
        // a neighbor that does not collide digests normally: (39 - 1) & 4029 = 36
        assert_eq!(algorithm.digest("'"), "$");
    }

    #[test]
    fn test_collision_guard_emits_original_dictionary_char() {
        // position 0 with delta 0 and start 37 masks onto the wildcard
        let props = Properties::new()
            .with("delta", "0")
            .with("mask", "4095")
            .with("start", "37")
            .with("dict", "\u{661F}");
        let algorithm = CharDigestLike::new(&props).unwrap();

        assert_eq!(algorithm.digest("\u{661F}"), "\u{661F}");
    }

    #[test]
    fn test_custom_dictionary_overrides_default() {
        let props = Properties::new().with("dict", "\u{8C24}\u{6749}");
        let algorithm = CharDigestLike::new(&props).unwrap();

        // '杉' sits at position 1 of the custom dictionary:
        // ((1 + 1) & 4029) + 19968 = 19968 (the mask clears bit 1)
        assert_eq!(algorithm.digest("\u{6749}"), "\u{4E00}");
    }

    #[test]
    fn test_empty_dict_value_falls_back_to_default() {
        let props = Properties::new().with("dict", "");
        let algorithm = CharDigestLike::new(&props).unwrap();

        let first = DEFAULT_DICT.chars().next().unwrap();
        assert_eq!(
            algorithm.digest(&first.to_string()),
            default_algorithm().digest(&first.to_string())
        );
    }

    #[test]
    fn test_duplicate_dictionary_entry_uses_last_occurrence() {
        // '谤' appears at positions 0 and 2; the index must record 2
        let props = Properties::new().with("dict", "\u{8C24}\u{6749}\u{8C24}");
        let algorithm = CharDigestLike::new(&props).unwrap();

        let expected = char::from_u32(((2 + 1) & 4029) + 19968).unwrap();
        assert_eq!(algorithm.digest("\u{8C24}"), expected.to_string());
    }

    #[test]
    fn test_unparseable_delta_fails_initialization() {
        let props = Properties::new().with("delta", "abc");
        let result = CharDigestLike::new(&props);

        match result {
            Err(Error::AlgorithmInitialization { algorithm, reason }) => {
                assert_eq!(algorithm, ALGORITHM_TYPE);
                assert_eq!(reason, "delta can only be a decimal number");
            }
            _ => panic!("expected initialization failure"),
        }
    }

    #[test]
    fn test_unparseable_mask_fails_initialization() {
        let props = Properties::new().with("mask", "0x4029");
        let result = CharDigestLike::new(&props);

        match result {
            Err(Error::AlgorithmInitialization { reason, .. }) => {
                assert_eq!(reason, "mask can only be a decimal number");
            }
            _ => panic!("expected initialization failure"),
        }
    }

    #[test]
    fn test_unparseable_start_fails_initialization() {
        let props = Properties::new().with("start", "1.5");
        let result = CharDigestLike::new(&props);

        match result {
            Err(Error::AlgorithmInitialization { reason, .. }) => {
                assert_eq!(reason, "start can only be a decimal number");
            }
            _ => panic!("expected initialization failure"),
        }
    }

    #[test]
    fn test_signed_option_values_parse() {
        let props = Properties::new().with("delta", "-3").with("start", "+19968");
        let algorithm = CharDigestLike::new(&props).unwrap();

        // (52 - 3) & 4029 = 49
        assert_eq!(algorithm.digest("4"), "1");
    }

    #[test]
    fn test_encrypt_stringifies_values() {
        let algorithm = default_algorithm();
        let ctx = EncryptContext::new("users", "email");

        let from_number = algorithm.encrypt(Some(&123), &ctx);
        let from_str = algorithm.encrypt(Some(&"123"), &ctx);
        assert_eq!(from_number, from_str);
    }

    #[test]
    fn test_encrypt_absent_value_is_absent() {
        let algorithm = default_algorithm();
        let ctx = EncryptContext::new("users", "email");

        assert_eq!(algorithm.encrypt(None, &ctx), None);
    }

    #[test]
    fn test_decrypt_is_identity() {
        let algorithm = default_algorithm();
        let ctx = EncryptContext::new("users", "email");

        assert_eq!(algorithm.decrypt("\u{4E01}B%", &ctx), "\u{4E01}B%");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(default_algorithm().type_name(), "CHAR_DIGEST_LIKE");
    }

    proptest! {
        #[test]
        fn prop_digest_preserves_length(input in ".*") {
            let algorithm = default_algorithm();
            prop_assert_eq!(
                algorithm.digest(&input).chars().count(),
                input.chars().count()
            );
        }

        #[test]
        fn prop_digest_is_deterministic(input in ".*") {
            let algorithm = default_algorithm();
            prop_assert_eq!(algorithm.digest(&input), algorithm.digest(&input));
        }

        #[test]
        fn prop_wildcards_map_exactly_to_wildcards(input in ".*", delta in -5000_i32..5000) {
            let props = Properties::new().with("delta", delta.to_string());
            let algorithm = CharDigestLike::new(&props).unwrap();
            let digest = algorithm.digest(&input);
            for (plain, masked) in input.chars().zip(digest.chars()) {
                prop_assert_eq!(plain == '%', masked == '%');
            }
        }

        #[test]
        fn prop_decrypt_identity(input in ".*") {
            let algorithm = default_algorithm();
            let ctx = EncryptContext::new("users", "email");
            prop_assert_eq!(algorithm.decrypt(&input, &ctx), input);
        }
    }
}
