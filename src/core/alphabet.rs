//! Playable alphabet and input sanitization
//!
//! The game is played with the 26 ASCII capitals plus `Ñ`. Every piece of
//! user input (secret word, typed guess, on-screen key) passes through here
//! before it reaches the game state.

/// Every playable letter, in on-screen keyboard order
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Check whether `c` is a playable (already uppercase) letter
#[inline]
#[must_use]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_uppercase() || c == 'Ñ'
}

/// Uppercase `input`, drop everything that is not a playable letter, and keep
/// at most `max_len` letters
///
/// Uppercasing happens before filtering, so `ñ` survives as `Ñ` and a letter
/// whose uppercase form expands (`ß` → `SS`) contributes every resulting letter.
///
/// # Examples
/// ```
/// use wordle_hotseat::core::sanitize;
///
/// assert_eq!(sanitize("ra-tón!", 5), "RATN");
/// assert_eq!(sanitize("niño", 5), "NIÑO");
/// assert_eq!(sanitize("abcdefgh", 5), "ABCDE");
/// ```
#[must_use]
pub fn sanitize(input: &str, max_len: usize) -> String {
    input
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|&c| is_letter(c))
        .take(max_len)
        .collect()
}

/// Normalize a single typed character into a playable letter
///
/// Returns `None` for anything that does not uppercase to exactly one
/// playable letter.
#[must_use]
pub fn normalize_letter(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    let first = upper.next()?;
    (upper.next().is_none() && is_letter(first)).then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn alphabet_is_all_letters() {
        assert!(ALPHABET.iter().all(|&c| is_letter(c)));
        assert_eq!(ALPHABET[14], 'Ñ');
    }

    #[test]
    fn sanitize_uppercases_and_filters() {
        assert_eq!(sanitize("raton", 5), "RATON");
        assert_eq!(sanitize("r4t 0n", 5), "RTN");
        assert_eq!(sanitize("", 5), "");
        assert_eq!(sanitize("12345", 5), "");
    }

    #[test]
    fn sanitize_keeps_enye() {
        assert_eq!(sanitize("año", 5), "AÑO");
        assert_eq!(sanitize("AÑO", 5), "AÑO");
    }

    #[test]
    fn sanitize_drops_other_accents() {
        // Only Ñ is part of the extended alphabet
        assert_eq!(sanitize("canción", 10), "CANCIN");
        assert_eq!(sanitize("über", 10), "BER");
    }

    #[test]
    fn sanitize_truncates_in_letters_not_bytes() {
        assert_eq!(sanitize("ññññññ", 5), "ÑÑÑÑÑ");
        assert_eq!(sanitize("ññññññ", 5).chars().count(), 5);
    }

    #[test]
    fn normalize_letter_accepts_playable() {
        assert_eq!(normalize_letter('a'), Some('A'));
        assert_eq!(normalize_letter('Z'), Some('Z'));
        assert_eq!(normalize_letter('ñ'), Some('Ñ'));
    }

    #[test]
    fn normalize_letter_rejects_others() {
        assert_eq!(normalize_letter('1'), None);
        assert_eq!(normalize_letter(' '), None);
        assert_eq!(normalize_letter('é'), None);
        assert_eq!(normalize_letter('ß'), None); // uppercases to two letters
    }

    proptest! {
        #[test]
        fn sanitize_only_emits_playable_letters(input in any::<String>(), max_len in 0usize..12) {
            let out = sanitize(&input, max_len);
            prop_assert!(out.chars().all(is_letter));
            prop_assert!(out.chars().count() <= max_len);
        }

        #[test]
        fn sanitize_is_idempotent(input in "\\PC{0,16}") {
            let once = sanitize(&input, 8);
            prop_assert_eq!(sanitize(&once, 8), once);
        }
    }
}
