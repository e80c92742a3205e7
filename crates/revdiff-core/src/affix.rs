//! Common-affix matching between two token strings.
//!
//! Locates the longest shared prefix and suffix so a token-level change can
//! be narrowed to the differing middle. Comparison is per `char`, so splits
//! always land on UTF-8 boundaries.

/// The longest common prefix of `a` and `b`, borrowed from `a`.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end += ca.len_utf8();
    }
    &a[..end]
}

/// The longest common suffix of `a` and `b`, borrowed from `a`.
pub fn common_suffix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut start = a.len();
    for (ca, cb) in a.chars().rev().zip(b.chars().rev()) {
        if ca != cb {
            break;
        }
        start -= ca.len_utf8();
    }
    &a[start..]
}

/// A token pair split into shared affixes and differing middles.
///
/// `prefix + old_mid + suffix` is the old token and `prefix + new_mid +
/// suffix` is the new token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffixSplit<'a> {
    pub prefix: &'a str,
    pub old_mid: &'a str,
    pub new_mid: &'a str,
    pub suffix: &'a str,
}

impl AffixSplit<'_> {
    /// Returns `true` if the tokens share no prefix and no suffix.
    pub fn is_disjoint(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }
}

/// Split two tokens into shared prefix, differing middles, and shared suffix.
///
/// The suffix is computed over the substrings remaining after the prefix is
/// removed, so prefix and suffix can never claim the same characters even
/// when one token is a substring of the other (e.g. `"aa"` vs `"aba"`).
pub fn split_affixes<'a>(old: &'a str, new: &'a str) -> AffixSplit<'a> {
    let prefix = common_prefix(old, new);
    let old_rest = &old[prefix.len()..];
    let new_rest = &new[prefix.len()..];
    let suffix = common_suffix(old_rest, new_rest);
    AffixSplit {
        prefix,
        old_mid: &old_rest[..old_rest.len() - suffix.len()],
        new_mid: &new_rest[..new_rest.len() - suffix.len()],
        suffix,
    }
}
