/// Naive byte-wise substring search. An empty needle is always contained.
pub fn contains(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();

    if needle.len() > haystack.len() {
        return false;
    }

    (0..=haystack.len() - needle.len()).any(|i| &haystack[i..i + needle.len()] == needle)
}
