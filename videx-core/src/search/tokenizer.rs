/// Split text into lowercase alphanumeric words.
///
/// Anything that is not alphanumeric separates words, so hyphenated and
/// punctuated titles ("Large-Scale", "py.test") yield their parts.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}
