/// Common swaps keyed by normalized ingredient name.
const SUBSTITUTIONS: &[(&str, &[&str])] = &[
    ("butter", &["margarine", "coconut oil"]),
    ("buttermilk", &["milk with lemon juice", "plain yogurt"]),
    ("egg", &["chia egg", "applesauce", "banana"]),
    ("flour", &["almond flour", "coconut flour"]),
    ("heavy cream", &["coconut cream", "evaporated milk"]),
    ("milk", &["almond milk", "soy milk", "oat milk"]),
    ("sour cream", &["greek yogurt"]),
    ("sugar", &["honey", "stevia"]),
];

/// Suggested replacements for an ingredient, empty when none are known.
pub fn substitutions(name: &str) -> Vec<String> {
    SUBSTITUTIONS
        .iter()
        .find(|(ingredient, _)| *ingredient == name)
        .map(|(_, subs)| subs.iter().map(|s| (*s).to_owned()).collect())
        .unwrap_or_default()
}
