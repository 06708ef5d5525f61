/// Words that look plural but are not, or must not lose their final `s`.
const INVARIANT: &[&str] = &[
    "asparagus",
    "couscous",
    "grits",
    "greens",
    "hummus",
    "molasses",
    "oats",
    "swiss",
    "series",
    "species",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("halves", "half"),
    ("calves", "calf"),
    ("knives", "knife"),
    ("cookies", "cookie"),
    ("brownies", "brownie"),
    ("pies", "pie"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("quiches", "quiche"),
    ("cloches", "cloche"),
    ("brioches", "brioche"),
    ("ganaches", "ganache"),
    ("panaches", "panache"),
    ("niches", "niche"),
];

/// Lowercase, trim, collapse whitespace and singularize the last word.
///
/// "  Fresh  Tomatoes " becomes "fresh tomato".
pub fn normalize_name(name: &str) -> String {
    let mut words = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();

    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }

    words.join(" ")
}

pub fn singularize(word: &str) -> String {
    if INVARIANT.contains(&word) {
        return word.to_owned();
    }

    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return (*singular).to_owned();
    }

    if word.len() > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }

    if word.len() > 4 && word.ends_with("oes") {
        return word[..word.len() - 2].to_owned();
    }

    if ["ches", "shes", "xes", "sses"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return word[..word.len() - 2].to_owned();
    }

    if word.len() > 2
        && word.ends_with('s')
        && !["ss", "us", "is"].iter().any(|suffix| word.ends_with(suffix))
    {
        return word[..word.len() - 1].to_owned();
    }

    word.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singularize() {
        let cases = [
            ("eggs", "egg"),
            ("tomatoes", "tomato"),
            ("potatoes", "potato"),
            ("berries", "berry"),
            ("peaches", "peach"),
            ("radishes", "radish"),
            ("boxes", "box"),
            ("glasses", "glass"),
            ("leaves", "leaf"),
            ("cookies", "cookie"),
            ("olives", "olive"),
            ("cloves", "clove"),
            ("cheeses", "cheese"),
            ("peas", "pea"),
            ("flour", "flour"),
            ("asparagus", "asparagus"),
            ("hummus", "hummus"),
            ("molasses", "molasses"),
            ("oats", "oats"),
            ("bass", "bass"),
            ("couscous", "couscous"),
            ("anis", "anis"),
        ];

        for (plural, singular) in cases {
            assert_eq!(singularize(plural), singular, "{plural}");
        }
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Chicken  "), "chicken");
        assert_eq!(normalize_name("TOMATOES"), "tomato");
        assert_eq!(normalize_name("Cherry   Tomatoes"), "cherry tomato");
        assert_eq!(normalize_name("green beans"), "green bean");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_words_ending_in_che() {
        assert_eq!(singularize("quiches"), "quiche");
        assert_eq!(singularize("cloches"), "cloche");
        assert_eq!(singularize("brioches"), "brioche");
        assert_eq!(singularize("ganaches"), "ganache");
        assert_eq!(singularize("sandwiches"), "sandwich");
        assert_eq!(normalize_name("Spinach Quiches"), "spinach quiche");
        assert_eq!(normalize_name("Spinach Quiche"), "spinach quiche");
    }
}
