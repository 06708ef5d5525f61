use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Grocery aisle, declared in the order a store is usually walked.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Meat,
    Seafood,
    Dairy,
    Bakery,
    Grains,
    Canned,
    Condiments,
    Spices,
    Baking,
    Frozen,
    Beverages,
    Snacks,
    Other,
}

/// Map a normalized ingredient name to its aisle.
///
/// Tries the whole name, then shorter endings of it ("red bell pepper" → "bell pepper"),
/// then each single word from the last one. Unknown ingredients land in `Other`.
pub fn categorize(name: &str) -> Category {
    let words = name.split_whitespace().collect::<Vec<_>>();

    match words.first() {
        Some(&"frozen") => return Category::Frozen,
        Some(&"canned") | Some(&"tinned") => return Category::Canned,
        _ => {}
    }

    for start in 0..words.len() {
        if let Some(category) = lookup(&words[start..].join(" ")) {
            return category;
        }
    }

    words
        .iter()
        .rev()
        .find_map(|word| lookup(word))
        .unwrap_or(Category::Other)
}

fn lookup(name: &str) -> Option<Category> {
    if is_produce(name) {
        return Some(Category::Produce);
    }

    if is_meat(name) {
        return Some(Category::Meat);
    }

    if is_seafood(name) {
        return Some(Category::Seafood);
    }

    if is_dairy(name) {
        return Some(Category::Dairy);
    }

    if is_bakery(name) {
        return Some(Category::Bakery);
    }

    if is_grains(name) {
        return Some(Category::Grains);
    }

    if is_canned(name) {
        return Some(Category::Canned);
    }

    if is_condiment(name) {
        return Some(Category::Condiments);
    }

    if is_spice(name) {
        return Some(Category::Spices);
    }

    if is_baking(name) {
        return Some(Category::Baking);
    }

    if is_beverage(name) {
        return Some(Category::Beverages);
    }

    if is_snack(name) {
        return Some(Category::Snacks);
    }

    None
}

fn is_produce(name: &str) -> bool {
    matches!(
        name,
        // vegetables
        "tomato"
            | "onion"
            | "red onion"
            | "shallot"
            | "scallion"
            | "green onion"
            | "garlic"
            | "lettuce"
            | "carrot"
            | "celery"
            | "bell pepper"
            | "chili pepper"
            | "jalapeño"
            | "jalapeno"
            | "cucumber"
            | "zucchini"
            | "broccoli"
            | "cauliflower"
            | "spinach"
            | "kale"
            | "cabbage"
            | "potato"
            | "sweet potato"
            | "mushroom"
            | "green bean"
            | "pea"
            | "corn"
            | "avocado"
            | "eggplant"
            | "squash"
            | "pumpkin"
            | "leek"
            | "asparagus"
            | "radish"
            | "beet"
            | "arugula"
            | "ginger"
            // fresh herbs
            | "cilantro"
            | "parsley"
            | "basil"
            | "mint"
            | "dill"
            | "chive"
            | "thyme"
            | "rosemary"
            // fruits
            | "apple"
            | "banana"
            | "orange"
            | "lemon"
            | "lime"
            | "strawberry"
            | "blueberry"
            | "raspberry"
            | "berry"
            | "grape"
            | "mango"
            | "pineapple"
            | "peach"
            | "pear"
            | "cherry"
            | "watermelon"
    )
}

fn is_meat(name: &str) -> bool {
    matches!(
        name,
        "chicken"
            | "chicken breast"
            | "chicken thigh"
            | "chicken wing"
            | "turkey"
            | "duck"
            | "beef"
            | "ground beef"
            | "steak"
            | "brisket"
            | "pork"
            | "pork chop"
            | "bacon"
            | "pancetta"
            | "ham"
            | "prosciutto"
            | "sausage"
            | "chorizo"
            | "lamb"
            | "veal"
    )
}

fn is_seafood(name: &str) -> bool {
    matches!(
        name,
        "fish"
            | "salmon"
            | "tuna"
            | "cod"
            | "tilapia"
            | "trout"
            | "shrimp"
            | "prawn"
            | "lobster"
            | "crab"
            | "scallop"
            | "mussel"
            | "clam"
            | "squid"
            | "anchovy"
    )
}

fn is_dairy(name: &str) -> bool {
    matches!(
        name,
        "milk"
            | "cream"
            | "heavy cream"
            | "whipping cream"
            | "sour cream"
            | "butter"
            | "cheese"
            | "cheddar"
            | "mozzarella"
            | "parmesan"
            | "feta"
            | "ricotta"
            | "goat cheese"
            | "cream cheese"
            | "cottage cheese"
            | "yogurt"
            | "greek yogurt"
            | "egg"
            | "buttermilk"
    )
}

fn is_bakery(name: &str) -> bool {
    matches!(
        name,
        "bread"
            | "baguette"
            | "ciabatta"
            | "sourdough"
            | "tortilla"
            | "pita"
            | "pita bread"
            | "bagel"
            | "croissant"
            | "bun"
            | "roll"
            | "breadcrumb"
    )
}

fn is_grains(name: &str) -> bool {
    matches!(
        name,
        "rice"
            | "white rice"
            | "brown rice"
            | "pasta"
            | "spaghetti"
            | "penne"
            | "macaroni"
            | "noodle"
            | "lasagna noodle"
            | "oats"
            | "quinoa"
            | "couscous"
            | "barley"
            | "bulgur"
            | "lentil"
    )
}

fn is_canned(name: &str) -> bool {
    matches!(
        name,
        "tomato sauce"
            | "tomato paste"
            | "diced tomato"
            | "broth"
            | "stock"
            | "chicken broth"
            | "beef broth"
            | "vegetable broth"
            | "chicken stock"
            | "bean"
            | "black bean"
            | "kidney bean"
            | "chickpea"
            | "coconut milk"
            | "corn kernel"
    )
}

fn is_condiment(name: &str) -> bool {
    matches!(
        name,
        "oil"
            | "olive oil"
            | "vegetable oil"
            | "coconut oil"
            | "sesame oil"
            | "vinegar"
            | "balsamic vinegar"
            | "soy sauce"
            | "fish sauce"
            | "worcestershire sauce"
            | "hot sauce"
            | "sauce"
            | "ketchup"
            | "mustard"
            | "mayonnaise"
            | "honey"
            | "maple syrup"
            | "jam"
            | "peanut butter"
            | "salsa"
    )
}

fn is_spice(name: &str) -> bool {
    matches!(
        name,
        "salt"
            | "pepper"
            | "black pepper"
            | "paprika"
            | "cumin"
            | "coriander"
            | "turmeric"
            | "cinnamon"
            | "nutmeg"
            | "oregano"
            | "bay leaf"
            | "chili powder"
            | "cayenne pepper"
            | "garlic powder"
            | "onion powder"
            | "curry powder"
            | "red pepper flake"
            | "ground clove"
    )
}

fn is_baking(name: &str) -> bool {
    matches!(
        name,
        "flour"
            | "all-purpose flour"
            | "bread flour"
            | "sugar"
            | "brown sugar"
            | "powdered sugar"
            | "baking powder"
            | "baking soda"
            | "yeast"
            | "vanilla"
            | "vanilla extract"
            | "cocoa powder"
            | "chocolate chip"
            | "cornstarch"
            | "molasses"
    )
}

fn is_beverage(name: &str) -> bool {
    matches!(
        name,
        "water"
            | "juice"
            | "orange juice"
            | "coffee"
            | "tea"
            | "wine"
            | "white wine"
            | "red wine"
            | "beer"
            | "soda"
    )
}

fn is_snack(name: &str) -> bool {
    matches!(
        name,
        "chip"
            | "cracker"
            | "pretzel"
            | "popcorn"
            | "nut"
            | "almond"
            | "walnut"
            | "pecan"
            | "cashew"
            | "peanut"
            | "raisin"
            | "chocolate"
    )
}
