//! Curated gender-neutral names, as commonly listed by baby-name references

use once_cell::sync::Lazy;
use std::collections::HashSet;

static CURATED_NEUTRAL: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "addison", "adrian", "ainsley", "alex", "alexis", "ali", "allison", "amari", "amani",
        "andie", "angel", "ari", "ariel", "arden", "arlo", "ash", "ashley", "ashton", "aspen",
        "aubrey", "august", "austin", "avery", "bailey", "baylor", "beau", "bellamy", "billie",
        "blair", "blaine", "blake", "bobbie", "bowie", "brett", "briar", "brook", "brooklyn",
        "bryce", "caelan", "cameron", "campbell", "carmen", "carson", "carter", "casey",
        "cassidy", "charlie", "chandler", "channing", "chris", "clare", "corey", "cory",
        "courtney", "cruz", "dakota", "dale", "dallas", "dana", "dane", "darby", "darcy",
        "daryl", "dawson", "devin", "devon", "drew", "dylan", "eden", "elliot", "elliott",
        "ellis", "ellery", "emerson", "emery", "emory", "evan", "everett", "finley", "finn",
        "frankie", "gale", "gentry", "glenn", "gray", "grey", "hadley", "hale", "harley",
        "harlow", "harper", "haven", "hayden", "hollis", "hunter", "indigo", "indy", "jackie",
        "jaden", "jaime", "jamie", "jay", "jean", "jesse", "jessie", "jody", "jordan", "jordyn",
        "journey", "jude", "jules", "justice", "kai", "kamryn", "karter", "kasey", "keegan",
        "kelly", "kelsey", "kendall", "kennedy", "kerry", "kim", "kit", "kobe", "kris", "kyle",
        "lake", "landry", "lane", "lee", "legacy", "leighton", "lennon", "lennox", "leslie",
        "lindsay", "lindsey", "linden", "logan", "london", "lou", "lowen", "lyric", "mackenzie",
        "madison", "marley", "marlowe", "mason", "max", "mckinley", "mel", "merritt", "micah",
        "milan", "morgan", "murphy", "nat", "nico", "nikita", "noel", "nova", "oakley", "ocean",
        "onyx", "paige", "palmer", "paris", "parker", "pat", "payton", "peyton", "phoenix",
        "piper", "presley", "quincy", "quinn", "rain", "raleigh", "rama", "randy", "raven",
        "ray", "reagan", "reece", "reed", "reese", "regan", "remi", "remington", "remy", "ridley",
        "riley", "rio", "river", "robin", "rory", "rowan", "royal", "ryan", "rylan", "sage",
        "sam", "sammy", "sasha", "sawyer", "scout", "shannon", "shay", "shea", "shelby",
        "sidney", "skylar", "skyler", "sloan", "sloane", "spencer", "stevie", "story", "sutton",
        "sydney", "tanner", "tate", "tatum", "taylor", "teagan", "terry", "tierney", "toby",
        "tony", "tracy", "tristan", "true", "tyler", "unique", "val", "vaughn", "wallace",
        "wesley", "west", "whitney", "willow", "winter", "wren", "wynn", "zion", "zephyr",
    ]
    .into_iter()
    .collect()
});

/// True when `name` is on the curated list (case-insensitive)
pub fn is_curated_neutral(name: &str) -> bool {
    CURATED_NEUTRAL.contains(name.trim().to_lowercase().as_str())
}

/// Size of the curated list
pub fn curated_neutral_count() -> usize {
    CURATED_NEUTRAL.len()
}
