// Fixed name category lists
//
// All entries are lower-case. Each list is built into a HashSet once, on first
// use, and shared for the process lifetime.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Static name set built from a literal list on first access
pub(crate) type NameSet = Lazy<HashSet<&'static str>>;

macro_rules! name_set {
    ($($name:literal),* $(,)?) => {
        Lazy::new(|| [$($name),*].into_iter().collect())
    };
}

// ============================================================================
// Religion
// ============================================================================

/// Hebrew Bible names shared by Christian and Jewish naming
pub(crate) static OLD_TESTAMENT_MALE: NameSet = name_set![
    "aaron", "abel", "abraham", "adam", "amos", "asher", "benjamin", "caleb", "daniel", "david",
    "eli", "elijah", "elisha", "enoch", "ephraim", "ezekiel", "ezra", "gabriel", "gideon",
    "isaac", "isaiah", "ishmael", "jacob", "jeremiah", "jesse", "joel", "jonah", "jonathan",
    "joseph", "joshua", "josiah", "levi", "micah", "michael", "moses", "nathan", "nathaniel",
    "noah", "obadiah", "reuben", "samson", "samuel", "saul", "seth", "simeon", "solomon",
    "tobias", "zachariah", "zechariah", "malachi", "judah", "ezequiel", "raphael", "uriah",
];

pub(crate) static OLD_TESTAMENT_FEMALE: NameSet = name_set![
    "abigail", "ada", "adah", "bathsheba", "delilah", "deborah", "dinah", "eden", "esther",
    "eve", "hannah", "jael", "jemima", "judith", "keziah", "leah", "miriam", "naomi", "rachel",
    "rebecca", "rebekah", "ruth", "sarah", "sara", "susanna", "tamar", "zipporah", "michal",
    "tirzah", "hadassah", "shiloh", "beulah",
];

/// New Testament and saints' names
pub(crate) static CHRISTIAN_MALE: NameSet = name_set![
    "andrew", "anthony", "augustine", "barnabas", "bartholomew", "christian", "christopher",
    "clement", "dominic", "francis", "george", "ignatius", "james", "jesus", "john", "jude",
    "luke", "mark", "matthew", "matthias", "nicholas", "patrick", "paul", "peter", "philip",
    "sebastian", "silas", "stephen", "thaddeus", "thomas", "timothy", "titus", "vincent",
    "benedict", "bernard", "cyril", "lawrence", "martin", "valentine", "xavier", "kristian",
    "emmanuel", "immanuel", "mateo", "matteo", "juan", "jose", "pedro", "pablo", "santiago",
];

pub(crate) static CHRISTIAN_FEMALE: NameSet = name_set![
    "agnes", "anna", "anne", "bernadette", "bridget", "catherine", "cecilia", "christina",
    "christine", "clare", "clara", "elizabeth", "faith", "grace", "hope", "joan", "joanna",
    "lucia", "lydia", "magdalene", "madeline", "margaret", "maria", "marie", "martha", "mary",
    "monica", "priscilla", "rose", "teresa", "theresa", "trinity", "veronica", "angela",
    "angelica", "charity", "genesis", "nevaeh", "mercy", "christiana", "kristen", "kirsten",
    "guadalupe", "dolores", "mercedes", "consuelo", "pilar", "rosario", "natividad",
];

/// Modern Hebrew and Jewish-specific names
pub(crate) static JEWISH_MALE: NameSet = name_set![
    "ari", "ariel", "avi", "avraham", "baruch", "chaim", "dov", "eitan", "eliezer", "ephraim",
    "gershon", "hillel", "meir", "menachem", "mordechai", "moshe", "shlomo", "shmuel",
    "yaakov", "yehuda", "yitzchak", "yosef", "zev", "asher", "amos", "boaz", "lev", "oren",
    "yoni", "noam", "tal", "yael", "ezra", "reuven",
];

pub(crate) static JEWISH_FEMALE: NameSet = name_set![
    "aviva", "batya", "chana", "dalia", "devorah", "ilana", "liora", "malka", "noa", "orly",
    "rivka", "shira", "shoshana", "talia", "tova", "yael", "yehudit", "zahava", "ziva",
    "aliza", "ayelet", "gila", "hadas", "keren", "leora", "meira", "tzipora", "esther",
    "miriam", "naomi",
];

pub(crate) static MUSLIM_MALE: NameSet = name_set![
    "abdul", "abdullah", "ahmad", "ahmed", "ali", "amir", "bilal", "hamza", "hassan", "hussein",
    "ibrahim", "idris", "imran", "ismail", "jamal", "karim", "kareem", "khalid", "mahmoud",
    "malik", "mohamed", "mohammed", "muhammad", "mustafa", "omar", "rashid", "salman", "samir",
    "tariq", "yahya", "yasin", "yusuf", "zaid", "zayn", "zayd", "ayaan", "rayan", "adnan",
    "faisal", "harun", "musa", "isa", "suleiman", "osman", "anwar", "nasir",
];

pub(crate) static MUSLIM_FEMALE: NameSet = name_set![
    "aisha", "amina", "asma", "ayesha", "fatima", "hafsa", "halima", "hana", "iman", "jamila",
    "khadija", "layla", "leila", "mariam", "maryam", "nadia", "noor", "nour", "rania", "safiya",
    "salma", "samira", "yasmin", "yasmine", "zainab", "zahra", "zara", "inaya", "aaliyah",
    "amira", "habiba", "sumaya", "rukhsana", "farah", "huda",
];

/// Abrahamic figures that Islam shares under the same (anglicised) name
pub(crate) static QURANIC_SHARED: NameSet = name_set![
    "adam", "noah", "abraham", "isaac", "ishmael", "jacob", "joseph", "moses", "aaron",
    "david", "solomon", "jonah", "zachariah", "elijah", "jesus", "mary", "sarah", "hagar",
];

pub(crate) static HINDU_MALE: NameSet = name_set![
    "aarav", "arjun", "ashok", "deepak", "dev", "ganesh", "hari", "krishna", "lakshman",
    "mahesh", "manoj", "mohan", "naveen", "raj", "rajesh", "rahul", "ram", "rama", "ravi",
    "rohan", "sanjay", "shiva", "suresh", "vijay", "vikram", "vishnu", "aditya", "ananth",
    "ishaan", "kiran", "nikhil", "pranav", "rohit", "sai", "varun", "vivek", "arnav",
];

pub(crate) static HINDU_FEMALE: NameSet = name_set![
    "aarti", "ananya", "anjali", "deepa", "devi", "divya", "durga", "gita", "geeta", "isha",
    "kavya", "lakshmi", "meera", "neha", "parvati", "pooja", "priya", "radha", "riya", "saanvi",
    "sarita", "shreya", "sita", "sunita", "uma", "diya", "aditi", "kavita", "nandini", "padma",
    "anika", "ishani",
];

pub(crate) static BUDDHIST: NameSet = name_set![
    "ananda", "bodhi", "dharma", "kalden", "karma", "lobsang", "metta", "nima", "pema",
    "siddhartha", "sonam", "tashi", "tenzin", "thich", "zen", "dawa", "dolma", "kunga",
    "mingma", "tara", "amida", "kannon",
];

pub(crate) static SIKH: NameSet = name_set![
    "amandeep", "amrit", "balwinder", "gurdeep", "gurpreet", "harjit", "harpreet", "hardeep",
    "inderjit", "jaspreet", "jaswinder", "kulwinder", "manpreet", "navdeep", "paramjit",
    "ranjit", "simran", "sukhwinder", "harjot", "gurleen", "jasleen", "manjit", "kirpal",
    "arjan", "gurnoor", "harleen",
];

/// Virtue and devotional names with only light religious weight
pub(crate) static VIRTUE_NAMES: NameSet = name_set![
    "faith", "hope", "grace", "charity", "joy", "mercy", "patience", "prudence", "constance",
    "honor", "verity", "felicity", "temperance", "trinity", "genesis", "nevaeh", "heaven",
    "angel", "serenity", "blessing", "destiny", "haven", "justice", "liberty", "promise",
];

/// Central figures whose names carry heavy religious weight
pub(crate) static MAJOR_RELIGIOUS_FIGURES: NameSet = name_set![
    "jesus", "mary", "joseph", "moses", "abraham", "muhammad", "mohammed", "mohamed", "ali",
    "fatima", "krishna", "rama", "sita", "shiva", "vishnu", "lakshmi", "durga", "parvati",
    "siddhartha", "peter", "paul", "john", "david", "solomon", "elijah", "isaiah", "miriam",
    "sarah", "christian", "christopher", "immanuel", "emmanuel", "gabriel", "michael",
    "raphael", "gurpreet", "nanak",
];

// ============================================================================
// Cultural origin (beyond what the language origin implies)
// ============================================================================

pub(crate) static AFRICAN_AMERICAN_MALE: NameSet = name_set![
    "darnell", "deandre", "demetrius", "deshawn", "dewayne", "jamal", "jalen", "jaylen",
    "jamari", "keshawn", "lamar", "lamont", "marquis", "marquise", "tremaine", "terrell",
    "tyrone", "tyrese", "darius", "dashawn", "jermaine", "kendrick", "rashad", "reginald",
    "cornelius", "deangelo", "javon", "kwame", "malik", "andre", "trevon", "davon", "desmond",
    "dante", "isaiah", "jabari",
];

pub(crate) static AFRICAN_AMERICAN_FEMALE: NameSet = name_set![
    "aaliyah", "ayanna", "ebony", "imani", "jasmine", "kiara", "latasha", "latisha", "latoya",
    "keisha", "lakisha", "nia", "shanice", "shaniqua", "tamika", "tanisha", "tiana", "tionna",
    "destiny", "precious", "jada", "janelle", "kenya", "shaquana", "monique", "dominique",
    "aniyah", "nevaeh", "amani", "zaria", "deja", "ashanti",
];

pub(crate) static HISPANIC_MALE: NameSet = name_set![
    "alejandro", "angel", "antonio", "carlos", "cesar", "diego", "eduardo", "emilio",
    "enrique", "fernando", "francisco", "gerardo", "guillermo", "hector", "javier", "jesus",
    "jorge", "jose", "juan", "julio", "luis", "manuel", "marco", "mario", "miguel", "pablo",
    "pedro", "rafael", "ramon", "ricardo", "roberto", "rodrigo", "santiago", "sergio", "mateo",
    "joaquin", "ignacio", "raul", "alfredo", "armando", "jaime", "oscar",
];

pub(crate) static HISPANIC_FEMALE: NameSet = name_set![
    "adriana", "alejandra", "ana", "araceli", "beatriz", "camila", "carmen", "catalina",
    "daniela", "esperanza", "gabriela", "guadalupe", "isabel", "juana", "leticia", "lucia",
    "luz", "marisol", "maria", "mariana", "paola", "rosa", "sofia", "valentina", "valeria",
    "ximena", "yesenia", "dolores", "mercedes", "consuelo", "pilar", "rosario", "alondra",
    "fernanda", "jimena", "renata",
];

// ============================================================================
// Traditional significance and socioeconomic perception
// ============================================================================

/// Historical, royal, and classical names
pub(crate) static HISTORICAL_CLASSIC: NameSet = name_set![
    "alexander", "anne", "arthur", "augustus", "beatrice", "catherine", "charles", "charlotte",
    "edmund", "edward", "eleanor", "elizabeth", "frederick", "george", "henry", "helen",
    "isabella", "james", "john", "julius", "louis", "margaret", "mary", "matilda", "philip",
    "richard", "robert", "theodore", "thomas", "victoria", "william", "winston", "albert",
    "alfred", "cornelius", "florence", "harold", "josephine", "leopold", "lucius", "marcus",
    "octavia", "penelope", "rosalind", "virginia", "walter", "cecilia", "constance", "edith",
    "agnes", "clement", "ambrose", "hector", "achilles", "homer", "athena", "diana", "minerva",
];

/// Names that rose with recent naming trends
pub(crate) static MODERN_TRENDY: NameSet = name_set![
    "aiden", "brayden", "braxton", "bentley", "jayden", "kayden", "jaxon", "jaxson", "ryker",
    "maverick", "kingston", "legend", "zion", "nova", "harper", "paisley", "kinsley", "oaklynn",
    "oakley", "everleigh", "brynlee", "kaylee", "khaleesi", "nevaeh", "skylar", "aubree",
    "addison", "madison", "mackenzie", "londyn", "brooklyn", "raelynn", "ayden", "colt",
    "ryder", "hudson", "bodhi", "kairo", "atlas", "aspen", "journee", "jaylah", "ember",
    "haven", "melody", "remington", "bristol", "blakely", "saylor", "navy",
];

/// Names perceived as upper-class
pub(crate) static ELITE_NAMES: NameSet = name_set![
    "alexander", "arabella", "augustus", "beatrice", "caroline", "charlotte", "cordelia",
    "edward", "eleanor", "elizabeth", "frederick", "genevieve", "harrison", "henry", "imogen",
    "louisa", "madeleine", "margaret", "penelope", "philippa", "preston", "sebastian",
    "sterling", "theodore", "victoria", "william", "winston", "whitney", "chandler",
    "bradford", "spencer", "wellington", "clementine", "juliet", "camilla", "hugo",
    "montgomery", "archibald", "quinn", "blair", "sloane", "tatum",
];

/// Names perceived as aspirational or brand-inspired
pub(crate) static ASPIRATIONAL_NAMES: NameSet = name_set![
    "armani", "brittany", "chanel", "crystal", "destiny", "diamond", "essence", "jaden",
    "jaxon", "kayden", "brayden", "lexus", "mercedes", "porsche", "precious", "princess",
    "tiffany", "unique", "nevaeh", "royalty", "kash", "cash", "legend", "king", "queen",
    "miracle", "heaven", "champagne", "bentley", "dior", "gucci", "prada", "rolex",
];

// ============================================================================
// Perceived traits
// ============================================================================

pub(crate) static PERCEIVED_STRONG: NameSet = name_set![
    "axel", "brock", "bruce", "colt", "duke", "gunnar", "hunter", "jack", "knox", "max",
    "rex", "ryder", "tank", "thor", "victor", "wyatt", "maximus", "bridget", "valentina",
    "matilda", "gertrude", "louise", "alexandra", "brianna", "kendra", "marcus", "ethan",
    "andrea", "drew",
];

pub(crate) static PERCEIVED_ELEGANT: NameSet = name_set![
    "audrey", "celeste", "charlotte", "eleanor", "evelyn", "genevieve", "grace", "isabella",
    "juliette", "madeleine", "ophelia", "rosalind", "seraphina", "sophia", "vivienne",
    "arabella", "adrienne", "camille", "colette", "estelle", "adrian", "julian", "sebastian",
    "lucian", "laurent",
];

pub(crate) static PERCEIVED_CREATIVE: NameSet = name_set![
    "indie", "jasper", "juniper", "luna", "phoenix", "river", "sage", "willow", "wren",
    "ziggy", "bowie", "lennon", "harlow", "ezra", "arlo", "iris", "frida", "piper", "rain",
    "story", "lyric", "poet", "banksy", "dali", "aurora",
];

pub(crate) static PERCEIVED_INTELLIGENT: NameSet = name_set![
    "albert", "alexander", "athena", "benjamin", "eleanor", "elliot", "isaac", "minerva",
    "nathaniel", "sophia", "theodore", "ada", "marie", "rosalind", "grant", "harvey",
    "leonard", "newton", "sherlock", "vera", "hermione", "franklin", "darwin",
];

pub(crate) static PERCEIVED_PLAYFUL: NameSet = name_set![
    "benny", "bella", "charlie", "coco", "jojo", "lulu", "milo", "poppy", "sunny", "tilly",
    "billy", "bobby", "dolly", "frankie", "gigi", "kiki", "mimi", "ollie", "teddy", "tucker",
    "ziggy", "daisy", "pip", "bo", "rory",
];

pub(crate) static PERCEIVED_SOPHISTICATED: NameSet = name_set![
    "beatrice", "dominic", "genevieve", "josephine", "julian", "maximilian", "nicolette",
    "octavia", "penelope", "sebastian", "vivienne", "winston", "cassius", "leopold", "margaux",
    "anastasia", "alistair", "theodora", "cornelia", "lorenzo",
];

pub(crate) static PERCEIVED_ADVENTUROUS: NameSet = name_set![
    "atlas", "bear", "blaze", "jack", "journey", "maverick", "phoenix", "ranger", "river",
    "scout", "skye", "wyatt", "amelia", "indiana", "kai", "jett", "dakota", "hunter", "ryder",
    "sierra", "nova", "orion",
];

pub(crate) static PERCEIVED_RELIABLE: NameSet = name_set![
    "david", "james", "john", "joseph", "mary", "michael", "paul", "robert", "susan",
    "thomas", "william", "richard", "linda", "karen", "patricia", "barbara", "steven", "mark",
    "anne", "carol", "donna", "george",
];

pub(crate) static PERCEIVED_KIND: NameSet = name_set![
    "abigail", "amy", "annie", "clara", "grace", "hope", "lucy", "mercy", "molly", "ruth",
    "samuel", "benjamin", "joel", "gentry", "evangeline", "faith", "harmony", "felix", "oliver",
    "emma", "ella",
];

pub(crate) static PERCEIVED_CHARMING: NameSet = name_set![
    "charlie", "chloe", "daisy", "isla", "leo", "lily", "oscar", "rosie", "stella", "theo",
    "archie", "ivy", "louie", "mabel", "posy", "henry", "freddie", "hazel", "ruby",
];

pub(crate) static PERCEIVED_CONFIDENT: NameSet = name_set![
    "blake", "chase", "jordan", "kendall", "logan", "madison", "morgan", "parker", "reese",
    "sloane", "taylor", "tyler", "cameron", "brooke", "alexis", "jade", "jasmine", "kylie",
];

pub(crate) static PERCEIVED_UNIQUE: NameSet = name_set![
    "azalea", "caspian", "cosmo", "dashiell", "evander", "ignatius", "lysander", "marlowe",
    "ottoline", "peregrine", "thisbe", "wilhelmina", "zephyr", "xanthe", "kaia", "soren",
    "everett", "elowen", "isolde", "lark",
];

// ============================================================================
// Desired traits (what a name signals to others)
// ============================================================================

pub(crate) static DESIRED_PROFESSIONAL: NameSet = name_set![
    "alexander", "andrew", "catherine", "charles", "christopher", "daniel", "elizabeth",
    "jennifer", "jonathan", "katherine", "margaret", "michael", "nicholas", "patricia",
    "rebecca", "richard", "robert", "stephanie", "victoria", "william", "benjamin", "caroline",
    "matthew", "jessica", "samantha",
];

pub(crate) static DESIRED_STRENGTH: NameSet = name_set![
    "ethan", "ezekiel", "gideon", "jack", "leon", "maximus", "valentina", "victor", "victoria",
    "bridget", "louise", "matilda", "griffin", "wolf", "ares", "conan", "gunnar", "brianna",
    "alexandra", "kenzie",
];

pub(crate) static DESIRED_CREATIVITY: NameSet = name_set![
    "aria", "arlo", "harmony", "jasper", "juniper", "lyric", "melody", "river", "sage",
    "willow", "wren", "phoenix", "indigo", "rhapsody", "cadence", "sonnet", "leonardo",
];

pub(crate) static DESIRED_WISDOM: NameSet = name_set![
    "sophia", "sophie", "athena", "minerva", "solomon", "alfred", "sage", "raymond",
    "hakeem", "hikma", "prudence", "conrad", "ronald", "sapphira",
];

pub(crate) static DESIRED_UNIQUENESS: NameSet = name_set![
    "nova", "zephyr", "caspian", "xanthe", "ottoline", "azalea", "lysander", "marlowe",
    "elowen", "soren", "kairo", "atlas", "ember", "onyx", "lark", "juno",
];

pub(crate) static DESIRED_TRADITION: NameSet = name_set![
    "mary", "john", "james", "elizabeth", "margaret", "william", "george", "anne", "joseph",
    "thomas", "edward", "catherine", "henry", "charles", "helen", "robert",
];

pub(crate) static DESIRED_KINDNESS: NameSet = name_set![
    "grace", "hope", "mercy", "faith", "charity", "clemency", "amabel", "annie", "abigail",
    "bonnie", "dulce", "joy", "caritas",
];

pub(crate) static DESIRED_LEADERSHIP: NameSet = name_set![
    "alexander", "augustus", "caesar", "elizabeth", "king", "leader", "regina", "reign",
    "rex", "roy", "royal", "victoria", "winston", "kingston", "maximilian", "duke", "marshall",
];

pub(crate) static DESIRED_ELEGANCE: NameSet = name_set![
    "audrey", "celeste", "genevieve", "isabella", "juliette", "ophelia", "seraphina",
    "vivienne", "camille", "colette", "sebastian", "julian", "adrian",
];

// ============================================================================
// Typical reactions
// ============================================================================

pub(crate) static REACTION_COMPLIMENTS: NameSet = name_set![
    "aurora", "celeste", "isabella", "juliette", "luna", "ophelia", "seraphina", "sienna",
    "stella", "vivienne", "willow", "jasper", "sebastian", "elias", "evangeline", "gabriella",
    "serena", "aria", "delilah", "genevieve",
];

pub(crate) static REACTION_MISPRONOUNCED: NameSet = name_set![
    "aoife", "caoimhe", "niamh", "saoirse", "siobhan", "sinead", "xochitl", "joaquin",
    "giovanni", "guillermo", "nguyen", "tadhg", "oisin", "eoin", "ruairi", "dervla", "roisin",
    "przemyslaw", "anais", "chloe", "penelope", "hermione", "persephone", "zoe", "ximena",
];

pub(crate) static REACTION_MISSPELLED: NameSet = name_set![
    "aidan", "ayden", "caitlin", "kaitlyn", "katelyn", "catherine", "katherine", "kathryn",
    "jaxon", "jaxson", "brittany", "britney", "jeffrey", "geoffrey", "sara", "madelyn",
    "madeline", "kristen", "kirsten", "stephen", "steven", "allison", "alyson", "ashleigh",
    "mackenzie", "mckenzie",
];

pub(crate) static REACTION_NICKNAMES: NameSet = name_set![
    "alexander", "alexandra", "anthony", "benjamin", "christopher", "daniel", "elizabeth",
    "jonathan", "joseph", "katherine", "margaret", "michael", "nicholas", "patricia", "robert",
    "samantha", "theodore", "timothy", "victoria", "william", "jennifer", "rebecca", "richard",
    "edward", "abigail", "josephine",
];

pub(crate) static REACTION_FAMOUS: NameSet = name_set![
    "adele", "beyonce", "bruce", "diana", "elvis", "harry", "hermione", "kobe", "lebron",
    "madonna", "marilyn", "oprah", "rihanna", "serena", "shakira", "taylor", "whitney",
    "arya", "khaleesi", "elsa", "ariel", "barack", "michelle", "dolly", "prince",
];

pub(crate) static REACTION_SONG: NameSet = name_set![
    "angie", "caroline", "delilah", "gloria", "jolene", "layla", "lola", "maria", "michelle",
    "roxanne", "sally", "sharona", "annie", "daniel", "jessie", "jude", "rhiannon", "roxanne",
    "valerie", "rosanna", "mandy", "eleanor", "billie", "suzanne", "cecilia",
];

pub(crate) static REACTION_OLD_FASHIONED: NameSet = name_set![
    "agnes", "bertha", "dorothy", "edna", "ethel", "eugene", "gertrude", "gladys", "harold",
    "herbert", "hilda", "irma", "mabel", "mildred", "myrtle", "norman", "oswald", "percy",
    "stanley", "wilbur", "wilma", "doris", "earl", "elmer", "marjorie", "bernice",
];

// ============================================================================
// Geographic / community preference
// ============================================================================

pub(crate) static COMMUNITY_RURAL: NameSet = name_set![
    "beau", "bo", "cody", "colt", "dakota", "dallas", "clay", "jolene", "luke", "tucker",
    "wyatt", "waylon", "cash", "hank", "jesse", "levi", "maybelle", "raelynn", "daisy",
    "savannah", "emmylou", "jed", "boone", "tanner", "garrett", "rhett", "austin", "cheyenne",
    "shelby", "dixie",
];

pub(crate) static COMMUNITY_URBAN: NameSet = name_set![
    "brooklyn", "jaylen", "jalen", "zion", "nova", "london", "paris", "milan", "kairo",
    "journee", "marcus", "malik", "aaliyah", "imani", "sasha", "dante", "andre", "jade",
    "skyler", "elijah", "camila", "luca", "zara",
];

pub(crate) static COMMUNITY_SMALL_TOWN: NameSet = name_set![
    "bobby", "betty", "billy", "carl", "dale", "donna", "earl", "gary", "jimmy", "judy",
    "kenny", "larry", "linda", "peggy", "randy", "ricky", "sherry", "terry", "wanda", "wayne",
];

pub(crate) static COMMUNITY_COASTAL: NameSet = name_set![
    "bay", "brooke", "cove", "coral", "dylan", "kai", "marina", "morgan", "nerissa", "ocean",
    "pearl", "river", "sailor", "shore", "skye", "waverly", "maris", "delmar", "caspian",
];

pub(crate) static COMMUNITY_ACADEMIC: NameSet = name_set![
    "ada", "alistair", "atticus", "eleanor", "evander", "felix", "ignatius", "jules",
    "julian", "margaux", "oliver", "simone", "sylvia", "theodora", "virginia", "ezra",
];

pub(crate) static COMMUNITY_ARTISTIC: NameSet = name_set![
    "bowie", "frida", "harlow", "indie", "lennon", "lyric", "marlowe", "poet", "rain", "river",
    "sage", "story", "wren", "ziggy", "juniper", "arlo",
];

pub(crate) static COMMUNITY_MILITARY: NameSet = name_set![
    "chase", "colt", "duke", "gunner", "hunter", "maverick", "patton", "ranger", "remington",
    "sarge", "sherman", "trooper", "wyatt", "marshall", "archer",
];

// ============================================================================
// Name meaning
// ============================================================================

pub(crate) static MEANING_NATURE: NameSet = name_set![
    "ash", "aspen", "autumn", "birch", "briar", "daisy", "fern", "flora", "forest", "hazel",
    "heather", "iris", "ivy", "juniper", "lily", "linden", "magnolia", "oak", "olive", "river",
    "rose", "rowan", "sage", "violet", "willow", "wren", "laurel", "jasmine", "dahlia",
    "poppy", "clay", "brook", "brooke", "autumn", "summer", "sierra", "skye", "sequoia",
];

pub(crate) static MEANING_STRENGTH: NameSet = name_set![
    "andrew", "bridget", "ethan", "ezekiel", "gabriel", "griffin", "leon", "leonard",
    "louis", "matilda", "maximus", "richard", "valentina", "valerie", "victor", "william",
    "brian", "audrey", "gertrude", "kenzie", "arnold",
];

pub(crate) static MEANING_FAITH: NameSet = name_set![
    "daniel", "elijah", "elizabeth", "emmanuel", "gabriel", "isabella", "jonathan", "joel",
    "john", "joshua", "matthew", "michael", "nathaniel", "raphael", "samuel", "theodore",
    "dorothy", "jesse", "abdullah", "christian", "christopher", "dominic", "eliana", "elise",
];

pub(crate) static MEANING_LIGHT: NameSet = name_set![
    "eleanor", "elaine", "helen", "helena", "lucas", "lucia", "lucy", "luz", "nora", "noor",
    "nour", "roxanne", "zohar", "ellen", "lucian", "aurelia", "kiran", "uriel",
];

pub(crate) static MEANING_LOVE: NameSet = name_set![
    "amy", "amanda", "carys", "davida", "david", "esme", "mabel", "philip", "amara", "amor",
    "aimee", "caridad", "habib", "habiba", "priya", "amadeus", "valentine",
];

pub(crate) static MEANING_ROYALTY: NameSet = name_set![
    "basil", "elroy", "kingston", "leroy", "malik", "regina", "reina", "rex", "roy", "sarah",
    "sara", "kimberly", "henry", "ryan", "eric", "darius", "raja", "rani", "queen", "king",
];

pub(crate) static MEANING_WISDOM: NameSet = name_set![
    "sophia", "sophie", "athena", "minerva", "alfred", "raymond", "hakeem", "sage",
    "conrad", "monica", "prudence",
];

pub(crate) static MEANING_JOY: NameSet = name_set![
    "beatrice", "felicity", "hilary", "isaac", "joy", "leticia", "gaia", "farah", "allegra",
    "beatrix", "yitzchak", "ananda", "joyce", "gioia",
];

pub(crate) static MEANING_PEACE: NameSet = name_set![
    "irene", "frida", "frederick", "geoffrey", "jeffrey", "salome", "solomon", "shlomo",
    "selim", "salma", "paz", "paloma", "winifred", "olivia", "callum",
];

pub(crate) static MEANING_BEAUTY: NameSet = name_set![
    "bella", "belle", "isabella", "annabel", "jamal", "jamila", "kenneth", "hassan",
    "hermosa", "linda", "naomi", "keva", "mirabel", "calliope", "callista",
];

pub(crate) static MEANING_PROTECTION: NameSet = name_set![
    "alexander", "alexandra", "alex", "edmund", "raymond", "william", "wilhelmina", "gunnar",
    "harvey", "marcus", "mark", "mars", "emery", "ezra",
];

pub(crate) static MEANING_PRECIOUS: NameSet = name_set![
    "amber", "beryl", "coral", "crystal", "diamond", "emerald", "esmeralda", "garnet", "jade",
    "jewel", "margaret", "opal", "pearl", "ruby", "sapphire", "goldie",
];

pub(crate) static MEANING_CELESTIAL: NameSet = name_set![
    "astra", "aurora", "celeste", "estelle", "esther", "luna", "nova", "orion", "selene",
    "sky", "skye", "sol", "stella", "star", "soleil", "leo", "vega", "atlas",
];

pub(crate) static MEANING_FAMILY: NameSet = name_set![
    "absalom", "bennett", "dawson", "emerson", "jackson", "johnson", "madison", "mason",
    "nelson", "patrick", "wilson", "harrison", "anderson", "paxton",
];

// ============================================================================
// Language origin
// ============================================================================

pub(crate) static LANG_HEBREW: NameSet = name_set![
    "aaron", "abigail", "abraham", "adam", "ariel", "asher", "benjamin", "caleb", "daniel",
    "david", "deborah", "eli", "elijah", "elizabeth", "esther", "eve", "ezra", "gabriel",
    "hannah", "isaac", "isaiah", "jacob", "jonathan", "joseph", "joshua", "judah", "leah",
    "levi", "michael", "miriam", "naomi", "nathan", "noah", "rachel", "rebecca", "ruth",
    "samuel", "sarah", "seth", "shira", "talia", "tobias", "yael", "zachary", "john", "mary",
    "anna", "hannah", "james", "matthew", "ethan", "micah", "jonah", "eden", "delilah",
];

pub(crate) static LANG_LATIN: NameSet = name_set![
    "adrian", "augustus", "aurelia", "beatrice", "cecilia", "clara", "claudia", "emily",
    "felix", "julia", "julian", "laura", "lucas", "lucy", "marcus", "maxwell", "miranda",
    "olivia", "patrick", "victoria", "vincent", "valentina", "luna", "stella", "vera",
    "amanda", "diana", "silas", "dominic", "clement", "justin", "regina", "cora", "aurora",
    "celeste", "sebastian", "camilla", "octavia",
];

pub(crate) static LANG_GREEK: NameSet = name_set![
    "alexander", "alexis", "andrew", "anastasia", "athena", "calliope", "chloe", "christopher",
    "cora", "damian", "daphne", "dorothy", "helen", "irene", "jason", "margaret", "nicholas",
    "penelope", "peter", "philip", "phoebe", "selena", "sophia", "stephen", "theodore",
    "thea", "timothy", "zoe", "xander", "ophelia", "georgia", "george", "catherine",
    "katherine", "kathryn", "hermione", "leander",
];

pub(crate) static LANG_GERMANIC: NameSet = name_set![
    "adelaide", "albert", "alice", "archibald", "arnold", "bernard", "charles", "conrad",
    "edith", "emma", "ernest", "frederick", "gerald", "harold", "henry", "herbert", "hilda",
    "louis", "matilda", "otto", "raymond", "richard", "robert", "roger", "walter", "william",
    "wilhelmina", "leonard", "gunnar", "carl", "karl", "heidi", "gretchen", "hans", "frida",
];

pub(crate) static LANG_ENGLISH: NameSet = name_set![
    "ashley", "ashton", "audrey", "bailey", "bradley", "brooke", "chester", "dawson",
    "edmund", "edward", "edwin", "harper", "hayden", "hunter", "kimberly", "mason", "mildred",
    "parker", "shelby", "taylor", "tyler", "wesley", "whitney", "wyatt", "hailey", "riley",
    "madison", "emerson", "beverly", "shirley", "sydney", "bentley", "paisley", "everett",
];

pub(crate) static LANG_IRISH: NameSet = name_set![
    "aidan", "aiden", "aoife", "brendan", "bridget", "caoimhe", "ciara", "colin", "connor",
    "declan", "eileen", "eoin", "erin", "fiona", "kathleen", "keegan", "kieran", "liam",
    "maeve", "niamh", "nora", "oisin", "patrick", "quinn", "riley", "ronan", "rory",
    "saoirse", "seamus", "sean", "shannon", "siobhan", "sinead", "tadhg", "brady", "casey",
    "cormac", "finn", "kelly", "kennedy", "reagan", "teagan", "sloane", "ryan", "kevin",
];

pub(crate) static LANG_SCOTTISH: NameSet = name_set![
    "ainsley", "alistair", "blair", "callum", "cameron", "douglas", "duncan", "ewan",
    "fraser", "graham", "hamish", "isla", "kenzie", "kirsty", "lachlan", "leslie",
    "mackenzie", "malcolm", "murray", "ross", "skye", "sutherland", "logan", "kenneth",
];

pub(crate) static LANG_WELSH: NameSet = name_set![
    "bronwyn", "carys", "cerys", "dylan", "emrys", "evan", "gareth", "gwen", "gwendolyn",
    "megan", "morgan", "owen", "rhiannon", "rhys", "sian", "tegan", "trevor", "elowen",
];

pub(crate) static LANG_CELTIC: NameSet = name_set![
    "arthur", "bryn", "brian", "donovan", "kai", "neil", "tristan", "isolde", "rowan",
    "brenna", "keira", "kyle", "fergus",
];

pub(crate) static LANG_FRENCH: NameSet = name_set![
    "amelie", "andre", "antoine", "aubrey", "beau", "belle", "camille", "celine", "claude",
    "colette", "dominique", "elise", "estelle", "genevieve", "jacques", "jean", "juliette",
    "laurent", "louise", "madeleine", "margaux", "marcel", "monique", "noelle", "pierre",
    "remy", "simone", "sylvie", "yvette", "renee", "vivienne", "adrienne", "charlotte",
    "caroline", "jolene", "olive", "bernadette", "sophie", "josephine", "lionel", "leroy",
];

pub(crate) static LANG_ITALIAN: NameSet = name_set![
    "alessandro", "allegra", "angelo", "antonio", "bianca", "carlo", "enzo", "francesca",
    "gianna", "gino", "giovanni", "giuseppe", "isabella", "leonardo", "lorenzo", "luca",
    "marco", "matteo", "mia", "nico", "paolo", "rocco", "sienna", "sofia", "vincenzo",
    "donatella", "serena", "gabriella", "dante", "romeo", "bella", "gia",
];

pub(crate) static LANG_SPANISH: NameSet = name_set![
    "alejandro", "alondra", "carlos", "carmen", "diego", "dolores", "esperanza", "fernando",
    "guadalupe", "javier", "jimena", "jorge", "jose", "juan", "lola", "lucia", "luis",
    "marisol", "mateo", "mercedes", "miguel", "paloma", "pedro", "santiago", "ximena",
    "valeria", "camila", "catalina", "esmeralda", "paz", "raul", "ramon", "rosario",
    "joaquin", "luz", "pilar", "consuelo", "rafael", "sergio", "hector",
];

pub(crate) static LANG_PORTUGUESE: NameSet = name_set![
    "joao", "tiago", "goncalo", "afonso", "leonor", "beatriz", "ines", "luana", "thiago",
    "vitoria", "rodrigo", "duarte", "bruna", "caio",
];

pub(crate) static LANG_DUTCH: NameSet = name_set![
    "anouk", "bram", "daan", "femke", "joost", "lotte", "maarten", "pieter", "sanne", "sven",
    "wouter", "annika", "jansen", "ruud",
];

pub(crate) static LANG_SCANDINAVIAN: NameSet = name_set![
    "astrid", "bjorn", "dagny", "erik", "freya", "gunnar", "ingrid", "kirsten", "lars",
    "leif", "magnus", "nils", "olaf", "sigrid", "soren", "stellan", "thor", "axel", "linnea",
    "elsa", "greta", "ivar", "liv", "maja", "anders", "henrik", "kristian", "eric", "erica",
];

pub(crate) static LANG_RUSSIAN: NameSet = name_set![
    "anastasia", "boris", "dmitri", "ivan", "katya", "mikhail", "natasha", "nikolai", "olga",
    "pavel", "sasha", "sergei", "svetlana", "tatiana", "vladimir", "yuri", "anya", "nadia",
    "mila", "vera", "alexei", "igor", "oksana", "galina", "lyudmila", "misha",
];

pub(crate) static LANG_POLISH: NameSet = name_set![
    "agnieszka", "bartosz", "jakub", "janina", "kasia", "krzysztof", "lukasz", "malgorzata",
    "piotr", "stanislaw", "tomasz", "wojciech", "zofia", "przemyslaw", "wanda", "kazimierz",
];

pub(crate) static LANG_ARABIC: NameSet = name_set![
    "ahmed", "aisha", "ali", "amir", "amira", "fatima", "hamza", "hassan", "ibrahim",
    "jamal", "jamila", "karim", "khalid", "layla", "leila", "malik", "mohammed", "muhammad",
    "nadia", "omar", "rania", "samir", "samira", "tariq", "yasmin", "yusuf", "zainab",
    "zara", "zayn", "noor", "nour", "amina", "bilal", "rashid", "kareem", "aaliyah",
    "khadija", "hana", "salma", "habiba", "farah", "imani",
];

pub(crate) static LANG_PERSIAN: NameSet = name_set![
    "arash", "cyrus", "darius", "dariush", "farid", "jasmine", "kian", "laleh", "mahsa",
    "navid", "parisa", "roxana", "roxanne", "shirin", "soraya", "esther", "azar", "bahram",
];

pub(crate) static LANG_TURKISH: NameSet = name_set![
    "aylin", "burak", "cem", "deniz", "elif", "emre", "kerem", "mehmet", "murat", "ozan",
    "selim", "tuba", "yusuf", "zeynep", "osman", "ayla", "can", "baris",
];

pub(crate) static LANG_SANSKRIT: NameSet = name_set![
    "ananda", "ananya", "arjun", "chandra", "devi", "dharma", "durga", "ganesh", "kavya",
    "krishna", "lakshmi", "mahesh", "maya", "padma", "parvati", "radha", "rama", "sita",
    "shiva", "siddhartha", "uma", "vishnu", "aditya", "indira", "karma", "kiran", "tara",
];

pub(crate) static LANG_HINDI: NameSet = name_set![
    "aarav", "aarti", "anjali", "deepak", "deepa", "divya", "isha", "ishaan", "meera",
    "neha", "nikhil", "pooja", "priya", "rahul", "raj", "rajesh", "ravi", "riya", "rohan",
    "saanvi", "sanjay", "shreya", "sunita", "vijay", "vikram", "arnav", "diya", "rohit",
    "varun", "vivek",
];

pub(crate) static LANG_PUNJABI: NameSet = name_set![
    "amandeep", "amrit", "balwinder", "gurdeep", "gurpreet", "harjit", "harpreet", "hardeep",
    "jaspreet", "jaswinder", "manpreet", "navdeep", "simran", "sukhwinder", "harleen",
    "jasleen", "gurleen", "arjan",
];

pub(crate) static LANG_CHINESE: NameSet = name_set![
    "an", "bao", "chen", "fang", "hua", "jing", "jun", "lan", "lei", "li", "lin", "mei",
    "ming", "ping", "qing", "wei", "xiao", "xin", "yan", "ying", "yu", "zhi", "zhen", "hui",
    "jian", "hong",
];

pub(crate) static LANG_JAPANESE: NameSet = name_set![
    "akira", "aiko", "emi", "haruki", "hana", "hiro", "hiroshi", "kaito", "kenji", "kenzo",
    "keiko", "kiyoshi", "mai", "makoto", "naomi", "ren", "riku", "sakura", "takeshi", "yuki",
    "yumi", "yuna", "sora", "haru", "kai",
];

pub(crate) static LANG_KOREAN: NameSet = name_set![
    "ha-eun", "hyun", "jae", "ji-ho", "ji-woo", "jin", "joon", "min-jun", "minho", "seo-yeon",
    "soo-ah", "sung", "yeon", "young", "eun", "hye", "jiwoo", "seojun", "minjun", "seoyeon",
];

pub(crate) static LANG_VIETNAMESE: NameSet = name_set![
    "anh", "bao", "binh", "duc", "hai", "hieu", "hoa", "huong", "khanh", "lan", "linh",
    "minh", "nam", "ngoc", "nguyen", "phuong", "quang", "thanh", "thao", "trang", "tuan",
    "tuyet",
];

pub(crate) static LANG_SWAHILI: NameSet = name_set![
    "amani", "baraka", "imani", "jabari", "jamila", "kamaria", "nia", "neema", "rehema",
    "zuri", "asha", "baraka", "faraji", "hasani", "kito", "makena", "nuru", "zawadi",
];

pub(crate) static LANG_YORUBA: NameSet = name_set![
    "ade", "adebayo", "ayodele", "ayo", "babajide", "folami", "kayode", "oluwaseun",
    "olumide", "temitope", "tunde", "yetunde", "femi", "funmilayo", "dayo", "ayanna",
];

pub(crate) static LANG_IGBO: NameSet = name_set![
    "adaeze", "chidi", "chika", "chinwe", "chioma", "chukwuma", "ebele", "emeka", "ifeoma",
    "ikenna", "ngozi", "nkechi", "obinna", "uchenna", "amara", "chiamaka", "kelechi",
];

pub(crate) static LANG_HAWAIIAN: NameSet = name_set![
    "akoni", "alana", "kai", "kailani", "kalani", "kanoa", "keanu", "keala", "leilani",
    "lani", "makana", "malia", "moana", "nalani", "noelani", "kainoa", "mana",
];

pub(crate) static LANG_NATIVE_AMERICAN: NameSet = name_set![
    "aiyana", "cheyenne", "chayton", "dakota", "dyani", "halona", "kimi", "koda", "nayeli",
    "sequoia", "shania", "sakari", "tallulah", "winona", "yuma", "aponi", "takoda", "kiona",
];

pub(crate) static LANG_MODERN: NameSet = name_set![
    "aubree", "braylen", "brayden", "brynlee", "everleigh", "jaxon", "jayden", "kaylee",
    "kinsley", "nevaeh", "oaklynn", "raelynn", "kayden", "jaylah", "khaleesi", "londyn",
    "journee", "legend", "maverick", "ryker", "kairo", "zaylee", "jaylen", "jalen",
    "deshawn", "keshawn", "dashawn", "shaniqua", "tanisha", "latoya", "keisha", "lakisha",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_lower_case() {
        let lists: [&NameSet; 8] = [
            &OLD_TESTAMENT_MALE,
            &CHRISTIAN_FEMALE,
            &MUSLIM_MALE,
            &HISTORICAL_CLASSIC,
            &MODERN_TRENDY,
            &LANG_IRISH,
            &MEANING_NATURE,
            &REACTION_MISPRONOUNCED,
        ];
        for list in lists {
            assert!(!list.is_empty());
            for name in list.iter() {
                assert_eq!(*name, name.to_lowercase());
            }
        }
    }
}
