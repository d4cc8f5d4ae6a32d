//! Built-in token lists, keyed by token character.
//!
//! | key | content |
//! |-----|---------|
//! | `s` | generic syllable |
//! | `v` | vowel |
//! | `V` | vowel or vowel combination |
//! | `c` | consonant |
//! | `B` | consonant or cluster suitable for beginning a word |
//! | `C` | consonant or cluster suitable anywhere in a word |
//! | `i` | insult |
//! | `m` | mushy name |
//! | `M` | mushy name ending |
//! | `D` | consonant suited for a stupid person's name |
//! | `d` | syllable suited for a stupid person's name (begins with a vowel) |
//! | `t` | title placed before a name |
//! | `T` | epithet placed after a name |

const SYLLABLES: &[&str] = &[
	"ach", "ack", "ad", "age", "ald", "ale", "an", "ang", "ar", "ard",
	"as", "ash", "at", "ath", "augh", "aw", "ban", "bel", "bur", "cer",
	"cha", "che", "dan", "dar", "del", "den", "dra", "dyn", "ech", "eld",
	"elm", "em", "en", "end", "eng", "enth", "er", "ess", "est", "et",
	"gar", "gha", "hat", "hin", "hon", "ia", "ight", "ild", "im", "ina",
	"ine", "ing", "ir", "is", "iss", "it", "kal", "kel", "kim", "kin",
	"ler", "lor", "lye", "mor", "mos", "nal", "ny", "nys", "old", "om",
	"on", "or", "orm", "os", "ough", "per", "pol", "qua", "que", "rad",
	"rak", "ran", "ray", "ril", "ris", "rod", "roth", "ryn", "sam",
	"say", "ser", "shy", "skel", "sul", "tai", "tan", "tas", "ther",
	"tia", "tin", "ton", "tor", "tur", "um", "und", "unt", "urn", "usk",
	"ust", "ver", "ves", "vor", "war", "wor", "yer",
];

const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "y"];

const VOWEL_COMBINATIONS: &[&str] = &[
	"a", "e", "i", "o", "u", "y", "ae", "ai", "au", "ay", "ea", "ee",
	"ei", "eu", "ey", "ia", "ie", "oe", "oi", "oo", "ou", "ui",
];

const CONSONANTS: &[&str] = &[
	"b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "q", "r",
	"s", "t", "v", "w", "x", "y", "z",
];

const BEGINNING_CLUSTERS: &[&str] = &[
	"b", "bl", "br", "c", "ch", "chr", "cl", "cr", "d", "dr", "f", "g",
	"h", "j", "k", "l", "ll", "m", "n", "p", "ph", "qu", "r", "rh", "s",
	"sch", "sh", "sl", "sm", "sn", "st", "str", "sw", "t", "th", "thr",
	"tr", "v", "w", "wh", "y", "z", "zh",
];

const ANYWHERE_CLUSTERS: &[&str] = &[
	"b", "c", "ch", "ck", "d", "f", "g", "gh", "h", "k", "l", "ld", "ll",
	"lt", "m", "n", "nd", "nn", "nt", "p", "ph", "q", "r", "rd", "rr",
	"rt", "s", "sh", "ss", "st", "t", "th", "v", "w", "y", "z",
];

const INSULTS: &[&str] = &[
	"air", "ankle", "ball", "beef", "bone", "bum", "bumble", "bump",
	"cheese", "clod", "clot", "clown", "corn", "dip", "dolt", "doof",
	"dork", "dumb", "face", "finger", "foot", "fumble", "goof",
	"grumble", "head", "knock", "knocker", "knuckle", "loaf", "lump",
	"lunk", "meat", "muck", "munch", "nit", "numb", "pin", "puff",
	"skull", "snark", "sneeze", "thimble", "twerp", "twit", "wad",
	"wimp", "wipe",
];

const MUSHY: &[&str] = &[
	"baby", "booble", "bunker", "cuddle", "cuddly", "cutie", "doodle",
	"foofie", "gooble", "honey", "kissie", "lover", "lovey", "moofie",
	"mooglie", "moopie", "moopsie", "nookum", "poochie", "poof",
	"poofie", "pookie", "schmoopie", "schnoogle", "schnookie",
	"schnookum", "smooch", "smoochie", "smoosh", "snoogle", "snoogy",
	"snookie", "snookum", "snuggy", "sweetie", "woogle", "woogy",
	"wookie", "wookum", "wuddle", "wuddly", "wuggy", "wunny",
];

const MUSHY_ENDINGS: &[&str] = &[
	"boo", "bunch", "bunny", "cake", "cakes", "cute", "darling",
	"dumpling", "dumplings", "face", "foof", "goo", "head", "kin",
	"kins", "lips", "love", "mush", "pie", "poo", "pooh", "pook", "pums",
];

const SILLY_CONSONANTS: &[&str] = &[
	"b", "bl", "br", "cl", "d", "f", "fl", "fr", "g", "gh", "gl", "gr",
	"h", "j", "k", "kl", "m", "n", "p", "th", "w",
];

const SILLY_SYLLABLES: &[&str] = &[
	"elch", "idiot", "ob", "og", "ok", "olph", "olt", "omph", "ong",
	"onk", "oo", "oob", "oof", "oog", "ook", "ooz", "org", "ork", "orm",
	"oron", "ub", "uck", "ug", "ulf", "ult", "um", "umb", "ump", "umph",
	"un", "unb", "ung", "unk", "unph", "unt", "uzz",
];

const TITLE_PREFIXES: &[&str] = &[
	"archmage", "baron", "baroness", "captain", "count", "countess",
	"duchess", "duke", "high priest", "keeper", "knight", "lady", "lord",
	"master", "mistress", "prince", "princess", "sage", "sir", "warden",
];

const TITLE_SUFFIXES: &[&str] = &[
	"of the burning sands", "of the deep", "of the east", "of the mountain",
	"of the north", "of the south", "of the vale", "of the west", "the bold",
	"the brave", "the cunning", "the elder", "the fair", "the grim",
	"the lost", "the undying", "the unwise", "the wanderer", "the wise",
	"the younger",
];

/// Every built-in list, in table order.
pub(crate) const BUILTIN_TOKENS: &[(char, &[&str])] = &[
	('s', SYLLABLES),
	('v', VOWELS),
	('V', VOWEL_COMBINATIONS),
	('c', CONSONANTS),
	('B', BEGINNING_CLUSTERS),
	('C', ANYWHERE_CLUSTERS),
	('i', INSULTS),
	('m', MUSHY),
	('M', MUSHY_ENDINGS),
	('D', SILLY_CONSONANTS),
	('d', SILLY_SYLLABLES),
	('t', TITLE_PREFIXES),
	('T', TITLE_SUFFIXES),
];
