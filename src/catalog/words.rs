//! Built-in word lists.
//!
//! Each list is lowercase ASCII, at most six characters per word, sorted and
//! free of duplicates. No word appears in more than one list, so the combined
//! pool never contains the same word twice.

/// Trees, flowers, herbs, crops and other plants (329 words)
pub(crate) const PLANTS: &[&str] = &[
    "abelia", "acacia", "acorn", "agave", "ajuga", "alder", "alfa", "allium", "aloe", "anise",
    "apple", "aralia", "areca", "arnica", "aronia", "arum", "aspen", "aster", "avens", "azalea",
    "azolla", "bael", "bajra", "balm", "balsa", "balsam", "bamboo", "banana", "banyan", "baobab",
    "barley", "basil", "bean", "beech", "beet", "betony", "bhang", "birch", "bluet", "borage",
    "box", "briar", "brier", "brome", "broom", "bryony", "buchu", "bugle", "burnet", "cacao",
    "cactus", "calla", "camas", "canna", "caper", "carex", "carob", "cassia", "cassie", "catnip",
    "celery", "celtis", "chard", "chia", "chive", "chufa", "cicely", "citrus", "clove", "clover",
    "coca", "cohosh", "cola", "coleus", "cork", "corn", "cosmos", "cowpea", "cress", "crocus",
    "cumin", "cycad", "dahlia", "daisy", "damson", "daphne", "date", "dhal", "dill", "dock",
    "dodder", "durian", "durra", "eddo", "elder", "elm", "elodea", "emmer", "endive", "erica",
    "eryngo", "fava", "feijoa", "fennel", "fescue", "ficus", "fig", "fir", "fonio", "furze",
    "fustic", "galax", "galium", "garlic", "gilia", "ginkgo", "gorse", "gourd", "gram", "guar",
    "guava", "hakea", "heath", "hebe", "hedera", "hemp", "henbit", "holly", "hops", "hosta",
    "hyssop", "ilex", "iris", "iroko", "ivy", "jalap", "jarrah", "jicama", "jojoba", "jute", "kaki",
    "kale", "kapok", "karela", "karri", "kauri", "kava", "kenaf", "khat", "kudzu", "lablab",
    "larch", "laurel", "leek", "lentil", "liana", "lichen", "lily", "linden", "loofah", "loquat",
    "lovage", "luffa", "lupin", "lupine", "lychee", "mache", "madder", "mallow", "mamey", "maple",
    "marula", "matai", "medick", "medlar", "melic", "millet", "milo", "mimosa", "mulga", "myrrh",
    "myrtle", "nard", "neem", "nerine", "nettle", "nipa", "nopal", "nuphar", "oak", "oat", "oats",
    "oca", "okra", "onion", "ophrys", "orach", "orpine", "orris", "osier", "oxalis", "oxlip",
    "padauk", "paeony", "palm", "pansy", "papaya", "pawpaw", "pea", "peanut", "pear", "pecan",
    "peony", "pepper", "peyote", "phlox", "pili", "pine", "pinon", "pinyon", "pipal", "pitaya",
    "poke", "pomelo", "poplar", "potato", "privet", "protea", "pteris", "quince", "quinoa",
    "radish", "ramie", "ramp", "ramson", "rata", "rattan", "redbud", "reed", "reseda", "rhus",
    "rice", "rimu", "roble", "rocket", "rowan", "rubus", "rue", "rush", "ruta", "rye", "sabal",
    "sago", "salal", "salix", "sallow", "salvia", "sapote", "savin", "savory", "scilla", "sedge",
    "sedum", "senega", "senna", "sesame", "shea", "silene", "sisal", "sloe", "smilax", "sotol",
    "soy", "spelt", "spruce", "squash", "squill", "stevia", "styrax", "sumac", "sundew", "swede",
    "tagua", "tansy", "taro", "tawa", "tea", "teak", "teff", "thrift", "thyme", "tilia", "toyon",
    "tulip", "tupelo", "turnip", "tutsan", "tutu", "typha", "ugli", "ulex", "ulmus", "ume", "urd",
    "urena", "vetch", "vinca", "vine", "viola", "vitis", "wasabi", "wattle", "wicken", "willow",
    "woad", "yacon", "yam", "yampa", "yarrow", "yaupon", "yerba", "yew", "yucca", "yuzu", "zamia",
    "zea", "zinnia", "zizia", "zoysia",
];

/// Mammals, birds, fish, reptiles and invertebrates (301 words)
pub(crate) const ANIMALS: &[&str] = &[
    "addax", "adder", "agouti", "alpaca", "anole", "ant", "ape", "aphid", "argali", "asp", "auk",
    "avocet", "baboon", "badger", "bass", "bat", "bear", "beaver", "bee", "beetle", "beluga",
    "bison", "boar", "bobcat", "bongo", "bonobo", "booby", "bream", "bull", "bunny", "burbot",
    "caiman", "carp", "cat", "cavy", "chimp", "chough", "chub", "cicada", "civet", "clam", "cobra",
    "cod", "colt", "conch", "condor", "coot", "cougar", "cow", "coyote", "crab", "crake", "crane",
    "crow", "cuckoo", "curlew", "cuscus", "dace", "darter", "deer", "dhole", "dingo", "dodo", "dog",
    "donkey", "dory", "drake", "drill", "duck", "dugong", "dunlin", "eagle", "eel", "egret",
    "eider", "eland", "elk", "emu", "ermine", "falcon", "ferret", "filly", "finch", "fluke", "fly",
    "fox", "frog", "galago", "gannet", "gar", "gaur", "gecko", "genet", "gerbil", "gibbon", "gnat",
    "gnu", "goat", "goby", "goose", "gopher", "grebe", "grison", "grouse", "grub", "gull", "gundi",
    "guppy", "hake", "hare", "hawk", "hen", "heron", "hippo", "hog", "hoopoe", "hornet", "horse",
    "hound", "hyena", "hyrax", "ibex", "ibis", "iguana", "impala", "jackal", "jaguar", "jay",
    "jerboa", "kakapo", "kea", "kite", "kiwi", "koala", "kob", "koi", "krill", "kudu", "lamb",
    "langur", "lark", "leech", "lemur", "liger", "lion", "lizard", "llama", "locust", "loon",
    "loris", "lory", "louse", "lynx", "macaw", "magpie", "mako", "mamba", "margay", "marlin",
    "marmot", "marten", "merlin", "midge", "mink", "minnow", "moa", "mole", "molly", "monkey",
    "moose", "moray", "moth", "motmot", "mouse", "mule", "murre", "mussel", "mynah", "nene", "newt",
    "numbat", "nutria", "ocelot", "okapi", "olm", "orca", "oribi", "oriole", "oryx", "osprey",
    "otter", "ounce", "owl", "ox", "paca", "panda", "parrot", "perch", "petrel", "pig", "pigeon",
    "pike", "pipit", "plover", "pony", "possum", "prawn", "puffer", "puffin", "puma", "python",
    "quagga", "quail", "quelea", "quokka", "rabbit", "rail", "ram", "rat", "ratel", "ray", "rhea",
    "rhino", "roach", "robin", "roe", "rook", "ruff", "saiga", "seal", "serval", "shad", "shark",
    "sheep", "shrew", "shrimp", "siskin", "skate", "skink", "skunk", "sloth", "slug", "smelt",
    "snail", "snake", "snipe", "snook", "sole", "sow", "spider", "squab", "squid", "steer", "stilt",
    "stoat", "stork", "swan", "swift", "tahr", "takin", "tapir", "tarpon", "tayra", "tenrec",
    "tern", "tetra", "thrush", "tick", "tiger", "titi", "toad", "toucan", "trogon", "trout", "tui",
    "tuna", "turkey", "turtle", "urchin", "vicuna", "viper", "vole", "wahoo", "walrus", "wapiti",
    "wasp", "weasel", "weevil", "whale", "whelk", "whydah", "wisent", "wolf", "wombat", "worm",
    "wren", "yabby", "yak", "zebra", "zebu", "zorse",
];

/// Color names, including paint and pigment names (227 words)
pub(crate) const COLORS: &[&str] = &[
    "almond", "amber", "aqua", "ash", "ashen", "auburn", "azure", "bark", "bay", "beige", "berry",
    "bisque", "bistre", "black", "blond", "blonde", "blue", "blush", "bone", "brandy", "brass",
    "brick", "bronze", "brown", "buff", "butter", "camel", "cameo", "canary", "candy", "carrot",
    "cedar", "cement", "cerise", "chalk", "char", "cherry", "chili", "chrome", "cider", "cinder",
    "citron", "claret", "clay", "cloud", "cobalt", "cocoa", "coffee", "cognac", "copper", "coral",
    "cotton", "cream", "cyan", "dawn", "denim", "desert", "dijon", "dirt", "dove", "drab", "dun",
    "dusk", "dust", "ebony", "ecru", "fallow", "fawn", "fern", "fire", "flame", "flax", "flint",
    "fog", "forest", "frost", "garnet", "ghost", "ginger", "glow", "gold", "grape", "grass",
    "gravel", "gray", "green", "grey", "haze", "hazel", "henna", "honey", "hunter", "ice", "indigo",
    "ink", "iron", "ivory", "jade", "jasper", "jet", "jungle", "kelp", "khaki", "lagoon", "latte",
    "lava", "lead", "leaf", "lemon", "lilac", "lime", "linen", "liver", "lotus", "maize", "malt",
    "mango", "marble", "marine", "maroon", "mauve", "melon", "merlot", "metal", "milk", "mint",
    "mist", "mocha", "moss", "mud", "navy", "nectar", "neon", "nickel", "night", "noir", "nude",
    "nutmeg", "ocean", "ochre", "olive", "onyx", "opal", "orange", "orchid", "oyster", "paper",
    "pastel", "peach", "pearl", "pebble", "petal", "pewter", "pied", "pink", "pitch", "plum",
    "pollen", "poppy", "powder", "puce", "purple", "quartz", "rain", "raisin", "raven", "red",
    "reef", "river", "roan", "rose", "rosy", "rouge", "ruby", "ruddy", "rum", "russet", "rust",
    "sable", "sage", "sahara", "salmon", "sand", "sepia", "shadow", "shell", "sherry", "sienna",
    "silk", "silver", "sky", "slate", "smoke", "smoky", "snow", "soot", "sorrel", "spice", "steel",
    "stone", "storm", "straw", "sun", "sunset", "syrup", "tan", "tar", "taupe", "tawny", "teal",
    "terra", "toast", "toffee", "tomato", "topaz", "tundra", "umber", "velvet", "violet", "walnut",
    "wax", "wheat", "white", "wine", "wood", "yellow", "zinc",
];
