//! Configuration and constants for measurement building.

/// Current measurement batch schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Series names as they appear in the backend
pub const SERIES_INVENTORY: &str = "rs_inventory";
pub const SERIES_SKILL: &str = "rs_skill";
pub const SERIES_SELF: &str = "rs_self";
pub const SERIES_SELF_LOC: &str = "rs_self_loc";
pub const SERIES_KILL_COUNT: &str = "rs_killcount";
pub const SERIES_ACTIVITY: &str = "rs_activity";
pub const SERIES_LOOT: &str = "rs_loot";

/// Tag every series must carry with a non-empty value
pub const TAG_USER: &str = "user";

pub const FIELD_LOC_X: &str = "locX";
pub const FIELD_LOC_Y: &str = "locY";
pub const FIELD_PLANE: &str = "plane";

// Item ids with special handling
pub const ITEM_COINS: i32 = 995;
pub const ITEM_PLATINUM_TOKEN: i32 = 13_204;
pub const ITEM_BANK_FILLER: i32 = 20_594;

/// Platinum tokens trade 1:1000 against coins
pub const PLATINUM_TOKEN_VALUE: i64 = 1_000;

/// Market or alchemy value above which a stack is tracked on its own
pub const HIGH_VALUE_THRESHOLD: i64 = 50_000;

/// High alchemy pays 60% of the store price
pub const HIGH_ALCHEMY_MULTIPLIER: f64 = 0.6;

// Status variable slots
pub const VARP_QUEST_POINTS: i32 = 101;
pub const VARBIT_LEAGUE_TASKS: i32 = 10_046;
pub const VARP_LEAGUE_POINTS: i32 = 2_614;

// Persisted config groups written by the chat commands plugin
pub const KILL_COUNT_CFG_PREFIX: &str = "killcount.";
pub const PERSONAL_BEST_CFG_PREFIX: &str = "personalbest.";

pub const DEFAULT_PLAYER_NAME: &str = "none";
pub const DEFAULT_OVERHEAD: &str = "NONE";

/// Highest level reachable through experience alone
pub const MAX_VIRTUAL_LEVEL: i32 = 126;

// Scene geometry
pub const CHUNK_SIZE: i32 = 8;
pub const SCENE_SIZE: i32 = 104;
pub const MAX_PLANES: usize = 4;

/// Map regions of the Last Man Standing arenas
pub const LMS_REGION_IDS: [i32; 15] = [
    13658, 13659, 13660, 13914, 13915, 13916, 13918, 13919, 13920, 14174, 14175, 14176, 14430,
    14431, 14432,
];
