//! Static session configuration: widget titles and the change-type and
//! gitmoji catalogs. Catalog order is the presentation order and is fixed
//! here once; the widgets never reorder entries.

pub const TITLE: &str = "CONVENTIONAL COMMITS CLI";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REPO_MARK: &str = "📦";
pub const BRANCH_MARK: &str = "🌲";
pub const REMOTE_MARK: &str = "👾";

pub const TYPE_TITLE: &str = "1. Select the type of change";
pub const GITMOJI_TITLE: &str = "2. Select a gitmoji";
pub const SHORT_DESC_TITLE: &str = "3. Write a Short Description";
pub const LONG_DESC_TITLE: &str = "4. Write a Longer Description";

/// Conventional-commit change types, keyed by the (upper-case) tag that is
/// lower-cased into the final message.
pub const CHANGE_TYPES: &[(&str, &str)] = &[
    ("FEAT", "Adds or remove new feature"),
    ("FIX", "Fixes a bug"),
    ("REFACTOR", "Restructure the code"),
    ("PERF", "Improve Performance"),
    ("STYLE", "White-space, formatting, etc."),
    ("TEST", "Add missing tests or correcting"),
    ("DOCS", "Affect documentation only"),
    ("BUILD", "Affect build components"),
    ("OPS", "Affect operational components"),
    ("CHORE", "Miscellaneous commits"),
];

/// Gitmoji catalog, keyed by the emoji that lands in the final message.
pub const GITMOJI: &[(&str, &str)] = &[
    ("✨", ":sparkles: Introduce new features"),
    ("🎨", ":art: Improve structure of the code"),
    ("⚡", ":zap: Improve performance"),
    ("🔥", ":fire: Remove code or files"),
    ("🐛", ":bug: Fix a bug"),
    ("🚑", ":ambulance: Critical hotfix"),
    ("📝", ":memo: Add or update documentation"),
    ("🚀", ":rocket: Deploy stuff"),
    ("🎉", ":tada: Begin a project"),
    ("✅", ":white_check_mark: Add, update, or pass tests"),
    ("🔒", ":lock: Fix security or privacy issue"),
    ("🔐", ":closed_lock_with_key: Add or update secrets"),
    ("🔖", ":bookmark: Release/Versions tags"),
    ("🚨", ":rotating_light: Fix compiler/linter warnings"),
    ("🚧", ":construction: Work in progress"),
    ("💚", ":green_heart: Fix CI Build"),
    ("⬇", ":arrow_down: Downgrade dependencies"),
    ("⬆", ":arrow_up: Upgrade dependencies"),
    ("📌", ":pushpin: Pin dependencies to specific version"),
    ("👷", ":construction_worker: Add or update CI system"),
    ("♻", ":recycle: Refactor code"),
    ("➕", ":heavy_plus_sign: Add a dependency"),
    ("➖", ":heavy_minus_sign: Remove a dependency"),
    ("🔧", ":wrench: Add or update configuration files"),
    ("🔨", ":hammer: Add or update development scripts"),
    ("✏", ":pencil2: Fix typos"),
    ("💩", ":poop: Write bad code that needs to be improved"),
    ("⏪", ":rewind: Revert changes"),
    ("🔀", ":twisted_rightwards_arrows: Merge branches"),
    ("📦", ":package: Add or update compiled packages"),
    ("👽", ":alien: Update code due to external API changes"),
    ("🚚", ":truck: Move or renamed resources (paths, ...)"),
    ("💥", ":boom: Introduce breaking changes"),
    ("🍱", ":bento: Add or update assets"),
    ("🔊", ":loud_sound: Add or update logs"),
    ("🔇", ":mute: Remove logs"),
    ("🏗", ":building_construction: Make architectural changes"),
    ("🤡", ":clown_face: Mock things"),
    ("🙈", ":see_no_evil: Add or update a .gitignore file"),
    ("⚰", ":coffin: Remove dead code"),
    ("🧪", ":test_tube: Add a failing test"),
    ("🧱", ":bricks: Infrastructure related changes"),
    ("🦺", ":safety_vest: Add or update code for validation"),
];

/// Clone a static catalog into the owned pairs an `OptionList` holds.
pub fn to_owned_pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect()
}
