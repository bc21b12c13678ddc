//! Application-wide constants.
//!
//! File naming conventions of Baidu skin packages and the fixed key alias
//! table used when transcoding keyboard layouts.

/// The display name of the application.
pub const APP_NAME: &str = "Hamster Skin Converter";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "hamster-skin";

/// Theme subdirectories of a skin package.
pub const THEME_DIRS: [&str; 2] = ["dark", "light"];

/// Theme assigned to files matching neither theme name in path-match mode.
pub const FALLBACK_THEME: &str = "other";

/// Path fragment marking the landscape asset family, which is never converted.
pub const LANDSCAPE_MARKER: &str = "land";

/// Extension of sprite descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "til";

/// Extension of sprite sheet images.
pub const IMAGE_EXTENSION: &str = "png";

/// Prefix removed from section names to form overlay labels.
pub const SECTION_LABEL_PREFIX: &str = "IMG";

/// Prefix prepended to style sheet image indexes.
pub const IMAGE_REF_PREFIX: &str = "IMG";

/// Prefix of style sheet section names (`STYLE<n>`).
pub const STYLE_SECTION_PREFIX: &str = "STYLE";

/// Subdirectory of each theme that receives converted resources.
pub const RESOURCES_DIR: &str = "resources";

/// Default suffix of the resources output directory (`<source>-仓输入法`).
pub const DEFAULT_RESOURCES_SUFFIX: &str = "-仓输入法";

/// Default suffix of the auxiliary output directory (`<source>-辅助`).
pub const DEFAULT_AUX_SUFFIX: &str = "-辅助";

/// Default style sheet file name inside a theme directory.
pub const DEFAULT_STYLE_SHEET: &str = "default.css";

/// Default keyboard layout files transcoded to JSON.
pub const DEFAULT_KEYBOARD_LAYOUTS: [&str; 6] = [
    "py_26.ini",
    "en_26.ini",
    "py_9.ini",
    "num_9.ini",
    "symbol.ini",
    "sel_ch.ini",
];

/// Baidu key labels (`CENTER` values) and the Hamster key names they map to.
pub const BAIDU_KEY_ALIASES: &[(&str, &str)] = &[
    ("'", "分词"),
    ("，", "逗号"),
    ("。", "semicolon"),
    ("F1", "symbol"),
    ("F6", "123"),
    ("F4", "return"),
    ("F9", "展开候选"),
    ("F11", "shift"),
    ("F16", "中英切换"),
    ("F22", "pageUp"),
    ("F23", "pageDown"),
    ("F27", "锁定键"),
    ("F31", "primaryButton"),
    ("F36", "backspace"),
    ("F38", "space"),
    ("F39", "enter"),
    ("F40", "清空输入码"),
    ("F55", "符号键盘符号背景"),
    ("F62", "切换其他输入法(地球)"),
    ("F75", "换行"),
];

/// Maps a raw Baidu key label to its Hamster name, or returns it unchanged.
#[must_use]
pub fn resolve_key_alias(raw: &str) -> &str {
    BAIDU_KEY_ALIASES
        .iter()
        .find(|(label, _)| *label == raw)
        .map_or(raw, |&(_, name)| name)
}
