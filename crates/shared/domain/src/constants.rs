//! Well-known identifiers shared across the workspace.

/// The bookkeeping plugin whose settings panel location must be resolved
/// from the catalog when building a baseline document.
pub const SETTINGS_PLUGIN: &str = "Settings";

/// The location setting on [`SETTINGS_PLUGIN`].
pub const SETTINGS_LOCATION: &str = "settingsLocation";

/// Fallback location when the catalog does not declare one.
pub const DEFAULT_SETTINGS_LOCATION: &str = "aboveNitro";

/// Category bucket for plugins whose category key is unknown.
pub const MISC_CATEGORY: &str = "misc";

/// Suggested filename for the exported configuration document.
pub const CONFIG_FILE_NAME: &str = "vencord_config.json";

/// Cloud sync endpoint baked into the generated document.
pub const CLOUD_URL: &str = "https://api.vencord.dev/";

/// Marker character prepended to colors in UI-facing values.
pub const COLOR_MARKER: char = '#';
