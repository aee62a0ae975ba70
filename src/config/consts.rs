/// Document rewritten when no path is given
pub const DEFAULT_TARGET_PATH: &str = "js/data/century1.json";
/// Field set on every quatrain record
pub const DEFAULT_FIELD_NAME: &str = "image";
/// Value assigned to the injected field
pub const DEFAULT_FIELD_VALUE: &str = "Michel_de_Nostredame.jpg";
/// Spaces per indentation level in the rewritten document
pub const DEFAULT_INDENT: usize = 4;
/// Smallest accepted indentation width
pub const MIN_INDENT: usize = 1;
/// Largest accepted indentation width
pub const MAX_INDENT: usize = 16;
/// Environment variable naming the target document
pub const TARGET_PATH_ENV: &str = "QUATRAIN_TAGGER_PATH";
