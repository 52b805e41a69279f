pub const APPLICATION_NAME: &str = "meme-search";

pub const API_URL: &str = "https://b7ywm2txkojn4qe4wtb6ivlo3e0wejwr.lambda-url.eu-west-1.on.aws";

pub const SEARCH_RESULTS_COUNT: u32 = 10;
pub const DEFAULT_RANDOM_MEME_COUNT: u32 = 1;

pub const ACCEPT_JSON: &str = "application/json";
pub const DEFAULT_IMAGE_MIME_TYPE: &str = "application/octet-stream";
pub const DEFAULT_IMAGE_FILE_NAME: &str = "image";

pub const FORM_FIELD_QUERY: &str = "q";
pub const FORM_FIELD_COUNT: &str = "n";
pub const FORM_FIELD_IMAGE: &str = "image";

pub const LOG_TAG_MEME_API: &str = "[MEME_API]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_ATTACHMENT: &str = "[ATTACHMENT]";

pub const ERROR_FETCH_RANDOM_MEME: &str = "Failed to fetch random meme";
pub const ERROR_SEARCH_BY_TEXT: &str = "Failed to search by text";
pub const ERROR_SEARCH_BY_IMAGE_TEXT: &str = "Failed to search by image and text";

pub const SETTINGS_DIR_NAME: &str = "meme-search";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
