pub const CONFIG_DIRECTORY: &str = "./config";

pub const UPLOAD_ROUTE: &str = "/ufile";
pub const DOWNLOAD_ROUTE: &str = "/gfile";

pub const FILE_FIELD: &str = "filebytes";
pub const FILENAME_FIELD: &str = "filename";
