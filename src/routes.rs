// Route path constants - single source of truth for all API paths

pub const ERROR_PLEASE: &str = "/errorplease";
pub const SUCCESS_YEAH: &str = "/successyeah";
