use serde::Serialize;
use stockterm_runtime::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub workspace: String,
    pub config_path: String,
    pub config_exists: bool,
    pub database: String,
    pub log_file: String,
    pub config: Config,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub config_path: String,
    pub written: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportViewModel {
    pub source: String,
    pub database: String,
    pub imported: usize,
    pub dates: Vec<super::DateEntry>,
}
