use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VocabularyViewModel {
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_filter: Option<String>,
    pub sectors: Vec<String>,
    pub sub_sectors: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresetListViewModel {
    pub presets: Vec<PresetEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresetEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub rule: &'static str,
    /// Toggle key on the interactive screen
    pub key: char,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateListViewModel {
    pub database: String,
    pub dates: Vec<DateEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateEntry {
    pub date: String,
    pub records: usize,
    pub latest: bool,
}
