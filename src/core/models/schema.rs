use serde::Serialize;

pub const REQUIRED_TABLES: [&str; 6] = ["users", "areas", "wards", "questions", "options", "responses"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCheck {
    pub tables: Vec<String>,
    pub required_tables: Vec<String>,
    pub missing_tables: Vec<String>,
    pub all_tables_exist: bool,
}

impl TableCheck {
    pub fn new(tables: Vec<String>) -> Self {
        let missing_tables: Vec<String> = REQUIRED_TABLES
            .iter()
            .filter(|t| !tables.iter().any(|have| have == *t))
            .map(|t| t.to_string())
            .collect();
        TableCheck {
            all_tables_exist: missing_tables.is_empty(),
            required_tables: REQUIRED_TABLES.iter().map(|t| t.to_string()).collect(),
            missing_tables,
            tables,
        }
    }
}
