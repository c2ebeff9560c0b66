//! CLI output format enums

/// Output format for the info command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json, yaml")),
        }
    }
}

/// Output format for a replayed schedule
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TraceFormat {
    /// One row per epoch
    #[default]
    Table,
    /// Epoch records plus full step history
    Json,
    /// One row per step
    Csv,
}

impl std::str::FromStr for TraceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(TraceFormat::Table),
            "json" => Ok(TraceFormat::Json),
            "csv" => Ok(TraceFormat::Csv),
            _ => Err(format!("Unknown trace format: {s}. Valid formats: table, json, csv")),
        }
    }
}

impl std::fmt::Display for TraceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceFormat::Table => write!(f, "table"),
            TraceFormat::Json => write!(f, "json"),
            TraceFormat::Csv => write!(f, "csv"),
        }
    }
}
