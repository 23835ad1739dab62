mod csv;
mod json;
mod text;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// One filtered sample as it flows through the CLI.
pub struct SampleRecord {
    pub index: usize,
    pub input: f64,
    pub output: f64,
}

pub trait Formatter: Send {
    fn format(&self, record: &SampleRecord) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SampleRecord {
        SampleRecord {
            index: 3,
            input: 1.5,
            output: 0.75,
        }
    }

    #[test]
    fn test_csv_row_and_header() {
        let formatter = CsvFormatter;
        assert_eq!(formatter.header(), Some("index,input,output"));
        assert_eq!(formatter.format(&record()), "3,1.500000000,0.750000000");
    }

    #[test]
    fn test_json_row_is_valid_json() {
        let formatter = JsonFormatter;
        let row = formatter.format(&record());
        let value: serde_json::Value = serde_json::from_str(&row).unwrap();
        assert_eq!(value["index"], 3);
        assert_eq!(value["output"], 0.75);
    }
}
