use super::{Formatter, SampleRecord};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, record: &SampleRecord) -> String {
        format!(
            "{},{:.9},{:.9}",
            record.index, record.input, record.output
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("index,input,output")
    }
}
