use super::{Formatter, SampleRecord};

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, record: &SampleRecord) -> String {
        format!(
            "{:>8}  in: {:>13.6}  out: {:>13.6}",
            record.index, record.input, record.output
        )
    }
}
