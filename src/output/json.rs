use super::{Formatter, SampleRecord};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &SampleRecord) -> String {
        format!(
            r#"{{"index":{},"input":{:.9},"output":{:.9}}}"#,
            record.index, record.input, record.output
        )
    }
}
