use crate::record::{Field, Record};
use crate::{KEY_VALUE_DELIMITER, NULL_SENTINEL, RECORD_SEPARATOR};

/// Incremental writer for wire text.
///
/// Fields are written in call order; [`Encoder::end_record`] closes the
/// current block with a separator line.
#[derive(Debug, Default)]
pub struct Encoder {
    out: String,
    records: usize,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one `key: value` line, substituting `NULL` for `None`.
    pub fn field(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        self.out.push_str(key);
        self.out.push_str(KEY_VALUE_DELIMITER);
        self.out.push_str(value.unwrap_or(NULL_SENTINEL));
        self.out.push('\n');
        self
    }

    /// Terminates the current record.
    pub fn end_record(&mut self) -> &mut Self {
        self.out.push_str(RECORD_SEPARATOR);
        self.out.push('\n');
        self.records += 1;
        self
    }

    /// Writes all fields of `record` in wire order and terminates it.
    pub fn record(&mut self, record: &Record) -> &mut Self {
        for field in Field::ALL {
            let text = record.field_text(field);
            self.field(field.key(), text.as_deref());
        }
        self.end_record()
    }

    /// Number of records terminated so far.
    pub fn record_count(&self) -> usize {
        self.records
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Encodes records into wire text. Zero records encode to an empty string.
pub fn encode(records: &[Record]) -> String {
    let mut encoder = Encoder::new();
    for record in records {
        encoder.record(record);
    }
    encoder.finish()
}
