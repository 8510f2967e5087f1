use crate::record::{Field, Record};
use crate::{KEY_VALUE_DELIMITER, NULL_SENTINEL, RECORD_SEPARATOR};
use serde::Serialize;
use thiserror::Error;

/// An integer field whose wire value could not be parsed.
///
/// The field is left absent in the decoded record; the record itself is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("record {record}: field `{field}` has non-integer value {value:?}")]
pub struct DecodeAnomaly {
    /// Index of the affected record in [`Decoded::records`].
    pub record: usize,
    pub field: Field,
    pub value: String,
}

/// Result of decoding wire text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub records: Vec<Record>,
    pub anomalies: Vec<DecodeAnomaly>,
}

impl Decoded {
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }
}

/// Accumulates the fields of the record currently being read.
#[derive(Default)]
struct Pending {
    record: Record,
    // Set by any `key: value` line, including unknown keys.
    touched: bool,
    // Unparsed integer values still in effect, at most one per field.
    rejected: Vec<(Field, String)>,
}

impl Pending {
    fn set(&mut self, field: Field, value: &str) {
        self.rejected.retain(|(f, _)| *f != field);

        if value == NULL_SENTINEL {
            match field {
                Field::Id => self.record.id = None,
                Field::Name => self.record.name = None,
                Field::Grade => self.record.grade = None,
                Field::Course => self.record.course = None,
            }
            return;
        }

        if field.is_integer() {
            let parsed = value.trim().parse::<i64>().ok();
            if parsed.is_none() {
                self.rejected.push((field, value.to_string()));
            }
            if field == Field::Id {
                self.record.id = parsed;
            } else {
                self.record.grade = parsed;
            }
        } else if field == Field::Name {
            self.record.name = Some(value.to_string());
        } else {
            self.record.course = Some(value.to_string());
        }
    }

    fn flush_into(self, out: &mut Decoded) {
        let index = out.records.len();
        out.anomalies
            .extend(self.rejected.into_iter().map(|(field, value)| DecodeAnomaly {
                record: index,
                field,
                value,
            }));
        out.records.push(self.record);
    }
}

/// Decodes wire text into records.
///
/// Decoding never fails. Lines that are neither a separator nor contain
/// `": "` are skipped, stray separators are ignored, and a final block
/// without a trailing separator is still emitted. Non-integer `id`/`grade`
/// values leave the field absent and are reported in
/// [`Decoded::anomalies`] unless a later line for the same key replaces them.
pub fn decode(raw: &str) -> Decoded {
    let mut out = Decoded::default();
    let mut pending = Pending::default();

    for line in raw.split('\n') {
        if line == RECORD_SEPARATOR {
            if pending.touched {
                std::mem::take(&mut pending).flush_into(&mut out);
            }
            continue;
        }

        let Some((key, value)) = line.split_once(KEY_VALUE_DELIMITER) else {
            continue;
        };

        pending.touched = true;
        if let Some(field) = Field::from_key(key) {
            pending.set(field, value);
        }
    }

    if pending.touched {
        pending.flush_into(&mut out);
    }

    out
}

/// Decodes wire text, discarding anomaly reports.
pub fn decode_records(raw: &str) -> Vec<Record> {
    decode(raw).records
}
