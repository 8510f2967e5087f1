use serde::{Deserialize, Serialize};
use std::fmt;

/// One matched student record.
///
/// Every field is optional on the wire; the native side may emit `NULL` for
/// any of them, including `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub grade: Option<i64>,
    pub course: Option<String>,
}

impl Record {
    /// Creates a record with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_grade(mut self, grade: i64) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    /// Returns the wire text of a field, or `None` when it is absent.
    pub fn field_text(&self, field: Field) -> Option<String> {
        match field {
            Field::Id => self.id.map(|v| v.to_string()),
            Field::Name => self.name.clone(),
            Field::Grade => self.grade.map(|v| v.to_string()),
            Field::Course => self.course.clone(),
        }
    }

    /// Returns `true` when every field is absent.
    pub fn is_blank(&self) -> bool {
        self.id.is_none() && self.name.is_none() && self.grade.is_none() && self.course.is_none()
    }
}

/// The fixed set of record fields, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Name,
    Grade,
    Course,
}

impl Field {
    /// All fields in the order the encoder writes them.
    pub const ALL: [Field; 4] = [Field::Id, Field::Name, Field::Grade, Field::Course];

    /// The key used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Grade => "grade",
            Field::Course => "course",
        }
    }

    /// Looks up a field by its wire key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Whether the field carries an integer value.
    pub fn is_integer(self) -> bool {
        matches!(self, Field::Id | Field::Grade)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
