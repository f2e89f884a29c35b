/// Header of the column that holds each student's name.
pub const DEFAULT_NAME_COLUMN: &str = "Student Name";

/// Zero-based index of the first subject-mark column.
///
/// The columns before it (typically serial number, roll number and name)
/// are passed over when collecting marks.
pub const DEFAULT_MARK_START: usize = 3;

/// Describes how an input sheet is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Exact header text of the name column.
    pub name_column: String,
    /// Every column at or after this index is a subject mark.
    pub mark_start: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            mark_start: DEFAULT_MARK_START,
        }
    }
}

impl LoaderConfig {
    pub fn with_name_column(mut self, name_column: impl Into<String>) -> Self {
        self.name_column = name_column.into();
        self
    }

    pub fn with_mark_start(mut self, mark_start: usize) -> Self {
        self.mark_start = mark_start;
        self
    }
}
