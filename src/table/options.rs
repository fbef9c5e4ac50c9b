/// Default sheet label when none (or an empty one) is given.
pub const DEFAULT_SHEET_NAME: &str = "Sheet 1";

/// Default field list when no fields are given.
pub const DEFAULT_FIELD: &str = "A";

/// Ordered list of logical field names.
/// The position of a name is the position of its column in a grid row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields(Vec<String>);

impl Fields {
    /// Parses a comma-separated list, trimming whitespace around every name.
    pub fn parse(text: &str) -> Self {
        Fields(text.split(',').map(|field| field.trim().to_owned()).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field name at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Zero-based position of the first field equal to `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|field| field == name)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for Fields {
    fn default() -> Self {
        Fields(vec![DEFAULT_FIELD.to_owned()])
    }
}

impl From<&str> for Fields {
    fn from(value: &str) -> Self {
        Fields::parse(value)
    }
}

impl From<String> for Fields {
    fn from(value: String) -> Self {
        Fields::parse(&value)
    }
}

impl From<Vec<String>> for Fields {
    fn from(value: Vec<String>) -> Self {
        Fields(value)
    }
}

impl From<Vec<&str>> for Fields {
    fn from(value: Vec<&str>) -> Self {
        Fields(value.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Fields {
    fn from(value: [&str; N]) -> Self {
        Fields(value.iter().map(|field| (*field).to_owned()).collect())
    }
}

/// Construction options for a table adapter. Every option may be left out.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Sheet label, informational only
    pub sheet_name: Option<String>,
    /// Number of leading header rows in every grid
    pub num_headers: Option<usize>,
    /// Field list, either parsed from text or taken verbatim from a sequence
    pub fields: Option<Fields>,
}

impl Options {
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = Some(sheet_name.into());
        self
    }

    pub fn with_num_headers(mut self, num_headers: usize) -> Self {
        self.num_headers = Some(num_headers);
        self
    }

    pub fn with_fields(mut self, fields: impl Into<Fields>) -> Self {
        self.fields = Some(fields.into());
        self
    }
}

/// Options with every default applied.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Resolved {
    pub(crate) sheet_name: String,
    pub(crate) num_headers: usize,
    pub(crate) fields: Fields,
}

impl From<Options> for Resolved {
    fn from(options: Options) -> Self {
        Resolved {
            sheet_name: options
                .sheet_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_owned()),
            num_headers: options.num_headers.unwrap_or(0),
            fields: options.fields.unwrap_or_default(),
        }
    }
}
