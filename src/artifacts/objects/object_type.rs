/// Column width for the kind in listing lines; `commit` is the longest name.
pub const KIND_DISPLAY_WIDTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectType {
    Commit,
    Tree,
    Blob,
    Tag,
    /// A kind tag none of the above recognise, kept verbatim for display.
    Unknown(String),
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Commit => "commit",
            ObjectType::Tree => "tree",
            ObjectType::Blob => "blob",
            ObjectType::Tag => "tag",
            ObjectType::Unknown(kind) => kind,
        }
    }

    /// Kind name left-aligned and padded with spaces to `KIND_DISPLAY_WIDTH`
    pub fn padded(&self) -> String {
        format!("{:<width$}", self.as_str(), width = KIND_DISPLAY_WIDTH)
    }
}

impl From<&str> for ObjectType {
    fn from(value: &str) -> Self {
        match value {
            "commit" => ObjectType::Commit,
            "tree" => ObjectType::Tree,
            "blob" => ObjectType::Blob,
            "tag" => ObjectType::Tag,
            other => ObjectType::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
