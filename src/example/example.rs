use std::fmt;
use std::path::PathBuf;

/// The label written in the first column of a dataset row.
///
/// - `Raw`    — the label token from a list file, written back verbatim.
/// - `Binary` — `1.0` for the positive category, `-1.0` otherwise.
/// - `Class`  — index into the category index.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Raw(String),
    Binary(f64),
    Class(usize),
}

impl Label {
    /// Binary label for a class name given the positive category.
    pub fn binary(class_name: &str, positive_category: &str) -> Label {
        if class_name == positive_category {
            Label::Binary(1.0)
        } else {
            Label::Binary(-1.0)
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Raw(token) => write!(f, "{}", token),
            // Always keep the decimal point so binary labels read as floats.
            Label::Binary(v) => write!(f, "{:.1}", v),
            Label::Class(i) => write!(f, "{}", i),
        }
    }
}

/// One labelled image, produced by enumeration and consumed once by the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub label: Label,
    pub image_path: PathBuf,
    pub raw_class_name: String,
}

impl Example {
    pub fn new(
        label: Label,
        image_path: impl Into<PathBuf>,
        raw_class_name: impl Into<String>,
    ) -> Self {
        Example {
            label,
            image_path: image_path.into(),
            raw_class_name: raw_class_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display() {
        assert_eq!(Label::Raw("0.5".into()).to_string(), "0.5");
        assert_eq!(Label::Binary(1.0).to_string(), "1.0");
        assert_eq!(Label::Binary(-1.0).to_string(), "-1.0");
        assert_eq!(Label::Class(7).to_string(), "7");
    }

    #[test]
    fn binary_label_matches_positive_category_exactly() {
        assert_eq!(Label::binary("cat", "cat"), Label::Binary(1.0));
        assert_eq!(Label::binary("Cat", "cat"), Label::Binary(-1.0));
        assert_eq!(Label::binary("dog", "cat"), Label::Binary(-1.0));
    }
}
