use std::fmt;

/// A domain name held as its ordered labels.
///
/// The textual form joins the labels with `.` and carries no trailing dot,
/// so the root name displays as the empty string. Labels are not validated
/// here; length limits are enforced when the name is written to the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

impl From<&str> for DomainName {
    fn from(text: &str) -> Self {
        let text = text.strip_suffix('.').unwrap_or(text);
        if text.is_empty() {
            return DomainName::root();
        }
        DomainName {
            labels: text.split('.').map(str::to_string).collect(),
        }
    }
}

impl From<String> for DomainName {
    fn from(text: String) -> Self {
        DomainName::from(text.as_str())
    }
}
