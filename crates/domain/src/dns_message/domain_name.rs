use std::fmt;

/// A decompressed domain name.
///
/// Labels are kept as raw octets; they only become text when the name is
/// displayed. A name without labels is the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn from_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push_label(&mut self, label: &[u8]) {
        self.labels.push(label.to_vec());
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Length of the uncompressed wire form, terminator included.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    pub fn to_dotted(&self) -> String {
        self.to_string()
    }
}

impl From<&str> for DomainName {
    fn from(name: &str) -> Self {
        Self::from_labels(
            name.split('.')
                .filter(|label| !label.is_empty())
                .map(|label| label.as_bytes().to_vec()),
        )
    }
}

fn write_label(f: &mut fmt::Formatter<'_>, label: &[u8]) -> fmt::Result {
    for &byte in label {
        match byte {
            b'.' | b'\\' => write!(f, "\\{}", byte as char)?,
            0x21..=0x7e => write!(f, "{}", byte as char)?,
            _ => write!(f, "\\{:03}", byte)?,
        }
    }
    Ok(())
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for (index, label) in self.labels.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write_label(f, label)?;
        }
        Ok(())
    }
}
