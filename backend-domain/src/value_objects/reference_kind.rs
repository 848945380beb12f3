// Reference kind value object
// Names the related record an Event must resolve before it can be created

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
    Tag,
    AssetForTag,
    Reader,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Tag => "tag",
            ReferenceKind::AssetForTag => "asset-for-tag",
            ReferenceKind::Reader => "reader",
        }
    }

    /// Human readable message naming the missing record and the value that was looked up.
    pub fn not_found_message(&self, value: &str) -> String {
        match self {
            ReferenceKind::Tag => format!(
                "No tags with the following parameters were found: {{'tag': {}}}",
                value
            ),
            ReferenceKind::AssetForTag => format!(
                "No assets assigned to the following tag were found: {{'tag': {}}}",
                value
            ),
            ReferenceKind::Reader => format!(
                "No readers with the following parameters were found: {{'reader': {}}}",
                value
            ),
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_kind_and_value() {
        assert_eq!(
            ReferenceKind::Tag.not_found_message("ZZZ"),
            "No tags with the following parameters were found: {'tag': ZZZ}"
        );
        assert_eq!(
            ReferenceKind::AssetForTag.not_found_message("A2"),
            "No assets assigned to the following tag were found: {'tag': A2}"
        );
        assert_eq!(
            ReferenceKind::Reader.not_found_message("ghost"),
            "No readers with the following parameters were found: {'reader': ghost}"
        );
    }

    #[test]
    fn serializes_as_kebab_case() {
        let encoded = serde_json::to_string(&ReferenceKind::AssetForTag).expect("encode kind");
        assert_eq!(encoded, "\"asset-for-tag\"");
    }
}
