//! Configuration for `doc` output.

/// Markers and keywords used on the first line of `doc` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocConfig {
    /// First line for class values
    pub class_marker: String,
    /// First line for object values
    pub object_marker: String,
    /// Keyword preceding a module's declared name (`package math`)
    pub package_keyword: String,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            class_marker: "class".to_string(),
            object_marker: "object".to_string(),
            package_keyword: "package".to_string(),
        }
    }
}

impl DocConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class marker line
    pub fn with_class_marker(mut self, marker: impl Into<String>) -> Self {
        self.class_marker = marker.into();
        self
    }

    /// Set the object marker line
    pub fn with_object_marker(mut self, marker: impl Into<String>) -> Self {
        self.object_marker = marker.into();
        self
    }

    /// Set the package keyword
    pub fn with_package_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.package_keyword = keyword.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DocConfig::default();
        assert_eq!(config.class_marker, "class");
        assert_eq!(config.object_marker, "object");
        assert_eq!(config.package_keyword, "package");
    }

    #[test]
    fn test_builder_chain() {
        let config = DocConfig::new()
            .with_class_marker("<class>")
            .with_object_marker("<object>")
            .with_package_keyword("module");
        assert_eq!(config.class_marker, "<class>");
        assert_eq!(config.object_marker, "<object>");
        assert_eq!(config.package_keyword, "module");
    }
}
