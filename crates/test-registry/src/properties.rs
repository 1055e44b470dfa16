use std::collections::HashMap;

use vitrine_core::registry::PropertySource;

/// In-memory property source, keyed by `module.key`.
#[derive(Default)]
pub struct InMemoryPropertySource {
    values: HashMap<String, String>,
}

impl InMemoryPropertySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(
        mut self,
        module: &str,
        key: &str,
        value: impl Into<String>,
    ) -> Self {
        self.values.insert(format!("{module}.{key}"), value.into());
        self
    }
}

impl PropertySource for InMemoryPropertySource {
    fn property(&self, module: &str, key: &str) -> Option<String> {
        self.values.get(&format!("{module}.{key}")).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_are_scoped_by_module() {
        let source = InMemoryPropertySource::new().with_property(
            "cris",
            "facet.type.Publication",
            "publication###publications",
        );

        assert_eq!(
            source.property("cris", "facet.type.Publication").as_deref(),
            Some("publication###publications")
        );
        assert!(source.property("site", "facet.type.Publication").is_none());
    }
}
