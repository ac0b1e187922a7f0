use sofia_core::ResourceLink;

/// Static `name -> url` registry, read-only after construction.
///
/// Lookups are by exact name. Display order is insertion order; a repeated
/// name keeps its first URL.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    links: Vec<ResourceLink>,
}

impl ResourceRegistry {
    pub fn new(links: impl IntoIterator<Item = ResourceLink>) -> Self {
        let mut unique: Vec<ResourceLink> = Vec::new();
        for link in links {
            if unique.iter().any(|l| l.name == link.name) {
                tracing::warn!(name = %link.name, "duplicate resource name ignored");
                continue;
            }
            unique.push(link);
        }
        Self { links: unique }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResourceLink> {
        self.links.iter().find(|l| l.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceLink> {
        self.links.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
