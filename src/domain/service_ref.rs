/// A Kubernetes service addressed by name and namespace.
///
/// Shared between the bootstrap wizard and the sealed-secrets validator: the
/// validator fills both fields in place and the caller reads the result once
/// the prompt session completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespacedService {
    pub name: String,
    pub namespace: String,
}

impl NamespacedService {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self { name: name.into(), namespace: namespace.into() }
    }
}

impl std::fmt::Display for NamespacedService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
