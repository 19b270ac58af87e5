use std::collections::BTreeSet;

/// Selects which datastores a test run exercises.
///
/// A store is eligible iff it is not excluded and the include set is either
/// empty or contains it. Exclusion wins over inclusion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreFilter {
    pub exclude: BTreeSet<String>,
    pub include: BTreeSet<String>,
}

impl StoreFilter {
    pub fn new<I, J, S, T>(exclude: I, include: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            exclude: exclude.into_iter().map(Into::into).collect(),
            include: include.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_eligible(&self, store: &str) -> bool {
        !self.exclude.contains(store) && (self.include.is_empty() || self.include.contains(store))
    }
}
