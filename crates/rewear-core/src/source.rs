use crate::catalog::{filter_and_sort, FilterCriteria};
use crate::models::Item;
use crate::{seed, Error, Result};
use std::path::PathBuf;

/// Trait for item sources - keeps the browse logic ignorant of where items live
///
/// Today that's the seed data or a JSON dump. Anything that can hand back a
/// list of items can plug in here.
#[cfg_attr(test, mockall::automock)]
pub trait ItemSource: Send + Sync {
    fn items(&self) -> Result<Vec<Item>>;
}

impl<T: ItemSource + ?Sized> ItemSource for Box<T> {
    fn items(&self) -> Result<Vec<Item>> {
        (**self).items()
    }
}

/// The built-in demo catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalog;

impl ItemSource for SeedCatalog {
    fn items(&self) -> Result<Vec<Item>> {
        Ok(seed::catalog())
    }
}

/// Items read from a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ItemSource for JsonFileSource {
    fn items(&self) -> Result<Vec<Item>> {
        let contents = std::fs::read_to_string(&self.path)?;
        let items: Vec<Item> = serde_json::from_str(&contents)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "Loaded catalog file");
        Ok(items)
    }
}

/// Browse front door: a source plus the catalog engine
pub struct Marketplace<S: ItemSource> {
    source: S,
}

impl<S: ItemSource> Marketplace<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn browse(&self, criteria: &FilterCriteria) -> Result<Vec<Item>> {
        let items = self.source.items()?;
        Ok(filter_and_sort(&items, criteria))
    }

    pub fn find(&self, id: u64) -> Result<Item> {
        self.source
            .items()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Next free id for a new listing
    pub fn next_id(&self) -> Result<u64> {
        let items = self.source.items()?;
        Ok(items.iter().map(|item| item.id).max().unwrap_or(0) + 1)
    }
}

impl Default for Marketplace<SeedCatalog> {
    fn default() -> Self {
        Self::new(SeedCatalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortKey;
    use crate::models::{Category, Condition, Size};
    use std::io::Write;

    fn item(id: u64, points: u32) -> Item {
        Item::new(id, format!("Item {}", id), Category::Tops, Size::S, Condition::Good, points)
    }

    #[test]
    fn test_browse_uses_source() {
        let mut source = MockItemSource::new();
        source
            .expect_items()
            .times(1)
            .returning(|| Ok(vec![item(1, 10), item(2, 30), item(3, 20)]));

        let market = Marketplace::new(source);
        let result = market
            .browse(&FilterCriteria::new().sort(SortKey::PointsHigh))
            .unwrap();
        let ids: Vec<_> = result.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_find_missing_item() {
        let mut source = MockItemSource::new();
        source.expect_items().returning(|| Ok(vec![item(1, 10)]));

        let market = Marketplace::new(source);
        assert_eq!(market.find(1).unwrap().id, 1);
        assert!(matches!(market.find(42), Err(Error::NotFound(42))));
    }

    #[test]
    fn test_source_errors_propagate() {
        let mut source = MockItemSource::new();
        source
            .expect_items()
            .returning(|| Err(Error::ConfigError("offline".to_string())));

        let market = Marketplace::new(source);
        assert!(market.browse(&FilterCriteria::new()).is_err());
    }

    #[test]
    fn test_next_id() {
        let market = Marketplace::default();
        assert_eq!(market.next_id().unwrap(), 9);

        let mut empty = MockItemSource::new();
        empty.expect_items().returning(|| Ok(Vec::new()));
        assert_eq!(Marketplace::new(empty).next_id().unwrap(), 1);
    }

    #[test]
    fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let items = vec![item(4, 40), item(5, 50)];
        write!(file, "{}", serde_json::to_string(&items).unwrap()).unwrap();

        let source = JsonFileSource::new(file.path());
        assert_eq!(source.items().unwrap(), items);
    }

    #[test]
    fn test_json_file_source_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let source = JsonFileSource::new(file.path());
        assert!(matches!(source.items(), Err(Error::SerializationError(_))));
    }
}
