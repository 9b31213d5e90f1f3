use std::collections::HashSet;

use crate::app::plate::{normalize, NormalizedPlate};

/// Plates allowed to open the gate automatically. Fixed at startup.
#[derive(Debug, Default, Clone)]
pub struct Whitelist {
    plates: HashSet<NormalizedPlate>,
}

impl Whitelist {
    pub fn new<I, S>(authorized: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut plates = HashSet::new();

        for raw in authorized {
            let raw = raw.as_ref();
            let plate = normalize(Some(raw));
            if plate.is_empty() {
                log::warn!("Ignoring authorized plate {raw:?}: nothing left after normalization");
            } else {
                plates.insert(plate);
            }
        }

        Self { plates }
    }

    /// An empty plate is never authorized.
    pub fn contains(&self, plate: &NormalizedPlate) -> bool {
        !plate.is_empty() && self.plates.contains(plate)
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedPlate> {
        self.plates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_on_normalized_form() {
        let whitelist = Whitelist::new(["AH084IB"]);
        assert!(whitelist.contains(&normalize(Some("AH084IB"))));
        assert!(whitelist.contains(&normalize(Some("ah-084-ib"))));
        assert!(!whitelist.contains(&normalize(Some("AH084IC"))));
        assert!(!whitelist.contains(&normalize(Some("AH084I"))));
    }

    #[test]
    fn test_entries_are_normalized() {
        let whitelist = Whitelist::new(vec!["ab-123-cd".to_owned()]);
        assert!(whitelist.contains(&normalize(Some("AB123CD"))));
    }

    #[test_log::test]
    fn test_empty_plate_never_matches() {
        let whitelist = Whitelist::new(["", "--", "AH084IB"]);
        assert_eq!(whitelist.len(), 1);
        assert!(!whitelist.contains(&normalize(None)));
        assert!(!whitelist.contains(&normalize(Some(""))));
    }

    #[test]
    fn test_duplicates_collapse() {
        let whitelist = Whitelist::new(["AH084IB", "ah 084 ib"]);
        assert_eq!(whitelist.len(), 1);
        assert!(!whitelist.is_empty());
    }
}
