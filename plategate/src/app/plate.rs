use std::fmt;

/// Canonical form of a license plate: ASCII letters and digits only,
/// uppercase. `AH-084-IB`, `ah 084 ib` and `AH084IB` are the same plate.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct NormalizedPlate(String);

impl NormalizedPlate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedPlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize(raw: Option<&str>) -> NormalizedPlate {
    let plate = raw
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    NormalizedPlate(plate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_and_case_are_ignored() {
        assert_eq!(normalize(Some("ah-084-ib")).as_str(), "AH084IB");
        assert_eq!(normalize(Some("AH 084 IB")), normalize(Some("AH084IB")));
        assert_eq!(normalize(Some(" a.b/1_2 ")).as_str(), "AB12");
    }

    #[test]
    fn test_non_ascii_is_stripped() {
        assert_eq!(normalize(Some("ÁH-084-ÍB")).as_str(), "H084B");
    }

    #[test]
    fn test_absent_and_empty() {
        assert!(normalize(None).is_empty());
        assert!(normalize(Some("")).is_empty());
        assert!(normalize(Some("--- ")).is_empty());
    }

    #[test]
    fn test_idempotent() {
        for raw in ["ah-084-ib", "AB 123 CD", "", "x_y", "ñandú 42"] {
            let once = normalize(Some(raw));
            let twice = normalize(Some(once.as_str()));
            assert_eq!(once, twice);
        }
    }
}
