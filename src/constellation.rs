//! Constellation classification by object-name keyword.

/// Constellation group a tracked object belongs to.
///
/// Derived once per object by case-insensitive substring match against the
/// catalog name; used by the host UI to select which orbits to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constellation {
    Starlink,
    Iridium,
    Gps,
    Galileo,
    Glonass,
    /// COSMOS satellites and early GLONASS designations share naming, so
    /// they are grouped under one tag.
    CosmosGlo,
    Calsphere,
    /// Named object matching no known constellation.
    Other,
    /// Missing or empty object name.
    Unknown,
}

impl Constellation {
    /// Classify an object name.
    ///
    /// Keywords are checked in fixed priority order, so e.g. a name
    /// containing both "GPS" and "GLONASS" classifies as [`Self::Gps`].
    pub fn from_object_name(name: Option<&str>) -> Self {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return Constellation::Unknown;
        };
        let s = name.to_uppercase();

        if s.contains("STARLINK") {
            Constellation::Starlink
        } else if s.contains("IRIDIUM") {
            Constellation::Iridium
        } else if s.contains("GPS") {
            Constellation::Gps
        } else if s.contains("GALILEO") {
            Constellation::Galileo
        } else if s.contains("GLONASS") {
            Constellation::Glonass
        } else if s.contains("COSMOS") || s.contains("GLO") {
            Constellation::CosmosGlo
        } else if s.contains("CALSPHERE") {
            Constellation::Calsphere
        } else {
            Constellation::Other
        }
    }

    /// Tag string shown in the host UI's constellation selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Constellation::Starlink => "STARLINK",
            Constellation::Iridium => "IRIDIUM",
            Constellation::Gps => "GPS",
            Constellation::Galileo => "GALILEO",
            Constellation::Glonass => "GLONASS",
            Constellation::CosmosGlo => "COSMOS-GLO",
            Constellation::Calsphere => "CALSPHERE",
            Constellation::Other => "other",
            Constellation::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Constellation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod constellation_test {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(
            Constellation::from_object_name(Some("STARLINK-1234")),
            Constellation::Starlink
        );
        assert_eq!(
            Constellation::from_object_name(Some("IRIDIUM 106")),
            Constellation::Iridium
        );
        assert_eq!(
            Constellation::from_object_name(Some("GPS BIIR-2  (PRN 13)")),
            Constellation::Gps
        );
        assert_eq!(
            Constellation::from_object_name(Some("GSAT0203 (GALILEO 7)")),
            Constellation::Galileo
        );
        assert_eq!(
            Constellation::from_object_name(Some("COSMOS 2251")),
            Constellation::CosmosGlo
        );
        assert_eq!(
            Constellation::from_object_name(Some("CALSPHERE 1")),
            Constellation::Calsphere
        );
        assert_eq!(
            Constellation::from_object_name(Some("XYZ-SAT")),
            Constellation::Other
        );
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(
            Constellation::from_object_name(Some("starlink-42")),
            Constellation::Starlink
        );
    }

    #[test]
    fn test_missing_or_empty_name_is_unknown() {
        assert_eq!(Constellation::from_object_name(None), Constellation::Unknown);
        assert_eq!(
            Constellation::from_object_name(Some("")),
            Constellation::Unknown
        );
    }

    #[test]
    fn test_glonass_wins_over_glo() {
        // "GLONASS" contains "GLO"; the dedicated tag must take priority.
        assert_eq!(
            Constellation::from_object_name(Some("GLONASS-M 758")),
            Constellation::Glonass
        );
    }

    #[test]
    fn test_tags() {
        assert_eq!(Constellation::CosmosGlo.to_string(), "COSMOS-GLO");
        assert_eq!(Constellation::Other.to_string(), "other");
        assert_eq!(Constellation::Unknown.to_string(), "unknown");
    }
}
