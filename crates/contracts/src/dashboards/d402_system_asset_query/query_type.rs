use serde::{Deserialize, Serialize};

/// Query kinds understood by the system asset query endpoint.
///
/// Only `DeviceCount` has a dedicated table layout on the client; every
/// other kind is shown as formatted JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum QueryType {
    All,
    #[default]
    DeviceCount,
    SfaVersion,
    ExaVersion,
    BbuExpiry,
    ClusterCapacity,
    SerialNumbers,
    ClusterIps,
}

impl QueryType {
    pub const ALL: [QueryType; 8] = [
        QueryType::All,
        QueryType::DeviceCount,
        QueryType::SfaVersion,
        QueryType::ExaVersion,
        QueryType::BbuExpiry,
        QueryType::ClusterCapacity,
        QueryType::SerialNumbers,
        QueryType::ClusterIps,
    ];

    pub fn code(self) -> u8 {
        match self {
            QueryType::All => 0,
            QueryType::DeviceCount => 1,
            QueryType::SfaVersion => 2,
            QueryType::ExaVersion => 3,
            QueryType::BbuExpiry => 4,
            QueryType::ClusterCapacity => 5,
            QueryType::SerialNumbers => 6,
            QueryType::ClusterIps => 7,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            QueryType::All => "All queries",
            QueryType::DeviceCount => "Device count",
            QueryType::SfaVersion => "SFA version details",
            QueryType::ExaVersion => "EXA version details",
            QueryType::BbuExpiry => "BBU expiry dates",
            QueryType::ClusterCapacity => "Cluster capacity",
            QueryType::SerialNumbers => "Device serial numbers",
            QueryType::ClusterIps => "Cluster IP addresses",
        }
    }
}

impl From<QueryType> for u8 {
    fn from(value: QueryType) -> Self {
        value.code()
    }
}

impl TryFrom<u8> for QueryType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("Unsupported query type: {}", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_sequential() {
        for (i, t) in QueryType::ALL.iter().enumerate() {
            assert_eq!(t.code() as usize, i);
            assert_eq!(QueryType::from_code(i as u8), Some(*t));
        }
        assert_eq!(QueryType::from_code(8), None);
    }

    #[test]
    fn test_default_is_device_count() {
        assert_eq!(QueryType::default(), QueryType::DeviceCount);
        assert_eq!(QueryType::default().label(), "Device count");
    }

    #[test]
    fn test_serde_uses_numeric_code() {
        assert_eq!(serde_json::to_string(&QueryType::ClusterIps).unwrap(), "7");
        let parsed: QueryType = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, QueryType::BbuExpiry);
        assert!(serde_json::from_str::<QueryType>("9").is_err());
    }
}
