use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One service instance known to the management interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub instance_name: String,
    pub hostname: String,
    pub http_management_port: Option<u16>,
    pub last_poll_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_wire_shape() {
        let instance = Instance {
            instance_name: "reader-01".to_string(),
            hostname: "feeds.internal".to_string(),
            http_management_port: Some(8000),
            last_poll_date: None,
        };

        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(json["instance_name"], "reader-01");
        assert_eq!(json["hostname"], "feeds.internal");
        assert_eq!(json["http_management_port"], 8000);
        assert!(json["last_poll_date"].is_null());
    }
}
