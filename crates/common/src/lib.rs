pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok("running");
        assert_eq!(h.status, "ok");
        assert_eq!(h.message, "running");
        assert!(chrono::DateTime::parse_from_rfc3339(&h.timestamp).is_ok());
    }

    #[test]
    fn ping_serializes_millis() {
        let p = types::Ping::now("pong");
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["message"], "pong");
        assert!(v["timestamp"].as_i64().unwrap() > 0);
    }
}
