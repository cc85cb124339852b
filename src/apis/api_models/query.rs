use serde::Deserialize;
use utoipa::IntoParams;

pub fn default_limit() -> i64 {
    100
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaginationQuery {
    #[serde(default = "default_limit")]
    #[param(default = 100)]
    pub limit: i64,
    #[serde(default)]
    #[param(default = 0)]
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_are_missing() {
        let query: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, 100);
        assert_eq!(query.offset, 0);
    }
}
