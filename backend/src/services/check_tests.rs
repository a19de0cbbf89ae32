#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use crate::api::{CheckId, CheckRecord, HistoryStats, Parity};
    use crate::db::{HistoryRepository, LocalRepository, RepositoryError, RepositoryResult};
    use crate::services::check::{check_parity, parse_number, NOT_AN_INTEGER, OUT_OF_RANGE};
    use crate::services::ServiceError;

    struct BrokenRepository;

    #[async_trait]
    impl HistoryRepository for BrokenRepository {
        async fn append(&self, _value: i64, _parity: Parity) -> RepositoryResult<CheckRecord> {
            Err(RepositoryError::internal("store unavailable"))
        }
        async fn recent(&self, _limit: Option<usize>) -> RepositoryResult<Vec<CheckRecord>> {
            Err(RepositoryError::internal("store unavailable"))
        }
        async fn stats(&self) -> RepositoryResult<HistoryStats> {
            Err(RepositoryError::internal("store unavailable"))
        }
        async fn clear(&self) -> RepositoryResult<()> {
            Ok(())
        }
        async fn find_by_value(&self, _value: i64) -> RepositoryResult<Option<CheckRecord>> {
            Ok(None)
        }
        async fn all(&self) -> RepositoryResult<Vec<CheckRecord>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse_number("number", &json!(42)).unwrap(), 42);
        assert_eq!(parse_number("number", &json!(0)).unwrap(), 0);
        assert_eq!(parse_number("number", &json!(-7)).unwrap(), -7);
        assert_eq!(parse_number("number", &json!(i64::MIN)).unwrap(), i64::MIN);
    }

    #[test]
    fn test_parse_integral_float() {
        assert_eq!(parse_number("number", &json!(42.0)).unwrap(), 42);
        assert_eq!(parse_number("number", &json!(-4.0)).unwrap(), -4);
    }

    #[test]
    fn test_parse_rejects_fraction() {
        let err = parse_number("number", &json!(3.14)).unwrap_err();
        assert_eq!(err.field, "number");
        assert_eq!(err.message, NOT_AN_INTEGER);
        assert_eq!(err.value, json!(3.14));
    }

    #[test]
    fn test_parse_integer_strings() {
        assert_eq!(parse_number("number", &json!("42")).unwrap(), 42);
        assert_eq!(parse_number("number", &json!("-7")).unwrap(), -7);
        assert_eq!(parse_number("number", &json!("+5")).unwrap(), 5);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in [json!("abc"), json!("3.14"), json!(""), json!(true), json!([1]), json!({"n": 1})] {
            let err = parse_number("number", &raw).unwrap_err();
            assert_eq!(err.message, NOT_AN_INTEGER, "value {}", raw);
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            parse_number("number", &json!(u64::MAX)).unwrap_err().message,
            OUT_OF_RANGE
        );
        assert_eq!(
            parse_number("number", &json!(1e20)).unwrap_err().message,
            OUT_OF_RANGE
        );
        assert_eq!(
            parse_number("number", &json!("99999999999999999999")).unwrap_err().message,
            OUT_OF_RANGE
        );
    }

    #[tokio::test]
    async fn test_check_even_then_odd() {
        let repo = LocalRepository::new();

        let first = check_parity(&repo, &json!(42)).await.unwrap();
        assert_eq!(first.id, CheckId::new(1));
        assert_eq!(first.parity, Parity::Even);
        assert!(first.is_even);
        assert!(!first.is_odd);
        assert_eq!(first.description, "The number 42 is even");

        let second = check_parity(&repo, &json!(13)).await.unwrap();
        assert_eq!(second.id, CheckId::new(2));
        assert_eq!(second.parity, Parity::Odd);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_check_invalid_input_stores_nothing() {
        let repo = LocalRepository::new();

        let err = check_parity(&repo, &json!(3.14)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_check_timestamp_matches_record() {
        let repo = LocalRepository::new();
        let result = check_parity(&repo, &json!(-4)).await.unwrap();
        let stored = repo.find_by_value(-4).await.unwrap().unwrap();

        assert_eq!(result.timestamp, stored.timestamp);
        assert_eq!(result.id, stored.id);
    }

    #[tokio::test]
    async fn test_check_repository_failure_propagates() {
        let err = check_parity(&BrokenRepository, &json!(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repository(_)));
    }
}
