//! Resolve a requested service identifier against a batch of describe results

use crate::types::ServiceRecord;

/// Outcome of looking up one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMatch<'a> {
    Found(&'a ServiceRecord),
    NotFound,
}

impl<'a> ServiceMatch<'a> {
    pub fn found(self) -> Option<&'a ServiceRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }
}

/// Find the record for `identifier`.
///
/// An exact `name` match wins over everything else. Failing that, a record whose
/// ARN ends in `/<identifier>` is accepted, since the control plane may key its
/// response by full resource name. The first match in scan order is returned.
pub fn match_service<'a>(identifier: &str, records: &'a [ServiceRecord]) -> ServiceMatch<'a> {
    if let Some(record) = records.iter().find(|r| r.name == identifier) {
        return ServiceMatch::Found(record);
    }

    let suffix = format!("/{identifier}");
    records
        .iter()
        .find(|r| r.arn.ends_with(&suffix))
        .map_or(ServiceMatch::NotFound, ServiceMatch::Found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record;

    #[test]
    fn test_exact_name_match() {
        let records = vec![
            record("users", "ACTIVE", 1, 1, 0),
            record("guests", "ACTIVE", 1, 1, 0),
        ];
        let matched = match_service("guests", &records).found().expect("should match");
        assert_eq!(matched.name, "guests");
    }

    #[test]
    fn test_arn_suffix_match() {
        let mut renamed = record("something-else", "ACTIVE", 1, 1, 0);
        renamed.arn = "arn:aws:ecs:us-east-1:123456789012:service/prod/foo".to_string();
        let records = vec![renamed];

        let matched = match_service("foo", &records).found().expect("should match by ARN");
        assert_eq!(matched.name, "something-else");
    }

    #[test]
    fn test_exact_name_preferred_over_earlier_arn_suffix() {
        let mut by_arn = record("other", "DRAINING", 1, 1, 0);
        by_arn.arn = "arn:aws:ecs:us-east-1:123456789012:service/prod/api".to_string();
        let records = vec![by_arn, record("api", "ACTIVE", 1, 1, 0)];

        let matched = match_service("api", &records).found().expect("should match");
        assert_eq!(matched.name, "api");
        assert!(matched.status.is_active());
    }

    #[test]
    fn test_arn_suffix_requires_separator() {
        let mut record = record("frontend", "ACTIVE", 1, 1, 0);
        record.arn = "arn:aws:ecs:us-east-1:123456789012:service/prod/my-api".to_string();
        let records = vec![record];

        assert_eq!(match_service("api", &records), ServiceMatch::NotFound);
    }

    #[test]
    fn test_not_found() {
        let records = vec![record("users", "ACTIVE", 1, 1, 0)];
        assert_eq!(match_service("guests", &records), ServiceMatch::NotFound);
        assert_eq!(match_service("guests", &[]), ServiceMatch::NotFound);
    }

    #[test]
    fn test_first_match_wins() {
        let mut first = record("dup", "ACTIVE", 1, 1, 0);
        first.arn = "arn:first/dup".to_string();
        let mut second = record("dup", "DRAINING", 1, 1, 0);
        second.arn = "arn:second/dup".to_string();
        let records = vec![first, second];

        let matched = match_service("dup", &records).found().expect("should match");
        assert_eq!(matched.arn, "arn:first/dup");
    }
}
