use super::*;
use crate::utils::Environment;
use std::sync::Arc;

#[test]
fn can_detect_time_quota() {
    assert!(TimeQuota::new(-1.).is_reached());
    assert!(!TimeQuota::new(3600.).is_reached());
}

#[test]
fn can_check_quota_through_environment() {
    let mut environment = Environment::new_repeatable(0);
    assert!(!environment.is_quota_reached());

    environment.quota = Some(Arc::new(TimeQuota::new(-1.)));
    assert!(environment.is_quota_reached());
}
