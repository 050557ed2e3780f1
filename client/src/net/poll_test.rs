use super::*;

// =============================================================
// Delay schedule
// =============================================================

#[test]
fn healthy_loop_polls_at_the_base_interval() {
    let policy = PollPolicy::default();
    assert_eq!(policy.delay_for(0), Duration::from_secs(5));
}

#[test]
fn delay_doubles_per_consecutive_failure() {
    let policy = PollPolicy::default();
    assert_eq!(policy.delay_for(1), Duration::from_secs(10));
    assert_eq!(policy.delay_for(2), Duration::from_secs(20));
}

#[test]
fn delay_is_capped_at_the_max_interval() {
    let policy = PollPolicy::default();
    assert_eq!(policy.delay_for(3), Duration::from_secs(40));
    assert_eq!(policy.delay_for(10), Duration::from_secs(40));
    assert_eq!(policy.delay_for(u32::MAX), Duration::from_secs(40));
}

#[test]
fn custom_intervals_back_off_from_their_own_base() {
    let policy = PollPolicy {
        interval: Duration::from_secs(2),
        max_interval: Duration::from_secs(16),
        max_attempts: None,
    };
    assert_eq!(policy.delay_for(0), Duration::from_secs(2));
    assert_eq!(policy.delay_for(2), Duration::from_secs(8));
    assert_eq!(policy.delay_for(5), Duration::from_secs(16));
}

// =============================================================
// Attempt budget
// =============================================================

#[test]
fn unlimited_policy_never_gives_up() {
    let policy = PollPolicy { max_attempts: None, ..Default::default() };
    assert!(!policy.gave_up(0));
    assert!(!policy.gave_up(u32::MAX));
}

#[test]
fn budget_is_exclusive_below_and_inclusive_at_the_cap() {
    let policy = PollPolicy { max_attempts: Some(3), ..Default::default() };
    assert!(!policy.gave_up(2));
    assert!(policy.gave_up(3));
    assert!(policy.gave_up(4));
}

#[test]
fn default_budget_covers_a_long_generation() {
    // 240 attempts at a 5 s cadence is twenty minutes of healthy polling.
    let policy = PollPolicy::default();
    assert!(!policy.gave_up(239));
    assert!(policy.gave_up(240));
}
