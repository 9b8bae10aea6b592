use super::*;

#[test]
fn default_is_loading() {
    assert!(Remote::<u32>::default().is_loading());
}

#[test]
fn optional_value_is_ready() {
    let state = Remote::from_optional::<()>(Ok(Some(7)));
    assert_eq!(state.ready(), Some(&7));
    assert!(!state.failed());
}

#[test]
fn optional_none_is_quiet_fallback() {
    let state = Remote::<u32>::from_optional::<()>(Ok(None));
    assert_eq!(state, Remote::Fallback { failed: false });
    assert!(state.ready().is_none());
}

#[test]
fn optional_error_is_failed_fallback() {
    let state = Remote::<u32>::from_optional(Err("offline"));
    assert!(state.failed());
    assert!(state.ready().is_none());
}

#[test]
fn empty_list_falls_back() {
    let state = Remote::<Vec<u8>>::from_list::<()>(Ok(vec![]));
    assert_eq!(state, Remote::Fallback { failed: false });
}

#[test]
fn non_empty_list_is_ready() {
    let state = Remote::from_list::<()>(Ok(vec![1, 2]));
    assert_eq!(state.ready().map(Vec::len), Some(2));
}

#[test]
fn list_error_is_failed_fallback() {
    assert!(Remote::<Vec<u8>>::from_list(Err("boom")).failed());
}

#[test]
fn mount_guard_release_is_seen_by_clones() {
    let guard = MountGuard::new();
    let in_future = guard.clone();
    assert!(in_future.is_mounted());
    guard.release();
    assert!(!in_future.is_mounted());
}
