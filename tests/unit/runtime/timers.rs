use super::*;

#[test]
fn fires_in_deadline_then_schedule_order() {
    let mut q = TimerQueue::new();
    q.schedule(Millis(1200), "unmount");
    q.schedule(Millis(400), "curtain");
    q.schedule(Millis(400), "curtain-2");
    q.schedule(Millis(50), "open");
    assert_eq!(q.next_deadline(), Some(Millis(50)));

    assert_eq!(q.pop_due(Millis(10)), None);
    let mut fired = Vec::new();
    while let Some((_, k)) = q.pop_due(Millis(2000)) {
        fired.push(k);
    }
    assert_eq!(fired, vec!["open", "curtain", "curtain-2", "unmount"]);
    assert!(q.is_empty());
}

#[test]
fn cancel_removes_only_the_target() {
    let mut q = TimerQueue::new();
    let a = q.schedule(Millis(10), 1);
    q.schedule(Millis(20), 2);
    assert!(q.cancel(a));
    assert!(!q.cancel(a));
    assert_eq!(q.len(), 1);
    assert_eq!(q.pop_due(Millis(30)), Some((Millis(20), 2)));
}

#[test]
fn cancel_where_filters_by_kind() {
    let mut q = TimerQueue::new();
    q.schedule(Millis(10), 'a');
    q.schedule(Millis(20), 'b');
    q.schedule(Millis(30), 'a');
    q.cancel_where(|k| *k == 'a');
    assert_eq!(q.len(), 1);
    assert_eq!(q.next_deadline(), Some(Millis(20)));
}
