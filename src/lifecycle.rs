//! Staged lifecycle management with transactional rollback
//!
//! Every subsystem and resource in the process starts through the same
//! protocol: an ordered table of named (init, cleanup) pairs over an
//! explicit context. The first failed init rolls back everything already
//! started, in strict reverse order, and the failure bubbles up as a
//! plain boolean. Stages nest: an item's init may run a nested table
//! under the identical contract.

use log::{debug, error};

/// A named pair of init and cleanup procedures over a context `C`
///
/// Init returns false on failure. Failure detail, if any, is the item's
/// own concern to log before returning; the manager never inspects why.
pub struct LifetimeItem<C> {
    pub name: &'static str,
    pub init: fn(&mut C) -> bool,
    pub cleanup: fn(&mut C),
}

impl<C> LifetimeItem<C> {
    pub const fn new(name: &'static str, init: fn(&mut C) -> bool, cleanup: fn(&mut C)) -> Self {
        Self {
            name,
            init,
            cleanup,
        }
    }
}

/// Tries to initialize every item in order.
///
/// Stops at the first item whose init fails, cleans up all previously
/// succeeded items in reverse order, and returns false. On full success
/// returns true without invoking any cleanup.
pub fn try_init_items<C>(ctx: &mut C, items: &[LifetimeItem<C>]) -> bool {
    for (index, item) in items.iter().enumerate() {
        debug!("init: {}", item.name);

        if !(item.init)(ctx) {
            error!("failed to initialize: {}", item.name);
            cleanup_items_before(ctx, items, index);
            return false;
        }
    }

    true
}

/// Unconditionally cleans up every item in reverse order (full teardown)
pub fn cleanup_items<C>(ctx: &mut C, items: &[LifetimeItem<C>]) {
    cleanup_items_before(ctx, items, items.len());
}

/// Cleans up the items below `index`, in reverse order
fn cleanup_items_before<C>(ctx: &mut C, items: &[LifetimeItem<C>], index: usize) {
    for item in items[..index].iter().rev() {
        debug!("cleanup: {}", item.name);
        (item.cleanup)(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        inits: Vec<usize>,
        cleanups: Vec<usize>,
        fail_at: Option<usize>,
    }

    impl Probe {
        fn init(&mut self, index: usize) -> bool {
            self.inits.push(index);
            self.fail_at != Some(index)
        }

        fn cleanup(&mut self, index: usize) {
            self.cleanups.push(index);
        }
    }

    macro_rules! probe_item {
        ($index:literal) => {
            LifetimeItem::new(
                stringify!($index),
                |ctx: &mut Probe| ctx.init($index),
                |ctx: &mut Probe| ctx.cleanup($index),
            )
        };
    }

    fn items() -> Vec<LifetimeItem<Probe>> {
        vec![
            probe_item!(0),
            probe_item!(1),
            probe_item!(2),
            probe_item!(3),
            probe_item!(4),
            probe_item!(5),
        ]
    }

    #[test]
    fn test_full_success_invokes_zero_cleanups() {
        let mut probe = Probe::default();

        assert!(try_init_items(&mut probe, &items()));
        assert_eq!(probe.inits, vec![0, 1, 2, 3, 4, 5]);
        assert!(probe.cleanups.is_empty());
    }

    #[test]
    fn test_rollback_completeness() {
        // Exhaustive over every list length and failing index: exactly
        // the items below the failure are cleaned up, newest first, and
        // the items above it are never touched.
        let all = items();

        for n in 1..=all.len() {
            for k in 0..n {
                let mut probe = Probe {
                    fail_at: Some(k),
                    ..Probe::default()
                };

                assert!(!try_init_items(&mut probe, &all[..n]));

                let expected_inits: Vec<usize> = (0..=k).collect();
                let expected_cleanups: Vec<usize> = (0..k).rev().collect();
                assert_eq!(probe.inits, expected_inits, "n={n} k={k}");
                assert_eq!(probe.cleanups, expected_cleanups, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn test_cleanup_items_runs_in_reverse() {
        let mut probe = Probe::default();
        cleanup_items(&mut probe, &items()[..4]);

        assert!(probe.inits.is_empty());
        assert_eq!(probe.cleanups, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_nested_stage_uses_same_contract() {
        fn inner() -> Vec<LifetimeItem<Probe>> {
            vec![probe_item!(10), probe_item!(11)]
        }

        fn outer() -> Vec<LifetimeItem<Probe>> {
            vec![
                LifetimeItem::new(
                    "inner-stage",
                    |ctx: &mut Probe| try_init_items(ctx, &inner()),
                    |ctx: &mut Probe| cleanup_items(ctx, &inner()),
                ),
                probe_item!(1),
            ]
        }

        // Failure after the nested stage unwinds through it.
        let mut probe = Probe {
            fail_at: Some(1),
            ..Probe::default()
        };
        assert!(!try_init_items(&mut probe, &outer()));
        assert_eq!(probe.inits, vec![10, 11, 1]);
        assert_eq!(probe.cleanups, vec![11, 10]);

        // Failure inside the nested stage fails the whole tree with no
        // outer cleanup beyond what the nested rollback already did.
        let mut probe = Probe {
            fail_at: Some(11),
            ..Probe::default()
        };
        assert!(!try_init_items(&mut probe, &outer()));
        assert_eq!(probe.inits, vec![10, 11]);
        assert_eq!(probe.cleanups, vec![10]);
    }
}
