//! Skip-ahead success and rejection paths

use super::*;

const UNIT_COST: i64 = 50;

/// Three orders for one user: A(1, pending), B(2, pending), C(3, cooking)
fn three_order_queue(coins: i64) -> (QueueManager, Order, Order, Order) {
    let mgr = manager();
    mgr.register_user(user("u1", coins));
    let a = place_order(&mgr, Some("u1"));
    let b = place_order(&mgr, Some("u1"));
    let c = place_order(&mgr, Some("u1"));
    let c = mgr.set_status(&c.id, OrderStatus::Cooking).unwrap();
    (mgr, a, b, c)
}

#[test]
fn test_skip_two_moves_to_front_and_charges() {
    let (mgr, a, b, c) = three_order_queue(200);

    let outcome = mgr.skip_queue(&c.id, 2, UNIT_COST).unwrap();

    assert_eq!(outcome.order.queue_number, 1);
    assert_eq!(outcome.user.coins, 100);
    assert_eq!(active_ids(&mgr), vec![c.id, a.id, b.id]);
    assert_eq!(active_numbers(&mgr), vec![1, 2, 3]);
    assert_queue_invariants(&mgr);
}

#[test]
fn test_skip_one_swaps_neighbours() {
    let (mgr, a, b, c) = three_order_queue(200);

    mgr.skip_queue(&c.id, 1, UNIT_COST).unwrap();

    assert_eq!(active_ids(&mgr), vec![a.id, c.id, b.id]);
    assert_eq!(mgr.get_user("u1").unwrap().coins, 150);
    assert_queue_invariants(&mgr);
}

#[test]
fn test_skip_passes_over_ready_orders() {
    // Ready orders hold their slot; only pending/cooking are jumped.
    let mgr = manager();
    mgr.register_user(user("u1", 500));
    let a = place_order(&mgr, Some("u1"));
    let b = place_order(&mgr, Some("u1"));
    let c = place_order(&mgr, Some("u1"));
    mgr.set_status(&b.id, OrderStatus::Ready).unwrap();

    // skippable sequence is [A, C]; C jumps over A only
    let outcome = mgr.skip_queue(&c.id, 1, UNIT_COST).unwrap();

    assert_eq!(outcome.order.queue_number, 1);
    assert_eq!(active_ids(&mgr), vec![c.id, b.id.clone(), a.id]);
    assert_eq!(mgr.get_order(&b.id).unwrap().queue_number, 2);
    assert_queue_invariants(&mgr);
}

#[test]
fn test_skip_rejects_insufficient_depth() {
    let (mgr, a, b, c) = three_order_queue(1000);

    let err = mgr.skip_queue(&c.id, 3, UNIT_COST).unwrap_err();
    assert_eq!(
        err,
        QueueError::InsufficientQueueDepth {
            requested: 3,
            ahead: 2,
        }
    );

    // reject, not clamp: nothing moved, nothing charged
    assert_eq!(active_ids(&mgr), vec![a.id, b.id, c.id]);
    assert_eq!(mgr.get_user("u1").unwrap().coins, 1000);
    assert_queue_invariants(&mgr);
}

#[test]
fn test_skip_rejects_insufficient_coins() {
    let (mgr, a, b, c) = three_order_queue(99);

    let err = mgr.skip_queue(&c.id, 2, UNIT_COST).unwrap_err();
    assert_eq!(
        err,
        QueueError::InsufficientCoins {
            required: 100,
            balance: 99,
        }
    );

    assert_eq!(active_ids(&mgr), vec![a.id, b.id, c.id]);
    assert_eq!(mgr.get_user("u1").unwrap().coins, 99);
    assert_queue_invariants(&mgr);
}

#[test]
fn test_skip_exact_balance_succeeds() {
    let (mgr, _, _, c) = three_order_queue(100);
    let outcome = mgr.skip_queue(&c.id, 2, UNIT_COST).unwrap();
    assert_eq!(outcome.user.coins, 0);
}

#[test]
fn test_skip_rejects_zero() {
    let (mgr, _, _, c) = three_order_queue(200);
    assert!(matches!(
        mgr.skip_queue(&c.id, 0, UNIT_COST),
        Err(QueueError::Validation(_))
    ));
}

#[test]
fn test_skip_rejects_front_of_queue() {
    let (mgr, a, _, _) = three_order_queue(200);
    let err = mgr.skip_queue(&a.id, 1, UNIT_COST).unwrap_err();
    assert_eq!(
        err,
        QueueError::InsufficientQueueDepth {
            requested: 1,
            ahead: 0,
        }
    );
}

#[test]
fn test_skip_rejects_ready_order() {
    let (mgr, a, _, _) = three_order_queue(200);
    mgr.set_status(&a.id, OrderStatus::Ready).unwrap();
    let err = mgr.skip_queue(&a.id, 1, UNIT_COST).unwrap_err();
    assert_eq!(err, QueueError::NotSkippable(OrderStatus::Ready));
}

#[test]
fn test_skip_rejects_completed_order() {
    let (mgr, a, _, _) = three_order_queue(200);
    mgr.set_status(&a.id, OrderStatus::Completed).unwrap();
    let err = mgr.skip_queue(&a.id, 1, UNIT_COST).unwrap_err();
    assert_eq!(err, QueueError::NotSkippable(OrderStatus::Completed));
}

#[test]
fn test_skip_rejects_unknown_order() {
    let (mgr, ..) = three_order_queue(200);
    assert_eq!(
        mgr.skip_queue("missing", 1, UNIT_COST).unwrap_err(),
        QueueError::OrderNotFound("missing".to_string())
    );
}

#[test]
fn test_skip_rejects_order_without_user() {
    let mgr = manager();
    mgr.register_user(user("u1", 500));
    place_order(&mgr, Some("u1"));
    let anon = place_order(&mgr, None);
    let err = mgr.skip_queue(&anon.id, 1, UNIT_COST).unwrap_err();
    assert_eq!(err, QueueError::NoUser(anon.id));
}

#[test]
fn test_skip_uses_given_unit_cost() {
    // Same queue shape, premium rate
    let (mgr, _, _, c) = three_order_queue(250);
    let outcome = mgr.skip_queue(&c.id, 2, 100).unwrap();
    assert_eq!(outcome.user.coins, 50);
}
