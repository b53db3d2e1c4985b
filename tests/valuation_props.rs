use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use kitchen_sim::domain::{Order, OrderId, Shelf, Temperature};
use kitchen_sim::kitchen_actor::{Kitchen, KitchenOptions};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(0, 0).unwrap()
}

fn at_millis(ms: i64) -> DateTime<Utc> {
    epoch() + TimeDelta::milliseconds(ms)
}

fn cooked(shelf_life: i64, decay_rate: f64) -> Order {
    let mut order = Order::new("1", "soup", Temperature::Hot, shelf_life, decay_rate, epoch()).unwrap();
    order.mark_fulfilled(epoch());
    order
}

proptest! {
    #[test]
    fn value_stays_in_unit_interval(
        shelf_life in 0i64..1_000,
        decay_rate in 0.0f64..10.0,
        modifier in 1u32..=2,
        move_ms in 0i64..2_000_000,
        ms in -10_000i64..2_000_000,
    ) {
        let mut order = cooked(shelf_life, decay_rate);
        let value = order.value(modifier, at_millis(ms));
        prop_assert!((0.0..=1.0).contains(&value));

        order.move_from(2, at_millis(move_ms));
        let value = order.value(1, at_millis(move_ms + ms.abs()));
        prop_assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn value_is_zero_outside_shelf_life(
        shelf_life in 1i64..1_000,
        decay_rate in 0.0f64..10.0,
        late_ms in 1i64..1_000_000,
    ) {
        let order = cooked(shelf_life, decay_rate);
        prop_assert_eq!(order.value(1, at_millis(-1)), 0.0);
        prop_assert_eq!(order.value(1, at_millis(shelf_life * 1_000 + late_ms)), 0.0);
    }

    #[test]
    fn zero_decay_keeps_full_value(shelf_life in 1i64..1_000, fraction in 0.0f64..=1.0) {
        let order = cooked(shelf_life, 0.0);
        let ms = (shelf_life as f64 * 1_000.0 * fraction) as i64;
        prop_assert_eq!(order.value(1, at_millis(ms)), 1.0);
        prop_assert_eq!(order.value(2, at_millis(ms)), 1.0);
    }

    #[test]
    fn overflow_decays_faster(
        shelf_life in 1i64..1_000,
        decay_rate in 0.01f64..10.0,
        fraction in 0.001f64..1.0,
    ) {
        let order = cooked(shelf_life, decay_rate);
        let at = at_millis(((shelf_life * 1_000) as f64 * fraction).max(1.0) as i64);
        let regular = order.value(1, at);
        let overflow = order.value(2, at);
        prop_assert!(overflow <= regular);
        if regular > 0.0 {
            prop_assert!(overflow < regular);
        }
    }

    #[test]
    fn shelf_never_exceeds_capacity(capacity in 0usize..8, ids in prop::collection::vec(0u8..20, 0..40)) {
        let mut shelf = Shelf::new(capacity, 1);
        for id in ids {
            let before = shelf.clone();
            let id = OrderId::from(id.to_string());
            let already_there = shelf.contains(&id);
            if !shelf.add(id) {
                prop_assert_eq!(&shelf, &before);
            } else if !already_there {
                prop_assert_eq!(shelf.len(), before.len() + 1);
            }
            prop_assert!(shelf.len() <= capacity);
        }
    }

    #[test]
    fn kitchen_indexes_stay_consistent(
        seed in any::<u64>(),
        operations in prop::collection::vec((0u8..4, 0usize..3, 0u8..12, 0i64..30), 0..80),
    ) {
        let mut kitchen = Kitchen::new(KitchenOptions::uniform("props", 2, 3), StdRng::seed_from_u64(seed));
        let mut now = epoch();
        for (operation, temperature, id, step) in operations {
            now += TimeDelta::seconds(step);
            let id = OrderId::from(id.to_string());
            match operation {
                0 => {
                    let order = Order::new(
                        id.as_str(),
                        "dish",
                        Temperature::ALL[temperature],
                        120,
                        0.5,
                        now,
                    )
                    .unwrap();
                    let _ = kitchen.take_order(order, now);
                }
                1 => {
                    kitchen.pickup_order(&id, now);
                }
                2 => {
                    kitchen.expire_order(&id, now);
                }
                _ => {
                    kitchen.make_overflow_room(now);
                }
            }
            if let Err(problem) = kitchen.check_invariants() {
                return Err(TestCaseError::fail(problem));
            }
        }
    }
}
