use super::*;
use crate::CEILING;
use crate::Chips;
use crate::Count;
use crate::WINDOW;

const DEPTHS: [i64; 7] = [1, 10, 50, 100, 200, 500, 1000];

/// Blinds whose big blind is a whole number of the window's smallest chip.
fn exact() -> impl Iterator<Item = (i64, i64)> {
    let micro = (1..=4).flat_map(|sb| (sb + 1..=sb + 12).map(move |bb| (sb, bb)));
    let small = (5..=20).flat_map(|sb| (1..=8).map(move |k| (sb, (sb / 5 + k) * 5)));
    let large = [25, 50, 100, 250]
        .into_iter()
        .flat_map(|sb| (1..=6).map(move |k| (sb, (sb / 25 + k) * 25)));
    micro.chain(small).chain(large)
}

#[test]
fn conserves_stack_value() {
    for (sb, bb) in exact() {
        for depth in DEPTHS {
            let allocation = allocate(sb, bb, depth).unwrap();
            assert_eq!(
                allocation.value(),
                (depth * bb) as Chips,
                "{}/{} at {}bb gave {}",
                sb,
                bb,
                depth,
                allocation
            );
        }
    }
}

#[test]
fn stays_inside_one_window() {
    for (sb, bb) in exact() {
        for depth in DEPTHS {
            let window = Window::from(sb as Chips);
            let allocation = allocate(sb, bb, depth).unwrap();
            assert!(allocation.len() <= WINDOW);
            assert!(allocation.denominations().all(|d| window.contains(&d)));
        }
    }
}

#[test]
fn counts_are_positive() {
    for (sb, bb) in exact() {
        for depth in DEPTHS {
            assert!(allocate(sb, bb, depth).unwrap().iter().all(|(_, n)| n > 0));
        }
    }
}

#[test]
fn below_largest_respects_ceiling_when_change_is_whole() {
    for (sb, bb) in exact().filter(|(sb, _)| *sb >= 5) {
        for depth in DEPTHS {
            let window = Window::from(sb as Chips);
            let allocation = allocate(sb, bb, depth).unwrap();
            assert!(
                allocation
                    .iter()
                    .filter(|(d, _)| *d != window.largest())
                    .all(|(_, n)| n <= CEILING),
                "{}/{} at {}bb gave {}",
                sb,
                bb,
                depth,
                allocation
            );
        }
    }
}

#[test]
fn start_follows_small_blind() {
    let smallest = |sb| allocate(sb, sb * 2, 100).unwrap().denominations().next().unwrap();
    assert_eq!(smallest(1).value(), 1);
    assert_eq!(smallest(5).value(), 5);
    assert_eq!(smallest(25).value(), 25);
    assert_eq!(
        Window::from(100).iter().map(|d| d.value()).collect::<Vec<_>>(),
        vec![25, 100, 500, 1000]
    );
}

#[test]
fn deterministic() {
    for (sb, bb) in exact() {
        let a = allocate(sb, bb, 200).unwrap();
        let b = allocate(sb, bb, 200).unwrap();
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    }
}

// Change from the smallest chip's excess goes back onto that chip, so the
// 1s can sit above the ceiling after consolidation.
#[test]
fn regression_carry_back_exceeds_ceiling() {
    let allocation = allocate(1, 3, 201).unwrap();
    let faces = allocation
        .iter()
        .map(|(d, n)| (d.value(), n))
        .collect::<Vec<(Chips, Count)>>();
    assert_eq!(faces, vec![(1, 23), (5, 16), (10, 10), (25, 16)]);
    assert_eq!(allocation.value(), 603);
}

// Consolidation moves thirteen 25s up as three 100s and hands one 25 back.
#[test]
fn regression_consolidation_into_next_chip() {
    let allocation = allocate(25, 81, 29).unwrap();
    let faces = allocation
        .iter()
        .map(|(d, n)| (d.value(), n))
        .collect::<Vec<(Chips, Count)>>();
    assert_eq!(faces, vec![(25, 21), (100, 4), (1000, 2)]);
}

// Leftover value is folded into the smallest chip as count, not value.
#[test]
fn regression_fold_overshoots_when_smallest_is_not_one() {
    let allocation = allocate(5, 7, 51).unwrap();
    assert_eq!(allocation.value(), 357 + 2 * (5 - 1));
    let allocation = allocate(25, 81, 29).unwrap();
    assert_eq!(allocation.value(), 2349 + 24 * (25 - 1));
}
