//! Property tests for the step sequencer.

use proptest::prelude::*;

use stepper_jog::motion::{table, Direction, Resolution, StepSequencer};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Right), Just(Direction::Left)]
}

fn resolution() -> impl Strategy<Value = Resolution> {
    prop_oneof![Just(Resolution::Full), Just(Resolution::Half)]
}

proptest! {
    /// A full electrical cycle from any phase lands back on the same pattern.
    #[test]
    fn cycle_returns_to_start(
        d in direction(),
        r in resolution(),
        warmup in 0usize..20,
    ) {
        let mut seq = StepSequencer::new();
        for _ in 0..warmup {
            seq.advance(d, r);
        }

        let start = seq.current(d, r);
        let mut last = start;
        for _ in 0..r.phase_count() {
            last = seq.advance(d, r);
        }

        prop_assert_eq!(last, start);
    }

    /// Each advance moves exactly one counter by exactly one phase.
    #[test]
    fn advance_moves_one_counter(
        steps in proptest::collection::vec((direction(), resolution()), 0..64),
    ) {
        let mut seq = StepSequencer::new();
        let mut expected = [[0u32; 2]; 2];

        for (d, r) in steps {
            let before = seq.phase(d, r).value();
            let coils = seq.advance(d, r);
            let after = seq.phase(d, r).value();

            prop_assert_eq!(after, (before + 1) % r.phase_count());
            prop_assert_eq!(coils, table(d, r)[after as usize]);

            let di = if d == Direction::Right { 0 } else { 1 };
            let ri = if r == Resolution::Full { 0 } else { 1 };
            expected[di][ri] += 1;
        }

        for (di, d) in Direction::ALL.into_iter().enumerate() {
            for (ri, r) in Resolution::ALL.into_iter().enumerate() {
                let count = expected[di][ri] % r.phase_count() as u32;
                prop_assert_eq!(seq.phase(d, r).value() as u32, count);
            }
        }
    }
}
