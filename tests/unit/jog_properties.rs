//! Property tests for jog edge detection.

use proptest::prelude::*;

use stepper_jog::config::Polarity;
use stepper_jog::motion::{detect, JogButton, JogEvent};

proptest! {
    /// Presses equal the number of released -> pressed transitions.
    #[test]
    fn one_event_per_press(levels in proptest::collection::vec(any::<bool>(), 0..128)) {
        let mut previous = true;
        let fired = levels
            .iter()
            .filter(|&&level| detect(level, &mut previous, Polarity::ActiveLow))
            .count();

        let mut expected = 0;
        let mut last = true;
        for &level in &levels {
            if last && !level {
                expected += 1;
            }
            last = level;
        }

        prop_assert_eq!(fired, expected);
    }

    /// Holding the button after a press never fires again.
    #[test]
    fn held_button_is_silent(hold in 1usize..200) {
        let mut button = JogButton::new(Polarity::ActiveHigh);
        prop_assert_eq!(button.sample(true), JogEvent::Pressed);
        for _ in 0..hold {
            prop_assert_eq!(button.sample(true), JogEvent::None);
        }
        prop_assert_eq!(button.sample(false), JogEvent::Released);
    }
}
