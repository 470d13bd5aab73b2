//! HD44780 character display in 4-bit mode.
//!
//! Generic over embedded-hal 1.0 output pins and delay provider, with
//! type-state safety for the power-up sequence.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::config::{DisplayConfig, MAX_COLUMNS};
use crate::error::{Error, IoError, Result};

use super::state::{DisplayState, Ready, Uninitialized};
use super::{DisplayText, TextDisplay};

const CLEAR: u8 = 0x01;
const HOME: u8 = 0x02;
const ENTRY_MODE_INCREMENT: u8 = 0x06;
const DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;
const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
const SET_DDRAM_ADDRESS: u8 = 0x80;
const ROW1_OFFSET: u8 = 0x40;

/// HD44780-compatible display on a 4-bit bus.
///
/// Generic over:
/// - `RS`, `EN`: register select and enable pins
/// - `D4`..`D7`: data pins
/// - `DELAY`: Delay provider for bus settling
/// - `STATE`: Type-state marker (defaults to `Ready`)
pub struct Hd44780<RS, EN, D4, D5, D6, D7, DELAY, STATE = Ready>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayNs,
    STATE: DisplayState,
{
    rs: RS,
    en: EN,
    d4: D4,
    d5: D5,
    d6: D6,
    d7: D7,
    delay: DELAY,

    /// Visible columns per row.
    columns: u8,

    /// Type-state marker.
    _state: PhantomData<STATE>,
}

fn drive<P: OutputPin>(pin: &mut P, high: bool) -> Result<()> {
    pin.set_state(PinState::from(high))
        .map_err(|_| Error::Io(IoError::DisplayPin))
}

impl<RS, EN, D4, D5, D6, D7, DELAY, STATE> Hd44780<RS, EN, D4, D5, D6, D7, DELAY, STATE>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayNs,
    STATE: DisplayState,
{
    /// Visible columns per row.
    #[inline]
    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// Get the current state name.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        STATE::name()
    }

    /// Release the pins and delay provider.
    #[allow(clippy::type_complexity)]
    pub fn release(self) -> (RS, EN, D4, D5, D6, D7, DELAY) {
        (self.rs, self.en, self.d4, self.d5, self.d6, self.d7, self.delay)
    }

    fn into_state<S: DisplayState>(self) -> Hd44780<RS, EN, D4, D5, D6, D7, DELAY, S> {
        Hd44780 {
            rs: self.rs,
            en: self.en,
            d4: self.d4,
            d5: self.d5,
            d6: self.d6,
            d7: self.d7,
            delay: self.delay,
            columns: self.columns,
            _state: PhantomData,
        }
    }

    fn pulse_enable(&mut self) -> Result<()> {
        drive(&mut self.en, true)?;
        self.delay.delay_us(1);
        drive(&mut self.en, false)?;
        self.delay.delay_us(100);
        Ok(())
    }

    fn send_nibble(&mut self, nibble: u8) -> Result<()> {
        drive(&mut self.d4, nibble & 0x1 != 0)?;
        drive(&mut self.d5, nibble & 0x2 != 0)?;
        drive(&mut self.d6, nibble & 0x4 != 0)?;
        drive(&mut self.d7, nibble & 0x8 != 0)?;
        self.pulse_enable()
    }

    fn send_byte(&mut self, byte: u8, data: bool) -> Result<()> {
        drive(&mut self.rs, data)?;
        self.send_nibble(byte >> 4)?;
        self.send_nibble(byte & 0x0F)?;

        if !data && (byte == CLEAR || byte == HOME) {
            self.delay.delay_ms(2);
        } else {
            self.delay.delay_us(100);
        }
        Ok(())
    }

    fn command(&mut self, byte: u8) -> Result<()> {
        self.send_byte(byte, false)
    }
}

impl<RS, EN, D4, D5, D6, D7, DELAY> Hd44780<RS, EN, D4, D5, D6, D7, DELAY, Uninitialized>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayNs,
{
    /// Create a 16-column display. Nothing is sent until [`init`](Self::init).
    pub fn new(rs: RS, en: EN, d4: D4, d5: D5, d6: D6, d7: D7, delay: DELAY) -> Self {
        Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
            columns: 16,
            _state: PhantomData,
        }
    }

    /// Take the geometry from configuration.
    pub fn with_config(mut self, config: &DisplayConfig) -> Self {
        self.columns = config.columns;
        self
    }

    /// Run the 4-bit power-up sequence and clear the screen.
    ///
    /// Returns the display in the `Ready` state, or hands it back with the
    /// error so the caller can retry.
    pub fn init(
        mut self,
    ) -> core::result::Result<Hd44780<RS, EN, D4, D5, D6, D7, DELAY, Ready>, (Self, Error)> {
        match self.power_up() {
            Ok(()) => {
                debug!("display ready");
                Ok(self.into_state())
            }
            Err(e) => Err((self, e)),
        }
    }

    fn power_up(&mut self) -> Result<()> {
        self.delay.delay_ms(15);

        drive(&mut self.rs, false)?;
        drive(&mut self.en, false)?;

        // Three 8-bit wake-ups, then switch the bus to 4 bits.
        self.send_nibble(0x03)?;
        self.delay.delay_ms(5);
        self.send_nibble(0x03)?;
        self.delay.delay_us(100);
        self.send_nibble(0x03)?;
        self.send_nibble(0x02)?;

        self.command(FUNCTION_SET_4BIT_2LINE)?;
        self.command(DISPLAY_ON_CURSOR_OFF)?;
        self.command(ENTRY_MODE_INCREMENT)?;
        self.command(CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }
}

impl<RS, EN, D4, D5, D6, D7, DELAY> Hd44780<RS, EN, D4, D5, D6, D7, DELAY, Ready>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayNs,
{
    /// Clear the screen and return the cursor home.
    pub fn clear(&mut self) -> Result<()> {
        self.command(CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    /// Move the cursor. Rows other than 0 address row 1.
    ///
    /// The column is clamped to the last visible column and never past the
    /// 40 addressable positions of a row.
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<()> {
        let col = col
            .min(self.columns.saturating_sub(1))
            .min(MAX_COLUMNS - 1);
        let address = if row == 0 { col } else { ROW1_OFFSET + col };
        self.command(SET_DDRAM_ADDRESS | address)
    }

    /// Write text at the cursor, at most one row's worth of characters.
    pub fn print(&mut self, text: &str) -> Result<()> {
        for byte in text.bytes().take(self.columns as usize) {
            self.send_byte(byte, true)?;
        }
        Ok(())
    }
}

impl<RS, EN, D4, D5, D6, D7, DELAY> TextDisplay for Hd44780<RS, EN, D4, D5, D6, D7, DELAY, Ready>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayNs,
{
    fn show(&mut self, text: &DisplayText) -> Result<()> {
        for (row, line) in (0u8..).zip(text.lines()) {
            self.set_cursor(row, 0)?;
            self.print(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::render;
    use crate::motion::{HalfTurn, MotionIntent, Resolution};
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;

    const RS_LINE: usize = 0;
    const EN_LINE: usize = 1;
    const D4_LINE: usize = 2;

    /// Latches `(rs, nibble)` on every enable falling edge.
    #[derive(Default)]
    struct Bus {
        levels: [bool; 6],
        frames: Vec<(bool, u8)>,
        elapsed_ns: u64,
    }

    #[derive(Clone)]
    struct BusPin {
        bus: Rc<RefCell<Bus>>,
        line: usize,
    }

    impl BusPin {
        fn drive(&mut self, level: bool) {
            let mut bus = self.bus.borrow_mut();
            let was = bus.levels[self.line];
            bus.levels[self.line] = level;

            if self.line == EN_LINE && was && !level {
                let l = bus.levels;
                let nibble = (0..4).fold(0u8, |acc, bit| acc | ((l[D4_LINE + bit] as u8) << bit));
                bus.frames.push((l[RS_LINE], nibble));
            }
        }
    }

    impl embedded_hal::digital::ErrorType for BusPin {
        type Error = Infallible;
    }

    impl OutputPin for BusPin {
        fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
            self.drive(false);
            Ok(())
        }

        fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
            self.drive(true);
            Ok(())
        }
    }

    struct BusClock(Rc<RefCell<Bus>>);

    impl DelayNs for BusClock {
        fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().elapsed_ns += ns as u64;
        }
    }

    type TestDisplay<S> = Hd44780<BusPin, BusPin, BusPin, BusPin, BusPin, BusPin, BusClock, S>;

    fn display(bus: &Rc<RefCell<Bus>>) -> TestDisplay<Uninitialized> {
        let pin = |line| BusPin {
            bus: bus.clone(),
            line,
        };
        Hd44780::new(pin(0), pin(1), pin(2), pin(3), pin(4), pin(5), BusClock(bus.clone()))
    }

    /// Pair up 4-bit frames into `(rs, byte)`.
    fn bytes(frames: &[(bool, u8)]) -> Vec<(bool, u8)> {
        frames
            .chunks(2)
            .map(|pair| (pair[0].0, (pair[0].1 << 4) | pair[1].1))
            .collect()
    }

    #[test]
    fn test_init_sequence() {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let lcd = display(&bus).init().ok().unwrap();
        assert_eq!(lcd.state_name(), "Ready");

        let bus = bus.borrow();
        assert_eq!(
            &bus.frames[..4],
            &[(false, 0x3), (false, 0x3), (false, 0x3), (false, 0x2)]
        );
        assert_eq!(
            bytes(&bus.frames[4..]),
            vec![(false, 0x28), (false, 0x0C), (false, 0x06), (false, 0x01)]
        );
        // 15 ms power-up, 5 ms wake-up, 2 ms clear settle, 2 ms trailing wait.
        assert!(bus.elapsed_ns >= 24_000_000);
    }

    #[test]
    fn test_show_writes_both_rows() {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let mut lcd = display(&bus).init().ok().unwrap();
        bus.borrow_mut().frames.clear();

        let text = render(Resolution::Full, MotionIntent::Stopped, HalfTurn::None);
        lcd.show(&text).unwrap();

        let mut expected = vec![(false, 0x80)];
        expected.extend("Modo: FULL STEP ".bytes().map(|b| (true, b)));
        expected.push((false, 0xC0));
        expected.extend("Motor DETENIDO ".bytes().map(|b| (true, b)));

        assert_eq!(bytes(&bus.borrow().frames), expected);
    }

    #[test]
    fn test_print_stops_at_row_width() {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let mut lcd = display(&bus).init().ok().unwrap();
        bus.borrow_mut().frames.clear();

        lcd.set_cursor(1, 40).unwrap();
        lcd.print("0123456789ABCDEFGHIJ").unwrap();

        let sent = bytes(&bus.borrow().frames);
        assert_eq!(sent[0], (false, 0xC0 + 15));
        assert_eq!(sent.len(), 1 + 16);
        assert_eq!(sent.last(), Some(&(true, b'F')));
    }

    #[test]
    fn test_cursor_stays_inside_ddram() {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let wide = DisplayConfig {
            columns: 40,
            rows: 2,
        };
        let mut lcd = display(&bus).with_config(&wide).init().ok().unwrap();
        bus.borrow_mut().frames.clear();

        lcd.set_cursor(1, 39).unwrap();
        lcd.set_cursor(0, 39).unwrap();
        assert_eq!(
            bytes(&bus.borrow().frames),
            vec![(false, 0xC0 + 39), (false, 0x80 + 39)]
        );
    }

    #[test]
    fn test_unvalidated_width_is_clamped() {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let oversized = DisplayConfig {
            columns: 200,
            rows: 2,
        };
        let mut lcd = display(&bus).with_config(&oversized).init().ok().unwrap();
        bus.borrow_mut().frames.clear();

        lcd.set_cursor(1, 199).unwrap();
        lcd.set_cursor(0, 150).unwrap();
        assert_eq!(
            bytes(&bus.borrow().frames),
            vec![(false, 0xC0 + 39), (false, 0x80 + 39)]
        );
    }

    struct BrokenPin;

    impl embedded_hal::digital::ErrorType for BrokenPin {
        type Error = embedded_hal::digital::ErrorKind;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
            Err(embedded_hal::digital::ErrorKind::Other)
        }

        fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
            Err(embedded_hal::digital::ErrorKind::Other)
        }
    }

    #[test]
    fn test_failed_init_returns_display() {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let pin = |line| BusPin {
            bus: bus.clone(),
            line,
        };
        let lcd = Hd44780::new(
            BrokenPin,
            pin(1),
            pin(2),
            pin(3),
            pin(4),
            pin(5),
            BusClock(bus.clone()),
        );

        match lcd.init() {
            Ok(_) => panic!("init succeeded with a broken RS pin"),
            Err((lcd, e)) => {
                assert_eq!(lcd.state_name(), "Uninitialized");
                assert_eq!(e, Error::Io(IoError::DisplayPin));
            }
        }
    }
}
