//! Battery level estimation

use core::fmt::Write;

use heapless::String;

use crate::traits::PowerIc;

/// Voltage of an empty cell (mV)
pub const EMPTY_MV: u16 = 3300;

/// Voltage of a full cell (mV)
pub const FULL_MV: u16 = 4200;

/// Linear charge estimate from the cell voltage, clamped to 0-100
pub fn battery_percent(millivolts: u16) -> u8 {
    let above_empty = u32::from(millivolts.saturating_sub(EMPTY_MV));
    let span = u32::from(FULL_MV - EMPTY_MV);
    (above_empty * 100 / span).min(100) as u8
}

/// One battery reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryStatus {
    pub millivolts: u16,
    pub percent: u8,
    pub charging: bool,
}

impl BatteryStatus {
    /// Read the power IC; a board without one reads as empty
    pub fn read<P: PowerIc>(power: Option<&mut P>) -> Self {
        match power {
            Some(p) => {
                let millivolts = p.battery_voltage_mv();
                Self {
                    millivolts,
                    percent: battery_percent(millivolts),
                    charging: p.is_charging(),
                }
            }
            None => Self::default(),
        }
    }

    /// Voltage as `x.xx V`
    pub fn volts_string(&self) -> String<8> {
        let mut s = String::new();
        let centivolts = (u32::from(self.millivolts) + 5) / 10;
        let _ = write!(s, "{}.{:02} V", centivolts / 100, centivolts % 100);
        s
    }
}
