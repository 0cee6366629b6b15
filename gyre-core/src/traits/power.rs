//! Power management IC and backlight traits

/// Interrupt cause bitmask reported by the power IC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IrqCause(pub u32);

impl IrqCause {
    pub const NONE: IrqCause = IrqCause(0);
    /// Short press of the power key
    pub const PEK_SHORT_PRESS: IrqCause = IrqCause(1 << 0);
    /// Long press of the power key
    pub const PEK_LONG_PRESS: IrqCause = IrqCause(1 << 1);
    /// USB/VBUS plugged in
    pub const VBUS_INSERT: IrqCause = IrqCause(1 << 2);
    /// USB/VBUS removed
    pub const VBUS_REMOVE: IrqCause = IrqCause(1 << 3);
    /// Charging finished
    pub const CHARGE_DONE: IrqCause = IrqCause(1 << 4);

    /// Check whether every bit of `other` is set
    pub fn contains(self, other: IrqCause) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for IrqCause {
    type Output = IrqCause;

    fn bitor(self, rhs: IrqCause) -> IrqCause {
        IrqCause(self.0 | rhs.0)
    }
}

/// Trait for the power management IC (battery ADC and IRQ controller)
pub trait PowerIc {
    /// Battery voltage in millivolts
    fn battery_voltage_mv(&mut self) -> u16;

    /// Check if the battery is currently charging
    fn is_charging(&mut self) -> bool;

    /// Read the latched interrupt causes
    fn read_irq_cause(&mut self) -> IrqCause;

    /// Clear all latched interrupts
    fn clear_irq(&mut self);
}

/// Trait for the display backlight PWM
pub trait Backlight {
    /// Set backlight duty (0 = off, 255 = full)
    fn set_level(&mut self, level: u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irq_cause_contains() {
        let cause = IrqCause::PEK_SHORT_PRESS | IrqCause::VBUS_INSERT;
        assert!(cause.contains(IrqCause::PEK_SHORT_PRESS));
        assert!(cause.contains(IrqCause::VBUS_INSERT));
        assert!(!cause.contains(IrqCause::PEK_LONG_PRESS));
        assert!(!cause.contains(IrqCause::NONE));
        assert!(IrqCause::NONE.is_empty());
    }
}
