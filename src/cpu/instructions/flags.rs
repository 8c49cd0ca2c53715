// Flag manipulation instructions for the 6502 CPU

use crate::cpu::{flags, Cpu};

impl Cpu {
    /// CLC - Clear Carry Flag
    pub fn clc(&mut self) {
        self.clear_flag(flags::CARRY);
    }

    /// SEC - Set Carry Flag
    pub fn sec(&mut self) {
        self.set_flag(flags::CARRY);
    }

    /// CLI - Clear Interrupt Disable
    pub fn cli(&mut self) {
        self.clear_flag(flags::INTERRUPT_DISABLE);
    }

    /// SEI - Set Interrupt Disable
    pub fn sei(&mut self) {
        self.set_flag(flags::INTERRUPT_DISABLE);
    }

    /// CLV - Clear Overflow Flag
    pub fn clv(&mut self) {
        self.clear_flag(flags::OVERFLOW);
    }

    /// CLD - Clear Decimal Mode
    pub fn cld(&mut self) {
        self.clear_flag(flags::DECIMAL);
    }

    /// SED - Set Decimal Mode
    ///
    /// The flag is honored but BCD arithmetic is not performed on the NES.
    pub fn sed(&mut self) {
        self.set_flag(flags::DECIMAL);
    }
}
