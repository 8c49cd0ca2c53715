// Logical instructions for the 6502 CPU

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// AND - Bitwise AND with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn and(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        self.a &= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// ORA - Bitwise OR with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn ora(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        self.a |= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// EOR - Bitwise Exclusive OR with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn eor(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        self.a ^= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT - Bit Test
    ///
    /// Z from (A & M) == 0, V from bit 6 of M, N from bit 7 of M.
    /// A is not modified.
    pub fn bit(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);

        self.set_zero(self.a & value == 0);
        self.set_overflow(value & 0x40 != 0);
        self.set_negative(value & 0x80 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imm(value: u8) -> AddressingResult {
        AddressingResult::immediate(value)
    }

    #[test]
    fn test_and() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::test_instance();
        cpu.a = 0b1100_1100;

        cpu.and(&mut bus, &imm(0b1010_1010));

        assert_eq!(cpu.a, 0b1000_1000);
        assert!(cpu.get_negative());
        assert!(!cpu.get_zero());
    }

    #[test]
    fn test_and_to_zero() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::test_instance();
        cpu.a = 0x0F;

        cpu.and(&mut bus, &imm(0xF0));
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());
    }

    #[test]
    fn test_ora() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::test_instance();
        cpu.a = 0x0F;

        cpu.ora(&mut bus, &imm(0x80));

        assert_eq!(cpu.a, 0x8F);
        assert!(cpu.get_negative());
    }

    #[test]
    fn test_eor() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::test_instance();
        cpu.a = 0xFF;

        cpu.eor(&mut bus, &imm(0xFF));

        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());
    }

    #[test]
    fn test_bit_flags_from_memory() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::test_instance();
        bus.write(0x0020, 0b1100_0000);
        cpu.a = 0x01;

        cpu.bit(&mut bus, &AddressingResult::new(0x0020));

        assert!(cpu.get_zero(), "A & M == 0");
        assert!(cpu.get_overflow(), "V from bit 6");
        assert!(cpu.get_negative(), "N from bit 7");
        assert_eq!(cpu.a, 0x01, "A is not modified");
    }

    #[test]
    fn test_bit_nonzero_result() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::test_instance();
        bus.write(0x0020, 0x01);
        cpu.a = 0x01;

        cpu.bit(&mut bus, &AddressingResult::new(0x0020));

        assert!(!cpu.get_zero());
        assert!(!cpu.get_overflow());
        assert!(!cpu.get_negative());
    }
}
