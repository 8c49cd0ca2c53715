// Arithmetic instructions for the 6502 CPU

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// ADC - Add with Carry
    ///
    /// A = A + M + C. The overflow flag is set when both operands share a
    /// sign and the result does not: `((~(A^M)) & (A^result)) & 0x80`.
    ///
    /// Flags affected: C, Z, V, N
    pub fn adc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.add_to_accumulator(value);
    }

    /// SBC - Subtract with Carry
    ///
    /// A = A - M - (1 - C), implemented as ADC of the one's complement.
    ///
    /// Flags affected: C, Z, V, N
    pub fn sbc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.add_to_accumulator(!value);
    }

    /// Shared ADC/SBC core: A = A + value + C with full flag effects
    fn add_to_accumulator(&mut self, value: u8) {
        let carry = if self.get_carry() { 1u16 } else { 0 };
        let sum = self.a as u16 + value as u16 + carry;

        self.set_carry(sum > 0xFF);

        let result = sum as u8;
        let overflow = (!(self.a ^ value)) & (self.a ^ result) & 0x80 != 0;
        self.set_overflow(overflow);

        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// INC - Increment Memory, wrapping 0xFF -> 0x00
    ///
    /// Flags affected: Z, N
    pub fn inc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let result = bus.read(addr_result.address).wrapping_add(1);
        bus.write(addr_result.address, result);
        self.update_zero_and_negative_flags(result);
    }

    /// DEC - Decrement Memory, wrapping 0x00 -> 0xFF
    ///
    /// Flags affected: Z, N
    pub fn dec(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let result = bus.read(addr_result.address).wrapping_sub(1);
        bus.write(addr_result.address, result);
        self.update_zero_and_negative_flags(result);
    }

    /// INX - Increment X Register
    pub fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// INY - Increment Y Register
    pub fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    /// DEX - Decrement X Register
    pub fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// DEY - Decrement Y Register
    pub fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }
}
