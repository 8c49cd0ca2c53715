// Shift and rotate instructions for the 6502 CPU
//
// Each operation works either on the accumulator or on memory, selected by
// the addressing mode of the opcode. ASL/ROL shift the outgoing bit 7 into
// carry; LSR/ROR shift bit 0. Rotates feed the old carry in at the other end.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// ASL - Arithmetic Shift Left
    ///
    /// Flags affected: C (from bit 7), Z, N
    pub fn asl(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = self.shift_operand(bus, addr_result, accumulator);
        self.set_carry(value & 0x80 != 0);
        let result = value << 1;
        self.shift_writeback(bus, addr_result, accumulator, result);
    }

    /// LSR - Logical Shift Right
    ///
    /// Flags affected: C (from bit 0), Z, N (N always clears)
    pub fn lsr(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = self.shift_operand(bus, addr_result, accumulator);
        self.set_carry(value & 0x01 != 0);
        let result = value >> 1;
        self.shift_writeback(bus, addr_result, accumulator, result);
    }

    /// ROL - Rotate Left through carry
    ///
    /// Flags affected: C (from bit 7), Z, N
    pub fn rol(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = self.shift_operand(bus, addr_result, accumulator);
        let carry_in = if self.get_carry() { 1 } else { 0 };
        self.set_carry(value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.shift_writeback(bus, addr_result, accumulator, result);
    }

    /// ROR - Rotate Right through carry
    ///
    /// Flags affected: C (from bit 0), Z, N
    pub fn ror(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = self.shift_operand(bus, addr_result, accumulator);
        let carry_in = if self.get_carry() { 0x80 } else { 0 };
        self.set_carry(value & 0x01 != 0);
        let result = (value >> 1) | carry_in;
        self.shift_writeback(bus, addr_result, accumulator, result);
    }

    /// Fetch the value a shift operates on
    #[inline]
    fn shift_operand(&self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) -> u8 {
        if accumulator {
            self.a
        } else {
            bus.read(addr_result.address)
        }
    }

    /// Write a shift result back and update Z/N
    #[inline]
    fn shift_writeback(
        &mut self,
        bus: &mut Bus,
        addr_result: &AddressingResult,
        accumulator: bool,
        result: u8,
    ) {
        if accumulator {
            self.a = result;
        } else {
            bus.write(addr_result.address, result);
        }
        self.update_zero_and_negative_flags(result);
    }
}
