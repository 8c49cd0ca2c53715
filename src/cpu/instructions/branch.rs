// Branch instructions for the 6502 CPU
//
// Every branch costs the base 2 cycles, plus 1 when taken, plus 1 more when
// the target lands on a different 256-byte page than the instruction that
// follows the branch. The extra cycles are returned from each handler; the
// base cost comes from the opcode table.

use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// BCC - Branch if Carry Clear
    pub fn bcc(&mut self, addr_result: &AddressingResult) -> u8 {
        self.branch_if(!self.get_flag(flags::CARRY), addr_result)
    }

    /// BCS - Branch if Carry Set
    pub fn bcs(&mut self, addr_result: &AddressingResult) -> u8 {
        self.branch_if(self.get_flag(flags::CARRY), addr_result)
    }

    /// BEQ - Branch if Equal (Z set)
    pub fn beq(&mut self, addr_result: &AddressingResult) -> u8 {
        self.branch_if(self.get_flag(flags::ZERO), addr_result)
    }

    /// BNE - Branch if Not Equal (Z clear)
    pub fn bne(&mut self, addr_result: &AddressingResult) -> u8 {
        self.branch_if(!self.get_flag(flags::ZERO), addr_result)
    }

    /// BMI - Branch if Minus (N set)
    pub fn bmi(&mut self, addr_result: &AddressingResult) -> u8 {
        self.branch_if(self.get_flag(flags::NEGATIVE), addr_result)
    }

    /// BPL - Branch if Plus (N clear)
    pub fn bpl(&mut self, addr_result: &AddressingResult) -> u8 {
        self.branch_if(!self.get_flag(flags::NEGATIVE), addr_result)
    }

    /// BVC - Branch if Overflow Clear
    pub fn bvc(&mut self, addr_result: &AddressingResult) -> u8 {
        self.branch_if(!self.get_flag(flags::OVERFLOW), addr_result)
    }

    /// BVS - Branch if Overflow Set
    pub fn bvs(&mut self, addr_result: &AddressingResult) -> u8 {
        self.branch_if(self.get_flag(flags::OVERFLOW), addr_result)
    }

    /// Shared branch core: returns the extra cycles consumed
    #[inline]
    fn branch_if(&mut self, condition: bool, addr_result: &AddressingResult) -> u8 {
        if !condition {
            return 0;
        }

        self.pc = addr_result.address;
        if addr_result.page_crossed {
            2
        } else {
            1
        }
    }
}
