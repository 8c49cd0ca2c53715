// Mappers module - cartridge mapper implementations
//
// Contains the mapper factory and the individual mapper implementations.
// Each mapper decides how CPU and PPU addresses map onto cartridge memory.

mod mapper0;

pub use mapper0::Mapper0;

use super::{Cartridge, CartridgeError, Mapper};

/// Create a mapper instance for the given cartridge.
///
/// The mapper number comes from the iNES header. The returned trait object
/// owns the cartridge data and serves all bus traffic for it.
///
/// # Errors
///
/// `CartridgeError::UnsupportedMapper` when the mapper number is not
/// implemented.
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, CartridgeError> {
    match cartridge.mapper {
        0 => Ok(Box::new(Mapper0::new(cartridge))),
        mapper_num => Err(CartridgeError::UnsupportedMapper(mapper_num)),
    }
}
