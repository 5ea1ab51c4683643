use crate::error::{Error, Result};
use crate::io::Ports;
use crate::{cpu::Bus8080, ADDRESS_SPACE};

/// Flat byte-addressable memory of a fixed capacity.
///
/// Addresses are always 16-bit, but the capacity may be smaller than the full
/// 64 KiB address space. Any access at or above the capacity is an error
/// instead of being folded back into range.
#[derive(Clone, Debug)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Allocate a zero-filled memory of `capacity` bytes.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 || capacity > ADDRESS_SPACE {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            bytes: vec![0; capacity],
        })
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    fn check(&self, addr: u16) -> Result<usize> {
        let index = addr as usize;
        if index < self.bytes.len() {
            Ok(index)
        } else {
            Err(Error::MemoryBounds {
                address: addr,
                capacity: self.bytes.len(),
            })
        }
    }

    pub fn read(&self, addr: u16) -> Result<u8> {
        let index = self.check(addr)?;
        Ok(self.bytes[index])
    }

    pub fn write(&mut self, addr: u16, value: u8) -> Result<()> {
        let index = self.check(addr)?;
        self.bytes[index] = value;
        Ok(())
    }

    /// Copy `image` into memory starting at `origin`.
    ///
    /// The whole image must fit below the capacity; nothing is written when
    /// it does not. An empty image is a no-op wherever it is placed.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<()> {
        if image.is_empty() {
            return Ok(());
        }
        let start = origin as usize;
        let end = start + image.len();
        if end > self.bytes.len() {
            let last = end - 1;
            return Err(Error::MemoryBounds {
                address: last.min(u16::MAX as usize) as u16,
                capacity: self.bytes.len(),
            });
        }
        self.bytes[start..end].copy_from_slice(image);
        Ok(())
    }

    /// Zero every byte without changing the capacity.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

/// A bare memory is a bus without any devices on the port side.
impl Bus8080 for Memory {
    fn mem_read(&mut self, addr: u16) -> Result<u8> {
        self.read(addr)
    }

    fn mem_write(&mut self, addr: u16, value: u8) -> Result<()> {
        self.write(addr, value)
    }

    fn mem_check(&mut self, addr: u16) -> Result<()> {
        self.check(addr).map(|_| ())
    }

    fn io_read(&mut self, port: u8) -> u8 {
        crate::io::NullPorts.input(port)
    }

    fn io_write(&mut self, port: u8, value: u8) {
        crate::io::NullPorts.output(port, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_oversized_capacity() {
        assert_eq!(Memory::new(0).unwrap_err(), Error::InvalidCapacity(0));
        assert_eq!(
            Memory::new(ADDRESS_SPACE + 1).unwrap_err(),
            Error::InvalidCapacity(ADDRESS_SPACE + 1)
        );
        assert_eq!(Memory::new(ADDRESS_SPACE).unwrap().capacity(), 0x10000);
    }

    #[test]
    fn read_write_within_capacity() {
        let mut mem = Memory::new(16).unwrap();
        mem.write(0x0F, 0xAB).unwrap();
        assert_eq!(mem.read(0x0F).unwrap(), 0xAB);
        assert_eq!(mem.read(0x00).unwrap(), 0x00);
    }

    #[test]
    fn access_past_capacity_reports_address() {
        let mut mem = Memory::new(16).unwrap();
        let expected = Error::MemoryBounds {
            address: 0x0010,
            capacity: 16,
        };
        assert_eq!(mem.read(0x0010).unwrap_err(), expected);
        assert_eq!(mem.write(0x0010, 1).unwrap_err(), expected);
        assert_eq!(mem.read(0xFFFF).unwrap_err(), Error::MemoryBounds {
            address: 0xFFFF,
            capacity: 16,
        });
    }

    #[test]
    fn load_is_all_or_nothing() {
        let mut mem = Memory::new(8).unwrap();
        mem.load(2, &[1, 2, 3]).unwrap();
        assert_eq!(&mem.as_slice()[..6], &[0, 0, 1, 2, 3, 0]);

        let err = mem.load(6, &[9, 9, 9]).unwrap_err();
        assert_eq!(err, Error::MemoryBounds {
            address: 8,
            capacity: 8,
        });
        assert_eq!(mem.read(6).unwrap(), 0);
        assert_eq!(mem.read(7).unwrap(), 0);
    }

    #[test]
    fn empty_image_loads_anywhere() {
        let mut mem = Memory::new(4).unwrap();
        mem.load(10, &[]).unwrap();
        mem.load(4, &[]).unwrap();
        assert_eq!(mem.load(4, &[1]).unwrap_err(), Error::MemoryBounds {
            address: 4,
            capacity: 4,
        });
    }

    #[test]
    fn clear_zeroes_but_keeps_capacity() {
        let mut mem = Memory::new(4).unwrap();
        mem.load(0, &[1, 2, 3, 4]).unwrap();
        mem.clear();
        assert_eq!(mem.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(mem.capacity(), 4);
    }

    #[test]
    fn mem_check_matches_access_bounds() {
        let mut mem = Memory::new(4).unwrap();
        assert!(mem.mem_check(3).is_ok());
        assert_eq!(mem.mem_check(4).unwrap_err(), Error::MemoryBounds {
            address: 4,
            capacity: 4,
        });
    }

    #[test]
    fn full_address_space_load_at_top() {
        let mut mem = Memory::new(ADDRESS_SPACE).unwrap();
        mem.load(0xFFFE, &[0x12, 0x34]).unwrap();
        assert_eq!(mem.read(0xFFFF).unwrap(), 0x34);
        assert!(mem.load(0xFFFF, &[1, 2]).is_err());
    }
}
