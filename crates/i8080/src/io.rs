/// Port-mapped I/O as seen by the `IN` and `OUT` instructions.
///
/// The core does not emulate any device; whatever sits behind the 256 ports
/// is supplied by the surrounding machine.
pub trait Ports {
    fn input(&mut self, port: u8) -> u8;
    fn output(&mut self, port: u8, value: u8);
}

/// Ports with nothing attached: reads return 0x00 and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPorts;

impl Ports for NullPorts {
    fn input(&mut self, _port: u8) -> u8 {
        0x00
    }

    fn output(&mut self, _port: u8, _value: u8) {}
}
