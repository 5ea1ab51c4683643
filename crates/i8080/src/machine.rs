use crate::config::MachineConfig;
use crate::cpu::{Bus8080, Cpu8080, Flag, Register, RegisterPair};
use crate::error::Result;
use crate::io::{NullPorts, Ports};
use crate::memory::Memory;


/// Bus view handed to the CPU for the duration of one step.
struct MachineBus<'a> {
    memory: &'a mut Memory,
    ports: &'a mut (dyn Ports + Send),
}

impl Bus8080 for MachineBus<'_> {
    fn mem_read(&mut self, addr: u16) -> Result<u8> {
        self.memory.read(addr)
    }

    fn mem_write(&mut self, addr: u16, value: u8) -> Result<()> {
        self.memory.write(addr, value)
    }

    fn io_read(&mut self, port: u8) -> u8 {
        self.ports.input(port)
    }

    fn io_write(&mut self, port: u8, value: u8) {
        self.ports.output(port, value)
    }
}

/// One emulated 8080 system: a processor, the memory it runs from and
/// whatever is wired to its I/O ports.
///
/// Every machine owns its state outright, so independent machines can run on
/// separate threads without sharing anything.
pub struct Machine {
    cpu: Cpu8080,
    memory: Memory,
    ports: Box<dyn Ports + Send>,
}

impl Machine {
    /// Create a machine with `memory_size` bytes of memory and default
    /// settings otherwise.
    pub fn new(memory_size: usize) -> Result<Self> {
        Self::with_config(MachineConfig::builder().memory_size(memory_size).build())
    }

    pub fn with_config(config: MachineConfig) -> Result<Self> {
        let memory = Memory::new(config.memory_size)?;
        log::debug!(
            "8080 machine created: {} bytes of memory, undocumented opcodes {:?}",
            config.memory_size,
            config.undocumented_opcodes
        );
        Ok(Self {
            cpu: Cpu8080::with_undocumented(config.undocumented_opcodes),
            memory,
            ports: Box::new(NullPorts),
        })
    }

    /// Replace the devices behind IN/OUT.
    pub fn with_ports(mut self, ports: impl Ports + Send + 'static) -> Self {
        self.ports = Box::new(ports);
        self
    }

    /// Bring the processor back to its initial state. Memory is left as is so
    /// that a loaded program survives.
    pub fn reset(&mut self) {
        self.cpu.reset();
        log::debug!("8080 reset");
    }

    /// Execute exactly one instruction and return the cycles it consumed.
    pub fn step(&mut self) -> Result<u32> {
        let mut bus = MachineBus {
            memory: &mut self.memory,
            ports: self.ports.as_mut(),
        };
        self.cpu.step(&mut bus)
    }

    /// Raise a maskable interrupt carrying `RST vector`; see
    /// [`Cpu8080::interrupt`].
    pub fn interrupt(&mut self, vector: u8) -> Result<Option<u32>> {
        let mut bus = MachineBus {
            memory: &mut self.memory,
            ports: self.ports.as_mut(),
        };
        self.cpu.interrupt(&mut bus, vector)
    }

    pub fn read_byte(&self, addr: u16) -> Result<u8> {
        self.memory.read(addr)
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) -> Result<()> {
        self.memory.write(addr, value)
    }

    /// Install a program image at `origin`.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<()> {
        self.memory.load(origin, image)
    }

    pub fn cpu(&self) -> &Cpu8080 {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu8080 {
        &mut self.cpu
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn register(&self, reg: Register) -> u8 {
        self.cpu.register(reg)
    }

    pub fn set_register(&mut self, reg: Register, value: u8) {
        self.cpu.set_register(reg, value);
    }

    pub fn pair(&self, pair: RegisterPair) -> u16 {
        self.cpu.pair(pair)
    }

    pub fn set_pair(&mut self, pair: RegisterPair, value: u16) {
        self.cpu.set_pair(pair, value);
    }

    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    pub fn set_pc(&mut self, value: u16) {
        self.cpu.set_pc(value);
    }

    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    pub fn set_sp(&mut self, value: u16) {
        self.cpu.set_sp(value);
    }

    pub fn flag(&self, flag: Flag) -> bool {
        self.cpu.get_flag(flag)
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.cpu.set_flag(flag, value);
    }

    pub fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }
}
