// Facade Pattern - one entry point over several subsystems
// The facade owns its subsystems and sequences calls across them; callers
// never see the individual pieces.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Example: Lettered subsystems
// ============================================================================

mod lettered {
    use crate::transcript::Transcript;

    pub struct SubsystemA;
    impl SubsystemA {
        pub fn operation_a(&self, log: &Transcript) {
            log.record("SubsystemA operation");
        }
    }

    pub struct SubsystemB;
    impl SubsystemB {
        pub fn operation_b(&self, log: &Transcript) {
            log.record("SubsystemB operation");
        }
    }

    pub struct SubsystemC;
    impl SubsystemC {
        pub fn operation_c(&self, log: &Transcript) {
            log.record("SubsystemC operation");
        }
    }
}

pub struct Facade {
    a: lettered::SubsystemA,
    b: lettered::SubsystemB,
    c: lettered::SubsystemC,
    log: Transcript,
}

impl Facade {
    pub fn new(log: &Transcript) -> Self {
        Self {
            a: lettered::SubsystemA,
            b: lettered::SubsystemB,
            c: lettered::SubsystemC,
            log: log.clone(),
        }
    }

    pub fn operation(&self) {
        self.log.record("Facade operation:");
        self.a.operation_a(&self.log);
        self.b.operation_b(&self.log);
        self.c.operation_c(&self.log);
    }
}

// ============================================================================
// Example: Computer start-up
// ============================================================================

mod hardware {
    use crate::transcript::Transcript;

    pub struct Cpu;
    impl Cpu {
        pub fn freeze(&self, log: &Transcript) {
            log.record("CPU is frozen");
        }

        pub fn jump(&self, position: u64, log: &Transcript) {
            log.record(format!("CPU jumps to position {}", position));
        }

        pub fn execute(&self, log: &Transcript) {
            log.record("CPU is executing");
        }
    }

    #[derive(Default)]
    pub struct Memory {
        pub loaded: usize,
    }
    impl Memory {
        pub fn load(&mut self, position: u64, data: &[u8], log: &Transcript) {
            self.loaded = data.len();
            log.record(format!("Memory loading data at position {}", position));
        }
    }

    pub struct HardDrive;
    impl HardDrive {
        pub fn read(&self, lba: u64, size: usize, log: &Transcript) -> Vec<u8> {
            log.record(format!("HardDrive reading {} bytes from LBA {}", size, lba));
            vec![0; size]
        }
    }
}

const BOOT_ADDRESS: u64 = 0;
const BOOT_SECTOR: u64 = 0;
const BOOT_SECTOR_SIZE: usize = 1024;

pub struct ComputerFacade {
    cpu: hardware::Cpu,
    memory: hardware::Memory,
    hard_drive: hardware::HardDrive,
    log: Transcript,
}

impl ComputerFacade {
    pub fn new(log: &Transcript) -> Self {
        Self {
            cpu: hardware::Cpu,
            memory: hardware::Memory::default(),
            hard_drive: hardware::HardDrive,
            log: log.clone(),
        }
    }

    pub fn start(&mut self) {
        self.cpu.freeze(&self.log);
        let boot = self.hard_drive.read(BOOT_SECTOR, BOOT_SECTOR_SIZE, &self.log);
        self.memory.load(BOOT_ADDRESS, &boot, &self.log);
        self.cpu.jump(BOOT_ADDRESS, &self.log);
        self.cpu.execute(&self.log);
    }

    /// Bytes currently held in memory.
    pub fn loaded_bytes(&self) -> usize {
        self.memory.loaded
    }
}

// ============================================================================
// Drivers
// ============================================================================

pub fn demo_subsystems(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let log = Transcript::new();
    Facade::new(&log).operation();
    log.flush_to(out)?;
    Ok(())
}

pub fn demo_computer(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let log = Transcript::new();
    ComputerFacade::new(&log).start();
    log.flush_to(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_sequence() {
        let log = Transcript::new();
        Facade::new(&log).operation();
        assert_eq!(
            log.lines(),
            vec![
                "Facade operation:",
                "SubsystemA operation",
                "SubsystemB operation",
                "SubsystemC operation",
            ]
        );
    }

    #[test]
    fn test_computer_start() {
        let log = Transcript::new();
        let mut computer = ComputerFacade::new(&log);
        computer.start();
        assert_eq!(
            log.lines(),
            vec![
                "CPU is frozen",
                "HardDrive reading 1024 bytes from LBA 0",
                "Memory loading data at position 0",
                "CPU jumps to position 0",
                "CPU is executing",
            ]
        );
        assert_eq!(computer.loaded_bytes(), 1024);
    }
}
