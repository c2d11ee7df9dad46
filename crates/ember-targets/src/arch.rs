//! Architecture registry.
//!
//! Static mapping from architecture identifiers to their properties.
//! Targets resolve word size through this table only; no target is
//! allowed to hardcode bitness.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// Native word size of an architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordSize {
    Bits32,
    Bits64,
}

impl WordSize {
    /// Word size in bits.
    pub fn bits(self) -> u32 {
        match self {
            WordSize::Bits32 => 32,
            WordSize::Bits64 => 64,
        }
    }
}

/// A CPU architecture the SDK can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arch {
    X86,
    X86_64,
    Armv7,
    Arm64,
}

/// Registry entry describing one architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchSpec {
    /// Canonical identifier, used in build paths and toolchain naming.
    pub id: &'static str,
    /// Native word size.
    pub word_size: WordSize,
}

impl Arch {
    /// All registered architectures.
    pub fn all() -> impl Iterator<Item = Arch> {
        [Arch::X86, Arch::X86_64, Arch::Armv7, Arch::Arm64].into_iter()
    }

    /// Look up this architecture's registry entry.
    pub fn spec(self) -> ArchSpec {
        match self {
            Arch::X86 => ArchSpec {
                id: "x86",
                word_size: WordSize::Bits32,
            },
            Arch::X86_64 => ArchSpec {
                id: "x86_64",
                word_size: WordSize::Bits64,
            },
            Arch::Armv7 => ArchSpec {
                id: "armv7",
                word_size: WordSize::Bits32,
            },
            Arch::Arm64 => ArchSpec {
                id: "arm64",
                word_size: WordSize::Bits64,
            },
        }
    }

    /// Canonical identifier of this architecture.
    pub fn id(self) -> &'static str {
        self.spec().id
    }

    /// Whether this is a 64-bit architecture, per the registry.
    pub fn is_64bit(self) -> bool {
        self.spec().word_size == WordSize::Bits64
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Arch {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arch::all()
            .find(|arch| arch.id() == s)
            .ok_or_else(|| TargetError::UnknownArch {
                name: s.to_string(),
            })
    }
}
