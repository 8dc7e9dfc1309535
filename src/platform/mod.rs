//! Real collaborator implementations (subprocess-backed)
//!
//! Everything that launches an external tool lives here; the `core`
//! pipeline only ever sees the `ProbeSession` trait.

pub mod shell;

pub use shell::{resolve_snmpget, ShellProbeSession};
