//! Host module registration.
//!
//! At load time the host runtime gives the extension a namespace to populate.
//! [`init`] binds the module name and each exported operation into it. The
//! host owns the namespace, the loader and the object model; this module only
//! decides which names map to which [`Export`].

use crate::buffer::HostBuffer;
use crate::config::ModuleConfig;
use crate::error::InvalidArgument;
use crate::ops::{xor_host, xor_to_host};

/// Operations the module exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Export {
    /// `xor(out, in)`
    Xor,
    /// `xor_to(out, a, b)`
    XorTo,
}

impl Export {
    /// Number of buffer arguments the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Export::Xor => 2,
            Export::XorTo => 3,
        }
    }

    /// Runs the operation on host-supplied arguments, in call order.
    pub fn call(self, args: &mut [HostBuffer<'_>]) -> Result<(), InvalidArgument> {
        match (self, args) {
            (Export::Xor, [out, input]) => xor_host(out, input),
            (Export::XorTo, [out, a, b]) => xor_to_host(out, a, b),
            (export, args) => Err(InvalidArgument::ArgCount {
                expected: export.arity(),
                got: args.len(),
            }),
        }
    }
}

/// A value stored into the host namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Global {
    Name(&'static str),
    Function(Export),
}

/// The host collaborator: a module namespace accepting named globals.
pub trait Namespace {
    fn store_global(&mut self, name: &'static str, value: Global);
}

/// Symbol/operation pairs bound by `config`.
pub fn exports(config: &ModuleConfig) -> impl Iterator<Item = (&'static str, Export)> {
    let xor_to = config.export_xor_to.then_some((config.xor_to_symbol, Export::XorTo));
    core::iter::once((config.xor_symbol, Export::Xor)).chain(xor_to)
}

/// Populates `ns` with the module name and its exports. Returns the number of
/// functions bound.
pub fn init<N: Namespace + ?Sized>(ns: &mut N, config: &ModuleConfig) -> usize {
    if let Some(level) = config.max_log_level {
        log::set_max_level(level);
    }

    ns.store_global("__name__", Global::Name(config.module_name));
    let mut bound = 0;
    for (symbol, export) in exports(config) {
        log::debug!("{}: binding {} as {:?}", config.module_name, symbol, export);
        ns.store_global(symbol, Global::Function(export));
        bound += 1;
    }
    bound
}
