//! Shared state for a single CLI invocation.

use std::fmt::Display;

use typeforge_core::{Colors, TypeDescriptor};
use typeforge_lib::{PrintTracer, TypeContext, TypeId, Verbosity};

/// A fresh registry plus the tracer every command reports through.
pub struct Session {
    pub ctx: TypeContext,
    pub tracer: PrintTracer,
    pub colors: Colors,
    trace: bool,
}

impl Session {
    /// `verbose` is the `-v` count: 0 disables the trace, 1 shows new types,
    /// 2 or more also shows cache hits.
    pub fn new(verbose: u8, color: bool) -> Self {
        let colors = Colors::new(color);
        let verbosity = if verbose >= 2 {
            Verbosity::Verbose
        } else {
            Verbosity::Default
        };
        Self {
            ctx: TypeContext::new(),
            tracer: PrintTracer::new(verbosity, colors),
            colors,
            trace: verbose > 0,
        }
    }

    /// Resolve a type name: registry names first, then scalar names such as
    /// `u9`, which are synthesized on demand.
    pub fn resolve(&mut self, name: &str) -> Result<TypeId, String> {
        if let Some(id) = self.ctx.lookup(name) {
            return Ok(id);
        }
        let ty: TypeDescriptor = name.parse().map_err(|e| format!("{e}"))?;
        self.ctx
            .synthesize_with(&ty, &mut self.tracer)
            .map_err(|e| e.to_string())
    }

    /// Print the trace (if enabled).
    pub fn finish(&self) {
        if self.trace {
            self.tracer.print();
        }
    }

    /// Print the trace and the error, then exit with status 1.
    pub fn fail(&self, msg: impl Display) -> ! {
        self.finish();
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}
