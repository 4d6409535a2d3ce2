//! Tracing for registry operations.
//!
//! Every operation that touches the registry has a `*_with` variant taking a
//! `Tracer`. The plain variants pass `NoopTracer`, whose methods are empty and
//! `#[inline(always)]`, so the calls compile away. `PrintTracer` collects one
//! line per event for the CLI's `-v` output.

use typeforge_core::{Colors, TypeDescriptor};

use crate::TypeId;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// New types, instantiations and rejections.
    #[default]
    Default,
    /// Also cache hits and reflections.
    Verbose,
}

/// Instrumentation hooks for registry operations.
pub trait Tracer {
    /// A descriptor was interned. `fresh` is false on a cache hit.
    fn trace_intern(&mut self, id: TypeId, ty: &TypeDescriptor, fresh: bool);

    /// A handle was reflected into its descriptor.
    fn trace_reflect(&mut self, id: TypeId, ty: &TypeDescriptor);

    /// An operation refused a type.
    fn trace_reject(&mut self, operation: &'static str, ty: &TypeDescriptor, reason: &str);

    /// A generic template produced a type.
    fn trace_instantiate(&mut self, template: &str, id: TypeId, cached: bool);
}

/// Tracer that does nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_intern(&mut self, _id: TypeId, _ty: &TypeDescriptor, _fresh: bool) {}

    #[inline(always)]
    fn trace_reflect(&mut self, _id: TypeId, _ty: &TypeDescriptor) {}

    #[inline(always)]
    fn trace_reject(&mut self, _operation: &'static str, _ty: &TypeDescriptor, _reason: &str) {}

    #[inline(always)]
    fn trace_instantiate(&mut self, _template: &str, _id: TypeId, _cached: bool) {}
}

/// Tracer that collects formatted lines.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
            colors,
        }
    }

    /// Collected lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{}", line);
        }
    }

    fn push(&mut self, tag: &str, id: Option<TypeId>, content: String) {
        let c = self.colors;
        let id = id.map_or_else(|| "  -".to_string(), |id| format!("{:>3}", id.to_string()));
        self.lines
            .push(format!("{}{tag:<11} {id}{} {content}", c.meta, c.reset));
    }
}

impl Tracer for PrintTracer {
    fn trace_intern(&mut self, id: TypeId, ty: &TypeDescriptor, fresh: bool) {
        if !fresh && self.verbosity < Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        let tag = if fresh { "intern" } else { "intern-hit" };
        self.push(tag, Some(id), format!("{}{ty}{}", c.name, c.reset));
    }

    fn trace_reflect(&mut self, id: TypeId, ty: &TypeDescriptor) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        self.push("reflect", Some(id), format!("{}{ty}{}", c.name, c.reset));
    }

    fn trace_reject(&mut self, operation: &'static str, ty: &TypeDescriptor, reason: &str) {
        let c = self.colors;
        self.push(
            "reject",
            None,
            format!("{operation} {}{ty}{}: {reason}", c.name, c.reset),
        );
    }

    fn trace_instantiate(&mut self, template: &str, id: TypeId, cached: bool) {
        let c = self.colors;
        let note = if cached { " (cached)" } else { "" };
        self.push(
            "instantiate",
            Some(id),
            format!("{}{template}{}{}{note}{}", c.name, c.reset, c.meta, c.reset),
        );
    }
}
