//! Tracing for subtype checks.
//!
//! # Design: Zero-Cost Abstraction
//!
//! [`crate::is_subtype`] runs with [`NoopTracer`], whose methods are
//! `#[inline(always)]` no-ops, so the untraced check carries no tracing state.
//! [`PrintTracer`] records one line per comparison, indented by depth, with
//! the verdict appended once the comparison finishes. Mismatch reasons are
//! included at [`Verbosity::Verbose`].

use crate::{Type, TypeKind};

/// Why a comparison was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mismatch<'a> {
    /// The subtype's kind cannot stand in for the supertype's kind.
    Kind { sub: TypeKind, sup: TypeKind },
    /// Tuples of different arity.
    Arity { sub: usize, sup: usize },
    /// Named tuples disagree on the name at `index`.
    FieldName {
        index: usize,
        sub: &'a str,
        sup: &'a str,
    },
}

/// Observer of the subtype engine.
///
/// Calls are properly nested: every `trace_enter` is matched by a
/// `trace_exit`, and any `trace_mismatch` in between belongs to the innermost
/// open comparison.
pub trait SubtypeTracer {
    /// Called before comparing `sub` against `sup`.
    fn trace_enter(&mut self, sub: &Type, sup: &Type);

    /// Called when the innermost comparison rejects.
    fn trace_mismatch(&mut self, mismatch: Mismatch<'_>);

    /// Called with the verdict of the innermost open comparison.
    fn trace_exit(&mut self, result: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl SubtypeTracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _sub: &Type, _sup: &Type) {}

    #[inline(always)]
    fn trace_mismatch(&mut self, _mismatch: Mismatch<'_>) {}

    #[inline(always)]
    fn trace_exit(&mut self, _result: bool) {}
}

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// One line per comparison with its verdict.
    #[default]
    Default,
    /// Also explain each rejection.
    Verbose,
}

/// ANSI escapes for each part of a trace line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Type expressions on either side of `<:`.
    pub ty: &'static str,
    /// The `yes` verdict.
    pub accept: &'static str,
    /// The `no` verdict and mismatch reasons.
    pub reject: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        ty: "\x1b[34m",
        accept: "\x1b[32m",
        reject: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        ty: "",
        accept: "",
        reject: "",
        reset: "",
    };
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

/// Configuration for [`PrintTracer`].
#[derive(Clone, Debug, Default)]
pub struct TraceConfig {
    pub(crate) verbosity: Verbosity,
    pub(crate) colors: Colors,
}

impl TraceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbosity(mut self, value: Verbosity) -> Self {
        self.verbosity = value;
        self
    }

    pub fn colors(mut self, value: Colors) -> Self {
        self.colors = value;
        self
    }
}

/// Tracer that collects a readable log of a subtype check.
pub struct PrintTracer {
    config: TraceConfig,
    lines: Vec<String>,
    /// Line index of each open comparison.
    open: Vec<usize>,
}

impl PrintTracer {
    pub fn new(config: TraceConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
            open: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join collected lines.
    pub fn dump(&self) -> String {
        self.lines.join("\n")
    }

    fn indent(&self) -> String {
        "  ".repeat(self.open.len())
    }
}

impl SubtypeTracer for PrintTracer {
    fn trace_enter(&mut self, sub: &Type, sup: &Type) {
        let c = self.config.colors;
        let line = format!(
            "{}{}{sub}{} <: {}{sup}{}",
            self.indent(),
            c.ty,
            c.reset,
            c.ty,
            c.reset
        );
        self.open.push(self.lines.len());
        self.lines.push(line);
    }

    fn trace_mismatch(&mut self, mismatch: Mismatch<'_>) {
        if self.config.verbosity != Verbosity::Verbose {
            return;
        }
        let c = self.config.colors;
        let reason = match mismatch {
            Mismatch::Kind { sub, sup } => format!("{sub} is not a subtype of {sup}"),
            Mismatch::Arity { sub, sup } => format!("arity {sub} differs from {sup}"),
            Mismatch::FieldName { index, sub, sup } => {
                format!("field {index} is named `{sub}`, expected `{sup}`")
            }
        };
        let line = format!("{}{}{reason}{}", self.indent(), c.reject, c.reset);
        self.lines.push(line);
    }

    fn trace_exit(&mut self, result: bool) {
        let Some(index) = self.open.pop() else {
            panic!("PrintTracer: trace_exit without matching trace_enter");
        };
        let c = self.config.colors;
        let verdict = if result {
            format!("  {}yes{}", c.accept, c.reset)
        } else {
            format!("  {}no{}", c.reject, c.reset)
        };
        self.lines[index].push_str(&verdict);
    }
}
