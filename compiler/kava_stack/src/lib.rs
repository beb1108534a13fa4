//! Stack growth for recursive descent over deeply nested source.
//!
//! Editors feed the parser whatever is on screen, including machine-generated
//! files with thousands of nested parentheses or blocks. Every recursive
//! grammar entry point runs inside [`ensure_sufficient_stack`], so nesting
//! depth is bounded by memory rather than by the thread's stack size.
//!
//! On native targets the stack is grown with `stacker`. On `wasm32` the
//! closure is called directly.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
///
/// ```text
/// fn parse_block(&mut self) -> Block {
///     ensure_sufficient_stack(|| self.parse_block_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
