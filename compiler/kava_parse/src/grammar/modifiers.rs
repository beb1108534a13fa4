//! Pending modifiers and annotations.
//!
//! Annotations come before the construct they decorate, and which construct
//! that is only becomes clear once its header has been read. Modifiers and
//! annotations are therefore collected into a [`PendingModifiers`] buffer,
//! which the next declaration drains. A buffer still holding anything when
//! its scope ends becomes a dangling placeholder, so nothing is dropped.

use kava_diagnostic::ErrorCode;
use kava_ir::ast::{AnnotationId, Dangling, Modifiers};
use kava_ir::{Span, TokenKind};

use crate::{ParseError, Parser};

#[derive(Debug, Default)]
pub(crate) struct PendingModifiers {
    pub(crate) modifiers: Modifiers,
    pub(crate) annotations: Vec<AnnotationId>,
    /// Span of the first buffered modifier or annotation.
    pub(crate) start: Option<Span>,
    /// End of the last buffered modifier or annotation.
    pub(crate) end: u32,
}

impl PendingModifiers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.annotations.is_empty()
    }

    fn note(&mut self, span: Span) {
        if self.start.is_none() {
            self.start = Some(span);
        }
        self.end = span.end;
    }

    /// Drain the buffer, leaving it empty.
    pub(crate) fn take(&mut self) -> PendingModifiers {
        std::mem::take(self)
    }

    /// Start offset of the declaration: the first buffered item, or
    /// `fallback` when nothing was buffered.
    pub(crate) fn start_or(&self, fallback: Span) -> u32 {
        self.start.map_or(fallback.start, |span| span.start)
    }

    pub(crate) fn into_dangling(self) -> Dangling {
        let start = self.start.map_or(self.end, |span| span.start);
        Dangling {
            modifiers: self.modifiers,
            annotations: self.annotations,
            span: Span::new(start, self.end),
        }
    }
}

impl Parser<'_> {
    /// Buffer modifier keywords and annotations at the current position.
    ///
    /// `default` counts as a modifier only where `allow_default` is set and
    /// it is not a `default:` switch label.
    pub(crate) fn parse_modifiers(&mut self, pending: &mut PendingModifiers, allow_default: bool) {
        loop {
            let kind = self.current_kind();
            if kind == TokenKind::At {
                if self.peek_next_kind() == TokenKind::Interface {
                    break;
                }
                let span = self.current_span();
                if let Some(id) = self.parse_annotation() {
                    pending.annotations.push(id);
                    pending.note(span.merge(self.previous_span()));
                }
                continue;
            }
            let is_default = kind == TokenKind::Default
                && allow_default
                && self.peek_next_kind() != TokenKind::Colon;
            if !kind.is_modifier() && !is_default {
                break;
            }
            let Some(flag) = Modifiers::from_token(kind) else {
                break;
            };
            if pending.modifiers.contains(flag) {
                self.push_error(ParseError::new(
                    ErrorCode::E1001,
                    format!("duplicate modifier `{kind}`"),
                    self.current_span(),
                ));
            }
            pending.modifiers |= flag;
            let token = self.advance();
            pending.note(token.span);
        }
    }

    /// Report a buffer that no declaration claimed.
    pub(crate) fn report_dangling(&mut self, pending: &PendingModifiers) {
        let dangling_start = pending.start.map_or(pending.end, |span| span.start);
        self.push_error(ParseError::new(
            ErrorCode::E1009,
            "modifiers or annotations are not followed by a declaration",
            Span::new(dangling_start, pending.end),
        ));
    }
}
