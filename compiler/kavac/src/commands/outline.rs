//! The `outline` command: declarations as structural events.

use kava_ir::Span;
use kava_parse::{
    notify_source_elements, FieldInfo, MethodInfo, ParseOptions, RecordingRequestor,
    SourceElement, SourceElementRequestor, TypeInfo,
};

use super::{line_col, load, report_diagnostics};

/// Prints each event as it arrives, indented by nesting depth.
struct PrintingRequestor<'a> {
    source: &'a str,
    depth: usize,
}

impl PrintingRequestor<'_> {
    fn line(&self, event: &SourceElement, start: u32) {
        let (line, _) = line_col(self.source, start);
        let text = event.to_string();
        let text = text.split(" @ ").next().unwrap_or_default();
        println!("{:>4} {}{text}", line, "  ".repeat(self.depth));
    }

    fn enter(&mut self, event: &SourceElement, span: Span) {
        self.line(event, span.start);
        self.depth += 1;
    }

    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl SourceElementRequestor for PrintingRequestor<'_> {
    fn package(&mut self, name: &str, span: Span) {
        let event = SourceElement::Package {
            name: name.to_string(),
            span,
        };
        self.line(&event, span.start);
    }

    fn import(&mut self, name: &str, on_demand: bool, is_static: bool, span: Span) {
        let event = SourceElement::Import {
            name: name.to_string(),
            on_demand,
            is_static,
            span,
        };
        self.line(&event, span.start);
    }

    fn enter_type(&mut self, info: &TypeInfo) {
        self.enter(&SourceElement::EnterType(info.clone()), info.span);
    }

    fn exit_type(&mut self, _end: u32) {
        self.exit();
    }

    fn enter_method(&mut self, info: &MethodInfo) {
        self.enter(&SourceElement::EnterMethod(info.clone()), info.span);
    }

    fn exit_method(&mut self, _end: u32) {
        self.exit();
    }

    fn enter_field(&mut self, info: &FieldInfo) {
        self.enter(&SourceElement::EnterField(info.clone()), info.span);
    }

    fn exit_field(&mut self, _end: u32) {
        self.exit();
    }

    fn enter_initializer(&mut self, is_static: bool, span: Span) {
        self.enter(&SourceElement::EnterInitializer { is_static, span }, span);
    }

    fn exit_initializer(&mut self, _end: u32) {
        self.exit();
    }
}

/// Print the declarations of a file as an indented outline.
///
/// With `--events`, print the raw event stream with byte positions instead.
pub fn outline_file(path: &str, raw_events: bool) {
    let loaded = load(path, ParseOptions::structure());

    if raw_events {
        let mut requestor = RecordingRequestor::new();
        notify_source_elements(&loaded.output, &loaded.interner, &mut requestor);
        for event in &requestor.events {
            println!("{event}");
        }
    } else {
        let mut requestor = PrintingRequestor {
            source: &loaded.source,
            depth: 0,
        };
        notify_source_elements(&loaded.output, &loaded.interner, &mut requestor);
    }

    report_diagnostics(path, &loaded);
}
