//! Locations of type-use annotations inside compound type references.
//!
//! Paths follow the class-file `type_path` vocabulary: an annotation on the
//! outermost type has the empty path, and each step walks one level in.
//!
//! - Array dimension `i` (leftmost is 0) gets `i` `ARRAY` steps; the element
//!   type sits below all dimensions.
//! - Type argument `i` of a class type gets `TYPE_ARGUMENT(i)`.
//! - The bound of a wildcard gets `WILDCARD`.
//! - In a dotted type name, the `k`-th type segment gets `k` `INNER_TYPE`
//!   steps. Leading lowercase unannotated segments are package names and
//!   do not count.

use std::fmt;

use smallvec::SmallVec;

use crate::ast::{AnnotationId, AstArena, TypeRefId, TypeRefKind, TypeSegment};
use crate::StringInterner;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LocationStep {
    Array,
    InnerType,
    Wildcard,
    TypeArgument(u32),
}

impl fmt::Display for LocationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationStep::Array => f.write_str("ARRAY"),
            LocationStep::InnerType => f.write_str("INNER_TYPE"),
            LocationStep::Wildcard => f.write_str("WILDCARD"),
            LocationStep::TypeArgument(index) => write!(f, "TYPE_ARGUMENT({index})"),
        }
    }
}

/// Path from the outermost type to the annotated part, outer to inner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypeAnnotationLocation {
    steps: SmallVec<[LocationStep; 4]>,
}

impl TypeAnnotationLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: &[LocationStep]) -> Self {
        TypeAnnotationLocation {
            steps: SmallVec::from_slice(steps),
        }
    }

    pub fn steps(&self) -> &[LocationStep] {
        &self.steps
    }

    /// An empty path cannot be told apart from other annotations on the
    /// same outermost type, so it prints as `null`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for TypeAnnotationLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("null");
        }
        f.write_str("[")?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{step}")?;
        }
        f.write_str("]")
    }
}

/// Every annotation reachable inside `root`, with its location, in source order.
pub fn annotation_locations(
    arena: &AstArena,
    interner: &StringInterner,
    root: TypeRefId,
) -> Vec<(AnnotationId, TypeAnnotationLocation)> {
    let mut collector = LocationCollector {
        arena,
        interner,
        path: SmallVec::new(),
        found: Vec::new(),
    };
    collector.collect(root);
    collector
        .found
        .sort_by_key(|(id, _)| arena.annotation(*id).span.start);
    collector.found
}

/// Location of one annotation inside `root`, if it occurs there.
pub fn location_of(
    arena: &AstArena,
    interner: &StringInterner,
    root: TypeRefId,
    annotation: AnnotationId,
) -> Option<TypeAnnotationLocation> {
    annotation_locations(arena, interner, root)
        .into_iter()
        .find(|(id, _)| *id == annotation)
        .map(|(_, location)| location)
}

/// Locations for a declaration whose leading annotations also apply to its
/// type, as with `@A String[] s`.
///
/// Leading annotations land on the element type, below every dimension.
/// The result merges them with the annotations written inside `ty`, in
/// source order.
pub fn declaration_locations(
    arena: &AstArena,
    interner: &StringInterner,
    annotations: &[AnnotationId],
    ty: TypeRefId,
) -> Vec<(AnnotationId, TypeAnnotationLocation)> {
    let dims = match &arena.type_ref(ty).kind {
        TypeRefKind::Array { dims, .. } => dims.len(),
        _ => 0,
    };
    let element = TypeAnnotationLocation {
        steps: std::iter::repeat(LocationStep::Array).take(dims).collect(),
    };
    let mut found: Vec<_> = annotations
        .iter()
        .map(|&id| (id, element.clone()))
        .collect();
    found.extend(annotation_locations(arena, interner, ty));
    found.sort_by_key(|(id, _)| arena.annotation(*id).span.start);
    found
}

struct LocationCollector<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    path: SmallVec<[LocationStep; 4]>,
    found: Vec<(AnnotationId, TypeAnnotationLocation)>,
}

impl LocationCollector<'_> {
    fn record(&mut self, annotations: &[AnnotationId]) {
        for &id in annotations {
            self.found.push((
                id,
                TypeAnnotationLocation {
                    steps: self.path.clone(),
                },
            ));
        }
    }

    fn with_steps(&mut self, step: LocationStep, count: usize, f: impl FnOnce(&mut Self)) {
        let depth = self.path.len();
        self.path.extend(std::iter::repeat(step).take(count));
        f(self);
        self.path.truncate(depth);
    }

    fn collect(&mut self, id: TypeRefId) {
        let arena = self.arena;
        match &arena.type_ref(id).kind {
            TypeRefKind::Primitive { annotations, .. } => self.record(annotations),
            TypeRefKind::Named(segments) => {
                let first_type = self.first_type_segment(segments);
                for (k, segment) in segments.iter().enumerate() {
                    let nesting = k.saturating_sub(first_type);
                    self.with_steps(LocationStep::InnerType, nesting, |this| {
                        this.record(&segment.annotations);
                        for (i, &arg) in segment.type_args.iter().flatten().enumerate() {
                            let index = u32::try_from(i).unwrap_or(u32::MAX);
                            this.with_steps(LocationStep::TypeArgument(index), 1, |this| {
                                this.collect(arg);
                            });
                        }
                    });
                }
            }
            TypeRefKind::Array { element, dims } => {
                for (i, dim) in dims.iter().enumerate() {
                    self.with_steps(LocationStep::Array, i, |this| this.record(&dim.annotations));
                }
                self.with_steps(LocationStep::Array, dims.len(), |this| this.collect(*element));
            }
            TypeRefKind::Wildcard { annotations, bound } => {
                self.record(annotations);
                if let Some(bound) = bound {
                    self.with_steps(LocationStep::Wildcard, 1, |this| this.collect(bound.ty));
                }
            }
            TypeRefKind::Missing | TypeRefKind::Assist => {}
        }
    }

    /// Index of the first segment that names a type rather than a package.
    fn first_type_segment(&self, segments: &[TypeSegment]) -> usize {
        segments
            .iter()
            .position(|segment| {
                !segment.annotations.is_empty()
                    || segment.type_args.is_some()
                    || self
                        .interner
                        .lookup(segment.name)
                        .starts_with(|c: char| c.is_uppercase())
            })
            .unwrap_or_else(|| segments.len().saturating_sub(1))
    }
}
