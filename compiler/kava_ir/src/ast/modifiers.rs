use bitflags::bitflags;

use crate::TokenKind;

bitflags! {
    /// Keyword modifiers on a declaration.
    ///
    /// Annotations are kept separately; they are not flags.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const SYNCHRONIZED = 1 << 5;
        const VOLATILE = 1 << 6;
        const TRANSIENT = 1 << 7;
        const NATIVE = 1 << 8;
        const ABSTRACT = 1 << 9;
        const STRICTFP = 1 << 10;
        /// `default` on an interface method.
        const DEFAULT = 1 << 11;

        const ACCESS = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
    }
}

/// Print order for modifier keywords.
const KEYWORDS: [(Modifiers, &str); 12] = [
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::SYNCHRONIZED, "synchronized"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::NATIVE, "native"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STRICTFP, "strictfp"),
    (Modifiers::DEFAULT, "default"),
];

impl Modifiers {
    /// Map a modifier keyword token to its flag.
    pub fn from_token(kind: TokenKind) -> Option<Modifiers> {
        let flag = match kind {
            TokenKind::Public => Modifiers::PUBLIC,
            TokenKind::Private => Modifiers::PRIVATE,
            TokenKind::Protected => Modifiers::PROTECTED,
            TokenKind::Static => Modifiers::STATIC,
            TokenKind::Final => Modifiers::FINAL,
            TokenKind::Synchronized => Modifiers::SYNCHRONIZED,
            TokenKind::Volatile => Modifiers::VOLATILE,
            TokenKind::Transient => Modifiers::TRANSIENT,
            TokenKind::Native => Modifiers::NATIVE,
            TokenKind::Abstract => Modifiers::ABSTRACT,
            TokenKind::Strictfp => Modifiers::STRICTFP,
            TokenKind::Default => Modifiers::DEFAULT,
            _ => return None,
        };
        Some(flag)
    }

    /// Keyword spellings of the set flags, in canonical order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        KEYWORDS
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| *keyword)
    }

    /// Only the access flags of this set.
    #[must_use]
    pub fn access(self) -> Modifiers {
        self & Modifiers::ACCESS
    }
}
