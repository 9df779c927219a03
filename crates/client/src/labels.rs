//! Display labels for sentinel verse codes.
//!
//! Each context reserves two codes: 0 and 99. One parameterized lookup
//! replaces the per-context helper functions the data set grew up with.

/// Which text a verse code is being rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelContext {
    Chapter,
    Upanishad,
    Gita,
}

/// Render a verse code as its display label.
///
/// Codes 0 and 99 are reserved sentinels per context; anything else renders
/// as its decimal string.
pub fn verse_label(context: LabelContext, code: u32) -> String {
    let label = match (context, code) {
        (LabelContext::Chapter | LabelContext::Upanishad, 0) => "ŚĀNTI MANTRA",
        (LabelContext::Chapter, 99) => "WHOLE CHAPTER",
        (LabelContext::Upanishad, 99) => "WHOLE UPANIṢAD",
        (LabelContext::Gita, 0) => "Whole Chapter",
        (LabelContext::Gita, 99) => "End of Chapter",
        (_, code) => return code.to_string(),
    };

    label.to_string()
}
