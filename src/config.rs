//! Cleaning policy values.
//!
//! A [`CleanOptions`] is constructed by the caller for each invocation (or
//! session) and passed by reference into the cleaning functions. Defaults
//! live in the [`Default`] impl; callers merge overrides with struct update
//! syntax rather than mutating shared state.

/// Policy for structural HTML containers (`p`, `div`, `span`) when tag
/// protection is enabled.
///
/// A message is often delivered wrapped in a single structural element.
/// Masking that wrapper would protect the entire message and turn the
/// cleaner into a no-op, so the default only masks structural elements
/// nested inside other text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructuralTags {
    /// Leave structural containers unmasked; their inner text is cleaned.
    Ignore,
    /// Mask structural containers unless one spans the entire message.
    #[default]
    NestedOnly,
    /// Mask every structural container.
    Always,
}

/// Policy knobs for one cleaning pass.
///
/// `all_dots` takes precedence over `two_dots` when both are set.
///
/// # Examples
///
/// ```
/// use unellipsis::CleanOptions;
///
/// let opts = CleanOptions {
///     two_dots: true,
///     ..CleanOptions::default()
/// };
/// assert!(opts.preserve_space);
/// assert!(opts.protect_code);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// Treat runs of two or more periods as ellipses instead of three or
    /// more.
    pub two_dots: bool,
    /// Aggressive mode: every period run counts, digit-adjacent runs
    /// included.
    pub all_dots: bool,
    /// Replace a removed run with a single space when deleting it outright
    /// would join two words.
    pub preserve_space: bool,
    /// Mask fenced code blocks and inline code spans before matching.
    pub protect_code: bool,
    /// Mask technical HTML containers and bare tag syntax before matching.
    pub protect_tags: bool,
    /// How structural HTML containers are treated when `protect_tags` is
    /// set.
    pub structural_tags: StructuralTags,
    /// Collapse doubled spaces and runs of blank lines after removal.
    pub tidy_whitespace: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            two_dots: false,
            all_dots: false,
            preserve_space: true,
            protect_code: true,
            protect_tags: false,
            structural_tags: StructuralTags::default(),
            tidy_whitespace: false,
        }
    }
}
