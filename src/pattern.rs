//! Ellipsis-run pattern selection.
//!
//! Three policies share one shape: a maximal run of literal periods meeting
//! a length threshold, or the standalone ellipsis glyph. The glyph is always
//! eligible; the digit-adjacency exclusion for literal runs is applied at
//! match offsets in [`crate::clean`] because the `regex` crate has no
//! look-around.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::CleanOptions;
use crate::lazy_regex;

static THREE_PLUS_RE: LazyLock<Regex> = lazy_regex!(r"\.{3,}|…", "three-dot run pattern");

static TWO_PLUS_RE: LazyLock<Regex> = lazy_regex!(r"\.{2,}|…", "two-dot run pattern");

static ANY_DOT_RE: LazyLock<Regex> = lazy_regex!(r"\.+|…", "single-dot run pattern");

/// Run-length policy derived from [`CleanOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunPolicy {
    /// Runs of three or more periods.
    ThreePlus,
    /// Runs of two or more periods.
    TwoPlus,
    /// Every period run, however short.
    AllDots,
}

impl RunPolicy {
    /// `all_dots` wins over `two_dots` when both are set.
    pub(crate) fn from_options(opts: &CleanOptions) -> Self {
        if opts.all_dots {
            Self::AllDots
        } else if opts.two_dots {
            Self::TwoPlus
        } else {
            Self::ThreePlus
        }
    }

    pub(crate) fn regex(self) -> &'static Regex {
        match self {
            Self::ThreePlus => &THREE_PLUS_RE,
            Self::TwoPlus => &TWO_PLUS_RE,
            Self::AllDots => &ANY_DOT_RE,
        }
    }

    /// Whether digit-adjacent literal runs are exempt from removal.
    pub(crate) fn guards_digits(self) -> bool {
        !matches!(self, Self::AllDots)
    }
}
