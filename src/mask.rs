//! Protected-region masking and restoration.
//!
//! Before the removal pattern runs, every region the cleaner must not touch
//! is swapped for a short placeholder token and stashed verbatim. Tokens are
//! built from the private-use sentinels U+E000/U+E001, a class letter, and a
//! decimal index, so none of the later patterns (dot runs, backticks, tag
//! delimiters, quote marks) can match into them. Host text never contains
//! the sentinel codepoints.
//!
//! Classes are masked outermost-first: fenced blocks, inline code spans,
//! technical HTML containers, structural HTML containers, bare tag syntax.
//! Restoration walks the classes in reverse so a stashed region that itself
//! contains an earlier class's placeholder is re-expanded on a later pass.
//! Unterminated delimiters simply fail to match and stay ordinary text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::{CleanOptions, StructuralTags};
use crate::lazy_regex;

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static FENCED_RE: LazyLock<Regex> = lazy_regex!(r"(?s)```.*?```", "fenced block pattern");

static INLINE_RE: LazyLock<Regex> = lazy_regex!(r"`[^`\n]*`", "inline span pattern");

// The regex crate has no backreferences, so each protected tag gets its own
// open-to-close alternative.
static TECHNICAL_RE: LazyLock<Regex> = lazy_regex!(
    r"(?is)<code\b[^>]*>.*?</code\s*>|<pre\b[^>]*>.*?</pre\s*>|<kbd\b[^>]*>.*?</kbd\s*>|<samp\b[^>]*>.*?</samp\s*>|<var\b[^>]*>.*?</var\s*>|<tt\b[^>]*>.*?</tt\s*>|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>",
    "technical container pattern",
);

static STRUCTURAL_RE: LazyLock<Regex> = lazy_regex!(
    r"(?is)<p\b[^>]*>.*?</p\s*>|<div\b[^>]*>.*?</div\s*>|<span\b[^>]*>.*?</span\s*>",
    "structural container pattern",
);

static TAG_RE: LazyLock<Regex> = lazy_regex!(r"</?[A-Za-z][^<>]*>", "tag syntax pattern");

static PLACEHOLDER_RE: LazyLock<Regex> =
    lazy_regex!(r"\x{E000}([A-Z])([0-9]+)\x{E001}", "placeholder pattern");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Fence,
    Inline,
    Technical,
    Structural,
    Tag,
}

impl Class {
    fn letter(self) -> &'static str {
        match self {
            Self::Fence => "F",
            Self::Inline => "I",
            Self::Technical => "C",
            Self::Structural => "S",
            Self::Tag => "T",
        }
    }
}

/// Holds the stashed regions of one cleaning invocation.
#[derive(Debug, Default)]
pub(crate) struct Masker {
    stashes: [Vec<String>; 5],
}

impl Masker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Mask every region the options designate as protected.
    pub(crate) fn mask(&mut self, text: &str, opts: &CleanOptions) -> String {
        let mut masked = text.to_string();
        if opts.protect_code {
            masked = self.mask_class(&masked, &FENCED_RE, Class::Fence, |_| true);
            masked = self.mask_class(&masked, &INLINE_RE, Class::Inline, |_| true);
        }
        if opts.protect_tags {
            masked = self.mask_class(&masked, &TECHNICAL_RE, Class::Technical, |_| true);
            match opts.structural_tags {
                StructuralTags::Ignore => {}
                StructuralTags::NestedOnly => {
                    masked = self.mask_structural_nested(&masked);
                }
                StructuralTags::Always => {
                    masked = self.mask_class(&masked, &STRUCTURAL_RE, Class::Structural, |_| true);
                }
            }
            masked = self.mask_class(&masked, &TAG_RE, Class::Tag, |_| true);
        }
        masked
    }

    /// Mask structural containers, leaving a container that wraps the whole
    /// message exposed so its inner text stays cleanable. Structural
    /// elements nested inside that wrapper are still masked.
    fn mask_structural_nested(&mut self, text: &str) -> String {
        let trim_start = text.len() - text.trim_start().len();
        let trim_end = text.trim_end().len();
        let wrapper = STRUCTURAL_RE
            .find(text)
            .filter(|m| m.start() == trim_start && m.end() == trim_end);
        let Some(outer) = wrapper else {
            return self.mask_class(text, &STRUCTURAL_RE, Class::Structural, |_| true);
        };
        let inner_start = text[outer.start()..]
            .find('>')
            .map(|i| outer.start() + i + 1);
        let inner_end = text[..outer.end()].rfind('<');
        if let (Some(start), Some(end)) = (inner_start, inner_end)
            && start <= end
        {
            let inner = self.mask_class(&text[start..end], &STRUCTURAL_RE, Class::Structural, |_| {
                true
            });
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..start]);
            out.push_str(&inner);
            out.push_str(&text[end..]);
            return out;
        }
        text.to_string()
    }

    fn mask_class<F>(&mut self, text: &str, re: &Regex, class: Class, mut mask_it: F) -> String
    where
        F: FnMut(&regex::Match<'_>) -> bool,
    {
        let stash = &mut self.stashes[class as usize];
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in re.find_iter(text) {
            if !mask_it(&m) {
                continue;
            }
            out.push_str(&text[last..m.start()]);
            out.push(OPEN);
            out.push_str(class.letter());
            out.push_str(&stash.len().to_string());
            out.push(CLOSE);
            stash.push(m.as_str().to_string());
            last = m.end();
        }
        if last == 0 {
            return text.to_string();
        }
        out.push_str(&text[last..]);
        out
    }

    /// Swap every placeholder back for its original text.
    pub(crate) fn restore(&self, text: &str) -> String {
        let mut out = text.to_string();
        for class in [
            Class::Tag,
            Class::Structural,
            Class::Technical,
            Class::Inline,
            Class::Fence,
        ] {
            let stash = &self.stashes[class as usize];
            if stash.is_empty() {
                continue;
            }
            out = PLACEHOLDER_RE
                .replace_all(&out, |caps: &Captures<'_>| {
                    if &caps[1] == class.letter()
                        && let Ok(idx) = caps[2].parse::<usize>()
                        && let Some(original) = stash.get(idx)
                    {
                        original.clone()
                    } else {
                        caps[0].to_string()
                    }
                })
                .into_owned();
        }
        out
    }
}
