//! Property-level tests of the core cleaning transformation.
//!
//! Covers idempotence, protected-region invariants, digit adjacency, the
//! spacing policies, and the quote/emphasis special-casing through the
//! public API.

use prelude::*;

use unellipsis::{CleanOptions, StructuralTags, clean, clean_stream};

#[fixture]
fn two_dots() -> CleanOptions {
    CleanOptions {
        two_dots: true,
        ..CleanOptions::default()
    }
}

#[rstest]
fn strips_runs_outside_code(two_dots: CleanOptions) {
    let outcome = clean("Hello... world `code...` ```block...```", &two_dots);
    assert_eq!(outcome.text, "Hello world `code...` ```block...```");
    assert_eq!(outcome.removed, 3);
}

#[rstest]
#[case(true, "Hello World", 3)]
#[case(false, "HelloWorld", 3)]
fn spacing_policy_between_words(
    two_dots: CleanOptions,
    #[case] preserve_space: bool,
    #[case] expected: &str,
    #[case] removed: usize,
) {
    let opts = CleanOptions {
        preserve_space,
        ..two_dots
    };
    let outcome = clean("Hello...World", &opts);
    assert_eq!(outcome.text, expected);
    assert_eq!(outcome.removed, removed);
}

#[rstest]
fn no_preserve_takes_the_trailing_space_too(two_dots: CleanOptions) {
    let opts = CleanOptions {
        preserve_space: false,
        ..two_dots
    };
    let outcome = clean("Hello... World", &opts);
    assert_eq!(outcome.text, "HelloWorld");
    assert_eq!(outcome.removed, 4);
}

#[rstest]
#[case("\"")]
#[case("'")]
#[case("*")]
fn marks_suppress_the_replacement_space(two_dots: CleanOptions, #[case] mark: &str) {
    for preserve_space in [true, false] {
        let opts = CleanOptions {
            preserve_space,
            ..two_dots.clone()
        };
        let outcome = clean(&format!("Test...{mark}"), &opts);
        assert_eq!(outcome.text, format!("Test{mark}"));
        assert_eq!(outcome.removed, 3);
    }
}

#[test]
fn digit_adjacent_runs_survive() {
    let outcome = clean("1...2", &CleanOptions::default());
    assert_eq!(outcome.text, "1...2");
    assert_eq!(outcome.removed, 0);
}

#[test]
fn aggressive_mode_removes_digit_adjacent_runs() {
    let opts = CleanOptions {
        all_dots: true,
        ..CleanOptions::default()
    };
    let outcome = clean("1...2", &opts);
    assert_eq!(outcome.text, "1 2");
    assert_eq!(outcome.removed, 3);
}

#[test]
fn glyph_is_eligible_under_the_strictest_policy() {
    let outcome = clean("wait…", &CleanOptions::default());
    assert_eq!(outcome.text, "wait");
    assert_eq!(outcome.removed, 1);
}

#[test]
fn empty_input_is_unchanged() {
    let outcome = clean("", &CleanOptions::default());
    assert_eq!(outcome.text, "");
    assert_eq!(outcome.removed, 0);
}

#[rstest]
fn fenced_content_is_verbatim(two_dots: CleanOptions) {
    let lines = lines_vec!["```", "keep... these", "and.. those", "```"];
    let (out, removed) = clean_stream(&lines, &two_dots);
    assert_eq!(out, lines);
    assert_eq!(removed, 0);
}

#[rstest]
fn nested_structural_tags_are_protected(two_dots: CleanOptions) {
    let opts = CleanOptions {
        protect_tags: true,
        ..two_dots
    };
    let outcome = clean("<div>outer... <span>inner...</span></div>", &opts);
    assert_eq!(outcome.text, "<div>outer <span>inner...</span></div>");
    assert_eq!(outcome.removed, 3);
}

#[rstest]
fn structural_policy_always_masks_the_wrapper(two_dots: CleanOptions) {
    let opts = CleanOptions {
        protect_tags: true,
        structural_tags: StructuralTags::Always,
        ..two_dots
    };
    let text = "<div>outer... <span>inner...</span></div>";
    let outcome = clean(text, &opts);
    assert_eq!(outcome.text, text);
    assert_eq!(outcome.removed, 0);
}

#[rstest]
#[case("Hello... world `code...` ```block...```")]
#[case("Test...\" and *more...*")]
#[case("1...2 and wait… plus a.. b")]
#[case("... at the start, at the end...")]
fn cleaning_twice_removes_nothing_new(two_dots: CleanOptions, #[case] sample: &str) {
    for opts in [
        CleanOptions::default(),
        two_dots.clone(),
        CleanOptions {
            all_dots: true,
            ..CleanOptions::default()
        },
        CleanOptions {
            preserve_space: false,
            ..two_dots.clone()
        },
        CleanOptions {
            protect_tags: true,
            tidy_whitespace: true,
            ..two_dots.clone()
        },
    ] {
        let once = clean(sample, &opts);
        let twice = clean(&once.text, &opts);
        assert_eq!(twice.text, once.text, "text drifted for {sample:?}");
        assert_eq!(twice.removed, 0, "second pass removed for {sample:?}");
    }
}
